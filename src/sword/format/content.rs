//! # Verse Content Extraction
//!
//! Turns located records into bytes and text. Sits between the `reader`
//! (which owns the files) and the `codec` (pure data transformation).
//!
//! ## Responsibilities
//! 1.  **Compressed buffers**: read a buffer's bytes from the `.bzz` file and inflate them.
//! 2.  **Slicing**: cut one verse out of an inflated buffer, checking bounds.
//! 3.  **Raw text**: read a verse's byte range directly from a raw text file.
//! 4.  **Decoding**: turn bytes into text under the module encoding, lossily.

use std::io::{Read, Seek, SeekFrom};

use encoding_rs::Encoding;
use log::trace;

use crate::sword::codec::compression;
use crate::sword::format::index::read_exact_or_corrupt;
use crate::sword::types::error::{Result, SwordError};
use crate::sword::types::models::{BufferLocation, Testament};

/// Reads and inflates one compressed buffer.
pub fn read_compressed_buffer<R: Read + Seek>(
    file: &mut R,
    testament: Testament,
    location: &BufferLocation,
) -> Result<Vec<u8>> {
    trace!(
        "Reading {} compressed buffer at {} ({} bytes)",
        testament,
        location.offset,
        location.compressed_size
    );
    file.seek(SeekFrom::Start(location.offset as u64))?;
    let mut compressed = vec![0u8; location.compressed_size as usize];
    read_exact_or_corrupt(file, &mut compressed, testament, "compressed buffer")?;
    compression::inflate(&compressed, location.uncompressed_size as u64)
}

/// Extracts `length` bytes at `start` from an inflated buffer.
pub fn slice_buffer(
    buffer: &[u8],
    testament: Testament,
    start: u32,
    length: u32,
) -> Result<&[u8]> {
    let start = start as usize;
    let end = start + length as usize;
    buffer.get(start..end).ok_or_else(|| SwordError::CorruptIndex {
        testament,
        reason: format!(
            "verse location [{}..{}] is out of bounds for buffer of size {}",
            start,
            end,
            buffer.len()
        ),
    })
}

/// Reads `length` bytes at `offset` from a raw text file.
pub fn read_raw_text<R: Read + Seek>(
    file: &mut R,
    testament: Testament,
    offset: u32,
    length: u32,
) -> Result<Vec<u8>> {
    trace!("Reading {} raw text at {} ({} bytes)", testament, offset, length);
    file.seek(SeekFrom::Start(offset as u64))?;
    let mut bytes = vec![0u8; length as usize];
    read_exact_or_corrupt(file, &mut bytes, testament, "raw text")?;
    Ok(bytes)
}

/// Decodes verse bytes, replacing invalid sequences and stripping trailing NULs.
pub fn decode_text(bytes: &[u8], encoding: &'static Encoding) -> String {
    let (text, _, _) = encoding.decode(bytes);
    text.trim_end_matches('\0').to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use encoding_rs::{UTF_8, WINDOWS_1252};
    use flate2::write::ZlibEncoder;
    use flate2::Compression;
    use std::io::{Cursor, Write};

    #[test]
    fn reads_and_inflates_buffer_at_offset() {
        let text = b"Jesus wept.";
        let mut encoder = ZlibEncoder::new(Vec::new(), Compression::best());
        encoder.write_all(text).unwrap();
        let compressed = encoder.finish().unwrap();

        let mut file = vec![0xAAu8; 7];
        file.extend_from_slice(&compressed);
        let location = BufferLocation {
            offset: 7,
            compressed_size: compressed.len() as u32,
            uncompressed_size: text.len() as u32,
        };
        let buffer =
            read_compressed_buffer(&mut Cursor::new(file), Testament::New, &location).unwrap();
        assert_eq!(buffer, text);
        assert_eq!(slice_buffer(&buffer, Testament::New, 6, 4).unwrap(), b"wept");
    }

    #[test]
    fn slice_past_end_is_corrupt() {
        let err = slice_buffer(b"short", Testament::Old, 3, 5).unwrap_err();
        assert!(matches!(err, SwordError::CorruptIndex { .. }));
    }

    #[test]
    fn raw_text_range() {
        let mut file = Cursor::new(b"Gen 1:1Gen 1:2".to_vec());
        assert_eq!(read_raw_text(&mut file, Testament::Old, 7, 7).unwrap(), b"Gen 1:2");
        assert!(read_raw_text(&mut file, Testament::Old, 10, 7).is_err());
    }

    #[test]
    fn decoding_is_lossy_and_encoding_aware() {
        assert_eq!(decode_text(b"caf\xe9", WINDOWS_1252), "café");
        assert_eq!(decode_text(b"caf\xe9", UTF_8), "caf\u{FFFD}");
        assert_eq!(decode_text(b"amen\0\0", UTF_8), "amen");
    }
}
