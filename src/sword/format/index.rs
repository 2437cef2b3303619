//! Fixed-size index records.
//!
//! Every testament carries an index file with one densely packed record per
//! slot, so the record for slot `n` starts at byte `record_size * n`.
//! Compressed layouts also carry a buffer-location file with one 12-byte
//! `(offset, compressed_size, uncompressed_size)` record per buffer.

use std::io::{ErrorKind, Read, Seek, SeekFrom};

use byteorder::{ByteOrder, LittleEndian};
use log::trace;

use crate::sword::types::error::{Result, SwordError};
use crate::sword::types::models::{BufferLocation, IndexRecord, ModuleFormat, Testament};

/// Size of one buffer-location record.
pub const BUFFER_LOCATION_SIZE: u64 = 12;

/// Decodes one index record. `bytes` must be exactly `format.record_size()` long.
pub fn decode_index_record(bytes: &[u8], format: ModuleFormat) -> IndexRecord {
    let read_length = |b: &[u8]| match format.length_width() {
        2 => LittleEndian::read_u16(b) as u32,
        _ => LittleEndian::read_u32(b),
    };
    if format.is_compressed() {
        IndexRecord::Compressed {
            buffer_id: LittleEndian::read_u32(&bytes[0..4]),
            start: LittleEndian::read_u32(&bytes[4..8]),
            length: read_length(&bytes[8..]),
        }
    } else {
        IndexRecord::Raw {
            offset: LittleEndian::read_u32(&bytes[0..4]),
            length: read_length(&bytes[4..]),
        }
    }
}

/// Decodes one 12-byte buffer-location record.
pub fn decode_buffer_location(bytes: &[u8]) -> BufferLocation {
    BufferLocation {
        offset: LittleEndian::read_u32(&bytes[0..4]),
        compressed_size: LittleEndian::read_u32(&bytes[4..8]),
        uncompressed_size: LittleEndian::read_u32(&bytes[8..12]),
    }
}

/// Reads the index record for `index` from a testament's index file.
///
/// # Errors
/// [`SwordError::CorruptIndex`] if `index` is not below `record_count` or the
/// file ends before the record is complete.
pub fn read_index_record<R: Read + Seek>(
    file: &mut R,
    format: ModuleFormat,
    testament: Testament,
    index: u64,
    record_count: u64,
) -> Result<IndexRecord> {
    if index >= record_count {
        return Err(SwordError::CorruptIndex {
            testament,
            reason: format!("slot {} is beyond the {} indexed slots", index, record_count),
        });
    }
    let record_size = format.record_size();
    trace!("Reading {} index record {} at byte {}", testament, index, record_size * index);
    file.seek(SeekFrom::Start(record_size * index))?;
    let mut bytes = vec![0u8; record_size as usize];
    read_exact_or_corrupt(file, &mut bytes, testament, "index record")?;
    Ok(decode_index_record(&bytes, format))
}

/// Reads the location of compressed buffer `buffer_id`.
pub fn read_buffer_location<R: Read + Seek>(
    file: &mut R,
    testament: Testament,
    buffer_id: u32,
) -> Result<BufferLocation> {
    file.seek(SeekFrom::Start(BUFFER_LOCATION_SIZE * buffer_id as u64))?;
    let mut bytes = [0u8; BUFFER_LOCATION_SIZE as usize];
    read_exact_or_corrupt(file, &mut bytes, testament, "buffer location")?;
    Ok(decode_buffer_location(&bytes))
}

/// `read_exact` that reports truncation as index corruption rather than I/O failure.
pub(crate) fn read_exact_or_corrupt<R: Read>(
    file: &mut R,
    buf: &mut [u8],
    testament: Testament,
    what: &str,
) -> Result<()> {
    file.read_exact(buf).map_err(|e| match e.kind() {
        ErrorKind::UnexpectedEof => SwordError::CorruptIndex {
            testament,
            reason: format!("truncated {} ({} bytes expected)", what, buf.len()),
        },
        _ => SwordError::Io(e),
    })
}
