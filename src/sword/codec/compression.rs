//! Decompression of zText buffers.
//!
//! Every compressed module buffer is a standalone zlib stream (deflate with
//! the zlib header and Adler-32 trailer).

use std::io::Read;

use flate2::read::ZlibDecoder;
use log::{trace, warn};

use crate::sword::types::error::{Result, SwordError};

/// Upper bound on the preallocation, as a multiple of the payload size.
const MAX_EXPANSION_HINT: u64 = 16;

/// Initial output capacity: the recorded size, unless a corrupt record
/// claims more than the payload could plausibly expand to.
fn capacity_hint(payload_len: usize, expected_size: u64) -> usize {
    expected_size.min((payload_len as u64).saturating_mul(MAX_EXPANSION_HINT)) as usize
}

/// Inflates a zlib payload.
///
/// `expected_size` is the uncompressed size recorded alongside the buffer. It
/// is used as a capacity hint; a differing result is logged, not rejected,
/// since verse records address the inflated bytes directly.
///
/// # Errors
/// Returns [`SwordError::DecompressionError`] if the payload is not a valid
/// zlib stream.
pub fn inflate(payload: &[u8], expected_size: u64) -> Result<Vec<u8>> {
    trace!(
        "Decompressing with Zlib: {} bytes -> {} bytes (expected)",
        payload.len(),
        expected_size
    );
    let mut output = Vec::with_capacity(capacity_hint(payload.len(), expected_size));
    let mut decoder = ZlibDecoder::new(payload);
    decoder.read_to_end(&mut output).map_err(|e| {
        SwordError::DecompressionError(format!("Zlib decompression failed: {}", e))
    })?;

    if output.len() as u64 != expected_size {
        warn!(
            "Inflated buffer size differs from recorded size: expected {}, got {}",
            expected_size,
            output.len()
        );
    }
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::ZlibEncoder;
    use flate2::Compression;
    use std::io::Write;

    #[test]
    fn inflates_zlib_stream() {
        let text = b"In the beginning God created the heaven and the earth.";
        let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(text).unwrap();
        let compressed = encoder.finish().unwrap();

        let inflated = inflate(&compressed, text.len() as u64).unwrap();
        assert_eq!(inflated, text);
    }

    #[test]
    fn oversized_recorded_size_is_not_preallocated() {
        let text = b"Jesus wept.";
        let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(text).unwrap();
        let compressed = encoder.finish().unwrap();

        assert_eq!(capacity_hint(compressed.len(), u32::MAX as u64), compressed.len() * 16);
        assert_eq!(capacity_hint(100, 11), 11);
        let inflated = inflate(&compressed, u32::MAX as u64).unwrap();
        assert_eq!(inflated, text);
        assert!(inflated.capacity() < 1 << 20);
    }

    #[test]
    fn rejects_garbage() {
        let err = inflate(b"definitely not zlib", 100).unwrap_err();
        assert!(matches!(err, SwordError::DecompressionError(_)));
    }
}
