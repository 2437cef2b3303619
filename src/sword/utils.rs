//! Small helpers shared across the crate.

use encoding_rs::{Encoding, UTF_16LE, UTF_8, WINDOWS_1252};
use log::warn;

/// Maps a module's declared encoding to an `encoding_rs` encoding.
///
/// SWORD writes `UTF-8`, `Latin-1` or `UTF-16`; anything else is tried as a
/// WHATWG label and falls back to Latin-1, the SWORD default.
pub fn parse_encoding(label: &str) -> &'static Encoding {
    match label.trim().to_ascii_lowercase().as_str() {
        "utf-8" | "utf8" => UTF_8,
        "latin-1" | "latin1" | "iso-8859-1" => WINDOWS_1252,
        "utf-16" | "utf16" | "utf-16le" => UTF_16LE,
        other => Encoding::for_label(other.as_bytes()).unwrap_or_else(|| {
            warn!("Unknown encoding '{}', falling back to Latin-1", label);
            WINDOWS_1252
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sword_encoding_names() {
        assert_eq!(parse_encoding("UTF-8"), UTF_8);
        assert_eq!(parse_encoding("Latin-1"), WINDOWS_1252);
        assert_eq!(parse_encoding("UTF-16"), UTF_16LE);
        assert_eq!(parse_encoding("koi8-r"), encoding_rs::KOI8_R);
        assert_eq!(parse_encoding("ebcdic?"), WINDOWS_1252);
    }
}
