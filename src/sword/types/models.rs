//! Core data structures for SWORD module components.
//!
//! This module defines the fundamental types used throughout the library:
//! - Testament identifiers and their on-disk file naming
//! - The four record layouts a module may use
//! - Decoded index and buffer-location records

use std::fmt;
use std::str::FromStr;

use super::error::{Result, SwordError};

/// One of the two top-level divisions of the canon.
///
/// Each testament has its own file set on disk and its own flat index space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Testament {
    Old,
    New,
}

impl Testament {
    /// Both testaments, in canon order.
    pub const ALL: [Testament; 2] = [Testament::Old, Testament::New];

    /// The lowercase file-name prefix used on disk (`ot` / `nt`).
    pub fn code(&self) -> &'static str {
        match self {
            Testament::Old => "ot",
            Testament::New => "nt",
        }
    }

    /// Position of this testament in two-slot arrays.
    pub(crate) fn slot(&self) -> usize {
        match self {
            Testament::Old => 0,
            Testament::New => 1,
        }
    }
}

impl fmt::Display for Testament {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Testament::Old => f.write_str("OT"),
            Testament::New => f.write_str("NT"),
        }
    }
}

/// The on-disk record layout of a Bible module.
///
/// | Variant    | Index record                          | Text location                  |
/// |------------|---------------------------------------|--------------------------------|
/// | `ZText`    | buffer id (4), start (4), length (2)  | slice of an inflated buffer    |
/// | `ZText4`   | buffer id (4), start (4), length (4)  | slice of an inflated buffer    |
/// | `RawText`  | offset (4), length (2)                | byte range of the text file    |
/// | `RawText4` | offset (4), length (4)                | byte range of the text file    |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModuleFormat {
    ZText,
    ZText4,
    RawText,
    RawText4,
}

impl ModuleFormat {
    /// Size in bytes of one index record.
    pub fn record_size(&self) -> u64 {
        match self {
            ModuleFormat::ZText => 10,
            ModuleFormat::ZText4 => 12,
            ModuleFormat::RawText => 6,
            ModuleFormat::RawText4 => 8,
        }
    }

    /// Byte width of the length field at the end of each index record.
    pub fn length_width(&self) -> usize {
        match self {
            ModuleFormat::ZText | ModuleFormat::RawText => 2,
            ModuleFormat::ZText4 | ModuleFormat::RawText4 => 4,
        }
    }

    /// Whether verse text lives in zlib-compressed shared buffers.
    pub fn is_compressed(&self) -> bool {
        matches!(self, ModuleFormat::ZText | ModuleFormat::ZText4)
    }

    /// The SWORD driver name (`ModDrv` in module configuration files).
    pub fn driver_name(&self) -> &'static str {
        match self {
            ModuleFormat::ZText => "zText",
            ModuleFormat::ZText4 => "zText4",
            ModuleFormat::RawText => "RawText",
            ModuleFormat::RawText4 => "RawText4",
        }
    }

    /// File names for one testament, in `[index, buffer locations, text]` order
    /// for compressed layouts and `[index, text]` order for raw layouts.
    pub fn file_names(&self, testament: Testament) -> Vec<String> {
        let code = testament.code();
        if self.is_compressed() {
            vec![
                format!("{code}.bzv"),
                format!("{code}.bzs"),
                format!("{code}.bzz"),
            ]
        } else {
            vec![format!("{code}.vss"), code.to_string()]
        }
    }
}

impl FromStr for ModuleFormat {
    type Err = SwordError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ztext" => Ok(Self::ZText),
            "ztext4" => Ok(Self::ZText4),
            "rawtext" => Ok(Self::RawText),
            "rawtext4" => Ok(Self::RawText4),
            _ => Err(SwordError::UnknownFormat(s.to_string())),
        }
    }
}

impl fmt::Display for ModuleFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.driver_name())
    }
}

/// A decoded index record: where one slot's text lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexRecord {
    /// Text is `length` bytes at `start` within inflated buffer `buffer_id`.
    Compressed {
        buffer_id: u32,
        start: u32,
        length: u32,
    },
    /// Text is `length` bytes at `offset` within the testament's text file.
    Raw { offset: u32, length: u32 },
}

impl IndexRecord {
    /// Length in bytes of the slot's text.
    pub fn len(&self) -> u32 {
        match self {
            IndexRecord::Compressed { length, .. } | IndexRecord::Raw { length, .. } => *length,
        }
    }

    /// Whether the slot carries no text (typical for headings).
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Location of one compressed buffer within the `.bzz` file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferLocation {
    /// Absolute byte offset where the compressed data begins.
    pub offset: u32,
    /// Size of the compressed data as stored in the file (bytes).
    pub compressed_size: u32,
    /// Size of the buffer after inflation (bytes).
    pub uncompressed_size: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_names_parse_case_insensitively() {
        assert_eq!("zText".parse::<ModuleFormat>().unwrap(), ModuleFormat::ZText);
        assert_eq!("ZTEXT4".parse::<ModuleFormat>().unwrap(), ModuleFormat::ZText4);
        assert_eq!("rawtext".parse::<ModuleFormat>().unwrap(), ModuleFormat::RawText);
        assert_eq!("RawText4".parse::<ModuleFormat>().unwrap(), ModuleFormat::RawText4);
        assert!(matches!(
            "zCom".parse::<ModuleFormat>(),
            Err(SwordError::UnknownFormat(_))
        ));
    }

    #[test]
    fn file_names_follow_sword_layout() {
        assert_eq!(
            ModuleFormat::ZText.file_names(Testament::New),
            vec!["nt.bzv", "nt.bzs", "nt.bzz"]
        );
        assert_eq!(
            ModuleFormat::RawText4.file_names(Testament::Old),
            vec!["ot.vss", "ot"]
        );
    }

    #[test]
    fn record_sizes() {
        assert_eq!(ModuleFormat::ZText.record_size(), 10);
        assert_eq!(ModuleFormat::ZText4.record_size(), 12);
        assert_eq!(ModuleFormat::RawText.record_size(), 6);
        assert_eq!(ModuleFormat::RawText4.record_size(), 8);
    }
}
