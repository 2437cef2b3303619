//! Custom error types for the sword-reader crate.

use thiserror::Error;

use super::models::{ModuleFormat, Testament};

/// The primary error type for all operations in this crate.
#[derive(Debug, Error)]
pub enum SwordError {
    /// An error originating from I/O operations.
    #[error("I/O error: {0:?}")]
    Io(#[from] std::io::Error),

    /// A versification name outside the known set was requested in strict mode.
    #[error("Unknown versification scheme: {0}")]
    UnknownScheme(String),

    /// A module driver name that does not map to one of the supported layouts.
    #[error("Unknown module format: {0}. Expected one of zText, zText4, RawText, RawText4.")]
    UnknownFormat(String),

    /// No book in the versification matches the given name, OSIS id or abbreviation.
    #[error("Book name '{0}' does not exist in the versification")]
    BookNotFound(String),

    /// A chapter number outside `1..=num_chapters` for the book.
    #[error("Chapter {chapter} is out of range for {book} (1..={num_chapters})")]
    ChapterOutOfRange {
        book: &'static str,
        chapter: u32,
        num_chapters: u32,
    },

    /// A verse number outside `1..=num_verses` for the chapter.
    #[error("Verse {book} {chapter}:{verse} is out of range (chapter has {num_verses} verses)")]
    VerseOutOfRange {
        book: &'static str,
        chapter: u32,
        verse: u32,
        num_verses: u32,
    },

    /// Neither the Old nor the New Testament files could be opened.
    #[error("Could not open OT or NT files for module at {0}")]
    ModuleUnavailable(String),

    /// The testament exists in the versification but the module carries no files for it.
    #[error("Module has no {0} files")]
    TestamentMissing(Testament),

    /// An index record is out of range or truncated.
    #[error("Corrupt index for {testament}: {reason}")]
    CorruptIndex {
        testament: Testament,
        reason: String,
    },

    /// A compressed-buffer operation was requested on a raw-text module.
    #[error("{0} modules store uncompressed text")]
    NotCompressed(ModuleFormat),

    /// A compressed buffer could not be inflated.
    #[error("Decompression failed: {0}")]
    DecompressionError(String),

    /// No module with the given id was found while scanning `mods.d`.
    #[error("Module '{0}' is not installed")]
    ModuleNotFound(String),

    /// A module configuration file is structurally invalid or lacks a required key.
    #[error("Invalid module configuration: {0}")]
    InvalidConf(String),

    /// A zipped SWORD root could not be read or extracted.
    #[error("Invalid module archive: {0}")]
    Archive(#[from] zip::result::ZipError),

    /// A lock was poisoned, indicating a panic in another thread holding it.
    #[error("A lock was poisoned, indicating a panic in another thread holding it.")]
    LockPoisoned,
}

/// A convenience `Result` type alias using the crate's `SwordError` type.
pub type Result<T> = std::result::Result<T, SwordError>;
