//! # sword-reader
//!
//! A reader for SWORD project Bible modules.
//! Supports the compressed (`zText`, `zText4`) and raw (`RawText`, `RawText4`)
//! layouts, addressed by book, chapter and verse under the module's versification.
//!
//! ```no_run
//! use sword_reader::{Reference, SwordModules};
//!
//! let mut modules = SwordModules::new("/home/me/.sword");
//! modules.parse_modules()?;
//! let kjv = modules.get_bible_from_module("KJV")?;
//! println!("{}", kjv.get_default(&Reference::book("John").chapter(3).verse(16))?);
//! # Ok::<(), sword_reader::SwordError>(())
//! ```
pub mod sword;

// Re-export the main types for convenience
pub use sword::{
    BibleStructure,
    BookStructure,
    BufferLocation,
    IndexRecord,
    ModuleFormat,
    Reference,
    ResolvedReference,
    Result,
    SlotVerseIterator,
    SwordBible,
    SwordBibleOptions,
    SwordError,
    SwordModules,
    Testament,
    VerseIterator,
    Versification,
};
