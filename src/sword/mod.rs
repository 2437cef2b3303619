//! Core SWORD Bible module reader

pub mod canon;
pub mod codec;
pub mod format;
pub mod iter;
pub mod modules;
pub mod reader;
pub mod structure;
pub mod types;
pub mod utils;

pub use canon::Versification;
pub use iter::{SlotVerseIterator, VerseIterator};
pub use modules::SwordModules;
pub use reader::{SwordBible, SwordBibleOptions};
pub use structure::bible::BibleStructure;
pub use structure::book::BookStructure;
pub use structure::reference::{Reference, ResolvedReference};
pub use types::error::{Result, SwordError};
pub use types::models::{BufferLocation, IndexRecord, ModuleFormat, Testament};
