//! Versification structure: maps book/chapter/verse to flat slot indices.
//!
//! - [`book`]: per-book chapter and verse offsets
//! - [`bible`]: book lookup and per-testament offsets for a whole canon
//! - [`reference`]: the request type and its resolved form

pub mod bible;
pub mod book;
pub mod reference;
