//! On-disk format layer for SWORD Bible modules.
//!
//! This module provides the mid-level parsing layer that bridges between
//! raw file I/O and the high-level [`SwordBible`](crate::sword::reader::SwordBible).
//!
//! # Module Organization
//!
//! - [`index`]: Decodes fixed-size index and buffer-location records
//! - [`content`]: Inflates buffers, slices verses and decodes text
//! - [`conf`]: Parses the `mods.d/*.conf` files describing installed modules
//!
//! # Architecture
//!
//! ```text
//! Compressed (zText, zText4)        Raw (RawText, RawText4)
//! ┌──────────┐                      ┌──────────┐
//! │ ot.bzv   │ ← index              │ ot.vss   │ ← index
//! ├──────────┤                      ├──────────┤
//! │ ot.bzs   │ ← index (buffers)    │ ot       │ ← content
//! ├──────────┤                      └──────────┘
//! │ ot.bzz   │ ← content
//! └──────────┘
//! ```

pub mod conf;
pub mod content;
pub mod index;
