//! Codec layer for compression operations.
//!
//! - [`compression`][]: zlib inflation of compressed text buffers

pub mod compression;
