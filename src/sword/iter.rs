//! Lazy iteration over the verses of a resolved reference.
//!
//! # Example
//! ```no_run
//! # use sword_reader::{ModuleFormat, Reference, SwordBible};
//! # let bible = SwordBible::open("modules/texts/ztext/kjv", ModuleFormat::ZText, "kjv").unwrap();
//! for verse in bible.read_reference(&Reference::book("Ps").chapter(23)).unwrap() {
//!     println!("{}", verse.unwrap());
//! }
//! ```

use std::vec::IntoIter;

use super::reader::SwordBible;
use super::structure::reference::ResolvedReference;
use super::types::error::Result;
use super::types::models::Testament;

/// Iterator over verse texts, reading one slot from disk per step.
///
/// Yields `Result<String>`; a failed slot yields an error and iteration may
/// continue with the next slot. Cloning restarts from the clone's position.
#[derive(Debug, Clone)]
pub struct VerseIterator<'a> {
    bible: &'a SwordBible,
    slots: IntoIter<(Testament, u64)>,
}

impl<'a> VerseIterator<'a> {
    pub(super) fn new(bible: &'a SwordBible, resolved: &ResolvedReference) -> Self {
        Self {
            bible,
            slots: resolved.iter().collect::<Vec<_>>().into_iter(),
        }
    }

    /// Pairs each verse with the testament and slot it was read from.
    pub fn with_slots(self) -> SlotVerseIterator<'a> {
        SlotVerseIterator { inner: self }
    }
}

impl Iterator for VerseIterator<'_> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        let (testament, index) = self.slots.next()?;
        Some(self.bible.text_for_index(testament, index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.slots.size_hint()
    }
}

impl ExactSizeIterator for VerseIterator<'_> {}

/// Iterator over `(testament, slot, text)` triples.
///
/// Created by [`VerseIterator::with_slots()`].
#[derive(Debug, Clone)]
pub struct SlotVerseIterator<'a> {
    inner: VerseIterator<'a>,
}

impl Iterator for SlotVerseIterator<'_> {
    type Item = Result<(Testament, u64, String)>;

    fn next(&mut self) -> Option<Self::Item> {
        let (testament, index) = self.inner.slots.next()?;
        Some(
            self.inner
                .bible
                .text_for_index(testament, index)
                .map(|text| (testament, index, text)),
        )
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}
