//! Per-book verse addressing.

use crate::sword::canon::CanonBook;
use crate::sword::types::error::{Result, SwordError};

/// A book of a versification, able to compute where its verses sit in the
/// testament's flat slot space.
///
/// Local layout of a book with chapters `c1..cn`:
///
/// ```text
/// [book heading] [c1 heading] [c1 verses...] [c2 heading] [c2 verses...] ...
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookStructure {
    pub name: &'static str,
    pub osis_name: &'static str,
    pub preferred_abbreviation: &'static str,
    chapter_lengths: &'static [u16],
}

impl BookStructure {
    pub fn new(
        name: &'static str,
        osis_name: &'static str,
        preferred_abbreviation: &'static str,
        chapter_lengths: &'static [u16],
    ) -> Self {
        Self {
            name,
            osis_name,
            preferred_abbreviation,
            chapter_lengths,
        }
    }

    pub fn chapter_lengths(&self) -> &[u16] {
        self.chapter_lengths
    }

    pub fn num_chapters(&self) -> u32 {
        self.chapter_lengths.len() as u32
    }

    /// Number of verses in the 1-based `chapter`, if it exists.
    pub fn chapter_length(&self, chapter: u32) -> Option<u32> {
        let index = (chapter as usize).checked_sub(1)?;
        self.chapter_lengths.get(index).map(|&n| n as u32)
    }

    pub fn num_verses(&self) -> u64 {
        self.chapter_lengths.iter().map(|&n| n as u64).sum()
    }

    /// Total slots occupied: every verse, one heading per chapter, one book heading.
    pub fn size(&self) -> u64 {
        self.num_verses() + self.chapter_lengths.len() as u64 + 1
    }

    /// Case-insensitive exact match against name, OSIS name or abbreviation.
    pub fn name_matches(&self, candidate: &str) -> bool {
        [self.name, self.osis_name, self.preferred_abbreviation]
            .iter()
            .any(|n| n.eq_ignore_ascii_case(candidate))
    }

    /// Slot of the heading of the 0-based chapter, relative to the book heading.
    ///
    /// `None` past the last chapter.
    pub fn chapter_heading_offset(&self, chapter_index: usize) -> Option<u64> {
        if chapter_index >= self.chapter_lengths.len() {
            return None;
        }
        let preceding: u64 = self.chapter_lengths[..chapter_index]
            .iter()
            .map(|&n| n as u64)
            .sum();
        Some(preceding + chapter_index as u64 + 1)
    }

    /// Slot of the first verse of the 0-based chapter, relative to the book heading.
    pub fn chapter_offset(&self, chapter_index: usize) -> Option<u64> {
        self.chapter_heading_offset(chapter_index)
            .map(|heading| heading + 1)
    }

    /// Absolute slot indices for the given chapters and verses.
    ///
    /// `None` chapters selects the whole book. A verse filter only applies
    /// when exactly one chapter is selected; with several chapters every
    /// verse of each is returned. Output follows request order.
    pub fn indices(
        &self,
        chapters: Option<&[u32]>,
        verses: Option<&[u32]>,
        offset: u64,
    ) -> Result<Vec<u64>> {
        let all_chapters: Vec<u32>;
        let chapters = match chapters {
            Some(c) => c,
            None => {
                all_chapters = (1..=self.num_chapters()).collect();
                &all_chapters
            }
        };
        let verses = if chapters.len() == 1 { verses } else { None };

        let mut refs = Vec::new();
        for &chapter in chapters {
            let (num_verses, first_verse) = (chapter as usize)
                .checked_sub(1)
                .and_then(|index| {
                    Some((self.chapter_length(chapter)?, self.chapter_offset(index)?))
                })
                .ok_or_else(|| SwordError::ChapterOutOfRange {
                    book: self.name,
                    chapter,
                    num_chapters: self.num_chapters(),
                })?;
            let base = offset + first_verse;
            match verses {
                Some(verses) => {
                    for &verse in verses {
                        if verse == 0 || verse > num_verses {
                            return Err(SwordError::VerseOutOfRange {
                                book: self.name,
                                chapter,
                                verse,
                                num_verses,
                            });
                        }
                        refs.push(base + verse as u64 - 1);
                    }
                }
                None => refs.extend((0..num_verses as u64).map(|v| base + v)),
            }
        }
        Ok(refs)
    }
}

impl From<&CanonBook> for BookStructure {
    fn from(book: &CanonBook) -> Self {
        Self::new(
            book.name,
            book.osis_name,
            book.preferred_abbreviation,
            book.chapter_lengths,
        )
    }
}
