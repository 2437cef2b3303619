//! Whole-canon addressing: book lookup, book offsets and reference resolution.

use std::sync::OnceLock;

use log::debug;

use crate::sword::canon::Versification;
use crate::sword::types::error::{Result, SwordError};
use crate::sword::types::models::Testament;
use super::book::BookStructure;
use super::reference::{Reference, ResolvedReference};

/// Slots 0 and 1 of every testament hold the testament heading.
const TESTAMENT_HEADING_SLOTS: u64 = 2;

/// The book layout of both testaments under one versification.
///
/// Immutable once built; book offsets are computed on first use and cached.
#[derive(Debug)]
pub struct BibleStructure {
    versification: Option<Versification>,
    books: [Vec<BookStructure>; 2],
    book_offsets: OnceLock<[Vec<u64>; 2]>,
}

impl BibleStructure {
    /// Builds the structure for a named versification.
    pub fn new(versification: Versification) -> Self {
        let canon = versification.canon();
        let mut structure = Self::from_books(
            canon.ot.iter().map(BookStructure::from).collect(),
            canon.nt.iter().map(BookStructure::from).collect(),
        );
        structure.versification = Some(versification);
        structure
    }

    /// Builds a structure from explicit book lists.
    pub fn from_books(ot: Vec<BookStructure>, nt: Vec<BookStructure>) -> Self {
        Self {
            versification: None,
            books: [ot, nt],
            book_offsets: OnceLock::new(),
        }
    }

    /// The versification this structure was built from, if any.
    pub fn versification(&self) -> Option<Versification> {
        self.versification
    }

    pub fn books(&self, testament: Testament) -> &[BookStructure] {
        &self.books[testament.slot()]
    }

    /// Finds a book by name, OSIS id or abbreviation, searching OT then NT.
    pub fn find_book(&self, name: &str) -> Result<(Testament, &BookStructure)> {
        self.position(name)
            .map(|(testament, index)| (testament, &self.books[testament.slot()][index]))
    }

    fn position(&self, name: &str) -> Result<(Testament, usize)> {
        Testament::ALL
            .into_iter()
            .find_map(|testament| {
                self.books(testament)
                    .iter()
                    .position(|book| book.name_matches(name))
                    .map(|index| (testament, index))
            })
            .ok_or_else(|| SwordError::BookNotFound(name.to_string()))
    }

    fn offsets(&self) -> &[Vec<u64>; 2] {
        self.book_offsets.get_or_init(|| {
            let compute = |books: &[BookStructure]| {
                let mut idx = TESTAMENT_HEADING_SLOTS;
                books
                    .iter()
                    .map(|book| {
                        let start = idx;
                        idx += book.size();
                        start
                    })
                    .collect::<Vec<u64>>()
            };
            debug!("Computing book offsets");
            [compute(&self.books[0]), compute(&self.books[1])]
        })
    }

    /// Slot of the heading of the `book_index`-th book of the testament.
    ///
    /// # Panics
    /// If `book_index` is not a valid position in [`BibleStructure::books`].
    pub fn book_offset(&self, testament: Testament, book_index: usize) -> u64 {
        self.offsets()[testament.slot()][book_index]
    }

    /// Slot of the heading of the named book.
    pub fn book_offset_by_name(&self, name: &str) -> Result<u64> {
        let (testament, index) = self.position(name)?;
        Ok(self.book_offset(testament, index))
    }

    /// Number of slots in the testament's index space, headings included.
    pub fn testament_size(&self, testament: Testament) -> u64 {
        TESTAMENT_HEADING_SLOTS
            + self
                .books(testament)
                .iter()
                .map(BookStructure::size)
                .sum::<u64>()
    }

    /// Resolves a reference into per-testament slot lists.
    ///
    /// Without books every book of both testaments is used, in canon order.
    /// Named books are appended to their testament's list in request order,
    /// and testaments appear in the order they were first touched.
    pub fn resolve(&self, reference: &Reference) -> Result<ResolvedReference> {
        let mut resolved = ResolvedReference::default();
        let chapters = reference.requested_chapters();
        let verses = reference.requested_verses();

        match reference.requested_books() {
            None => {
                for testament in Testament::ALL {
                    for (index, book) in self.books(testament).iter().enumerate() {
                        let refs =
                            book.indices(chapters, verses, self.book_offset(testament, index))?;
                        resolved.extend(testament, refs);
                    }
                }
            }
            Some(names) => {
                for name in names {
                    let (testament, index) = self.position(name)?;
                    let book = &self.books[testament.slot()][index];
                    let refs = book.indices(chapters, verses, self.book_offset(testament, index))?;
                    resolved.extend(testament, refs);
                }
            }
        }
        Ok(resolved)
    }
}

impl Default for BibleStructure {
    fn default() -> Self {
        Self::new(Versification::Default)
    }
}
