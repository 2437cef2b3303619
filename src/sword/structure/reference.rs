//! Book/chapter/verse requests and their resolved slot lists.

use crate::sword::types::models::Testament;

/// A request for zero or more books, optionally narrowed to chapters and,
/// when exactly one chapter is given, to verses.
///
/// ```
/// use sword_reader::Reference;
///
/// let whole_bible = Reference::all();
/// let psalm = Reference::book("Ps").chapter(23);
/// let verses = Reference::book("John").chapter(3).verses([16, 17]);
/// # let _ = (whole_bible, psalm, verses);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reference {
    books: Option<Vec<String>>,
    chapters: Option<Vec<u32>>,
    verses: Option<Vec<u32>>,
}

impl Reference {
    /// Every book of the versification.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn book(name: impl Into<String>) -> Self {
        let name: String = name.into();
        Self::books([name])
    }

    pub fn books<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            books: Some(names.into_iter().map(Into::into).collect()),
            ..Self::default()
        }
    }

    pub fn chapter(self, chapter: u32) -> Self {
        self.chapters([chapter])
    }

    pub fn chapters(mut self, chapters: impl IntoIterator<Item = u32>) -> Self {
        self.chapters = Some(chapters.into_iter().collect());
        self
    }

    pub fn verse(self, verse: u32) -> Self {
        self.verses([verse])
    }

    pub fn verses(mut self, verses: impl IntoIterator<Item = u32>) -> Self {
        self.verses = Some(verses.into_iter().collect());
        self
    }

    /// Requested book names; `None` means every book.
    pub fn requested_books(&self) -> Option<&[String]> {
        self.books.as_deref()
    }

    /// Requested chapters; `None` means every chapter of each book.
    pub fn requested_chapters(&self) -> Option<&[u32]> {
        self.chapters.as_deref()
    }

    /// Requested verses; `None` means every verse of each chapter.
    pub fn requested_verses(&self) -> Option<&[u32]> {
        self.verses.as_deref()
    }
}

/// Slot indices per testament, in the order the reference produced them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedReference {
    entries: Vec<(Testament, Vec<u64>)>,
}

impl ResolvedReference {
    /// Appends slots to a testament's list, registering the testament on first use.
    pub(crate) fn extend(&mut self, testament: Testament, refs: Vec<u64>) {
        match self.entries.iter_mut().find(|(t, _)| *t == testament) {
            Some((_, existing)) => existing.extend(refs),
            None => self.entries.push((testament, refs)),
        }
    }

    /// Drops the slots of testaments for which `keep` returns false.
    pub(crate) fn retain_testaments(&mut self, mut keep: impl FnMut(Testament) -> bool) {
        self.entries.retain(|(t, _)| keep(*t));
    }

    pub fn get(&self, testament: Testament) -> Option<&[u64]> {
        self.entries
            .iter()
            .find(|(t, _)| *t == testament)
            .map(|(_, refs)| refs.as_slice())
    }

    /// Testaments in first-touched order.
    pub fn testaments(&self) -> Vec<Testament> {
        self.entries.iter().map(|(t, _)| *t).collect()
    }

    /// Total number of slots across both testaments.
    pub fn len(&self) -> usize {
        self.entries.iter().map(|(_, refs)| refs.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Flattened `(testament, slot)` pairs in output order.
    pub fn iter(&self) -> impl Iterator<Item = (Testament, u64)> + '_ {
        self.entries
            .iter()
            .flat_map(|(t, refs)| refs.iter().map(move |&idx| (*t, idx)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_records_filters() {
        let r = Reference::books(["Gen", "Exod"]).chapters([1, 2]).verse(3);
        assert_eq!(
            r.requested_books(),
            Some(&["Gen".to_string(), "Exod".to_string()][..])
        );
        assert_eq!(r.requested_chapters(), Some(&[1, 2][..]));
        assert_eq!(r.requested_verses(), Some(&[3][..]));
        assert_eq!(Reference::all().requested_books(), None);
    }

    #[test]
    fn resolved_keeps_first_touched_testament_order() {
        let mut resolved = ResolvedReference::default();
        resolved.extend(Testament::New, vec![10, 11]);
        resolved.extend(Testament::Old, vec![5]);
        resolved.extend(Testament::New, vec![3]);
        assert_eq!(resolved.testaments(), vec![Testament::New, Testament::Old]);
        assert_eq!(resolved.get(Testament::New), Some(&[10, 11, 3][..]));
        assert_eq!(
            resolved.iter().collect::<Vec<_>>(),
            vec![
                (Testament::New, 10),
                (Testament::New, 11),
                (Testament::New, 3),
                (Testament::Old, 5),
            ]
        );
        assert_eq!(resolved.len(), 4);
    }
}
