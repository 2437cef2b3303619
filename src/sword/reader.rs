use std::collections::HashMap;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, RwLock};

use encoding_rs::{Encoding, UTF_8};
use log::{debug, info, trace};

use super::canon::Versification;
use super::format::{content, index};
use super::iter::VerseIterator;
use super::structure::bible::BibleStructure;
use super::structure::reference::{Reference, ResolvedReference};
use super::types::error::{Result, SwordError};
use super::types::models::*;

/// Decoded buffers kept per handle before the cache is flushed.
const BUFFER_CACHE_CAPACITY: usize = 64;

/// Settings for opening a module directly from its data directory.
#[derive(Debug)]
pub struct SwordBibleOptions {
    pub format: ModuleFormat,
    pub structure: BibleStructure,
    pub encoding: &'static Encoding,
}

impl SwordBibleOptions {
    /// Default versification, UTF-8 text.
    pub fn new(format: ModuleFormat) -> Self {
        Self {
            format,
            structure: BibleStructure::default(),
            encoding: UTF_8,
        }
    }

    pub fn versification(mut self, versification: Versification) -> Self {
        self.structure = BibleStructure::new(versification);
        self
    }

    /// Uses an explicit book layout instead of a named versification.
    pub fn structure(mut self, structure: BibleStructure) -> Self {
        self.structure = structure;
        self
    }

    pub fn encoding(mut self, encoding: &'static Encoding) -> Self {
        self.encoding = encoding;
        self
    }
}

/// Open files of one testament.
#[derive(Debug)]
struct TestamentFiles {
    index: Mutex<File>,
    record_count: u64,
    /// `.bzs`; present for compressed layouts only.
    buffer_locations: Option<Mutex<File>>,
    /// `.bzz` for compressed layouts, the bare testament file for raw ones.
    text: Mutex<File>,
}

impl TestamentFiles {
    fn open(base: &Path, format: ModuleFormat, testament: Testament) -> Result<Self> {
        let paths: Vec<PathBuf> = format
            .file_names(testament)
            .into_iter()
            .map(|name| base.join(name))
            .collect();
        let mut files = paths
            .iter()
            .map(File::open)
            .collect::<std::io::Result<Vec<File>>>()?
            .into_iter();

        // file_names yields [index, locations, text] or [index, text]
        let index = files.next().ok_or(SwordError::TestamentMissing(testament))?;
        let buffer_locations = if format.is_compressed() {
            files.next().map(Mutex::new)
        } else {
            None
        };
        let text = files.next().ok_or(SwordError::TestamentMissing(testament))?;

        let record_count = index.metadata()?.len() / format.record_size();
        debug!(
            "Opened {} files in {}: {} index records",
            testament,
            base.display(),
            record_count
        );
        Ok(Self {
            index: Mutex::new(index),
            record_count,
            buffer_locations,
            text: Mutex::new(text),
        })
    }
}

/// A read-only handle on one SWORD Bible module.
///
/// Owns the open files of whichever testaments the module contains. All
/// reads are blocking seek+read sequences; the handle is `Send + Sync`.
#[derive(Debug)]
pub struct SwordBible {
    path: PathBuf,
    format: ModuleFormat,
    structure: BibleStructure,
    encoding: &'static Encoding,
    files: [Option<TestamentFiles>; 2],
    buffer_cache: RwLock<HashMap<(Testament, u32), Arc<[u8]>>>,
}

impl SwordBible {
    /// Opens the module in `path` with the given layout and versification name.
    ///
    /// Unknown versification names fall back to the default scheme.
    pub fn open(path: impl AsRef<Path>, format: ModuleFormat, versification: &str) -> Result<Self> {
        Self::open_with(
            path,
            SwordBibleOptions::new(format).versification(Versification::from_name(versification)),
        )
    }

    /// Opens the module in `path`.
    ///
    /// A module may hold only one testament; a testament whose files cannot
    /// be opened is treated as absent.
    ///
    /// # Errors
    /// [`SwordError::ModuleUnavailable`] if neither testament could be opened.
    pub fn open_with(path: impl AsRef<Path>, options: SwordBibleOptions) -> Result<Self> {
        let path = path.as_ref();
        info!(
            "Opening {} module: {}",
            options.format,
            path.display()
        );

        let open = |testament: Testament| match TestamentFiles::open(path, options.format, testament) {
            Ok(files) => Some(files),
            Err(e) => {
                debug!("No usable {} files in {}: {}", testament, path.display(), e);
                None
            }
        };
        let files = [open(Testament::Old), open(Testament::New)];
        if files.iter().all(Option::is_none) {
            return Err(SwordError::ModuleUnavailable(path.display().to_string()));
        }

        info!(
            "Module opened: testaments={:?}, versification={}, encoding={}",
            Testament::ALL
                .iter()
                .filter(|t| files[t.slot()].is_some())
                .collect::<Vec<_>>(),
            options
                .structure
                .versification()
                .map(|v| v.name())
                .unwrap_or("custom"),
            options.encoding.name()
        );

        Ok(Self {
            path: path.to_path_buf(),
            format: options.format,
            structure: options.structure,
            encoding: options.encoding,
            files,
            buffer_cache: RwLock::new(HashMap::new()),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> ModuleFormat {
        self.format
    }

    pub fn structure(&self) -> &BibleStructure {
        &self.structure
    }

    pub fn encoding(&self) -> &'static Encoding {
        self.encoding
    }

    /// Testaments this module carries files for, in canon order.
    pub fn testaments(&self) -> Vec<Testament> {
        Testament::ALL
            .into_iter()
            .filter(|t| self.has_testament(*t))
            .collect()
    }

    pub fn has_testament(&self, testament: Testament) -> bool {
        self.files[testament.slot()].is_some()
    }

    fn testament_files(&self, testament: Testament) -> Result<&TestamentFiles> {
        self.files[testament.slot()]
            .as_ref()
            .ok_or(SwordError::TestamentMissing(testament))
    }

    /// Resolves a reference against the module's versification.
    pub fn resolve_reference(&self, reference: &Reference) -> Result<ResolvedReference> {
        self.structure.resolve(reference)
    }

    /// Reads and decodes the index record of slot `index`.
    pub fn locate(&self, testament: Testament, index: u64) -> Result<IndexRecord> {
        let files = self.testament_files(testament)?;
        let mut file = files.index.lock().map_err(|_| SwordError::LockPoisoned)?;
        index::read_index_record(&mut *file, self.format, testament, index, files.record_count)
    }

    /// Reads and inflates compressed buffer `buffer_id`, consulting the cache first.
    ///
    /// # Errors
    /// [`SwordError::NotCompressed`] for raw-text modules.
    pub fn decode_buffer(&self, testament: Testament, buffer_id: u32) -> Result<Arc<[u8]>> {
        let key = (testament, buffer_id);
        {
            let cache = self.buffer_cache.read().map_err(|_| SwordError::LockPoisoned)?;
            if let Some(buffer) = cache.get(&key) {
                trace!("Buffer cache hit: {} buffer {}", testament, buffer_id);
                return Ok(Arc::clone(buffer));
            }
        }

        let files = self.testament_files(testament)?;
        let locations = files
            .buffer_locations
            .as_ref()
            .ok_or(SwordError::NotCompressed(self.format))?;
        let location = {
            let mut file = locations.lock().map_err(|_| SwordError::LockPoisoned)?;
            index::read_buffer_location(&mut *file, testament, buffer_id)?
        };
        let buffer: Arc<[u8]> = {
            let mut file = files.text.lock().map_err(|_| SwordError::LockPoisoned)?;
            content::read_compressed_buffer(&mut *file, testament, &location)?.into()
        };

        let mut cache = self.buffer_cache.write().map_err(|_| SwordError::LockPoisoned)?;
        if cache.len() >= BUFFER_CACHE_CAPACITY {
            trace!("Buffer cache full, flushing {} entries", cache.len());
            cache.clear();
        }
        cache.insert(key, Arc::clone(&buffer));
        Ok(buffer)
    }

    /// Raw bytes stored for slot `index`.
    pub fn bytes_for_index(&self, testament: Testament, index: u64) -> Result<Vec<u8>> {
        match self.locate(testament, index)? {
            IndexRecord::Compressed {
                buffer_id,
                start,
                length,
            } => {
                let buffer = self.decode_buffer(testament, buffer_id)?;
                Ok(content::slice_buffer(&buffer, testament, start, length)?.to_vec())
            }
            IndexRecord::Raw { offset, length } => {
                let files = self.testament_files(testament)?;
                let mut file = files.text.lock().map_err(|_| SwordError::LockPoisoned)?;
                content::read_raw_text(&mut *file, testament, offset, length)
            }
        }
    }

    /// Text stored for slot `index`, decoded lossily with the module encoding.
    pub fn text_for_index(&self, testament: Testament, index: u64) -> Result<String> {
        let bytes = self.bytes_for_index(testament, index)?;
        Ok(content::decode_text(&bytes, self.encoding))
    }

    /// Lazily reads the text of every verse a reference selects.
    ///
    /// Resolution errors are returned here; file I/O happens as the iterator
    /// advances. Without explicit books, testaments the module lacks are
    /// skipped; an explicit book from a missing testament is an error.
    pub fn read_reference(&self, reference: &Reference) -> Result<VerseIterator<'_>> {
        let mut resolved = self.resolve_reference(reference)?;
        if reference.requested_books().is_some() {
            if let Some(missing) = resolved
                .testaments()
                .into_iter()
                .find(|t| !self.has_testament(*t))
            {
                return Err(SwordError::TestamentMissing(missing));
            }
        } else {
            resolved.retain_testaments(|t| self.has_testament(t));
        }
        Ok(VerseIterator::new(self, &resolved))
    }

    /// Eagerly reads a reference and joins the verses with `join`.
    pub fn get(&self, reference: &Reference, join: &str) -> Result<String> {
        let verses = self.read_reference(reference)?.collect::<Result<Vec<String>>>()?;
        Ok(verses.join(join))
    }

    /// [`SwordBible::get`] with newline-separated verses.
    pub fn get_default(&self, reference: &Reference) -> Result<String> {
        self.get(reference, "\n")
    }
}
