//! Discovery of modules installed under a SWORD root directory.
//!
//! A SWORD root holds `mods.d/*.conf` descriptors and the module data they
//! point at through `DataPath`. The root may also be a `.zip` archive of such
//! a tree, which is extracted to a temporary directory on the first scan.

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use tempfile::TempDir;
use zip::ZipArchive;

use super::format::conf::ModuleConf;
use super::reader::{SwordBible, SwordBibleOptions};
use super::structure::bible::BibleStructure;
use super::types::error::{Result, SwordError};

const CONF_DIR: &str = "mods.d";

/// The modules installed under one SWORD root.
///
/// The temporary extraction of a zipped root lives as long as this value.
#[derive(Debug)]
pub struct SwordModules {
    root: PathBuf,
    extracted: Option<TempDir>,
    modules: BTreeMap<String, ModuleConf>,
}

impl SwordModules {
    /// Creates a catalogue for `root` without scanning it yet.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            extracted: None,
            modules: BTreeMap::new(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The directory `mods.d` and `DataPath` are resolved against.
    ///
    /// This is the root itself, or the extraction directory once a zipped
    /// root has been scanned.
    pub fn data_root(&self) -> &Path {
        self.extracted
            .as_ref()
            .map_or(self.root.as_path(), |dir| dir.path())
    }

    fn is_archive(&self) -> bool {
        self.root
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("zip"))
            && self.root.is_file()
    }

    fn extract_archive(&mut self) -> Result<()> {
        if self.extracted.is_some() || !self.is_archive() {
            return Ok(());
        }
        let dir = TempDir::new()?;
        info!(
            "Extracting {} into {}",
            self.root.display(),
            dir.path().display()
        );
        let mut archive = ZipArchive::new(BufReader::new(File::open(&self.root)?))?;
        debug!("Archive holds {} entries", archive.len());
        archive.extract(dir.path())?;
        self.extracted = Some(dir);
        Ok(())
    }

    /// Scans `mods.d` and returns module id → description.
    ///
    /// Conf files that cannot be read or parsed are logged and skipped.
    pub fn parse_modules(&mut self) -> Result<BTreeMap<String, String>> {
        self.extract_archive()?;
        let conf_dir = self.data_root().join(CONF_DIR);
        info!("Scanning module configurations in {}", conf_dir.display());

        let mut conf_paths: Vec<PathBuf> = fs::read_dir(&conf_dir)?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|p| p.extension().is_some_and(|ext| ext == "conf"))
            .collect();
        conf_paths.sort();

        self.modules.clear();
        for path in conf_paths {
            match ModuleConf::from_file(&path) {
                Ok(conf) => {
                    debug!("Found module {} in {}", conf.name, path.display());
                    self.modules.insert(conf.name.clone(), conf);
                }
                Err(e) => warn!("Skipping {}: {}", path.display(), e),
            }
        }

        Ok(self
            .modules
            .iter()
            .map(|(name, conf)| (name.clone(), conf.description().unwrap_or_default().to_string()))
            .collect())
    }

    /// The parsed configuration of a module found by [`SwordModules::parse_modules`].
    pub fn conf(&self, module: &str) -> Option<&ModuleConf> {
        self.modules.get(module)
    }

    /// Opens a parsed module as a Bible.
    ///
    /// # Errors
    /// [`SwordError::ModuleNotFound`] for ids not seen by the last scan, and
    /// any error from the conf values or from opening the module files.
    pub fn get_bible_from_module(&self, module: &str) -> Result<SwordBible> {
        let conf = self
            .conf(module)
            .ok_or_else(|| SwordError::ModuleNotFound(module.to_string()))?;
        let data_path = self.data_root().join(conf.data_path()?);
        let options = SwordBibleOptions::new(conf.module_format()?)
            .structure(BibleStructure::new(conf.versification()))
            .encoding(conf.encoding());
        SwordBible::open_with(data_path, options)
    }
}
