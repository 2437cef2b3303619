//! SWORD module configuration files (`mods.d/*.conf`).
//!
//! A conf file is INI-like: a `[ModuleName]` section header followed by
//! `Key=Value` lines. Keys may repeat, and a value ending in `\` continues on
//! the next line. Backslashes and quotes elsewhere are kept verbatim, since
//! `About` values carry RTF escapes.
//!
//! ```text
//! [KJV]
//! DataPath=./modules/texts/ztext/kjv/
//! ModDrv=zText
//! Versification=KJV
//! Encoding=UTF-8
//! Description=King James Version (1769)
//! ```

use std::path::Path;

use encoding_rs::{Encoding, WINDOWS_1252};
use ini::{Ini, ParseOption};
use log::debug;

use crate::sword::canon::Versification;
use crate::sword::types::error::{Result, SwordError};
use crate::sword::types::models::ModuleFormat;
use crate::sword::utils;

/// One parsed module configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleConf {
    /// The section name, which is the module id.
    pub name: String,
    entries: Vec<(String, String)>,
}

impl ModuleConf {
    /// Parses conf text. Only the first section is kept; comment lines
    /// start with `#` or `;`.
    pub fn parse(text: &str) -> Result<Self> {
        let options = ParseOption {
            enabled_quote: false,
            enabled_escape: false,
            ..ParseOption::default()
        };
        let ini = Ini::load_from_str_opt(&text.replace("\r\n", "\n"), options)
            .map_err(|e| SwordError::InvalidConf(e.to_string()))?;

        let mut sections = ini.iter();
        let (name, properties) = loop {
            match sections.next() {
                Some((Some(name), properties)) => break (name, properties),
                Some((None, properties)) if !properties.is_empty() => {
                    return Err(SwordError::InvalidConf(
                        "entries before section header".to_string(),
                    ));
                }
                Some((None, _)) => continue,
                None => return Err(SwordError::InvalidConf("no section header".to_string())),
            }
        };
        if let Some(extra) = sections.find_map(|(section, _)| section) {
            debug!("Ignoring extra conf section [{}]", extra);
        }

        Ok(Self {
            name: name.to_string(),
            entries: properties
                .iter()
                .map(|(key, value)| (key.to_string(), value.to_string()))
                .collect(),
        })
    }

    /// Reads and parses a conf file. Invalid UTF-8 is replaced, not rejected.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let bytes = std::fs::read(path.as_ref())?;
        Self::parse(&String::from_utf8_lossy(&bytes))
    }

    /// The last value for `key`, matched case-insensitively.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .rev()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }

    /// Every value for a repeatable key, in file order.
    pub fn get_all<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.entries
            .iter()
            .filter(move |(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }

    pub fn description(&self) -> Option<&str> {
        self.get("Description")
    }

    /// `DataPath`, relative to the SWORD root.
    pub fn data_path(&self) -> Result<&str> {
        self.get("DataPath")
            .ok_or_else(|| SwordError::InvalidConf(format!("{} has no DataPath", self.name)))
    }

    /// The record layout declared by `ModDrv`.
    pub fn module_format(&self) -> Result<ModuleFormat> {
        self.get("ModDrv")
            .ok_or_else(|| SwordError::InvalidConf(format!("{} has no ModDrv", self.name)))?
            .parse()
    }

    /// Declared versification; the default scheme when absent or unrecognised.
    pub fn versification(&self) -> Versification {
        self.get("Versification")
            .map(Versification::from_name)
            .unwrap_or_default()
    }

    /// Declared text encoding; Latin-1 when absent.
    pub fn encoding(&self) -> &'static Encoding {
        self.get("Encoding")
            .map(utils::parse_encoding)
            .unwrap_or(WINDOWS_1252)
    }
}
