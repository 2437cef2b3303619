mod common;

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use common::write_labelled_module;
use sword_reader::{BibleStructure, ModuleFormat, Reference, SwordError, SwordModules, Testament};
use tempfile::TempDir;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

fn sword_root() -> TempDir {
    let root = TempDir::new().expect("temp dir");
    let mods_d = root.path().join("mods.d");
    fs::create_dir_all(&mods_d).unwrap();

    let data = root.path().join("modules/texts/ztext/kjvtest");
    fs::create_dir_all(&data).unwrap();
    write_labelled_module(&data, ModuleFormat::ZText, &BibleStructure::default());
    fs::write(
        mods_d.join("kjvtest.conf"),
        "[KJVTest]\n\
         DataPath=./modules/texts/ztext/kjvtest/\n\
         ModDrv=zText\n\
         Encoding=UTF-8\n\
         Description=Synthetic KJV\n",
    )
    .unwrap();

    let raw = root.path().join("modules/texts/rawtext/nrsvtest");
    fs::create_dir_all(&raw).unwrap();
    write_labelled_module(
        &raw,
        ModuleFormat::RawText,
        &BibleStructure::new(sword_reader::Versification::Nrsv),
    );
    fs::write(
        mods_d.join("nrsvtest.conf"),
        "[NRSVTest]\nDataPath=./modules/texts/rawtext/nrsvtest/\nModDrv=RawText\nVersification=NRSV\n",
    )
    .unwrap();

    fs::write(mods_d.join("broken.conf"), "DataPath=./nowhere/\n").unwrap();
    fs::write(mods_d.join("README"), "not a conf").unwrap();
    root
}

#[test]
fn lists_installed_modules() {
    let root = sword_root();
    let mut modules = SwordModules::new(root.path());
    let found = modules.parse_modules().unwrap();

    assert_eq!(found.len(), 2);
    assert_eq!(found["KJVTest"], "Synthetic KJV");
    assert_eq!(found["NRSVTest"], "");
    assert_eq!(
        modules.conf("KJVTest").unwrap().module_format().unwrap(),
        ModuleFormat::ZText
    );
}

#[test]
fn opens_bible_from_conf() {
    let root = sword_root();
    let mut modules = SwordModules::new(root.path());
    modules.parse_modules().unwrap();

    let kjv = modules.get_bible_from_module("KJVTest").unwrap();
    assert_eq!(kjv.format(), ModuleFormat::ZText);
    assert_eq!(kjv.testaments(), vec![Testament::Old, Testament::New]);
    assert_eq!(
        kjv.get_default(&Reference::book("John").chapter(3).verse(16)).unwrap(),
        "John 3:16"
    );

    let nrsv = modules.get_bible_from_module("NRSVTest").unwrap();
    assert_eq!(nrsv.format(), ModuleFormat::RawText);
    assert_eq!(
        nrsv.get(&Reference::book("3John").chapter(1).verses([14, 15]), " / ")
            .unwrap(),
        "III John 1:14 / III John 1:15"
    );
    assert_eq!(
        nrsv.get_default(&Reference::book("Rev").chapter(12).verse(18))
            .unwrap(),
        "Revelation of John 12:18"
    );
}

#[test]
fn unknown_module_id() {
    let root = sword_root();
    let mut modules = SwordModules::new(root.path());
    modules.parse_modules().unwrap();
    assert!(matches!(
        modules.get_bible_from_module("ESV"),
        Err(SwordError::ModuleNotFound(id)) if id == "ESV"
    ));
}

#[test]
fn missing_mods_d_is_an_io_error() {
    let root = TempDir::new().unwrap();
    let mut modules = SwordModules::new(root.path());
    assert!(matches!(modules.parse_modules(), Err(SwordError::Io(_))));
}

/// Packs the tree under `dir` into a zip archive at `archive`.
fn zip_tree(dir: &Path, archive: &Path) {
    fn add(writer: &mut ZipWriter<File>, base: &Path, dir: &Path) {
        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
        let mut entries: Vec<_> = fs::read_dir(dir).unwrap().map(|e| e.unwrap().path()).collect();
        entries.sort();
        for path in entries {
            let name = path
                .strip_prefix(base)
                .unwrap()
                .to_string_lossy()
                .replace('\\', "/");
            if path.is_dir() {
                writer.add_directory(name, options).unwrap();
                add(writer, base, &path);
            } else {
                writer.start_file(name, options).unwrap();
                writer.write_all(&fs::read(&path).unwrap()).unwrap();
            }
        }
    }

    let mut writer = ZipWriter::new(File::create(archive).unwrap());
    add(&mut writer, dir, dir);
    writer.finish().unwrap();
}

#[test]
fn zipped_root_is_extracted_and_read() {
    let root = sword_root();
    let out = TempDir::new().unwrap();
    let archive = out.path().join("sword.zip");
    zip_tree(root.path(), &archive);

    let mut modules = SwordModules::new(&archive);
    assert_eq!(modules.data_root(), archive.as_path());
    let found = modules.parse_modules().unwrap();
    assert_eq!(found.len(), 2);
    assert_eq!(found["KJVTest"], "Synthetic KJV");

    let extracted = modules.data_root().to_path_buf();
    assert_ne!(extracted, archive);
    assert!(extracted.join("mods.d/kjvtest.conf").is_file());

    let kjv = modules.get_bible_from_module("KJVTest").unwrap();
    assert_eq!(
        kjv.get_default(&Reference::book("John").chapter(3).verse(16)).unwrap(),
        "John 3:16"
    );
    let nrsv = modules.get_bible_from_module("NRSVTest").unwrap();
    assert_eq!(
        nrsv.get_default(&Reference::book("3John").chapter(1).verse(15))
            .unwrap(),
        "III John 1:15"
    );

    // A rescan reuses the extraction.
    modules.parse_modules().unwrap();
    assert_eq!(modules.data_root(), extracted.as_path());

    drop(kjv);
    drop(nrsv);
    drop(modules);
    assert!(!extracted.exists(), "extraction should be removed with the catalogue");
}

#[test]
fn corrupt_archive_is_reported() {
    let out = TempDir::new().unwrap();
    let archive = out.path().join("broken.zip");
    fs::write(&archive, b"PK but not really a zip file").unwrap();

    let mut modules = SwordModules::new(&archive);
    assert!(matches!(modules.parse_modules(), Err(SwordError::Archive(_))));
}
