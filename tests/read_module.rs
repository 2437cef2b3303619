mod common;

use std::fs;

use common::{labelled_slots, tiny_structure, write_labelled_module, write_testament};
use encoding_rs::WINDOWS_1252;
use sword_reader::{
    BibleStructure, IndexRecord, ModuleFormat, Reference, SwordBible, SwordBibleOptions,
    SwordError, Testament, Versification,
};
use tempfile::TempDir;

const ALL_FORMATS: [ModuleFormat; 4] = [
    ModuleFormat::ZText,
    ModuleFormat::ZText4,
    ModuleFormat::RawText,
    ModuleFormat::RawText4,
];

fn open_tiny(format: ModuleFormat) -> (TempDir, SwordBible) {
    let dir = TempDir::new().expect("temp dir");
    write_labelled_module(dir.path(), format, &tiny_structure());
    let bible = SwordBible::open_with(
        dir.path(),
        SwordBibleOptions::new(format).structure(tiny_structure()),
    )
    .expect("open tiny module");
    (dir, bible)
}

#[test]
fn single_chapter_verses_in_every_format() {
    for format in ALL_FORMATS {
        let (_dir, bible) = open_tiny(format);
        let reference = Reference::all().chapter(2).verses([1, 2, 3]);

        let verses: Vec<String> = bible
            .read_reference(&reference)
            .expect("resolve")
            .map(|v| v.expect("verse"))
            .collect();
        assert_eq!(verses, vec!["Book 2:1", "Book 2:2", "Book 2:3"], "{}", format);

        assert_eq!(
            bible.get(&reference, " | ").unwrap(),
            "Book 2:1 | Book 2:2 | Book 2:3"
        );
        assert_eq!(
            bible.get_default(&reference).unwrap(),
            "Book 2:1\nBook 2:2\nBook 2:3"
        );
    }
}

#[test]
fn verse_filter_order_is_preserved() {
    let (_dir, bible) = open_tiny(ModuleFormat::RawText);
    let got = bible
        .get(&Reference::book("bk").chapter(2).verses([3, 1]), ",")
        .unwrap();
    assert_eq!(got, "Book 2:3,Book 2:1");
}

#[test]
fn several_chapters_ignore_verse_filter() {
    let (_dir, bible) = open_tiny(ModuleFormat::ZText);
    let got = bible
        .get(&Reference::book("B").chapters([1, 2]).verse(3), ",")
        .unwrap();
    assert_eq!(got, "Book 1:1,Book 1:2,Book 2:1,Book 2:2,Book 2:3");
}

#[test]
fn read_reference_is_lazy_and_restartable() {
    let (_dir, bible) = open_tiny(ModuleFormat::ZText4);
    let reference = Reference::all();

    let mut first = bible.read_reference(&reference).unwrap();
    assert_eq!(first.len(), 5);
    assert_eq!(first.next().unwrap().unwrap(), "Book 1:1");
    let resumed = first.clone();
    let rest: Vec<String> = first.map(Result::unwrap).collect();
    assert_eq!(rest.len(), 4);
    assert_eq!(resumed.map(Result::unwrap).collect::<Vec<_>>(), rest);

    let again: Vec<String> = bible
        .read_reference(&reference)
        .unwrap()
        .map(Result::unwrap)
        .collect();
    assert_eq!(again.len(), 5);
    assert_eq!(again[1..], rest[..]);
}

#[test]
fn slots_are_reported_with_text() {
    let (_dir, bible) = open_tiny(ModuleFormat::RawText4);
    let triples: Vec<(Testament, u64, String)> = bible
        .read_reference(&Reference::all().chapter(1))
        .unwrap()
        .with_slots()
        .map(Result::unwrap)
        .collect();
    assert_eq!(
        triples,
        vec![
            (Testament::Old, 4, "Book 1:1".to_string()),
            (Testament::Old, 5, "Book 1:2".to_string()),
        ]
    );
}

#[test]
fn headings_are_empty_slots() {
    let (_dir, bible) = open_tiny(ModuleFormat::RawText);
    // slot 2 is the book heading, slot 3 the chapter 1 heading
    assert_eq!(bible.text_for_index(Testament::Old, 2).unwrap(), "");
    assert!(bible.locate(Testament::Old, 3).unwrap().is_empty());
    assert_eq!(bible.text_for_index(Testament::Old, 4).unwrap(), "Book 1:1");
}

#[test]
fn one_testament_modules() {
    let structure = BibleStructure::default();
    let dir = TempDir::new().unwrap();
    let slots = labelled_slots(&structure, Testament::New);
    write_testament(dir.path(), ModuleFormat::RawText, Testament::New, &slots, 1);

    let bible = SwordBible::open(dir.path(), ModuleFormat::RawText, "KJV").unwrap();
    assert_eq!(bible.testaments(), vec![Testament::New]);

    let whole = bible.read_reference(&Reference::all()).unwrap();
    assert_eq!(whole.len(), 7957);

    assert_eq!(
        bible
            .get_default(&Reference::book("John").chapter(11).verse(35))
            .unwrap(),
        "John 11:35"
    );

    let err = bible
        .read_reference(&Reference::book("Gen").chapter(1))
        .unwrap_err();
    assert!(matches!(err, SwordError::TestamentMissing(Testament::Old)));
}

#[test]
fn module_without_files_is_unavailable() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("ot.bzv"), [0u8; 10]).unwrap();
    let err = SwordBible::open(dir.path(), ModuleFormat::ZText, "default").unwrap_err();
    assert!(matches!(err, SwordError::ModuleUnavailable(_)));
}

#[test]
fn unknown_versification_falls_back_to_default() {
    let dir = TempDir::new().unwrap();
    let structure = BibleStructure::default();
    write_labelled_module(dir.path(), ModuleFormat::ZText, &structure);

    let bible = SwordBible::open(dir.path(), ModuleFormat::ZText, "no-such-scheme").unwrap();
    assert_eq!(bible.structure().versification(), Some(Versification::Default));
    assert_eq!(
        bible
            .get(&Reference::books(["Rev", "Gen"]).chapter(1).verse(1), "; ")
            .unwrap(),
        "Revelation of John 1:1; Genesis 1:1"
    );
    assert_eq!(
        bible
            .get(&Reference::book("1sam").chapter(3).verses([10, 11]), " ")
            .unwrap(),
        "I Samuel 3:10 I Samuel 3:11"
    );
}

#[test]
fn corrupt_index_fails_only_the_affected_verse() {
    let dir = TempDir::new().unwrap();
    write_labelled_module(dir.path(), ModuleFormat::RawText, &tiny_structure());
    // drop the record of the last verse (slot 9)
    let vss = dir.path().join("ot.vss");
    let mut index = fs::read(&vss).unwrap();
    index.truncate(index.len() - 6);
    fs::write(&vss, index).unwrap();

    let bible = SwordBible::open_with(
        dir.path(),
        SwordBibleOptions::new(ModuleFormat::RawText).structure(tiny_structure()),
    )
    .unwrap();
    let results: Vec<_> = bible
        .read_reference(&Reference::all().chapter(2))
        .unwrap()
        .collect();
    assert_eq!(results.len(), 3);
    assert_eq!(results[0].as_ref().unwrap(), "Book 2:1");
    assert_eq!(results[1].as_ref().unwrap(), "Book 2:2");
    assert!(matches!(
        results[2],
        Err(SwordError::CorruptIndex { testament: Testament::Old, .. })
    ));

    assert!(bible.get_default(&Reference::all()).is_err());
}

#[test]
fn malformed_buffer_is_a_decompression_error() {
    let dir = TempDir::new().unwrap();
    write_labelled_module(dir.path(), ModuleFormat::ZText, &tiny_structure());
    let bzz = dir.path().join("ot.bzz");
    let garbage = vec![0x55u8; fs::metadata(&bzz).unwrap().len() as usize];
    fs::write(&bzz, garbage).unwrap();

    let bible = SwordBible::open_with(
        dir.path(),
        SwordBibleOptions::new(ModuleFormat::ZText).structure(tiny_structure()),
    )
    .unwrap();
    let err = bible.text_for_index(Testament::Old, 4).unwrap_err();
    assert!(matches!(err, SwordError::DecompressionError(_)));
}

#[test]
fn compressed_round_trip_is_byte_identical() {
    let dir = TempDir::new().unwrap();
    let slots: Vec<Vec<u8>> = vec![
        Vec::new(),
        Vec::new(),
        "Ἐν ἀρχῇ ἦν ὁ λόγος".as_bytes().to_vec(),
        b"plain ascii".to_vec(),
        vec![b'x', 0x9f, 0x92, 0x96, 0xff],
        "В начале было Слово".as_bytes().to_vec(),
    ];
    write_testament(dir.path(), ModuleFormat::ZText4, Testament::New, &slots, 3);
    let bible = SwordBible::open(dir.path(), ModuleFormat::ZText4, "default").unwrap();

    for (index, expected) in slots.iter().enumerate() {
        assert_eq!(&bible.bytes_for_index(Testament::New, index as u64).unwrap(), expected);
    }

    let second_buffer = bible.decode_buffer(Testament::New, 1).unwrap();
    assert_eq!(&second_buffer[..], &slots[3..].concat()[..]);

    match bible.locate(Testament::New, 5).unwrap() {
        IndexRecord::Compressed { buffer_id, start, length } => {
            assert_eq!(buffer_id, 1);
            assert_eq!(start as usize, slots[3].len() + slots[4].len());
            assert_eq!(length as usize, slots[5].len());
        }
        other => panic!("unexpected record {:?}", other),
    }

    // invalid UTF-8 is replaced, not fatal
    assert_eq!(
        bible.text_for_index(Testament::New, 4).unwrap(),
        "x\u{FFFD}\u{FFFD}\u{FFFD}\u{FFFD}"
    );

    let err = bible.locate(Testament::New, 6).unwrap_err();
    assert!(matches!(err, SwordError::CorruptIndex { .. }));
}

#[test]
fn raw_modules_have_no_buffers() {
    let (_dir, bible) = open_tiny(ModuleFormat::RawText);
    assert!(matches!(
        bible.decode_buffer(Testament::Old, 0),
        Err(SwordError::NotCompressed(ModuleFormat::RawText))
    ));
}

#[test]
fn module_encoding_is_applied() {
    let dir = TempDir::new().unwrap();
    let slots = vec![Vec::new(), Vec::new(), b"Gen\xe8se".to_vec()];
    write_testament(dir.path(), ModuleFormat::RawText, Testament::Old, &slots, 1);
    let bible = SwordBible::open_with(
        dir.path(),
        SwordBibleOptions::new(ModuleFormat::RawText).encoding(WINDOWS_1252),
    )
    .unwrap();
    assert_eq!(bible.text_for_index(Testament::Old, 2).unwrap(), "Genèse");
}
