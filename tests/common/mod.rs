//! Builders for synthetic SWORD modules on disk.

#![allow(dead_code)]

use std::fs;
use std::io::Write;
use std::path::Path;

use byteorder::{LittleEndian, WriteBytesExt};
use flate2::write::ZlibEncoder;
use flate2::Compression;
use sword_reader::{BibleStructure, BookStructure, ModuleFormat, Testament};

/// One book of two chapters with 2 and 3 verses.
pub fn tiny_structure() -> BibleStructure {
    BibleStructure::from_books(
        vec![BookStructure::new("Book", "Bk", "B", &[2, 3])],
        vec![],
    )
}

/// Slot contents of a testament, each verse reading `"<name> C:V"`.
pub fn labelled_slots(structure: &BibleStructure, testament: Testament) -> Vec<Vec<u8>> {
    let mut slots = vec![Vec::new(); structure.testament_size(testament) as usize];
    for (book_index, book) in structure.books(testament).iter().enumerate() {
        let base = structure.book_offset(testament, book_index);
        for chapter in 1..=book.num_chapters() {
            let first = base + book.chapter_offset(chapter as usize - 1).unwrap();
            let verses = book.chapter_length(chapter).unwrap_or(0);
            for verse in 1..=verses {
                slots[(first + verse as u64 - 1) as usize] =
                    format!("{} {}:{}", book.name, chapter, verse).into_bytes();
            }
        }
    }
    slots
}

fn write_length(out: &mut Vec<u8>, format: ModuleFormat, length: u32) {
    match format.length_width() {
        2 => out.write_u16::<LittleEndian>(length as u16).unwrap(),
        _ => out.write_u32::<LittleEndian>(length).unwrap(),
    }
}

/// Writes a testament's files in `dir` using `format`.
///
/// Compressed layouts pack `slots_per_buffer` consecutive slots into each
/// zlib buffer.
pub fn write_testament(
    dir: &Path,
    format: ModuleFormat,
    testament: Testament,
    slots: &[Vec<u8>],
    slots_per_buffer: usize,
) {
    let names = format.file_names(testament);
    let mut index = Vec::new();

    if format.is_compressed() {
        let mut locations = Vec::new();
        let mut text = Vec::new();
        for (buffer_id, chunk) in slots.chunks(slots_per_buffer).enumerate() {
            let mut buffer = Vec::new();
            for slot in chunk {
                index.write_u32::<LittleEndian>(buffer_id as u32).unwrap();
                index.write_u32::<LittleEndian>(buffer.len() as u32).unwrap();
                write_length(&mut index, format, slot.len() as u32);
                buffer.extend_from_slice(slot);
            }
            let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
            encoder.write_all(&buffer).unwrap();
            let compressed = encoder.finish().unwrap();

            locations.write_u32::<LittleEndian>(text.len() as u32).unwrap();
            locations.write_u32::<LittleEndian>(compressed.len() as u32).unwrap();
            locations.write_u32::<LittleEndian>(buffer.len() as u32).unwrap();
            text.extend_from_slice(&compressed);
        }
        fs::write(dir.join(&names[0]), index).unwrap();
        fs::write(dir.join(&names[1]), locations).unwrap();
        fs::write(dir.join(&names[2]), text).unwrap();
    } else {
        let mut text = Vec::new();
        for slot in slots {
            index.write_u32::<LittleEndian>(text.len() as u32).unwrap();
            write_length(&mut index, format, slot.len() as u32);
            text.extend_from_slice(slot);
        }
        fs::write(dir.join(&names[0]), index).unwrap();
        fs::write(dir.join(&names[1]), text).unwrap();
    }
}

/// Writes every non-empty testament of `structure` with labelled verses.
pub fn write_labelled_module(dir: &Path, format: ModuleFormat, structure: &BibleStructure) {
    for testament in Testament::ALL {
        if structure.books(testament).is_empty() {
            continue;
        }
        let slots = labelled_slots(structure, testament);
        write_testament(dir, format, testament, &slots, 4);
    }
}
