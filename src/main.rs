use std::env;
use std::process;

use sword_reader::sword::utils::parse_encoding;
use sword_reader::{
    ModuleFormat, Reference, SwordBible, SwordBibleOptions, SwordModules, Versification,
};

fn usage(program: &str) -> ! {
    eprintln!("Usage:");
    eprintln!(
        "  {} <module-dir> <zText|zText4|RawText|RawText4> <book> [chapter] [verse] [--versification NAME] [--encoding LABEL]",
        program
    );
    eprintln!("  {} --list <sword-root>", program);
    eprintln!("  {} --module <sword-root> <module-id> <book> [chapter] [verse]", program);
    process::exit(1);
}

/// Removes `--flag value` from `args`, returning the value.
fn take_flag(args: &mut Vec<String>, flag: &str) -> Option<String> {
    let idx = args.iter().position(|arg| arg == flag)?;
    if idx + 1 >= args.len() {
        eprintln!("ERROR: {} flag requires an argument.", flag);
        process::exit(1);
    }
    let value = args.remove(idx + 1);
    args.remove(idx);
    Some(value)
}

fn parse_number(value: &str, what: &str) -> u32 {
    value.parse().unwrap_or_else(|_| {
        eprintln!("ERROR: Invalid {} number: {}", what, value);
        process::exit(1);
    })
}

fn build_reference(rest: &[String]) -> Reference {
    let mut reference = Reference::book(rest[0].as_str());
    if let Some(chapter) = rest.get(1) {
        reference = reference.chapter(parse_number(chapter, "chapter"));
        if let Some(verse) = rest.get(2) {
            reference = reference.verse(parse_number(verse, "verse"));
        }
    }
    reference
}

fn print_passage(bible: &SwordBible, reference: &Reference) {
    match bible.get_default(reference) {
        Ok(text) => println!("{}", text),
        Err(e) => {
            eprintln!("ERROR: Failed to read passage");
            eprintln!("  {}", e);
            process::exit(1);
        }
    }
}

fn list_modules(root: &str) {
    let mut modules = SwordModules::new(root);
    match modules.parse_modules() {
        Ok(found) => {
            println!("Installed modules in {}:", root);
            for (name, description) in &found {
                println!("  {:<16} {}", name, description);
            }
            if found.is_empty() {
                println!("  (none)");
            }
        }
        Err(e) => {
            eprintln!("ERROR: Failed to scan {}", root);
            eprintln!("  {}", e);
            process::exit(1);
        }
    }
}

fn main() {
    let mut args: Vec<String> = env::args().collect();
    let program = args.first().cloned().unwrap_or_else(|| "sword-reader".to_string());

    if args.len() < 2 {
        usage(&program);
    }

    if args[1] == "--list" {
        match args.get(2) {
            Some(root) => list_modules(root),
            None => usage(&program),
        }
        return;
    }

    if args[1] == "--module" {
        if args.len() < 5 {
            usage(&program);
        }
        let mut modules = SwordModules::new(args[2].as_str());
        let bible = modules
            .parse_modules()
            .and_then(|_| modules.get_bible_from_module(&args[3]))
            .unwrap_or_else(|e| {
                eprintln!("ERROR: Failed to open module {}", args[3]);
                eprintln!("  {}", e);
                process::exit(1);
            });
        print_passage(&bible, &build_reference(&args[4..]));
        return;
    }

    let versification = take_flag(&mut args, "--versification");
    let encoding = take_flag(&mut args, "--encoding");
    if args.len() < 4 {
        usage(&program);
    }

    let format: ModuleFormat = args[2].parse().unwrap_or_else(|e| {
        eprintln!("ERROR: {}", e);
        process::exit(1);
    });
    let mut options = SwordBibleOptions::new(format);
    if let Some(name) = versification {
        options = options.versification(Versification::from_name(&name));
    }
    if let Some(label) = encoding {
        options = options.encoding(parse_encoding(&label));
    }

    let bible = SwordBible::open_with(&args[1], options).unwrap_or_else(|e| {
        eprintln!("ERROR: Failed to open module {}", args[1]);
        eprintln!("  {}", e);
        process::exit(1);
    });
    print_passage(&bible, &build_reference(&args[3..]));
}
