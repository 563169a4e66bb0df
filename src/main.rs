//! Lists the non-hidden entries of a directory, four to a line, in the order the directory yields
//! them.

use std::env;
use std::fs;
use std::process;

use pooled_list::collections::pooled::{ListArena, ListError};

const COLUMNS: usize = 4;
const COLUMN_WIDTH: usize = 25;

fn main() {
    let dir = env::args().nth(1).unwrap_or_else(|| String::from("."));

    let entries = match fs::read_dir(&dir) {
        Ok(entries) => entries,
        Err(error) => {
            eprintln!("Failed to open the directory: {error}");
            process::exit(1);
        },
    };

    let mut arena = ListArena::new();
    let names = arena.create();

    for entry in entries.flatten() {
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.starts_with('.') {
            continue;
        }
        if let Err(ListError::PoolExhausted(error)) = arena.try_append(&names, name) {
            eprintln!("Only showing the first {} entries: {error}", error.cap);
            break;
        }
    }

    let count = arena.count(&names);
    arena.first(&names);
    for i in 0..count {
        if let Some(name) = arena.curr(&names) {
            print!("{name:<width$} ", width = COLUMN_WIDTH);
        }
        if (i + 1) % COLUMNS == 0 {
            println!();
        }
        arena.next(&names);
    }
    if count % COLUMNS != 0 {
        println!();
    }
}
