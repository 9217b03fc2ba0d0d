//! Standalone rot13 filter for shiftr
//!
//! Minimal binary that applies the classic shift-13 rotation to stdin
//! (or a single file) and writes the result to stdout. Shift 13 is its
//! own inverse, so the same command encodes and decodes.
//!
//! Usage:
//!   rot13 [file]

use std::env;
use std::fs;
use std::io::{self, Read};
use std::process;

use shiftr::{encrypt, Shift};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    if args.len() > 2 {
        eprintln!("Usage: rot13 [file]");
        process::exit(1);
    }

    let text = match args.get(1) {
        Some(path) => {
            fs::read_to_string(path).map_err(|e| format!("Failed to read {}: {}", path, e))?
        }
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    // Output to stdout
    print!("{}", encrypt(&text, Shift::new(13)));

    Ok(())
}
