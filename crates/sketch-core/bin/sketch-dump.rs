//! Sketch disassembler.
//!
//! Usage:
//!   sketch-dump <file.sk>    Print a listing of every instruction

use std::{env, path::Path, process::ExitCode};

use sketch_core::{Sketch, disasm::format_listing};

const USAGE: &str = "Usage: sketch-dump <file>";

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();
    let [file] = args.as_slice() else {
        println!("{USAGE}");
        return ExitCode::FAILURE;
    };

    match Sketch::load(Path::new(file)) {
        Ok(sketch) => {
            println!(
                "; {} bytes, {} frame(s)",
                sketch.len(),
                sketch.frame_count()
            );
            print!("{}", format_listing(sketch.bytes()));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
