//! Sketch viewer.
//!
//! Usage: `sketch <file>`

use std::path::PathBuf;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let [file] = args.as_slice() else {
        println!("Usage: sketch <file>");
        std::process::exit(1);
    };

    if let Err(e) = sketch_tui::run(&PathBuf::from(file)) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
