//! CLI tool for gridgeom - builds a grid from JSON options and prints its geometry
//!
//! Usage:
//!   gridgeom_cli <options.json>                           # Snapshot JSON to stdout
//!   gridgeom_cli <options.json> -o out.json               # Snapshot JSON to file
//!   gridgeom_cli <options.json> --scroll <top> <left>     # Snapshot after scrolling

#![allow(clippy::exit)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::indexing_slicing)]

use std::env;
use std::fs;
use std::io::{self, Write};

use gridgeom::{GridGeometry, GridOptions, ScrollOffsets};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: gridgeom_cli <options.json> [--scroll top left] [-o output.json]");
        std::process::exit(1);
    }

    let input_path = &args[1];
    let mut output_path = None;
    let mut scroll = None;
    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "-o" if i + 1 < args.len() => {
                output_path = Some(&args[i + 1]);
                i += 2;
            }
            "--scroll" if i + 2 < args.len() => {
                let top = parse_number(&args[i + 1]);
                let left = parse_number(&args[i + 2]);
                scroll = Some(ScrollOffsets {
                    scroll_top: top,
                    scroll_left: left,
                });
                i += 3;
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                std::process::exit(1);
            }
        }
    }

    // Read options
    let options = match GridOptions::from_path(input_path) {
        Ok(o) => o,
        Err(e) => {
            eprintln!("Error loading {}: {}", input_path, e);
            std::process::exit(1);
        }
    };

    let mut grid = match GridGeometry::new(&options) {
        Ok(g) => g,
        Err(e) => {
            eprintln!("Error building grid: {}", e);
            std::process::exit(1);
        }
    };
    if let Some(offsets) = scroll {
        grid.set_scroll(offsets);
    }

    // Serialize to JSON
    let json = match serde_json::to_string_pretty(&grid.snapshot()) {
        Ok(j) => j,
        Err(e) => {
            eprintln!("Error serializing JSON: {}", e);
            std::process::exit(1);
        }
    };

    // Output
    match output_path {
        Some(path) => {
            if let Err(e) = fs::write(path, &json) {
                eprintln!("Error writing {}: {}", path, e);
                std::process::exit(1);
            }
            eprintln!("Written: {}", path);
        }
        None => {
            io::stdout().write_all(json.as_bytes()).unwrap();
            println!();
        }
    }
}

fn parse_number(arg: &str) -> f64 {
    match arg.parse::<f64>() {
        Ok(n) => n,
        Err(_) => {
            eprintln!("Not a number: {}", arg);
            std::process::exit(1);
        }
    }
}
