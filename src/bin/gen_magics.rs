//! Search fresh magics and print them as Rust source.
//!
//! usage: gen_magics [seed] [threads]

use std::env;
use std::process;
use std::time::Instant;

use slider_magics::{MagicTables, SearchConfig, Slider};

fn parse_arg<T: std::str::FromStr>(args: &[String], idx: usize, name: &str) -> Option<T> {
    let raw = args.get(idx)?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            eprintln!("invalid {name}: {raw}");
            eprintln!("usage: gen_magics [seed] [threads]");
            process::exit(2);
        }
    }
}

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut config = SearchConfig::default();
    if let Some(seed) = parse_arg::<u64>(&args, 1, "seed") {
        config = config.with_seed(seed);
    }
    if let Some(threads) = parse_arg::<usize>(&args, 2, "threads") {
        config = config.with_threads(threads);
    }

    let start = Instant::now();
    let tables = match MagicTables::generate(&config) {
        Ok(tables) => tables,
        Err(err) => {
            eprintln!("error: {err}");
            process::exit(1);
        }
    };
    eprintln!(
        "found 128 magics in {:.2?} (seed {:#x}, {} threads, {} slots)",
        start.elapsed(),
        config.seed,
        config.threads.max(1),
        tables.total_len()
    );

    for slider in [Slider::Bishop, Slider::Rook] {
        let name = match slider {
            Slider::Rook => "ROOK_MAGICS",
            Slider::Bishop => "BISHOP_MAGICS",
        };
        println!("#[rustfmt::skip]");
        println!("pub const {name}: [u64; 64] = [");
        for row in tables.table(slider).magics().chunks(4) {
            let cells: Vec<String> = row.iter().map(|m| format!("{m:#018x},")).collect();
            println!("    {}", cells.join(" "));
        }
        println!("];");
        println!();
    }
}
