//! Kanji dataset builder CLI
//!
//! Usage:
//!   kanji-dataset --kvg <FILE> --dic <FILE> [OPTIONS]
//!
//! Options:
//!   --kvg <FILE>          Path to the KanjiVG XML file
//!   --dic <FILE>          Path to the KANJIDIC2 XML file
//!   --out <DIR>           Output directory [default: kanji_dataset]
//!   -s, --style <FILE>    Stroke style file (TOML format)
//!   -h, --help            Print help

use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;

use kanji_dataset::{extract_meanings, extract_strokes, write_dataset, StrokeStyle};

#[derive(Parser)]
#[command(name = "kanji-dataset")]
#[command(about = "Build a paired SVG/prompt dataset from KanjiVG and KANJIDIC2")]
struct Cli {
    /// Path to the KanjiVG XML file
    #[arg(long)]
    kvg: PathBuf,

    /// Path to the KANJIDIC2 XML file
    #[arg(long)]
    dic: PathBuf,

    /// Output directory
    #[arg(long, default_value = "kanji_dataset")]
    out: PathBuf,

    /// Stroke style file (TOML format)
    #[arg(short, long)]
    style: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    // Load stroke style
    let style = match &cli.style {
        Some(path) => match StrokeStyle::from_file(path) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("Error loading style '{}': {}", path.display(), e);
                process::exit(1);
            }
        },
        None => StrokeStyle::default(),
    };

    // Stroke-vector pass
    println!("Parsing stroke data...");
    let kvg_source = read_source(&cli.kvg);
    let strokes = match extract_strokes(&kvg_source, &style) {
        Ok(map) => map,
        Err(e) => {
            eprintln!("Error parsing '{}': {}", cli.kvg.display(), e);
            process::exit(1);
        }
    };
    println!("Found {} stroke entries.", strokes.len());

    // Dictionary pass
    println!("Parsing dictionary...");
    let dic_source = read_source(&cli.dic);
    let meanings = match extract_meanings(&dic_source) {
        Ok(map) => map,
        Err(e) => {
            eprintln!("Error parsing '{}': {}", cli.dic.display(), e);
            process::exit(1);
        }
    };
    println!("Found {} English gloss entries.", meanings.len());

    // Join and write
    let summary = match write_dataset(&strokes, &meanings, &cli.out) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error writing dataset to '{}': {}", cli.out.display(), e);
            process::exit(1);
        }
    };

    println!(
        "Total paired entries (images + prompts): {}",
        summary.entries
    );
    println!("SVG files located in: {}", summary.svg_dir.display());
    println!("Prompt CSV generated at: {}", summary.csv_path.display());
}

fn read_source(path: &Path) -> String {
    match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Error reading file '{}': {}", path.display(), e);
            process::exit(1);
        }
    }
}
