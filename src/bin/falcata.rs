//! Falcata CLI binary.
//!
//! Stems words from the command line, a file, or stdin, one result per line,
//! or as a JSON array with `--json`.

use std::fs;
use std::io::{self, BufRead};
use std::path::PathBuf;
use std::process;

use anyhow::Context;
use clap::Parser;
use serde::Serialize;

use falcata::error::Result;
use falcata::language::Language;

#[derive(Debug, Parser)]
#[command(name = "falcata", version, about = "Multi-language stemmer")]
struct FalcataArgs {
    /// Language of the input words (ISO 639-1 code: da, nl, en, fi, fr, it,
    /// no, pt, sv).
    #[arg(short, long, env = "FALCATA_LANGUAGE", value_parser = parse_language)]
    language: Language,

    /// Emit results as a JSON array instead of plain lines.
    #[arg(long)]
    json: bool,

    /// Read whitespace-separated words from a file.
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Words to stem; read from stdin when none are given.
    words: Vec<String>,
}

#[derive(Debug, Serialize)]
struct StemRecord {
    word: String,
    stem: String,
}

fn parse_language(s: &str) -> std::result::Result<Language, String> {
    s.parse::<Language>().map_err(|e| e.to_string())
}

fn run(args: FalcataArgs) -> Result<()> {
    let stemmer = args.language.stemmer();

    let words = if let Some(path) = &args.input {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        text.split_whitespace().map(str::to_string).collect()
    } else if args.words.is_empty() {
        let mut collected = Vec::new();
        for line in io::stdin().lock().lines() {
            let line = line?;
            collected.extend(line.split_whitespace().map(str::to_string));
        }
        collected
    } else {
        args.words
    };

    if args.json {
        let records: Vec<StemRecord> = words
            .into_iter()
            .map(|word| {
                let stem = stemmer.stem(&word);
                StemRecord { word, stem }
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&records)?);
    } else {
        for word in words {
            println!("{}", stemmer.stem(&word));
        }
    }
    Ok(())
}

fn main() {
    let args = FalcataArgs::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
