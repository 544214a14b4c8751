//! Word frequency report.
//!
//! Reads a corpus, counts every normalized word with both counters, prints
//! the tables, then looks up one word typed on the terminal.
//!
//! ```bash
//! ./target/release/wordfreq input.txt
//! ./target/release/wordfreq input.txt --query cheese
//! RUST_LOG=debug ./target/release/wordfreq input.txt --exhaustive-scan
//! ```

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{error, info};

use wordfreq_core::analyzer::NormalizerConfig;
use wordfreq_core::count::ScanMode;
use wordfreq_core::source::{read_query_line, read_words_from_file};
use wordfreq_core::{Pipeline, PipelineConfig, SourceError, WordStat};

const QUERY_PROMPT: &str = "Enter word to search count for (confirm with enter):";

/// Count word occurrences and look one up
#[derive(Parser, Debug)]
#[command(name = "wordfreq", version, about)]
struct Args {
    /// Corpus file to count
    #[arg(value_name = "FILE", default_value = "input.txt")]
    input: PathBuf,

    /// Word to look up; read from the terminal when omitted
    #[arg(short, long)]
    query: Option<String>,

    /// Scan every record in the quadratic counter instead of stopping at the first match
    #[arg(long)]
    exhaustive_scan: bool,

    /// Minimum word length kept by the normalizer ("a" is always kept)
    #[arg(long, default_value_t = 2)]
    min_len: usize,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let tokens = match read_words_from_file(&args.input) {
        Ok(tokens) => tokens,
        Err(err) => {
            report(io::stderr().lock(), &err);
            return ExitCode::FAILURE;
        }
    };

    let config = PipelineConfig {
        normalizer: NormalizerConfig {
            min_len: args.min_len,
            keep_article: true,
        },
        scan: if args.exhaustive_scan {
            ScanMode::Exhaustive
        } else {
            ScanMode::FirstMatch
        },
    };

    let output = Pipeline::new(config).run(&tokens);

    println!("Total count of words: {}", output.total_words);
    println!(
        "Duration for counting with map implementation: {:?}",
        output.linear_elapsed
    );
    println!("Counting with map result: {}", output.linear);
    println!("Sort result wordStats: {}", format_stats(&output.ranked));
    info!("{}", output.stats());

    if !output.agree() {
        error!("linear and quadratic tables differ");
    }

    let query = match args.query {
        Some(word) => word.to_lowercase(),
        None => {
            println!("{}", QUERY_PROMPT);
            read_query_line(io::stdin().lock())
        }
    };

    match output.lookup(&query) {
        (count, true) => println!("Found it! Word count: {}", count),
        (_, false) => println!("Word is not present."),
    }

    ExitCode::SUCCESS
}

/// Writes a load failure to `out` as a single line.
fn report<W: Write>(mut out: W, err: &SourceError) {
    writeln!(out, "{}", err).ok();
}

fn format_stats(stats: &[WordStat]) -> String {
    let mut out = String::with_capacity(stats.len() * 12 + 2);
    out.push('[');
    for (i, stat) in stats.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push_str(&stat.to_string());
    }
    out.push(']');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_error_reported_once() {
        let err = SourceError::Open {
            path: PathBuf::from("missing.txt"),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        };
        let mut out = Vec::new();
        report(&mut out, &err);
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches("missing.txt").count(), 1);
        assert_eq!(text.lines().count(), 1);
    }

    #[test]
    fn prompt_is_one_line() {
        assert!(!QUERY_PROMPT.contains('\n'));
        assert!(QUERY_PROMPT.ends_with(':'));
    }

    #[test]
    fn stats_formatted_as_list() {
        let stats = [WordStat::new("milk", 1), WordStat::new("the", 3)];
        assert_eq!(format_stats(&stats), "[{milk 1} {the 3}]");
        assert_eq!(format_stats(&[]), "[]");
    }
}
