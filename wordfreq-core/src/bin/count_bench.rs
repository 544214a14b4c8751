//! Counter Benchmarking Tool
//!
//! Measures how the two counting algorithms scale on a real corpus. The
//! linear counter should stay close to the normalizer's throughput; the
//! quadratic counter falls off as the vocabulary grows.
//!
//! ## Usage
//!
//! ```bash
//! # Benchmark both counters
//! ./target/release/count_bench /path/to/corpus.txt
//!
//! # Only one counter
//! ./target/release/count_bench /path/to/corpus.txt linear
//!
//! # Cap the word count so the quadratic run finishes
//! ./target/release/count_bench /path/to/corpus.txt quadratic --limit 200000
//! ```
//!
//! ## Example Output
//!
//! ```text
//! === Linear ===
//! --------------------------------
//! Mode        : Linear
//! Elapsed     : 0.012 s
//! Words       : 1_204_332
//! Words/sec   : 100_361_000
//! Distinct    : 31_557
//! --------------------------------
//! ```

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::{Parser, ValueEnum};

use wordfreq_core::analyzer::normalize;
use wordfreq_core::count::{count_linear, count_quadratic_with, ScanMode};
use wordfreq_core::source::read_words_from_file;
use wordfreq_core::timed;

const WARMUP_RUNS: usize = 1;
const MEASURE_RUNS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    Linear,
    Quadratic,
    All,
}

/// Compare the linear and quadratic word counters
#[derive(Parser, Debug)]
#[command(name = "count_bench")]
struct Args {
    /// Corpus file
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Counter(s) to measure
    #[arg(value_enum, default_value_t = Mode::All)]
    mode: Mode,

    /// Only count the first N normalized words
    #[arg(long)]
    limit: Option<usize>,

    /// Scan every record in the quadratic counter
    #[arg(long)]
    exhaustive_scan: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    println!("Loading file...");
    let tokens = match read_words_from_file(&args.input) {
        Ok(tokens) => tokens,
        Err(err) => {
            eprintln!("{}", err);
            return ExitCode::FAILURE;
        }
    };

    let (mut words, norm_elapsed) = timed(|| normalize(&tokens));
    if let Some(limit) = args.limit {
        words.truncate(limit);
    }

    println!("Tokens:    {}", fmt_count(tokens.len()));
    println!("Words:     {}", fmt_count(words.len()));
    println!("Normalize: {:.3} s\n", norm_elapsed.as_secs_f64());

    if matches!(args.mode, Mode::Linear | Mode::All) {
        bench_linear(&words);
    }

    if matches!(args.mode, Mode::Quadratic | Mode::All) {
        let scan = if args.exhaustive_scan {
            ScanMode::Exhaustive
        } else {
            ScanMode::FirstMatch
        };
        bench_quadratic(&words, scan);
    }

    ExitCode::SUCCESS
}

fn bench_linear(words: &[String]) {
    println!("=== Linear ===");

    let mut distinct = 0usize;
    let elapsed = measure(|| {
        let table = count_linear(words);
        distinct = table.len();
        std::hint::black_box(table);
    });

    print_perf("Linear", words.len(), elapsed, distinct);
}

fn bench_quadratic(words: &[String], scan: ScanMode) {
    println!("=== Quadratic ({:?}) ===", scan);

    let mut distinct = 0usize;
    let elapsed = measure(|| {
        let stats = count_quadratic_with(words, scan);
        distinct = stats.len();
        std::hint::black_box(stats);
    });

    print_perf("Quadratic", words.len(), elapsed, distinct);
}

/// Mean time of `MEASURE_RUNS` calls, after `WARMUP_RUNS` untimed ones.
fn measure<F: FnMut()>(mut f: F) -> Duration {
    (0..WARMUP_RUNS).for_each(|_| f());

    let total: Duration = (0..MEASURE_RUNS).map(|_| timed(&mut f).1).sum();
    total / MEASURE_RUNS as u32
}

fn print_perf(label: &str, words: usize, elapsed: Duration, distinct: usize) {
    let secs = elapsed.as_secs_f64();
    let rate = if secs > 0.0 {
        fmt_count((words as f64 / secs) as usize)
    } else {
        "n/a".to_owned()
    };

    let rule = "-".repeat(32);
    println!("{rule}");
    println!("Mode        : {label}");
    println!("Elapsed     : {secs:.3} s");
    println!("Words       : {}", fmt_count(words));
    println!("Words/sec   : {rate}");
    println!("Distinct    : {}", fmt_count(distinct));
    println!("{rule}\n");
}

/// Formats `n` with `_` between groups of three digits.
fn fmt_count(n: usize) -> String {
    let digits = n.to_string();
    let head = digits.len() % 3;

    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    out.push_str(&digits[..head]);
    for group in digits.as_bytes()[head..].chunks(3) {
        if !out.is_empty() {
            out.push('_');
        }
        // Decimal digits are ASCII.
        out.extend(group.iter().map(|&b| b as char));
    }
    out
}
