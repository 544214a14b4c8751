//! Fixed counting pipeline.
//!
//! ```text
//! raw tokens -> normalize -> count_linear ------------------------> table A
//!                         \-> count_quadratic -> rank -> to_table -> table B
//! ```
//!
//! Every stage runs to completion before the next one starts, and both
//! tables are always built so they can be checked against each other.

use std::time::{Duration, Instant};

use log::debug;
use wordfreq_types::WordStat;

use crate::analyzer::normalizer::{NormalizerConfig, WordNormalizer};
use crate::count::{count_linear, count_quadratic_with, rank, to_table, FrequencyTable, ScanMode};
use crate::stats::CountStats;

/// Runs `f` and returns its result together with the wall-clock time it took.
#[inline]
pub fn timed<T, F>(f: F) -> (T, Duration)
where
    F: FnOnce() -> T,
{
    let start = Instant::now();
    let value = f();
    (value, start.elapsed())
}

/// Pipeline configuration options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PipelineConfig {
    /// Word normalization rules.
    pub normalizer: NormalizerConfig,
    /// Record scan strategy of the quadratic counter.
    pub scan: ScanMode,
}

impl PipelineConfig {
    /// Configuration that scans every record in the quadratic counter.
    pub const fn strict() -> Self {
        Self {
            normalizer: NormalizerConfig {
                min_len: 2,
                keep_article: true,
            },
            scan: ScanMode::Exhaustive,
        }
    }
}

/// Everything one pipeline run produces.
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    /// Number of normalized words.
    pub total_words: usize,
    /// Table built by the linear counter.
    pub linear: FrequencyTable,
    /// Quadratic-counter records after ranking.
    pub ranked: Vec<WordStat>,
    /// Table adapted from `ranked`.
    pub table: FrequencyTable,
    /// Time spent in the linear counter.
    pub linear_elapsed: Duration,
    /// Time spent in the quadratic counter.
    pub quadratic_elapsed: Duration,
}

impl PipelineOutput {
    /// Returns `true` if both counting paths produced the same table.
    #[must_use]
    pub fn agree(&self) -> bool {
        self.linear == self.table
    }

    /// Looks up an already normalized word in the adapted table.
    pub fn lookup(&self, word: &str) -> (wordfreq_types::Count, bool) {
        self.table.lookup(word)
    }

    /// Returns a statistics snapshot of this run.
    pub fn stats(&self) -> CountStats {
        CountStats::from_output(self)
    }
}

/// Word counting pipeline.
#[derive(Debug, Clone, Copy, Default)]
pub struct Pipeline {
    config: PipelineConfig,
    normalizer: WordNormalizer,
}

impl Pipeline {
    /// Creates a pipeline with the given configuration.
    pub const fn new(config: PipelineConfig) -> Self {
        Self {
            config,
            normalizer: WordNormalizer::new(config.normalizer),
        }
    }

    /// Returns the active configuration.
    pub const fn config(&self) -> PipelineConfig {
        self.config
    }

    /// Runs every stage over `tokens`.
    pub fn run<I, S>(&self, tokens: I) -> PipelineOutput
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = self.normalizer.normalize(tokens);
        debug!("normalized {} words", words.len());

        let (linear, linear_elapsed) = timed(|| count_linear(&words));
        debug!(
            "linear counter: {} distinct in {:.2?}",
            linear.len(),
            linear_elapsed
        );

        let (stats, quadratic_elapsed) = timed(|| count_quadratic_with(&words, self.config.scan));
        debug!(
            "quadratic counter ({:?}): {} distinct in {:.2?}",
            self.config.scan,
            stats.len(),
            quadratic_elapsed
        );

        let ranked = rank(stats);
        let table = to_table(ranked.clone());

        PipelineOutput {
            total_words: words.len(),
            linear,
            ranked,
            table,
            linear_elapsed,
            quadratic_elapsed,
        }
    }
}
