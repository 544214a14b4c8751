//! Statistics and CountStats.

use std::time::Duration;

use crate::pipeline::PipelineOutput;

/// A snapshot of one pipeline run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CountStats {
    /// Number of normalized words counted.
    pub total_words: usize,
    /// Number of distinct normalized words.
    pub distinct_words: usize,
    /// Time spent in the linear counter.
    pub linear_elapsed: Duration,
    /// Time spent in the quadratic counter.
    pub quadratic_elapsed: Duration,
}

impl CountStats {
    /// Constructs stats from a pipeline run.
    pub fn from_output(output: &PipelineOutput) -> Self {
        Self {
            total_words: output.total_words,
            distinct_words: output.linear.len(),
            linear_elapsed: output.linear_elapsed,
            quadratic_elapsed: output.quadratic_elapsed,
        }
    }

    /// How many times slower the quadratic counter was, if measurable.
    pub fn slowdown(&self) -> Option<f64> {
        let linear = self.linear_elapsed.as_secs_f64();
        if linear > 0.0 {
            Some(self.quadratic_elapsed.as_secs_f64() / linear)
        } else {
            None
        }
    }
}

impl core::fmt::Display for CountStats {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{} words, {} distinct, linear {:.2?}, quadratic {:.2?}",
            self.total_words, self.distinct_words, self.linear_elapsed, self.quadratic_elapsed
        )?;

        if let Some(ratio) = self.slowdown() {
            write!(f, " ({:.1}x)", ratio)?;
        }

        Ok(())
    }
}
