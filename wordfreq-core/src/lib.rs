//! Word frequency counting.
//!
//! Counts how often each word occurs in a corpus, two ways: a linear
//! hash-table pass and a quadratic scan over a growing record list. The
//! quadratic output is ranked by count and folded back into a table, and
//! both tables must agree.
//!
//! ```
//! use wordfreq_core::analyzer::normalize;
//! use wordfreq_core::count::{count_linear, count_quadratic, rank, to_table};
//!
//! let words = normalize(["The", "cheese!", "the"]);
//! let linear = count_linear(&words);
//! let adapted = to_table(rank(count_quadratic(&words)));
//!
//! assert_eq!(linear, adapted);
//! assert_eq!(linear.lookup("the"), (2, true));
//! ```

pub mod analyzer;
pub mod arena;
pub mod count;
pub mod pipeline;
pub mod source;
pub mod stats;

pub use count::FrequencyTable;
pub use pipeline::{timed, Pipeline, PipelineConfig, PipelineOutput};
pub use stats::CountStats;
pub use wordfreq_types::{Count, SourceError, WordStat};
