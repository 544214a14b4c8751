//! Core types for the wordfreq counting pipeline.
//!
//! This crate holds the records and errors that every pipeline stage
//! agrees on. It has no dependencies so that the counters, the binaries
//! and any downstream consumer can share one definition of a count record.

#![warn(missing_docs)]

use core::fmt;
use std::io;
use std::path::PathBuf;

/// Number of occurrences of a word.
///
/// Every count that reaches a table or record is at least 1. A 64-bit
/// counter keeps the "sum of counts equals number of words" invariant
/// intact for any corpus that fits in memory.
pub type Count = u64;

/// One distinct normalized word and how often it was seen.
///
/// Created with a count of 1 on first occurrence. The count is the only
/// field that changes afterwards, and only the counter that owns the
/// record bumps it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WordStat {
    /// Normalized word (lowercase ASCII letters).
    pub word: String,
    /// Observed frequency, always `>= 1`.
    pub count: Count,
}

impl WordStat {
    /// Creates a record for a word seen once.
    #[inline]
    pub fn first(word: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            count: 1,
        }
    }

    /// Creates a record with an explicit count.
    #[inline]
    pub fn new(word: impl Into<String>, count: Count) -> Self {
        debug_assert!(count >= 1, "word stat count must be at least 1");
        Self {
            word: word.into(),
            count,
        }
    }

    /// Records one more occurrence.
    #[inline(always)]
    pub fn increment(&mut self) {
        self.count += 1;
    }
}

impl fmt::Display for WordStat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{} {}}}", self.word, self.count)
    }
}

/// Errors raised while pulling raw tokens from a source.
///
/// Only the I/O edge of the pipeline can fail; counting itself is total.
#[derive(Debug)]
pub enum SourceError {
    /// The input file could not be opened.
    Open {
        /// Path that was requested.
        path: PathBuf,
        /// Underlying I/O failure.
        source: io::Error,
    },
    /// Reading from an already opened source failed.
    Read {
        /// Underlying I/O failure.
        source: io::Error,
    },
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceError::Open { path, source } => {
                write!(f, "error on reading file {}: {}", path.display(), source)
            }
            SourceError::Read { source } => write!(f, "error on reading words: {}", source),
        }
    }
}

impl core::error::Error for SourceError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            SourceError::Open { source, .. } | SourceError::Read { source } => Some(source),
        }
    }
}

impl From<io::Error> for SourceError {
    fn from(source: io::Error) -> Self {
        SourceError::Read { source }
    }
}
