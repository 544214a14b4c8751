//! Whitespace Tokenizer
//!
//! First stage of the pipeline: turns raw corpus text into the token
//! sequence the normalizer consumes. A token is any maximal run of
//! characters that contains no whitespace (`char::is_whitespace`, which
//! includes NBSP and the other Unicode spaces).
//!
//! ```rust
//! use wordfreq_core::analyzer::tokenizer::Tokenizer;
//!
//! let mut tokens = Vec::new();
//! Tokenizer::new().tokenize("The  cheese,\tis\nold", |t, _| tokens.push(t));
//! assert_eq!(tokens, ["The", "cheese,", "is", "old"]);
//! ```
//!
//! Tokens are slices of the input. Nothing is lowercased or stripped here;
//! that is the normalizer's job.

use core::str;
use memchr::memchr3_iter;

/// Splits text on whitespace.
///
/// Emits `(token, position)` pairs left to right without allocating.
/// Space, tab and newline are located with `memchr3`. Each chunk between
/// them is split again on the remaining whitespace (CR, VT, FF, NBSP,
/// U+2000..=U+200A, ...), so CRLF input tokenizes the same as LF input.
#[derive(Debug, Default, Copy, Clone)]
pub struct Tokenizer;

impl Tokenizer {
    /// Creates a tokenizer.
    #[inline]
    pub const fn new() -> Self {
        Self
    }

    /// Tokenizes `text` and emits each token with its ordinal position.
    #[inline]
    pub fn tokenize<'t, F>(&self, text: &'t str, mut emit: F)
    where
        F: FnMut(&'t str, usize),
    {
        let bytes = text.as_bytes();
        let mut start = 0usize;
        let mut pos = 0usize;

        let mut chunk = move |from: usize, to: usize, pos: &mut usize| {
            // SAFETY: `from` and `to` sit on ASCII whitespace boundaries (or the
            // ends of the input), and ASCII bytes are never UTF-8 continuation
            // bytes, so the subslice is valid UTF-8.
            let piece = unsafe { str::from_utf8_unchecked(&bytes[from..to]) };
            for token in piece.split(char::is_whitespace) {
                if !token.is_empty() {
                    emit(token, *pos);
                    *pos += 1;
                }
            }
        };

        for i in memchr3_iter(b' ', b'\t', b'\n', bytes) {
            if start < i {
                chunk(start, i, &mut pos);
            }
            start = i + 1;
        }

        if start < bytes.len() {
            chunk(start, bytes.len(), &mut pos);
        }
    }
}

/// Splits text on whitespace into owned tokens.
pub fn split_words(text: &str) -> Vec<String> {
    let mut words = Vec::new();
    Tokenizer::new().tokenize(text, |token, _| words.push(token.to_owned()));
    words
}
