//! Bump Arena for Word Records
//!
//! Backs the quadratic counter. Every distinct word is appended once to a
//! single contiguous buffer and addressed by its slot index; the counts live
//! in a parallel vector so an increment never touches the text.
//!
//! ## Memory Layout
//!
//! ```text
//! Text Buffer: [the][cheese][milk]...[free space]
//!              ^    ^       ^
//! Spans:      (0,3) (3,6)   (9,4) ...
//! Counts:      2    1       1
//! ```
//!
//! Slots are handed out in insertion order, so iterating the arena yields
//! records in first-occurrence order.

use wordfreq_types::{Count, WordStat};

/// Location of one word inside the text buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WordSpan {
    offset: usize,
    len: usize,
}

impl WordSpan {
    /// Creates a new word span.
    #[inline(always)]
    pub const fn new(offset: usize, len: usize) -> Self {
        Self { offset, len }
    }

    /// Returns the byte offset in the arena.
    #[inline(always)]
    pub const fn offset(self) -> usize {
        self.offset
    }

    /// Returns the byte length.
    #[inline(always)]
    pub const fn len(self) -> usize {
        self.len
    }

    /// Returns true for a zero-length span.
    #[inline(always)]
    pub const fn is_empty(self) -> bool {
        self.len == 0
    }
}

/// Ordered, position-addressed store of `(word, count)` records.
pub struct WordArena {
    /// Contiguous text of every stored word
    buffer: String,
    /// One span per slot
    spans: Vec<WordSpan>,
    /// One count per slot
    counts: Vec<Count>,
}

impl Default for WordArena {
    fn default() -> Self {
        Self::new()
    }
}

impl WordArena {
    /// Creates a new empty arena.
    pub fn new() -> Self {
        Self::with_capacity(4 * 1024, 256)
    }

    /// Creates a new arena with pre-allocated capacity.
    pub fn with_capacity(text_cap: usize, word_cap: usize) -> Self {
        Self {
            buffer: String::with_capacity(text_cap),
            spans: Vec::with_capacity(word_cap),
            counts: Vec::with_capacity(word_cap),
        }
    }

    /// Returns the number of stored records.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    /// Returns true if no records are stored.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Appends a new record with count 1 and returns its slot.
    ///
    /// Does not check for an existing record with the same word.
    #[inline]
    pub fn push(&mut self, word: &str) -> usize {
        let slot = self.spans.len();
        self.spans.push(WordSpan::new(self.buffer.len(), word.len()));
        self.buffer.push_str(word);
        self.counts.push(1);
        slot
    }

    /// Gets the word stored in `slot`.
    #[inline(always)]
    pub fn word(&self, slot: usize) -> Option<&str> {
        let span = self.spans.get(slot)?;
        self.buffer.get(span.offset()..span.offset() + span.len())
    }

    /// Gets the count stored in `slot`.
    #[inline(always)]
    pub fn count(&self, slot: usize) -> Option<Count> {
        self.counts.get(slot).copied()
    }

    /// Adds one occurrence to `slot`. Returns false if the slot is unknown.
    #[inline(always)]
    pub fn increment(&mut self, slot: usize) -> bool {
        match self.counts.get_mut(slot) {
            Some(count) => {
                *count += 1;
                true
            }
            None => false,
        }
    }

    /// Iterates `(slot, word)` pairs in insertion order.
    pub fn words(&self) -> impl Iterator<Item = (usize, &str)> + '_ {
        self.spans
            .iter()
            .enumerate()
            .map(|(slot, span)| (slot, &self.buffer[span.offset()..span.offset() + span.len()]))
    }

    /// Clears all records, keeping capacity.
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.spans.clear();
        self.counts.clear();
    }

    /// Converts the arena into owned records in insertion order.
    pub fn into_stats(self) -> Vec<WordStat> {
        self.words()
            .zip(self.counts.iter())
            .map(|((_, word), &count)| WordStat::new(word, count))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_push_get() {
        let mut arena = WordArena::new();

        let s0 = arena.push("the");
        let s1 = arena.push("cheese");
        let s2 = arena.push("milk");

        assert_eq!((s0, s1, s2), (0, 1, 2));
        assert_eq!(arena.word(s0), Some("the"));
        assert_eq!(arena.word(s1), Some("cheese"));
        assert_eq!(arena.word(s2), Some("milk"));
        assert_eq!(arena.count(s1), Some(1));
    }

    #[test]
    fn increment_only_touches_slot() {
        let mut arena = WordArena::new();
        arena.push("the");
        arena.push("cheese");

        assert!(arena.increment(0));
        assert!(arena.increment(0));

        assert_eq!(arena.count(0), Some(3));
        assert_eq!(arena.count(1), Some(1));
        assert_eq!(arena.word(0), Some("the"));
    }

    #[test]
    fn unknown_slot() {
        let mut arena = WordArena::new();
        assert_eq!(arena.word(0), None);
        assert_eq!(arena.count(0), None);
        assert!(!arena.increment(0));
    }

    #[test]
    fn words_in_insertion_order() {
        let mut arena = WordArena::with_capacity(16, 4);
        for w in ["zeta", "alpha", "mu"] {
            arena.push(w);
        }
        let words: Vec<_> = arena.words().map(|(_, w)| w).collect();
        assert_eq!(words, ["zeta", "alpha", "mu"]);
    }

    #[test]
    fn into_stats_keeps_order_and_counts() {
        let mut arena = WordArena::new();
        arena.push("the");
        arena.push("cheese");
        arena.increment(0);

        assert_eq!(
            arena.into_stats(),
            vec![WordStat::new("the", 2), WordStat::new("cheese", 1)]
        );
    }

    #[test]
    fn clear_resets() {
        let mut arena = WordArena::new();
        for i in 0..100 {
            arena.push(&format!("word{}", i));
        }
        arena.clear();
        assert!(arena.is_empty());
        assert_eq!(arena.len(), 0);
        assert_eq!(arena.word(0), None);
    }

    #[test]
    fn grows_past_initial_capacity() {
        let mut arena = WordArena::with_capacity(8, 1);
        let long = "x".repeat(10_000);
        let slot = arena.push(&long);
        assert_eq!(arena.word(slot), Some(long.as_str()));
    }
}
