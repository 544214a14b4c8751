//! Pairwise-scan counting.
//!
//! For every incoming word the whole list of records seen so far is scanned
//! for a match. This costs O(distinct words) per word and O(n²) overall on
//! a corpus with a large vocabulary. It exists as the baseline the linear
//! counter is measured against, so it is left unoptimized on purpose.

use crate::arena::WordArena;
use wordfreq_types::WordStat;

/// How the record list is scanned for a matching word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanMode {
    /// Stop at the first record whose word matches.
    #[default]
    FirstMatch,
    /// Visit every record and increment each one that matches.
    ///
    /// Gives the same result as `FirstMatch` as long as records are unique,
    /// which the counter itself guarantees.
    Exhaustive,
}

/// Counts words by linear scan, returning records in first-occurrence order.
pub fn count_quadratic<I, S>(words: I) -> Vec<WordStat>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    count_quadratic_with(words, ScanMode::default())
}

/// Same as [`count_quadratic`] with an explicit [`ScanMode`].
pub fn count_quadratic_with<I, S>(words: I, mode: ScanMode) -> Vec<WordStat>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut arena = WordArena::new();

    for word in words {
        let word = word.as_ref();
        let found = match mode {
            ScanMode::FirstMatch => scan_first(&mut arena, word),
            ScanMode::Exhaustive => scan_all(&mut arena, word),
        };

        if !found {
            arena.push(word);
        }
    }

    arena.into_stats()
}

#[inline]
fn scan_first(arena: &mut WordArena, word: &str) -> bool {
    let hit = arena
        .words()
        .find(|&(_, stored)| stored == word)
        .map(|(slot, _)| slot);

    match hit {
        Some(slot) => arena.increment(slot),
        None => false,
    }
}

#[inline]
fn scan_all(arena: &mut WordArena, word: &str) -> bool {
    let mut found = false;
    for slot in 0..arena.len() {
        if arena.word(slot) == Some(word) {
            found |= arena.increment(slot);
        }
    }
    found
}
