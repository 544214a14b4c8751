//! Frequency tables, the stat-list adapter and lookup.

use core::fmt;

use rustc_hash::FxHashMap;
use wordfreq_types::{Count, WordStat};

/// Mapping from word to count.
///
/// Keys are unique by construction. The sum of all counts equals the
/// number of words that went into the table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: FxHashMap<String, Count>,
}

impl FrequencyTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty table sized for `distinct` words.
    pub fn with_capacity(distinct: usize) -> Self {
        Self {
            counts: FxHashMap::with_capacity_and_hasher(distinct, Default::default()),
        }
    }

    /// Returns the count for `word`, if present.
    #[inline(always)]
    pub fn get(&self, word: &str) -> Option<Count> {
        self.counts.get(word).copied()
    }

    /// Overwrites the count for `word`.
    #[inline]
    pub fn set(&mut self, word: impl Into<String>, count: Count) {
        self.counts.insert(word.into(), count);
    }

    /// Returns `(count, true)` for a known word and `(0, false)` otherwise.
    ///
    /// The query is matched as given; callers normalize it first.
    #[inline]
    pub fn lookup(&self, word: &str) -> (Count, bool) {
        match self.get(word) {
            Some(count) => (count, true),
            None => (0, false),
        }
    }

    /// Number of distinct words.
    #[inline(always)]
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Returns `true` if the table holds no words.
    #[inline(always)]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> Count {
        self.counts.values().sum()
    }

    /// Iterates `(word, count)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Count)> + '_ {
        self.counts.iter().map(|(w, &c)| (w.as_str(), c))
    }

    /// Adds every count of `other` into `self`, key by key.
    ///
    /// Merging tables built from disjoint slices of a word sequence gives the
    /// table of the whole sequence.
    pub fn merge(&mut self, other: FrequencyTable) {
        self.counts.reserve(other.len());
        for (word, count) in other.counts {
            *self.counts.entry(word).or_insert(0) += count;
        }
    }

    pub(crate) fn counts_mut(&mut self) -> &mut FxHashMap<String, Count> {
        &mut self.counts
    }
}

impl FromIterator<WordStat> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = WordStat>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut table = FrequencyTable::with_capacity(iter.size_hint().0);
        for stat in iter {
            table.set(stat.word, stat.count);
        }
        table
    }
}

impl fmt::Display for FrequencyTable {
    /// Writes `map[word:count ...]` with words sorted.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));

        f.write_str("map[")?;
        for (i, (word, count)) in entries.into_iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}:{}", word, count)?;
        }
        f.write_str("]")
    }
}

/// Projects a record list into a table, one entry per record.
///
/// Records are expected to carry unique words. If a word repeats, the last
/// record wins.
pub fn to_table(stats: Vec<WordStat>) -> FrequencyTable {
    stats.into_iter().collect()
}

/// Looks up `word` in `table`. See [`FrequencyTable::lookup`].
#[inline]
pub fn lookup(table: &FrequencyTable, word: &str) -> (Count, bool) {
    table.lookup(word)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> FrequencyTable {
        to_table(vec![WordStat::new("the", 2), WordStat::new("cheese", 1)])
    }

    #[test]
    fn lookup_hit_and_miss() {
        let table = sample();
        assert_eq!(lookup(&table, "milk"), (0, false));
        assert_eq!(lookup(&table, "the"), (2, true));
    }

    #[test]
    fn lookup_does_not_normalize() {
        let table = sample();
        assert_eq!(table.lookup("The"), (0, false));
        assert_eq!(table.lookup(""), (0, false));
    }

    #[test]
    fn to_table_projects_each_record() {
        let table = sample();
        assert_eq!(table.len(), 2);
        assert_eq!(table.get("the"), Some(2));
        assert_eq!(table.get("cheese"), Some(1));
        assert_eq!(table.total(), 3);
    }

    #[test]
    fn to_table_order_independent() {
        let a = to_table(vec![WordStat::new("x", 1), WordStat::new("yy", 5)]);
        let b = to_table(vec![WordStat::new("yy", 5), WordStat::new("x", 1)]);
        assert_eq!(a, b);
    }

    #[test]
    fn empty_table() {
        let table = to_table(Vec::new());
        assert!(table.is_empty());
        assert_eq!(table.total(), 0);
        assert_eq!(table.to_string(), "map[]");
    }

    #[test]
    fn merge_sums_keywise() {
        let mut left = sample();
        let right = to_table(vec![WordStat::new("the", 3), WordStat::new("milk", 1)]);
        let expected_total = left.total() + right.total();

        left.merge(right);

        assert_eq!(left.get("the"), Some(5));
        assert_eq!(left.get("cheese"), Some(1));
        assert_eq!(left.get("milk"), Some(1));
        assert_eq!(left.total(), expected_total);
    }

    #[test]
    fn display_sorted_by_word() {
        assert_eq!(sample().to_string(), "map[cheese:1 the:2]");
    }
}
