//! Stable ordering of word records.

use core::cmp::Ordering;

use wordfreq_types::WordStat;

/// Orders records by ascending count.
///
/// The sort is stable: records with equal counts keep their input order,
/// which for quadratic-counter output is first-occurrence order.
#[inline]
pub fn rank(stats: Vec<WordStat>) -> Vec<WordStat> {
    rank_by(stats, |a, b| a.count.cmp(&b.count))
}

/// Orders records with a caller-supplied comparator, stably.
pub fn rank_by<F>(mut stats: Vec<WordStat>, compare: F) -> Vec<WordStat>
where
    F: FnMut(&WordStat, &WordStat) -> Ordering,
{
    stats.sort_by(compare);
    stats
}
