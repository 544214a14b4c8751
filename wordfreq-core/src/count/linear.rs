//! Hash-based counting.

use crate::count::table::FrequencyTable;

/// Counts words with one keyed lookup per word.
///
/// Runs in O(n) expected time. A word's key is allocated only on its first
/// occurrence.
pub fn count_linear<I, S>(words: I) -> FrequencyTable
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let words = words.into_iter();
    let mut table = FrequencyTable::with_capacity(words.size_hint().0 / 4);
    let counts = table.counts_mut();

    for word in words {
        let word = word.as_ref();
        match counts.get_mut(word) {
            Some(count) => *count += 1,
            None => {
                counts.insert(word.to_owned(), 1);
            }
        }
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_repeats() {
        let table = count_linear(["the", "the", "cheese"]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.get("the"), Some(2));
        assert_eq!(table.get("cheese"), Some(1));
    }

    #[test]
    fn empty_input() {
        let table = count_linear(Vec::<String>::new());
        assert!(table.is_empty());
    }

    #[test]
    fn total_matches_input_len() {
        let words: Vec<String> = (0..1000).map(|i| format!("w{}", i % 37)).collect();
        let table = count_linear(&words);
        assert_eq!(table.total(), words.len() as u64);
        assert_eq!(table.len(), 37);
    }

    #[test]
    fn order_of_input_irrelevant() {
        let forward = count_linear(["milk", "the", "milk", "a"]);
        let backward = count_linear(["a", "milk", "the", "milk"]);
        assert_eq!(forward, backward);
    }

    #[test]
    fn partitioned_counts_merge_to_whole() {
        let words = ["the", "cheese", "the", "milk", "a", "the", "milk"];
        let whole = count_linear(words);

        let mut left = count_linear(&words[..3]);
        left.merge(count_linear(&words[3..]));

        assert_eq!(left, whole);
    }
}
