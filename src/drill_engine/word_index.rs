use std::collections::{BTreeMap, BTreeSet};

use crate::drill_engine::alphabet::first_letter;

/// The immutable vocabulary of one generation session plus its first-letter
/// buckets.
///
/// Build it once and pass it by reference to every generator call. Prefix
/// buckets depend on the requested rank, so they are built on demand with
/// [`WordIndex::prefix_buckets`].
#[derive(Debug, Clone)]
pub struct WordIndex {
    words: Vec<String>,
    letters: LetterBuckets,
}

impl WordIndex {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: Vec<String> = words.into_iter().map(Into::into).collect();
        let letters = LetterBuckets::build(&words);
        log::info!(
            "indexed {} words under {} starting letters",
            words.len(),
            letters.letters().len()
        );
        WordIndex { words, letters }
    }

    /// Words in load order, verbatim.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn letter_buckets(&self) -> &LetterBuckets {
        &self.letters
    }

    pub fn prefix_buckets(&self, rank: i32, min_prefix_length: i32) -> PrefixBuckets {
        PrefixBuckets::build(&self.words, rank, min_prefix_length)
    }
}

// ---------------------------------------------------------------------------
// First-letter buckets
// ---------------------------------------------------------------------------

/// Words grouped by lower-cased first letter. Words that are empty or start
/// with anything outside `a..=z` are left out.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterBuckets {
    buckets: BTreeMap<char, Vec<String>>,
    letters: Vec<char>,
}

impl LetterBuckets {
    pub fn build(words: &[String]) -> Self {
        let mut buckets: BTreeMap<char, Vec<String>> = BTreeMap::new();
        for word in words {
            if let Some(letter) = first_letter(word) {
                buckets.entry(letter).or_default().push(word.clone());
            }
        }
        let letters = buckets.keys().copied().collect();
        LetterBuckets { buckets, letters }
    }

    /// Letters that have at least one word, sorted.
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    pub fn words_for(&self, letter: char) -> Option<&[String]> {
        self.buckets.get(&letter).map(Vec::as_slice)
    }

    pub fn contains(&self, letter: char) -> bool {
        self.buckets.contains_key(&letter)
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Prefix buckets
// ---------------------------------------------------------------------------

/// Words grouped by their lower-cased first `rank` characters.
///
/// A word shorter than `rank` but longer than `min_prefix_length` joins every
/// key it is itself a prefix of, so a stem like "car" sits next to "cargo"
/// and "carpet". Words of length `<= min_prefix_length` that are also
/// shorter than `rank` are indexed under no key at all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrefixBuckets {
    rank: usize,
    buckets: BTreeMap<String, Vec<String>>,
    keys: Vec<String>,
}

impl PrefixBuckets {
    /// A `rank` of zero or below collapses every word into the single
    /// empty-string bucket.
    pub fn build(words: &[String], rank: i32, min_prefix_length: i32) -> Self {
        let rank = rank.max(0) as usize;
        let lowered: Vec<String> = words.iter().map(|w| w.to_lowercase()).collect();

        let universe: BTreeSet<String> =
            lowered.iter().map(|w| truncate(w, rank)).collect();

        let mut buckets: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for (word, lower) in words.iter().zip(&lowered) {
            let len = lower.chars().count();
            if len >= rank {
                buckets.entry(truncate(lower, rank)).or_default().push(word.clone());
            } else if (len as i64) > i64::from(min_prefix_length) {
                // Keys are sorted, so every key extending `lower` follows it.
                for key in universe
                    .range(lower.clone()..)
                    .take_while(|key| key.starts_with(lower.as_str()))
                {
                    buckets.entry(key.clone()).or_default().push(word.clone());
                }
            }
        }

        let keys = buckets.keys().cloned().collect();
        PrefixBuckets { rank, buckets, keys }
    }

    pub fn rank(&self) -> usize {
        self.rank
    }

    /// Prefixes that have at least one word, sorted.
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    pub fn words_for(&self, prefix: &str) -> Option<&[String]> {
        self.buckets.get(prefix).map(Vec::as_slice)
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

fn truncate(word: &str, len: usize) -> String {
    word.chars().take(len).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fruit() -> WordIndex {
        WordIndex::new(["apple", "avocado", "banana", "blueberry", "cherry"])
    }

    fn sorted(words: &[String]) -> Vec<&str> {
        let mut v: Vec<&str> = words.iter().map(String::as_str).collect();
        v.sort_unstable();
        v
    }

    #[test]
    fn letter_buckets_group_by_first_letter() {
        let index = fruit();
        let letters = index.letter_buckets();
        assert_eq!(letters.letters(), &['a', 'b', 'c']);
        assert_eq!(sorted(letters.words_for('b').unwrap()), ["banana", "blueberry"]);
        assert!(letters.words_for('d').is_none());
    }

    #[test]
    fn letter_buckets_skip_empty_and_symbol_words() {
        let index = WordIndex::new(["", "3rd", "-ish", "Zebra", "zoo"]);
        let letters = index.letter_buckets();
        assert_eq!(letters.letters(), &['z']);
        // Case is folded for the key but the word is kept verbatim.
        assert_eq!(letters.words_for('z').unwrap(), &["Zebra", "zoo"]);
    }

    #[test]
    fn prefix_buckets_rank_one() {
        let buckets = fruit().prefix_buckets(1, 0);
        assert_eq!(buckets.keys(), &["a", "b", "c"]);
        assert_eq!(sorted(buckets.words_for("a").unwrap()), ["apple", "avocado"]);
        assert_eq!(buckets.words_for("c").unwrap(), &["cherry"]);
    }

    #[test]
    fn non_positive_rank_collapses_into_one_bucket() {
        let buckets = fruit().prefix_buckets(-3, 2);
        assert_eq!(buckets.keys(), &[""]);
        assert_eq!(buckets.words_for("").unwrap().len(), 5);
    }

    #[test]
    fn short_stems_join_every_extending_prefix() {
        let index = WordIndex::new(["cargo", "Carpet", "car", "cat", "ca"]);
        let buckets = index.prefix_buckets(4, 2);
        assert_eq!(sorted(buckets.words_for("carg").unwrap()), ["car", "cargo"]);
        assert_eq!(sorted(buckets.words_for("carp").unwrap()), ["Carpet", "car"]);
        // "car" also lands under its own truncated form.
        assert_eq!(buckets.words_for("car").unwrap(), &["car"]);
        assert!(buckets.words_for("carg").unwrap().iter().all(|w| w != "cat"));
        // "ca" is exactly min_prefix_length long and is not indexed anywhere.
        for key in buckets.keys() {
            assert!(buckets.words_for(key).unwrap().iter().all(|w| w != "ca"));
        }
    }

    #[test]
    fn rebuilding_gives_the_same_buckets() {
        let a = fruit();
        let b = fruit();
        assert_eq!(a.letter_buckets(), b.letter_buckets());
        assert_eq!(a.prefix_buckets(2, 1), b.prefix_buckets(2, 1));
    }
}
