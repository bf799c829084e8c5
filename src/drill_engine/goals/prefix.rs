use rand::Rng;

use crate::drill_engine::{
    helpers::sample_words,
    models::{DrillGoal, WordTuple},
    word_index::{PrefixBuckets, WordIndex},
};

/// Generate up to `count` prefix-divergence tuples sharing a `rank`-length
/// prefix, so the words first differ at or after position `rank`.
pub fn generate<R: Rng>(
    rng: &mut R,
    index: &WordIndex,
    rank: i32,
    count: usize,
    tuple_size: usize,
    min_prefix_length: i32,
) -> Vec<WordTuple> {
    if index.is_empty() {
        return Vec::new();
    }
    let buckets = index.prefix_buckets(rank, min_prefix_length);
    generate_from_buckets(rng, &buckets, count, tuple_size)
}

/// Same as [`generate`] over buckets that are already built.
///
/// Each attempt draws one prefix uniformly. A bucket smaller than
/// `tuple_size` wastes the attempt; no other prefix is tried in its place.
pub fn generate_from_buckets<R: Rng>(
    rng: &mut R,
    buckets: &PrefixBuckets,
    count: usize,
    tuple_size: usize,
) -> Vec<WordTuple> {
    let keys = buckets.keys();
    if keys.is_empty() || tuple_size == 0 {
        return Vec::new();
    }

    let mut tuples = Vec::with_capacity(count);
    for _ in 0..count {
        let prefix = &keys[rng.gen_range(0..keys.len())];
        let pool = buckets.words_for(prefix).unwrap_or_default();
        match sample_words(rng, pool, tuple_size) {
            Some(words) => tuples.push(WordTuple::new(DrillGoal::PrefixDivergence, words)),
            None => log::debug!(
                "skipped prefix {prefix:?} at rank {}: {} words, need {tuple_size}",
                buckets.rank(),
                pool.len()
            ),
        }
    }
    tuples
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn fruit() -> WordIndex {
        WordIndex::new(["apple", "avocado", "banana", "blueberry", "cherry"])
    }

    #[test]
    fn singleton_bucket_is_never_emitted() {
        let index = fruit();
        let mut produced = 0;
        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            for tuple in generate(&mut rng, &index, 1, 1, 2, 0) {
                produced += 1;
                let first = tuple.words()[0].chars().next().unwrap();
                assert!(first == 'a' || first == 'b', "seed={seed}: {tuple}");
                assert!(tuple.words().iter().all(|w| w.starts_with(first)));
                assert_ne!(tuple.words()[0], tuple.words()[1]);
            }
        }
        assert!(produced > 0);
        assert!(produced < 200, "the 'c' bucket should waste some attempts");
    }

    #[test]
    fn rank_beyond_every_word_yields_nothing() {
        let index = fruit();
        let mut rng = StdRng::seed_from_u64(8);
        assert!(generate(&mut rng, &index, 20, 10, 2, 2).is_empty());
    }

    #[test]
    fn empty_index_yields_nothing() {
        let index = WordIndex::new(Vec::<String>::new());
        let mut rng = StdRng::seed_from_u64(8);
        assert!(generate(&mut rng, &index, 2, 10, 2, 2).is_empty());
    }

    #[test]
    fn degenerate_rank_samples_whole_list() {
        let index = fruit();
        let mut rng = StdRng::seed_from_u64(21);
        let tuples = generate(&mut rng, &index, 0, 6, 5, 2);
        assert_eq!(tuples.len(), 6);
        assert!(tuples.iter().all(|t| t.len() == 5));
    }

    #[test]
    fn tuples_share_the_rank_prefix_case_insensitively() {
        let index = WordIndex::new(["Stone", "stove", "story", "Storm", "stoic", "apple"]);
        let mut rng = StdRng::seed_from_u64(4);
        let tuples = generate(&mut rng, &index, 3, 30, 3, 2);
        assert!(!tuples.is_empty());
        for tuple in &tuples {
            assert!(tuple.words().iter().all(|w| w.to_lowercase().starts_with("sto")));
        }
    }
}
