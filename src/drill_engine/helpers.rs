//! Sampling helpers shared by the goal generators.
//!
//! ## RNG ordering
//!
//! Each helper consumes the RNG in a fixed order, so a seeded batch is
//! reproducible only as long as generators keep calling them in the same
//! sequence. Reordering calls changes seeded output and breaks the
//! determinism tests.

use rand::seq::{index, SliceRandom};
use rand::Rng;

/// Uniform pick from `pool`. `None` when the pool is empty.
pub fn choose_word<'a, R: Rng>(rng: &mut R, pool: &'a [String]) -> Option<&'a String> {
    pool.choose(rng)
}

/// Draw `k` words without replacement, in draw order.
///
/// Sampling is by position, so a word listed twice can appear twice.
/// Returns `None` when the pool holds fewer than `k` words.
pub fn sample_words<R: Rng>(rng: &mut R, pool: &[String], k: usize) -> Option<Vec<String>> {
    if pool.len() < k {
        return None;
    }
    Some(
        index::sample(rng, pool.len(), k)
            .into_iter()
            .map(|i| pool[i].clone())
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn pool() -> Vec<String> {
        ["ant", "bee", "cat", "dog"].iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn choose_from_empty_pool_is_none() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(choose_word(&mut rng, &[]).is_none());
    }

    #[test]
    fn sample_is_distinct_and_sized() {
        let mut rng = StdRng::seed_from_u64(42);
        let pool = pool();
        for _ in 0..50 {
            let picked = sample_words(&mut rng, &pool, 3).unwrap();
            assert_eq!(picked.len(), 3);
            let mut dedup = picked.clone();
            dedup.sort();
            dedup.dedup();
            assert_eq!(dedup.len(), 3, "sampled twice from {picked:?}");
        }
    }

    #[test]
    fn sample_larger_than_pool_is_none() {
        let mut rng = StdRng::seed_from_u64(42);
        assert!(sample_words(&mut rng, &pool(), 5).is_none());
        assert_eq!(sample_words(&mut rng, &pool(), 4).map(|v| v.len()), Some(4));
    }
}
