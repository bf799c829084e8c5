use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::drill_engine::{
    goals,
    models::{DifficultyRange, TupleRequest, WordTuple},
    word_index::WordIndex,
};

/// Core dispatch: seed an RNG from the request and generate a mixed batch.
pub fn generate_word_tuples(index: &WordIndex, request: &TupleRequest) -> Vec<WordTuple> {
    let mut rng: StdRng = match request.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None       => StdRng::from_entropy(),
    };
    generate_word_tuples_with_rng(&mut rng, index, request)
}

/// Mixed batch over a caller-owned RNG.
///
/// Runs exactly `request.count` attempts. Each attempt picks a drill by the
/// goal weights and yields zero or one tuple. A prefix attempt that yields
/// nothing falls back to one alphabetical attempt.
pub fn generate_word_tuples_with_rng<R: Rng>(
    rng: &mut R,
    index: &WordIndex,
    request: &TupleRequest,
) -> Vec<WordTuple> {
    let (weight1, weight2) = goal_weights(request.probability_goal1, request.probability_goal2);
    let total = weight1 + weight2;
    let band = DifficultyRange::exact(request.difficulty1);

    // Built once per batch rather than once per prefix attempt.
    let prefixes = (weight2 > 0.0)
        .then(|| index.prefix_buckets(request.difficulty2, request.min_prefix_length));

    log::debug!(
        "mixed batch: {} attempts over {} words",
        request.count,
        index.words().len()
    );

    let mut tuples = Vec::with_capacity(request.count);
    for _ in 0..request.count {
        let r = rng.gen_range(0.0..total);
        if r < weight1 {
            tuples.extend(goals::alphabetical::generate(rng, index, band, 1, request.tuple_size));
            continue;
        }

        let produced = match &prefixes {
            Some(buckets) => {
                goals::prefix::generate_from_buckets(rng, buckets, 1, request.tuple_size)
            }
            None => Vec::new(),
        };
        if produced.is_empty() {
            log::debug!(
                "no prefix tuple at rank {}, falling back to alphabetical",
                request.difficulty2
            );
            tuples.extend(goals::alphabetical::generate(rng, index, band, 1, request.tuple_size));
        } else {
            tuples.extend(produced);
        }
    }
    tuples
}

/// Negative, NaN and infinite weights count as zero; all-zero weights fall
/// back to an even split.
fn goal_weights(p1: f64, p2: f64) -> (f64, f64) {
    let clean = |p: f64| if p.is_finite() && p > 0.0 { p.min(f64::MAX / 4.0) } else { 0.0 };
    let (w1, w2) = (clean(p1), clean(p2));
    if w1 + w2 > 0.0 {
        (w1, w2)
    } else {
        (0.5, 0.5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_are_sanitised() {
        assert_eq!(goal_weights(0.5, 0.5), (0.5, 0.5));
        assert_eq!(goal_weights(-1.0, 2.0), (0.0, 2.0));
        assert_eq!(goal_weights(f64::NAN, 0.0), (0.5, 0.5));
        assert_eq!(goal_weights(0.0, 0.0), (0.5, 0.5));
        assert_eq!(goal_weights(3.0, f64::INFINITY), (3.0, 0.0));
    }
}
