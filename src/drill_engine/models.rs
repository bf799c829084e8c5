use std::fmt;
use serde::{Deserialize, Serialize};

use crate::drill_engine::alphabet::MAX_DISTANCE;

// ---------------------------------------------------------------------------
// Drill goals
// ---------------------------------------------------------------------------

/// Which drill a tuple was generated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DrillGoal {
    /// Recall the relative order of words whose first letters are a
    /// controlled distance apart.
    AlphabeticalOrder,
    /// Spot the first character position at which sorted words differ.
    PrefixDivergence,
}

impl fmt::Display for DrillGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrillGoal::AlphabeticalOrder => write!(f, "Alphabetical Order"),
            DrillGoal::PrefixDivergence  => write!(f, "Prefix Divergence"),
        }
    }
}

// ---------------------------------------------------------------------------
// Output tuples
// ---------------------------------------------------------------------------

/// One practice item: a fixed-size group of words in insertion order.
///
/// Words are kept verbatim; the drill asks the learner to order them, so
/// nothing here is sorted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordTuple {
    pub goal: DrillGoal,
    pub words: Vec<String>,
}

impl WordTuple {
    pub fn new(goal: DrillGoal, words: Vec<String>) -> Self {
        WordTuple { goal, words }
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl fmt::Display for WordTuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.words.join(" "))
    }
}

// ---------------------------------------------------------------------------
// Difficulty
// ---------------------------------------------------------------------------

/// Band of allowed forward distances between the anchor letter and every
/// other letter of an alphabetical tuple. Always `1 <= min <= max <= 25`,
/// including after deserialisation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawRange")]
pub struct DifficultyRange {
    min: u8,
    max: u8,
}

impl DifficultyRange {
    /// Clamp both ends into `[1, 25]`, then swap them if inverted.
    /// Out-of-range input is normalised, never rejected.
    pub fn new(min: i32, max: i32) -> Self {
        let clamp = |d: i32| d.clamp(1, MAX_DISTANCE as i32) as u8;
        let (mut lo, mut hi) = (clamp(min), clamp(max));
        if lo > hi {
            std::mem::swap(&mut lo, &mut hi);
        }
        DifficultyRange { min: lo, max: hi }
    }

    /// Single-width band `(d, d)`.
    pub fn exact(distance: i32) -> Self {
        Self::new(distance, distance)
    }

    pub fn min(self) -> usize {
        self.min as usize
    }

    pub fn max(self) -> usize {
        self.max as usize
    }

    pub fn contains(self, distance: usize) -> bool {
        (self.min()..=self.max()).contains(&distance)
    }
}

/// Wire shape of a band before normalisation.
#[derive(Deserialize)]
struct RawRange {
    min: i32,
    max: i32,
}

impl From<RawRange> for DifficultyRange {
    fn from(raw: RawRange) -> Self {
        DifficultyRange::new(raw.min, raw.max)
    }
}

impl From<(i32, i32)> for DifficultyRange {
    fn from((min, max): (i32, i32)) -> Self {
        DifficultyRange::new(min, max)
    }
}

impl fmt::Display for DifficultyRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.min, self.max)
    }
}

// ---------------------------------------------------------------------------
// Batch request
// ---------------------------------------------------------------------------

/// Parameters for a mixed batch.
///
/// Every field has a default, so a partial JSON object such as
/// `{"count": 20, "rng_seed": 7}` deserialises into a complete request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TupleRequest {
    /// Number of generation attempts; an upper bound on the output length.
    pub count: usize,
    pub tuple_size: usize,
    /// Relative weight of the alphabetical-order drill.
    pub probability_goal1: f64,
    /// Relative weight of the prefix-divergence drill.
    pub probability_goal2: f64,
    /// Exact anchor distance for alphabetical tuples.
    pub difficulty1: i32,
    /// Rank (shared prefix length) for prefix-divergence tuples.
    pub difficulty2: i32,
    pub min_prefix_length: i32,
    /// `None` draws a seed from OS entropy.
    pub rng_seed: Option<u64>,
}

impl TupleRequest {
    /// Request `count` tuples with every other field at its default.
    pub fn new(count: usize) -> Self {
        TupleRequest {
            count,
            tuple_size: 2,
            probability_goal1: 0.5,
            probability_goal2: 0.5,
            difficulty1: 13,
            difficulty2: 3,
            min_prefix_length: 2,
            rng_seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }
}

impl Default for TupleRequest {
    fn default() -> Self {
        TupleRequest::new(10)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn difficulty_range_swaps_and_clamps() {
        let r = DifficultyRange::new(30, -4);
        assert_eq!((r.min(), r.max()), (1, 25));

        let r = DifficultyRange::new(9, 3);
        assert_eq!((r.min(), r.max()), (3, 9));

        let r = DifficultyRange::exact(0);
        assert_eq!((r.min(), r.max()), (1, 1));
        assert!(r.contains(1));
        assert!(!r.contains(2));
    }

    #[test]
    fn deserialised_range_is_normalised() {
        let r: DifficultyRange = serde_json::from_str(r#"{"min":9,"max":3}"#).unwrap();
        assert_eq!((r.min(), r.max()), (3, 9));

        let r: DifficultyRange = serde_json::from_str(r#"{"min":-7,"max":40}"#).unwrap();
        assert_eq!((r.min(), r.max()), (1, 25));

        let json = serde_json::to_string(&DifficultyRange::new(4, 2)).unwrap();
        let back: DifficultyRange = serde_json::from_str(&json).unwrap();
        assert_eq!(back, DifficultyRange::new(2, 4));
    }

    #[test]
    fn partial_request_json_fills_defaults() {
        let req: TupleRequest =
            serde_json::from_str(r#"{"count": 3, "rng_seed": 9}"#).unwrap();
        assert_eq!(req.count, 3);
        assert_eq!(req.rng_seed, Some(9));
        assert_eq!(req.tuple_size, 2);
        assert_eq!(req.difficulty1, 13);
        assert_eq!(req.difficulty2, 3);
        assert_eq!(req.min_prefix_length, 2);
    }

    #[test]
    fn tuple_displays_space_joined() {
        let t = WordTuple::new(
            DrillGoal::PrefixDivergence,
            vec!["Apple".to_string(), "avocado".to_string()],
        );
        assert_eq!(t.to_string(), "Apple avocado");
        assert_eq!(t.len(), 2);
    }
}
