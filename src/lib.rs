//! # word_drill_gen
//!
//! An offline, deterministic generator of word tuples for two ordering
//! drills.
//!
//! - **Alphabetical order**: an anchor word plus words whose first letters
//!   sit a controlled number of steps further round the alphabet. The
//!   learner recalls which comes first.
//! - **Prefix divergence**: words sharing their first `rank` characters, so
//!   the first difference falls at or after position `rank`. Practice for
//!   comparing strings by hand the way a sorting routine does.
//!
//! ## How it works
//!
//! 1. Load a vocabulary (any `Vec<String>`; [`word_list::load_words`] reads
//!    JSON arrays or one-word-per-line files) and build a [`WordIndex`] once.
//! 2. Describe the batch with a [`TupleRequest`] and call
//!    [`generate_word_tuples`], or call a single goal generator from
//!    [`drill_engine::goals`] with your own RNG.
//! 3. The result is a `Vec<WordTuple>` of *at most* `count` tuples.
//!    Constraints that cannot be met drop the attempt instead of failing.
//!
//! ## Quick start
//!
//! ```rust
//! use word_drill_gen::{generate_word_tuples, TupleRequest, WordIndex};
//!
//! let index = WordIndex::new(["apple", "avocado", "banana", "blueberry", "cherry"]);
//!
//! let request = TupleRequest {
//!     difficulty1: 1,
//!     difficulty2: 1,
//!     min_prefix_length: 0,
//!     ..TupleRequest::new(5)
//! }
//! .with_seed(42);
//!
//! let batch = generate_word_tuples(&index, &request);
//! assert!(batch.len() <= 5);
//! for tuple in &batch {
//!     println!("[{}] {}", tuple.goal, tuple);
//! }
//! ```
//!
//! ## Determinism
//!
//! Pass `rng_seed: Some(u64)` (or your own seeded RNG to the `_with_rng`
//! variants) to reproduce a batch exactly. Each session owns its RNG, so one
//! shared `WordIndex` can serve many threads at once.

pub mod drill_engine;
pub mod error;
pub mod word_list;

// Convenience re-exports so callers can use `word_drill_gen::generate_word_tuples`
// directly without reaching into `drill_engine::`.
pub use drill_engine::{
    generate_word_tuples, generate_word_tuples_with_rng, DifficultyRange, DrillGoal,
    LetterBuckets, PrefixBuckets, TupleRequest, WordIndex, WordTuple,
};
pub use error::WordListError;
