//! Core drill engine: word indexing and tuple generation.
//!
//! ## Module overview
//!
//! | Module       | Purpose |
//! |--------------|---------|
//! | `models`     | Shared types: drill goals, tuples, difficulty band, batch request |
//! | `alphabet`   | Letter indices and forward distances over `a..=z` |
//! | `word_index` | Immutable word list with first-letter and prefix buckets |
//! | `helpers`    | Uniform picks and sampling without replacement |
//! | `generator`  | Entry point `generate_word_tuples()`; mixes the two goals |
//! | `goals`      | The alphabetical-order and prefix-divergence generators |

pub mod alphabet;
pub mod generator;
pub mod goals;
pub mod helpers;
pub mod models;
pub mod word_index;

// Re-export the public API surface so callers can use
// `drill_engine::generate_word_tuples` without reaching into sub-modules.
pub use generator::{generate_word_tuples, generate_word_tuples_with_rng};
pub use models::{DifficultyRange, DrillGoal, TupleRequest, WordTuple};
pub use word_index::{LetterBuckets, PrefixBuckets, WordIndex};
