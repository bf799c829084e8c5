//! Per-goal tuple generators.
//!
//! Both generators share the same shape:
//!
//! ```ignore
//! pub fn generate<R: Rng>(
//!     rng: &mut R,
//!     index: &WordIndex,
//!     <difficulty>,
//!     count: usize,
//!     tuple_size: usize,
//! ) -> Vec<WordTuple>
//! ```
//!
//! Neither ever fails: attempts that cannot be satisfied are dropped and the
//! returned vector is simply shorter than `count`. The mixed generator in
//! `generator.rs` dispatches to these.

/// Anchor letter plus letters a controlled distance forward of it.
pub mod alphabetical;
/// Words sharing a common prefix of length `rank`.
pub mod prefix;
