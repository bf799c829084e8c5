//! Demo of both drills and the mixed batch.
//!
//! Run with: `cargo run --example demo [-- path/to/words.json]`
//!
//! Without an argument a small built-in vocabulary is used. With one, the
//! file is read as a JSON array of strings (`.json`) or one word per line.
//!
//! ## Key concepts demonstrated
//!
//! - `WordIndex::new(words)` is built once and shared by every call.
//! - `rng_seed: Some(u64)` makes every batch reproducible.
//! - Requested counts are upper bounds: unsatisfiable attempts are dropped.

use rand::rngs::StdRng;
use rand::SeedableRng;
use word_drill_gen::drill_engine::goals::{alphabetical, prefix};
use word_drill_gen::word_list::{load_words, show, to_json};
use word_drill_gen::{generate_word_tuples, DifficultyRange, TupleRequest, WordIndex};

const BUILT_IN: &[&str] = &[
    "abandon", "ability", "able", "about", "above", "absence", "academic", "accept",
    "banana", "band", "bank", "bar", "barrier", "base", "basic", "basis",
    "cabin", "cable", "calculate", "call", "calm", "camera", "camp", "campaign",
    "damage", "dance", "danger", "dark", "data", "date", "daughter", "day",
    "early", "earn", "earth", "ease", "east", "easy", "eat", "economic",
    "face", "fact", "factor", "factory", "fail", "failure", "fair", "faith",
    "mail", "main", "maintain", "major", "make", "male", "manage", "manager",
    "sail", "salad", "salary", "sale", "salt", "same", "sample", "sand",
    "table", "tablet", "tail", "take", "tale", "talk", "tall", "tank",
    "wage", "wait", "wake", "walk", "wall", "wallet", "want", "war",
];

fn main() {
    let words: Vec<String> = match std::env::args().nth(1) {
        Some(path) => match load_words(&path) {
            Ok(words) => words,
            Err(e) => {
                eprintln!("could not load {path}: {e}");
                std::process::exit(1);
            }
        },
        None => BUILT_IN.iter().map(|w| w.to_string()).collect(),
    };
    let index = WordIndex::new(words);

    // ── Alphabetical order ─────────────────────────────────────────────────
    // Anchor letter plus letters 3 to 6 steps further round the alphabet.
    println!();
    println!("══ Alphabetical order: band 3..=6, triples ══");
    println!();
    let mut rng = StdRng::seed_from_u64(1001);
    let tuples = alphabetical::generate(&mut rng, &index, DifficultyRange::new(3, 6), 5, 3);
    println!("{}", show(&tuples));

    // ── Prefix divergence ──────────────────────────────────────────────────
    // Words sharing their first three letters; they first differ at index 3.
    println!();
    println!("══ Prefix divergence: rank 3, pairs ══");
    println!();
    let mut rng = StdRng::seed_from_u64(2002);
    let tuples = prefix::generate(&mut rng, &index, 3, 5, 2, 2);
    println!("{}", show(&tuples));

    // ── Mixed batch ────────────────────────────────────────────────────────
    println!();
    println!("══ Mixed batch (defaults, seed 3003) ══");
    println!();
    let batch = generate_word_tuples(&index, &TupleRequest::new(8).with_seed(3003));
    for tuple in &batch {
        println!("  [{}] {}", tuple.goal, tuple);
    }

    println!();
    println!("══ Same batch as JSON ══");
    println!();
    match serde_json::to_string_pretty(&to_json(&batch)) {
        Ok(text) => println!("{text}"),
        Err(e) => eprintln!("could not render JSON: {e}"),
    }
}
