use rand::Rng;

use crate::drill_engine::{
    alphabet::{letter_at, letter_index, ALPHABET_LEN},
    helpers::choose_word,
    models::{DifficultyRange, DrillGoal, WordTuple},
    word_index::{LetterBuckets, WordIndex},
};

/// Distance draws allowed per slot before the tuple is dropped.
pub const MAX_LETTER_ATTEMPTS: usize = 26;

/// Generate up to `count` alphabetical-order tuples.
///
/// The anchor letter is drawn uniformly from the letters that have words.
/// Each further letter sits `d` steps forward of the anchor, with `d` drawn
/// from `range`. Only anchor-to-member distances are controlled; members
/// are not checked against each other. A tuple whose slots cannot all be
/// filled is dropped, so the result may be shorter than `count`.
pub fn generate<R: Rng>(
    rng: &mut R,
    index: &WordIndex,
    range: DifficultyRange,
    count: usize,
    tuple_size: usize,
) -> Vec<WordTuple> {
    let buckets = index.letter_buckets();
    if buckets.is_empty() || tuple_size == 0 {
        return Vec::new();
    }

    let mut tuples = Vec::with_capacity(count);
    for _ in 0..count {
        match build_tuple(rng, buckets, range, tuple_size) {
            Some(words) => tuples.push(WordTuple::new(DrillGoal::AlphabeticalOrder, words)),
            None => log::debug!(
                "dropped alphabetical tuple: no free letter within {range} after {MAX_LETTER_ATTEMPTS} attempts"
            ),
        }
    }
    tuples
}

fn build_tuple<R: Rng>(
    rng: &mut R,
    buckets: &LetterBuckets,
    range: DifficultyRange,
    tuple_size: usize,
) -> Option<Vec<String>> {
    let anchor = *buckets.letters().get(rng.gen_range(0..buckets.letters().len()))?;
    let anchor_index = letter_index(anchor)?;

    let mut used = [false; ALPHABET_LEN];
    used[anchor_index] = true;
    let mut letters = vec![anchor];

    for _ in 1..tuple_size {
        let letter = pick_letter(rng, buckets, anchor_index, range, &used)?;
        used[letter_index(letter)?] = true;
        letters.push(letter);
    }

    letters
        .into_iter()
        .map(|letter| {
            let pool = buckets.words_for(letter)?;
            choose_word(rng, pool).cloned()
        })
        .collect()
}

/// Draw distances until one lands on an unused letter with words.
fn pick_letter<R: Rng>(
    rng: &mut R,
    buckets: &LetterBuckets,
    anchor_index: usize,
    range: DifficultyRange,
    used: &[bool; ALPHABET_LEN],
) -> Option<char> {
    for _ in 0..MAX_LETTER_ATTEMPTS {
        let distance = rng.gen_range(range.min()..=range.max());
        let target = (anchor_index + distance) % ALPHABET_LEN;
        let letter = letter_at(target);
        if !used[target] && buckets.contains(letter) {
            return Some(letter);
        }
    }
    None
}
