//! Index arithmetic over the 26-letter Latin alphabet.
//!
//! Distances used by the alphabetical drill are *forward* distances:
//! `(to - from) mod 26`, matching how target letters are derived from the
//! anchor (`(anchor + distance) mod 26`). The same pair read the other way
//! round is `26 - d` apart.

pub const ALPHABET_LEN: usize = 26;

/// Largest meaningful distance between two distinct letters.
pub const MAX_DISTANCE: usize = ALPHABET_LEN - 1;

/// Position of `c` in `a..=z`, ignoring case. `None` for anything else.
pub fn letter_index(c: char) -> Option<usize> {
    let lower = c.to_ascii_lowercase();
    if lower.is_ascii_lowercase() {
        Some((lower as u8 - b'a') as usize)
    } else {
        None
    }
}

/// Letter at `index`, wrapping around past `z`.
pub fn letter_at(index: usize) -> char {
    (b'a' + (index % ALPHABET_LEN) as u8) as char
}

/// First letter of `word`, lower-cased, if it is in `a..=z`.
pub fn first_letter(word: &str) -> Option<char> {
    let c = word.chars().next()?;
    letter_index(c).map(letter_at)
}

/// Steps forward from `from` to reach `to` around the cycle.
pub fn forward_distance(from: usize, to: usize) -> usize {
    (to % ALPHABET_LEN + ALPHABET_LEN - from % ALPHABET_LEN) % ALPHABET_LEN
}
