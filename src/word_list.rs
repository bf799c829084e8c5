use std::fs;
use std::path::Path;

use serde_json::{json, Value};

use crate::drill_engine::models::WordTuple;
use crate::error::WordListError;

/// Parse a JSON array of strings, e.g. `["apple", "banana"]`.
pub fn parse_json_words(text: &str) -> Result<Vec<String>, WordListError> {
    Ok(serde_json::from_str(text)?)
}

/// One word per line; surrounding whitespace trimmed, blank lines skipped.
pub fn parse_plain_words(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Read a vocabulary from disk.
///
/// Files ending in `.json` are parsed as a JSON array of strings; anything
/// else as plain text, one word per line. Empty and symbol-leading entries
/// are kept here and filtered later by the index.
pub fn load_words(path: impl AsRef<Path>) -> Result<Vec<String>, WordListError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let words = if is_json {
        parse_json_words(&text)?
    } else {
        parse_plain_words(&text)
    };
    if words.is_empty() {
        return Err(WordListError::Empty);
    }
    log::info!("loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// One tuple per line, words separated by a single space.
pub fn show(tuples: &[WordTuple]) -> String {
    tuples.iter().map(|t| t.to_string()).collect::<Vec<_>>().join("\n")
}

/// Convert a batch into a JSON array for downstream consumers.
///
/// Each entry is `{"goal": "AlphabeticalOrder", "words": [...]}`; order
/// within and across tuples is preserved.
pub fn to_json(tuples: &[WordTuple]) -> Value {
    Value::Array(
        tuples
            .iter()
            .map(|t| json!({ "goal": t.goal, "words": t.words }))
            .collect(),
    )
}
