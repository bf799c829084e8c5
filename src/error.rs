use thiserror::Error;

/// Failures while reading a vocabulary. Generation itself never fails.
#[derive(Error, Debug)]
pub enum WordListError {
    /// Propagated I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not a JSON array of strings.
    #[error("malformed JSON word list: {0}")]
    Json(#[from] serde_json::Error),

    /// The source parsed but held no words.
    #[error("word list is empty")]
    Empty,
}
