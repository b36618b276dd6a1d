use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    #[error("lexicon {0:?} has no words")]
    EmptyLexicon(String),
    #[error("roster has no members")]
    EmptyRoster,
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("malformed lexicon: {0}")]
    Json(#[from] serde_json::Error),
}

pub type LexResult<T> = Result<T, ErrorKind>;
