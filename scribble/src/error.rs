use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    #[error(transparent)]
    Lexicon(#[from] lexicon::ErrorKind),
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("malformed config: {0}")]
    Config(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("image encoding failed: {0}")]
    Image(#[from] image::ImageError),
    #[error("session encoding failed: {0}")]
    Session(#[from] Box<bincode::ErrorKind>),
    #[error("room task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
    #[error("unknown command {0:?}")]
    UnknownCommand(String),
    #[error("bad argument for {command}: {reason}")]
    BadArgument {
        command: &'static str,
        reason: String,
    },
}

impl ErrorKind {
    pub fn io(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| ErrorKind::Io { path, source }
    }
}

pub type GameResult<T> = Result<T, ErrorKind>;
