use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Writing the report failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Cannot read {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid negfilt settings in {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },
}

pub type Result<T> = std::result::Result<T, Error>;
