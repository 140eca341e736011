use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Pass2CsvError {
    #[error("password store directory not found: {0}")]
    StoreNotFound(PathBuf),

    #[error("failed to decrypt {path}: {detail}")]
    Decrypt { path: PathBuf, detail: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("walk error: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("store error: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, Pass2CsvError>;
