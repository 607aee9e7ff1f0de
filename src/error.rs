use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The selector couldn't be parsed. Selector: {0}")]
    BadSelector(String),

    #[error("The fallback pattern couldn't be compiled: {0}")]
    BadPattern(#[from] regex::Error),

    #[error("Couldn't read the input file {path}: {source}")]
    ReadInput {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Tokio Join Error, couldn't await a task! {0}")]
    RuntimeJoin(#[from] tokio::task::JoinError),
}
