use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to read paths from '{path}'")]
    ReadPaths {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid template")]
    Template(#[from] pathrex_match::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
