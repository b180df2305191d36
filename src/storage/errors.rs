use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Unable to read key [{key}] from [{path}]: {source}")]
    Read {
        key: String,
        path: PathBuf,
        source: io::Error
    },
    #[error("Unable to write key [{key}] to [{path}]: {source}")]
    Write {
        key: String,
        path: PathBuf,
        source: io::Error
    }
}
