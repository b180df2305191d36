use std::path::{Path, PathBuf};

use tracing::error;
use tracing::level_filters::LevelFilter;

use crate::args::Args;
use crate::storage::FileStorage;

const APPLICATION_DIRECTORY: &str = "pocket-ledger";

/// Settings resolved from the command line and environment.
#[derive(Debug, Clone)]
pub struct Config {
    data_dir: PathBuf,
    log_level: LevelFilter
}

impl Config {
    pub fn from_args(args: &Args) -> Self {
        Self {
            data_dir: args.data_dir.clone().unwrap_or_else(default_data_dir),
            log_level: args.log_level
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn log_level(&self) -> LevelFilter {
        self.log_level
    }

    pub fn storage(&self) -> FileStorage {
        FileStorage::new(&self.data_dir)
    }
}

fn default_data_dir() -> PathBuf {
    match dirs::data_dir() {
        Some(data_dir) => data_dir.join(APPLICATION_DIRECTORY),
        None => {
            error!(
                "The platform data directory could not be determined. Pass --data-dir or set \
                POCKET_LEDGER_HOME to choose where the ledger is kept; falling back to the \
                current directory."
            );
            PathBuf::from(APPLICATION_DIRECTORY)
        }
    }
}
