use crate::storage::{Storage, StorageError};
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::trace;

/// Keeps each key in its own file inside a data directory.
#[derive(Debug, Clone)]
pub struct FileStorage {
    directory: PathBuf
}

impl FileStorage {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into()
        }
    }

    fn path(&self, key: &str) -> PathBuf {
        self.directory.join(key)
    }
}

impl Storage for FileStorage {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path(key);

        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::Read { key: key.to_string(), path, source })
        }
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path(key);
        let write_error = |source| StorageError::Write { key: key.to_string(), path: path.clone(), source };

        fs::create_dir_all(&self.directory).map_err(write_error)?;

        //NOTE: The whole value is rewritten on every save, so write to a sibling file and rename it into place
        let staging = self.directory.join(format!(".{key}.tmp"));
        fs::write(&staging, value).map_err(write_error)?;
        fs::rename(&staging, &path).map_err(write_error)?;

        trace!("Saved [{}] bytes to [{}]", value.len(), path.display());

        Ok(())
    }
}
