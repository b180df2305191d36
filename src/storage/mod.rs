mod errors;
mod file_storage;
#[cfg(test)]
mod memory_storage;
#[cfg(test)]
mod tests;

pub use errors::StorageError;
pub use file_storage::FileStorage;
#[cfg(test)]
pub use memory_storage::MemoryStorage;

/// A key-value substrate holding text values, in the manner of browser local storage.
pub trait Storage {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn save(&self, key: &str, value: &str) -> Result<(), StorageError>;
}
