use super::{FileStorage, MemoryStorage, Storage};
use anyhow::Result;
use tempfile::tempdir;

#[test]
fn test_memory_storage_basic_load_and_save_operations() -> Result<()> {
    let storage = MemoryStorage::new();

    assert!(storage.load("transactions")?.is_none());

    storage.save("transactions", "[]")?;

    assert_eq!(storage.load("transactions")?.as_deref(), Some("[]"));

    Ok(())
}

#[test]
fn test_memory_storage_enforces_correct_overwrite_semantics() -> Result<()> {
    let storage = MemoryStorage::new();

    storage.save("theme", "light")?;
    storage.save("theme", "dark")?;

    assert_eq!(storage.load("theme")?.as_deref(), Some("dark"));

    Ok(())
}

#[test]
fn test_file_storage_reports_missing_keys_as_none() -> Result<()> {
    let directory = tempdir()?;
    let storage = FileStorage::new(directory.path());

    assert!(storage.load("transactions")?.is_none());

    Ok(())
}

#[test]
fn test_file_storage_persists_across_instances() -> Result<()> {
    let directory = tempdir()?;
    let data_directory = directory.path().join("nested").join("ledger");

    FileStorage::new(&data_directory).save("transactions", "[{\"id\":1}]")?;
    FileStorage::new(&data_directory).save("transactions", "[]")?;

    let reopened = FileStorage::new(&data_directory);

    assert_eq!(reopened.load("transactions")?.as_deref(), Some("[]"));

    Ok(())
}

#[test]
fn test_file_storage_write_failure_is_an_error() -> Result<()> {
    let directory = tempdir()?;
    let blocker = directory.path().join("blocker");
    std::fs::write(&blocker, "not a directory")?;

    let storage = FileStorage::new(blocker.join("ledger"));

    assert!(storage.save("transactions", "[]").is_err());

    Ok(())
}
