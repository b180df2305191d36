use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use anyhow::{anyhow, Result};
use chrono::{Days, Local};
use tempfile::tempdir;

fn run_ledger(data_dir: &Path, args: &[&str]) -> Result<Output> {
    let binary_path = env!("CARGO_BIN_EXE_pocket-ledger");

    Ok(Command::new(binary_path)
        .arg("--data-dir")
        .arg(data_dir)
        .args(args)
        .output()?)
}

fn stdout_of(output: &Output) -> Result<String> {
    Ok(String::from_utf8(output.stdout.clone())?)
}

fn add(data_dir: &Path, customer: &str, amount: &str, kind: &str, date: &str) -> Result<Output> {
    run_ledger(data_dir, &[
        "add",
        "--customer", customer,
        "--description", "Order",
        "--amount", amount,
        "--date", date,
        "--type", kind,
        "--payment-method", "Cash",
        "--category", "Sales",
    ])
}

fn first_id(data_dir: &Path) -> Result<String> {
    let output = run_ledger(data_dir, &["export"])?;
    let stdout = stdout_of(&output)?;
    let row = stdout.lines().nth(1).ok_or_else(|| anyhow!("no exported rows"))?;

    Ok(row.split(',').next().ok_or_else(|| anyhow!("empty row"))?.to_string())
}

#[test]
fn test_cli_add_and_edit_keep_running_totals() -> Result<()> {
    let directory = tempdir()?;

    assert!(add(directory.path(), "Ali", "100", "Income", "2024-01-01")?.status.success());

    let output = add(directory.path(), "Ayşe", "40", "Expense", "2024-01-02")?;
    let stdout = stdout_of(&output)?;

    assert!(output.status.success());
    assert!(stdout.contains("Income:  ₺100,00"));
    assert!(stdout.contains("Expense: ₺40,00"));
    assert!(stdout.contains("Balance: ₺60,00"));

    let id = first_id(directory.path())?;
    let output = run_ledger(directory.path(), &["edit", id.as_str(), "--amount", "150"])?;
    let stdout = stdout_of(&output)?;

    assert!(output.status.success());
    assert!(stdout.contains(&format!("Updated transaction [{id}]")));
    assert!(stdout.contains("Balance: ₺110,00"));

    let export = stdout_of(&run_ledger(directory.path(), &["export"])?)?;

    assert_eq!(export.lines().count(), 3);
    assert!(export.contains(&format!("{id},2024-01-01,Ali,Order,Income,150.00,Cash,Sales")));

    Ok(())
}

#[test]
fn test_cli_rejects_incomplete_entries_without_changing_storage() -> Result<()> {
    let directory = tempdir()?;

    let output = run_ledger(directory.path(), &["add", "--customer", "Ali", "--amount", "100"])?;

    assert!(!output.status.success());
    assert!(String::from_utf8(output.stderr)?.contains("Please enter all fields"));
    assert!(!directory.path().join("transactions").exists());

    Ok(())
}

#[test]
fn test_cli_delete_removes_the_entry_from_storage() -> Result<()> {
    let directory = tempdir()?;

    add(directory.path(), "Ali", "100", "Income", "2024-01-01")?;
    let id = first_id(directory.path())?;

    let output = run_ledger(directory.path(), &["delete", id.as_str()])?;

    assert!(stdout_of(&output)?.contains(&format!("Deleted transaction [{id}]")));
    assert_eq!(fs::read_to_string(directory.path().join("transactions"))?, "[]");

    let output = run_ledger(directory.path(), &["delete", id.as_str()])?;

    assert!(output.status.success());
    assert!(stdout_of(&output)?.contains("not found"));

    let list = stdout_of(&run_ledger(directory.path(), &["list"])?)?;

    assert_eq!(list, "No transactions yet.\n");

    Ok(())
}

#[test]
fn test_cli_edit_without_fields_changes_nothing() -> Result<()> {
    let directory = tempdir()?;

    add(directory.path(), "Ali", "100", "Income", "2024-01-01")?;
    let id = first_id(directory.path())?;
    let before = fs::read_to_string(directory.path().join("transactions"))?;

    let output = run_ledger(directory.path(), &["edit", id.as_str()])?;

    assert!(output.status.success());
    assert!(stdout_of(&output)?.contains(&format!("No changes given for transaction [{id}]")));
    assert_eq!(fs::read_to_string(directory.path().join("transactions"))?, before);

    Ok(())
}

#[test]
fn test_cli_list_tells_an_empty_window_from_an_empty_ledger() -> Result<()> {
    let directory = tempdir()?;

    add(directory.path(), "Ali", "100", "Income", "2024-01-01")?;

    let list = stdout_of(&run_ledger(directory.path(), &["list", "--window", "7"])?)?;

    assert_eq!(list, "No transactions in this window.\n");

    Ok(())
}

#[test]
fn test_cli_keeps_legacy_amounts_with_extra_decimals() -> Result<()> {
    let directory = tempdir()?;
    fs::write(directory.path().join("transactions"), r#"[{"id":1,"customerName":"Ali","description":"Parts","amount":"10.999","date":"2024-01-01","type":"Income","paymentMethod":"Cash","category":"Stock"}]"#)?;

    let output = add(directory.path(), "Ayşe", "12.500", "Expense", "2024-01-02")?;
    let stdout = stdout_of(&output)?;

    assert!(output.status.success());
    assert!(stdout.contains("Income:  ₺11,00"));
    assert!(stdout.contains("Expense: ₺12,50"));

    let export = stdout_of(&run_ledger(directory.path(), &["export"])?)?;

    assert_eq!(export.lines().count(), 3);

    Ok(())
}

#[test]
fn test_cli_windowed_history_and_search() -> Result<()> {
    let directory = tempdir()?;
    let today = Local::now().date_naive();
    let recent = today.checked_sub_days(Days::new(2)).ok_or_else(|| anyhow!("date underflow"))?.to_string();
    let old = today.checked_sub_days(Days::new(60)).ok_or_else(|| anyhow!("date underflow"))?.to_string();

    add(directory.path(), "Ali", "100", "Income", &recent)?;
    add(directory.path(), "Zeynep", "70", "Income", &old)?;

    let recent_totals = stdout_of(&run_ledger(directory.path(), &["totals", "--window", "7"])?)?;

    assert!(recent_totals.contains("Income:  ₺100,00"));

    let all_totals = stdout_of(&run_ledger(directory.path(), &["totals"])?)?;

    assert!(all_totals.contains("Income:  ₺170,00"));

    let history = stdout_of(&run_ledger(directory.path(), &["history", "--search", "zEy"])?)?;

    assert!(history.contains("Zeynep"));
    assert!(!history.contains("Ali "));

    Ok(())
}

#[test]
fn test_cli_corrupted_storage_starts_empty() -> Result<()> {
    let directory = tempdir()?;
    fs::write(directory.path().join("transactions"), "{definitely not json")?;

    let output = run_ledger(directory.path(), &["totals"])?;

    assert!(output.status.success());
    assert!(stdout_of(&output)?.contains("Balance: ₺0,00"));

    Ok(())
}

#[test]
fn test_cli_theme_toggle_is_persisted() -> Result<()> {
    let directory = tempdir()?;

    assert_eq!(stdout_of(&run_ledger(directory.path(), &["theme"])?)?, "Theme: light\n");
    assert_eq!(stdout_of(&run_ledger(directory.path(), &["theme", "toggle"])?)?, "Theme: dark\n");
    assert_eq!(fs::read_to_string(directory.path().join("theme"))?, "dark");
    assert_eq!(stdout_of(&run_ledger(directory.path(), &["theme"])?)?, "Theme: dark\n");

    Ok(())
}
