use assert_cmd::Command;
use predicates::prelude::*;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const USER: &str = "asha@example.com";

/// Copy the fixture db into a fresh directory so each test mutates its own
fn workspace() -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("db.json");
    std::fs::copy(
        Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/db.json"),
        &db,
    )
    .unwrap();
    (dir, db)
}

fn wanderstay(dir: &TempDir, db: &Path) -> Command {
    let mut cmd = Command::cargo_bin("wanderstay").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("WANDERSTAY_USER")
        .env("RUST_LOG", "error")
        .arg("--offline")
        .arg(db);
    cmd
}

fn rooms_left(db: &Path, hotel_index: usize) -> u64 {
    let raw = std::fs::read_to_string(db).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    value["hotels"][hotel_index]["roomsAvailable"].as_u64().unwrap()
}

#[test]
fn test_help() {
    Command::cargo_bin("wanderstay")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("quote"))
        .stdout(predicate::str::contains("book"));
}

#[test]
fn test_hotels_tolerates_typos() {
    let (dir, db) = workspace();
    wanderstay(&dir, &db)
        .args(["hotels", "shimlaa"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Snow Valley Resort"))
        .stdout(predicate::str::contains("Lakeview Inn").not());
}

#[test]
fn test_hotels_json() {
    let (dir, db) = workspace();
    let output = wanderstay(&dir, &db)
        .args(["--format", "json", "hotels", "--place", "2"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let hotels: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let hotels = hotels.as_array().unwrap();
    assert_eq!(hotels.len(), 1);
    assert_eq!(hotels[0]["name"], "Lakeview Inn");
}

#[test]
fn test_quote_adds_tax() {
    let (dir, db) = workspace();
    wanderstay(&dir, &db)
        .args(["quote", "1", "--check-in", "2024-01-01", "--check-out", "2024-01-03"])
        .assert()
        .success()
        .stdout(predicate::str::contains("₹4,480.00"));
}

#[test]
fn test_quote_rejects_reversed_dates() {
    let (dir, db) = workspace();
    wanderstay(&dir, &db)
        .args(["quote", "1", "--check-in", "2024-01-03", "--check-out", "2024-01-01"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("E11001"));
}

#[test]
fn test_book_decrements_inventory() {
    let (dir, db) = workspace();
    wanderstay(&dir, &db)
        .args(["--user", USER, "book", "1"])
        .args(["--check-in", "2024-01-01", "--check-out", "2024-01-03"])
        .args(["--guests", "3", "--rooms", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("confirmed"))
        .stdout(predicate::str::contains("₹8,960.00"));

    assert_eq!(rooms_left(&db, 0), 3);
}

#[test]
fn test_book_more_rooms_than_available() {
    let (dir, db) = workspace();
    wanderstay(&dir, &db)
        .args(["--user", USER, "book", "2"])
        .args(["--check-in", "2024-01-01", "--check-out", "2024-01-02"])
        .args(["--guests", "3", "--rooms", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Only 2 rooms available"));

    assert_eq!(rooms_left(&db, 1), 2);
}

#[test]
fn test_book_requires_user() {
    let (dir, db) = workspace();
    wanderstay(&dir, &db)
        .args(["book", "1", "--check-in", "2024-01-01", "--check-out", "2024-01-02"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("WANDERSTAY_USER"));
}

#[test]
fn test_book_then_cancel() {
    let (dir, db) = workspace();
    wanderstay(&dir, &db)
        .args(["--user", USER, "book", "2"])
        .args(["--check-in", "2024-01-01", "--check-out", "2024-01-02"])
        .assert()
        .success();

    wanderstay(&dir, &db)
        .args(["cancel", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Booking 1 cancelled"));

    let output = wanderstay(&dir, &db)
        .args(["--user", USER, "--format", "json", "bookings"])
        .output()
        .unwrap();
    let bookings: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(bookings[0]["status"], "cancelled");

    wanderstay(&dir, &db)
        .args(["cancel", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("E11005"));
}

#[test]
fn test_bookmark_toggles() {
    let (dir, db) = workspace();
    wanderstay(&dir, &db)
        .args(["--user", USER, "bookmark", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Bookmarked Shimla"));

    wanderstay(&dir, &db)
        .args(["--user", USER, "bookmark", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed bookmark for Shimla"));
}

#[test]
fn test_book_package_is_pending() {
    let (dir, db) = workspace();
    let output = wanderstay(&dir, &db)
        .args(["--user", USER, "--format", "json", "book-package", "1"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let booking: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(booking["status"], "pending");
    assert_eq!(booking["userEmail"], USER);
}

#[test]
fn test_cancel_restores_inventory_when_configured() {
    let (dir, db) = workspace();
    std::fs::write(
        dir.path().join("wanderstay.toml"),
        "[booking]\nrestore_inventory_on_cancel = true\n",
    )
    .unwrap();

    wanderstay(&dir, &db)
        .args(["--user", USER, "book", "1"])
        .args(["--check-in", "2024-01-01", "--check-out", "2024-01-02"])
        .args(["--guests", "3", "--rooms", "2"])
        .assert()
        .success();
    assert_eq!(rooms_left(&db, 0), 3);

    wanderstay(&dir, &db)
        .args(["cancel", "1"])
        .assert()
        .success();
    assert_eq!(rooms_left(&db, 0), 5);
}

#[test]
fn test_verbose_reports_counters() {
    let (dir, db) = workspace();
    wanderstay(&dir, &db)
        .env_remove("RUST_LOG")
        .args(["--verbose", "--user", USER, "book", "1"])
        .args(["--check-in", "2024-01-01", "--check-out", "2024-01-02"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Command finished"))
        .stderr(predicate::str::contains("bookings.confirmed"));
}
