#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn addrbook_cmd(home: &TempDir) -> Command {
    let mut cmd = Command::new(cargo_bin("addrbook"));
    cmd.env("ADDRBOOK_HOME", home.path().as_os_str())
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn contact_lifecycle() {
    let home = TempDir::new().unwrap();

    addrbook_cmd(&home)
        .args(["add", "anna"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact Anna added."));

    addrbook_cmd(&home)
        .args(["add-phone", "Anna", "0501234567"])
        .assert()
        .success();

    addrbook_cmd(&home)
        .args(["add-address", "anna", "Kyiv,", "Khreshchatyk", "1"])
        .assert()
        .success();

    addrbook_cmd(&home)
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Anna"))
        .stdout(predicate::str::contains("0501234567"))
        .stdout(predicate::str::contains("Kyiv, Khreshchatyk 1"));

    assert!(home.path().join("address_book.json").exists());

    addrbook_cmd(&home)
        .args(["delete", "anna"])
        .assert()
        .success()
        .stdout(predicate::str::contains("deleted"));

    addrbook_cmd(&home)
        .assert()
        .success()
        .stdout(predicate::str::contains("No contacts found."));
}

#[test]
fn invalid_phone_fails_without_saving() {
    let home = TempDir::new().unwrap();
    addrbook_cmd(&home).args(["add", "anna"]).assert().success();
    let before = fs::read_to_string(home.path().join("address_book.json")).unwrap();

    addrbook_cmd(&home)
        .args(["add-phone", "anna", "12345"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("10 digits"));

    let after = fs::read_to_string(home.path().join("address_book.json")).unwrap();
    assert_eq!(before, after);
}

#[test]
fn unknown_contact_is_an_error() {
    let home = TempDir::new().unwrap();
    addrbook_cmd(&home)
        .args(["birthday", "nobody"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Contact not found"));
}

#[test]
fn find_matches_phone_fragment() {
    let home = TempDir::new().unwrap();
    addrbook_cmd(&home).args(["add", "anna"]).assert().success();
    addrbook_cmd(&home).args(["add", "oleg"]).assert().success();
    addrbook_cmd(&home)
        .args(["add-phone", "oleg", "0671112233"])
        .assert()
        .success();

    addrbook_cmd(&home)
        .args(["find", "06711"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Oleg"))
        .stdout(predicate::str::contains("Anna").not());
}

#[test]
fn notes_and_tags() {
    let home = TempDir::new().unwrap();
    addrbook_cmd(&home).args(["add", "anna"]).assert().success();
    addrbook_cmd(&home)
        .args(["add-note", "anna", "buy flowers", "--tags", "gift,todo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Note added."));

    addrbook_cmd(&home)
        .args(["tag", "gift"])
        .assert()
        .success()
        .stdout(predicate::str::contains("buy flowers"));

    addrbook_cmd(&home)
        .args(["edit-note", "anna", "buy flowers", "buy tulips"])
        .assert()
        .success();

    addrbook_cmd(&home)
        .args(["notes", "anna"])
        .assert()
        .success()
        .stdout(predicate::str::contains("buy tulips"))
        .stdout(predicate::str::contains("gift, todo"));

    addrbook_cmd(&home)
        .args(["clear-notes", "anna"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed 1 note(s)."));

    addrbook_cmd(&home)
        .args(["notes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No notes found."));
}

#[test]
fn plain_contact_rejects_notes() {
    let home = TempDir::new().unwrap();
    addrbook_cmd(&home)
        .args(["add", "oleg", "--no-notes"])
        .assert()
        .success();

    addrbook_cmd(&home)
        .args(["add-note", "oleg", "hello"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not support notes"));
}

#[test]
fn birthday_countdown() {
    let home = TempDir::new().unwrap();
    addrbook_cmd(&home).args(["add", "anna"]).assert().success();

    addrbook_cmd(&home)
        .args(["birthday", "anna"])
        .assert()
        .success()
        .stdout(predicate::str::contains("no birthday recorded"));

    addrbook_cmd(&home)
        .args(["add-birthday", "anna", "1990-13-01"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("YYYY-MM-DD"));

    addrbook_cmd(&home)
        .args(["add-birthday", "anna", "1990-05-01"])
        .assert()
        .success();

    addrbook_cmd(&home)
        .args(["when", "366"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Anna"));
}

#[test]
fn config_set_changes_paging() {
    let home = TempDir::new().unwrap();

    addrbook_cmd(&home)
        .args(["config", "page-size", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("page-size set to 1"));

    addrbook_cmd(&home)
        .args(["config", "page-size", "zero"])
        .assert()
        .failure();

    addrbook_cmd(&home).args(["add", "anna"]).assert().success();
    addrbook_cmd(&home).args(["add", "oleg"]).assert().success();

    addrbook_cmd(&home)
        .args(["list", "--page", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Oleg"))
        .stdout(predicate::str::contains("Anna").not())
        .stdout(predicate::str::contains("Page 2 of 2"));

    addrbook_cmd(&home)
        .args(["list", "--page", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of range"));
}

#[test]
fn corrupt_book_is_reported() {
    let home = TempDir::new().unwrap();
    fs::write(home.path().join("address_book.json"), "not json").unwrap();

    addrbook_cmd(&home)
        .args(["list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Corrupt address book"));
}

#[test]
fn zero_page_size_from_config_is_an_invalid_value() {
    let home = TempDir::new().unwrap();
    fs::write(home.path().join("config.json"), r#"{"page_size": 0}"#).unwrap();

    addrbook_cmd(&home)
        .args(["list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid value"))
        .stderr(predicate::str::contains("page-size"));
}

#[test]
fn config_set_repairs_a_corrupt_config_file() {
    let home = TempDir::new().unwrap();
    fs::write(home.path().join("config.json"), "{ broken").unwrap();

    addrbook_cmd(&home)
        .args(["list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("config.json"));

    addrbook_cmd(&home)
        .args(["config", "page-size", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("page-size set to 3"));

    addrbook_cmd(&home).args(["list"]).assert().success();
}
