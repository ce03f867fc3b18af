#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn book_cmd(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("addressbook").unwrap();
    cmd.env("ADDRESSBOOK_FILE", dir.path().join("book.json"))
        .env_remove("RUST_LOG")
        .env_remove("ADDRESSBOOK_WINDOW_DAYS");
    cmd
}

#[test]
fn greets_and_says_goodbye() {
    let dir = TempDir::new().unwrap();
    book_cmd(&dir)
        .write_stdin("hello\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome to the assistant bot!"))
        .stdout(predicate::str::contains("How can I help you?"))
        .stdout(predicate::str::contains("Good bye!"));
}

#[test]
fn contacts_persist_between_runs() {
    let dir = TempDir::new().unwrap();

    book_cmd(&dir)
        .write_stdin("add Alice 1234567890\nadd-birthday Alice 15.03.2000\nclose\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact added."))
        .stdout(predicate::str::contains("Birthday added."));

    assert!(dir.path().join("book.json").exists());

    book_cmd(&dir)
        .write_stdin("all\nshow-birthday Alice\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Alice: 1234567890; Birthday: 15.03.2000"));
}

#[test]
fn end_of_input_still_saves() {
    let dir = TempDir::new().unwrap();

    book_cmd(&dir)
        .write_stdin("add Bob 0987654321\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Good bye!"));

    let content = fs::read_to_string(dir.path().join("book.json")).unwrap();
    assert!(content.contains("0987654321"));
}

#[test]
fn errors_use_fixed_messages() {
    let dir = TempDir::new().unwrap();
    book_cmd(&dir)
        .write_stdin("add Alice\nadd Alice 12\nphone Nobody\nfly\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Give me name and phone please."))
        .stdout(predicate::str::contains("Check the validity of the entered data."))
        .stdout(predicate::str::contains("Contact not found."))
        .stdout(predicate::str::contains("Invalid command."));
}

#[test]
fn file_flag_overrides_env() {
    let dir = TempDir::new().unwrap();
    let other = dir.path().join("other.json");

    book_cmd(&dir)
        .arg("--file")
        .arg(&other)
        .write_stdin("add Carol 1112223333\nexit\n")
        .assert()
        .success();

    assert!(other.exists());
    assert!(!dir.path().join("book.json").exists());
}

#[test]
fn corrupt_snapshot_fails_startup() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("book.json"), "not json").unwrap();

    book_cmd(&dir)
        .write_stdin("exit\n")
        .assert()
        .failure();
}
