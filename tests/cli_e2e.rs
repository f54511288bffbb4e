#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn userbook_cmd(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("userbook").unwrap();
    cmd.current_dir(dir)
        .env("USERBOOK_GLOBAL_DATA", dir.join("global"))
        .env_remove("RUST_LOG");
    cmd
}

const TWO_ANAS: &str = r#"[
    {"nome": "Ana", "idade": 20, "email": "ana@x.com"},
    {"nome": "ana", "idade": 22, "email": "ana2@x.com"}
]"#;

#[test]
fn test_create_then_list() {
    let temp = TempDir::new().unwrap();

    userbook_cmd(temp.path())
        .arg("create")
        .assert()
        .success()
        .stdout(predicate::str::contains("Data file created"));

    assert!(temp.path().join("usuarios.json").exists());

    userbook_cmd(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Name: João"))
        .stdout(predicate::str::contains("Email: maria@email.com"))
        .stdout(predicate::str::contains("Total users: 2"));
}

#[test]
fn test_create_declined_keeps_existing_file() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("usuarios.json");
    fs::write(&file, TWO_ANAS).unwrap();

    userbook_cmd(temp.path())
        .arg("create")
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Operation cancelled."));

    assert_eq!(fs::read_to_string(&file).unwrap(), TWO_ANAS);
}

#[test]
fn test_add_rejects_invalid_input() {
    let temp = TempDir::new().unwrap();

    userbook_cmd(temp.path())
        .args(["add", "", "25", "a@b.com"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Name cannot be empty."));

    userbook_cmd(temp.path())
        .args(["add", "X", "200", "a@b.com"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Invalid age"));

    userbook_cmd(temp.path())
        .args(["add", "X", "25", "bad-email"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Invalid email"));

    assert!(!temp.path().join("usuarios.json").exists());
}

#[test]
fn test_add_and_search_with_explicit_file() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("data").join("people.json");
    let file_arg = file.to_str().unwrap();

    userbook_cmd(temp.path())
        .args(["--file", file_arg, "add", "Ana", "20", "ana@x.com"])
        .assert()
        .success()
        .stdout(predicate::str::contains("User added"));

    userbook_cmd(temp.path())
        .args(["--file", file_arg, "add", "Bruno", "31", "ana@x.com"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("already registered"));

    userbook_cmd(temp.path())
        .args(["--file", file_arg, "search", "AN"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Name: Ana"));

    userbook_cmd(temp.path())
        .args(["--file", file_arg, "search", "zzz"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No users found."));
}

#[test]
fn test_remove_with_pick() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("usuarios.json");
    fs::write(&file, TWO_ANAS).unwrap();

    userbook_cmd(temp.path())
        .args(["remove", "ANA", "--pick", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("User removed: ana (ana2@x.com)"));

    let on_disk = fs::read_to_string(&file).unwrap();
    assert!(on_disk.contains("ana@x.com"));
    assert!(!on_disk.contains("ana2@x.com"));
}

#[test]
fn test_remove_prompts_for_pick() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("usuarios.json");
    fs::write(&file, TWO_ANAS).unwrap();

    userbook_cmd(temp.path())
        .args(["rm", "ana"])
        .write_stdin("7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Multiple users found"))
        .stdout(predicate::str::contains("Invalid number. Operation cancelled."));

    assert_eq!(fs::read_to_string(&file).unwrap(), TWO_ANAS);
}

#[test]
fn test_corrupt_file_is_a_warning() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("usuarios.json"), "{ oops").unwrap();

    userbook_cmd(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("corrupt"))
        .stdout(predicate::str::contains("No users registered."))
        .stderr(predicate::str::contains("data file is corrupt"));
}

#[test]
fn test_unexpected_values_fail_without_touching_file() {
    let temp = TempDir::new().unwrap();
    let data = temp.path().join("usuarios.json");
    let content = r#"[
    {"nome": "Ana", "idade": 20.0, "email": "ana@x.com"},
    {"nome": "Bia", "idade": "30", "email": "bia@x.com"}
]"#;
    fs::write(&data, content).unwrap();

    userbook_cmd(temp.path())
        .args(["add", "Caio", "40", "caio@x.com"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unexpected content"));

    assert_eq!(fs::read_to_string(&data).unwrap(), content);
}

#[test]
fn test_interactive_shell_session() {
    let temp = TempDir::new().unwrap();

    userbook_cmd(temp.path())
        .write_stdin("1\n2\nAna\n20\nana@x.com\n4\nana\n5\nJoão\ny\n3\n8\n6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome"))
        .stdout(predicate::str::contains("Data file created"))
        .stdout(predicate::str::contains("User added: Ana (ana@x.com)"))
        .stdout(predicate::str::contains("Users found:"))
        .stdout(predicate::str::contains("User removed: João"))
        .stdout(predicate::str::contains("Total users: 2"))
        .stdout(predicate::str::contains("Invalid option"))
        .stdout(predicate::str::contains("Exiting"));
}

#[test]
fn test_path_and_config() {
    let temp = TempDir::new().unwrap();

    userbook_cmd(temp.path())
        .args(["config", "data-file", "people.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("data-file set to people.json"));

    userbook_cmd(temp.path())
        .arg("path")
        .assert()
        .success()
        .stdout(predicate::str::contains("people.json"));

    userbook_cmd(temp.path())
        .args(["config", "colour"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Unknown config key"));
}

#[test]
fn test_global_scope_uses_global_dir() {
    let temp = TempDir::new().unwrap();

    userbook_cmd(temp.path())
        .args(["-g", "add", "Ana", "20", "ana@x.com"])
        .assert()
        .success();

    assert!(temp.path().join("global").join("usuarios.json").exists());
    assert!(!temp.path().join("usuarios.json").exists());
}
