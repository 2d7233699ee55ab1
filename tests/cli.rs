use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const FACTS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<fact-list>
  <fact>
    <author>Marie Curie</author>
    <fact-type>science</fact-type>
    <fact-text>Radium glows in the dark.</fact-text>
  </fact>
</fact-list>
"#;

fn factz(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("factz").unwrap();
    cmd.current_dir(dir).env_remove("RUST_LOG");
    cmd
}

fn setup() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("data")).unwrap();
    fs::write(dir.path().join("data/facts.xml"), FACTS).unwrap();
    dir
}

#[test]
fn default_command_shows_a_fact() {
    let dir = setup();
    factz(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Marie Curie"))
        .stdout(predicate::str::contains("Radium glows in the dark."));
}

#[test]
fn next_on_empty_file_reports_empty_list() {
    let dir = TempDir::new().unwrap();
    factz(dir.path()).arg("init").assert().success();
    factz(dir.path())
        .arg("next")
        .assert()
        .success()
        .stdout(predicate::str::contains("Fact list is empty."));
}

#[test]
fn missing_file_fails() {
    let dir = TempDir::new().unwrap();
    factz(dir.path())
        .arg("next")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn search_by_mode() {
    let dir = setup();
    factz(dir.path())
        .args(["search", "RADIUM", "--mode", "text"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Marie Curie"));

    factz(dir.path())
        .args(["search", "radium", "--mode", "author"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No results."));
}

#[test]
fn blank_search_asks_for_text() {
    let dir = setup();
    factz(dir.path())
        .arg("search")
        .assert()
        .success()
        .stdout(predicate::str::contains("Please enter a text to search."));
}

#[test]
fn add_appends_to_file() {
    let dir = setup();
    factz(dir.path())
        .args(["add", "--author", "Ada", "--type", "math", "--text", "Notes on the engine."])
        .assert()
        .success()
        .stdout(predicate::str::contains("saved successfully"));

    let on_disk = fs::read_to_string(dir.path().join("data/facts.xml")).unwrap();
    assert!(on_disk.contains("<author>Marie Curie</author>"));
    assert!(on_disk.contains(
        "<fact><author>Ada</author><fact-type>math</fact-type><fact-text>Notes on the engine.</fact-text></fact>"
    ));

    factz(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Radium glows in the dark."))
        .stdout(predicate::str::contains("Notes on the engine."));
}

#[test]
fn add_reports_first_missing_field() {
    let dir = setup();
    factz(dir.path())
        .args(["add", "--text", "No author here."])
        .assert()
        .success()
        .stdout(predicate::str::contains("Author cannot be empty."));

    factz(dir.path())
        .args(["add", "--author", "A", "--type", " "])
        .assert()
        .success()
        .stdout(predicate::str::contains("Type cannot be empty."));

    let on_disk = fs::read_to_string(dir.path().join("data/facts.xml")).unwrap();
    assert_eq!(on_disk, FACTS);
}

#[test]
fn add_without_fields_shows_prompt() {
    let dir = setup();
    factz(dir.path())
        .arg("add")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Please fill the information, then click on saved.",
        ));
    assert_eq!(fs::read_to_string(dir.path().join("data/facts.xml")).unwrap(), FACTS);
}

#[test]
fn add_rejects_control_characters() {
    let dir = setup();
    factz(dir.path())
        .args(["add", "--author", "A", "--type", "T", "--text", "bell\u{7}"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Fields contain characters that cannot be saved.",
        ));
    assert_eq!(fs::read_to_string(dir.path().join("data/facts.xml")).unwrap(), FACTS);
}

#[test]
fn misplaced_declaration_fails_and_is_kept() {
    let dir = TempDir::new().unwrap();
    let doc = "\n<?xml version=\"1.0\"?><fact-list/>";
    fs::write(dir.path().join("late.xml"), doc).unwrap();

    factz(dir.path())
        .args(["--file", "late.xml", "add", "--author", "A", "--type", "T", "--text", "X"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse"));
    assert_eq!(fs::read_to_string(dir.path().join("late.xml")).unwrap(), doc);
}

#[test]
fn malformed_file_fails_and_is_kept() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.xml");
    fs::write(&path, "<fact-list><fact>").unwrap();

    factz(dir.path())
        .args(["--file", "broken.xml", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse"));

    assert_eq!(fs::read_to_string(&path).unwrap(), "<fact-list><fact>");
}

#[test]
fn file_option_and_merge() {
    let dir = setup();
    fs::write(
        dir.path().join("extra.xml"),
        "<fact-list><fact><author>Extra</author><fact-type>misc</fact-type><fact-text>From elsewhere.</fact-text></fact></fact-list>",
    )
    .unwrap();

    factz(dir.path())
        .args(["list", "--merge", "extra.xml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Radium glows in the dark."))
        .stdout(predicate::str::contains("From elsewhere."));

    factz(dir.path())
        .args(["--file", "extra.xml", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("From elsewhere."))
        .stdout(predicate::str::contains("Radium").not());
}

#[test]
fn config_sets_search_mode() {
    let dir = setup();
    factz(dir.path())
        .args(["config", "search-mode", "text"])
        .assert()
        .success();

    factz(dir.path())
        .args(["config", "search-mode"])
        .assert()
        .success()
        .stdout(predicate::str::contains("search-mode = text"));

    factz(dir.path())
        .args(["search", "glows"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Marie Curie"));
}

#[test]
fn config_points_at_another_file() {
    let dir = TempDir::new().unwrap();
    factz(dir.path())
        .args(["config", "data-file", "mine.xml"])
        .assert()
        .success();
    factz(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("mine.xml"));
    assert!(dir.path().join("mine.xml").exists());
}
