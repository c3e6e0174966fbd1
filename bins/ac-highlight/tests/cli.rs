//! End-to-end tests for the ac-highlight binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

const RESPONSE: &str = r#"{
  "query_keywords": ["nem", "finr"],
  "results": [
    {
      "record": {"title": "Nemo Finds Home", "genre": "Animation", "year": 2003},
      "matching_prefix": ["nem", "fin"]
    },
    {
      "record": {"title": "The Nemesis", "genre": ["Drama"]},
      "matching_prefix": ["nem"]
    }
  ]
}"#;

fn ac_highlight() -> Command {
    let mut cmd = Command::cargo_bin("ac-highlight").unwrap();
    cmd.env("NO_COLOR", "1").env_remove("FORCE_COLOR").env_remove("RUST_LOG");
    cmd
}

fn response_file() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(RESPONSE.as_bytes()).unwrap();
    file
}

#[test]
fn test_render_markup() {
    let file = response_file();
    ac_highlight()
        .args(["render", "--format", "markup", "--field", "title"])
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "title: <span class='exact_prefix'>Nem</span>o <span class='fuzzy_prefix'>Fin</span>ds Home",
        ))
        .stdout(predicate::str::contains("title: The <span class='exact_prefix'>Nem</span>esis"));
}

#[test]
fn test_render_json_isolates_bad_field() {
    let file = response_file();
    let output = ac_highlight()
        .args(["render", "--format", "json", "--field", "title", "--field", "genre"])
        .arg(file.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let hits: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(hits.as_array().unwrap().len(), 2);
    assert_eq!(hits[0]["fields"][1]["value"], "Animation");
    assert!(hits[1]["fields"][1]["error"].as_str().unwrap().contains("array"));
    assert_eq!(
        hits[1]["fields"][0]["value"],
        "The <span class='exact_prefix'>Nem</span>esis"
    );
}

#[test]
fn test_render_text_from_stdin() {
    ac_highlight()
        .args(["render", "--field", "title", "--field", "year"])
        .write_stdin(RESPONSE)
        .assert()
        .success()
        .stdout(predicate::str::contains("title: Nemo Finds Home"))
        .stdout(predicate::str::contains("year: 2003"));
}

#[test]
fn test_render_uses_config_markup_and_fields() {
    let file = response_file();
    let mut config = NamedTempFile::new().unwrap();
    writeln!(config, "fields = [\"title\"]\n\n[markup]\nstyle = \"markers\"").unwrap();

    ac_highlight()
        .arg("--config")
        .arg(config.path())
        .args(["render", "--format", "markup"])
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("title: <b>Nem</b>o <i>Fin</i>ds Home"))
        .stdout(predicate::str::contains("genre").not());
}

#[test]
fn test_render_rejects_malformed_response() {
    ac_highlight()
        .args(["render", "-"])
        .write_stdin(r#"{"results": "nope"}"#)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid argument"));
}

#[test]
fn test_classify_exact_prefix() {
    ac_highlight()
        .args(["classify", "Nemo", "--prefix", "nem", "--keyword", "nem"])
        .assert()
        .success()
        .stdout(predicate::str::contains("exact_prefix Nem|o"));
}

#[test]
fn test_classify_first_prefix_wins_json() {
    ac_highlight()
        .args(["classify", "abacus", "-p", "a", "-p", "ab", "-k", "ab", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            r#"{"status":"matched","matched_len":1,"category":"fuzzy_prefix"}"#,
        ));
}

#[test]
fn test_classify_unmatched() {
    ac_highlight()
        .args(["classify", "Home", "--prefix", "nem"])
        .assert()
        .success()
        .stdout(predicate::str::contains("unmatched Home"));
}
