//! Integration tests for the codestats CLI

use std::fs;
use std::path::Path;
use std::process::Command;

fn run_codestats(args: &[&str]) -> (String, String, bool) {
    let mut cmd_args = vec!["run", "-p", "codestats", "--"];
    cmd_args.extend(args);

    let output = Command::new("cargo")
        .args(&cmd_args)
        .current_dir(env!("CARGO_MANIFEST_DIR").to_string() + "/..")
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();

    (stdout, stderr, success)
}

fn write(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

#[test]
fn test_cli_help() {
    let (stdout, _, success) = run_codestats(&["--help"]);

    assert!(success);
    assert!(stdout.contains("codestats"));
    assert!(stdout.contains("--git-repo"));
    assert!(stdout.contains("--config"));
    assert!(stdout.contains("--output"));
}

#[test]
fn test_cli_version() {
    let (stdout, _, success) = run_codestats(&["--version"]);

    assert!(success);
    assert!(stdout.contains("codestats"));
}

#[test]
fn test_table_output() {
    let temp = tempfile::tempdir().unwrap();
    write(&temp.path().join("a.py"), "x = 1\n\ny = 2\nz = 3\n");

    let (stdout, _, success) = run_codestats(&[temp.path().to_str().unwrap()]);

    assert!(success);
    assert!(stdout.contains("Language"));
    assert!(stdout.contains("Python"));
    assert!(stdout.contains("Total"));
    assert!(stdout.contains('3'));
}

#[test]
fn test_json_output() {
    let temp = tempfile::tempdir().unwrap();
    write(&temp.path().join("a.py"), "x = 1\ny = 2\n");

    let (stdout, _, success) =
        run_codestats(&[temp.path().to_str().unwrap(), "--output", "json"]);

    assert!(success);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("Invalid JSON output");
    assert_eq!(parsed["tree"]["stats"]["Python"], 2);
    assert!(parsed["diagnostics"].as_array().unwrap().is_empty());
}

#[test]
fn test_git_repo_scoping() {
    let temp = tempfile::tempdir().unwrap();
    let root = temp.path().join("proj");
    fs::create_dir_all(&root).unwrap();
    write(&root.join(".git"), "gitdir: elsewhere\n");
    write(&root.join(".gitignore"), "build/\n");
    write(&root.join("build/x.c"), "int main() {}\n");
    write(&root.join("keep.c"), "int x;\nint y;\n");
    let sub = root.join("sub");
    write(&sub.join(".git"), "gitdir: elsewhere\n");
    write(&sub.join("m.go"), "package m\n");

    let (stdout, _, success) =
        run_codestats(&[root.to_str().unwrap(), "-g", "--output", "json"]);

    assert!(success);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("Invalid JSON output");
    let repo = &parsed["tree"]["children"]["proj"];
    assert_eq!(repo["stats"]["C"], 2);
    assert!(repo["stats"].get("Go").is_none());
    assert_eq!(repo["children"]["sub"]["stats"]["Go"], 1);
}

#[test]
fn test_skip_listed_files_absent() {
    let temp = tempfile::tempdir().unwrap();
    write(&temp.path().join("a.py"), "x = 1\n");
    write(&temp.path().join("notes.txt"), "some notes\n");

    let (stdout, _, success) =
        run_codestats(&[temp.path().to_str().unwrap(), "--output", "json"]);

    assert!(success);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("Invalid JSON output");
    // "Text" is skip-listed in the embedded registry: no entry at all.
    assert!(parsed["tree"]["stats"].get("Text").is_none());
    assert_eq!(parsed["tree"]["stats"]["Python"], 1);
}

#[test]
fn test_custom_config() {
    let temp = tempfile::tempdir().unwrap();
    write(
        &temp.path().join("languages.yml"),
        "languages:\n  Fortran:\n    exts: [\".f90\"]\n",
    );
    write(&temp.path().join("src/solver.f90"), "program solver\nend program\n");

    let (stdout, _, success) = run_codestats(&[
        temp.path().join("src").to_str().unwrap(),
        "--config",
        temp.path().join("languages.yml").to_str().unwrap(),
        "--output",
        "json",
    ]);

    assert!(success);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("Invalid JSON output");
    assert_eq!(parsed["tree"]["stats"]["Fortran"], 2);
}

#[test]
fn test_invalid_path() {
    let (_, stderr, success) = run_codestats(&["/nonexistent/path"]);

    assert!(!success);
    assert!(stderr.contains("Error:"));
}

#[test]
fn test_malformed_config_is_fatal() {
    let temp = tempfile::tempdir().unwrap();
    write(&temp.path().join("bad.yml"), "languages: [1, 2, 3]\n");

    let (_, stderr, success) = run_codestats(&[
        temp.path().to_str().unwrap(),
        "--config",
        temp.path().join("bad.yml").to_str().unwrap(),
    ]);

    assert!(!success);
    assert!(stderr.contains("Error:"));
}
