//! Integration tests for the pairwise command.

use clap::Parser;
use pairwise::{run, Cli};
use pretty_assertions::assert_eq;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Writes `output_1.cnf` .. `output_<n>.cnf` where file i holds `i % 2` lines.
fn write_outputs(dir: &Path, n: usize) {
    for i in 1..=n {
        let content: String = (0..i % 2).map(|_| "1 -2 0\n").collect();
        fs::write(dir.join(format!("output_{}.cnf", i)), content)
            .expect("Failed to write output file");
    }
}

#[test]
fn test_no_arguments_uses_default_list() {
    let cli = Cli::parse_from(["pairwise"]);

    let files = cli.file_list();

    assert_eq!(files.len(), 9);
    assert_eq!(files.paths()[0], Path::new("output_1.cnf"));
}

#[test]
fn test_arguments_replace_default_list() {
    let cli = Cli::parse_from(["pairwise", "b.cnf", "a.cnf"]);

    let files = cli.file_list();

    assert_eq!(files.paths(), &[PathBuf::from("b.cnf"), PathBuf::from("a.cnf")]);
}

#[test]
fn test_run_writes_one_line_per_pair() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let a = temp_dir.path().join("a.cnf");
    let b = temp_dir.path().join("b.cnf");
    let c = temp_dir.path().join("c.cnf");
    fs::write(&a, "x\ny\n").unwrap();
    fs::write(&b, "x\nz\n").unwrap();
    fs::write(&c, "x\n").unwrap();

    let cli = Cli {
        files: vec![a.clone(), b.clone(), c.clone()],
    };
    let mut out = Vec::new();
    run(&cli, &mut out).expect("run should succeed");

    let expected = format!(
        "{a} vs {b}: 1 different lines\n{a} vs {c}: 1 different lines\n{b} vs {c}: 1 different lines\n",
        a = a.display(),
        b = b.display(),
        c = c.display()
    );
    assert_eq!(String::from_utf8(out).unwrap(), expected);
}

#[test]
fn test_run_writes_nothing_on_failure() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let a = temp_dir.path().join("a.cnf");
    let b = temp_dir.path().join("b.cnf");
    fs::write(&a, "x\n").unwrap();
    fs::write(&b, "x\n").unwrap();

    // (a, b) succeeds before the missing file is reached
    let cli = Cli {
        files: vec![a, b, temp_dir.path().join("missing.cnf")],
    };
    let mut out = Vec::new();

    assert!(run(&cli, &mut out).is_err());
    assert!(out.is_empty());
}

#[test]
fn test_binary_compares_default_files_in_working_directory() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    write_outputs(temp_dir.path(), 9);

    let output = Command::new(env!("CARGO_BIN_EXE_pairwise"))
        .current_dir(temp_dir.path())
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run pairwise");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 36);
    assert_eq!(lines[0], "output_1.cnf vs output_2.cnf: 1 different lines");
    assert_eq!(lines[1], "output_1.cnf vs output_3.cnf: 0 different lines");
    assert_eq!(lines[35], "output_8.cnf vs output_9.cnf: 1 different lines");
}

#[test]
fn test_binary_fails_on_missing_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    write_outputs(temp_dir.path(), 8);

    let output = Command::new(env!("CARGO_BIN_EXE_pairwise"))
        .current_dir(temp_dir.path())
        .output()
        .expect("Failed to run pairwise");

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("output_9.cnf"));
}

#[test]
fn test_run_with_repeated_file_prints_each_key_once() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let a = temp_dir.path().join("a.cnf");
    let b = temp_dir.path().join("b.cnf");
    fs::write(&a, "x\n").unwrap();
    fs::write(&b, "y\n").unwrap();

    let cli = Cli {
        files: vec![a.clone(), a.clone(), b.clone()],
    };
    let mut out = Vec::new();
    run(&cli, &mut out).expect("run should succeed");

    let expected = format!(
        "{a} vs {a}: 0 different lines\n{a} vs {b}: 1 different lines\n",
        a = a.display(),
        b = b.display()
    );
    assert_eq!(String::from_utf8(out).unwrap(), expected);
}
