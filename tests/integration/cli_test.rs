//! Exit codes and console output of the built binary.

use super::fixtures::write_jpeg;
use std::process::Command;
use tempfile::TempDir;

fn photomark() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_photomark"));
    cmd.env("RUST_LOG", "off");
    cmd
}

#[test]
fn test_no_arguments_prints_usage_and_fails() {
    let output = photomark().output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Usage:"));
    assert!(stdout.contains("photomark ./photos ./output"));
}

#[test]
fn test_missing_input_dir_fails() {
    let output = photomark().arg("/no/such/photo/folder").output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("input directory does not exist - /no/such/photo/folder"));
}

#[test]
fn test_empty_dir_succeeds() {
    let input = TempDir::new().unwrap();
    let output = photomark().arg(input.path()).output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("No image files found in"));
}

#[test]
fn test_processes_into_explicit_output_dir() {
    let input = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    write_jpeg(&input.path().join("shot.jpg"), 320, 240);

    let output = photomark()
        .arg(input.path())
        .arg(out.path())
        .arg("/no/such/font.ttf")
        .output()
        .unwrap();

    assert!(output.status.success());
    assert!(out.path().join("photo-1.jpg").exists());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("[1/1] Processing: shot.jpg ... ✓"));
    assert!(stdout.contains("✅ Done! All images saved to"));
}

#[test]
fn test_fourth_argument_is_usage_error() {
    let input = TempDir::new().unwrap();
    let output = photomark()
        .arg(input.path())
        .arg(input.path().join("out"))
        .arg("/no/such/font.ttf")
        .arg("extra")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(2));
    assert!(!input.path().join("out").exists());
}
