// Batch planning unit tests

use photomark::pipeline::{output_file_name, plan_jobs, scan_input_dir, BatchSummary};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

#[test]
fn test_scan_and_plan_assign_indices_by_sorted_name() {
    let dir = TempDir::new().unwrap();
    for name in ["IMG_0010.jpg", "IMG_0002.JPG", "cover.png", "notes.txt"] {
        fs::write(dir.path().join(name), b"x").unwrap();
    }

    let files = scan_input_dir(dir.path()).unwrap();
    let jobs = plan_jobs(files, Path::new("/out"));

    let planned: Vec<(String, PathBuf)> = jobs
        .iter()
        .map(|job| (job.file_name(), job.output.clone()))
        .collect();

    assert_eq!(
        planned,
        vec![
            ("IMG_0002.JPG".to_string(), PathBuf::from("/out/photo-1.jpg")),
            ("IMG_0010.jpg".to_string(), PathBuf::from("/out/photo-2.jpg")),
            ("cover.png".to_string(), PathBuf::from("/out/photo-3.jpg")),
        ]
    );
    assert!(jobs.iter().all(|job| job.total == 3));
}

#[test]
fn test_output_names_ignore_input_extension() {
    let jobs = plan_jobs(vec![PathBuf::from("/in/a.png")], Path::new("/out"));
    assert_eq!(jobs[0].output.extension().unwrap(), "jpg");
    assert_eq!(output_file_name(1), "photo-1.jpg");
}

#[test]
fn test_empty_summary_counts() {
    let summary = BatchSummary::new(PathBuf::from("/out"));
    assert!(summary.is_empty());
    assert_eq!(summary.total(), 0);
    assert_eq!(summary.succeeded(), 0);
    assert_eq!(summary.failed(), 0);
}
