// Input enumeration and job numbering

use std::path::{Path, PathBuf};

use crate::error::Error;
use crate::image_optimizer::has_supported_extension;

/// One file of the batch and where its output goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessingJob {
    /// 1-based position in the sorted input list
    pub index: usize,
    /// Number of files in the batch
    pub total: usize,
    pub input: PathBuf,
    pub output: PathBuf,
}

impl ProcessingJob {
    /// Input file name for display.
    pub fn file_name(&self) -> String {
        self.input
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.input.display().to_string())
    }
}

/// Output file name for the `index`-th file: `photo-<index>.jpg`.
pub fn output_file_name(index: usize) -> String {
    format!("photo-{}.jpg", index)
}

/// List the supported image files directly inside `dir`, sorted by name.
///
/// Subdirectories are not descended into.
pub fn scan_input_dir(dir: &Path) -> Result<Vec<PathBuf>, Error> {
    let io_err = |source| Error::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(io_err)? {
        let path = entry.map_err(io_err)?.path();
        if has_supported_extension(&path) && path.is_file() {
            files.push(path);
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// Number the files in order and assign output paths.
///
/// Numbering depends only on position, never on the input file name.
pub fn plan_jobs(files: Vec<PathBuf>, output_dir: &Path) -> Vec<ProcessingJob> {
    let total = files.len();
    files
        .into_iter()
        .enumerate()
        .map(|(i, input)| ProcessingJob {
            index: i + 1,
            total,
            input,
            output: output_dir.join(output_file_name(i + 1)),
        })
        .collect()
}
