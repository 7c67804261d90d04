// Error types module

use std::fmt;
use std::path::PathBuf;

use crate::config::ConfigError;
use crate::image_optimizer::ImageError;
use crate::watermark::WatermarkError;

/// Centralized error type for a finishing run
///
/// Wraps the per-stage error types so a single file's failure can be
/// carried and reported uniformly.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid run configuration (missing or nonexistent input directory)
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// File system failure on a specific path
    #[error("{}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Decoding, resizing or encoding failure
    #[error(transparent)]
    Image(#[from] ImageError),

    /// Watermark rendering or compositing failure
    #[error(transparent)]
    Watermark(#[from] WatermarkError),
}

/// Per-file pipeline stage, used to say where a file failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Opening,
    Compressing,
    Watermarking,
    Flattening,
    Encoding,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Opening => "opening",
            Stage::Compressing => "compressing",
            Stage::Watermarking => "watermarking",
            Stage::Flattening => "flattening",
            Stage::Encoding => "encoding",
        };
        f.write_str(name)
    }
}

/// Why one file of the batch could not be finished.
#[derive(Debug, thiserror::Error)]
#[error("{error}")]
pub struct FileFailure {
    pub stage: Stage,
    #[source]
    pub error: Error,
}

impl FileFailure {
    pub fn new(stage: Stage, error: impl Into<Error>) -> Self {
        Self {
            stage,
            error: error.into(),
        }
    }
}
