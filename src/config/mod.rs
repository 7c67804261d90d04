// Configuration module

use std::path::{Path, PathBuf};

use crate::image_optimizer::{DEFAULT_MAX_LONG_SIDE, DEFAULT_QUALITY};
use crate::watermark::{WatermarkError, WatermarkSpec};

/// Name of the output folder created inside the input folder by default.
pub const DEFAULT_OUTPUT_DIR_NAME: &str = "output";

/// Errors in the run configuration. All are fatal.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing input directory argument")]
    MissingInputDir,

    #[error("input directory does not exist - {}", .0.display())]
    InputDirNotFound(PathBuf),

    #[error(transparent)]
    Watermark(#[from] WatermarkError),
}

/// Per-file processing parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JobParams {
    /// Longest allowed side after compression, in pixels
    pub max_long_side: u32,
    /// JPEG quality (1-100)
    pub quality: u8,
}

impl Default for JobParams {
    fn default() -> Self {
        Self {
            max_long_side: DEFAULT_MAX_LONG_SIDE,
            quality: DEFAULT_QUALITY,
        }
    }
}

/// Configuration for one finishing run.
///
/// Built once from the command line and passed by reference into every
/// stage; nothing in it changes while the batch runs.
#[derive(Debug, Clone)]
pub struct Config {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    /// Font file forced by the user, replacing the system search list
    pub font_path: Option<PathBuf>,
    pub watermark: WatermarkSpec,
    pub job: JobParams,
}

impl Config {
    /// Build a configuration, defaulting the output folder to `<input_dir>/output`.
    pub fn new(
        input_dir: impl Into<PathBuf>,
        output_dir: Option<PathBuf>,
        font_path: Option<PathBuf>,
    ) -> Self {
        let input_dir = input_dir.into();
        let output_dir = output_dir.unwrap_or_else(|| input_dir.join(DEFAULT_OUTPUT_DIR_NAME));

        Self {
            input_dir,
            output_dir,
            font_path,
            watermark: WatermarkSpec::default(),
            job: JobParams::default(),
        }
    }

    /// Build from optional positional arguments, as given on the command line.
    pub fn from_args(
        input_dir: Option<PathBuf>,
        output_dir: Option<PathBuf>,
        font_path: Option<PathBuf>,
    ) -> Result<Self, ConfigError> {
        let input_dir = input_dir.ok_or(ConfigError::MissingInputDir)?;
        Ok(Self::new(input_dir, output_dir, font_path))
    }

    pub fn with_watermark(mut self, watermark: WatermarkSpec) -> Self {
        self.watermark = watermark;
        self
    }

    pub fn with_job(mut self, job: JobParams) -> Self {
        self.job = job;
        self
    }

    pub fn font_path(&self) -> Option<&Path> {
        self.font_path.as_deref()
    }

    /// Check that the input directory exists and the watermark is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.input_dir.is_dir() {
            return Err(ConfigError::InputDirNotFound(self.input_dir.clone()));
        }
        self.watermark.validate()?;
        Ok(())
    }
}
