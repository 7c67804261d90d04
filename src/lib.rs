// Photomark photo finishing library

pub mod config;
pub mod error;
pub mod image_optimizer;
pub mod logging;
pub mod pipeline; // Batch driver
pub mod watermark;

pub use config::{Config, ConfigError, JobParams};
pub use error::{Error, FileFailure, Stage};
pub use pipeline::{run_batch, BatchSummary, ConsoleReporter, Reporter};
