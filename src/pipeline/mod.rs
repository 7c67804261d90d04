// Batch driver: enumerate the input folder and finish each photo in turn

mod report;
mod scan;

pub use report::{ConsoleReporter, Reporter};
pub use scan::{output_file_name, plan_jobs, scan_input_dir, ProcessingJob};

use std::path::PathBuf;

use crate::config::Config;
use crate::error::{Error, FileFailure, Stage};
use crate::image_optimizer::{
    compress_image, flatten_onto_white, load_image, EncoderQuality, JpegEncoder,
};
use crate::watermark::{FontResolver, WatermarkFont, Watermarker};

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// A photo that was written successfully.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessedFile {
    pub output: PathBuf,
    /// Size of the written JPEG
    pub bytes: u64,
}

impl ProcessedFile {
    pub fn size_mb(&self) -> f64 {
        self.bytes as f64 / BYTES_PER_MB
    }
}

pub type FileOutcome = Result<ProcessedFile, FileFailure>;

/// What happened to every file of a run, in processing order.
#[derive(Debug)]
pub struct BatchSummary {
    pub output_dir: PathBuf,
    pub results: Vec<(ProcessingJob, FileOutcome)>,
}

impl BatchSummary {
    pub fn new(output_dir: PathBuf) -> Self {
        Self {
            output_dir,
            results: Vec::new(),
        }
    }

    pub fn total(&self) -> usize {
        self.results.len()
    }

    pub fn succeeded(&self) -> usize {
        self.results.iter().filter(|(_, r)| r.is_ok()).count()
    }

    pub fn failed(&self) -> usize {
        self.total() - self.succeeded()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

/// Runs the per-file stages with a font resolved once for the whole batch.
pub struct FileProcessor<'a> {
    config: &'a Config,
    font: WatermarkFont,
    encoder: JpegEncoder,
}

impl<'a> FileProcessor<'a> {
    pub fn new(config: &'a Config, font: WatermarkFont) -> Self {
        Self {
            config,
            font,
            encoder: JpegEncoder::default(),
        }
    }

    pub fn font(&self) -> &WatermarkFont {
        &self.font
    }

    /// Open, compress, watermark, flatten and encode one file.
    ///
    /// Any failure is returned with the stage it happened in; nothing is
    /// written for a file that fails before encoding completes.
    pub fn process(&self, job: &ProcessingJob) -> FileOutcome {
        let params = self.config.job;

        enter(job, Stage::Opening);
        let image = load_image(&job.input).map_err(|e| FileFailure::new(Stage::Opening, e))?;

        enter(job, Stage::Compressing);
        let compressed = compress_image(image, params.max_long_side, params.quality)
            .map_err(|e| FileFailure::new(Stage::Compressing, e))?;

        enter(job, Stage::Watermarking);
        let watermarked = Watermarker::new(&self.config.watermark, &self.font)
            .apply(compressed.image)
            .map_err(|e| FileFailure::new(Stage::Watermarking, e))?;

        enter(job, Stage::Flattening);
        let flat = flatten_onto_white(&watermarked);

        enter(job, Stage::Encoding);
        let encoded = self
            .encoder
            .encode(&flat, EncoderQuality::with_quality(compressed.quality))
            .map_err(|e| FileFailure::new(Stage::Encoding, e))?;

        std::fs::write(&job.output, &encoded.data).map_err(|source| {
            FileFailure::new(
                Stage::Encoding,
                Error::Io {
                    path: job.output.clone(),
                    source,
                },
            )
        })?;

        Ok(ProcessedFile {
            output: job.output.clone(),
            bytes: encoded.len() as u64,
        })
    }
}

fn enter(job: &ProcessingJob, stage: Stage) {
    tracing::trace!(index = job.index, path = %job.input.display(), %stage, "Entering stage");
}

/// Process every supported file in `config.input_dir` using the default
/// font search list (or the configured font override).
pub fn run_batch(config: &Config, reporter: &mut dyn Reporter) -> Result<BatchSummary, Error> {
    let fonts = FontResolver::for_override(config.font_path());
    run_batch_with_fonts(config, &fonts, reporter)
}

/// Process a batch, resolving the watermark font from `fonts`.
///
/// The output folder is created before the input folder is listed.
/// Errors returned here are fatal to the run: creating the output folder
/// or listing the input folder. Per-file failures are recorded in the
/// summary and the batch continues.
pub fn run_batch_with_fonts(
    config: &Config,
    fonts: &FontResolver,
    reporter: &mut dyn Reporter,
) -> Result<BatchSummary, Error> {
    std::fs::create_dir_all(&config.output_dir).map_err(|source| Error::Io {
        path: config.output_dir.clone(),
        source,
    })?;

    let files = scan_input_dir(&config.input_dir)?;
    let mut summary = BatchSummary::new(config.output_dir.clone());

    if files.is_empty() {
        tracing::info!(input_dir = %config.input_dir.display(), "No image files found");
        reporter.nothing_found(&config.input_dir);
        return Ok(summary);
    }

    reporter.batch_started(files.len(), &config.output_dir);

    let processor = FileProcessor::new(config, fonts.resolve());

    for job in plan_jobs(files, &config.output_dir) {
        reporter.file_started(&job);
        let outcome = processor.process(&job);

        match &outcome {
            Ok(done) => tracing::debug!(
                index = job.index,
                output = %done.output.display(),
                bytes = done.bytes,
                "File finished"
            ),
            Err(failure) => tracing::error!(
                index = job.index,
                path = %job.input.display(),
                stage = %failure.stage,
                error = %failure,
                "File failed"
            ),
        }

        reporter.file_finished(&job, &outcome);
        summary.results.push((job, outcome));
    }

    tracing::info!(
        succeeded = summary.succeeded(),
        failed = summary.failed(),
        "Batch complete"
    );
    reporter.batch_finished(&summary);

    Ok(summary)
}
