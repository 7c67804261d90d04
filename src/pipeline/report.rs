// Progress reporting for a batch run

use std::io::{self, Write};
use std::path::Path;

use super::scan::ProcessingJob;
use super::{BatchSummary, FileOutcome};

/// Receives progress events while a batch runs.
pub trait Reporter {
    /// Files were found and processing is about to start.
    fn batch_started(&mut self, file_count: usize, output_dir: &Path);

    /// The input folder held no supported files.
    fn nothing_found(&mut self, input_dir: &Path);

    fn file_started(&mut self, job: &ProcessingJob);

    fn file_finished(&mut self, job: &ProcessingJob, outcome: &FileOutcome);

    fn batch_finished(&mut self, summary: &BatchSummary);
}

/// Human-readable progress lines written to a terminal (or any writer).
///
/// Write errors are swallowed: losing a progress line must not abort the batch.
pub struct ConsoleReporter<W: Write> {
    out: W,
}

impl ConsoleReporter<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Reporter for ConsoleReporter<W> {
    fn batch_started(&mut self, file_count: usize, output_dir: &Path) {
        let _ = writeln!(self.out, "Found {} image files", file_count);
        let _ = writeln!(self.out, "Output folder: {}", output_dir.display());
        let _ = writeln!(self.out);
    }

    fn nothing_found(&mut self, input_dir: &Path) {
        let _ = writeln!(self.out, "No image files found in {}", input_dir.display());
    }

    fn file_started(&mut self, job: &ProcessingJob) {
        let _ = write!(
            self.out,
            "[{}/{}] Processing: {} ... ",
            job.index,
            job.total,
            job.file_name()
        );
        let _ = self.out.flush();
    }

    fn file_finished(&mut self, _job: &ProcessingJob, outcome: &FileOutcome) {
        let _ = match outcome {
            Ok(done) => writeln!(self.out, "✓ ({:.2} MB)", done.size_mb()),
            Err(failure) => writeln!(self.out, "✗ Error: {}", failure),
        };
    }

    fn batch_finished(&mut self, summary: &BatchSummary) {
        let _ = writeln!(self.out);
        let _ = writeln!(
            self.out,
            "✅ Done! All images saved to {}",
            summary.output_dir.display()
        );
    }
}
