use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{CommandFactory, Parser};
use photomark::config::Config;
use photomark::pipeline::{run_batch, ConsoleReporter};

const EXAMPLES: &str = "\
Examples:
  photomark ./photos
  photomark ./photos ./output
  photomark ./photos ./output \"/System/Library/Fonts/Times New Roman.ttf\"";

/// Photomark - downscale, watermark and re-encode a folder of photos as JPEG
#[derive(Parser, Debug)]
#[command(name = "photomark")]
#[command(version, about, long_about = None, after_help = EXAMPLES)]
struct Args {
    /// Folder containing the JPEG/PNG photos to finish
    input_directory: Option<PathBuf>,

    /// Where to write photo-N.jpg files (default: <input_directory>/output)
    output_directory: Option<PathBuf>,

    /// TrueType/OpenType font for the watermark text
    font_path: Option<PathBuf>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    if args.input_directory.is_none() {
        let _ = Args::command().print_help();
        return ExitCode::FAILURE;
    }

    if let Err(e) = photomark::logging::init_subscriber() {
        eprintln!("Failed to initialize logging: {}", e);
    }

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let config = Config::from_args(args.input_directory, args.output_directory, args.font_path)?;
    config.validate()?;

    tracing::info!(
        input_dir = %config.input_dir.display(),
        output_dir = %config.output_dir.display(),
        font_override = config.font_path.is_some(),
        "Configuration loaded"
    );

    let mut reporter = ConsoleReporter::stdout();
    run_batch(&config, &mut reporter)
        .with_context(|| format!("Failed to process {}", config.input_dir.display()))?;

    Ok(())
}
