// Configuration unit tests

use photomark::config::*;
use photomark::watermark::{Color, WatermarkPlacement, WatermarkSpec};
use std::path::{Path, PathBuf};

#[test]
fn test_default_output_dir_is_inside_input_dir() {
    let config = Config::new("./photos", None, None);
    assert_eq!(config.output_dir, Path::new("./photos").join(DEFAULT_OUTPUT_DIR_NAME));
}

#[test]
fn test_default_watermark_spec() {
    let config = Config::new("./photos", None, None);
    let spec = &config.watermark;

    assert_eq!(spec.text, "ELMO.H Photography");
    assert_eq!(spec.color, Color::new(212, 175, 55));
    assert_eq!(spec.opacity, 1.0);
    assert_eq!(
        spec.placement,
        WatermarkPlacement::BottomCenter { bottom_ratio: 0.95 }
    );
    assert!(spec.validate().is_ok());
}

#[test]
fn test_default_job_params() {
    let config = Config::new("./photos", None, None);
    assert_eq!(
        config.job,
        JobParams {
            max_long_side: 3000,
            quality: 85
        }
    );
}

#[test]
fn test_builders_replace_sections() {
    let config = Config::new("./photos", None, None)
        .with_watermark(WatermarkSpec::with_text("Studio"))
        .with_job(JobParams {
            max_long_side: 1200,
            quality: 70,
        });

    assert_eq!(config.watermark.text, "Studio");
    assert_eq!(config.job.max_long_side, 1200);
    assert_eq!(config.job.quality, 70);
}

#[test]
fn test_from_args_keeps_all_positionals() {
    let config = Config::from_args(
        Some(PathBuf::from("in")),
        Some(PathBuf::from("out")),
        Some(PathBuf::from("font.ttf")),
    )
    .unwrap();

    assert_eq!(config.input_dir, PathBuf::from("in"));
    assert_eq!(config.output_dir, PathBuf::from("out"));
    assert_eq!(config.font_path(), Some(Path::new("font.ttf")));
}

#[test]
fn test_missing_input_dir_message() {
    let err = Config::new("/nope/photos", None, None).validate().unwrap_err();
    assert_eq!(err.to_string(), "input directory does not exist - /nope/photos");
}

#[test]
fn test_spec_validation_rejects_bad_values() {
    let mut spec = WatermarkSpec::default();
    spec.text.clear();
    assert!(spec.validate().is_err());

    let mut spec = WatermarkSpec::default();
    spec.opacity = 1.5;
    assert!(spec.validate().is_err());

    let mut spec = WatermarkSpec::default();
    spec.opacity = f32::NAN;
    assert!(spec.validate().is_err());
}

#[test]
fn test_config_validation_covers_watermark() {
    let dir = tempfile::TempDir::new().unwrap();
    let mut spec = WatermarkSpec::default();
    spec.opacity = -0.5;

    let err = Config::new(dir.path(), None, None)
        .with_watermark(spec)
        .validate()
        .unwrap_err();
    assert!(matches!(err, ConfigError::Watermark(_)));
    assert!(err.to_string().contains("opacity"));
}
