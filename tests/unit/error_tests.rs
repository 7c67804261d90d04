// Error type unit tests

use photomark::error::{Error, FileFailure, Stage};
use photomark::image_optimizer::ImageError;
use photomark::watermark::WatermarkError;
use photomark::ConfigError;
use std::error::Error as _;
use std::path::PathBuf;

#[test]
fn test_config_error_converts_transparently() {
    let err: Error = ConfigError::InputDirNotFound(PathBuf::from("/x")).into();
    assert_eq!(err.to_string(), "input directory does not exist - /x");
}

#[test]
fn test_image_error_messages() {
    assert_eq!(
        ImageError::decode_failed("bad marker").to_string(),
        "Failed to decode image: bad marker"
    );
    assert!(ImageError::invalid_dimensions(0, 10, "zero width")
        .to_string()
        .contains("0x10"));
}

#[test]
fn test_file_failure_keeps_source_chain() {
    let failure = FileFailure::new(
        Stage::Encoding,
        Error::Io {
            path: PathBuf::from("/out/photo-1.jpg"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        },
    );

    assert_eq!(failure.stage, Stage::Encoding);
    assert_eq!(failure.to_string(), "/out/photo-1.jpg: denied");

    let source = failure.source().unwrap();
    assert!(source.source().is_some());
}

#[test]
fn test_watermark_error_in_failure() {
    let failure = FileFailure::new(
        Stage::Watermarking,
        WatermarkError::CompositeError("overlay".to_string()),
    );
    assert_eq!(failure.stage.to_string(), "watermarking");
    assert!(matches!(failure.error, Error::Watermark(_)));
}
