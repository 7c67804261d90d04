//! Batch runs end to end: real files in, numbered JPEGs out.

use super::fixtures::{write_jpeg, write_transparent_png};
use photomark::image_optimizer::{EncoderQuality, JpegEncoder};
use photomark::pipeline::{run_batch, run_batch_with_fonts, ConsoleReporter};
use photomark::watermark::{BuiltinBitmapFont, FontResolver};
use photomark::{Config, Stage};
use std::fs;
use tempfile::TempDir;

fn bitmap_only() -> FontResolver {
    FontResolver::new(vec![Box::new(BuiltinBitmapFont)])
}

#[test]
fn test_mixed_batch_with_failure_in_the_middle() {
    let input = TempDir::new().unwrap();
    write_jpeg(&input.path().join("01-portrait.jpg"), 900, 1200);
    fs::write(input.path().join("02-broken.png"), b"\x89PNG\r\n\x1a\ntruncated").unwrap();
    write_transparent_png(&input.path().join("03-logo.png"), 300, 200);
    fs::write(input.path().join("04-readme.txt"), b"not a photo").unwrap();

    let config = Config::new(input.path(), None, None);
    let mut reporter = ConsoleReporter::new(Vec::new());
    let summary = run_batch_with_fonts(&config, &bitmap_only(), &mut reporter).unwrap();

    assert_eq!(summary.total(), 3);
    assert_eq!(summary.succeeded(), 2);
    assert_eq!(summary.failed(), 1);

    let out = &config.output_dir;
    let portrait = image::open(out.join("photo-1.jpg")).unwrap();
    assert_eq!((portrait.width(), portrait.height()), (900, 1200));
    assert!(!out.join("photo-2.jpg").exists());
    assert!(out.join("photo-3.jpg").exists());

    let failure = summary.results[1].1.as_ref().unwrap_err();
    assert_eq!(failure.stage, Stage::Opening);

    let console = String::from_utf8(reporter.into_inner()).unwrap();
    let lines: Vec<&str> = console.lines().collect();
    assert_eq!(lines[0], "Found 3 image files");
    assert_eq!(lines[1], format!("Output folder: {}", out.display()));
    assert!(lines[3].starts_with("[1/3] Processing: 01-portrait.jpg ... ✓ ("));
    assert!(lines[4].starts_with("[2/3] Processing: 02-broken.png ... ✗ Error: "));
    assert!(lines[5].starts_with("[3/3] Processing: 03-logo.png ... ✓ ("));
    assert!(lines[5].ends_with(" MB)"));
}

#[test]
fn test_transparent_png_flattens_to_white() {
    let input = TempDir::new().unwrap();
    write_transparent_png(&input.path().join("clear.png"), 200, 200);

    let config = Config::new(input.path(), None, None);
    let mut reporter = ConsoleReporter::new(Vec::new());
    run_batch_with_fonts(&config, &bitmap_only(), &mut reporter).unwrap();

    let out = image::open(config.output_dir.join("photo-1.jpg"))
        .unwrap()
        .into_rgb8();
    // Top-left corner is far from the watermark
    let corner = out.get_pixel(2, 2).0;
    assert!(corner.iter().all(|&c| c >= 250), "corner was {:?}", corner);
}

#[test]
fn test_second_run_overwrites_outputs() {
    let input = TempDir::new().unwrap();
    write_jpeg(&input.path().join("a.jpg"), 64, 48);

    let config = Config::new(input.path(), None, None);
    for _ in 0..2 {
        let mut reporter = ConsoleReporter::new(Vec::new());
        let summary = run_batch_with_fonts(&config, &bitmap_only(), &mut reporter).unwrap();
        assert_eq!(summary.succeeded(), 1);
    }

    let entries = fs::read_dir(&config.output_dir).unwrap().count();
    assert_eq!(entries, 1);
}

#[test]
fn test_default_font_search_runs_to_completion() {
    // Whatever fonts this machine has, the batch must finish
    let input = TempDir::new().unwrap();
    write_jpeg(&input.path().join("a.jpg"), 640, 480);

    let config = Config::new(input.path(), None, None);
    let mut reporter = ConsoleReporter::new(Vec::new());
    let summary = run_batch(&config, &mut reporter).unwrap();

    assert_eq!(summary.succeeded(), 1);
}

#[test]
fn test_encoder_output_is_decodable_at_quality() {
    let img = image::RgbImage::from_pixel(32, 32, image::Rgb([10, 20, 30]));
    let encoded = JpegEncoder::default()
        .encode(&img, EncoderQuality::with_quality(85))
        .unwrap();

    let decoded = image::load_from_memory(&encoded.data).unwrap();
    assert_eq!((decoded.width(), decoded.height()), (32, 32));
}
