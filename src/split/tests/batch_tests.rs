//! Tests for directory batches

use std::path::{Path, PathBuf};

use image::ImageFormat;

use super::fake_backend::{FakeBackend, Recorder};
use crate::config::SplitConfig;
use crate::geometry::{GridRequest, GridSpec};
use crate::split::{BatchDriver, SplitError, SplitOptions, SplitOrchestrator};

fn two_by_two() -> SplitOptions {
    let mut options = SplitOptions::from_config(&SplitConfig::default());
    options.grid = GridRequest::Explicit(GridSpec::new(2, 2).unwrap());
    options
}

#[test]
fn test_corrupt_image_does_not_stop_the_batch() {
    let config = SplitConfig::default();
    let backend = FakeBackend::new()
        .with_image("/in/1.png", 20, 20, ImageFormat::Png)
        .with_corrupt("/in/2.png")
        .with_image("/in/3.jpg", 20, 20, ImageFormat::Jpeg);
    let orchestrator = SplitOrchestrator::new(&config, two_by_two(), &backend);
    let mut recorder = Recorder::default();

    let report = BatchDriver::new(&orchestrator)
        .run(Path::new("/in"), Path::new("/out"), &mut recorder)
        .unwrap();

    assert_eq!(report.total_images(), 3);
    assert_eq!(report.processed.len(), 2);
    assert_eq!(report.failed.len(), 1);
    assert_eq!(report.failed[0].source, PathBuf::from("/in/2.png"));
    assert_eq!(report.tiles_written(), 8);
    assert_eq!(backend.file_names_in("/out/1_split").len(), 4);
    assert_eq!(backend.file_names_in("/out/3_split").len(), 4);
    assert_eq!(recorder.failed_images, vec![PathBuf::from("/in/2.png")]);
}

#[test]
fn test_empty_directory_reports_no_images() {
    let config = SplitConfig::default();
    let backend = FakeBackend::new();
    let orchestrator = SplitOrchestrator::new(&config, two_by_two(), &backend);

    let result = BatchDriver::new(&orchestrator).run(Path::new("/in"), Path::new("/out"), &mut Recorder::default());

    assert!(matches!(result, Err(SplitError::NoImagesFound(_))));
    assert!(backend.attempts.borrow().is_empty());
}

#[test]
fn test_batch_source_must_be_a_directory() {
    let config = SplitConfig::default();
    let backend = FakeBackend::new().with_image("/in/1.png", 20, 20, ImageFormat::Png);
    let orchestrator = SplitOrchestrator::new(&config, two_by_two(), &backend);

    let result = BatchDriver::new(&orchestrator).run(Path::new("/in/1.png"), Path::new("/out"), &mut Recorder::default());

    assert!(matches!(result, Err(SplitError::NotADirectory(_))));
}
