//! Directory batch driver

use std::path::Path;

use log::info;

use crate::imaging::ImageBackend;
use super::errors::{SplitError, SplitResult};
use super::observer::SplitObserver;
use super::orchestrator::SplitOrchestrator;
use super::report::{BatchReport, ImageFailure};

/// Runs the orchestrator over every image of a directory, one at a time
pub struct BatchDriver<'o, 'a, B: ImageBackend> {
    orchestrator: &'o SplitOrchestrator<'a, B>,
}

impl<'o, 'a, B: ImageBackend> BatchDriver<'o, 'a, B> {
    pub fn new(orchestrator: &'o SplitOrchestrator<'a, B>) -> Self {
        BatchDriver { orchestrator }
    }

    /// Split every image file directly inside `directory`
    ///
    /// Images that fail are recorded and skipped. Files are visited in name
    /// order.
    pub fn run(&self, directory: &Path, save_root: &Path, observer: &mut dyn SplitObserver) -> SplitResult<BatchReport> {
        let backend = self.orchestrator.backend();
        if !backend.is_directory(directory) {
            return Err(SplitError::NotADirectory(directory.to_path_buf()));
        }

        let images: Vec<_> = backend
            .list_entries(directory)?
            .into_iter()
            .map(|name| directory.join(name))
            .filter(|path| backend.is_image(path))
            .collect();

        if images.is_empty() {
            return Err(SplitError::NoImagesFound(directory.to_path_buf()));
        }
        info!("Found {} image(s) in {}", images.len(), directory.display());

        let mut report = BatchReport::default();
        for (i, path) in images.iter().enumerate() {
            info!("Processing '{}' ({}/{})", path.display(), i + 1, images.len());
            match self.orchestrator.split(path, save_root, observer) {
                Ok(image_report) => report.processed.push(image_report),
                Err(e) if e.is_per_item() => {
                    info!("Skipping {}", path.display());
                    report.failed.push(ImageFailure {
                        source: path.clone(),
                        reason: e.to_string(),
                    });
                }
                Err(e) => return Err(e),
            }
        }
        Ok(report)
    }
}
