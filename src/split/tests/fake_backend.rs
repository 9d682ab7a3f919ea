//! In-memory backend and recording observer for pipeline tests

use std::cell::RefCell;
use std::collections::{BTreeSet, HashMap, HashSet};
use std::path::{Path, PathBuf};

use image::{DynamicImage, ImageFormat, RgbImage};

use crate::geometry::ImageDimensions;
use crate::imaging::{ImageBackend, SourceImage};
use crate::metadata::{SourceMetadata, TextEntry, TileMetadata};
use crate::split::{SplitError, SplitObserver, SplitReport, SplitResult, SplitState};

pub enum FakeSource {
    Image { width: u32, height: u32, format: ImageFormat },
    Corrupt,
}

#[derive(Default)]
pub struct FakeBackend {
    pub sources: HashMap<PathBuf, FakeSource>,
    pub directories: RefCell<BTreeSet<PathBuf>>,
    pub files: RefCell<BTreeSet<PathBuf>>,
    /// Every save attempt: (path, carried metadata)
    pub attempts: RefCell<Vec<(PathBuf, bool)>>,
    pub reject_metadata: bool,
    pub always_fail: HashSet<String>,
}

impl FakeBackend {
    pub fn new() -> Self {
        let backend = FakeBackend::default();
        backend.directories.borrow_mut().insert(PathBuf::from("/in"));
        backend.directories.borrow_mut().insert(PathBuf::from("/out"));
        backend
    }

    pub fn with_image(mut self, path: &str, width: u32, height: u32, format: ImageFormat) -> Self {
        self.sources.insert(PathBuf::from(path), FakeSource::Image { width, height, format });
        self
    }

    pub fn with_corrupt(mut self, path: &str) -> Self {
        self.sources.insert(PathBuf::from(path), FakeSource::Corrupt);
        self
    }

    pub fn file_names_in(&self, dir: &str) -> Vec<String> {
        self.files
            .borrow()
            .iter()
            .filter(|p| p.parent() == Some(Path::new(dir)))
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect()
    }
}

impl ImageBackend for FakeBackend {
    fn open(&self, path: &Path) -> SplitResult<SourceImage> {
        match self.sources.get(path) {
            Some(FakeSource::Image { width, height, format }) => Ok(SourceImage {
                path: path.to_path_buf(),
                image: DynamicImage::ImageRgb8(RgbImage::new(*width, *height)),
                dimensions: ImageDimensions::new(*width, *height),
                format: *format,
                metadata: SourceMetadata {
                    text_entries: vec![TextEntry::new("Title", "fake")],
                    ..Default::default()
                },
            }),
            _ => Err(SplitError::CannotOpen {
                path: path.to_path_buf(),
                reason: "fake open failure".to_string(),
            }),
        }
    }

    fn is_image(&self, path: &Path) -> bool {
        self.sources.contains_key(path)
    }

    fn save(&self, _tile: &DynamicImage, path: &Path, metadata: &TileMetadata, _format: ImageFormat) -> SplitResult<()> {
        self.attempts.borrow_mut().push((path.to_path_buf(), !metadata.is_empty()));
        let name = path.file_name().unwrap().to_string_lossy().into_owned();
        if self.always_fail.contains(&name) || (self.reject_metadata && !metadata.is_empty()) {
            return Err(SplitError::Save {
                path: path.to_path_buf(),
                reason: "fake encoder refused".to_string(),
            });
        }
        self.files.borrow_mut().insert(path.to_path_buf());
        Ok(())
    }

    fn list_entries(&self, directory: &Path) -> SplitResult<Vec<String>> {
        let mut entries: Vec<String> = self
            .sources
            .keys()
            .chain(self.files.borrow().iter())
            .chain(self.directories.borrow().iter())
            .filter(|p| p.parent() == Some(directory))
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        entries.sort();
        entries.dedup();
        Ok(entries)
    }

    fn exists(&self, path: &Path) -> bool {
        self.directories.borrow().contains(path) || self.files.borrow().contains(path) || self.sources.contains_key(path)
    }

    fn is_directory(&self, path: &Path) -> bool {
        self.directories.borrow().contains(path)
    }

    fn create_dir_all(&self, path: &Path) -> SplitResult<()> {
        self.directories.borrow_mut().insert(path.to_path_buf());
        Ok(())
    }
}

#[derive(Default)]
pub struct Recorder {
    pub states: Vec<SplitState>,
    pub written: Vec<(usize, usize, String)>,
    pub failed_tiles: Vec<String>,
    pub completed: Vec<SplitReport>,
    pub failed_images: Vec<PathBuf>,
}

impl SplitObserver for Recorder {
    fn on_state(&mut self, _source: &Path, state: &SplitState) {
        self.states.push(*state);
    }

    fn on_tile_written(&mut self, current: usize, total: usize, file_name: &str) {
        self.written.push((current, total, file_name.to_string()));
    }

    fn on_tile_failed(&mut self, _current: usize, _total: usize, file_name: &str, _error: &SplitError) {
        self.failed_tiles.push(file_name.to_string());
    }

    fn on_image_complete(&mut self, report: &SplitReport) {
        self.completed.push(report.clone());
    }

    fn on_image_failed(&mut self, source: &Path, _error: &SplitError) {
        self.failed_images.push(source.to_path_buf());
    }
}
