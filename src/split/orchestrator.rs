//! Per-image split driver
//!
//! Walks one image through
//! `Opening -> FormatCheck -> PlanningGeometry -> PlanningNames -> Emitting -> Completed`.
//! Any step before emission can abort the image; a failed tile only marks
//! that tile as failed.

use std::fmt;
use std::path::{Path, PathBuf};

use image::{DynamicImage, ImageFormat};
use log::{debug, error, info, warn};

use crate::config::SplitConfig;
use crate::geometry::{plan_tiles, TileRect};
use crate::imaging::{ImageBackend, SourceImage};
use crate::metadata::{compose_metadata, TileMetadata};
use crate::naming::{allocate_directory_suffix_with, allocate_iteration_suffix, save_directory_base, NamingPlan};

use super::errors::{SplitError, SplitResult};
use super::observer::SplitObserver;
use super::options::{OutputLayout, SplitOptions};
use super::report::{SplitReport, TileFailure};

/// Why an image was abandoned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbortReason {
    CannotOpen,
    UnsupportedFormat,
    Configuration,
    Io,
}

impl AbortReason {
    fn from_error(error: &SplitError) -> Self {
        match error {
            SplitError::CannotOpen { .. } => AbortReason::CannotOpen,
            SplitError::UnsupportedFormat { .. } => AbortReason::UnsupportedFormat,
            SplitError::Configuration(_) => AbortReason::Configuration,
            _ => AbortReason::Io,
        }
    }
}

/// Where the orchestrator is with the current image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitState {
    Opening,
    FormatCheck,
    PlanningGeometry,
    PlanningNames,
    /// Tile `index` (1-based) of `total`
    Emitting { index: usize, total: usize },
    Completed,
    Aborted(AbortReason),
}

impl fmt::Display for SplitState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SplitState::Opening => write!(f, "Opening"),
            SplitState::FormatCheck => write!(f, "FormatCheck"),
            SplitState::PlanningGeometry => write!(f, "PlanningGeometry"),
            SplitState::PlanningNames => write!(f, "PlanningNames"),
            SplitState::Emitting { index, total } => write!(f, "Emitting({}/{})", index, total),
            SplitState::Completed => write!(f, "Completed"),
            SplitState::Aborted(reason) => write!(f, "Aborted({:?})", reason),
        }
    }
}

/// Splits single images with a fixed configuration and option set
pub struct SplitOrchestrator<'a, B: ImageBackend> {
    config: &'a SplitConfig,
    options: SplitOptions,
    backend: &'a B,
}

/// Everything decided before the first tile is written
struct TilePlan {
    source: SourceImage,
    tiles: Vec<TileRect>,
    naming: NamingPlan,
    save_dir: PathBuf,
    metadata: TileMetadata,
}

impl<'a, B: ImageBackend> SplitOrchestrator<'a, B> {
    pub fn new(config: &'a SplitConfig, options: SplitOptions, backend: &'a B) -> Self {
        SplitOrchestrator { config, options, backend }
    }

    pub fn backend(&self) -> &'a B {
        self.backend
    }

    /// Split `source` into tiles under `save_root`
    ///
    /// Returns an error only when the image is abandoned; tiles that fail to
    /// save are listed in the report instead.
    pub fn split(&self, source: &Path, save_root: &Path, observer: &mut dyn SplitObserver) -> SplitResult<SplitReport> {
        info!("Splitting {}", source.display());

        let plan = match self.prepare(source, save_root, observer) {
            Ok(plan) => plan,
            Err(e) => {
                self.transition(source, SplitState::Aborted(AbortReason::from_error(&e)), observer);
                error!("{}", e);
                observer.on_image_failed(source, &e);
                return Err(e);
            }
        };

        let report = self.emit(plan, observer);
        self.transition(source, SplitState::Completed, observer);
        info!(
            "{} split into {} sections and saved in '{}'",
            report.source_name,
            report.written.len(),
            report.save_dir.display()
        );
        observer.on_image_complete(&report);
        Ok(report)
    }

    fn transition(&self, source: &Path, state: SplitState, observer: &mut dyn SplitObserver) {
        debug!("{}: {}", source.display(), state);
        observer.on_state(source, &state);
    }

    fn prepare(&self, source: &Path, save_root: &Path, observer: &mut dyn SplitObserver) -> SplitResult<TilePlan> {
        self.transition(source, SplitState::Opening, observer);
        let opened = self.backend.open(source)?;

        self.transition(source, SplitState::FormatCheck, observer);
        let format_name = opened.format_name();
        if !self.config.supports_format(&format_name) {
            return Err(SplitError::UnsupportedFormat {
                path: source.to_path_buf(),
                format: format_name,
            });
        }

        self.transition(source, SplitState::PlanningGeometry, observer);
        let grid = self.options.grid.resolve(opened.dimensions)?;
        let tiles = plan_tiles(opened.dimensions, grid, self.options.aspect)?;
        let mut naming = NamingPlan::for_tiles(source, &tiles)?;
        debug!("{} tiles planned from grid {}", tiles.len(), grid);

        let save_dir = self.resolve_save_dir(source, save_root);
        self.backend.create_dir_all(&save_dir)?;

        self.transition(source, SplitState::PlanningNames, observer);
        let entries = self.backend.list_entries(&save_dir)?;
        naming.suffix = allocate_iteration_suffix(&naming.base_names, &naming.extension, &entries)?;

        let metadata = compose_metadata(
            &opened.metadata,
            opened.format,
            self.options.copy_metadata,
            self.options.add_metadata,
            &self.config.provenance(),
        );
        debug!("Tiles will carry {}", metadata.describe());

        Ok(TilePlan {
            source: opened,
            tiles,
            naming,
            save_dir,
            metadata,
        })
    }

    fn resolve_save_dir(&self, source: &Path, save_root: &Path) -> PathBuf {
        match self.options.layout {
            OutputLayout::Flat => save_root.to_path_buf(),
            OutputLayout::PerImage => {
                let base = save_directory_base(
                    save_root,
                    source,
                    self.config.dir_stem_chars,
                    &self.config.split_dir_suffix,
                );
                allocate_directory_suffix_with(&base, |p| self.backend.exists(p))
            }
        }
    }

    fn emit(&self, plan: TilePlan, observer: &mut dyn SplitObserver) -> SplitReport {
        let source_path = plan.source.path.clone();
        let total = plan.tiles.len();
        observer.on_image_start(&source_path, total);

        let mut report = SplitReport {
            source: source_path.clone(),
            source_name: source_path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default(),
            save_dir: plan.save_dir.clone(),
            iteration_suffix: plan.naming.suffix,
            total_tiles: total,
            written: Vec::with_capacity(total),
            failures: Vec::new(),
        };

        let file_names = plan.naming.file_names();
        for (i, (rect, file_name)) in plan.tiles.iter().zip(file_names.iter()).enumerate() {
            let current = i + 1;
            self.transition(&source_path, SplitState::Emitting { index: current, total }, observer);

            let tile = self.backend.crop(&plan.source, rect);
            let path = plan.save_dir.join(file_name);
            match self.save_tile(&tile, &path, &plan.metadata, plan.source.format) {
                Ok(()) => {
                    report.written.push(path);
                    observer.on_tile_written(current, total, file_name);
                }
                Err(e) => {
                    error!("Unable to save {}: {}", file_name, e);
                    observer.on_tile_failed(current, total, file_name, &e);
                    report.failures.push(TileFailure {
                        file_name: file_name.clone(),
                        reason: e.to_string(),
                    });
                }
            }
        }
        report
    }

    // Retry without metadata before giving a tile up
    fn save_tile(&self, tile: &DynamicImage, path: &Path, metadata: &TileMetadata, format: ImageFormat) -> SplitResult<()> {
        match self.backend.save(tile, path, metadata, format) {
            Ok(()) => Ok(()),
            Err(e) if !metadata.is_empty() => {
                warn!("Saving {} with metadata failed ({}), retrying without", path.display(), e);
                self.backend.save(tile, path, &TileMetadata::Empty, format)
            }
            Err(e) => Err(e),
        }
    }
}
