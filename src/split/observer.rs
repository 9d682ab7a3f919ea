//! Progress reporting interface

use std::path::Path;

use super::errors::SplitError;
use super::orchestrator::SplitState;
use super::report::SplitReport;

/// Receives events while images are split
///
/// Every method has a no-op default. Timing (elapsed, ETA) is left to the
/// implementor, which sees one event per finished tile.
pub trait SplitObserver {
    /// The orchestrator moved to a new state for `source`
    fn on_state(&mut self, _source: &Path, _state: &SplitState) {}

    /// Planning finished and `total_tiles` tiles are about to be written
    fn on_image_start(&mut self, _source: &Path, _total_tiles: usize) {}

    /// Tile `current` of `total` was written as `file_name`
    fn on_tile_written(&mut self, _current: usize, _total: usize, _file_name: &str) {}

    /// Tile `current` of `total` could not be written, even without metadata
    fn on_tile_failed(&mut self, _current: usize, _total: usize, _file_name: &str, _error: &SplitError) {}

    /// All tiles of an image were attempted
    fn on_image_complete(&mut self, _report: &SplitReport) {}

    /// The image was abandoned before any tile was written
    fn on_image_failed(&mut self, _source: &Path, _error: &SplitError) {}
}

/// Observer that ignores everything
#[derive(Debug, Default)]
pub struct NullObserver;

impl SplitObserver for NullObserver {}
