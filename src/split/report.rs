//! Outcome summaries

use std::path::PathBuf;

/// A tile that could not be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileFailure {
    pub file_name: String,
    pub reason: String,
}

/// Outcome of splitting one image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitReport {
    pub source: PathBuf,
    /// Source file name with extension, for messages
    pub source_name: String,
    /// Directory the tiles were written to
    pub save_dir: PathBuf,
    /// Iteration suffix shared by every tile of this run
    pub iteration_suffix: u32,
    /// Number of planned tiles
    pub total_tiles: usize,
    /// Paths of the tiles actually written, in row-major order
    pub written: Vec<PathBuf>,
    pub failures: Vec<TileFailure>,
}

impl SplitReport {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty() && self.written.len() == self.total_tiles
    }
}

/// An image of a batch that was skipped
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFailure {
    pub source: PathBuf,
    pub reason: String,
}

/// Outcome of a directory batch
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub processed: Vec<SplitReport>,
    pub failed: Vec<ImageFailure>,
}

impl BatchReport {
    pub fn total_images(&self) -> usize {
        self.processed.len() + self.failed.len()
    }

    pub fn tiles_written(&self) -> usize {
        self.processed.iter().map(|r| r.written.len()).sum()
    }
}
