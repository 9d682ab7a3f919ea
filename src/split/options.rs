//! Per-run split options

use crate::config::SplitConfig;
use crate::geometry::{AspectRatio, GridRequest};

/// Where tiles are written relative to the save root
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputLayout {
    /// A fresh `<stem>_split` directory per image
    PerImage,
    /// Straight into the save root
    Flat,
}

/// What to split into and which metadata to carry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitOptions {
    pub grid: GridRequest,
    pub aspect: Option<AspectRatio>,
    /// Carry the source's own metadata over
    pub copy_metadata: bool,
    /// Stamp the provenance string
    pub add_metadata: bool,
    pub layout: OutputLayout,
}

impl SplitOptions {
    /// Default grid from `config`, full metadata, one directory per image
    pub fn from_config(config: &SplitConfig) -> Self {
        SplitOptions {
            grid: GridRequest::Legacy(config.default_grid_size),
            aspect: None,
            copy_metadata: true,
            add_metadata: true,
            layout: OutputLayout::PerImage,
        }
    }

    /// Apply the `-c` / `-C` switches; `-C` implies `-c`
    pub fn with_metadata_switches(mut self, no_copy: bool, no_metadata: bool) -> Self {
        if no_metadata {
            self.copy_metadata = false;
            self.add_metadata = false;
        } else if no_copy {
            self.copy_metadata = false;
        }
        self
    }
}
