pub mod config;
pub mod geometry;
pub mod naming;
pub mod metadata;
pub mod imaging;
pub mod split;
pub mod commands;
pub mod api;
pub mod utils;

pub use crate::api::Splyt;

pub use config::SplitConfig;
pub use geometry::{AspectRatio, GridRequest, GridSpec, ImageDimensions, TileRect};
pub use imaging::{ImageBackend, ImageCrateBackend};
pub use metadata::TileMetadata;
pub use split::{
    BatchReport, NullObserver, OutputLayout, SplitError, SplitObserver, SplitOptions, SplitReport, SplitResult,
};
