//! Grid geometry
//!
//! Turns image dimensions, a grid request and an optional aspect ratio into
//! a gap-free, overlap-free set of pixel rectangles. Nothing here touches
//! the filesystem.

mod grid;
mod tile_rect;
mod planner;

pub use grid::{legacy_grid, AspectRatio, GridRequest, GridSpec, ImageDimensions};
pub use tile_rect::TileRect;
pub use planner::plan_tiles;
