//! Grid and aspect-ratio types

use std::fmt;
use crate::split::errors::{SplitError, SplitResult};

/// Pixel size of a source image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageDimensions {
    pub width: u32,
    pub height: u32,
}

impl ImageDimensions {
    pub fn new(width: u32, height: u32) -> Self {
        ImageDimensions { width, height }
    }

    /// Landscape or square images count as landscape
    pub fn is_landscape(&self) -> bool {
        self.width >= self.height
    }
}

/// Number of columns and rows to split into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSpec {
    pub columns: u32,
    pub rows: u32,
}

impl GridSpec {
    /// Create a grid, rejecting zero columns or rows
    pub fn new(columns: u32, rows: u32) -> SplitResult<Self> {
        if columns == 0 || rows == 0 {
            return Err(SplitError::Configuration(format!(
                "grid must have at least one column and one row, got {}x{}",
                columns, rows
            )));
        }
        Ok(GridSpec { columns, rows })
    }
}

impl fmt::Display for GridSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.columns, self.rows)
    }
}

/// Target width:height ratio for each tile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AspectRatio {
    pub x: u32,
    pub y: u32,
}

impl AspectRatio {
    pub fn new(x: u32, y: u32) -> SplitResult<Self> {
        if x == 0 || y == 0 {
            return Err(SplitError::Configuration(format!(
                "aspect ratio terms must be positive, got {}:{}",
                x, y
            )));
        }
        Ok(AspectRatio { x, y })
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.x, self.y)
    }
}

/// What the user asked for, before the image orientation is known
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridRequest {
    /// Explicit columns x rows
    Explicit(GridSpec),
    /// Single-number grid size resolved through the legacy lookup table
    Legacy(u32),
}

impl GridRequest {
    /// Resolve the request against a concrete image
    pub fn resolve(&self, dimensions: ImageDimensions) -> SplitResult<GridSpec> {
        match *self {
            GridRequest::Explicit(grid) => Ok(grid),
            GridRequest::Legacy(size) => legacy_grid(size, dimensions.is_landscape()).ok_or_else(|| {
                SplitError::Configuration(format!("unsupported grid size {}", size))
            }),
        }
    }
}

/// Fixed lookup for legacy grid sizes, keyed by (size, is_landscape)
///
/// Sizes 2 and 3 are single strips across the longer axis.
pub fn legacy_grid(size: u32, is_landscape: bool) -> Option<GridSpec> {
    let (columns, rows) = match (size, is_landscape) {
        (2, true) => (2, 1),
        (2, false) => (1, 2),
        (3, true) => (3, 1),
        (3, false) => (1, 3),
        (4, _) => (2, 2),
        (6, true) => (3, 2),
        (6, false) => (2, 3),
        (8, true) => (4, 2),
        (8, false) => (2, 4),
        (9, _) => (3, 3),
        (12, true) => (4, 3),
        (12, false) => (3, 4),
        _ => return None,
    };
    Some(GridSpec { columns, rows })
}
