//! Tile rectangle in pixel coordinates
//!
//! Coordinates follow the usual image convention with (0,0) at the top-left
//! corner. `right` and `lower` are exclusive.

/// One planned tile of the output grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileRect {
    /// 0-based column in the grid
    pub col: u32,
    /// 0-based row in the grid
    pub row: u32,
    /// Leftmost pixel column (inclusive)
    pub left: u32,
    /// Topmost pixel row (inclusive)
    pub upper: u32,
    /// Pixel column just past the right edge
    pub right: u32,
    /// Pixel row just past the bottom edge
    pub lower: u32,
}

impl TileRect {
    /// Create a new tile rectangle
    pub fn new(col: u32, row: u32, left: u32, upper: u32, right: u32, lower: u32) -> Self {
        TileRect { col, row, left, upper, right, lower }
    }

    /// Width of the tile in pixels
    pub fn width(&self) -> u32 {
        self.right - self.left
    }

    /// Height of the tile in pixels
    pub fn height(&self) -> u32 {
        self.lower - self.upper
    }

    /// Number of pixels covered
    pub fn area(&self) -> u64 {
        self.width() as u64 * self.height() as u64
    }

    /// Whether two tiles share at least one pixel
    pub fn overlaps(&self, other: &TileRect) -> bool {
        self.left < other.right
            && other.left < self.right
            && self.upper < other.lower
            && other.upper < self.lower
    }
}
