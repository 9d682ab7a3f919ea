//! Tile planning
//!
//! Without an aspect ratio each axis is cut into equal integer bands and the
//! last band absorbs the division remainder. With an aspect ratio the
//! largest cell of that shape whose grid still fits is used, and a leftover
//! margin gets one extra column and/or row that runs to the image edge.

use log::debug;

use crate::split::errors::{SplitError, SplitResult};
use super::grid::{AspectRatio, GridSpec, ImageDimensions};
use super::tile_rect::TileRect;

/// Plan the tiles for one image in row-major order
pub fn plan_tiles(
    dimensions: ImageDimensions,
    grid: GridSpec,
    aspect: Option<AspectRatio>,
) -> SplitResult<Vec<TileRect>> {
    validate(dimensions, grid)?;

    let (cell_width, cell_height, extra_col, extra_row) = match aspect {
        None => (
            dimensions.width / grid.columns,
            dimensions.height / grid.rows,
            false,
            false,
        ),
        Some(ratio) => aspect_cells(dimensions, grid, ratio)?,
    };

    let columns = axis_bands(dimensions.width, grid.columns, cell_width, extra_col);
    let rows = axis_bands(dimensions.height, grid.rows, cell_height, extra_row);
    debug!(
        "Planned {} columns x {} rows (cell {}x{}) for {}x{} image",
        columns.len(),
        rows.len(),
        cell_width,
        cell_height,
        dimensions.width,
        dimensions.height
    );

    let mut tiles = Vec::with_capacity(columns.len() * rows.len());
    for (row, &(upper, lower)) in rows.iter().enumerate() {
        for (col, &(left, right)) in columns.iter().enumerate() {
            tiles.push(TileRect::new(col as u32, row as u32, left, upper, right, lower));
        }
    }
    Ok(tiles)
}

fn validate(dimensions: ImageDimensions, grid: GridSpec) -> SplitResult<()> {
    if dimensions.width == 0 || dimensions.height == 0 {
        return Err(SplitError::Configuration("image has no pixels".to_string()));
    }
    if grid.columns == 0 || grid.rows == 0 {
        return Err(SplitError::Configuration(format!("invalid grid {}", grid)));
    }
    if grid.columns > dimensions.width || grid.rows > dimensions.height {
        return Err(SplitError::Configuration(format!(
            "grid {} exceeds image size {}x{}",
            grid, dimensions.width, dimensions.height
        )));
    }
    Ok(())
}

// Integer form of floor(aspect * min(w / (ax * cols), h / (ay * rows)))
fn aspect_cells(
    dimensions: ImageDimensions,
    grid: GridSpec,
    ratio: AspectRatio,
) -> SplitResult<(u32, u32, bool, bool)> {
    let (w, h) = (dimensions.width as u64, dimensions.height as u64);
    let (cols, rows) = (grid.columns as u64, grid.rows as u64);
    let (ax, ay) = (ratio.x as u64, ratio.y as u64);

    // Compare w/(ax*cols) with h/(ay*rows) without division
    let width_bound = w * ay * rows <= h * ax * cols;
    let (cell_width, cell_height) = if width_bound {
        (w / cols, (ay * w) / (ax * cols))
    } else {
        ((ax * h) / (ay * rows), h / rows)
    };

    if cell_width == 0 || cell_height == 0 {
        return Err(SplitError::Configuration(format!(
            "aspect ratio {} leaves no room for a {} grid in a {}x{} image",
            ratio, grid, dimensions.width, dimensions.height
        )));
    }

    let extra_col = cols * cell_width < w;
    let extra_row = rows * cell_height < h;
    Ok((cell_width as u32, cell_height as u32, extra_col, extra_row))
}

// (start, end) pairs along one axis; the final band always ends at `extent`
fn axis_bands(extent: u32, count: u32, cell: u32, extra: bool) -> Vec<(u32, u32)> {
    let total = count + u32::from(extra);
    (0..total)
        .map(|i| {
            let start = i * cell;
            let end = if i + 1 == total { extent } else { start + cell };
            (start, end)
        })
        .collect()
}
