//! Tile filename construction

use std::path::Path;

use crate::geometry::TileRect;
use crate::split::errors::{SplitError, SplitResult};

/// Columns are lettered `a..z`, so a plan may not be wider than this
pub const MAX_COLUMNS: u32 = 26;

/// Map a 0-based column index to its letter
pub fn column_letter(col: u32) -> Option<char> {
    if col < MAX_COLUMNS {
        Some((b'a' + col as u8) as char)
    } else {
        None
    }
}

/// `<stem>_<column letter><1-based row>`
pub fn tile_base_name(stem: &str, col: u32, row: u32) -> SplitResult<String> {
    let letter = column_letter(col).ok_or_else(|| {
        SplitError::Configuration(format!(
            "column {} cannot be named, at most {} columns are supported",
            col + 1,
            MAX_COLUMNS
        ))
    })?;
    Ok(format!("{}_{}{}", stem, letter, row + 1))
}

/// Final filename; suffix 0 means no `(N)` marker
///
/// `extension` includes its leading dot, or is empty.
pub fn tile_file_name(base: &str, suffix: u32, extension: &str) -> String {
    if suffix > 0 {
        format!("{}({}){}", base, suffix, extension)
    } else {
        format!("{}{}", base, extension)
    }
}

/// Names for every tile of one image, sharing one iteration suffix
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamingPlan {
    /// Base names in the same order as the planned tiles
    pub base_names: Vec<String>,
    /// Iteration suffix applied to every tile of this run
    pub suffix: u32,
    /// Source extension with its leading dot, or empty
    pub extension: String,
}

impl NamingPlan {
    /// Derive base names for the planned tiles of `source`; suffix starts at 0
    pub fn for_tiles(source: &Path, tiles: &[TileRect]) -> SplitResult<Self> {
        let (stem, extension) = split_file_name(source);
        let base_names = tiles
            .iter()
            .map(|t| tile_base_name(&stem, t.col, t.row))
            .collect::<SplitResult<Vec<String>>>()?;
        Ok(NamingPlan { base_names, suffix: 0, extension })
    }

    /// Filename of the tile at `index`
    pub fn file_name(&self, index: usize) -> Option<String> {
        self.base_names
            .get(index)
            .map(|base| tile_file_name(base, self.suffix, &self.extension))
    }

    /// All filenames in tile order
    pub fn file_names(&self) -> Vec<String> {
        self.base_names
            .iter()
            .map(|base| tile_file_name(base, self.suffix, &self.extension))
            .collect()
    }
}

/// Stem and dotted extension of a source path
pub(crate) fn split_file_name(source: &Path) -> (String, String) {
    let stem = source
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let extension = source
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default();
    (stem, extension)
}
