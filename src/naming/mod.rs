//! Output naming
//!
//! Tile filenames are derived from the grid position, and a single
//! iteration suffix shared by the whole run keeps re-runs from overwriting
//! earlier output. Output directories get their own `(N)` disambiguation.

mod tile_names;
mod allocator;
#[cfg(test)]
mod tests;

pub use tile_names::{column_letter, tile_base_name, tile_file_name, NamingPlan, MAX_COLUMNS};
pub use allocator::{allocate_directory_suffix_with, allocate_iteration_suffix, save_directory_base};
