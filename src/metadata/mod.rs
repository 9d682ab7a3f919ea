//! Tile metadata
//!
//! Reads what a source image carries, decides what each tile should carry,
//! and embeds that payload into encoded tile bytes. PNG sources use text
//! chunks, JPEG sources use EXIF; other formats carry nothing.

mod types;
mod composer;
pub mod png_text;
pub mod jpeg_exif;
#[cfg(test)]
mod tests;

pub use types::{ExifMap, SourceMetadata, TextEntry, TileMetadata};
pub use composer::{compose_metadata, embed_metadata, read_source_metadata};
