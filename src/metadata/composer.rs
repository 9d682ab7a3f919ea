//! Metadata composition and embedding

use image::ImageFormat;
use log::{debug, warn};

use crate::split::errors::SplitResult;
use super::jpeg_exif;
use super::png_text;
use super::types::{SourceMetadata, TextEntry, TileMetadata};

/// PNG keyword that receives the provenance text
pub const COMMENT_KEYWORD: &str = "Comment";

/// Extract the metadata a source of `format` carries
///
/// Unreadable metadata is logged and treated as absent; it never stops the
/// image from being split.
pub fn read_source_metadata(bytes: &[u8], format: ImageFormat) -> SourceMetadata {
    let mut metadata = SourceMetadata::default();
    match format {
        ImageFormat::Png => match png_text::read_text_chunks(bytes) {
            Ok(entries) => metadata.text_entries = entries,
            Err(e) => warn!("Ignoring unreadable PNG text chunks: {}", e),
        },
        ImageFormat::Jpeg => {
            metadata.exif = jpeg_exif::read_exif_fields(bytes);
        }
        _ => {}
    }
    debug!(
        "Source metadata: {} text entries, {} EXIF fields",
        metadata.text_entries.len(),
        metadata.exif.len()
    );
    metadata
}

/// Decide the payload for tiles of an image saved as `format`
pub fn compose_metadata(
    source: &SourceMetadata,
    format: ImageFormat,
    copy_metadata: bool,
    add_metadata: bool,
    provenance: &str,
) -> TileMetadata {
    let composed = match format {
        ImageFormat::Png => {
            let mut entries = if copy_metadata {
                source.text_entries.clone()
            } else {
                Vec::new()
            };
            if add_metadata {
                append_comment(&mut entries, provenance);
            }
            TileMetadata::TextComment(entries)
        }
        ImageFormat::Jpeg => {
            let mut fields = if copy_metadata {
                source.exif.clone()
            } else {
                Default::default()
            };
            if add_metadata {
                let comment = jpeg_exif::user_comment_field(provenance);
                fields.insert(comment.tag.number(), comment);
            }
            TileMetadata::ExifMap(fields)
        }
        _ => TileMetadata::Empty,
    };

    if composed.is_empty() {
        TileMetadata::Empty
    } else {
        composed
    }
}

fn append_comment(entries: &mut Vec<TextEntry>, provenance: &str) {
    match entries.iter_mut().find(|e| e.keyword == COMMENT_KEYWORD) {
        Some(entry) if !entry.text.is_empty() => {
            entry.text.push('\n');
            entry.text.push_str(provenance);
        }
        Some(entry) => entry.text = provenance.to_string(),
        None => entries.push(TextEntry::new(COMMENT_KEYWORD, provenance)),
    }
}

/// Embed `metadata` into an already encoded tile
pub fn embed_metadata(encoded: Vec<u8>, metadata: &TileMetadata) -> SplitResult<Vec<u8>> {
    match metadata {
        TileMetadata::Empty => Ok(encoded),
        TileMetadata::TextComment(entries) => png_text::embed_text_chunks(&encoded, entries),
        TileMetadata::ExifMap(fields) => jpeg_exif::embed_exif(&encoded, fields),
    }
}
