//! Metadata payload types

use std::collections::BTreeMap;

/// Primary-IFD EXIF fields keyed by tag number
pub type ExifMap = BTreeMap<u16, exif::Field>;

/// One PNG text entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextEntry {
    pub keyword: String,
    pub text: String,
}

impl TextEntry {
    pub fn new(keyword: &str, text: &str) -> Self {
        TextEntry {
            keyword: keyword.to_string(),
            text: text.to_string(),
        }
    }
}

/// Metadata found in a source image
#[derive(Debug, Clone, Default)]
pub struct SourceMetadata {
    /// PNG tEXt/zTXt/iTXt entries in file order
    pub text_entries: Vec<TextEntry>,
    /// JPEG EXIF fields
    pub exif: ExifMap,
}

impl SourceMetadata {
    pub fn is_empty(&self) -> bool {
        self.text_entries.is_empty() && self.exif.is_empty()
    }
}

/// Payload attached to every tile of an image
#[derive(Debug, Clone)]
pub enum TileMetadata {
    /// Nothing to embed
    Empty,
    /// PNG text chunks
    TextComment(Vec<TextEntry>),
    /// JPEG EXIF fields
    ExifMap(ExifMap),
}

impl TileMetadata {
    pub fn is_empty(&self) -> bool {
        match self {
            TileMetadata::Empty => true,
            TileMetadata::TextComment(entries) => entries.is_empty(),
            TileMetadata::ExifMap(fields) => fields.is_empty(),
        }
    }

    /// Short label for log lines
    pub fn describe(&self) -> String {
        match self {
            TileMetadata::Empty => "no metadata".to_string(),
            TileMetadata::TextComment(entries) => format!("{} text chunk(s)", entries.len()),
            TileMetadata::ExifMap(fields) => format!("{} EXIF field(s)", fields.len()),
        }
    }
}
