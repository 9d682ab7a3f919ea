//! Backend trait definitions

use std::path::{Path, PathBuf};

use image::{DynamicImage, ImageFormat};

use crate::geometry::{ImageDimensions, TileRect};
use crate::metadata::{SourceMetadata, TileMetadata};
use crate::split::errors::SplitResult;

/// A decoded source image and what it was declared as
pub struct SourceImage {
    /// Where the image was read from
    pub path: PathBuf,
    /// Decoded pixels
    pub image: DynamicImage,
    /// Pixel size
    pub dimensions: ImageDimensions,
    /// Declared encoding
    pub format: ImageFormat,
    /// Metadata carried by the source file
    pub metadata: SourceMetadata,
}

impl SourceImage {
    /// Upper-case name of the declared format
    pub fn format_name(&self) -> String {
        format_name(self.format)
    }
}

/// Upper-case format name as used by the format allow-list
pub fn format_name(format: ImageFormat) -> String {
    match format {
        ImageFormat::Png => "PNG".to_string(),
        ImageFormat::Jpeg => "JPEG".to_string(),
        ImageFormat::Gif => "GIF".to_string(),
        ImageFormat::WebP => "WEBP".to_string(),
        ImageFormat::Tiff => "TIFF".to_string(),
        ImageFormat::Bmp => "BMP".to_string(),
        ImageFormat::Ico => "ICO".to_string(),
        other => format!("{:?}", other).to_uppercase(),
    }
}

/// Image and filesystem operations the splitter depends on
pub trait ImageBackend {
    /// Read and decode a source image
    ///
    /// Missing, unreadable or undecodable files are `SplitError::CannotOpen`.
    fn open(&self, path: &Path) -> SplitResult<SourceImage>;

    /// Cheap check whether a path looks like an image file
    fn is_image(&self, path: &Path) -> bool;

    /// Cut one tile out of the source
    fn crop(&self, source: &SourceImage, rect: &TileRect) -> DynamicImage {
        source.image.crop_imm(rect.left, rect.upper, rect.width(), rect.height())
    }

    /// Encode a tile in `format`, embed `metadata` and write it to `path`
    fn save(&self, tile: &DynamicImage, path: &Path, metadata: &TileMetadata, format: ImageFormat) -> SplitResult<()>;

    /// Names of the entries in a directory; a missing directory is empty
    fn list_entries(&self, directory: &Path) -> SplitResult<Vec<String>>;

    /// Whether anything exists at `path`
    fn exists(&self, path: &Path) -> bool;

    /// Whether `path` is a directory
    fn is_directory(&self, path: &Path) -> bool;

    /// Create a directory and its parents
    fn create_dir_all(&self, path: &Path) -> SplitResult<()>;
}
