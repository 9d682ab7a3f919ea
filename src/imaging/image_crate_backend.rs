//! Backend built on the `image` crate and `std::fs`

use std::fs;
use std::io::{self, Cursor};
use std::path::Path;

use image::{DynamicImage, GenericImageView, ImageFormat, ImageReader};
use log::debug;

use crate::geometry::ImageDimensions;
use crate::metadata::{embed_metadata, read_source_metadata, TileMetadata};
use crate::split::errors::{SplitError, SplitResult};
use super::backend::{ImageBackend, SourceImage};

/// Production backend
#[derive(Debug, Default, Clone, Copy)]
pub struct ImageCrateBackend;

impl ImageCrateBackend {
    pub fn new() -> Self {
        ImageCrateBackend
    }
}

fn cannot_open(path: &Path, reason: impl ToString) -> SplitError {
    SplitError::CannotOpen {
        path: path.to_path_buf(),
        reason: reason.to_string(),
    }
}

impl ImageBackend for ImageCrateBackend {
    fn open(&self, path: &Path) -> SplitResult<SourceImage> {
        let bytes = fs::read(path).map_err(|e| cannot_open(path, e))?;

        let reader = ImageReader::new(Cursor::new(bytes.as_slice()))
            .with_guessed_format()
            .map_err(|e| cannot_open(path, e))?;
        let format = reader
            .format()
            .ok_or_else(|| cannot_open(path, "unrecognized image encoding"))?;
        let image = reader.decode().map_err(|e| cannot_open(path, e))?;

        let (width, height) = image.dimensions();
        debug!("Opened {} as {:?}, {}x{}", path.display(), format, width, height);

        Ok(SourceImage {
            path: path.to_path_buf(),
            image,
            dimensions: ImageDimensions::new(width, height),
            format,
            metadata: read_source_metadata(&bytes, format),
        })
    }

    fn is_image(&self, path: &Path) -> bool {
        if !path.is_file() {
            return false;
        }
        ImageReader::open(path)
            .and_then(|reader| reader.with_guessed_format())
            .map(|reader| reader.format().is_some())
            .unwrap_or(false)
    }

    fn save(&self, tile: &DynamicImage, path: &Path, metadata: &TileMetadata, format: ImageFormat) -> SplitResult<()> {
        let save_error = |reason: String| SplitError::Save {
            path: path.to_path_buf(),
            reason,
        };

        let mut encoded = Cursor::new(Vec::new());
        tile.write_to(&mut encoded, format)
            .map_err(|e| save_error(e.to_string()))?;

        let bytes = embed_metadata(encoded.into_inner(), metadata)?;
        fs::write(path, bytes).map_err(|e| save_error(e.to_string()))?;
        debug!("Wrote {} with {}", path.display(), metadata.describe());
        Ok(())
    }

    fn list_entries(&self, directory: &Path) -> SplitResult<Vec<String>> {
        let read_dir = match fs::read_dir(directory) {
            Ok(read_dir) => read_dir,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(SplitError::IoError(e)),
        };
        let mut entries = Vec::new();
        for entry in read_dir {
            entries.push(entry?.file_name().to_string_lossy().into_owned());
        }
        entries.sort();
        Ok(entries)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_directory(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn create_dir_all(&self, path: &Path) -> SplitResult<()> {
        fs::create_dir_all(path)?;
        Ok(())
    }
}
