//! Custom error types for image splitting

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Splitting error types
#[derive(Debug)]
pub enum SplitError {
    /// I/O error
    IoError(io::Error),
    /// Invalid grid/aspect combination or grid larger than the image
    Configuration(String),
    /// Source is missing, corrupt or not a recognizable image
    CannotOpen { path: PathBuf, reason: String },
    /// Source decodes but its format is not on the allow-list
    UnsupportedFormat { path: PathBuf, format: String },
    /// Encoder rejected the tile or the destination is unwritable
    Save { path: PathBuf, reason: String },
    /// Metadata could not be read, composed or embedded
    Metadata(String),
    /// Directory batch with zero qualifying files
    NoImagesFound(PathBuf),
    /// Batch source is not a directory
    NotADirectory(PathBuf),
    /// Bad command line
    Usage(String),
    /// Generic error with message
    GenericError(String),
}

impl fmt::Display for SplitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SplitError::IoError(e) => write!(f, "I/O error: {}", e),
            SplitError::Configuration(msg) => write!(f, "Invalid configuration: {}", msg),
            SplitError::CannotOpen { path, reason } => write!(
                f,
                "Cannot open the image '{}'. It may be corrupted or in an unsupported format ({})",
                path.display(),
                reason
            ),
            SplitError::UnsupportedFormat { path, format } => write!(
                f,
                "Image type '{}' of '{}' is not currently supported",
                format,
                path.display()
            ),
            SplitError::Save { path, reason } => {
                write!(f, "Unable to save image '{}': {}", path.display(), reason)
            }
            SplitError::Metadata(msg) => write!(f, "Metadata error: {}", msg),
            SplitError::NoImagesFound(dir) => {
                write!(f, "No image files found in directory '{}'", dir.display())
            }
            SplitError::NotADirectory(path) => write!(f, "'{}' is not a directory", path.display()),
            SplitError::Usage(msg) => write!(f, "{}", msg),
            SplitError::GenericError(msg) => write!(f, "Splyt error: {}", msg),
        }
    }
}

impl std::error::Error for SplitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SplitError::IoError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for SplitError {
    fn from(error: io::Error) -> Self {
        SplitError::IoError(error)
    }
}

impl From<String> for SplitError {
    fn from(msg: String) -> Self {
        SplitError::GenericError(msg)
    }
}

/// Result type for split operations
pub type SplitResult<T> = Result<T, SplitError>;

impl SplitError {
    /// Whether this error only concerns the current item of a batch
    ///
    /// Everything except usage problems is reported and the batch moves on.
    pub fn is_per_item(&self) -> bool {
        !matches!(self, SplitError::Usage(_))
    }
}
