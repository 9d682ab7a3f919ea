use std::path::{Path, PathBuf};

use crate::config::SplitConfig;
use crate::imaging::{ImageBackend, ImageCrateBackend};
use crate::split::{BatchDriver, BatchReport, SplitObserver, SplitOptions, SplitOrchestrator, SplitReport, SplitResult};

/// Main interface to the Splyt library
///
/// ```no_run
/// use std::path::Path;
/// use splyt::{NullObserver, SplitConfig, SplitOptions, Splyt};
///
/// let splyt = Splyt::new(SplitConfig::default());
/// let options = SplitOptions::from_config(splyt.config());
/// let report = splyt.split_image(Path::new("photo.png"), None, options, &mut NullObserver).unwrap();
/// println!("{} tiles in {}", report.written.len(), report.save_dir.display());
/// ```
pub struct Splyt {
    config: SplitConfig,
    backend: ImageCrateBackend,
}

impl Splyt {
    pub fn new(config: SplitConfig) -> Self {
        Splyt {
            config,
            backend: ImageCrateBackend::new(),
        }
    }

    pub fn config(&self) -> &SplitConfig {
        &self.config
    }

    /// Split one image file
    ///
    /// # Arguments
    /// * `source` - Image to split
    /// * `save_root` - Output root, defaults to the image's directory
    /// * `options` - Grid, aspect ratio, metadata switches and layout
    /// * `observer` - Receives progress events
    pub fn split_image(
        &self,
        source: &Path,
        save_root: Option<&Path>,
        options: SplitOptions,
        observer: &mut dyn SplitObserver,
    ) -> SplitResult<SplitReport> {
        let root = save_root
            .map(Path::to_path_buf)
            .unwrap_or_else(|| default_save_root(source, false));
        SplitOrchestrator::new(&self.config, options, &self.backend).split(source, &root, observer)
    }

    /// Split every image directly inside `directory`
    ///
    /// The output root defaults to the directory itself.
    pub fn split_directory(
        &self,
        directory: &Path,
        save_root: Option<&Path>,
        options: SplitOptions,
        observer: &mut dyn SplitObserver,
    ) -> SplitResult<BatchReport> {
        let root = save_root
            .map(Path::to_path_buf)
            .unwrap_or_else(|| default_save_root(directory, true));
        let orchestrator = SplitOrchestrator::new(&self.config, options, &self.backend);
        BatchDriver::new(&orchestrator).run(directory, &root, observer)
    }

    pub fn is_directory(&self, path: &Path) -> bool {
        self.backend.is_directory(path)
    }
}

/// Where output goes when no destination was given
pub fn default_save_root(source: &Path, is_directory: bool) -> PathBuf {
    if is_directory {
        return source.to_path_buf();
    }
    match source.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
