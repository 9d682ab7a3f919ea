//! Single image command

use std::path::PathBuf;

use log::info;

use crate::api::Splyt;
use crate::commands::command_traits::Command;
use crate::split::{SplitOptions, SplitResult};
use crate::utils::ProgressTracker;

/// Splits one image file
pub struct SplitCommand<'a> {
    splyt: &'a Splyt,
    source: PathBuf,
    /// Output root; the image's own directory when absent
    destination: Option<PathBuf>,
    options: SplitOptions,
}

impl<'a> SplitCommand<'a> {
    pub fn new(splyt: &'a Splyt, source: PathBuf, destination: Option<PathBuf>, options: SplitOptions) -> Self {
        SplitCommand {
            splyt,
            source,
            destination,
            options,
        }
    }
}

impl<'a> Command for SplitCommand<'a> {
    fn execute(&self) -> SplitResult<()> {
        info!("Splitting single image {}", self.source.display());
        let mut progress = ProgressTracker::new(self.options.aspect);
        self.splyt
            .split_image(&self.source, self.destination.as_deref(), self.options, &mut progress)?;
        Ok(())
    }
}
