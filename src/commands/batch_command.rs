//! Directory batch command

use std::path::PathBuf;

use log::{info, warn};

use crate::api::Splyt;
use crate::commands::command_traits::Command;
use crate::split::{SplitOptions, SplitResult};
use crate::utils::{batch_summary, ProgressTracker};

/// Splits every image directly inside a directory
pub struct BatchCommand<'a> {
    splyt: &'a Splyt,
    directory: PathBuf,
    /// Output root; the directory itself when absent
    destination: Option<PathBuf>,
    options: SplitOptions,
}

impl<'a> BatchCommand<'a> {
    pub fn new(splyt: &'a Splyt, directory: PathBuf, destination: Option<PathBuf>, options: SplitOptions) -> Self {
        BatchCommand {
            splyt,
            directory,
            destination,
            options,
        }
    }
}

impl<'a> Command for BatchCommand<'a> {
    fn execute(&self) -> SplitResult<()> {
        info!("Splitting every image in {}", self.directory.display());
        let mut progress = ProgressTracker::new(self.options.aspect);
        let report = self.splyt.split_directory(
            &self.directory,
            self.destination.as_deref(),
            self.options,
            &mut progress,
        )?;

        if !report.failed.is_empty() {
            warn!("{} of {} image(s) could not be split", report.failed.len(), report.total_images());
        }
        println!("{}", batch_summary(&report));
        Ok(())
    }
}
