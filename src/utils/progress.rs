use std::path::Path;

use indicatif::{ProgressBar, ProgressStyle};

use crate::geometry::AspectRatio;
use crate::split::{BatchReport, SplitError, SplitObserver, SplitReport};

/// Terminal progress for split runs
///
/// One bar per image, advanced by tile events; indicatif derives elapsed
/// time and ETA from them.
pub struct ProgressTracker {
    bar: Option<ProgressBar>,
    aspect: Option<AspectRatio>,
}

impl ProgressTracker {
    pub fn new(aspect: Option<AspectRatio>) -> Self {
        ProgressTracker { bar: None, aspect }
    }

    fn start_bar(total: u64, description: &str) -> ProgressBar {
        let bar = ProgressBar::new(total);
        let style = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta}) {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-");
        bar.set_style(style);
        bar.set_message(description.to_string());
        bar
    }

    fn clear(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
    }
}

impl SplitObserver for ProgressTracker {
    fn on_image_start(&mut self, source: &Path, total_tiles: usize) {
        self.clear();
        let name = source
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        self.bar = Some(Self::start_bar(total_tiles as u64, &name));
    }

    fn on_tile_written(&mut self, current: usize, _total: usize, file_name: &str) {
        if let Some(bar) = &self.bar {
            bar.set_position(current as u64);
            bar.set_message(file_name.to_string());
        }
    }

    fn on_tile_failed(&mut self, current: usize, _total: usize, file_name: &str, error: &SplitError) {
        if let Some(bar) = &self.bar {
            bar.set_position(current as u64);
            bar.println(format!("Unable to save {}: {}", file_name, error));
        }
    }

    fn on_image_complete(&mut self, report: &SplitReport) {
        self.clear();
        println!("{}", completion_line(report, self.aspect));
    }

    // The failure itself is already logged
    fn on_image_failed(&mut self, _source: &Path, _error: &SplitError) {
        self.clear();
    }
}

/// "<name> split into <N> sections [in [x:y]] and saved in '<dir>'"
pub fn completion_line(report: &SplitReport, aspect: Option<AspectRatio>) -> String {
    let aspect_info = aspect
        .map(|a| format!(" in [{}]", a))
        .unwrap_or_default();
    let mut line = format!(
        "{} split into {} sections{} and saved in '{}'",
        report.source_name,
        report.written.len(),
        aspect_info,
        report.save_dir.display()
    );
    if !report.failures.is_empty() {
        line.push_str(&format!(" ({} failed)", report.failures.len()));
    }
    line
}

pub fn batch_summary(report: &BatchReport) -> String {
    let mut summary = format!(
        "Processed {} of {} image(s), {} tile(s) written",
        report.processed.len(),
        report.total_images(),
        report.tiles_written()
    );
    for failure in &report.failed {
        summary.push_str(&format!("\n  skipped {}: {}", failure.source.display(), failure.reason));
    }
    summary
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::split::{ImageFailure, TileFailure};

    fn report(written: usize) -> SplitReport {
        SplitReport {
            source: PathBuf::from("in/cat.png"),
            source_name: "cat.png".to_string(),
            save_dir: PathBuf::from("in/cat_split"),
            iteration_suffix: 0,
            total_tiles: 4,
            written: (0..written).map(|i| PathBuf::from(format!("t{}", i))).collect(),
            failures: Vec::new(),
        }
    }

    #[test]
    fn test_completion_line() {
        assert_eq!(
            completion_line(&report(4), None),
            "cat.png split into 4 sections and saved in 'in/cat_split'"
        );
        let aspect = AspectRatio::new(16, 9).ok();
        assert_eq!(
            completion_line(&report(4), aspect),
            "cat.png split into 4 sections in [16:9] and saved in 'in/cat_split'"
        );
    }

    #[test]
    fn test_completion_line_counts_failures() {
        let mut partial = report(3);
        partial.failures.push(TileFailure {
            file_name: "cat_b2.png".to_string(),
            reason: "disk full".to_string(),
        });
        assert!(completion_line(&partial, None).ends_with("(1 failed)"));
    }

    #[test]
    fn test_batch_summary_lists_skipped_images() {
        let batch = BatchReport {
            processed: vec![report(4), report(4)],
            failed: vec![ImageFailure {
                source: PathBuf::from("in/bad.png"),
                reason: "cannot open".to_string(),
            }],
        };
        assert_eq!(
            batch_summary(&batch),
            "Processed 2 of 3 image(s), 8 tile(s) written\n  skipped in/bad.png: cannot open"
        );
    }
}
