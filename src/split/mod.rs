//! Splitting pipeline
//!
//! The orchestrator drives one image from opening to the last written tile;
//! the batch driver feeds it every image of a directory.

pub mod errors;
mod options;
mod observer;
mod report;
mod orchestrator;
mod batch;
#[cfg(test)]
mod tests;

pub use errors::{SplitError, SplitResult};
pub use options::{OutputLayout, SplitOptions};
pub use observer::{NullObserver, SplitObserver};
pub use report::{BatchReport, ImageFailure, SplitReport, TileFailure};
pub use orchestrator::{AbortReason, SplitOrchestrator, SplitState};
pub use batch::BatchDriver;
