//! Terminal-facing helpers: logging and progress output

pub mod logger;
mod progress;

pub use logger::Logger;
pub use progress::{batch_summary, completion_line, ProgressTracker};
