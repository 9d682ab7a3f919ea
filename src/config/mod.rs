//! Run configuration
//!
//! Holds the immutable settings shared by every image of a run: version,
//! provenance text, output directory naming and the format allow-list.

mod split_config;

pub use split_config::{SplitConfig, DEFAULT_CONFIG};
