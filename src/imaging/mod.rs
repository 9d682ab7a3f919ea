//! Imaging and filesystem collaborators
//!
//! The splitter talks to images and directories only through the
//! [`ImageBackend`] trait, so the planning and naming logic can be driven
//! by in-memory doubles in tests.

mod backend;
mod image_crate_backend;

pub use backend::{format_name, ImageBackend, SourceImage};
pub use image_crate_backend::ImageCrateBackend;
