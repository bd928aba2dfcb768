//! Captured image input
//!
//! Decoding of captured bytes into RGB pixels and the labels that identify a capture.

mod reader;
mod image_crate_reader;
pub mod label;
pub mod types;

pub use reader::CaptureReader;
pub use image_crate_reader::ImageCrateReader;
pub use label::CaptureLabel;
pub use types::DecodedImage;
