//! Common utilities module
//!
//! Error type and result alias shared by the capture, statistics and report stages.

pub mod error;

pub use error::{ReportError, Result};
