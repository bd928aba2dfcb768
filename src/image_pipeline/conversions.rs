//! Pipeline conversions module
//!
//! Orchestration of the capture → statistics → report flow.

mod capture_to_report;


pub use capture_to_report::{CaptureToReportPipeline, ReportOutcome};
