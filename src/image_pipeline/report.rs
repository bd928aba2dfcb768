//! Report generation module
//!
//! Turns channel averages into a titled, tabular document (PDF or text) and
//! stores it durably.

mod writer;
mod standard_report_writer;
mod pdf;
mod text;
pub mod document;
pub mod storage;
pub mod types;

pub use writer::ReportWriter;
pub use standard_report_writer::StandardReportWriter;
pub use document::{ChannelRow, IntensityLevel, RgbReport, REPORT_TITLE, TABLE_HEADER};
pub use storage::persist_report;
pub use types::{PageSize, ReportConfig, ReportConfigBuilder, ReportFormat, REPORT_FILE_PREFIX};
