use std::io::Write;
use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::report::document::RgbReport;
use crate::image_pipeline::report::types::ReportConfig;

pub trait ReportWriter {
    fn write_report(&self, report: &RgbReport, output: &mut dyn Write, config: &ReportConfig) -> Result<()>;
}
