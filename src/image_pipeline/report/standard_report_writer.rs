use std::io::Write;
use tracing::debug;
use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::report::document::RgbReport;
use crate::image_pipeline::report::pdf::render_pdf;
use crate::image_pipeline::report::text::render_text;
use crate::image_pipeline::report::types::{ReportConfig, ReportFormat};
use crate::image_pipeline::report::writer::ReportWriter;

pub struct StandardReportWriter;

impl ReportWriter for StandardReportWriter {
    fn write_report(&self, report: &RgbReport, output: &mut dyn Write, config: &ReportConfig) -> Result<()> {
        debug!("Encoding {:?} report for {}", config.format, report.label);

        match config.format {
            ReportFormat::Pdf => render_pdf(report, output, config.page_size)?,
            ReportFormat::Text => render_text(report, output)?,
        }

        debug!("Report encoding complete");
        Ok(())
    }
}
