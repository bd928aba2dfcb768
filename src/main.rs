use anyhow::Context;
use rgb_report_rs::image_pipeline::{CaptureLabel, CaptureToReportPipeline, ReportConfig, ReportFormat};
use rgb_report_rs::logger;

use tracing::{error, info};

const CAPTURE_PATH: &str = "capture.jpg";
const REPORT_DIR: &str = "reports";

fn main() -> anyhow::Result<()> {
    logger::init();

    info!("Starting rgb_report...");

    std::fs::create_dir_all(REPORT_DIR)
        .with_context(|| format!("creating report directory {REPORT_DIR}"))?;

    let config = ReportConfig::builder()
        .format(ReportFormat::Pdf)
        .output_dir(REPORT_DIR)
        .build();
    let pipeline = CaptureToReportPipeline::new(config);

    info!("Capture to report pipeline initialized");
    info!("Format: {:?}", pipeline.config().format);
    info!("Output directory: {}", pipeline.config().output_dir.display());

    let label = CaptureLabel::now();
    match pipeline.process_file(CAPTURE_PATH, &label) {
        Ok(outcome) => info!(
            "PDF saved: {} (RGB Values - {})",
            outcome.path.display(),
            outcome.averages
        ),
        Err(e) => error!("Failed to generate report: {}", e),
    }

    Ok(())
}
