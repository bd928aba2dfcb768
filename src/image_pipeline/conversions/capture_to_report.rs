use std::path::{Path, PathBuf};

use tracing::{info, instrument, warn};

use crate::image_pipeline::{
    capture::{CaptureLabel, CaptureReader, DecodedImage, ImageCrateReader},
    common::error::{ReportError, Result},
    report::{persist_report, ReportConfig, ReportWriter, RgbReport, StandardReportWriter},
    stats::{collect_channel_averages, ChannelAverages},
};

/// Result of one full capture-to-report run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportOutcome {
    pub label: CaptureLabel,
    pub averages: ChannelAverages,
    /// Where the report was stored
    pub path: PathBuf,
}

pub struct CaptureToReportPipeline<R: CaptureReader, W: ReportWriter> {
    reader: R,
    writer: W,
    config: ReportConfig,
}

impl CaptureToReportPipeline<ImageCrateReader, StandardReportWriter> {
    pub fn new(config: ReportConfig) -> Self {
        Self {
            reader: ImageCrateReader,
            writer: StandardReportWriter,
            config,
        }
    }
}

impl<R: CaptureReader, W: ReportWriter> CaptureToReportPipeline<R, W> {
    pub fn with_custom(reader: R, writer: W, config: ReportConfig) -> Self {
        Self {
            reader,
            writer,
            config,
        }
    }

    fn validate_dimensions(&self, width: u32, height: u32) -> Result<()> {
        if !self.config.validate_dimensions {
            return Ok(());
        }

        if let Some(max) = self.config.max_dimension {
            if width > max || height > max {
                warn!(
                    "Image dimensions {}x{} exceed maximum {}",
                    width, height, max
                );
                return Err(ReportError::InvalidDimensions(width, height));
            }
        }

        Ok(())
    }

    /// Decodes captured bytes and averages their channels.
    #[instrument(skip(self, input_data), fields(input_size = input_data.len()))]
    pub fn analyze(&self, input_data: &[u8]) -> Result<ChannelAverages> {
        let image = {
            let _span = tracing::info_span!("decode_capture").entered();
            self.reader.read_capture(input_data)?
        };

        self.analyze_image(&image)
    }

    /// Averages the channels of an already decoded capture.
    pub fn analyze_image(&self, image: &DecodedImage) -> Result<ChannelAverages> {
        {
            let _span = tracing::info_span!("validate_dimensions",
                width = image.width,
                height = image.height
            ).entered();
            self.validate_dimensions(image.width, image.height)?;
        }

        let averages = {
            let _span = tracing::info_span!("collect_averages").entered();
            collect_channel_averages(image)?
        };

        info!("RGB Values - {}", averages);
        Ok(averages)
    }

    /// Renders the report for `averages` and stores it in the output directory.
    ///
    /// Nothing is written unless rendering succeeds completely.
    #[instrument(skip(self, label, averages), fields(label = %label))]
    pub fn generate_report(&self, label: &CaptureLabel, averages: ChannelAverages) -> Result<PathBuf> {
        let report = RgbReport::new(label.clone(), averages)?;

        let mut document = Vec::new();
        {
            let _span = tracing::info_span!("render_report", format = ?self.config.format).entered();
            self.writer.write_report(&report, &mut document, &self.config)?;
        }

        let path = {
            let _span = tracing::info_span!("persist_report").entered();
            persist_report(
                &self.config.output_dir,
                &self.config.file_name(label.as_str()),
                &document,
            )?
        };

        info!(path = %path.display(), "Report saved");
        Ok(path)
    }

    /// Full flow: decode, average, report.
    #[instrument(skip(self, input_data, label), fields(input_size = input_data.len(), label = %label))]
    pub fn process(&self, input_data: &[u8], label: &CaptureLabel) -> Result<ReportOutcome> {
        info!("Starting capture to report");

        let averages = self.analyze(input_data)?;
        let path = self.generate_report(label, averages)?;

        Ok(ReportOutcome {
            label: label.clone(),
            averages,
            path,
        })
    }

    #[instrument(skip(self, input_path, label), fields(label = %label))]
    pub fn process_file<P: AsRef<Path>>(&self, input_path: P, label: &CaptureLabel) -> Result<ReportOutcome> {
        let input_path = input_path.as_ref();

        info!(input = %input_path.display(), "Processing capture file");

        let input_data = {
            let _span = tracing::info_span!("read_input_file").entered();
            std::fs::read(input_path).map_err(|e| {
                ReportError::InputReadError(format!("{}: {}", input_path.display(), e))
            })?
        };

        self.process(&input_data, label)
    }

    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: ReportConfig) {
        self.config = config;
    }
}
