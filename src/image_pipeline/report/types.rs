//! Report generation configuration types

use std::path::PathBuf;

/// Prefix shared by every report file name.
pub const REPORT_FILE_PREFIX: &str = "Image_RGB_Report";

/// Output document format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    /// Single-page PDF (default)
    Pdf,
    /// Plain UTF-8 text with a pipe-separated table
    Text,
}

impl ReportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ReportFormat::Pdf => "pdf",
            ReportFormat::Text => "txt",
        }
    }
}

/// PDF page size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSize {
    /// 210 x 297 mm
    A4,
    /// 215.9 x 279.4 mm
    Letter,
}

impl PageSize {
    /// Width and height in millimetres.
    pub fn dimensions_mm(self) -> (f32, f32) {
        match self {
            PageSize::A4 => (210.0, 297.0),
            PageSize::Letter => (215.9, 279.4),
        }
    }
}

/// Configuration for capture analysis and report output
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Document format to produce
    pub format: ReportFormat,
    /// Directory reports are written into; it must already exist
    pub output_dir: PathBuf,
    /// Whether to check decoded dimensions against `max_dimension`
    pub validate_dimensions: bool,
    /// Largest accepted width or height, in pixels
    pub max_dimension: Option<u32>,
    /// Page size for PDF output
    pub page_size: PageSize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            format: ReportFormat::Pdf,
            output_dir: PathBuf::from("reports"),
            validate_dimensions: true,
            max_dimension: Some(50_000),
            page_size: PageSize::A4,
        }
    }
}

impl ReportConfig {
    pub fn builder() -> ReportConfigBuilder {
        ReportConfigBuilder::default()
    }

    /// `Image_RGB_Report_<label>.<ext>` for the configured format.
    pub fn file_name(&self, label: &str) -> String {
        format!(
            "{}_{}.{}",
            REPORT_FILE_PREFIX,
            label,
            self.format.extension()
        )
    }
}

/// Builder for ReportConfig
#[derive(Default)]
pub struct ReportConfigBuilder {
    format: Option<ReportFormat>,
    output_dir: Option<PathBuf>,
    validate_dimensions: Option<bool>,
    max_dimension: Option<Option<u32>>,
    page_size: Option<PageSize>,
}

impl ReportConfigBuilder {
    pub fn format(mut self, format: ReportFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    pub fn validate_dimensions(mut self, validate: bool) -> Self {
        self.validate_dimensions = Some(validate);
        self
    }

    pub fn max_dimension(mut self, max: Option<u32>) -> Self {
        self.max_dimension = Some(max);
        self
    }

    pub fn page_size(mut self, page_size: PageSize) -> Self {
        self.page_size = Some(page_size);
        self
    }

    pub fn build(self) -> ReportConfig {
        let default = ReportConfig::default();
        ReportConfig {
            format: self.format.unwrap_or(default.format),
            output_dir: self.output_dir.unwrap_or(default.output_dir),
            validate_dimensions: self.validate_dimensions.unwrap_or(default.validate_dimensions),
            max_dimension: self.max_dimension.unwrap_or(default.max_dimension),
            page_size: self.page_size.unwrap_or(default.page_size),
        }
    }
}
