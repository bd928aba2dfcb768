//! Image processing pipeline module
//!
//! Captured photo in, RGB report out: capture decoding, per-channel
//! statistics, report rendering, and the orchestration tying them together.

pub mod capture;
pub mod stats;
pub mod report;
pub mod conversions;
pub mod worker;
pub mod common;

pub use common::{
    ReportError,
    Result,
};

pub use capture::{
    CaptureLabel,
    CaptureReader,
    DecodedImage,
    ImageCrateReader,
};

pub use stats::{
    Channel,
    ChannelAverages,
    collect_channel_averages,
};

pub use report::{
    IntensityLevel,
    PageSize,
    ReportConfig,
    ReportConfigBuilder,
    ReportFormat,
    ReportWriter,
    RgbReport,
    StandardReportWriter,
};

pub use conversions::{
    CaptureToReportPipeline,
    ReportOutcome,
};

pub use worker::{
    CaptureJob,
    CaptureWorker,
    JobHandle,
};
