use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Failed to decode captured image: {0}")]
    DecodeFailure(String),

    #[error("Channel averages sum to zero (R: {red}, G: {green}, B: {blue}), cannot normalize")]
    DegenerateInputFailure { red: u8, green: u8, blue: u8 },

    #[error("Failed to write report: {0}")]
    WriteFailure(String),

    #[error("Invalid image dimensions: width={0}, height={1}")]
    InvalidDimensions(u32, u32),

    #[error("Invalid report label: {0:?}")]
    InvalidLabel(String),

    #[error("Failed to encode report: {0}")]
    EncodeError(String),

    #[error("Failed to read input file: {0}")]
    InputReadError(String),

    #[error("Capture worker is no longer running")]
    WorkerUnavailable,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ReportError>;
