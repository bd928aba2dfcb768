//! Capture labels
//!
//! A label identifies one capture. It is shown in the report and becomes part
//! of the report's file name, so it must be a safe single path component.

use std::fmt;

use chrono::{Local, NaiveDateTime};

use crate::image_pipeline::common::error::{ReportError, Result};

/// `yyyyMMdd_HHmmss`, the timestamp layout used for capture and report names.
pub const LABEL_TIME_FORMAT: &str = "%Y%m%d_%H%M%S";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CaptureLabel(String);

impl CaptureLabel {
    /// Accepts any non-empty label that can live inside a file name.
    pub fn new(label: impl Into<String>) -> Result<Self> {
        let label = label.into();
        let unusable = label.is_empty()
            || label == "."
            || label == ".."
            || label
                .chars()
                .any(|c| c == '/' || c == '\\' || c.is_control());
        if unusable {
            return Err(ReportError::InvalidLabel(label));
        }
        Ok(Self(label))
    }

    pub fn from_timestamp(timestamp: NaiveDateTime) -> Self {
        Self(timestamp.format(LABEL_TIME_FORMAT).to_string())
    }

    /// Label for a capture taken right now, in local time.
    pub fn now() -> Self {
        Self::from_timestamp(Local::now().naive_local())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Name under which the camera stores the captured photo.
    pub fn capture_file_name(&self) -> String {
        format!("IMG_{}.jpg", self.0)
    }
}

impl fmt::Display for CaptureLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample_time() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, 7)
            .unwrap()
            .and_hms_opt(9, 3, 41)
            .unwrap()
    }

    #[test]
    fn timestamp_label_is_zero_padded() {
        let label = CaptureLabel::from_timestamp(sample_time());
        assert_eq!(label.as_str(), "20240507_090341");
        assert_eq!(label.capture_file_name(), "IMG_20240507_090341.jpg");
    }

    #[test]
    fn now_has_timestamp_shape() {
        let label = CaptureLabel::now();
        assert_eq!(label.as_str().len(), 15);
        assert_eq!(label.as_str().as_bytes()[8], b'_');
    }

    #[test]
    fn rejects_path_like_labels() {
        for bad in ["", ".", "..", "a/b", "a\\b", "tab\there"] {
            assert!(
                matches!(CaptureLabel::new(bad), Err(ReportError::InvalidLabel(_))),
                "{bad:?} should be rejected"
            );
        }
        assert!(CaptureLabel::new("kitchen wall").is_ok());
    }
}
