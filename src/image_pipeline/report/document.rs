//! In-memory report model
//!
//! `RgbReport` holds everything a writer needs: the title, the capture label
//! and one table row per channel. Writers only lay it out, they never compute.

use std::fmt;

use crate::image_pipeline::capture::CaptureLabel;
use crate::image_pipeline::common::error::{ReportError, Result};
use crate::image_pipeline::stats::{Channel, ChannelAverages};

pub const REPORT_TITLE: &str = "Image RGB Report";

pub const TABLE_HEADER: [&str; 4] = ["Color", "Value", "Normalized (%)", "Intensity Level"];

/// Qualitative level of a channel relative to the other two
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntensityLevel {
    High,
    Normal,
}

impl IntensityLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            IntensityLevel::High => "High",
            IntensityLevel::Normal => "Normal",
        }
    }
}

impl fmt::Display for IntensityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChannelRow {
    pub channel: Channel,
    pub value: u8,
    /// Share of the channel total, in percent
    pub percentage: f64,
    pub level: IntensityLevel,
}

impl ChannelRow {
    /// Table cells in header order.
    pub fn cells(&self) -> [String; 4] {
        [
            self.channel.name().to_string(),
            self.value.to_string(),
            format!("{:.2}%", self.percentage),
            self.level.to_string(),
        ]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RgbReport {
    pub title: &'static str,
    pub label: CaptureLabel,
    pub averages: ChannelAverages,
    /// Always Red, Green, Blue
    pub rows: [ChannelRow; 3],
}

impl RgbReport {
    /// Builds the report table for `averages`.
    ///
    /// Fails with `DegenerateInputFailure` when all three averages are zero,
    /// since the percentages would be undefined.
    pub fn new(label: CaptureLabel, averages: ChannelAverages) -> Result<Self> {
        let total = averages.total();
        if total == 0 {
            return Err(ReportError::DegenerateInputFailure {
                red: averages.red,
                green: averages.green,
                blue: averages.blue,
            });
        }

        let rows = Channel::ALL.map(|channel| {
            let value = averages.get(channel);
            ChannelRow {
                channel,
                value,
                percentage: f64::from(value) / f64::from(total) * 100.0,
                level: intensity_level(&averages, channel),
            }
        });

        Ok(Self {
            title: REPORT_TITLE,
            label,
            averages,
            rows,
        })
    }

    pub fn name_line(&self) -> String {
        format!("Name: {}", self.label)
    }
}

/// `High` only when the channel strictly exceeds both others, so a tie for
/// the maximum leaves every tied channel `Normal`.
fn intensity_level(averages: &ChannelAverages, channel: Channel) -> IntensityLevel {
    let value = averages.get(channel);
    let dominant = Channel::ALL
        .iter()
        .filter(|&&other| other != channel)
        .all(|&other| value > averages.get(other));
    if dominant {
        IntensityLevel::High
    } else {
        IntensityLevel::Normal
    }
}
