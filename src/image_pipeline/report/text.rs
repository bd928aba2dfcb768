//! Plain text rendering of a report.

use std::io::Write;

use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::report::document::{RgbReport, TABLE_HEADER};

const CELL_SEPARATOR: &str = " | ";

pub(crate) fn render_text(report: &RgbReport, output: &mut dyn Write) -> Result<()> {
    writeln!(output, "{}", report.title)?;
    writeln!(output)?;
    writeln!(output, "{}", report.name_line())?;
    writeln!(output)?;
    writeln!(output, "{}", TABLE_HEADER.join(CELL_SEPARATOR))?;
    for row in &report.rows {
        writeln!(output, "{}", row.cells().join(CELL_SEPARATOR))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image_pipeline::capture::CaptureLabel;
    use crate::image_pipeline::stats::ChannelAverages;

    #[test]
    fn renders_title_label_and_table() {
        let report = RgbReport::new(
            CaptureLabel::new("20240507_090341").unwrap(),
            ChannelAverages::new(10, 20, 30),
        )
        .unwrap();

        let mut out = Vec::new();
        render_text(&report, &mut out).unwrap();

        let expected = "\
Image RGB Report

Name: 20240507_090341

Color | Value | Normalized (%) | Intensity Level
Red | 10 | 16.67% | Normal
Green | 20 | 33.33% | Normal
Blue | 30 | 50.00% | High
";
        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }
}
