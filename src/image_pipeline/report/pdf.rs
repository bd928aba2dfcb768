//! Single-page PDF rendering of a report.
//!
//! Layout: centred bold title, a name line, then a bordered four-column
//! table at 80% of the text width, centred on the page.

use std::io::Write;

use printpdf::{BuiltinFont, IndirectFontRef, Line, Mm, PdfDocument, PdfLayerReference, Point};
use tracing::debug;

use crate::image_pipeline::common::error::{ReportError, Result};
use crate::image_pipeline::report::document::{RgbReport, TABLE_HEADER};
use crate::image_pipeline::report::types::PageSize;

/// 36pt page margin.
const MARGIN_MM: f32 = 12.7;
const TITLE_FONT_SIZE: f32 = 18.0;
const NAME_FONT_SIZE: f32 = 14.0;
const CELL_FONT_SIZE: f32 = 12.0;
const TABLE_WIDTH_RATIO: f32 = 0.8;
const ROW_HEIGHT_MM: f32 = 8.0;
const CELL_PADDING_MM: f32 = 1.5;
const BORDER_THICKNESS: f32 = 0.5;
/// Average Helvetica glyph advance as a fraction of the font size.
const HELVETICA_AVG_ADVANCE: f32 = 0.5;
/// Smallest size a line is shrunk to before it gets truncated.
const MIN_FONT_SIZE: f32 = 8.0;
const ELLIPSIS: &str = "...";

fn pt_to_mm(pt: f32) -> f32 {
    pt * 25.4 / 72.0
}

fn approx_text_width_mm(text: &str, font_size: f32) -> f32 {
    pt_to_mm(text.chars().count() as f32 * font_size * HELVETICA_AVG_ADVANCE)
}

/// Fits `text` into `max_width_mm`, first by shrinking the font down to
/// `MIN_FONT_SIZE`, then by cutting the tail and appending an ellipsis.
fn fit_line(text: &str, font_size: f32, max_width_mm: f32) -> (String, f32) {
    let width = approx_text_width_mm(text, font_size);
    if width <= max_width_mm {
        return (text.to_string(), font_size);
    }

    let scaled = font_size * max_width_mm / width;
    if scaled >= MIN_FONT_SIZE {
        return (text.to_string(), scaled);
    }

    let char_width = approx_text_width_mm("x", MIN_FONT_SIZE);
    let keep = ((max_width_mm / char_width) as usize).saturating_sub(ELLIPSIS.len());
    let truncated = text.chars().take(keep).chain(ELLIPSIS.chars()).collect();
    (truncated, MIN_FONT_SIZE)
}

fn encode_error(e: impl std::fmt::Display) -> ReportError {
    ReportError::EncodeError(e.to_string())
}

pub(crate) fn render_pdf(report: &RgbReport, output: &mut dyn Write, page_size: PageSize) -> Result<()> {
    let (page_width, page_height) = page_size.dimensions_mm();
    debug!("Laying out PDF report on {:?} page", page_size);

    let (doc, page, layer) = PdfDocument::new(report.title, Mm(page_width), Mm(page_height), "Report");
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(encode_error)?;
    let regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(encode_error)?;
    let canvas = doc.get_page(page).get_layer(layer);

    let mut baseline = page_height - MARGIN_MM - pt_to_mm(TITLE_FONT_SIZE);
    let title_x = (page_width - approx_text_width_mm(report.title, TITLE_FONT_SIZE)) / 2.0;
    canvas.use_text(report.title, TITLE_FONT_SIZE, Mm(title_x.max(MARGIN_MM)), Mm(baseline), &bold);

    baseline -= pt_to_mm(TITLE_FONT_SIZE) * 2.0;
    let (name_line, name_size) = fit_line(&report.name_line(), NAME_FONT_SIZE, page_width - 2.0 * MARGIN_MM);
    canvas.use_text(name_line, name_size, Mm(MARGIN_MM), Mm(baseline), &regular);

    let table_top = baseline - pt_to_mm(NAME_FONT_SIZE) * 2.0;
    let table_width = (page_width - 2.0 * MARGIN_MM) * TABLE_WIDTH_RATIO;
    let table_left = (page_width - table_width) / 2.0;
    let rows: Vec<[String; 4]> = std::iter::once(TABLE_HEADER.map(String::from))
        .chain(report.rows.iter().map(|row| row.cells()))
        .collect();

    draw_table(&canvas, &regular, &rows, table_left, table_top, table_width);

    let bytes = doc.save_to_bytes().map_err(encode_error)?;
    debug!("PDF report encoded, {} bytes", bytes.len());
    output.write_all(&bytes)?;
    Ok(())
}

fn draw_table(
    canvas: &PdfLayerReference,
    font: &IndirectFontRef,
    rows: &[[String; 4]],
    left: f32,
    top: f32,
    width: f32,
) {
    let column_width = width / 4.0;
    let bottom = top - ROW_HEIGHT_MM * rows.len() as f32;

    canvas.set_outline_thickness(BORDER_THICKNESS);
    for i in 0..=rows.len() {
        let y = top - ROW_HEIGHT_MM * i as f32;
        canvas.add_line(segment((left, y), (left + width, y)));
    }
    for j in 0..=4 {
        let x = left + column_width * j as f32;
        canvas.add_line(segment((x, top), (x, bottom)));
    }

    for (i, row) in rows.iter().enumerate() {
        let y = top - ROW_HEIGHT_MM * (i + 1) as f32 + (ROW_HEIGHT_MM - pt_to_mm(CELL_FONT_SIZE)) / 2.0 + 1.0;
        for (j, cell) in row.iter().enumerate() {
            let x = left + column_width * j as f32 + CELL_PADDING_MM;
            canvas.use_text(cell.as_str(), CELL_FONT_SIZE, Mm(x), Mm(y), font);
        }
    }
}

fn segment(from: (f32, f32), to: (f32, f32)) -> Line {
    Line {
        points: vec![
            (Point::new(Mm(from.0), Mm(from.1)), false),
            (Point::new(Mm(to.0), Mm(to.1)), false),
        ],
        is_closed: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image_pipeline::capture::CaptureLabel;
    use crate::image_pipeline::stats::ChannelAverages;

    fn report_for(label: &str, averages: ChannelAverages) -> RgbReport {
        RgbReport::new(CaptureLabel::new(label).unwrap(), averages).unwrap()
    }

    fn render(report: &RgbReport, page_size: PageSize) -> Vec<u8> {
        let mut out = Vec::new();
        render_pdf(report, &mut out, page_size).unwrap();
        out
    }

    /// One entry per text object on the first page, in drawing order.
    fn page_text(pdf: &[u8]) -> Vec<String> {
        let doc = lopdf::Document::load_mem(pdf).unwrap();
        doc.extract_text(&[1])
            .unwrap()
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect()
    }

    fn media_box(pdf: &[u8]) -> Vec<f32> {
        let doc = lopdf::Document::load_mem(pdf).unwrap();
        let page_id = doc.get_pages()[&1];
        doc.get_dictionary(page_id)
            .unwrap()
            .get(b"MediaBox")
            .unwrap()
            .as_array()
            .unwrap()
            .iter()
            .map(|value| value.as_float().unwrap())
            .collect()
    }

    #[test]
    fn produces_pdf_bytes() {
        let report = report_for("20240507_090341", ChannelAverages::new(10, 20, 30));

        let out = render(&report, PageSize::A4);

        assert!(out.starts_with(b"%PDF-"));
        assert_eq!(
            page_text(&out),
            vec![
                "Image RGB Report",
                "Name: 20240507_090341",
                "Color", "Value", "Normalized (%)", "Intensity Level",
                "Red", "10", "16.67%", "Normal",
                "Green", "20", "33.33%", "Normal",
                "Blue", "30", "50.00%", "High",
            ]
        );
    }

    #[test]
    fn page_size_sets_media_box() {
        let report = report_for("20240507_090341", ChannelAverages::new(10, 20, 30));

        let a4 = media_box(&render(&report, PageSize::A4));
        let letter = media_box(&render(&report, PageSize::Letter));

        // A4 is 595 x 842 pt, Letter 612 x 792 pt.
        assert!((a4[2] - 595.3).abs() < 1.0 && (a4[3] - 841.9).abs() < 1.0, "{a4:?}");
        assert!((letter[2] - 612.0).abs() < 1.0 && (letter[3] - 792.0).abs() < 1.0, "{letter:?}");
    }

    #[test]
    fn letter_page_holds_the_same_table() {
        let report = report_for("20240507_090341", ChannelAverages::new(100, 100, 50));

        let a4 = page_text(&render(&report, PageSize::A4));
        let letter = page_text(&render(&report, PageSize::Letter));

        assert_eq!(a4, letter);
        assert!(!letter.iter().any(|cell| cell == "High"));
    }

    #[test]
    fn repeated_renders_share_content() {
        let report = report_for("20240507_090341", ChannelAverages::new(17, 99, 203));

        assert_eq!(
            page_text(&render(&report, PageSize::A4)),
            page_text(&render(&report, PageSize::A4))
        );
    }

    #[test]
    fn title_is_centred_on_a4() {
        let width = approx_text_width_mm("Image RGB Report", TITLE_FONT_SIZE);
        let x = (210.0 - width) / 2.0;
        assert!(x > MARGIN_MM && x + width < 210.0 - MARGIN_MM);
    }

    #[test]
    fn fit_line_keeps_short_text() {
        let (line, size) = fit_line("Name: 20240507_090341", NAME_FONT_SIZE, 184.6);
        assert_eq!(line, "Name: 20240507_090341");
        assert_eq!(size, NAME_FONT_SIZE);
    }

    #[test]
    fn fit_line_shrinks_then_truncates() {
        let max_width = 210.0 - 2.0 * MARGIN_MM;

        let medium = format!("Name: {}", "m".repeat(94));
        let (line, size) = fit_line(&medium, NAME_FONT_SIZE, max_width);
        assert_eq!(line, medium);
        assert!(size < NAME_FONT_SIZE && size >= MIN_FONT_SIZE);
        assert!(approx_text_width_mm(&line, size) <= max_width + 1e-3);

        let long = format!("Name: {}", "l".repeat(400));
        let (line, size) = fit_line(&long, NAME_FONT_SIZE, max_width);
        assert_eq!(size, MIN_FONT_SIZE);
        assert!(line.starts_with("Name: lll") && line.ends_with(ELLIPSIS));
        assert!(approx_text_width_mm(&line, size) <= max_width);
    }

    #[test]
    fn long_label_is_truncated_on_the_page() {
        let label = "x".repeat(300);
        let report = report_for(&label, ChannelAverages::new(10, 20, 30));

        let text = page_text(&render(&report, PageSize::A4));

        assert!(text[1].starts_with("Name: xxx"));
        assert!(text[1].ends_with("..."));
        assert!(text[1].len() < report.name_line().len());
        assert_eq!(text[2], "Color");
    }
}
