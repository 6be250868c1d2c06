//! PDF report generation and client-side delivery.
//!
//! The report is a tabular rendering of the currently filtered records
//! (date, topic, question, score, feedback). On wasm the bytes are handed
//! to the browser as a Blob download; on desktop they are written to an
//! exports directory under the platform data dir.

use api::InterviewRecord;
use printpdf::{BuiltinFont, Color, IndirectFontRef, Line, Mm, PdfDocument, Point, Rgb};

use crate::core::format;

const PAGE_W_MM: f32 = 210.0;
const PAGE_H_MM: f32 = 297.0;
const MARGIN_MM: f32 = 14.0;
const ROW_LINE_MM: f32 = 3.6;
const BODY_PT: f32 = 8.0;

// Column left edges; the last column runs to the right margin.
const COLS: [(&str, f32); 5] = [
    ("Date", 14.0),
    ("Topic", 40.0),
    ("Question", 72.0),
    ("Score", 124.0),
    ("Feedback", 140.0),
];

pub(crate) fn report_filename() -> String {
    format!("prepdeck_report_{}.pdf", format::timestamp_slug())
}

/// Render the filtered records into a PDF document.
pub(crate) fn build_report_pdf(
    username: Option<&str>,
    records: &[InterviewRecord],
) -> Result<Vec<u8>, String> {
    let (doc, page, layer) = PdfDocument::new(
        "Prepdeck performance report",
        Mm(PAGE_W_MM),
        Mm(PAGE_H_MM),
        "report",
    );
    let regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|err| err.to_string())?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|err| err.to_string())?;

    let mut layer_ref = doc.get_page(page).get_layer(layer);
    let mut cursor = PAGE_H_MM - 22.0;

    layer_ref.use_text(
        format!("Performance report: {}", username.unwrap_or("User")),
        16.0,
        Mm(MARGIN_MM),
        Mm(cursor),
        &bold,
    );
    cursor -= 8.0;
    layer_ref.use_text(
        format!("Generated on {}", format::format_date(&now_rfc3339())),
        10.0,
        Mm(MARGIN_MM),
        Mm(cursor),
        &regular,
    );
    cursor -= 6.0;
    layer_ref.use_text(
        format!("Total questions answered: {}", records.len()),
        10.0,
        Mm(MARGIN_MM),
        Mm(cursor),
        &regular,
    );
    cursor -= 10.0;

    draw_table_header(&layer_ref, &bold, cursor);
    cursor -= 6.0;

    for record in records {
        let cells = [
            wrap_text(&format::format_date(&record.submit_time), col_chars(0)),
            wrap_text(&record.genre_name, col_chars(1)),
            wrap_text(&record.question, col_chars(2)),
            vec![format!("{}/10", record.rating)],
            wrap_text(&record.feedback, col_chars(4)),
        ];
        let row_lines = cells.iter().map(Vec::len).max().unwrap_or(1);
        let row_height = row_lines as f32 * ROW_LINE_MM + 2.0;

        if cursor - row_height < MARGIN_MM {
            let (next_page, next_layer) =
                doc.add_page(Mm(PAGE_W_MM), Mm(PAGE_H_MM), "report");
            layer_ref = doc.get_page(next_page).get_layer(next_layer);
            cursor = PAGE_H_MM - MARGIN_MM;
            draw_table_header(&layer_ref, &bold, cursor);
            cursor -= 6.0;
        }

        for (col, lines) in cells.iter().enumerate() {
            let x = COLS[col].1;
            for (line_idx, line) in lines.iter().enumerate() {
                layer_ref.use_text(
                    line.clone(),
                    BODY_PT,
                    Mm(x),
                    Mm(cursor - line_idx as f32 * ROW_LINE_MM),
                    &regular,
                );
            }
        }

        cursor -= row_height;
    }

    doc.save_to_bytes().map_err(|err| err.to_string())
}

fn draw_table_header(layer: &printpdf::PdfLayerReference, bold: &IndirectFontRef, y: f32) {
    for (title, x) in COLS {
        layer.use_text(title, BODY_PT, Mm(x), Mm(y), bold);
    }

    layer.set_outline_color(Color::Rgb(Rgb::new(0.85, 0.27, 0.94, None)));
    layer.set_outline_thickness(0.6);
    layer.add_line(Line {
        points: vec![
            (Point::new(Mm(MARGIN_MM), Mm(y - 1.5)), false),
            (Point::new(Mm(PAGE_W_MM - MARGIN_MM), Mm(y - 1.5)), false),
        ],
        is_closed: false,
    });
}

/// Usable character budget for a column at the body font size.
fn col_chars(col: usize) -> usize {
    let right = if col + 1 < COLS.len() {
        COLS[col + 1].1
    } else {
        PAGE_W_MM - MARGIN_MM
    };
    let width = right - COLS[col].1 - 2.0;
    // Helvetica at 8 pt averages roughly 1.55 mm per glyph.
    (width / 1.55).max(4.0) as usize
}

/// Greedy word wrap; words longer than the budget are hard-split.
fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let mut word = word;
        while word.chars().count() > max_chars {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            let split: String = word.chars().take(max_chars).collect();
            let rest_start = split.len();
            lines.push(split);
            word = &word[rest_start..];
        }

        if current.is_empty() {
            current = word.to_string();
        } else if current.chars().count() + 1 + word.chars().count() <= max_chars {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current = word.to_string();
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

fn now_rfc3339() -> String {
    use time::{format_description::well_known::Rfc3339, OffsetDateTime};

    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_default()
}

/// Hand the report to the user. Returns the saved path on desktop, `None`
/// when the browser owns delivery.
pub(crate) async fn deliver_report(
    filename: &str,
    bytes: Vec<u8>,
) -> Result<Option<String>, String> {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

        let array = js_sys::Uint8Array::from(bytes.as_slice());
        let parts = js_sys::Array::new();
        parts.push(&array.buffer());

        let opts = BlobPropertyBag::new();
        opts.set_type("application/pdf");
        let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &opts)
            .map_err(|_| "Failed to create blob".to_string())?;
        let url = Url::create_object_url_with_blob(&blob)
            .map_err(|_| "Unable to create download".to_string())?;

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or("Document unavailable")?;
        let anchor: HtmlAnchorElement = document
            .create_element("a")
            .map_err(|_| "Unable to create anchor")?
            .dyn_into()
            .map_err(|_| "Anchor cast failed")?;
        anchor.set_href(&url);
        anchor.set_download(filename);
        anchor.style().set_property("display", "none").ok();

        document
            .body()
            .ok_or("Missing body")?
            .append_child(&anchor)
            .ok();
        anchor.click();
        anchor.remove();
        Url::revoke_object_url(&url).ok();

        Ok(None)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        use std::fs;
        use std::io::Write;

        let dir = desktop_export_dir()?;
        fs::create_dir_all(&dir).map_err(|err| err.to_string())?;
        let path = dir.join(filename);
        let mut file = fs::File::create(&path).map_err(|err| err.to_string())?;
        file.write_all(&bytes).map_err(|err| err.to_string())?;
        Ok(Some(path.to_string_lossy().to_string()))
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn desktop_export_dir() -> Result<std::path::PathBuf, String> {
    let dirs = directories::ProjectDirs::from("com", "Prepdeck", "Prepdeck")
        .ok_or("Unable to determine export directory")?;
    Ok(dirs.data_dir().join("exports"))
}
