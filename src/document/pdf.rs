//! A minimal single-page PDF writer.
//!
//! Output is PDF 1.4 with the base-14 Helvetica family (no embedded fonts) and
//! WinAnsi-encoded strings. Nothing time- or randomness-dependent is written, so the
//! same order always produces the same bytes.

use super::canvas::{Align, DocumentCanvas, Font, FontStyle};
use super::metrics::{self, PT_PER_MM};
use super::DocumentRenderError;
use std::fmt::Write as _;
use std::path::PathBuf;
use tracing::debug;

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
/// Multi-line text advances by this factor of the font size.
const LINE_HEIGHT_FACTOR: f32 = 1.15;
const STROKE_WIDTH_PT: f32 = 0.57;

/// Canvas that renders into a PDF file under `out_dir`.
#[derive(Debug)]
pub struct PdfCanvas {
    out_dir: PathBuf,
    font: Font,
    content: String,
}

impl PdfCanvas {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
            font: Font::new(FontStyle::Normal, 16.0),
            content: format!("{STROKE_WIDTH_PT:.2} w\n"),
        }
    }

    /// The complete PDF file for what has been drawn so far.
    pub fn to_bytes(&self) -> Vec<u8> {
        let page_w = PAGE_WIDTH_MM * PT_PER_MM;
        let page_h = PAGE_HEIGHT_MM * PT_PER_MM;
        let objects = [
            "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
            "<< /Type /Pages /Kids [3 0 R] /Count 1 >>".to_string(),
            format!(
                "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {page_w:.2} {page_h:.2}] \
                 /Resources << /Font << /F1 4 0 R /F2 5 0 R /F3 6 0 R >> >> /Contents 7 0 R >>"
            ),
            base_font("Helvetica"),
            base_font("Helvetica-Bold"),
            base_font("Helvetica-Oblique"),
            format!(
                "<< /Length {} >>\nstream\n{}endstream",
                self.content.len(),
                self.content
            ),
        ];

        let mut out = String::from("%PDF-1.4\n");
        let mut offsets = Vec::with_capacity(objects.len());
        for (index, body) in objects.iter().enumerate() {
            offsets.push(out.len());
            let _ = write!(out, "{} 0 obj\n{body}\nendobj\n", index + 1);
        }
        let xref_at = out.len();
        let _ = write!(out, "xref\n0 {}\n0000000000 65535 f \n", objects.len() + 1);
        for offset in offsets {
            let _ = write!(out, "{offset:010} 00000 n \n");
        }
        let _ = write!(
            out,
            "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{xref_at}\n%%EOF\n",
            objects.len() + 1
        );
        out.into_bytes()
    }

    fn font_resource(&self) -> &'static str {
        match self.font.style {
            FontStyle::Normal => "F1",
            FontStyle::Bold => "F2",
            FontStyle::Italic => "F3",
        }
    }
}

fn base_font(name: &str) -> String {
    format!("<< /Type /Font /Subtype /Type1 /BaseFont /{name} /Encoding /WinAnsiEncoding >>")
}

/// Encodes `text` as a PDF literal string body. Characters map to their WinAnsi byte
/// (written as octal escapes above ASCII); anything else becomes `?`.
fn pdf_string(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match (c, metrics::winansi_byte(c)) {
            ('(' | ')' | '\\', _) => {
                out.push('\\');
                out.push(c);
            }
            (_, Some(byte)) if byte.is_ascii() => out.push(c),
            (_, Some(byte)) => {
                let _ = write!(out, "\\{byte:03o}");
            }
            (_, None) => out.push('?'),
        }
    }
    out
}

impl DocumentCanvas for PdfCanvas {
    fn set_font(&mut self, style: FontStyle) -> Result<(), DocumentRenderError> {
        self.font.style = style;
        Ok(())
    }

    fn set_font_size(&mut self, size: f32) -> Result<(), DocumentRenderError> {
        if !(size.is_finite() && size > 0.0) {
            return Err(DocumentRenderError::Draw(format!("invalid font size {size}")));
        }
        self.font.size = size;
        Ok(())
    }

    fn text(
        &mut self,
        lines: &[String],
        x: f32,
        y: f32,
        align: Align,
    ) -> Result<(), DocumentRenderError> {
        let leading_mm = self.font.size * LINE_HEIGHT_FACTOR / PT_PER_MM;
        for (index, line) in lines.iter().enumerate() {
            let left = match align {
                Align::Left => x,
                Align::Center => x - metrics::text_width(line, self.font.size) / 2.0,
            };
            let baseline = y + index as f32 * leading_mm;
            let _ = writeln!(
                self.content,
                "BT /{} {:.2} Tf {:.2} {:.2} Td ({}) Tj ET",
                self.font_resource(),
                self.font.size,
                left * PT_PER_MM,
                (PAGE_HEIGHT_MM - baseline) * PT_PER_MM,
                pdf_string(line)
            );
        }
        Ok(())
    }

    fn split_text_to_size(
        &self,
        text: &str,
        max_width: f32,
        font: Font,
    ) -> Result<Vec<String>, DocumentRenderError> {
        if !(max_width.is_finite() && max_width > 0.0) {
            return Err(DocumentRenderError::Wrap(format!("invalid width {max_width}")));
        }
        Ok(metrics::wrap_text(text, max_width, font.size))
    }

    fn rect(
        &mut self,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    ) -> Result<(), DocumentRenderError> {
        let _ = writeln!(
            self.content,
            "{:.2} {:.2} {:.2} {:.2} re S",
            x * PT_PER_MM,
            (PAGE_HEIGHT_MM - y - height) * PT_PER_MM,
            width * PT_PER_MM,
            height * PT_PER_MM
        );
        Ok(())
    }

    /// Writes next to the target first and renames, so a failed export leaves no file.
    fn save(&mut self, filename: &str) -> Result<(), DocumentRenderError> {
        let path = self.out_dir.join(filename);
        let tmp = self.out_dir.join(format!(".{filename}.part"));
        let io_err = |source| DocumentRenderError::Io {
            path: path.clone(),
            source,
        };
        std::fs::create_dir_all(&self.out_dir).map_err(io_err)?;

        let written = std::fs::write(&tmp, self.to_bytes())
            .and_then(|()| std::fs::rename(&tmp, &path));
        if let Err(source) = written {
            let _ = std::fs::remove_file(&tmp);
            return Err(io_err(source));
        }
        debug!(path = %path.display(), "PDF written");
        Ok(())
    }
}
