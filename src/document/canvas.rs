//! The drawing capability the composer renders onto.

use super::metrics;
use super::DocumentRenderError;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontStyle {
    Normal,
    Bold,
    Italic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
}

/// A font face at a size in points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Font {
    pub style: FontStyle,
    pub size: f32,
}

impl Font {
    pub const fn new(style: FontStyle, size: f32) -> Self {
        Self { style, size }
    }
}

/// One drawing primitive. Coordinates are millimetres from the top-left corner; text
/// `y` is the baseline of the first line.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    SetFont(FontStyle),
    SetFontSize(f32),
    Text {
        lines: Vec<String>,
        x: f32,
        y: f32,
        align: Align,
    },
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    },
}

impl fmt::Display for DrawOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrawOp::SetFont(style) => write!(f, "font {style:?}"),
            DrawOp::SetFontSize(size) => write!(f, "size {size}"),
            DrawOp::Text { lines, x, y, .. } => write!(f, "text x{x} y{y} ({} lines)", lines.len()),
            DrawOp::Rect {
                x,
                y,
                width,
                height,
            } => write!(f, "rect x{x} y{y} w{width} h{height}"),
        }
    }
}

/// A page that can be drawn on and saved.
///
/// Text measurement takes the font explicitly, so wrapping does not depend on whatever
/// font the canvas happens to have selected.
pub trait DocumentCanvas {
    fn set_font(&mut self, style: FontStyle) -> Result<(), DocumentRenderError>;

    fn set_font_size(&mut self, size: f32) -> Result<(), DocumentRenderError>;

    /// Draws `lines` top to bottom starting at baseline `y`.
    fn text(
        &mut self,
        lines: &[String],
        x: f32,
        y: f32,
        align: Align,
    ) -> Result<(), DocumentRenderError>;

    /// Wraps `text` into lines no wider than `max_width` millimetres.
    fn split_text_to_size(
        &self,
        text: &str,
        max_width: f32,
        font: Font,
    ) -> Result<Vec<String>, DocumentRenderError>;

    fn rect(
        &mut self,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    ) -> Result<(), DocumentRenderError>;

    fn save(&mut self, filename: &str) -> Result<(), DocumentRenderError>;
}

/// Canvas that keeps every operation in memory.
///
/// Used by tests and by `export --dry-run`. Wrapping uses the same Helvetica metrics as
/// [`PdfCanvas`](super::PdfCanvas), so recorded layouts match real output.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    ops: Vec<DrawOp>,
    saved_as: Option<String>,
    fail_wrapping: bool,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// A canvas whose text measurement always fails.
    pub fn failing_wrap() -> Self {
        Self {
            fail_wrapping: true,
            ..Self::default()
        }
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// The filename passed to `save`, if it was called.
    pub fn saved_as(&self) -> Option<&str> {
        self.saved_as.as_deref()
    }

    /// Every text line drawn, in drawing order.
    pub fn text_lines(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { lines, .. } => Some(lines),
                _ => None,
            })
            .flatten()
            .map(String::as_str)
            .collect()
    }
}

impl DocumentCanvas for RecordingCanvas {
    fn set_font(&mut self, style: FontStyle) -> Result<(), DocumentRenderError> {
        self.ops.push(DrawOp::SetFont(style));
        Ok(())
    }

    fn set_font_size(&mut self, size: f32) -> Result<(), DocumentRenderError> {
        self.ops.push(DrawOp::SetFontSize(size));
        Ok(())
    }

    fn text(
        &mut self,
        lines: &[String],
        x: f32,
        y: f32,
        align: Align,
    ) -> Result<(), DocumentRenderError> {
        self.ops.push(DrawOp::Text {
            lines: lines.to_vec(),
            x,
            y,
            align,
        });
        Ok(())
    }

    fn split_text_to_size(
        &self,
        text: &str,
        max_width: f32,
        font: Font,
    ) -> Result<Vec<String>, DocumentRenderError> {
        if self.fail_wrapping {
            return Err(DocumentRenderError::Wrap("measurement unavailable".into()));
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
        self.ops.push(DrawOp::Rect {
            x,
            y,
            width,
            height,
        });
        Ok(())
    }

    fn save(&mut self, filename: &str) -> Result<(), DocumentRenderError> {
        self.saved_as = Some(filename.to_string());
        Ok(())
    }
}
