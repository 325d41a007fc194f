//! [`TextMeasure`] implementations.

use fontdue::{Font, FontSettings};
use unicode_width::UnicodeWidthStr;

use crate::host::TextMeasure;

/// Measures text with real glyph advances from a fontdue font.
#[derive(Clone)]
pub struct FontMeasure {
    font: Font,
    size: f32,
}

impl FontMeasure {
    pub fn new(font: Font, size: f32) -> Self {
        Self {
            font,
            size: size.max(1.0),
        }
    }

    /// Parses `data` as a TrueType/OpenType font.
    pub fn from_bytes(data: &[u8], size: f32) -> Option<Self> {
        match Font::from_bytes(data, FontSettings::default()) {
            Ok(font) => Some(Self::new(font, size)),
            Err(err) => {
                log::warn!("failed to parse title font: {err}");
                None
            }
        }
    }

    pub fn font(&self) -> &Font {
        &self.font
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    /// Distance from the top of the line box to the baseline.
    pub fn ascent(&self) -> f32 {
        self.font
            .horizontal_line_metrics(self.size)
            .map(|m| m.ascent)
            .unwrap_or(self.size * 0.8)
    }

    /// Height of one line box.
    pub fn line_height(&self) -> f32 {
        self.font
            .horizontal_line_metrics(self.size)
            .map(|m| m.ascent - m.descent)
            .unwrap_or(self.size)
    }
}

impl TextMeasure for FontMeasure {
    fn text_width(&self, text: &str) -> f32 {
        text.chars()
            .map(|ch| self.font.metrics(ch, self.size).advance_width)
            .sum()
    }

    fn point_size(&self) -> Option<f32> {
        Some(self.size)
    }
}

/// Measures text as display columns times a fixed cell width.
///
/// Used when no font file is available, and in tests where widths must be
/// predictable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellMeasure {
    pub cell_width: f32,
    pub point_size: Option<f32>,
}

impl CellMeasure {
    pub fn new(cell_width: f32, point_size: Option<f32>) -> Self {
        Self {
            cell_width,
            point_size,
        }
    }
}

impl TextMeasure for CellMeasure {
    fn text_width(&self, text: &str) -> f32 {
        UnicodeWidthStr::width(text) as f32 * self.cell_width
    }

    fn point_size(&self) -> Option<f32> {
        self.point_size
    }
}
