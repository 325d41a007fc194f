//! Pure layout math for the tab strip.
//!
//! Every function in this module is a pure calculation: given title widths,
//! the strip size and the style it returns frames and sizes. No state, no
//! side effects.

use crate::config::{CursorKind, SegmentStyle};
use crate::core::{Rect, Size};

// ── Constants ────────────────────────────────────────────────────────

/// Separator thickness.
pub const SEPARATOR_WIDTH: f32 = 1.0;

/// Vertical space reserved below titles for the (unrendered) triangle cursor.
pub const TRIANGLE_HEIGHT: f32 = 5.0;

/// Padding added to the font point size to get a border/mask cursor height.
pub const MASK_CURSOR_PADDING: f32 = 10.0;

/// Border/mask cursor height when the font point size is unknown.
pub const DEFAULT_MASK_CURSOR_HEIGHT: f32 = 14.0;

// ── Helper types ─────────────────────────────────────────────────────

/// Result of laying out a set of titles inside a strip.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StripLayout {
    /// One frame per title, in label-surface coordinates.
    pub frames: Vec<Rect>,
    /// `frames.len() - 1` separators when enabled, otherwise empty.
    pub separators: Vec<Rect>,
    /// Titles overflow the strip and the label surface scrolls.
    pub enable_scroll: bool,
    /// Horizontal overhang of border/mask cursors past the title frame.
    pub mask_margin: f32,
    /// Scrollable width of the label surface.
    pub content_width: f32,
}

// ── Layout functions ─────────────────────────────────────────────────

/// Thickness actually used by a line cursor: the configured value, or a
/// third of the strip when the configured value doesn't fit.
pub fn line_cursor_thickness(style: &SegmentStyle, strip_height: f32) -> f32 {
    if style.cursor_height < strip_height {
        style.cursor_height
    } else {
        strip_height / 3.0
    }
}

/// Height of the title labels after reserving room for the cursor.
pub fn label_height(style: &SegmentStyle, strip_height: f32) -> f32 {
    match style.cursor_type {
        CursorKind::Line => strip_height - line_cursor_thickness(style, strip_height),
        CursorKind::Triangle => strip_height - TRIANGLE_HEIGHT,
        _ => strip_height,
    }
}

/// Width the titles need at natural size: every title plus one margin after
/// it, plus a leading margin.
pub fn natural_total_width(widths: &[f32], margin: f32) -> f32 {
    widths.iter().map(|w| w + margin).sum::<f32>() + margin
}

/// Lays out titles of the given natural `widths` inside a strip of `size`.
///
/// Titles keep their natural width (and the label surface may scroll) when
/// they don't fit or even division is disabled; otherwise the strip width is
/// divided evenly.
pub fn layout_titles(widths: &[f32], style: &SegmentStyle, size: Size) -> StripLayout {
    if widths.is_empty() {
        return StripLayout {
            content_width: size.w,
            ..StripLayout::default()
        };
    }

    let margin = style.title_margin;
    let label_h = label_height(style, size.h);
    let separator_count = if style.show_separator {
        widths.len() - 1
    } else {
        0
    };
    let separator_rect = |x: f32| {
        Rect::new(x, label_h * 0.2, SEPARATOR_WIDTH, label_h * 0.6)
    };

    let enable_scroll = natural_total_width(widths, margin) >= size.w;
    let mut frames = Vec::with_capacity(widths.len());
    let mut separators = Vec::with_capacity(separator_count);
    let mut x = 0.0;

    let mask_margin = if enable_scroll || !style.divide_when_wider_than_titles {
        x = margin;
        for (index, &w) in widths.iter().enumerate() {
            frames.push(Rect::new(x, 0.0, w, label_h));
            x += w + margin / 2.0;
            if index < separator_count {
                separators.push(separator_rect(x));
                x += SEPARATOR_WIDTH;
            }
            x += margin / 2.0;
        }
        margin / 2.0
    } else {
        let w = size.w / widths.len() as f32;
        for index in 0..widths.len() {
            frames.push(Rect::new(x, 0.0, w, label_h));
            x += w;
            if index < separator_count {
                separators.push(separator_rect(x));
                x += SEPARATOR_WIDTH;
            }
        }
        0.0
    };

    let content_width = match (enable_scroll, frames.last()) {
        (true, Some(last)) => last.max_x() + margin,
        _ => size.w,
    };

    StripLayout {
        frames,
        separators,
        enable_scroll,
        mask_margin,
        content_width,
    }
}

/// Size a strip needs to show every title at natural width without
/// scrolling, including one unit per separator slot.
pub fn fit_size(widths: &[f32], style: &SegmentStyle) -> Size {
    let w = natural_total_width(widths, style.title_margin) + widths.len() as f32;
    Size::new(w, style.segment_height)
}

/// Label-surface offset that centers `frame` in a strip of `strip_width`,
/// clamped so the surface never scrolls past its content.
pub fn centered_offset(frame: Rect, strip_width: f32, content_width: f32) -> f32 {
    let max_offset = (content_width - strip_width).max(0.0);
    (frame.center_x() - strip_width / 2.0).clamp(0.0, max_offset)
}

/// Height of border and mask cursors.
pub fn mask_cursor_height(point_size: Option<f32>) -> f32 {
    point_size
        .map(|size| size + MASK_CURSOR_PADDING)
        .unwrap_or(DEFAULT_MASK_CURSOR_HEIGHT)
}

// ── Tests ────────────────────────────────────────────────────────────
