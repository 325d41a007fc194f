use crate::config::{CursorKind, SegmentStyle};
use crate::core::{Color, Rect};

use super::layout::{line_cursor_thickness, mask_cursor_height};

/// Stroke width of the border cursor outline.
pub const BORDER_CURSOR_STROKE: f32 = 1.0;

/// The selection indicator. Only line, border and mask kinds produce one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cursor {
    pub kind: CursorKind,
    /// Frame in label-surface coordinates.
    pub frame: Rect,
    pub corner_radius: f32,
    pub color: Color,
    /// Outline width; `None` for filled cursors.
    pub stroke: Option<f32>,
    /// Overhang past the tracked title on each side.
    margin: f32,
}

impl Cursor {
    /// Builds the cursor for a title at `tab`, or `None` when the style has
    /// no drawable cursor.
    pub fn for_tab(
        style: &SegmentStyle,
        tab: Rect,
        strip_height: f32,
        mask_margin: f32,
        point_size: Option<f32>,
    ) -> Option<Cursor> {
        match style.cursor_type {
            CursorKind::None | CursorKind::Triangle => None,
            CursorKind::Line => {
                let h = line_cursor_thickness(style, strip_height);
                Some(Cursor {
                    kind: CursorKind::Line,
                    frame: Rect::new(tab.x, strip_height - h, tab.w, h),
                    corner_radius: 0.0,
                    color: style.cursor_color,
                    stroke: None,
                    margin: 0.0,
                })
            }
            kind @ (CursorKind::Border | CursorKind::Mask) => {
                let h = mask_cursor_height(point_size);
                let corner_radius = if style.cursor_corner_radius < 0.0 {
                    h / 2.0
                } else {
                    style.cursor_corner_radius
                };
                let frame = Rect::new(
                    tab.x - mask_margin,
                    (strip_height - h) / 2.0,
                    tab.w + 2.0 * mask_margin,
                    h,
                );
                Some(Cursor {
                    kind,
                    frame,
                    corner_radius,
                    color: style.cursor_color,
                    stroke: (kind == CursorKind::Border).then_some(BORDER_CURSOR_STROKE),
                    margin: mask_margin,
                })
            }
        }
    }

    /// Frame the cursor takes when tracking a title spanning `x..x + width`.
    /// Vertical placement is kept.
    pub fn frame_tracking(&self, x: f32, width: f32) -> Rect {
        Rect::new(
            x - self.margin,
            self.frame.y,
            width + 2.0 * self.margin,
            self.frame.h,
        )
    }

    /// Moves the cursor to track a title spanning `x..x + width`.
    pub fn track(&mut self, x: f32, width: f32) {
        self.frame = self.frame_tracking(x, width);
    }
}
