//! Software rendering of a page view.

mod primitives;

use std::collections::HashMap;

use tabpager::config::{CursorKind, ThemePalette};
use tabpager::core::{Color, Rect};
use tabpager::page::PageView;
use tabpager::text::FontMeasure;

use super::DemoPage;

pub(in crate::gui) use primitives::RenderTarget;

struct GlyphBitmap {
    data: Vec<u8>,
    width: usize,
    height: usize,
    left: i32,
    /// Distance from the baseline up to the bitmap's top row.
    top: i32,
    advance: f32,
}

/// Draws a [`PageView`] into a pixel buffer. Without a font, text is skipped
/// and only shapes are drawn.
pub(in crate::gui) struct Renderer {
    font: Option<FontMeasure>,
    glyph_cache: HashMap<char, GlyphBitmap>,
}

impl Renderer {
    pub fn new(font: Option<FontMeasure>) -> Self {
        Self {
            font,
            glyph_cache: HashMap::new(),
        }
    }

    pub fn draw(
        &mut self,
        target: &mut RenderTarget<'_>,
        view: &PageView<DemoPage>,
        palette: &ThemePalette,
    ) {
        let full = Rect::new(0.0, 0.0, target.width as f32, target.height as f32);
        target.clip = full;
        target.fill(palette.window_bg);

        self.draw_pages(target, view);

        target.clip = full;
        let style = view.segment().style();
        target.fill_rect(view.segment_bar(), style.segment_background_color);
        self.draw_strip(target, view);
        target.clip = full;
    }

    fn draw_pages(&mut self, target: &mut RenderTarget<'_>, view: &PageView<DemoPage>) {
        let content = view.content();
        let area = content.frame();
        target.clip = area;
        for index in content.visible_range() {
            let (Some(page), Some(frame)) = (content.pages().get(index), content.page_frame(index))
            else {
                continue;
            };
            let frame = Rect::new(area.x + frame.x, area.y + frame.y, frame.w, frame.h);
            target.fill_rect(frame, page.color);
            let caption_color = view.segment().style().normal_title_color;
            self.draw_text_centered(target, &page.caption, frame, caption_color);
        }
    }

    fn draw_strip(&mut self, target: &mut RenderTarget<'_>, view: &PageView<DemoPage>) {
        let segment = view.segment();
        let strip = segment.frame();
        let style = segment.style();
        target.clip = strip;

        let origin_x = strip.x - segment.content_offset_x();
        let shift = |r: Rect| Rect::new(origin_x + r.x, strip.y + r.y, r.w, r.h);

        let cursor = segment.cursor();
        if let Some(c) = cursor.filter(|c| c.kind == CursorKind::Mask) {
            target.fill_rounded(shift(c.frame), c.corner_radius, c.color);
        }

        for tab in segment.tabs() {
            self.draw_text_centered(target, &tab.title, shift(tab.frame), tab.color);
        }

        if style.show_separator {
            for separator in segment.separators() {
                target.fill_rect(shift(*separator), style.separator_color);
            }
        }

        match cursor {
            Some(c) if c.kind == CursorKind::Line => target.fill_rect(shift(c.frame), c.color),
            Some(c) if c.kind == CursorKind::Border => {
                let stroke = c.stroke.unwrap_or(1.0);
                target.stroke_rounded(shift(c.frame), c.corner_radius, stroke, c.color);
            }
            _ => {}
        }
    }

    fn draw_text_centered(
        &mut self,
        target: &mut RenderTarget<'_>,
        text: &str,
        frame: Rect,
        color: Color,
    ) {
        let Some(font) = &self.font else {
            return;
        };
        let (ascent, line_height, size) = (font.ascent(), font.line_height(), font.size());

        let width: f32 = text.chars().map(|ch| self.glyph(ch, size).advance).sum();
        let mut pen_x = frame.center_x() - width / 2.0;
        let baseline = frame.y + (frame.h - line_height) / 2.0 + ascent;

        for ch in text.chars() {
            let glyph = self.glyph(ch, size);
            let gx0 = pen_x.round() as i32 + glyph.left;
            let gy0 = baseline.round() as i32 - glyph.top;
            for gy in 0..glyph.height {
                for gx in 0..glyph.width {
                    let alpha = glyph.data[gy * glyph.width + gx];
                    if alpha == 0 {
                        continue;
                    }
                    let sx = gx0 + gx as i32;
                    let sy = gy0 + gy as i32;
                    if sx < 0 || sy < 0 || !target.clip.contains(sx as f32, sy as f32) {
                        continue;
                    }
                    let (sx, sy) = (sx as usize, sy as usize);
                    if sx < target.width && sy < target.height {
                        target.blend(sx, sy, color, alpha);
                    }
                }
            }
            pen_x += glyph.advance;
        }
    }

    fn glyph(&mut self, ch: char, size: f32) -> &GlyphBitmap {
        let font = self.font.as_ref().map(FontMeasure::font);
        self.glyph_cache.entry(ch).or_insert_with(|| match font {
            Some(font) => {
                let (metrics, data) = font.rasterize(ch, size);
                GlyphBitmap {
                    data,
                    width: metrics.width,
                    height: metrics.height,
                    left: metrics.xmin,
                    top: metrics.height as i32 + metrics.ymin,
                    advance: metrics.advance_width,
                }
            }
            None => GlyphBitmap {
                data: Vec::new(),
                width: 0,
                height: 0,
                left: 0,
                top: 0,
                advance: 0.0,
            },
        })
    }
}
