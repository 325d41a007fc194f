use tabpager::core::{Color, Rect};

/// A pixel buffer with a clip rectangle. Every draw call is clipped.
pub(in crate::gui) struct RenderTarget<'a> {
    pub buffer: &'a mut [u32],
    pub width: usize,
    pub height: usize,
    pub clip: Rect,
}

/// Alpha-blends packed `src` over `dst`.
pub(in crate::gui) fn blend_rgb(dst: u32, src: u32, alpha: u8) -> u32 {
    if alpha == 255 {
        return src;
    }
    if alpha == 0 {
        return dst;
    }

    let a = alpha as u32;
    let inv = 255 - a;

    let dr = (dst >> 16) & 0xFF;
    let dg = (dst >> 8) & 0xFF;
    let db = dst & 0xFF;

    let sr = (src >> 16) & 0xFF;
    let sg = (src >> 8) & 0xFF;
    let sb = src & 0xFF;

    let r = (sr * a + dr * inv) / 255;
    let g = (sg * a + dg * inv) / 255;
    let b = (sb * a + db * inv) / 255;
    (r << 16) | (g << 8) | b
}

/// Coverage of the pixel centered at `(px, py)` by a rounded rectangle at
/// the origin. Antialiased over one pixel at the corners.
fn rounded_coverage(px: f32, py: f32, w: f32, h: f32, r: f32) -> f32 {
    if px < 0.0 || py < 0.0 || px >= w || py >= h {
        return 0.0;
    }
    if r <= 0.0 {
        return 1.0;
    }

    let cx = if px < r {
        r
    } else if px > w - r {
        w - r
    } else {
        return 1.0;
    };
    let cy = if py < r {
        r
    } else if py > h - r {
        h - r
    } else {
        return 1.0;
    };

    let dx = px - cx;
    let dy = py - cy;
    let dist = (dx * dx + dy * dy).sqrt();
    (r + 0.5 - dist).clamp(0.0, 1.0)
}

impl RenderTarget<'_> {
    /// Pixel bounds of `rect` after clipping, as `(x0, y0, x1, y1)`.
    fn bounds(&self, rect: Rect) -> Option<(usize, usize, usize, usize)> {
        let x0 = rect.x.max(self.clip.x).max(0.0).floor();
        let y0 = rect.y.max(self.clip.y).max(0.0).floor();
        let x1 = rect
            .max_x()
            .min(self.clip.max_x())
            .min(self.width as f32)
            .ceil();
        let y1 = rect
            .max_y()
            .min(self.clip.max_y())
            .min(self.height as f32)
            .ceil();
        if x1 <= x0 || y1 <= y0 {
            return None;
        }
        Some((x0 as usize, y0 as usize, x1 as usize, y1 as usize))
    }

    pub fn blend(&mut self, x: usize, y: usize, color: Color, alpha: u8) {
        let idx = y * self.width + x;
        if let Some(dst) = self.buffer.get_mut(idx) {
            *dst = blend_rgb(*dst, color.to_pixel(), alpha);
        }
    }

    pub fn fill(&mut self, color: Color) {
        let Some((x0, y0, x1, y1)) = self.bounds(self.clip) else {
            return;
        };
        let pixel = color.to_pixel();
        for y in y0..y1 {
            let row = y * self.width;
            self.buffer[row + x0..row + x1].fill(pixel);
        }
    }

    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        let Some((x0, y0, x1, y1)) = self.bounds(rect) else {
            return;
        };
        for y in y0..y1 {
            for x in x0..x1 {
                self.blend(x, y, color, color.a);
            }
        }
    }

    pub fn fill_rounded(&mut self, rect: Rect, radius: f32, color: Color) {
        self.rounded(rect, radius, None, color);
    }

    pub fn stroke_rounded(&mut self, rect: Rect, radius: f32, stroke: f32, color: Color) {
        self.rounded(rect, radius, Some(stroke), color);
    }

    fn rounded(&mut self, rect: Rect, radius: f32, stroke: Option<f32>, color: Color) {
        let Some((x0, y0, x1, y1)) = self.bounds(rect) else {
            return;
        };
        let r = radius.min(rect.w / 2.0).min(rect.h / 2.0).max(0.0);
        for y in y0..y1 {
            for x in x0..x1 {
                let px = x as f32 + 0.5 - rect.x;
                let py = y as f32 + 0.5 - rect.y;
                let mut coverage = rounded_coverage(px, py, rect.w, rect.h, r);
                if let Some(s) = stroke {
                    let inner = rounded_coverage(
                        px - s,
                        py - s,
                        rect.w - 2.0 * s,
                        rect.h - 2.0 * s,
                        (r - s).max(0.0),
                    );
                    coverage = (coverage - inner).max(0.0);
                }
                if coverage <= 0.0 {
                    continue;
                }
                let alpha = (color.a as f32 * coverage).round().clamp(0.0, 255.0) as u8;
                if alpha > 0 {
                    self.blend(x, y, color, alpha);
                }
            }
        }
    }
}
