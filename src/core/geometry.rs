//! Plain geometry in logical units.
//!
//! Everything the engine lays out is expressed in `f32` logical units with
//! the origin at the top-left of the owning component.

/// A rectangle defined by origin + size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const ZERO: Rect = Rect {
        x: 0.0,
        y: 0.0,
        w: 0.0,
        h: 0.0,
    };

    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Rect {
        Rect { x, y, w, h }
    }

    pub fn max_x(&self) -> f32 {
        self.x + self.w
    }

    pub fn max_y(&self) -> f32 {
        self.y + self.h
    }

    pub fn center_x(&self) -> f32 {
        self.x + self.w / 2.0
    }

    pub fn size(&self) -> Size {
        Size {
            w: self.w,
            h: self.h,
        }
    }

    /// Returns `true` when `(px, py)` falls inside this rectangle.
    /// The right and bottom edges are exclusive.
    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px < self.max_x() && py >= self.y && py < self.max_y()
    }

    /// Interpolates origin and size towards `to`.
    ///
    /// The endpoints are returned verbatim so that `t == 1` reproduces `to`
    /// bit for bit.
    pub fn lerp(self, to: Rect, t: f32) -> Rect {
        if t <= 0.0 {
            return self;
        }
        if t >= 1.0 {
            return to;
        }
        let mix = |a: f32, b: f32| a + (b - a) * t;
        Rect {
            x: mix(self.x, to.x),
            y: mix(self.y, to.y),
            w: mix(self.w, to.w),
            h: mix(self.h, to.h),
        }
    }
}

/// A width/height pair.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub w: f32,
    pub h: f32,
}

impl Size {
    pub const fn new(w: f32, h: f32) -> Size {
        Size { w, h }
    }
}
