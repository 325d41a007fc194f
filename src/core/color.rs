use serde::{Deserialize, Serialize};

fn opaque() -> u8 {
    255
}

/// 8-bit RGBA color.
///
/// Serialized as `(r: .., g: .., b: .., a: ..)`; `a` defaults to opaque.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    #[serde(default = "opaque")]
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const GRAY: Color = Color::rgb(128, 128, 128); // #808080
    pub const LIGHT_GRAY: Color = Color::rgb(170, 170, 170); // #AAAAAA
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const CYAN: Color = Color::rgb(0, 255, 255);
    pub const CLEAR: Color = Color {
        r: 0,
        g: 0,
        b: 0,
        a: 0,
    };

    pub const fn rgb(r: u8, g: u8, b: u8) -> Color {
        Color { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Color {
        Color { r, g, b, a }
    }

    /// Packs to `0x00RRGGBB`, the softbuffer pixel layout. Alpha is dropped.
    pub const fn to_pixel(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | (self.b as u32)
    }

    /// Builds an opaque color from a `0xRRGGBB` value.
    pub const fn from_pixel(pixel: u32) -> Color {
        Color::rgb(
            ((pixel >> 16) & 0xFF) as u8,
            ((pixel >> 8) & 0xFF) as u8,
            (pixel & 0xFF) as u8,
        )
    }

    /// Linear interpolation per RGBA channel.
    ///
    /// `t` is clamped to `[0, 1]`; `t == 0` returns `self` and `t == 1`
    /// returns `to` exactly.
    pub fn lerp(self, to: Color, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);
        let channel = |from: u8, to: u8| -> u8 {
            let from = from as f32;
            (from + (to as f32 - from) * t).round().clamp(0.0, 255.0) as u8
        };
        Color {
            r: channel(self.r, to.r),
            g: channel(self.g, to.g),
            b: channel(self.b, to.b),
            a: channel(self.a, to.a),
        }
    }
}
