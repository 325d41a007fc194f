mod color;
mod geometry;
mod tween;

pub use color::Color;
pub use geometry::{Rect, Size};
pub use tween::{Tween, ease_out, mix_f32};
