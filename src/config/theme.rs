use crate::core::Color;

use super::{SegmentStyle, ThemeChoice};

/// Window and page colors for the demo host, resolved from a [`ThemeChoice`].
pub struct ThemePalette {
    pub window_bg: Color,
    pub segment_bg: Color,
    pub normal_title: Color,
    pub selected_title: Color,
    pub separator: Color,
    pub cursor: Color,
    /// Page fills, cycled by page index.
    pub pages: [Color; 6],
}

impl ThemeChoice {
    /// Resolves this theme choice into a full color palette.
    pub fn resolve(&self) -> ThemePalette {
        match self {
            ThemeChoice::Light => ThemePalette::light(),
            ThemeChoice::Dark => ThemePalette::dark(),
        }
    }
}

impl ThemePalette {
    fn light() -> Self {
        Self {
            window_bg: Color::WHITE,
            segment_bg: Color::WHITE,
            normal_title: Color::GRAY,
            selected_title: Color::RED,
            separator: Color::LIGHT_GRAY,
            cursor: Color::CYAN,
            pages: [
                Color::from_pixel(0xFDECEC),
                Color::from_pixel(0xEAF4FD),
                Color::from_pixel(0xEDF8EA),
                Color::from_pixel(0xFDF6E3),
                Color::from_pixel(0xF3EAFD),
                Color::from_pixel(0xE8F7F5),
            ],
        }
    }

    fn dark() -> Self {
        Self {
            window_bg: Color::from_pixel(0x282C34),
            segment_bg: Color::from_pixel(0x1E2127),
            normal_title: Color::from_pixel(0x6C7480),
            selected_title: Color::from_pixel(0xD2DBEB),
            separator: Color::from_pixel(0x2E333C),
            cursor: Color::from_pixel(0xB4BEFE),
            pages: [
                Color::from_pixel(0x3B2F36),
                Color::from_pixel(0x2B3442),
                Color::from_pixel(0x2E3A2E),
                Color::from_pixel(0x3A3627),
                Color::from_pixel(0x342B40),
                Color::from_pixel(0x263A38),
            ],
        }
    }

    pub fn page_color(&self, index: usize) -> Color {
        self.pages[index % self.pages.len()]
    }

    /// Copies the strip colors of this palette onto `style`.
    pub fn apply_to(&self, style: &mut SegmentStyle) {
        style.segment_background_color = self.segment_bg;
        style.normal_title_color = self.normal_title;
        style.selected_title_color = self.selected_title;
        style.separator_color = self.separator;
        style.cursor_color = self.cursor;
    }
}
