use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::core::Color;

/// Shape of the selection indicator drawn under/around the active title.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum CursorKind {
    None,
    /// Bar along the bottom edge of the active title.
    #[default]
    Line,
    /// Reserved. Accepted in configuration but never rendered.
    Triangle,
    /// Rounded outline around the active title.
    Border,
    /// Rounded filled pill behind the active title.
    Mask,
}

/// Appearance of a tab strip.
///
/// Consumed read-only by [`crate::segment::TabStrip`]; restyling goes through
/// `TabStrip::set_style`, which relayouts.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SegmentStyle {
    pub segment_height: f32,
    pub segment_background_color: Color,
    /// Interpolate title colors while dragging between pages.
    pub color_gradient: bool,
    pub normal_title_color: Color,
    pub selected_title_color: Color,
    pub title_font: FontConfig,
    pub title_margin: f32,
    pub show_separator: bool,
    pub separator_color: Color,
    /// Split the strip width evenly when all titles fit.
    pub divide_when_wider_than_titles: bool,
    pub cursor_type: CursorKind,
    /// Thickness of the line cursor.
    pub cursor_height: f32,
    /// Corner radius of border/mask cursors; negative means half the height.
    pub cursor_corner_radius: f32,
    pub cursor_color: Color,
}

impl Default for SegmentStyle {
    fn default() -> Self {
        Self {
            segment_height: 44.0,
            segment_background_color: Color::WHITE,
            color_gradient: true,
            normal_title_color: Color::GRAY,
            selected_title_color: Color::RED,
            title_font: FontConfig::default(),
            title_margin: 10.0,
            show_separator: true,
            separator_color: Color::LIGHT_GRAY,
            divide_when_wider_than_titles: true,
            cursor_type: CursorKind::default(),
            cursor_height: 2.0,
            cursor_corner_radius: -1.0,
            cursor_color: Color::CYAN,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontConfig {
    pub size: f32,
    /// TrueType/OpenType file used for measuring and drawing titles.
    pub path: Option<PathBuf>,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            size: 17.0,
            path: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    /// Strip size for the fitted layout; `None` stretches the strip across
    /// the window.
    pub segment_size: Option<(f32, f32)>,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 420,
            height: 720,
            segment_size: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub style: SegmentStyle,
    pub theme: ThemeChoice,
    pub window: WindowConfig,
    pub titles: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            style: SegmentStyle::default(),
            theme: ThemeChoice::default(),
            window: WindowConfig::default(),
            titles: ["Inbox", "Drafts", "Sent", "Archive", "Spam", "Trash"]
                .iter()
                .map(|t| t.to_string())
                .collect(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ThemeChoice {
    #[default]
    Light,
    Dark,
}
