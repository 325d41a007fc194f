use std::path::{Path, PathBuf};

use super::FontConfig;

/// Well-known locations of a proportional sans-serif font, tried in order
/// when the config does not name one.
const SYSTEM_FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/noto/NotoSans-Regular.ttf",
    "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/Library/Fonts/Arial.ttf",
    "C:\\Windows\\Fonts\\segoeui.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

/// Returns the font file the config asks for, or the first system candidate
/// that exists.
pub fn resolve_font_path(config: &FontConfig) -> Option<PathBuf> {
    if let Some(path) = &config.path {
        return Some(path.clone());
    }
    SYSTEM_FONT_CANDIDATES
        .iter()
        .map(Path::new)
        .find(|p| p.is_file())
        .map(Path::to_path_buf)
}

/// Reads the raw bytes of the resolved title font.
pub fn font_data(config: &FontConfig) -> Option<Vec<u8>> {
    let path = resolve_font_path(config)?;
    match std::fs::read(&path) {
        Ok(bytes) => Some(bytes),
        Err(err) => {
            log::warn!("failed to read font {}: {err}", path.display());
            None
        }
    }
}
