mod fonts;
mod model;
mod persistence;
mod theme;

pub use fonts::{font_data, resolve_font_path};
pub use model::{AppConfig, CursorKind, FontConfig, SegmentStyle, ThemeChoice, WindowConfig};
pub use persistence::{
    config_base_dir, config_path, load_config, read_config, save_config, try_load_config,
    write_config,
};
pub use theme::ThemePalette;
