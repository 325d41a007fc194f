//! A headless paged tab view: a tab strip whose cursor follows a horizontally
//! paging content surface, and the other way round.
//!
//! The engine owns geometry, selection state and animations. A host toolkit
//! measures text, parents the page content, feeds in pointer gestures and
//! clock ticks, and draws whatever the engine lays out.

pub mod config;
pub mod content;
pub mod core;
pub mod error;
pub mod host;
pub mod page;
pub mod segment;
pub mod text;

pub use config::{AppConfig, CursorKind, SegmentStyle};
pub use content::{ContentEvent, ContentSurface};
pub use error::{ConfigError, PageViewError};
pub use host::{
    ContentObserver, DetachedHost, PageHost, PageObserver, SegmentObserver, TextMeasure,
};
pub use page::{PageEvent, PageHit, PageView};
pub use segment::{SegmentEvent, TabStrip};
