//! Seams between the engine and the toolkit hosting it.
//!
//! The host supplies text measurement and a place to attach page content;
//! the engine reports back through queued events. Observer traits give every
//! callback a no-op default so a host only implements what it cares about.

/// Text measurement at the title font.
pub trait TextMeasure {
    /// Natural (unwrapped) width of `text`.
    fn text_width(&self, text: &str) -> f32;

    /// Point size of the font, when known. Border and mask cursors derive
    /// their height from it.
    fn point_size(&self) -> Option<f32> {
        None
    }
}

/// A container that displays page content units.
///
/// The content surface attaches every page it is given and detaches pages it
/// drops; it never inspects them.
pub trait PageHost<P> {
    fn attach(&mut self, page: &P, index: usize);
    fn detach(&mut self, page: &P, index: usize);
}

/// A host that ignores attachment, for pages that need no parent.
#[derive(Debug, Default, Clone, Copy)]
pub struct DetachedHost;

impl<P> PageHost<P> for DetachedHost {
    fn attach(&mut self, _page: &P, _index: usize) {}
    fn detach(&mut self, _page: &P, _index: usize) {}
}

/// Callbacks of the paged content surface.
pub trait ContentObserver {
    fn on_settled_page(&mut self, _index: usize) {}
    fn on_drag_begin(&mut self) {}
    fn on_scroll_progress(&mut self, _old_index: usize, _new_index: usize, _progress: f32) {}
}

/// Callbacks of the tab strip.
pub trait SegmentObserver {
    fn on_title_selected(&mut self, _title: &str, _index: usize) {}
}

/// Callbacks of the page view coordinator.
pub trait PageObserver {
    fn on_settled_page(&mut self, _index: usize) {}
    fn on_tab_selected(&mut self, _title: &str, _index: usize) {}
}
