//! The page view: a tab strip on top of a paged content surface, kept in
//! sync in both directions.

use std::time::Instant;

use crate::config::SegmentStyle;
use crate::content::{ContentEvent, ContentSurface};
use crate::core::{Rect, Size};
use crate::error::PageViewError;
use crate::host::{PageHost, PageObserver, TextMeasure};
use crate::segment::{SegmentEvent, TabStrip};

/// Events queued by the page view; drain with [`PageView::take_events`].
#[derive(Debug, Clone, PartialEq)]
pub enum PageEvent {
    /// The content came to rest on a page.
    SettledPage(usize),
    /// A title finished its select-animation.
    TabSelected { title: String, index: usize },
}

impl PageEvent {
    pub fn dispatch(&self, observer: &mut dyn PageObserver) {
        match self {
            PageEvent::SettledPage(index) => observer.on_settled_page(*index),
            PageEvent::TabSelected { title, index } => observer.on_tab_selected(title, *index),
        }
    }
}

/// What lies under a point of the page view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageHit {
    Title(usize),
    Content(usize),
}

/// Coordinates a [`TabStrip`] and a [`ContentSurface`].
///
/// Frames are relative to the page view's own top-left corner. Every
/// operation drains both children's events before returning, so the two
/// stay in sync without the host relaying anything.
pub struct PageView<P> {
    frame: Rect,
    segment: TabStrip,
    content: ContentSurface<P>,
    segment_bar: Rect,
    segment_size: Option<Size>,
    hide_segment: bool,
    current_index: usize,
    events: Vec<PageEvent>,
}

impl<P> PageView<P> {
    /// Builds a page view with one page per title.
    pub fn new(
        frame: Rect,
        style: SegmentStyle,
        titles: Vec<String>,
        pages: Vec<P>,
        measure: Box<dyn TextMeasure>,
        host: &mut dyn PageHost<P>,
    ) -> Result<Self, PageViewError> {
        check_counts(titles.len(), pages.len())?;

        let segment_height = style.segment_height;
        let segment_bar = Rect::new(0.0, 0.0, frame.w, segment_height);
        let content_frame = Rect::new(
            0.0,
            segment_height,
            frame.w,
            (frame.h - segment_height).max(0.0),
        );
        let segment = TabStrip::new(segment_bar, style, titles, measure);
        let content = ContentSurface::new(content_frame, pages, host);
        log::debug!("page view: {} pages", content.page_count());

        Ok(Self {
            frame,
            segment,
            content,
            segment_bar,
            segment_size: None,
            hide_segment: false,
            current_index: 0,
            events: Vec::new(),
        })
    }

    /// Gives the strip a fixed size, centered in a full-width bar.
    pub fn with_segment_size(mut self, size: Size) -> Self {
        self.segment_size = Some(size);
        self.layout();
        self
    }

    // ── Accessors ────────────────────────────────────────────────────

    pub fn frame(&self) -> Rect {
        self.frame
    }

    pub fn segment(&self) -> &TabStrip {
        &self.segment
    }

    pub fn content(&self) -> &ContentSurface<P> {
        &self.content
    }

    /// Full-width bar behind the strip.
    pub fn segment_bar(&self) -> Rect {
        self.segment_bar
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn is_segment_hidden(&self) -> bool {
        self.hide_segment
    }

    pub fn is_animating(&self) -> bool {
        self.segment.is_animating() || self.content.is_animating()
    }

    pub fn take_events(&mut self) -> Vec<PageEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn dispatch_events(&mut self, observer: &mut dyn PageObserver) {
        for event in self.take_events() {
            event.dispatch(observer);
        }
    }

    // ── Layout ───────────────────────────────────────────────────────

    pub fn set_frame(&mut self, frame: Rect) {
        self.frame = frame;
        self.layout();
    }

    /// Slides the strip above the top edge; the content takes its space.
    pub fn set_hide_segment(&mut self, hide: bool) {
        if hide != self.hide_segment {
            self.hide_segment = hide;
            self.layout();
        }
    }

    pub fn set_scroll_enabled(&mut self, enabled: bool) {
        self.content.set_scroll_enabled(enabled);
        self.pump();
    }

    pub fn hit_test(&self, x: f32, y: f32) -> Option<PageHit> {
        let strip = self.segment.frame();
        if strip.contains(x, y) {
            return self
                .segment
                .title_at(x - strip.x, y - strip.y)
                .map(PageHit::Title);
        }
        let content = self.content.frame();
        if !content.contains(x, y) || content.w <= 0.0 {
            return None;
        }
        let local = x - content.x + self.content.offset_x();
        let index = (local / content.w).floor().max(0.0) as usize;
        (index < self.content.page_count()).then_some(PageHit::Content(index))
    }

    // ── Selection ────────────────────────────────────────────────────

    /// Selects `index` in both children.
    pub fn scroll_page(&mut self, index: usize, animated: bool) {
        if index >= self.content.page_count() {
            return;
        }
        self.segment.select_by_index(index, animated);
        self.content.scroll_to_page(index, animated);
        self.pump();
    }

    /// Swaps titles and pages together. On a count mismatch nothing changes.
    pub fn reset_content(
        &mut self,
        titles: Vec<String>,
        pages: Vec<P>,
        host: &mut dyn PageHost<P>,
    ) -> Result<Vec<P>, PageViewError> {
        check_counts(titles.len(), pages.len())?;
        self.segment.set_titles(titles);
        let old = self.content.reset_pages(pages, host);
        self.current_index = 0;
        self.segment.take_events();
        self.content.take_events();
        self.content.scroll_to_page(0, false);
        self.pump();
        Ok(old)
    }

    // ── Gestures ─────────────────────────────────────────────────────

    pub fn tap_title(&mut self, index: usize) {
        self.segment.tap_title(index);
        self.pump();
    }

    pub fn begin_drag(&mut self) {
        self.content.begin_drag();
        self.pump();
    }

    pub fn drag_by(&mut self, dx: f32) {
        self.content.drag_by(dx);
        self.pump();
    }

    pub fn end_drag(&mut self, velocity: f32) {
        self.content.end_drag(velocity);
        self.pump();
    }

    pub fn end_decelerating(&mut self) {
        self.content.end_decelerating();
        self.pump();
    }

    pub fn scroll_titles_by(&mut self, dx: f32) {
        self.segment.scroll_titles_by(dx);
    }

    /// Advances both children's animations. Returns `true` while anything
    /// is still moving.
    pub fn tick(&mut self, now: Instant) -> bool {
        let segment = self.segment.tick(now);
        let content = self.content.tick(now);
        self.pump();
        segment || content || self.is_animating()
    }

    // ── Internals ────────────────────────────────────────────────────

    fn layout(&mut self) {
        let height = self.segment.style().segment_height;
        let top = if self.hide_segment { -height } else { 0.0 };
        self.segment_bar = Rect::new(0.0, top, self.frame.w, height);

        let strip = match self.segment_size {
            Some(size) => Rect::new(
                (self.frame.w - size.w) / 2.0,
                top + (height - size.h) / 2.0,
                size.w,
                size.h,
            ),
            None => self.segment_bar,
        };
        self.segment.set_frame(strip);

        let content_top = top + height;
        self.content.set_frame(Rect::new(
            0.0,
            content_top,
            self.frame.w,
            (self.frame.h - content_top).max(0.0),
        ));

        // Moving children carry their own targets through the resize.
        if self.segment.phase().is_animating()
            || self.content.is_animating()
            || self.content.is_dragging()
        {
            return;
        }
        let index = self.current_index;
        self.segment.adjust_by_progress(1.0, index, index);
        self.segment.center_on(index, false);
        if self.content.target_page() != Some(index) {
            self.content.scroll_to_page(index, false);
            self.pump();
        }
    }

    /// Routes child events until both queues are empty.
    fn pump(&mut self) {
        loop {
            let segment_events = self.segment.take_events();
            let content_events = self.content.take_events();
            if segment_events.is_empty() && content_events.is_empty() {
                break;
            }

            for event in segment_events {
                let SegmentEvent::TitleSelected { title, index } = event;
                if self.content.target_page() != Some(index) && !self.content.is_dragging() {
                    self.content.scroll_to_page(index, false);
                }
                self.current_index = index;
                self.events.push(PageEvent::TabSelected { title, index });
            }

            for event in content_events {
                match event {
                    ContentEvent::DragBegan => self.segment.set_title_selectable(false),
                    ContentEvent::ScrollProgress {
                        old_index,
                        new_index,
                        progress,
                    } => {
                        let dragging = self.content.is_dragging();
                        // A programmatic scroll runs alongside the strip's
                        // own select-animation, which keeps the cursor.
                        if dragging || !self.segment.phase().is_animating() {
                            self.segment
                                .adjust_by_progress(progress, old_index, new_index);
                        }
                        if dragging {
                            self.segment.set_title_selectable(false);
                        }
                    }
                    ContentEvent::SettledPage(index) => {
                        self.current_index = index;
                        self.segment.set_title_selectable(true);
                        self.segment.snap_to(index);
                        self.events.push(PageEvent::SettledPage(index));
                    }
                }
            }
        }
    }
}

fn check_counts(titles: usize, pages: usize) -> Result<(), PageViewError> {
    if titles == pages {
        return Ok(());
    }
    let err = PageViewError::CountMismatch { titles, pages };
    log::warn!("page view: {err}");
    Err(err)
}

#[cfg(test)]
#[path = "../../tests/unit/page.rs"]
mod tests;
