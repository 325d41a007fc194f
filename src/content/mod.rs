//! The paged content surface: pages laid side by side, one viewport wide
//! each, scrolled horizontally and snapped to page boundaries.

pub mod progress;

use std::ops::Range;
use std::time::{Duration, Instant};

use crate::core::{Rect, Tween, mix_f32};
use crate::host::{ContentObserver, PageHost};

pub use progress::{FLING_VELOCITY_THRESHOLD, PageProgress};

/// Duration of animated offset changes and post-drag deceleration.
pub const SCROLL_ANIMATION_DURATION: Duration = Duration::from_millis(250);

/// Events queued by the surface; drain with [`ContentSurface::take_events`].
#[derive(Debug, Clone, PartialEq)]
pub enum ContentEvent {
    DragBegan,
    ScrollProgress {
        old_index: usize,
        new_index: usize,
        progress: f32,
    },
    SettledPage(usize),
}

impl ContentEvent {
    pub fn dispatch(&self, observer: &mut dyn ContentObserver) {
        match *self {
            ContentEvent::DragBegan => observer.on_drag_begin(),
            ContentEvent::ScrollProgress {
                old_index,
                new_index,
                progress,
            } => observer.on_scroll_progress(old_index, new_index, progress),
            ContentEvent::SettledPage(index) => observer.on_settled_page(index),
        }
    }
}

/// A horizontally paging scroll surface over host-owned pages.
///
/// Offsets are in content coordinates: page `i` starts at `i * width`. The
/// offset never leaves `[0, (count - 1) * width]`.
pub struct ContentSurface<P> {
    frame: Rect,
    pages: Vec<P>,
    offset_x: f32,
    drag_start_offset_x: f32,
    dragging: bool,
    scroll_enabled: bool,
    animation: Option<Tween<f32>>,
    events: Vec<ContentEvent>,
}

impl<P> ContentSurface<P> {
    pub fn new(frame: Rect, pages: Vec<P>, host: &mut dyn PageHost<P>) -> Self {
        for (index, page) in pages.iter().enumerate() {
            host.attach(page, index);
        }
        log::debug!("content: attached {} pages", pages.len());
        Self {
            frame,
            pages,
            offset_x: 0.0,
            drag_start_offset_x: 0.0,
            dragging: false,
            scroll_enabled: true,
            animation: None,
            events: Vec::new(),
        }
    }

    // ── Accessors ────────────────────────────────────────────────────

    pub fn frame(&self) -> Rect {
        self.frame
    }

    pub fn page_width(&self) -> f32 {
        self.frame.w
    }

    pub fn pages(&self) -> &[P] {
        &self.pages
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn offset_x(&self) -> f32 {
        self.offset_x
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    pub fn is_scroll_enabled(&self) -> bool {
        self.scroll_enabled
    }

    /// Disabling scrolling abandons a drag in progress: the content jumps to
    /// the nearest page and settles there.
    pub fn set_scroll_enabled(&mut self, enabled: bool) {
        self.scroll_enabled = enabled;
        if enabled || !self.dragging {
            return;
        }
        self.dragging = false;
        let page = progress::snap_target(self.offset_x, self.frame.w, self.pages.len(), 0.0);
        log::debug!("content: drag abandoned, snapping to page {page}");
        self.apply_offset(page as f32 * self.frame.w);
        self.settle();
    }

    /// Page the surface is resting on, or heading to while animating.
    pub fn target_page(&self) -> Option<usize> {
        let offset = self.animation.map_or(self.offset_x, |tween| tween.to);
        progress::settled_index(offset, self.frame.w, self.pages.len())
    }

    /// Frame of page `index` relative to the surface's top-left corner,
    /// shifted by the current offset.
    pub fn page_frame(&self, index: usize) -> Option<Rect> {
        (index < self.pages.len()).then(|| {
            Rect::new(
                index as f32 * self.frame.w - self.offset_x,
                0.0,
                self.frame.w,
                self.frame.h,
            )
        })
    }

    pub fn page_frames(&self) -> Vec<Rect> {
        (0..self.pages.len())
            .filter_map(|index| self.page_frame(index))
            .collect()
    }

    /// Pages at least partly inside the viewport.
    pub fn visible_range(&self) -> Range<usize> {
        progress::visible_range(self.offset_x, self.frame.w, self.pages.len())
    }

    pub fn take_events(&mut self) -> Vec<ContentEvent> {
        std::mem::take(&mut self.events)
    }

    // ── Layout ───────────────────────────────────────────────────────

    /// Resizes the surface. The fractional page position is kept, so a
    /// surface resting on page 2 still rests on page 2 afterwards.
    pub fn set_frame(&mut self, frame: Rect) {
        let old_width = self.frame.w;
        self.frame = frame;
        if old_width <= 0.0 || old_width == frame.w {
            self.offset_x = self.offset_x.clamp(0.0, self.max_offset());
            return;
        }
        let scale = frame.w / old_width;
        let max = self.max_offset();
        self.offset_x = (self.offset_x * scale).clamp(0.0, max);
        self.drag_start_offset_x *= scale;
        if let Some(tween) = &mut self.animation {
            tween.from = (tween.from * scale).clamp(0.0, max);
            tween.to = (tween.to * scale).clamp(0.0, max);
        }
    }

    /// Swaps every page. Current pages are detached and returned; the new
    /// pages are attached in order.
    pub fn reset_pages(&mut self, pages: Vec<P>, host: &mut dyn PageHost<P>) -> Vec<P> {
        for (index, page) in self.pages.iter().enumerate() {
            host.detach(page, index);
        }
        let old = std::mem::replace(&mut self.pages, pages);
        for (index, page) in self.pages.iter().enumerate() {
            host.attach(page, index);
        }
        log::debug!(
            "content: replaced {} pages with {}",
            old.len(),
            self.pages.len()
        );
        self.animation = None;
        self.dragging = false;
        self.offset_x = self.offset_x.clamp(0.0, self.max_offset());
        old
    }

    // ── Programmatic scrolling ───────────────────────────────────────

    pub fn scroll_to_page(&mut self, index: usize, animated: bool) {
        if index >= self.pages.len() {
            return;
        }
        self.set_content_offset(index as f32 * self.frame.w, animated);
    }

    /// Moves to `offset` (clamped). An immediate move reports progress and
    /// settles synchronously; an animated one settles when its tween ends.
    pub fn set_content_offset(&mut self, offset: f32, animated: bool) {
        let target = offset.clamp(0.0, self.max_offset());
        self.dragging = false;
        self.drag_start_offset_x = self.offset_x;
        if animated {
            if target == self.offset_x {
                return;
            }
            self.animation = Some(Tween::new(
                self.offset_x,
                target,
                SCROLL_ANIMATION_DURATION,
            ));
        } else {
            self.animation = None;
            self.apply_offset(target);
            self.settle();
        }
    }

    // ── Gestures ─────────────────────────────────────────────────────

    pub fn begin_drag(&mut self) {
        if !self.scroll_enabled || self.pages.is_empty() {
            return;
        }
        self.animation = None;
        self.dragging = true;
        self.drag_start_offset_x = self.offset_x;
        self.events.push(ContentEvent::DragBegan);
    }

    /// Moves the content by `dx` offset units; positive values reveal later
    /// pages.
    pub fn drag_by(&mut self, dx: f32) {
        if self.dragging {
            self.apply_offset(self.offset_x + dx);
        }
    }

    pub fn drag_to(&mut self, offset: f32) {
        if self.dragging {
            self.apply_offset(offset);
        }
    }

    /// Releases a drag with `velocity` in offset units per second. The
    /// surface decelerates onto a page boundary and settles there.
    pub fn end_drag(&mut self, velocity: f32) {
        if !self.dragging {
            return;
        }
        self.dragging = false;
        let page = progress::snap_target(self.offset_x, self.frame.w, self.pages.len(), velocity);
        let target = (page as f32 * self.frame.w).clamp(0.0, self.max_offset());
        if target == self.offset_x {
            self.settle();
        } else {
            self.animation = Some(Tween::new(
                self.offset_x,
                target,
                SCROLL_ANIMATION_DURATION,
            ));
        }
    }

    /// Deceleration finished where the content currently rests.
    pub fn end_decelerating(&mut self) {
        self.dragging = false;
        self.animation = None;
        self.settle();
    }

    // ── Animation ────────────────────────────────────────────────────

    /// Advances an offset animation to `now`. Returns `true` while moving.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(tween) = &mut self.animation else {
            return false;
        };
        let (offset, done) = tween.sample(now, mix_f32);
        self.apply_offset(offset);
        if done {
            self.animation = None;
            self.settle();
        }
        self.animation.is_some()
    }

    // ── Internals ────────────────────────────────────────────────────

    fn max_offset(&self) -> f32 {
        progress::max_offset(self.frame.w, self.pages.len())
    }

    fn apply_offset(&mut self, offset: f32) {
        let offset = offset.clamp(0.0, self.max_offset());
        if offset == self.offset_x {
            return;
        }
        self.offset_x = offset;
        if let Some(p) = progress::page_progress(
            offset,
            self.drag_start_offset_x,
            self.frame.w,
            self.pages.len(),
        ) {
            log::trace!(
                "content: progress {:.3} {} -> {}",
                p.progress,
                p.old_index,
                p.new_index
            );
            self.events.push(ContentEvent::ScrollProgress {
                old_index: p.old_index,
                new_index: p.new_index,
                progress: p.progress,
            });
        }
    }

    fn settle(&mut self) {
        if let Some(index) = progress::settled_index(self.offset_x, self.frame.w, self.pages.len())
        {
            log::debug!("content: settled on page {index}");
            self.events.push(ContentEvent::SettledPage(index));
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/content.rs"]
mod tests;
