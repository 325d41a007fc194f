//! The tab strip: a row of titles with a cursor that tracks the selection.

mod animation;
mod cursor;
pub mod layout;

use std::time::Instant;

use crate::config::SegmentStyle;
use crate::core::{Color, Rect, Size, Tween, mix_f32};
use crate::host::{SegmentObserver, TextMeasure};

pub use animation::{
    CENTER_ANIMATION_DURATION, SELECT_ANIMATION_DURATION, SelectAnimation, SelectPhase,
};
pub use cursor::{BORDER_CURSOR_STROKE, Cursor};
pub use layout::StripLayout;

/// One title of the strip.
#[derive(Debug, Clone, PartialEq)]
pub struct TabEntry {
    pub title: String,
    /// Width of the title at the title font, measured once per title set.
    pub natural_width: f32,
    /// Frame in label-surface coordinates.
    pub frame: Rect,
    pub color: Color,
}

/// Events queued by the strip; drain with [`TabStrip::take_events`].
#[derive(Debug, Clone, PartialEq)]
pub enum SegmentEvent {
    /// Fired once a select-animation completes.
    TitleSelected { title: String, index: usize },
}

impl SegmentEvent {
    pub fn dispatch(&self, observer: &mut dyn SegmentObserver) {
        match self {
            SegmentEvent::TitleSelected { title, index } => {
                observer.on_title_selected(title, *index)
            }
        }
    }
}

/// Title colors at either end of a selection change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TitleGradient {
    pub normal: Color,
    pub selected: Color,
}

impl TitleGradient {
    pub fn from_style(style: &SegmentStyle) -> Self {
        Self {
            normal: style.normal_title_color,
            selected: style.selected_title_color,
        }
    }

    /// Color of the title being left at `progress`.
    pub fn outgoing(&self, progress: f32) -> Color {
        self.selected.lerp(self.normal, progress)
    }

    /// Color of the title being approached at `progress`.
    pub fn incoming(&self, progress: f32) -> Color {
        self.normal.lerp(self.selected, progress)
    }
}

/// A horizontally scrollable row of titles with a selection cursor.
///
/// All geometry is in strip-local coordinates; titles, separators and the
/// cursor live on a label surface scrolled by [`TabStrip::content_offset_x`].
pub struct TabStrip {
    frame: Rect,
    style: SegmentStyle,
    gradient: TitleGradient,
    measure: Box<dyn TextMeasure>,
    tabs: Vec<TabEntry>,
    separators: Vec<Rect>,
    enable_scroll: bool,
    mask_margin: f32,
    content_width: f32,
    content_offset_x: f32,
    center_tween: Option<Tween<f32>>,
    cursor: Option<Cursor>,
    current_index: usize,
    old_index: usize,
    title_selectable: bool,
    phase: SelectPhase,
    events: Vec<SegmentEvent>,
}

impl TabStrip {
    pub fn new(
        frame: Rect,
        style: SegmentStyle,
        titles: Vec<String>,
        measure: Box<dyn TextMeasure>,
    ) -> Self {
        let mut strip = Self {
            frame,
            gradient: TitleGradient::from_style(&style),
            style,
            measure,
            tabs: Vec::new(),
            separators: Vec::new(),
            enable_scroll: false,
            mask_margin: 0.0,
            content_width: frame.w,
            content_offset_x: 0.0,
            center_tween: None,
            cursor: None,
            current_index: 0,
            old_index: 0,
            title_selectable: true,
            phase: SelectPhase::Idle,
            events: Vec::new(),
        };
        strip.rebuild_tabs(titles);
        strip
    }

    /// Size a strip needs to show every title without scrolling.
    pub fn fit_size(titles: &[String], style: &SegmentStyle, measure: &dyn TextMeasure) -> Size {
        let widths: Vec<f32> = titles.iter().map(|t| measure.text_width(t)).collect();
        layout::fit_size(&widths, style)
    }

    // ── Accessors ────────────────────────────────────────────────────

    pub fn frame(&self) -> Rect {
        self.frame
    }

    pub fn style(&self) -> &SegmentStyle {
        &self.style
    }

    pub fn tabs(&self) -> &[TabEntry] {
        &self.tabs
    }

    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.tabs.iter().map(|t| t.title.as_str())
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn separators(&self) -> &[Rect] {
        &self.separators
    }

    pub fn cursor(&self) -> Option<&Cursor> {
        self.cursor.as_ref()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn old_index(&self) -> usize {
        self.old_index
    }

    pub fn enable_scroll(&self) -> bool {
        self.enable_scroll
    }

    pub fn content_width(&self) -> f32 {
        self.content_width
    }

    pub fn content_offset_x(&self) -> f32 {
        self.content_offset_x
    }

    pub fn phase(&self) -> &SelectPhase {
        &self.phase
    }

    pub fn is_animating(&self) -> bool {
        self.phase.is_animating() || self.center_tween.is_some()
    }

    pub fn is_title_selectable(&self) -> bool {
        self.title_selectable
    }

    pub fn set_title_selectable(&mut self, selectable: bool) {
        self.title_selectable = selectable;
    }

    /// Drains queued events.
    pub fn take_events(&mut self) -> Vec<SegmentEvent> {
        std::mem::take(&mut self.events)
    }

    // ── Configuration ────────────────────────────────────────────────

    /// Replaces every title. Selection resets to the first title and is
    /// re-enabled; an in-flight select-animation is dropped.
    pub fn set_titles(&mut self, titles: Vec<String>) {
        log::debug!("segment: replacing {} titles with {}", self.tabs.len(), titles.len());
        self.phase = SelectPhase::Idle;
        self.center_tween = None;
        self.content_offset_x = 0.0;
        self.current_index = 0;
        self.old_index = 0;
        self.rebuild_tabs(titles);
        self.title_selectable = true;
    }

    pub fn set_frame(&mut self, frame: Rect) {
        if frame == self.frame {
            return;
        }
        self.frame = frame;
        self.relayout();
    }

    pub fn set_style(&mut self, style: SegmentStyle) {
        self.gradient = TitleGradient::from_style(&style);
        self.style = style;
        self.apply_selection_colors(self.current_index);
        self.relayout();
    }

    // ── Selection ────────────────────────────────────────────────────

    /// Selects the title at `index`.
    ///
    /// Ignored when `index` is out of range or selection is disabled.
    /// Selecting the title the strip already rests on fires no event; the
    /// cursor and colors are only put back in place.
    pub fn select_by_index(&mut self, index: usize, animated: bool) {
        if index >= self.tabs.len() || !self.title_selectable {
            return;
        }
        if let SelectPhase::Animating(anim) = std::mem::take(&mut self.phase) {
            // Last call wins: the interrupted animation never reports.
            self.old_index = anim.old_index;
        }
        self.current_index = index;
        self.start_select_animation(animated);
    }

    /// Pointer tap on the title at `index`.
    pub fn tap_title(&mut self, index: usize) {
        self.select_by_index(index, true);
    }

    /// Index of the title under the strip-local point `(x, y)`.
    pub fn title_at(&self, x: f32, y: f32) -> Option<usize> {
        if y < 0.0 || y >= self.frame.h {
            return None;
        }
        let lx = x + self.content_offset_x;
        self.tabs
            .iter()
            .position(|t| lx >= t.frame.x && lx < t.frame.max_x())
    }

    /// Moves the cursor and blends title colors between two titles.
    ///
    /// `progress` runs from 0 (at `old_index`) to 1 (at `new_index`). Both
    /// indices are expected to be in range; invalid ones are ignored. An
    /// in-flight select-animation is dropped without an event and selection
    /// is re-enabled.
    pub fn adjust_by_progress(&mut self, progress: f32, old_index: usize, new_index: usize) {
        let (Some(old), Some(new)) = (self.tabs.get(old_index), self.tabs.get(new_index)) else {
            return;
        };
        let span = old.frame.lerp(new.frame, progress);
        log::trace!("segment: progress {progress:.3} {old_index} -> {new_index}");

        if std::mem::take(&mut self.phase).is_animating() {
            self.title_selectable = true;
        }
        if let Some(cursor) = &mut self.cursor {
            cursor.track(span.x, span.w);
        }
        if self.style.color_gradient {
            self.tabs[old_index].color = self.gradient.outgoing(progress);
            self.tabs[new_index].color = self.gradient.incoming(progress);
        }
        self.old_index = old_index;
        self.current_index = new_index;
    }

    /// Scrolls the label surface so the title at `index` is centered,
    /// without scrolling past either end.
    pub fn center_on(&mut self, index: usize, animated: bool) {
        let Some(tab) = self.tabs.get(index) else {
            return;
        };
        let target = layout::centered_offset(tab.frame, self.frame.w, self.content_width);
        if animated && target != self.content_offset_x {
            self.center_tween = Some(Tween::new(
                self.content_offset_x,
                target,
                CENTER_ANIMATION_DURATION,
            ));
        } else {
            self.center_tween = None;
            self.content_offset_x = target;
        }
    }

    /// Settles the strip on `index`: completes any select-animation, moves
    /// the cursor, recenters, and recolors every title.
    pub fn snap_to(&mut self, index: usize) {
        if index >= self.tabs.len() {
            return;
        }
        self.finish_animation();
        self.adjust_by_progress(1.0, index, index);
        self.center_on(index, true);
        self.apply_selection_colors(index);
    }

    /// Free scrolling of the label surface, when titles overflow.
    pub fn scroll_titles_by(&mut self, dx: f32) {
        if !self.enable_scroll {
            return;
        }
        self.center_tween = None;
        let max = (self.content_width - self.frame.w).max(0.0);
        self.content_offset_x = (self.content_offset_x + dx).clamp(0.0, max);
    }

    // ── Animation ────────────────────────────────────────────────────

    /// Advances running animations to `now`. Returns `true` while anything
    /// is still moving.
    pub fn tick(&mut self, now: Instant) -> bool {
        if let Some(tween) = &mut self.center_tween {
            let (offset, done) = tween.sample(now, mix_f32);
            self.content_offset_x = offset;
            if done {
                self.center_tween = None;
            }
        }

        if let SelectPhase::Animating(anim) = &mut self.phase {
            let (frame, done) = anim.sample(now);
            if let Some(cursor) = &mut self.cursor {
                cursor.frame = frame;
            }
            if done {
                self.finish_animation();
            }
        }

        self.is_animating()
    }

    /// Completes an in-flight select-animation: colors snap, selection is
    /// re-enabled and [`SegmentEvent::TitleSelected`] is queued.
    pub fn finish_animation(&mut self) {
        let SelectPhase::Animating(anim) = std::mem::take(&mut self.phase) else {
            return;
        };
        if let Some(cursor) = &mut self.cursor {
            cursor.frame = anim.target();
        }
        self.apply_selection_colors(self.current_index);
        self.title_selectable = true;
        self.old_index = self.current_index;

        if let Some(tab) = self.tabs.get(self.current_index) {
            log::debug!("segment: selected {} ({:?})", self.current_index, tab.title);
            self.events.push(SegmentEvent::TitleSelected {
                title: tab.title.clone(),
                index: self.current_index,
            });
        }
    }

    // ── Internals ────────────────────────────────────────────────────

    fn start_select_animation(&mut self, animated: bool) {
        if self.old_index >= self.tabs.len() || self.current_index >= self.tabs.len() {
            return;
        }
        if self.current_index == self.old_index {
            self.rest_on(self.current_index, animated);
            return;
        }
        self.title_selectable = false;
        self.center_on(self.current_index, animated);

        let target = self.tabs[self.current_index].frame;
        let (from, to) = match &self.cursor {
            Some(cursor) => (cursor.frame, cursor.frame_tracking(target.x, target.w)),
            None => (Rect::ZERO, Rect::ZERO),
        };
        let anim = SelectAnimation::new(self.old_index, self.current_index, from, to, animated);
        self.phase = SelectPhase::Animating(anim);
        if anim.is_instant() {
            self.finish_animation();
        }
    }

    fn rebuild_tabs(&mut self, titles: Vec<String>) {
        self.tabs = titles
            .into_iter()
            .map(|title| TabEntry {
                natural_width: self.measure.text_width(&title),
                title,
                frame: Rect::ZERO,
                color: self.gradient.normal,
            })
            .collect();
        if let Some(first) = self.tabs.first_mut() {
            first.color = self.gradient.selected;
        }
        self.relayout();
    }

    /// Puts the cursor and colors back on `index` without an event. A strip
    /// left mid-transition by progress reaches this when its origin is
    /// selected again.
    fn rest_on(&mut self, index: usize, animated: bool) {
        let Some(frame) = self.tabs.get(index).map(|t| t.frame) else {
            return;
        };
        if let Some(cursor) = &mut self.cursor {
            cursor.track(frame.x, frame.w);
        }
        self.apply_selection_colors(index);
        self.center_on(index, animated);
    }

    fn apply_selection_colors(&mut self, index: usize) {
        for (i, tab) in self.tabs.iter_mut().enumerate() {
            tab.color = if i == index {
                self.gradient.selected
            } else {
                self.gradient.normal
            };
        }
    }

    /// Recomputes title frames, separators, scroll extent and the cursor.
    fn relayout(&mut self) {
        let widths: Vec<f32> = self.tabs.iter().map(|t| t.natural_width).collect();
        let StripLayout {
            frames,
            separators,
            enable_scroll,
            mask_margin,
            content_width,
        } = layout::layout_titles(&widths, &self.style, self.frame.size());

        for (tab, frame) in self.tabs.iter_mut().zip(frames) {
            tab.frame = frame;
        }
        self.separators = separators;
        self.enable_scroll = enable_scroll;
        self.mask_margin = mask_margin;
        self.content_width = content_width;

        let max_offset = (content_width - self.frame.w).max(0.0);
        self.content_offset_x = self.content_offset_x.clamp(0.0, max_offset);

        self.cursor = self.tabs.get(self.current_index).and_then(|tab| {
            Cursor::for_tab(
                &self.style,
                tab.frame,
                self.frame.h,
                self.mask_margin,
                self.measure.point_size(),
            )
        });

        if let (SelectPhase::Animating(anim), Some(cursor)) = (&mut self.phase, &self.cursor) {
            anim.retarget(cursor.frame);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/segment.rs"]
mod tests;
