use std::time::{Duration, Instant};

use super::{PageEvent, PageHit, PageView};
use crate::config::SegmentStyle;
use crate::core::{Rect, Size};
use crate::error::PageViewError;
use crate::host::{DetachedHost, PageObserver};
use crate::segment::SELECT_ANIMATION_DURATION;
use crate::text::CellMeasure;

fn titles(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

fn build(names: &[&str], pages: usize) -> Result<PageView<usize>, PageViewError> {
    PageView::new(
        Rect::new(0.0, 0.0, 300.0, 244.0),
        SegmentStyle::default(),
        titles(names),
        (0..pages).collect(),
        Box::new(CellMeasure::new(10.0, Some(17.0))),
        &mut DetachedHost,
    )
}

fn view() -> PageView<usize> {
    build(&["a", "b", "c"], 3).expect("matching counts")
}

fn tab_selected(title: &str, index: usize) -> PageEvent {
    PageEvent::TabSelected {
        title: title.to_string(),
        index,
    }
}

// ── Construction and layout ──────────────────────────────────────────

#[test]
fn mismatched_counts_are_rejected() {
    let err = build(&["a", "b"], 3).err();
    assert_eq!(
        err,
        Some(PageViewError::CountMismatch {
            titles: 2,
            pages: 3
        })
    );
}

#[test]
fn segment_sits_above_content() {
    let v = view();
    assert_eq!(v.segment().frame(), Rect::new(0.0, 0.0, 300.0, 44.0));
    assert_eq!(v.content().frame(), Rect::new(0.0, 44.0, 300.0, 200.0));
    assert_eq!(v.current_index(), 0);
}

#[test]
fn hidden_segment_gives_content_the_full_height() {
    let mut v = view();
    v.set_hide_segment(true);
    assert_eq!(v.segment().frame().y, -44.0);
    assert_eq!(v.content().frame(), Rect::new(0.0, 0.0, 300.0, 244.0));
    v.set_hide_segment(false);
    assert_eq!(v.content().frame().y, 44.0);
}

#[test]
fn fixed_segment_size_is_centered_in_the_bar() {
    let v = view().with_segment_size(Size::new(100.0, 30.0));
    assert_eq!(v.segment().frame(), Rect::new(100.0, 7.0, 100.0, 30.0));
    assert_eq!(v.segment_bar(), Rect::new(0.0, 0.0, 300.0, 44.0));
    assert_eq!(v.content().frame().y, 44.0);
}

#[test]
fn set_frame_keeps_current_page() {
    let mut v = view();
    v.scroll_page(2, false);
    v.take_events();
    v.set_frame(Rect::new(0.0, 0.0, 600.0, 244.0));
    assert_eq!(v.content().offset_x(), 1200.0);
    assert_eq!(v.segment().current_index(), 2);
    assert_eq!(v.segment().cursor().map(|c| c.frame.x), Some(402.0));
    assert!(v.take_events().is_empty());
}

// ── Tab to content ───────────────────────────────────────────────────

#[test]
fn tapped_title_scrolls_content_after_animation() {
    let mut v = view();
    v.tap_title(2);
    assert!(v.take_events().is_empty());
    assert_eq!(v.content().offset_x(), 0.0);

    let start = Instant::now();
    assert!(v.tick(start));
    assert!(!v.tick(start + SELECT_ANIMATION_DURATION));

    assert_eq!(
        v.take_events(),
        vec![tab_selected("c", 2), PageEvent::SettledPage(2)]
    );
    assert_eq!(v.content().offset_x(), 600.0);
    assert_eq!(v.current_index(), 2);
    assert!(v.segment().is_title_selectable());
}

#[test]
fn resize_during_tap_animation_still_selects() {
    let mut v = view();
    v.tap_title(2);
    v.set_frame(Rect::new(0.0, 0.0, 400.0, 244.0));
    assert!(v.segment().phase().is_animating());

    let start = Instant::now();
    v.tick(start);
    v.tick(start + SELECT_ANIMATION_DURATION);
    assert_eq!(
        v.take_events(),
        vec![tab_selected("c", 2), PageEvent::SettledPage(2)]
    );
    assert_eq!(v.content().offset_x(), 800.0);
    assert!(v.segment().is_title_selectable());

    v.tap_title(1);
    assert!(v.segment().phase().is_animating());
}

#[test]
fn scroll_page_moves_both_children() {
    let mut v = view();
    v.scroll_page(1, false);
    assert_eq!(
        v.take_events(),
        vec![tab_selected("b", 1), PageEvent::SettledPage(1)]
    );
    assert_eq!(v.segment().current_index(), 1);
    assert_eq!(v.content().offset_x(), 300.0);
}

#[test]
fn animated_scroll_page_settles_once() {
    let mut v = view();
    v.scroll_page(2, true);
    let start = Instant::now();
    for ms in [0, 16, 100, 200, 300, 400] {
        v.tick(start + Duration::from_millis(ms));
    }
    assert_eq!(
        v.take_events(),
        vec![tab_selected("c", 2), PageEvent::SettledPage(2)]
    );
    assert!(!v.is_animating());
    assert_eq!(v.content().offset_x(), 600.0);
    assert!(v.segment().is_title_selectable());
}

#[test]
fn content_finishing_first_still_reports_tab() {
    let mut v = view();
    v.scroll_page(1, true);
    let start = Instant::now();
    for ms in [0, 16, 120, 260] {
        v.tick(start + Duration::from_millis(ms));
    }
    assert_eq!(
        v.take_events(),
        vec![PageEvent::SettledPage(1), tab_selected("b", 1)]
    );
    assert!(v.segment().is_title_selectable());
}

#[test]
fn out_of_range_scroll_page_is_ignored() {
    let mut v = view();
    v.scroll_page(3, false);
    assert!(v.take_events().is_empty());
    assert_eq!(v.current_index(), 0);
}

// ── Content to tab ───────────────────────────────────────────────────

#[test]
fn drag_moves_cursor_and_settles_once() {
    let mut v = view();
    v.begin_drag();
    assert!(!v.segment().is_title_selectable());

    v.drag_by(450.0);
    assert_eq!(v.segment().old_index(), 1);
    assert_eq!(v.segment().current_index(), 2);

    v.end_decelerating();
    assert_eq!(v.take_events(), vec![PageEvent::SettledPage(1)]);
    assert_eq!(v.current_index(), 1);
    assert_eq!(v.segment().current_index(), 1);
    assert!(v.segment().is_title_selectable());
}

#[test]
fn taps_are_ignored_while_dragging() {
    let mut v = view();
    v.begin_drag();
    v.tap_title(2);
    assert!(!v.segment().is_animating());
    v.end_drag(0.0);
    assert_eq!(v.take_events(), vec![PageEvent::SettledPage(0)]);
}

#[test]
fn disabled_scrolling_keeps_titles_selectable() {
    let mut v = view();
    v.set_scroll_enabled(false);
    v.begin_drag();
    v.drag_by(200.0);
    assert!(v.segment().is_title_selectable());
    assert_eq!(v.content().offset_x(), 0.0);
}

#[test]
fn disabling_scroll_mid_drag_settles_and_unlocks_titles() {
    let mut v = view();
    v.begin_drag();
    v.drag_by(200.0);
    assert!(!v.segment().is_title_selectable());

    v.set_scroll_enabled(false);
    assert_eq!(v.take_events(), vec![PageEvent::SettledPage(1)]);
    assert_eq!(v.content().offset_x(), 300.0);
    assert_eq!(v.current_index(), 1);
    assert!(v.segment().is_title_selectable());

    v.set_scroll_enabled(true);
    v.tap_title(2);
    assert!(v.segment().phase().is_animating());
}

#[test]
fn tap_then_drag_keeps_titles_locked() {
    let mut v = view();
    v.tap_title(2);
    v.begin_drag();
    v.drag_by(60.0);
    assert!(!v.segment().phase().is_animating());
    assert!(!v.segment().is_title_selectable());
    v.drag_by(-60.0);
    v.end_drag(0.0);
    assert_eq!(v.take_events(), vec![PageEvent::SettledPage(0)]);
    assert!(v.segment().is_title_selectable());
}

// ── Reset ────────────────────────────────────────────────────────────

#[test]
fn reset_with_mismatch_leaves_state_unchanged() {
    let mut v = view();
    v.scroll_page(1, false);
    v.take_events();
    let result = v.reset_content(titles(&["x", "y"]), vec![7, 8, 9], &mut DetachedHost);
    assert!(result.is_err());
    assert_eq!(v.current_index(), 1);
    assert_eq!(v.segment().titles().collect::<Vec<_>>(), vec!["a", "b", "c"]);
    assert_eq!(v.content().pages(), &[0, 1, 2]);
}

#[test]
fn reset_returns_old_pages_and_rewinds() {
    let mut v = view();
    v.scroll_page(2, false);
    v.take_events();
    let old = v
        .reset_content(titles(&["x", "y"]), vec![7, 8], &mut DetachedHost)
        .expect("matching counts");
    assert_eq!(old, vec![0, 1, 2]);
    assert_eq!(v.current_index(), 0);
    assert_eq!(v.content().offset_x(), 0.0);
    assert_eq!(v.segment().titles().collect::<Vec<_>>(), vec!["x", "y"]);
    assert_eq!(v.take_events(), vec![PageEvent::SettledPage(0)]);
}

// ── Hit testing ──────────────────────────────────────────────────────

#[test]
fn hit_test_finds_titles_and_pages() {
    let mut v = view();
    assert_eq!(v.hit_test(150.0, 20.0), Some(PageHit::Title(1)));
    assert_eq!(v.hit_test(150.0, 100.0), Some(PageHit::Content(0)));
    assert_eq!(v.hit_test(150.0, 300.0), None);
    v.scroll_page(1, false);
    assert_eq!(v.hit_test(10.0, 100.0), Some(PageHit::Content(1)));
}

// ── Observer ─────────────────────────────────────────────────────────

#[derive(Default)]
struct Recorder {
    settled: Vec<usize>,
    selected: Vec<String>,
}

impl PageObserver for Recorder {
    fn on_settled_page(&mut self, index: usize) {
        self.settled.push(index);
    }

    fn on_tab_selected(&mut self, title: &str, _index: usize) {
        self.selected.push(title.to_string());
    }
}

#[test]
fn dispatch_drains_events_into_observer() {
    let mut v = view();
    v.scroll_page(1, false);
    let mut recorder = Recorder::default();
    v.dispatch_events(&mut recorder);
    assert_eq!(recorder.settled, vec![1]);
    assert_eq!(recorder.selected, vec!["b".to_string()]);
    assert!(v.take_events().is_empty());
}
