use std::time::Instant;

use super::{SELECT_ANIMATION_DURATION, SegmentEvent, TabStrip, TitleGradient};
use crate::config::{CursorKind, SegmentStyle};
use crate::core::{Color, Rect};
use crate::host::SegmentObserver;
use crate::text::CellMeasure;

fn titles(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

fn strip_with(width: f32, style: SegmentStyle, names: &[&str]) -> TabStrip {
    TabStrip::new(
        Rect::new(0.0, 0.0, width, 44.0),
        style,
        titles(names),
        Box::new(CellMeasure::new(10.0, Some(17.0))),
    )
}

fn strip(width: f32) -> TabStrip {
    strip_with(width, SegmentStyle::default(), &["a", "b", "c"])
}

fn colors(strip: &TabStrip) -> Vec<Color> {
    strip.tabs().iter().map(|t| t.color).collect()
}

fn selected(index: usize) -> SegmentEvent {
    SegmentEvent::TitleSelected {
        title: ["a", "b", "c"][index].to_string(),
        index,
    }
}

// ── Construction ─────────────────────────────────────────────────────

#[test]
fn new_strip_selects_first_title() {
    let s = strip(300.0);
    assert_eq!(s.current_index(), 0);
    assert_eq!(s.old_index(), 0);
    assert!(s.is_title_selectable());
    assert_eq!(colors(&s), vec![Color::RED, Color::GRAY, Color::GRAY]);
    let cursor = s.cursor().expect("line cursor");
    assert_eq!(cursor.frame, Rect::new(0.0, 42.0, 100.0, 2.0));
}

#[test]
fn empty_titles_have_no_cursor() {
    let mut s = strip_with(300.0, SegmentStyle::default(), &[]);
    assert!(s.is_empty());
    assert!(s.cursor().is_none());
    assert!(s.separators().is_empty());
    s.select_by_index(0, false);
    assert!(s.take_events().is_empty());
}

#[test]
fn narrow_strip_scrolls_with_natural_widths() {
    let s = strip(60.0);
    assert!(s.enable_scroll());
    assert_eq!(s.separators().len(), 2);
    assert_eq!(s.content_width(), 72.0);
    assert!(s.tabs().iter().all(|t| t.frame.w == 10.0));
}

#[test]
fn wide_strip_divides_evenly() {
    let s = strip(300.0);
    assert!(!s.enable_scroll());
    assert!(s.tabs().iter().all(|t| t.frame.w == 100.0));
    assert_eq!(s.content_width(), 300.0);
}

#[test]
fn fit_size_covers_titles_margins_and_separators() {
    let measure = CellMeasure::new(10.0, None);
    let size = TabStrip::fit_size(&titles(&["ab", "c"]), &SegmentStyle::default(), &measure);
    assert_eq!(size.w, 20.0 + 10.0 + 3.0 * 10.0 + 2.0);
    assert_eq!(size.h, 44.0);
}

#[test]
fn mask_cursor_height_follows_point_size() {
    let style = SegmentStyle {
        cursor_type: CursorKind::Mask,
        ..SegmentStyle::default()
    };
    let s = strip_with(60.0, style, &["a", "b", "c"]);
    let cursor = s.cursor().expect("mask cursor");
    assert_eq!(cursor.frame.h, 27.0);
    assert_eq!(cursor.frame.x, 5.0);
    assert_eq!(cursor.frame.w, 20.0);
}

// ── Selection ────────────────────────────────────────────────────────

#[test]
fn immediate_select_fires_one_event() {
    let mut s = strip(300.0);
    s.select_by_index(1, false);
    assert_eq!(s.take_events(), vec![selected(1)]);
    assert_eq!(s.current_index(), 1);
    assert_eq!(s.old_index(), 1);
    assert!(s.is_title_selectable());
    assert!(!s.is_animating());
    assert_eq!(colors(&s), vec![Color::GRAY, Color::RED, Color::GRAY]);
    assert_eq!(s.cursor().map(|c| c.frame.x), Some(101.0));
}

#[test]
fn out_of_range_select_is_ignored() {
    let mut s = strip(300.0);
    s.select_by_index(3, false);
    s.select_by_index(usize::MAX, true);
    assert!(s.take_events().is_empty());
    assert_eq!(s.current_index(), 0);
    assert!(s.is_title_selectable());
}

#[test]
fn selecting_current_title_is_a_no_op() {
    let mut s = strip(300.0);
    s.select_by_index(0, true);
    assert!(s.take_events().is_empty());
    assert!(!s.is_animating());
    assert!(s.is_title_selectable());
}

#[test]
fn animated_select_fires_after_completion() {
    let mut s = strip(300.0);
    s.tap_title(2);
    assert!(s.is_animating());
    assert!(!s.is_title_selectable());
    assert!(s.take_events().is_empty());

    let start = Instant::now();
    assert!(s.tick(start));
    assert_eq!(s.cursor().map(|c| c.frame.x), Some(0.0));
    assert!(s.take_events().is_empty());

    assert!(!s.tick(start + SELECT_ANIMATION_DURATION));
    assert_eq!(s.take_events(), vec![selected(2)]);
    assert_eq!(s.cursor().map(|c| c.frame.x), Some(202.0));
    assert!(s.is_title_selectable());
}

#[test]
fn taps_during_animation_are_ignored() {
    let mut s = strip(300.0);
    s.tap_title(1);
    s.tap_title(2);
    s.finish_animation();
    assert_eq!(s.take_events(), vec![selected(1)]);
    assert_eq!(s.current_index(), 1);
}

#[test]
fn reenabled_selection_cancels_previous_animation() {
    let mut s = strip(300.0);
    s.tap_title(1);
    s.set_title_selectable(true);
    s.select_by_index(2, false);
    assert_eq!(s.take_events(), vec![selected(2)]);
    assert_eq!(colors(&s), vec![Color::GRAY, Color::GRAY, Color::RED]);
}

#[test]
fn reselecting_origin_during_animation_restores_cursor() {
    let mut s = strip(300.0);
    s.tap_title(2);
    s.set_title_selectable(true);
    s.select_by_index(0, false);
    assert!(s.take_events().is_empty());
    assert!(!s.is_animating());
    assert_eq!(s.current_index(), 0);
    assert_eq!(s.cursor().map(|c| c.frame.x), Some(0.0));
}

#[test]
fn select_after_partial_progress_recolors_every_title() {
    let mut s = strip(300.0);
    s.adjust_by_progress(0.5, 0, 1);
    s.select_by_index(2, false);
    assert_eq!(s.take_events(), vec![selected(2)]);
    assert_eq!(colors(&s), vec![Color::GRAY, Color::GRAY, Color::RED]);
    assert_eq!(s.cursor().map(|c| c.frame.x), Some(202.0));
}

#[test]
fn reselecting_origin_after_partial_progress_rests_cursor() {
    let mut s = strip(300.0);
    s.adjust_by_progress(0.5, 0, 1);
    s.select_by_index(0, false);
    assert!(s.take_events().is_empty());
    assert_eq!(s.current_index(), 0);
    assert_eq!(colors(&s), vec![Color::RED, Color::GRAY, Color::GRAY]);
    assert_eq!(s.cursor().map(|c| c.frame.x), Some(0.0));
}

#[test]
fn finish_animation_without_animation_does_nothing() {
    let mut s = strip(300.0);
    s.finish_animation();
    assert!(s.take_events().is_empty());
}

// ── Progress ─────────────────────────────────────────────────────────

#[test]
fn half_progress_interpolates_cursor_and_colors() {
    let mut s = strip(300.0);
    s.adjust_by_progress(0.5, 0, 1);
    let gradient = TitleGradient::from_style(&SegmentStyle::default());
    let tabs = s.tabs();
    assert_eq!(tabs[0].color, gradient.outgoing(0.5));
    assert_eq!(tabs[1].color, gradient.incoming(0.5));
    assert_eq!(s.cursor().map(|c| c.frame.x), Some(50.5));
    assert_eq!(s.old_index(), 0);
    assert_eq!(s.current_index(), 1);
}

#[test]
fn full_progress_matches_selected_geometry() {
    let mut driven = strip(300.0);
    driven.adjust_by_progress(1.0, 0, 1);

    let mut picked = strip(300.0);
    picked.select_by_index(1, false);

    assert_eq!(driven.cursor(), picked.cursor());
    assert_eq!(colors(&driven), colors(&picked));
}

#[test]
fn zero_progress_keeps_origin_geometry() {
    let mut s = strip(300.0);
    let before = s.cursor().copied();
    s.adjust_by_progress(0.0, 0, 1);
    assert_eq!(s.cursor().copied(), before);
    assert_eq!(s.tabs()[0].color, Color::RED);
    assert_eq!(s.tabs()[1].color, Color::GRAY);
}

#[test]
fn invalid_progress_indices_are_ignored() {
    let mut s = strip(300.0);
    let before = s.cursor().copied();
    s.adjust_by_progress(0.5, 0, 7);
    s.adjust_by_progress(0.5, 9, 1);
    assert_eq!(s.cursor().copied(), before);
    assert_eq!(s.current_index(), 0);
}

#[test]
fn gradient_off_keeps_colors_during_progress() {
    let style = SegmentStyle {
        color_gradient: false,
        ..SegmentStyle::default()
    };
    let mut s = strip_with(300.0, style, &["a", "b", "c"]);
    s.adjust_by_progress(0.5, 0, 1);
    assert_eq!(colors(&s), vec![Color::RED, Color::GRAY, Color::GRAY]);
    s.snap_to(1);
    assert_eq!(colors(&s), vec![Color::GRAY, Color::RED, Color::GRAY]);
}

#[test]
fn progress_cancels_animation_silently() {
    let mut s = strip(300.0);
    s.tap_title(2);
    s.adjust_by_progress(0.3, 0, 1);
    assert!(!s.phase().is_animating());
    assert!(s.is_title_selectable());
    s.finish_animation();
    assert!(s.take_events().is_empty());

    s.snap_to(1);
    s.tap_title(2);
    assert!(s.phase().is_animating());
}

#[test]
fn snap_to_completes_animation_and_recolors() {
    let mut s = strip(300.0);
    s.tap_title(1);
    s.snap_to(2);
    assert_eq!(s.take_events(), vec![selected(1)]);
    assert_eq!(s.current_index(), 2);
    assert_eq!(s.old_index(), 2);
    assert_eq!(colors(&s), vec![Color::GRAY, Color::GRAY, Color::RED]);
    assert_eq!(s.cursor().map(|c| c.frame.x), Some(202.0));
}

// ── Scrolling ────────────────────────────────────────────────────────

#[test]
fn center_on_clamps_to_content() {
    let mut s = strip(60.0);
    s.center_on(2, false);
    assert_eq!(s.content_offset_x(), 12.0);
    s.center_on(0, false);
    assert_eq!(s.content_offset_x(), 0.0);
}

#[test]
fn animated_centering_is_driven_by_tick() {
    let mut s = strip(60.0);
    s.center_on(2, true);
    assert_eq!(s.content_offset_x(), 0.0);
    let start = Instant::now();
    assert!(s.tick(start));
    assert!(!s.tick(start + SELECT_ANIMATION_DURATION));
    assert_eq!(s.content_offset_x(), 12.0);
}

#[test]
fn free_scroll_is_clamped() {
    let mut s = strip(60.0);
    s.scroll_titles_by(100.0);
    assert_eq!(s.content_offset_x(), 12.0);
    s.scroll_titles_by(-100.0);
    assert_eq!(s.content_offset_x(), 0.0);
}

#[test]
fn free_scroll_needs_overflow() {
    let mut s = strip(300.0);
    s.scroll_titles_by(40.0);
    assert_eq!(s.content_offset_x(), 0.0);
}

#[test]
fn title_hit_test_accounts_for_scroll() {
    let mut s = strip(60.0);
    assert_eq!(s.title_at(35.0, 10.0), Some(1));
    assert_eq!(s.title_at(27.0, 10.0), None);
    assert_eq!(s.title_at(35.0, 50.0), None);
    s.scroll_titles_by(12.0);
    assert_eq!(s.title_at(45.0, 10.0), Some(2));
}

// ── Reconfiguration ──────────────────────────────────────────────────

#[test]
fn set_titles_resets_selection() {
    let mut s = strip(60.0);
    s.select_by_index(2, false);
    s.take_events();
    s.tap_title(1);
    s.set_titles(titles(&["x", "y"]));
    assert_eq!(s.len(), 2);
    assert_eq!(s.current_index(), 0);
    assert_eq!(s.old_index(), 0);
    assert_eq!(s.content_offset_x(), 0.0);
    assert!(s.is_title_selectable());
    assert!(!s.is_animating());
    s.finish_animation();
    assert!(s.take_events().is_empty());
    assert_eq!(s.titles().collect::<Vec<_>>(), vec!["x", "y"]);
}

#[test]
fn set_frame_relayouts_titles() {
    let mut s = strip(300.0);
    s.set_frame(Rect::new(0.0, 0.0, 60.0, 44.0));
    assert!(s.enable_scroll());
    assert_eq!(s.tabs()[1].frame.x, 31.0);
    assert_eq!(s.cursor().map(|c| c.frame.w), Some(10.0));
}

#[test]
fn set_style_recomputes_gradient() {
    let mut s = strip(300.0);
    let style = SegmentStyle {
        selected_title_color: Color::CYAN,
        ..SegmentStyle::default()
    };
    s.set_style(style);
    assert_eq!(s.tabs()[0].color, Color::CYAN);
    s.select_by_index(1, false);
    assert_eq!(colors(&s), vec![Color::GRAY, Color::CYAN, Color::GRAY]);
}

// ── Observer ─────────────────────────────────────────────────────────

#[derive(Default)]
struct Recorder(Vec<(String, usize)>);

impl SegmentObserver for Recorder {
    fn on_title_selected(&mut self, title: &str, index: usize) {
        self.0.push((title.to_string(), index));
    }
}

#[test]
fn events_dispatch_to_observer() {
    let mut s = strip(300.0);
    s.select_by_index(1, false);
    let mut recorder = Recorder::default();
    for event in s.take_events() {
        event.dispatch(&mut recorder);
    }
    assert_eq!(recorder.0, vec![("b".to_string(), 1)]);
}
