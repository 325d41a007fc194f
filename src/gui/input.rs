use std::time::Instant;

use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, KeyEvent, MouseButton, MouseScrollDelta};
use winit::keyboard::{Key, NamedKey};

use tabpager::page::PageHit;

use super::state::{DemoWindow, DragTracker, PointerState};

/// Pixels scrolled per wheel line.
const LINE_SCROLL_PX: f32 = 40.0;

impl DemoWindow {
    pub(super) fn on_cursor_moved(&mut self, position: PhysicalPosition<f64>) -> bool {
        self.mouse_pos = (position.x, position.y);
        let PointerState::Dragging(tracker) = &mut self.pointer else {
            return false;
        };
        let dx = tracker.update(position.x, Instant::now());
        self.view.drag_by(dx);
        true
    }

    pub(super) fn on_mouse_input(&mut self, state: ElementState, button: MouseButton) {
        if button != MouseButton::Left {
            return;
        }
        let (x, y) = self.mouse_pos;
        let hit = self.view.hit_test(x as f32, y as f32);

        match state {
            ElementState::Pressed => {
                self.pointer = match hit {
                    Some(PageHit::Title(index)) => PointerState::PressedTitle(index),
                    Some(PageHit::Content(_)) if self.view.content().is_scroll_enabled() => {
                        self.view.begin_drag();
                        PointerState::Dragging(DragTracker::new(x, Instant::now()))
                    }
                    _ => PointerState::Idle,
                };
            }
            ElementState::Released => {
                match std::mem::replace(&mut self.pointer, PointerState::Idle) {
                    PointerState::PressedTitle(index) if hit == Some(PageHit::Title(index)) => {
                        self.view.tap_title(index);
                    }
                    PointerState::Dragging(tracker) => self.view.end_drag(tracker.velocity()),
                    _ => {}
                }
            }
        }
    }

    /// Wheel over the strip scrolls overflowing titles.
    pub(super) fn on_mouse_wheel(&mut self, delta: MouseScrollDelta) {
        let (x, y) = self.mouse_pos;
        if !self.view.segment().frame().contains(x as f32, y as f32) {
            return;
        }
        let dx = match delta {
            MouseScrollDelta::LineDelta(dx, dy) => {
                let lines = if dx != 0.0 { dx } else { dy };
                -lines * LINE_SCROLL_PX
            }
            MouseScrollDelta::PixelDelta(pos) => -(if pos.x != 0.0 { pos.x } else { pos.y }) as f32,
        };
        self.view.scroll_titles_by(dx);
    }

    /// Returns whether the key changed anything visible.
    pub(super) fn on_keyboard_input(&mut self, event: &KeyEvent) -> bool {
        if event.state != ElementState::Pressed {
            return false;
        }
        let current = self.view.current_index();
        match &event.logical_key {
            Key::Named(NamedKey::ArrowRight) => self.view.scroll_page(current + 1, true),
            Key::Named(NamedKey::ArrowLeft) => {
                if let Some(index) = current.checked_sub(1) {
                    self.view.scroll_page(index, true);
                }
            }
            Key::Character(text) => match text.as_str() {
                "h" => {
                    let hide = !self.view.is_segment_hidden();
                    self.view.set_hide_segment(hide);
                }
                "s" => {
                    let enabled = !self.view.content().is_scroll_enabled();
                    log::info!("content scrolling {}", if enabled { "on" } else { "off" });
                    self.view.set_scroll_enabled(enabled);
                }
                "r" => self.reset_reversed(),
                digit => match digit.parse::<usize>() {
                    Ok(n) if n > 0 => self.view.scroll_page(n - 1, true),
                    _ => return false,
                },
            },
            _ => return false,
        }
        true
    }
}
