use std::time::{Duration, Instant};

use crate::core::{Rect, Tween};

/// Duration of the cursor slide after a title is selected.
pub const SELECT_ANIMATION_DURATION: Duration = Duration::from_millis(300);

/// Duration of the label-surface scroll that centers the selected title.
pub const CENTER_ANIMATION_DURATION: Duration = Duration::from_millis(300);

/// An in-flight select-animation: the cursor slides from the old title to
/// the new one, then colors snap and the selection event fires.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectAnimation {
    pub old_index: usize,
    pub new_index: usize,
    cursor: Tween<Rect>,
}

impl SelectAnimation {
    pub fn new(old_index: usize, new_index: usize, from: Rect, to: Rect, animated: bool) -> Self {
        let duration = if animated {
            SELECT_ANIMATION_DURATION
        } else {
            Duration::ZERO
        };
        Self {
            old_index,
            new_index,
            cursor: Tween::new(from, to, duration),
        }
    }

    /// Cursor frame at `now`, and whether the slide has finished.
    pub fn sample(&mut self, now: Instant) -> (Rect, bool) {
        self.cursor.sample(now, Rect::lerp)
    }

    /// Cursor frame once the slide completes.
    pub fn target(&self) -> Rect {
        self.cursor.to
    }

    pub fn retarget(&mut self, to: Rect) {
        self.cursor.to = to;
    }

    pub fn is_instant(&self) -> bool {
        self.cursor.duration().is_zero()
    }
}

/// Select-animation state machine.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum SelectPhase {
    #[default]
    Idle,
    Animating(SelectAnimation),
}

impl SelectPhase {
    pub fn is_animating(&self) -> bool {
        matches!(self, SelectPhase::Animating(_))
    }
}
