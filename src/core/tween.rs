use std::time::{Duration, Instant};

/// Quadratic ease-out: fast start, smooth deceleration.
pub fn ease_out(t: f32) -> f32 {
    1.0 - (1.0 - t) * (1.0 - t)
}

/// A time-based interpolation between two values of `T`.
///
/// The host's animation driver owns the clock: a tween starts counting on the
/// first [`Tween::sample`] call, so components can start one without knowing
/// the current time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween<T> {
    pub from: T,
    pub to: T,
    duration: Duration,
    started: Option<Instant>,
}

impl<T: Copy> Tween<T> {
    pub fn new(from: T, to: T, duration: Duration) -> Self {
        Self {
            from,
            to,
            duration,
            started: None,
        }
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Returns the linear progress in `[0, 1]` at `now`.
    ///
    /// The first call stamps the start time and returns 0 (or 1 for a
    /// zero-length tween).
    pub fn progress(&mut self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let started = *self.started.get_or_insert(now);
        let elapsed = now.saturating_duration_since(started);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    /// Samples the eased value at `now` with the given mixing function.
    /// Returns the value and whether the tween has finished.
    pub fn sample(&mut self, now: Instant, mix: impl Fn(T, T, f32) -> T) -> (T, bool) {
        let t = self.progress(now);
        if t >= 1.0 {
            return (self.to, true);
        }
        (mix(self.from, self.to, ease_out(t)), false)
    }
}

pub fn mix_f32(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}
