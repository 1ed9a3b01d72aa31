//! Easing curves and time-based interpolation
//!
//! The controller only decides *when* the toast changes shape or position.
//! These helpers turn those decisions into smooth values for a renderer.

use std::time::{Duration, Instant};

/// Easing function type: takes progress (0.0 to 1.0) and returns eased value (0.0 to 1.0)
pub type EasingFn = fn(f32) -> f32;

/// Linear interpolation (no easing)
pub fn linear(t: f32) -> f32 {
    t
}

/// Material "fast out, slow in": `cubic-bezier(0.4, 0.0, 0.2, 1.0)`
pub fn fast_out_slow_in(t: f32) -> f32 {
    cubic_bezier(0.4, 0.0, 0.2, 1.0, t)
}

/// Evaluate a CSS-style cubic bezier easing curve at `x`
///
/// The end points are fixed at (0, 0) and (1, 1). `x1` and `x2` must lie in
/// [0, 1] so the curve is monotonic in x.
pub fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, x: f32) -> f32 {
    let x = x.clamp(0.0, 1.0);
    if x == 0.0 || x == 1.0 {
        return x;
    }

    let sample = |a1: f32, a2: f32, t: f32| {
        let mt = 1.0 - t;
        3.0 * mt * mt * t * a1 + 3.0 * mt * t * t * a2 + t * t * t
    };
    let slope = |a1: f32, a2: f32, t: f32| {
        let mt = 1.0 - t;
        3.0 * mt * mt * a1 + 6.0 * mt * t * (a2 - a1) + 3.0 * t * t * (1.0 - a2)
    };

    // Newton first, bisection when the slope is too flat to trust
    let mut t = x;
    for _ in 0..8 {
        let err = sample(x1, x2, t) - x;
        if err.abs() < 1e-6 {
            return sample(y1, y2, t);
        }
        let d = slope(x1, x2, t);
        if d.abs() < 1e-6 {
            break;
        }
        t = (t - err / d).clamp(0.0, 1.0);
    }

    let (mut lo, mut hi) = (0.0_f32, 1.0_f32);
    t = x;
    for _ in 0..32 {
        let value = sample(x1, x2, t);
        if (value - x).abs() < 1e-6 {
            break;
        }
        if value < x {
            lo = t;
        } else {
            hi = t;
        }
        t = (lo + hi) * 0.5;
    }
    sample(y1, y2, t)
}

/// Linearly interpolate between two f32 values
pub fn lerp_f32(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Transition configuration
///
/// Defines how long a transition takes and what easing function to use.
#[derive(Debug, Clone, Copy)]
pub struct Transition {
    pub duration: Duration,
    pub easing: EasingFn,
}

impl Transition {
    pub const fn new(duration: Duration, easing: EasingFn) -> Self {
        Self { duration, easing }
    }

    /// No animation
    pub const fn instant() -> Self {
        Self::new(Duration::ZERO, linear)
    }

    /// Eased progress after `elapsed`, clamped to [0, 1]
    pub fn progress(&self, elapsed: Duration) -> f32 {
        if self.duration.is_zero() || elapsed >= self.duration {
            return 1.0;
        }
        let raw = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        (self.easing)(raw.clamp(0.0, 1.0))
    }
}

/// A scalar animating from one value to another starting at a fixed instant
#[derive(Debug, Clone, Copy)]
pub struct Tween {
    from: f32,
    to: f32,
    start: Instant,
    transition: Transition,
}

impl Tween {
    pub fn new(from: f32, to: f32, start: Instant, transition: Transition) -> Self {
        Self {
            from,
            to,
            start,
            transition,
        }
    }

    /// A tween that already sits at `value`
    pub fn settled(value: f32, now: Instant) -> Self {
        Self::new(value, value, now, Transition::instant())
    }

    /// Retarget from wherever the tween is at `now`
    ///
    /// Interrupting a running animation starts the new one from the current
    /// value, so nothing jumps.
    pub fn retarget(&mut self, to: f32, now: Instant, transition: Transition) {
        let from = self.value_at(now);
        *self = Self::new(from, to, now, transition);
    }

    pub fn value_at(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.start);
        lerp_f32(self.from, self.to, self.transition.progress(elapsed))
    }

    pub fn target(&self) -> f32 {
        self.to
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.start) >= self.transition.duration
    }
}
