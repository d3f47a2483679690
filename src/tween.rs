use std::time::Duration;

use crate::easing::Easing;

/// Interpolated state of a fade-zoom transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomValue {
    pub opacity: f32,
    pub scale: f32,
}

impl ZoomValue {
    pub const START: ZoomValue = ZoomValue { opacity: 0.0, scale: 1.0 };

    pub fn target(scale: f32) -> Self {
        Self { opacity: 1.0, scale }
    }

    fn lerp(self, to: ZoomValue, t: f32) -> ZoomValue {
        ZoomValue {
            opacity: self.opacity + (to.opacity - self.opacity) * t,
            scale: self.scale + (to.scale - self.scale) * t,
        }
    }
}

/// A single interpolation from one `ZoomValue` to another.
///
/// Driven by frame deltas: `apply(dt)` advances the clock and returns the
/// value for that frame. Once the clock passes `duration` the tween yields
/// exactly `to`.
#[derive(Debug, Clone)]
pub struct Tween {
    easing: Easing,
    from: ZoomValue,
    to: ZoomValue,
    duration: Duration,
    elapsed: Duration,
}

impl Tween {
    pub fn new(easing: Easing, from: ZoomValue, to: ZoomValue, duration: Duration) -> Self {
        Self {
            easing,
            from,
            to,
            duration,
            elapsed: Duration::ZERO,
        }
    }

    pub fn apply(&mut self, dt: Duration) -> ZoomValue {
        self.elapsed = self.elapsed.saturating_add(dt);
        self.value()
    }

    pub fn value(&self) -> ZoomValue {
        if self.is_finished() {
            return self.to;
        }
        let t = self.easing.apply(self.elapsed.as_secs_f32() / self.duration.as_secs_f32());
        self.from.lerp(self.to, t)
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Lazily sample the rest of the tween at a fixed frame step.
    ///
    /// The sequence is time-ordered and its last element is exactly the
    /// target value. Dropping the iterator cancels the animation.
    pub fn frames(self, step: Duration) -> Frames {
        Frames { tween: self, step, done: false }
    }
}

pub struct Frames {
    tween: Tween,
    step: Duration,
    done: bool,
}

impl Iterator for Frames {
    type Item = ZoomValue;

    fn next(&mut self) -> Option<ZoomValue> {
        if self.done {
            return None;
        }
        // A zero step would never reach the end.
        let value = if self.step.is_zero() {
            self.tween.elapsed = self.tween.duration;
            self.tween.value()
        } else {
            self.tween.apply(self.step)
        };
        self.done = self.tween.is_finished();
        Some(value)
    }
}
