use std::time::Duration;

use tracing::debug;

use crate::easing::Easing;
use crate::render::RenderTarget;
use crate::state::TransitionState;
use crate::tween::{Tween, ZoomValue};

/// Parameters shared by every transition of one widget.
#[derive(Debug, Clone, Copy)]
pub struct TransitionParams {
    pub easing: Easing,
    pub scale: f32,
    pub duration: Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Completed {
    pub from: usize,
    pub to: usize,
}

#[derive(Debug)]
struct InFlight {
    from: usize,
    to: usize,
    tween: Tween,
}

/// Cross-fades from the current panel to a target panel while zooming the
/// outgoing one. At most one transition runs at a time.
#[derive(Debug, Default)]
pub struct TransitionEngine {
    in_flight: Option<InFlight>,
}

impl TransitionEngine {
    pub fn state(&self) -> TransitionState {
        match self.in_flight {
            Some(_) => TransitionState::Animating,
            None => TransitionState::Idle,
        }
    }

    /// Start a transition from `from` to `to`.
    ///
    /// Returns the accepted target, which is `to` coerced to 0 when no such
    /// panel is rendered. Returns `None` when a transition is already in
    /// flight or there are no panels at all.
    pub fn request<T: RenderTarget>(
        &mut self,
        from: usize,
        to: usize,
        params: TransitionParams,
        target: &T,
    ) -> Option<usize> {
        if let Some(running) = &self.in_flight {
            debug!(requested = to, running = running.to, "transition dropped, one is in flight");
            return None;
        }
        let count = target.panel_count();
        if count == 0 {
            return None;
        }
        let to = if to < count { to } else { 0 };

        debug!(from, to, "transition started");
        self.in_flight = Some(InFlight {
            from,
            to,
            tween: Tween::new(
                params.easing,
                ZoomValue::START,
                ZoomValue::target(params.scale),
                params.duration,
            ),
        });
        Some(to)
    }

    /// Advance the running transition by one frame.
    pub fn step<T: RenderTarget>(&mut self, dt: Duration, target: &mut T) -> Option<Completed> {
        let running = self.in_flight.as_mut()?;
        let value = running.tween.apply(dt);

        target.set_opacity(running.to, value.opacity);
        target.set_opacity(running.from, 1.0 - value.opacity);
        target.set_scale(running.from, value.scale);

        if !running.tween.is_finished() {
            return None;
        }

        let (from, to) = (running.from, running.to);
        self.in_flight = None;
        target.set_scale(from, 1.0);
        debug!(from, to, "transition completed");
        Some(Completed { from, to })
    }

    /// Drop the running transition without committing it.
    pub fn cancel(&mut self) {
        if let Some(running) = self.in_flight.take() {
            debug!(from = running.from, to = running.to, "transition cancelled");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::MemoryTarget;

    fn params(duration_ms: u64) -> TransitionParams {
        TransitionParams {
            easing: Easing::Linear,
            scale: 1.5,
            duration: Duration::from_millis(duration_ms),
        }
    }

    #[test]
    fn second_request_is_dropped_while_animating() {
        let mut target = MemoryTarget::new(3);
        let mut engine = TransitionEngine::default();
        assert_eq!(engine.request(0, 1, params(100), &target), Some(1));
        assert_eq!(engine.request(0, 2, params(100), &target), None);
        assert_eq!(engine.state(), TransitionState::Animating);
        assert_eq!(
            engine.step(Duration::from_millis(100), &mut target),
            Some(Completed { from: 0, to: 1 })
        );
    }

    #[test]
    fn unknown_target_is_coerced_to_first_panel() {
        let target = MemoryTarget::new(3);
        let mut engine = TransitionEngine::default();
        assert_eq!(engine.request(1, 7, params(100), &target), Some(0));
    }

    #[test]
    fn empty_target_never_animates() {
        let target = MemoryTarget::new(0);
        let mut engine = TransitionEngine::default();
        assert_eq!(engine.request(0, 0, params(100), &target), None);
        assert_eq!(engine.state(), TransitionState::Idle);
    }

    #[test]
    fn frames_cross_fade_and_zoom_the_outgoing_panel() {
        let mut target = MemoryTarget::new(2);
        let mut engine = TransitionEngine::default();
        engine.request(0, 1, params(1000), &target);

        assert_eq!(engine.step(Duration::from_millis(500), &mut target), None);
        let outgoing = target.panel(0).copied().unwrap_or_default();
        let incoming = target.panel(1).copied().unwrap_or_default();
        assert!((incoming.opacity - 0.5).abs() < 1e-4);
        assert!((outgoing.opacity - 0.5).abs() < 1e-4);
        assert!((outgoing.scale - 1.25).abs() < 1e-4);
        assert_eq!(incoming.scale, 1.0);
    }

    #[test]
    fn completion_resets_outgoing_scale() {
        let mut target = MemoryTarget::new(2);
        let mut engine = TransitionEngine::default();
        engine.request(0, 1, params(100), &target);

        let done = engine.step(Duration::from_millis(150), &mut target);
        assert_eq!(done, Some(Completed { from: 0, to: 1 }));
        assert_eq!(target.panel(0).map(|p| p.scale), Some(1.0));
        assert_eq!(target.panel(0).map(|p| p.opacity), Some(0.0));
        assert_eq!(target.panel(1).map(|p| p.opacity), Some(1.0));
        assert_eq!(engine.state(), TransitionState::Idle);
    }

    #[test]
    fn cancel_discards_the_transition() {
        let mut target = MemoryTarget::new(2);
        let mut engine = TransitionEngine::default();
        engine.request(0, 1, params(100), &target);
        engine.cancel();
        assert_eq!(engine.step(Duration::from_millis(150), &mut target), None);
        assert_eq!(engine.state(), TransitionState::Idle);
    }
}
