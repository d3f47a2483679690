use std::time::Duration;

use tracing::debug;

/// Single-shot timer handle. Arming replaces whatever was pending.
#[derive(Debug, Default)]
pub struct AutoplayTimer {
    remaining: Option<Duration>,
}

impl AutoplayTimer {
    pub fn arm(&mut self, delay: Duration) {
        debug!(delay_ms = delay.as_millis() as u64, "autoplay armed");
        self.remaining = Some(delay);
    }

    pub fn cancel(&mut self) {
        if self.remaining.take().is_some() {
            debug!("autoplay cancelled");
        }
    }

    pub fn remaining(&self) -> Option<Duration> {
        self.remaining
    }

    /// Advance the clock; returns true exactly once, when the delay elapses.
    pub fn advance(&mut self, dt: Duration) -> bool {
        let Some(remaining) = self.remaining else {
            return false;
        };
        if dt >= remaining {
            self.remaining = None;
            debug!("autoplay fired");
            true
        } else {
            self.remaining = Some(remaining - dt);
            false
        }
    }
}

/// Whether autoplay should keep advancing from `index`.
pub fn should_advance(autoplay: bool, infinite: bool, index: usize, count: usize) -> bool {
    autoplay && count > 1 && (infinite || index + 1 < count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_when_delay_elapses() {
        let mut timer = AutoplayTimer::default();
        timer.arm(Duration::from_millis(3000));
        assert!(!timer.advance(Duration::from_millis(2999)));
        assert!(timer.advance(Duration::from_millis(1)));
        assert_eq!(timer.remaining(), None);
        assert!(!timer.advance(Duration::from_millis(5000)));
    }

    #[test]
    fn rearming_replaces_the_pending_delay() {
        let mut timer = AutoplayTimer::default();
        timer.arm(Duration::from_millis(100));
        timer.advance(Duration::from_millis(90));
        timer.arm(Duration::from_millis(100));
        assert_eq!(timer.remaining(), Some(Duration::from_millis(100)));
    }

    #[test]
    fn cancelled_timer_never_fires() {
        let mut timer = AutoplayTimer::default();
        timer.arm(Duration::from_millis(10));
        timer.cancel();
        assert!(!timer.advance(Duration::from_secs(1)));
    }

    #[test]
    fn advancing_stops_at_the_last_slide_unless_infinite() {
        assert!(should_advance(true, false, 0, 3));
        assert!(!should_advance(true, false, 2, 3));
        assert!(should_advance(true, true, 2, 3));
        assert!(!should_advance(false, true, 0, 3));
        assert!(!should_advance(true, true, 0, 1));
        assert!(!should_advance(true, true, 0, 0));
    }
}
