use std::time::Duration;

/// Accumulates frame time and decides when the snake should take its next
/// step.
///
/// At most one step fires per [`advance()`][SimClock::advance] call, no
/// matter how many intervals the frame's `dt` covers, and any surplus time
/// is discarded when a step fires.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct SimClock {
    accumulated: Duration,
    interval: Duration,
}

impl SimClock {
    pub(crate) fn new(interval: Duration) -> SimClock {
        SimClock {
            accumulated: Duration::ZERO,
            interval,
        }
    }

    /// Add `dt` to the accumulated time.  Returns `true` (and zeroes the
    /// accumulator) if a step is due.
    pub(crate) fn advance(&mut self, dt: Duration) -> bool {
        self.accumulated = self.accumulated.saturating_add(dt);
        if self.accumulated >= self.interval {
            self.accumulated = Duration::ZERO;
            true
        } else {
            false
        }
    }

    pub(crate) fn set_interval(&mut self, interval: Duration) {
        self.interval = interval;
    }

    pub(crate) fn interval(&self) -> Duration {
        self.interval
    }

    #[cfg(test)]
    pub(crate) fn accumulated(&self) -> Duration {
        self.accumulated
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn fires_once_interval_is_crossed() {
        let mut clock = SimClock::new(ms(300));
        assert!(!clock.advance(ms(100)));
        assert!(!clock.advance(ms(100)));
        assert_eq!(clock.accumulated(), ms(200));
        assert!(clock.advance(ms(100)));
        assert_eq!(clock.accumulated(), Duration::ZERO);
        assert!(!clock.advance(ms(299)));
        assert!(clock.advance(ms(1)));
    }

    #[rstest]
    #[case(ms(300))]
    #[case(ms(301))]
    #[case(ms(5000))]
    fn no_catch_up_stepping(#[case] dt: Duration) {
        let mut clock = SimClock::new(ms(300));
        assert!(clock.advance(dt));
        assert!(clock.accumulated() < clock.interval());
        assert!(!clock.advance(Duration::ZERO));
    }

    #[test]
    fn shorter_interval_applies_to_pending_time() {
        let mut clock = SimClock::new(ms(300));
        assert!(!clock.advance(ms(250)));
        clock.set_interval(ms(200));
        assert_eq!(clock.interval(), ms(200));
        assert!(clock.advance(Duration::ZERO));
    }
}
