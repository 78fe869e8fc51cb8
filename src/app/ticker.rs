//! Cancellable periodic deadline
//!
//! The animation does not own a thread or a timer. The event loop asks the
//! ticker for its next deadline, sleeps until then and calls [`Ticker::fire`].
//! At most one deadline is pending at any time.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct Ticker {
    interval: Duration,
    deadline: Option<Instant>,
}

impl Ticker {
    /// Create an idle ticker
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            deadline: None,
        }
    }

    /// Start ticking one interval from `now`, replacing any pending deadline
    pub fn schedule(&mut self, now: Instant) {
        self.cancel();
        self.deadline = Some(now + self.interval);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Change the period; a running ticker restarts from `now`
    pub fn set_interval(&mut self, interval: Duration, now: Instant) {
        self.interval = interval;
        if self.is_active() {
            self.schedule(now);
        }
    }

    pub fn is_active(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Returns true when the pending deadline has passed, and moves it on
    ///
    /// A ticker that fell more than one interval behind skips the missed
    /// ticks instead of firing them back to back.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if deadline <= now => {
                let next = deadline + self.interval;
                self.deadline = Some(if next <= now { now + self.interval } else { next });
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn test_idle_ticker_never_fires() {
        let mut ticker = Ticker::new(10 * MS);
        assert!(!ticker.is_active());
        assert!(!ticker.fire(Instant::now() + 100 * MS));
    }

    #[test]
    fn test_fire_advances_deadline() {
        let start = Instant::now();
        let mut ticker = Ticker::new(10 * MS);
        ticker.schedule(start);
        assert_eq!(ticker.deadline(), Some(start + 10 * MS));

        assert!(!ticker.fire(start + 5 * MS));
        assert!(ticker.fire(start + 10 * MS));
        assert_eq!(ticker.deadline(), Some(start + 20 * MS));
        assert!(!ticker.fire(start + 15 * MS));
    }

    #[test]
    fn test_lagging_ticker_skips_missed_ticks() {
        let start = Instant::now();
        let mut ticker = Ticker::new(10 * MS);
        ticker.schedule(start);
        assert!(ticker.fire(start + 55 * MS));
        assert_eq!(ticker.deadline(), Some(start + 65 * MS));
    }

    #[test]
    fn test_schedule_replaces_pending_deadline() {
        let start = Instant::now();
        let mut ticker = Ticker::new(10 * MS);
        ticker.schedule(start);
        ticker.schedule(start + 3 * MS);
        assert_eq!(ticker.deadline(), Some(start + 13 * MS));
        ticker.cancel();
        assert!(!ticker.is_active());
    }

    #[test]
    fn test_set_interval() {
        let start = Instant::now();
        let mut ticker = Ticker::new(10 * MS);
        ticker.set_interval(20 * MS, start);
        assert!(!ticker.is_active());
        assert_eq!(ticker.interval(), 20 * MS);

        ticker.schedule(start);
        ticker.set_interval(5 * MS, start + MS);
        assert_eq!(ticker.deadline(), Some(start + 6 * MS));
    }
}
