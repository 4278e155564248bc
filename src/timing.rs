// ⏱ Timing Primitives - Debounce, repeating intervals, one-shot delays
// All driven by an Instant passed in from the host tick, never ambient time,
// so every schedule is testable with plain arithmetic.

use std::time::{Duration, Instant};

// ============================================================================
// DEBOUNCER
// ============================================================================

/// Trailing-edge debounce: each trigger reschedules the deadline to
/// `now + window` (last write wins); `poll` fires once when the quiet
/// period has elapsed.
#[derive(Debug, Clone)]
pub struct Debouncer {
    window: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    pub fn new(window: Duration) -> Self {
        Debouncer {
            window,
            deadline: None,
        }
    }

    /// Record a triggering event, cancelling any pending deadline.
    pub fn trigger(&mut self, now: Instant) {
        self.deadline = Some(now + self.window);
    }

    /// True exactly once per burst, when the window has elapsed since the
    /// last trigger.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }
}

// ============================================================================
// INTERVAL
// ============================================================================

/// Fixed-period repeating timer. The next deadline always advances by whole
/// periods from the previous one, so a late host tick catches up instead of
/// drifting.
#[derive(Debug, Clone)]
pub struct Interval {
    period: Duration,
    next: Instant,
}

impl Interval {
    pub fn new(now: Instant, period: Duration) -> Self {
        Interval {
            period,
            next: now + period,
        }
    }

    /// Number of periods elapsed since the last poll.
    pub fn poll(&mut self, now: Instant) -> u32 {
        let mut elapsed = 0;
        while self.next <= now {
            self.next += self.period;
            elapsed += 1;
        }
        elapsed
    }
}

// ============================================================================
// DELAY
// ============================================================================

/// One-shot delay; `poll` returns true exactly once.
#[derive(Debug, Clone)]
pub struct Delay {
    at: Instant,
    fired: bool,
}

impl Delay {
    pub fn new(at: Instant) -> Self {
        Delay { at, fired: false }
    }

    pub fn after(now: Instant, delay: Duration) -> Self {
        Delay::new(now + delay)
    }

    pub fn poll(&mut self, now: Instant) -> bool {
        if !self.fired && now >= self.at {
            self.fired = true;
            true
        } else {
            false
        }
    }

    pub fn is_fired(&self) -> bool {
        self.fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debounce_fires_once_after_quiet_period() {
        let t0 = Instant::now();
        let mut debounce = Debouncer::new(Duration::from_millis(16));

        debounce.trigger(t0);
        assert!(!debounce.poll(t0 + Duration::from_millis(10)));
        assert!(debounce.poll(t0 + Duration::from_millis(16)));
        // Quiet afterwards
        assert!(!debounce.poll(t0 + Duration::from_millis(100)));
    }

    #[test]
    fn test_debounce_burst_times_from_last_event() {
        let t0 = Instant::now();
        let mut debounce = Debouncer::new(Duration::from_millis(16));

        // N events inside the window: at most one firing, measured from
        // the last trigger
        for ms in [0u64, 4, 8, 12] {
            debounce.trigger(t0 + Duration::from_millis(ms));
        }
        assert!(!debounce.poll(t0 + Duration::from_millis(20)));
        assert!(debounce.poll(t0 + Duration::from_millis(28)));
        assert!(!debounce.poll(t0 + Duration::from_millis(60)));
    }

    #[test]
    fn test_interval_catches_up_on_late_poll() {
        let t0 = Instant::now();
        let mut interval = Interval::new(t0, Duration::from_millis(20));

        assert_eq!(interval.poll(t0 + Duration::from_millis(10)), 0);
        assert_eq!(interval.poll(t0 + Duration::from_millis(20)), 1);
        // Host stalled for three periods
        assert_eq!(interval.poll(t0 + Duration::from_millis(85)), 3);
        assert_eq!(interval.poll(t0 + Duration::from_millis(85)), 0);
    }

    #[test]
    fn test_delay_is_one_shot() {
        let t0 = Instant::now();
        let mut delay = Delay::after(t0, Duration::from_millis(300));

        assert!(!delay.poll(t0 + Duration::from_millis(299)));
        assert!(delay.poll(t0 + Duration::from_millis(300)));
        assert!(!delay.poll(t0 + Duration::from_millis(400)));
        assert!(delay.is_fired());
    }
}
