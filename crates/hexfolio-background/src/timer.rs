//! Fixed-interval timers polled from the frame loop.

/// Most ticks a single poll will report after a stall.
const MAX_CATCH_UP: u32 = 8;

/// A repeating timer driven by an externally supplied clock.
///
/// The timer never sleeps; the owner polls it with the current time in
/// milliseconds and receives the number of periods that elapsed.
#[derive(Debug, Clone)]
pub struct IntervalTimer {
    /// Length of one period.
    period_ms: u64,
    /// Time of the next tick, `None` while stopped.
    next_due_ms: Option<u64>,
}

impl IntervalTimer {
    /// Create a stopped timer. Periods below 1 ms are raised to 1 ms.
    pub fn new(period_ms: u64) -> Self {
        Self {
            period_ms: period_ms.max(1),
            next_due_ms: None,
        }
    }

    pub fn period_ms(&self) -> u64 {
        self.period_ms
    }

    /// Start (or restart) the timer; the first tick is one period from `now_ms`.
    pub fn start(&mut self, now_ms: u64) {
        self.next_due_ms = Some(now_ms.saturating_add(self.period_ms));
    }

    pub fn stop(&mut self) {
        self.next_due_ms = None;
    }

    pub fn is_running(&self) -> bool {
        self.next_due_ms.is_some()
    }

    /// Change the period. A running timer keeps its next deadline.
    pub fn set_period(&mut self, period_ms: u64) {
        self.period_ms = period_ms.max(1);
    }

    /// Number of ticks due at `now_ms`, capped at a small catch-up limit.
    pub fn poll(&mut self, now_ms: u64) -> u32 {
        let Some(due) = self.next_due_ms else {
            return 0;
        };
        if now_ms < due {
            return 0;
        }

        let elapsed = (now_ms - due) / self.period_ms + 1;
        self.next_due_ms = Some(due.saturating_add(elapsed.saturating_mul(self.period_ms)));
        elapsed.min(MAX_CATCH_UP as u64) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stopped_timer_never_ticks() {
        let mut timer = IntervalTimer::new(30);
        assert!(!timer.is_running());
        assert_eq!(timer.poll(1_000), 0);
    }

    #[test]
    fn test_ticks_on_period() {
        let mut timer = IntervalTimer::new(30);
        timer.start(0);
        assert_eq!(timer.poll(29), 0);
        assert_eq!(timer.poll(30), 1);
        assert_eq!(timer.poll(59), 0);
        assert_eq!(timer.poll(95), 2);
        assert_eq!(timer.poll(119), 0);
        assert_eq!(timer.poll(120), 1);
    }

    #[test]
    fn test_catch_up_is_capped() {
        let mut timer = IntervalTimer::new(10);
        timer.start(0);
        assert_eq!(timer.poll(10_000), MAX_CATCH_UP);
        // The missed ticks are dropped, not queued
        assert_eq!(timer.poll(10_005), 0);
        assert_eq!(timer.poll(10_010), 1);
    }

    #[test]
    fn test_stop_cancels_pending_ticks() {
        let mut timer = IntervalTimer::new(50);
        timer.start(0);
        timer.stop();
        assert_eq!(timer.poll(500), 0);
        timer.start(500);
        assert_eq!(timer.poll(550), 1);
    }

    #[test]
    fn test_zero_period_is_raised() {
        let timer = IntervalTimer::new(0);
        assert_eq!(timer.period_ms(), 1);
    }
}
