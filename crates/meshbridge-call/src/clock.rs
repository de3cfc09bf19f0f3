use std::time::Instant;

/// Time source for deadline bookkeeping.
///
/// The registry never sleeps or schedules; it only compares deadlines
/// against `now()` during its lazy sweep, so a fake clock is enough to test
/// every timeout path.
pub trait Clock {
    fn now(&self) -> Instant;
}

/// The real wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}
