//! Clock providers.

use chrono::{DateTime, Duration, Utc};
use parking_lot::Mutex;

/// Source of the current time, injected into the service.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time via `Utc::now()`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SystemClock {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Deterministic clock that advances by a fixed step on every call.
///
/// The first call returns `start`, the next `start + step`, and so on, so
/// successive timestamps are strictly increasing whenever `step` is positive.
#[derive(Debug)]
pub struct StepClock {
    next: Mutex<DateTime<Utc>>,
    step: Duration,
}

impl StepClock {
    #[must_use]
    pub const fn new(start: DateTime<Utc>, step: Duration) -> Self {
        Self {
            next: Mutex::new(start),
            step,
        }
    }

    /// A clock starting at the Unix epoch plus one day, stepping one second.
    #[must_use]
    pub fn seconds() -> Self {
        Self::new(
            DateTime::<Utc>::UNIX_EPOCH + Duration::days(1),
            Duration::seconds(1),
        )
    }

    /// The value the next call to [`Clock::now`] will return.
    #[must_use]
    pub fn peek(&self) -> DateTime<Utc> {
        *self.next.lock()
    }
}

impl Clock for StepClock {
    fn now(&self) -> DateTime<Utc> {
        let mut next = self.next.lock();
        let now = *next;
        *next = now + self.step;
        now
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_clock_advances_each_call() {
        let clock = StepClock::seconds();
        let first = clock.now();
        let second = clock.now();
        assert_eq!(second - first, Duration::seconds(1));
        assert_eq!(clock.peek(), second + Duration::seconds(1));
        assert!(first > DateTime::<Utc>::UNIX_EPOCH);
    }

    #[test]
    fn system_clock_is_monotonic_enough() {
        let clock = SystemClock::new();
        let a = clock.now();
        let b = clock.now();
        assert!(b >= a);
    }
}
