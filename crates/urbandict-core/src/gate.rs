//! Single-slot throttle enforcing a minimum spacing between outbound calls.
//!
//! Only the most recent permitted call is tracked. A denied attempt never
//! moves the anchor, so the next window is measured from the last call that
//! actually went out.

use std::fmt;
use std::sync::{Mutex, PoisonError};
use std::time::{Duration, Instant};

/// Default spacing between two permitted calls
pub const DEFAULT_MIN_INTERVAL: Duration = Duration::from_secs(1);

/// Time source for the gate
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Outcome of [`RateGate::try_acquire`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    Permitted,
    Denied { retry_after: Duration },
}

impl Admission {
    pub fn is_permitted(&self) -> bool {
        matches!(self, Admission::Permitted)
    }
}

pub struct RateGate {
    clock: Box<dyn Clock>,
    min_interval: Duration,
    last_permitted: Mutex<Option<Instant>>,
}

impl RateGate {
    pub fn new(min_interval: Duration) -> Self {
        Self::with_clock(min_interval, SystemClock)
    }

    pub fn with_clock(min_interval: Duration, clock: impl Clock + 'static) -> Self {
        Self {
            clock: Box::new(clock),
            min_interval,
            last_permitted: Mutex::new(None),
        }
    }

    pub fn min_interval(&self) -> Duration {
        self.min_interval
    }

    /// Check and update under one lock so concurrent callers can't both pass
    pub fn try_acquire(&self) -> Admission {
        let mut last = self
            .last_permitted
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let now = self.clock.now();

        if let Some(previous) = *last {
            let elapsed = now.saturating_duration_since(previous);
            if elapsed < self.min_interval {
                let retry_after = self.min_interval - elapsed;
                tracing::debug!(?retry_after, "rate gate denied");
                return Admission::Denied { retry_after };
            }
        }

        *last = Some(now);
        tracing::debug!("rate gate permitted");
        Admission::Permitted
    }

    pub fn last_permitted(&self) -> Option<Instant> {
        *self
            .last_permitted
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for RateGate {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_INTERVAL)
    }
}

impl fmt::Debug for RateGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RateGate")
            .field("min_interval", &self.min_interval)
            .field("last_permitted", &self.last_permitted())
            .finish()
    }
}
