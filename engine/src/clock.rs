use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Externally-supplied time source.
///
/// Returns the duration since the UNIX epoch. The reward scheduler compares
/// these readings at full precision, so tests can probe the cooldown
/// boundary without real waits.
pub trait Clock: Send + Sync {
    fn now(&self) -> Duration;
}

/// Wall-clock implementation used in production.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
    }
}
