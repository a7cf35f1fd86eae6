//! Test doubles for the engine: a steerable clock, forced draws, and a
//! ledger that is always unavailable.

use std::sync::Mutex;
use std::time::Duration;
use tugrik_types::{Draw, Symbol, Timestamp, UserId};

use crate::casino::Casino;
use crate::clock::Clock;
use crate::config::Config;
use crate::ledger::{Ledger, LedgerError, MemoryLedger};
use crate::slots::DrawSource;

/// Clock that only moves when told to.
#[derive(Debug)]
pub struct ManualClock {
    now: Mutex<Duration>,
}

impl ManualClock {
    pub fn new(start: Duration) -> Self {
        Self {
            now: Mutex::new(start),
        }
    }

    pub fn set(&self, now: Duration) {
        *self.now.lock().unwrap() = now;
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap();
        *now += by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        *self.now.lock().unwrap()
    }
}

/// Draw source that always produces the same draw.
#[derive(Clone, Copy, Debug)]
pub struct FixedDraws {
    draw: Draw,
}

impl FixedDraws {
    pub fn new(draw: Draw) -> Self {
        Self { draw }
    }
}

impl DrawSource for FixedDraws {
    fn draw(&self) -> Draw {
        self.draw
    }
}

/// Ledger whose every operation fails with `Unavailable`.
#[derive(Clone, Copy, Debug)]
pub struct UnavailableLedger;

impl UnavailableLedger {
    fn fault<T>(&self) -> Result<T, LedgerError> {
        Err(LedgerError::Unavailable {
            reason: "injected fault".to_string(),
        })
    }
}

impl Ledger for UnavailableLedger {
    fn balance(&self, _user: UserId) -> Result<u64, LedgerError> {
        self.fault()
    }

    fn set_balance(&self, _user: UserId, _amount: u64) -> Result<(), LedgerError> {
        self.fault()
    }

    fn last_claim(&self, _user: UserId) -> Result<Option<Timestamp>, LedgerError> {
        self.fault()
    }

    fn set_last_claim(&self, _user: UserId, _ts: Timestamp) -> Result<(), LedgerError> {
        self.fault()
    }

    fn record_login(&self, _user: UserId) -> Result<(), LedgerError> {
        self.fault()
    }

    fn distinct_users(&self) -> Result<u64, LedgerError> {
        self.fault()
    }

    fn login_events(&self) -> Result<u64, LedgerError> {
        self.fault()
    }
}

/// Three-of-a-kind draw.
pub fn jackpot_draw() -> Draw {
    Draw([Symbol::Apple, Symbol::Apple, Symbol::Apple])
}

/// Losing draw with three distinct symbols.
pub fn mixed_draw() -> Draw {
    Draw([Symbol::Apple, Symbol::Banana, Symbol::Cherry])
}

/// Casino wired to in-memory collaborators with a forced draw and a clock
/// starting at an arbitrary fixed instant.
pub fn test_casino(draw: Draw) -> Casino<MemoryLedger, ManualClock, FixedDraws> {
    Casino::new(
        Config::default(),
        MemoryLedger::new(),
        ManualClock::new(Duration::from_secs(1_000_000)),
        FixedDraws::new(draw),
    )
}
