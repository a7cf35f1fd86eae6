//! Event dispatcher tying the wager engine, reward scheduler, and session
//! state machine to the ledger store.
//!
//! Every event is handled under the lock of the slot belonging to the event's
//! user, so the session transition and any ledger read-modify-write are
//! atomic per user while unrelated users run concurrently.

use tracing::{info, warn};
use tugrik_types::{Event, Reply, SessionState};

use crate::clock::Clock;
use crate::config::Config;
use crate::daily;
use crate::ledger::{Ledger, LedgerError};
use crate::sessions::Sessions;
use crate::slots::DrawSource;
use crate::wager;

/// The casino core. One instance serves all users.
pub struct Casino<L, C, D> {
    config: Config,
    ledger: L,
    clock: C,
    draws: D,
    sessions: Sessions,
}

impl<L: Ledger, C: Clock, D: DrawSource> Casino<L, C, D> {
    pub fn new(config: Config, ledger: L, clock: C, draws: D) -> Self {
        Self {
            config,
            ledger,
            clock,
            draws,
            sessions: Sessions::new(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn ledger(&self) -> &L {
        &self.ledger
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn sessions(&self) -> &Sessions {
        &self.sessions
    }

    /// Process one normalized transport event.
    ///
    /// A `LedgerError` is returned as-is: the engine never retries and never
    /// swallows store faults. The session lock is released on every path.
    pub fn handle(&self, event: Event) -> Result<Reply, LedgerError> {
        let user = event.user();
        let slot = self.sessions.slot(user);
        let mut session = slot.lock().unwrap();

        match event {
            Event::LoginRequested { user } => {
                self.ledger.record_login(user)?;
                let balance = self.ledger.balance(user)?;
                info!(user, balance, "login");
                Ok(Reply::Welcome { balance })
            }
            Event::PlayRequested { user: _ } => {
                // Re-entry while already awaiting just restarts the prompt.
                *session = SessionState::AwaitingBet;
                Ok(Reply::BetPrompt {
                    min_bet: self.config.min_bet,
                    max_bet: self.config.max_bet,
                })
            }
            Event::BetSubmitted { user, text } => {
                if *session != SessionState::AwaitingBet {
                    return Ok(Reply::UnknownCommand);
                }
                let outcome = wager::place_wager(
                    &self.ledger,
                    &self.draws,
                    &self.config,
                    user,
                    &text,
                    &mut session,
                )?;
                Ok(Reply::Wager(outcome))
            }
            Event::ClaimRequested { user } => {
                let result =
                    daily::claim_daily(&self.ledger, &self.config, user, self.clock.now())?;
                Ok(Reply::Claim(result))
            }
            Event::CancelRequested { user: _ } => {
                *session = SessionState::Idle;
                Ok(Reply::Cancelled)
            }
            Event::BalanceRequested { user } => {
                let balance = self.ledger.balance(user)?;
                Ok(Reply::Balance { balance })
            }
            Event::StatsRequested { user } => {
                if !self.config.is_admin(user) {
                    warn!(user, "stats requested by non-admin");
                    return Ok(Reply::StatsDenied);
                }
                Ok(Reply::Stats {
                    total_users: self.ledger.distinct_users()?,
                    total_logins: self.ledger.login_events()?,
                })
            }
        }
    }
}
