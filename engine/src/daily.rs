//! Daily reward scheduling.
//!
//! Eligibility compares the elapsed time against the cooldown at full
//! sub-second precision; only the display helper truncates to whole
//! seconds. A rejected claim mutates nothing, so the operation is
//! idempotent until the cooldown elapses.

use std::time::Duration;
use tracing::debug;
use tugrik_types::{ClaimResult, Timestamp, UserId};

use crate::config::Config;
use crate::ledger::{Ledger, LedgerError};

/// Pure eligibility decision for a claim at `now`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClaimEvaluation {
    pub eligible: bool,
    /// Time since the last claim; absent on a first-ever claim.
    pub elapsed: Option<Duration>,
    /// Time until the next claim becomes available; zero when eligible.
    pub remaining: Duration,
}

/// Evaluate claim eligibility without touching any state.
pub fn evaluate(
    last_claim: Option<Timestamp>,
    now: Timestamp,
    cooldown: Duration,
) -> ClaimEvaluation {
    match last_claim {
        None => ClaimEvaluation {
            eligible: true,
            elapsed: None,
            remaining: Duration::ZERO,
        },
        Some(last) => {
            // A clock regression reads as zero elapsed and stays pending.
            let elapsed = now.saturating_sub(last);
            if elapsed >= cooldown {
                ClaimEvaluation {
                    eligible: true,
                    elapsed: Some(elapsed),
                    remaining: Duration::ZERO,
                }
            } else {
                ClaimEvaluation {
                    eligible: false,
                    elapsed: Some(elapsed),
                    remaining: cooldown - elapsed,
                }
            }
        }
    }
}

/// Process a daily claim for `user` at `now`.
///
/// The caller must hold the user's session lock so the claim-then-update
/// sequence cannot interleave with another request from the same user. On
/// grant, the balance credit and the timestamp reset are the only writes;
/// on rejection there are none.
pub fn claim_daily(
    ledger: &dyn Ledger,
    config: &Config,
    user: UserId,
    now: Timestamp,
) -> Result<ClaimResult, LedgerError> {
    let last_claim = ledger.last_claim(user)?;
    let evaluation = evaluate(last_claim, now, config.claim_cooldown);
    if !evaluation.eligible {
        let (hours, minutes, seconds) = hms(evaluation.remaining);
        debug!(user, hours, minutes, seconds, "claim still cooling down");
        return Ok(ClaimResult::Pending {
            elapsed: evaluation.elapsed.unwrap_or_default(),
            remaining: evaluation.remaining,
        });
    }

    let balance = ledger.balance(user)?.saturating_add(config.daily_reward);
    ledger.set_balance(user, balance)?;
    ledger.set_last_claim(user, now)?;

    debug!(user, amount = config.daily_reward, balance, "daily reward granted");
    Ok(ClaimResult::Granted {
        amount: config.daily_reward,
        balance,
    })
}

/// Decompose a duration into whole hours, minutes, and seconds for display.
pub fn hms(duration: Duration) -> (u64, u64, u64) {
    let secs = duration.as_secs();
    (secs / 3_600, (secs % 3_600) / 60, secs % 60)
}
