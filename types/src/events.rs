use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::{Draw, UserId};

/// Normalized inbound event from the transport layer.
///
/// The transport (chat framework, HTTP facade, test harness) is responsible
/// for turning raw user interactions into these tagged events; the engine
/// never sees raw chat messages except for the bet amount text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Event {
    /// User opened a conversation; records a login event.
    LoginRequested { user: UserId },
    /// User asked to start a slots game.
    PlayRequested { user: UserId },
    /// User submitted text while a bet prompt may be outstanding.
    BetSubmitted { user: UserId, text: String },
    /// User asked for the daily reward.
    ClaimRequested { user: UserId },
    /// User cancelled an in-progress wager.
    CancelRequested { user: UserId },
    /// User asked for their balance.
    BalanceRequested { user: UserId },
    /// User asked for aggregate bot statistics (admin only).
    StatsRequested { user: UserId },
}

impl Event {
    /// The user this event belongs to. Used to pick the per-user lock.
    pub fn user(&self) -> UserId {
        match self {
            Event::LoginRequested { user }
            | Event::PlayRequested { user }
            | Event::BetSubmitted { user, .. }
            | Event::ClaimRequested { user }
            | Event::CancelRequested { user }
            | Event::BalanceRequested { user }
            | Event::StatsRequested { user } => *user,
        }
    }
}

/// Result of processing a submitted bet.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum WagerOutcome {
    /// The text did not parse as an integer. The bet prompt stays open.
    InvalidFormat,
    /// The bet parsed but fell outside the allowed range. The bet prompt
    /// stays open. Range is checked before funds, so an out-of-range bet
    /// reports this even when it would also fail the funds check.
    OutOfRange { bet: i64 },
    /// The bet exceeded the current balance. The wager is abandoned and the
    /// session ends without touching the ledger.
    InsufficientFunds { balance: u64 },
    /// The wager settled: the bet was debited and any jackpot payout
    /// credited in a single balance write.
    Settled {
        bet: u64,
        draw: Draw,
        /// Amount credited on top of the debit; 0 on a loss.
        payout: u64,
        /// Balance after settlement.
        balance: u64,
    },
}

/// Result of a daily reward claim.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ClaimResult {
    /// Reward credited and the claim timestamp reset to now.
    Granted { amount: u64, balance: u64 },
    /// Cooldown has not elapsed. Nothing was mutated; calling again with the
    /// same clock reading yields the same answer.
    Pending {
        elapsed: Duration,
        remaining: Duration,
    },
}

/// Outcome message emitted back to the transport layer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Reply {
    /// Login acknowledged.
    Welcome { balance: u64 },
    /// A wager was started (or restarted); the next text is read as a bet.
    BetPrompt { min_bet: u64, max_bet: u64 },
    /// A submitted bet was processed.
    Wager(WagerOutcome),
    /// A daily reward claim was processed.
    Claim(ClaimResult),
    /// Balance report.
    Balance { balance: u64 },
    /// An in-progress wager was cancelled (no-op when idle).
    Cancelled,
    /// Aggregate statistics, admin only.
    Stats { total_users: u64, total_logins: u64 },
    /// Stats were requested by a non-admin.
    StatsDenied,
    /// Text arrived with no bet prompt outstanding.
    UnknownCommand,
}
