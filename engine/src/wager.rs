//! Bet validation and wager settlement.
//!
//! Validation order is range-before-funds: an out-of-range bet is rejected
//! as `OutOfRange` even when it would also fail the funds check. This order
//! is observable behavior and must not be reordered.
//!
//! Settlement performs exactly one balance write (debit net of any payout);
//! every rejection path leaves the ledger untouched.

use tracing::debug;
use tugrik_types::{SessionState, UserId, WagerOutcome};

use crate::config::Config;
use crate::ledger::{Ledger, LedgerError};
use crate::slots::{payout, DrawSource};

/// Process a submitted bet for a user whose session is `AwaitingBet`.
///
/// The caller must hold the user's session lock; the session transition and
/// the ledger read-modify-write happen under that one lock. The session is
/// mutated in place:
/// - parse/range failures keep it `AwaitingBet` (re-prompt),
/// - insufficient funds and settlement move it to `Idle`.
pub fn place_wager(
    ledger: &dyn Ledger,
    draws: &dyn DrawSource,
    config: &Config,
    user: UserId,
    raw_input: &str,
    session: &mut SessionState,
) -> Result<WagerOutcome, LedgerError> {
    let bet = match raw_input.trim().parse::<i64>() {
        Ok(value) => value,
        Err(_) => return Ok(WagerOutcome::InvalidFormat),
    };
    if bet < config.min_bet as i64 || bet > config.max_bet as i64 {
        return Ok(WagerOutcome::OutOfRange { bet });
    }
    let bet = bet as u64;

    let balance = ledger.balance(user)?;
    if balance < bet {
        // Wager abandoned: the session ends but nothing was debited.
        *session = SessionState::Idle;
        return Ok(WagerOutcome::InsufficientFunds { balance });
    }

    // Debit, draw, credit on a jackpot; persisted as one write.
    let draw = draws.draw();
    let win = payout(bet, &draw, config.slot_multiplier);
    let settled = balance - bet + win;
    ledger.set_balance(user, settled)?;
    *session = SessionState::Idle;

    debug!(user, bet, %draw, payout = win, balance = settled, "wager settled");
    Ok(WagerOutcome::Settled {
        bet,
        draw,
        payout: win,
        balance: settled,
    })
}
