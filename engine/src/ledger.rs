//! Narrow interface to the ledger store collaborator.
//!
//! The engine only ever performs single reads and single writes against the
//! store; atomicity across a read-modify-write comes from the caller holding
//! the per-user session lock, not from the store itself.

use std::collections::HashMap;
use std::sync::Mutex;
use thiserror::Error as ThisError;
use tugrik_types::{Account, Timestamp, UserId};

/// Ledger store fault. Non-fatal: it is surfaced to the caller and the
/// engine performs no retries of its own.
#[derive(Clone, Debug, ThisError, PartialEq, Eq)]
pub enum LedgerError {
    #[error("ledger store unavailable: {reason}")]
    Unavailable { reason: String },
}

/// Durable mapping from user identifier to account state.
///
/// Unknown users read as a default [`Account`] (balance 0, no claim);
/// writes create the account implicitly. Accounts are never deleted.
pub trait Ledger: Send + Sync {
    /// Current balance, 0 for unknown users.
    fn balance(&self, user: UserId) -> Result<u64, LedgerError>;

    /// Upsert the balance.
    fn set_balance(&self, user: UserId, amount: u64) -> Result<(), LedgerError>;

    /// Timestamp of the last successful daily claim, absent until the first.
    fn last_claim(&self, user: UserId) -> Result<Option<Timestamp>, LedgerError>;

    /// Upsert the claim timestamp, preserving the existing balance.
    fn set_last_claim(&self, user: UserId, ts: Timestamp) -> Result<(), LedgerError>;

    /// Append a login event for the user.
    fn record_login(&self, user: UserId) -> Result<(), LedgerError>;

    /// Number of accounts ever touched. Consumed by admin reporting only.
    fn distinct_users(&self) -> Result<u64, LedgerError>;

    /// Number of login events ever recorded. Consumed by admin reporting only.
    fn login_events(&self) -> Result<u64, LedgerError>;
}

#[derive(Debug, Default)]
struct MemoryRows {
    accounts: HashMap<UserId, Account>,
    login_events: u64,
}

/// In-process ledger implementation backing tests and the dev service.
#[derive(Debug, Default)]
pub struct MemoryLedger {
    rows: Mutex<MemoryRows>,
}

impl MemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a balance directly, bypassing the engine. Test/bootstrap helper.
    pub fn credit(&self, user: UserId, amount: u64) {
        let mut rows = self.rows.lock().unwrap();
        let account = rows.accounts.entry(user).or_default();
        account.balance = account.balance.saturating_add(amount);
    }
}

impl Ledger for MemoryLedger {
    fn balance(&self, user: UserId) -> Result<u64, LedgerError> {
        let mut rows = self.rows.lock().unwrap();
        Ok(rows.accounts.entry(user).or_default().balance)
    }

    fn set_balance(&self, user: UserId, amount: u64) -> Result<(), LedgerError> {
        let mut rows = self.rows.lock().unwrap();
        rows.accounts.entry(user).or_default().balance = amount;
        Ok(())
    }

    fn last_claim(&self, user: UserId) -> Result<Option<Timestamp>, LedgerError> {
        let mut rows = self.rows.lock().unwrap();
        Ok(rows.accounts.entry(user).or_default().last_claim)
    }

    fn set_last_claim(&self, user: UserId, ts: Timestamp) -> Result<(), LedgerError> {
        let mut rows = self.rows.lock().unwrap();
        rows.accounts.entry(user).or_default().last_claim = Some(ts);
        Ok(())
    }

    fn record_login(&self, user: UserId) -> Result<(), LedgerError> {
        let mut rows = self.rows.lock().unwrap();
        rows.accounts.entry(user).or_default();
        rows.login_events += 1;
        Ok(())
    }

    fn distinct_users(&self) -> Result<u64, LedgerError> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.accounts.len() as u64)
    }

    fn login_events(&self) -> Result<u64, LedgerError> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.login_events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_unknown_user_reads_zero() {
        let ledger = MemoryLedger::new();
        assert_eq!(ledger.balance(1).unwrap(), 0);
        assert_eq!(ledger.last_claim(1).unwrap(), None);
    }

    #[test]
    fn test_balance_query_creates_account() {
        let ledger = MemoryLedger::new();
        assert_eq!(ledger.distinct_users().unwrap(), 0);
        ledger.balance(1).unwrap();
        assert_eq!(ledger.distinct_users().unwrap(), 1);
        // Repeat queries do not double-count.
        ledger.balance(1).unwrap();
        assert_eq!(ledger.distinct_users().unwrap(), 1);
    }

    #[test]
    fn test_set_last_claim_preserves_balance() {
        let ledger = MemoryLedger::new();
        ledger.set_balance(1, 500).unwrap();
        ledger
            .set_last_claim(1, Duration::from_secs(1_000))
            .unwrap();
        assert_eq!(ledger.balance(1).unwrap(), 500);
        assert_eq!(
            ledger.last_claim(1).unwrap(),
            Some(Duration::from_secs(1_000))
        );
    }

    #[test]
    fn test_login_counters() {
        let ledger = MemoryLedger::new();
        ledger.record_login(1).unwrap();
        ledger.record_login(1).unwrap();
        ledger.record_login(2).unwrap();
        assert_eq!(ledger.login_events().unwrap(), 3);
        assert_eq!(ledger.distinct_users().unwrap(), 2);
    }
}
