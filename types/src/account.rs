use std::time::Duration;

/// Opaque user identifier handed to us by the transport layer.
pub type UserId = u64;

/// Point in time expressed as a duration since the UNIX epoch.
///
/// Claim eligibility compares timestamps at full sub-second precision;
/// only display formatting truncates to whole seconds.
pub type Timestamp = Duration;

/// Persistent per-user ledger record.
///
/// Accounts are created implicitly on first query or mutation and are never
/// deleted. The balance is unsigned, so it can never go negative.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Account {
    pub balance: u64,
    /// Set on each successful daily claim, absent until the first one.
    pub last_claim: Option<Timestamp>,
}
