//! Tugrik wager settlement and reward-cooldown engine.
//!
//! This crate contains the state-transition core of the casino bot: bet
//! validation and settlement, the daily reward scheduler, the per-user
//! session state machine, and the event dispatcher that ties them to a
//! ledger store.
//!
//! ## Determinism and injection
//! - Randomness enters only through [`DrawSource`]; production uses an
//!   RNG-backed source, tests use seeded or fixed sources.
//! - Time enters only through [`Clock`]; tests drive a manual clock instead
//!   of waiting on the wall clock.
//!
//! ## Concurrency invariants
//! Every operation for a user runs under that user's session lock, so the
//! session transition and the ledger read-modify-write are atomic with
//! respect to other requests from the same user. Requests for different
//! users never block each other. Lock guards are scoped and released on all
//! exit paths, including ledger faults.
//!
//! The primary entrypoint is [`Casino::handle`].

pub mod casino;
pub mod clock;
pub mod config;
pub mod daily;
pub mod ledger;
pub mod sessions;
pub mod slots;
pub mod wager;

#[cfg(any(test, feature = "mocks"))]
pub mod mocks;

#[cfg(test)]
mod integration_tests;

pub use casino::Casino;
pub use clock::{Clock, SystemClock};
pub use config::Config;
pub use daily::{hms, ClaimEvaluation};
pub use ledger::{Ledger, LedgerError, MemoryLedger};
pub use sessions::Sessions;
pub use slots::{DrawSource, RngDrawSource};
