//! Common types for the tugrik casino bot.
//!
//! Defines account/session/draw state, the normalized event and reply surface
//! exchanged with the transport layer, and the game constants shared by the
//! engine and services.

mod account;
mod constants;
mod events;
mod session;
mod symbol;

pub use account::{Account, Timestamp, UserId};
pub use constants::*;
pub use events::{ClaimResult, Event, Reply, WagerOutcome};
pub use session::SessionState;
pub use symbol::{Draw, Symbol};
