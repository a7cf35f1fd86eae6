use std::time::Duration;

/// Minimum accepted bet (inclusive).
pub const MIN_BET: u64 = 10;

/// Maximum accepted bet (inclusive).
pub const MAX_BET: u64 = 1_000;

/// Payout multiplier applied to the bet on a three-of-a-kind draw.
pub const SLOT_MULTIPLIER: u64 = 5;

/// Number of reel positions in a single draw.
pub const DRAW_LEN: usize = 3;

/// Size of the symbol alphabet.
pub const SYMBOL_COUNT: usize = 5;

/// Amount credited by a successful daily reward claim.
pub const DAILY_REWARD_AMOUNT: u64 = 80;

/// Cooldown between daily reward claims.
pub const DAILY_REWARD_COOLDOWN: Duration = Duration::from_secs(12 * 60 * 60);
