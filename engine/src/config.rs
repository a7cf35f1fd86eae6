use std::collections::HashSet;
use std::time::Duration;
use tugrik_types::{
    UserId, DAILY_REWARD_AMOUNT, DAILY_REWARD_COOLDOWN, MAX_BET, MIN_BET, SLOT_MULTIPLIER,
};

/// Engine configuration.
///
/// Defaults carry the standard game rules; deployments override the admin
/// set (and, for experiments, the numeric knobs).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Minimum accepted bet, inclusive.
    pub min_bet: u64,
    /// Maximum accepted bet, inclusive.
    pub max_bet: u64,
    /// Bet multiplier paid on a jackpot draw.
    pub slot_multiplier: u64,
    /// Amount credited by a daily claim.
    pub daily_reward: u64,
    /// Interval that must elapse between daily claims.
    pub claim_cooldown: Duration,
    /// Users allowed to read aggregate statistics.
    pub admins: HashSet<UserId>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            min_bet: MIN_BET,
            max_bet: MAX_BET,
            slot_multiplier: SLOT_MULTIPLIER,
            daily_reward: DAILY_REWARD_AMOUNT,
            claim_cooldown: DAILY_REWARD_COOLDOWN,
            admins: HashSet::new(),
        }
    }
}

impl Config {
    pub fn is_admin(&self, user: UserId) -> bool {
        self.admins.contains(&user)
    }
}
