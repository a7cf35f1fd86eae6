//! Slot outcome generation.
//!
//! Each of the three reel positions is an independent uniform sample over
//! the five-symbol alphabet (drawn with replacement, never dealt from a
//! shrinking pool). Only an exact three-of-a-kind pays out.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::sync::Mutex;
use tugrik_types::{Draw, Symbol, DRAW_LEN};

/// Randomness injected as a capability so tests can force or replay draws.
pub trait DrawSource: Send + Sync {
    fn draw(&self) -> Draw;
}

/// [`DrawSource`] backed by any [`Rng`].
#[derive(Debug)]
pub struct RngDrawSource<R: Rng + Send> {
    rng: Mutex<R>,
}

impl<R: Rng + Send> RngDrawSource<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng: Mutex::new(rng),
        }
    }
}

impl RngDrawSource<ChaCha8Rng> {
    /// Deterministic source for reproducing a draw sequence from a seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng + Send> DrawSource for RngDrawSource<R> {
    fn draw(&self) -> Draw {
        let mut rng = self.rng.lock().unwrap();
        let mut symbols = [Symbol::Apple; DRAW_LEN];
        for slot in symbols.iter_mut() {
            *slot = Symbol::ALL[rng.gen_range(0..Symbol::ALL.len())];
        }
        Draw(symbols)
    }
}

/// Payout credited for a draw, 0 on a loss.
pub fn payout(bet: u64, draw: &Draw, multiplier: u64) -> u64 {
    if draw.is_jackpot() {
        bet.saturating_mul(multiplier)
    } else {
        0
    }
}
