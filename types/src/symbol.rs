use serde::{Deserialize, Serialize};
use std::fmt;

use super::{DRAW_LEN, SYMBOL_COUNT};

/// One reel symbol out of the fixed five-symbol alphabet.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Symbol {
    Apple = 0,
    Banana = 1,
    Strawberry = 2,
    Cherry = 3,
    Peach = 4,
}

impl Symbol {
    /// All symbols, in reel order. Draws sample this uniformly with
    /// replacement.
    pub const ALL: [Symbol; SYMBOL_COUNT] = [
        Symbol::Apple,
        Symbol::Banana,
        Symbol::Strawberry,
        Symbol::Cherry,
        Symbol::Peach,
    ];

    /// Glyph shown to the user for this symbol.
    pub fn glyph(&self) -> &'static str {
        match self {
            Symbol::Apple => "\u{1F34E}",
            Symbol::Banana => "\u{1F34C}",
            Symbol::Strawberry => "\u{1F353}",
            Symbol::Cherry => "\u{1F352}",
            Symbol::Peach => "\u{1F351}",
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.glyph())
    }
}

/// Ordered outcome of one spin: three symbols drawn independently.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draw(pub [Symbol; DRAW_LEN]);

impl Draw {
    /// A spin pays out only when all three positions match exactly.
    pub fn is_jackpot(&self) -> bool {
        let [a, b, c] = self.0;
        a == b && b == c
    }
}

impl fmt::Display for Draw {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.0;
        write!(f, "{} {} {}", a, b, c)
    }
}
