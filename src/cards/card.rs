use crate::GATE_COPIES;
use crate::VALUES;
use crate::VALUE_COPIES;
use colored::Colorize;
use serde::Deserialize;
use serde::Serialize;

/// A tower card. Values 1 through 7 are ordinary; value 0 is the gate
/// (hero) card, which never collides and can be banked to rescue a bust.
#[derive(
    Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Card(u8);

impl Card {
    pub const GATE: Self = Self(0);

    pub fn value(&self) -> u8 {
        self.0
    }
    pub fn is_gate(&self) -> bool {
        *self == Self::GATE
    }
    /// how many copies of this value a fresh deck holds
    pub fn copies(&self) -> usize {
        if self.is_gate() {
            GATE_COPIES
        } else {
            VALUE_COPIES
        }
    }
    pub fn all() -> impl Iterator<Item = Self> {
        (0..VALUES as u8).map(Self)
    }
}

/// u8 isomorphism
impl From<u8> for Card {
    fn from(n: u8) -> Self {
        assert!((n as usize) < VALUES, "invalid card value: {}", n);
        Self(n)
    }
}
impl From<Card> for u8 {
    fn from(c: Card) -> u8 {
        c.0
    }
}

/// usize injection, for per-value tables
impl From<Card> for usize {
    fn from(c: Card) -> usize {
        c.0 as usize
    }
}

/// str isomorphism
impl From<&str> for Card {
    fn from(s: &str) -> Self {
        match s.trim().parse::<u8>() {
            Ok(n) => Self::from(n),
            Err(_) => panic!("invalid card str: {}", s),
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        if self.is_gate() {
            write!(f, "{}", "0".yellow().bold())
        } else {
            write!(f, "{}", self.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_u8() {
        for card in Card::all() {
            assert_eq!(card, Card::from(u8::from(card)));
        }
    }

    #[test]
    fn gate_is_rare() {
        assert!(Card::GATE.is_gate());
        assert_eq!(Card::GATE.copies(), 4);
        assert!(Card::all().skip(1).all(|c| !c.is_gate() && c.copies() == 8));
    }

    #[test]
    #[should_panic]
    fn out_of_range() {
        Card::from(8u8);
    }
}
