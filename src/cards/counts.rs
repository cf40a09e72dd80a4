use super::card::Card;
use crate::VALUES;
use serde::Serialize;

/// Remaining undrawn copies of each card value. Mirrors the deck for
/// diagnostics; payouts never read it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Counts([usize; VALUES]);

impl Counts {
    pub fn stock() -> Self {
        Self(std::array::from_fn(|i| Card::from(i as u8).copies()))
    }
    pub fn of(&self, card: Card) -> usize {
        self.0[usize::from(card)]
    }
    pub fn take(&mut self, card: Card) {
        let i = usize::from(card);
        assert!(self.0[i] > 0, "no copies of {} left", card);
        self.0[i] -= 1;
    }
    pub fn total(&self) -> usize {
        self.0.iter().sum()
    }
}

impl Default for Counts {
    fn default() -> Self {
        Self::stock()
    }
}

impl std::fmt::Display for Counts {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for (value, n) in self.0.iter().enumerate() {
            write!(f, "{}:{} ", value, n)?;
        }
        Ok(())
    }
}
