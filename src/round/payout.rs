use crate::Chips;
use colored::Colorize;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Prize {
    /// value of the most recently completed row
    Row(usize),
    /// every playing row, for a full tower with the gate unspent
    Jackpot,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Payout {
    pub prize: Prize,
    pub value: Chips,
    pub multiplier: Chips,
    pub amount: Chips,
}

impl Payout {
    pub fn new(prize: Prize, value: Chips, multiplier: Chips) -> Self {
        Self {
            prize,
            value,
            multiplier,
            amount: value * multiplier,
        }
    }
    pub fn is_jackpot(&self) -> bool {
        self.prize == Prize::Jackpot
    }
}

impl std::fmt::Display for Payout {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let prize = match self.prize {
            Prize::Row(r) => format!("ROW {}", r),
            Prize::Jackpot => "JACKPOT".to_string(),
        };
        write!(
            f,
            "{:<8}{} x{} = {}",
            prize,
            self.value,
            self.multiplier,
            format!("+{}", self.amount).green()
        )
    }
}
