use super::payout::Payout;
use crate::tower::outcome::Outcome;
use crate::Chips;
use serde::Serialize;

/// Running tallies for a session. Informational only.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Ledger {
    pub rounds: usize,
    pub busts: usize,
    pub rescues: usize,
    pub cashouts: usize,
    pub jackpots: usize,
    pub wagered: Chips,
    pub paid: Chips,
}

impl Ledger {
    pub fn charge(&mut self, wager: Chips) {
        self.rounds += 1;
        self.wagered += wager;
    }
    pub fn record(&mut self, outcome: &Outcome) {
        match outcome {
            Outcome::Clear => {}
            Outcome::Rescued { .. } => self.rescues += 1,
            Outcome::Bust { .. } => self.busts += 1,
        }
    }
    pub fn pay(&mut self, payout: &Payout) {
        self.paid += payout.amount;
        self.cashouts += 1;
        if payout.is_jackpot() {
            self.jackpots += 1;
        }
    }
    pub fn net(&self) -> Chips {
        self.paid - self.wagered
    }
    pub fn merge(self, other: Self) -> Self {
        Self {
            rounds: self.rounds + other.rounds,
            busts: self.busts + other.busts,
            rescues: self.rescues + other.rescues,
            cashouts: self.cashouts + other.cashouts,
            jackpots: self.jackpots + other.jackpots,
            wagered: self.wagered + other.wagered,
            paid: self.paid + other.paid,
        }
    }
}

impl std::fmt::Display for Ledger {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use colored::Colorize;
        let net = match self.net() {
            n if n >= 0 => format!("+{}", n).green(),
            n => format!("{}", n).red(),
        };
        write!(
            f,
            "rounds {} busts {} rescues {} cashouts {} jackpots {} wagered {} paid {} net {}",
            self.rounds,
            self.busts,
            self.rescues,
            self.cashouts,
            self.jackpots,
            self.wagered,
            self.paid,
            net
        )
    }
}
