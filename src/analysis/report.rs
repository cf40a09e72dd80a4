use super::strategy::Strategy;
use crate::round::ledger::Ledger;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Report {
    pub strategy: Strategy,
    pub ledger: Ledger,
    /// paid per chip wagered
    pub rtp: f64,
}

impl Report {
    pub fn new(strategy: Strategy, ledger: Ledger) -> Self {
        let rtp = match ledger.wagered {
            0 => 0.0,
            wagered => ledger.paid as f64 / wagered as f64,
        };
        Self {
            strategy,
            ledger,
            rtp,
        }
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "{}", self.strategy)?;
        writeln!(f, "{}", self.ledger)?;
        write!(f, "rtp {:.4}", self.rtp)
    }
}
