use crate::Chips;
use crate::BASE_WAGER;
use crate::STARTING_BALANCE;

/// What happens once the eighth row lands without a bust.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Settlement {
    /// the round waits for an explicit settle
    #[default]
    Explicit,
    /// the full tower is cashed out immediately
    Automatic,
}

/// Session construction parameters.
#[derive(Debug, Clone, Copy)]
pub struct Options {
    pub balance: Chips,
    pub wager: Chips,
    pub settlement: Settlement,
    /// fixed shuffle seed; entropy when absent
    pub seed: Option<u64>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            balance: STARTING_BALANCE,
            wager: BASE_WAGER,
            settlement: Settlement::default(),
            seed: None,
        }
    }
}
