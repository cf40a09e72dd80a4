use super::report::Report;
use super::strategy::Strategy;
use crate::round::ledger::Ledger;
use crate::round::options::Options;
use crate::round::session::Session;
use crate::Chips;
use crate::BASE_WAGER;
use rayon::prelude::*;

/// Monte-Carlo estimate of what a cash-out policy returns. Every round is
/// an independent session seeded from the base seed, so results do not
/// depend on thread scheduling.
#[derive(Debug, Clone, Copy)]
pub struct Simulation {
    pub rounds: usize,
    pub strategy: Strategy,
    pub seed: u64,
    pub wager: Chips,
}

impl Simulation {
    pub fn new(rounds: usize, strategy: Strategy, seed: u64) -> Self {
        Self {
            rounds,
            strategy,
            seed,
            wager: BASE_WAGER,
        }
    }

    pub fn run(&self) -> Report {
        log::info!("simulating {} rounds, {}", self.rounds, self.strategy);
        let ledger = (0..self.rounds as u64)
            .into_par_iter()
            .map(|i| self.round(i))
            .reduce(Ledger::default, Ledger::merge);
        Report::new(self.strategy, ledger)
    }

    fn round(&self, i: u64) -> Ledger {
        let mut session = Session::new(Options {
            wager: self.wager,
            seed: Some(self.seed.wrapping_add(i)),
            ..Options::default()
        });
        self.strategy.play(&mut session);
        *session.ledger()
    }
}
