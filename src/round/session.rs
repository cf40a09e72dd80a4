use super::command::Command;
use super::event::Event;
use super::ledger::Ledger;
use super::options::Options;
use super::options::Settlement;
use super::payout::Payout;
use super::round::Round;
use super::snapshot::Snapshot;
use super::state::State;
use crate::cards::deck::Deck;
use crate::tower::outcome::Outcome;
use crate::Chips;
use crate::BASE_WAGER;
use crate::MAX_WAGER;
use rand::rngs::SmallRng;
use rand::SeedableRng;

/// One player's game. Owns the persistent balance and wager, the shuffle
/// source, and the round in progress. Sessions share nothing, so a host
/// running many of them only has to serialize commands per session.
#[derive(Debug, Clone)]
pub struct Session {
    balance: Chips,
    wager: Chips,
    settlement: Settlement,
    rng: SmallRng,
    round: Round,
    ledger: Ledger,
}

impl Session {
    pub fn new(options: Options) -> Self {
        assert!(
            (1..=MAX_WAGER).contains(&options.wager),
            "wager out of range: {}",
            options.wager
        );
        let mut rng = match options.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };
        let round = Round::new(Deck::shuffled(&mut rng));
        Self {
            balance: options.balance,
            wager: options.wager,
            settlement: options.settlement,
            rng,
            round,
            ledger: Ledger::default(),
        }
    }

    pub fn balance(&self) -> Chips {
        self.balance
    }
    pub fn wager(&self) -> Chips {
        self.wager
    }
    pub fn state(&self) -> State {
        self.round.state()
    }
    pub fn multiplier(&self) -> Chips {
        self.round.multiplier()
    }
    pub fn round(&self) -> &Round {
        &self.round
    }
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::from(self)
    }

    /// Wagers are positive, capped, and only change between rounds. Anything under
    /// the base wager is accepted and zeroes the multiplier.
    pub fn set_wager(&mut self, wager: Chips) -> anyhow::Result<()> {
        anyhow::ensure!(wager > 0, "wager must be positive, got {}", wager);
        anyhow::ensure!(wager <= MAX_WAGER, "wager must be at most {}", MAX_WAGER);
        anyhow::ensure!(
            self.state() == State::Betting,
            "wager is locked while a round is in progress"
        );
        if wager % BASE_WAGER != 0 {
            log::warn!("wager {} is not a multiple of {}", wager, BASE_WAGER);
        }
        self.wager = wager;
        Ok(())
    }

    /// Fresh shuffled deck, empty tower, multiplier reset.
    pub fn new_round(&mut self) {
        let deck = Deck::shuffled(&mut self.rng);
        self.new_round_from(deck);
    }

    /// Same as ::new_round(), dealing from a caller-supplied deck.
    pub fn new_round_from(&mut self, deck: Deck) {
        log::debug!("new round, balance {}", self.balance);
        self.round = Round::new(deck);
    }

    /// Deal one row. The first deal of a round charges the wager and folds
    /// it into the multiplier. No-op once the round is busted or the
    /// tower is complete.
    pub fn deal_next_row(&mut self) -> Option<Outcome> {
        if self.state() == State::GameOver || self.round.is_complete() {
            log::debug!("nothing to deal");
            return None;
        }
        if self.round.cursor() == 0 {
            self.balance = self.balance.saturating_sub(self.wager);
            self.round.scale(self.wager / BASE_WAGER);
            self.ledger.charge(self.wager);
            log::info!("bet {}, balance {}", self.wager, self.balance);
        }
        let outcome = self.round.deal();
        let row = self.round.cursor() - 1;
        log::debug!("row {} {} {}", row, self.round.tower().row(row), outcome);
        self.ledger.record(&outcome);
        if outcome.is_bust() {
            log::info!("bust on row {}", row);
        }
        Some(outcome)
    }

    /// Cash out at the current row and start a new round. No-op on an
    /// empty tower or a busted round.
    pub fn settle(&mut self) -> Option<Payout> {
        let payout = self.round.payout()?;
        self.balance = self.balance.saturating_add(payout.amount);
        self.ledger.pay(&payout);
        log::info!("{}, balance {}", payout, self.balance);
        self.new_round();
        Some(payout)
    }

    /// The deal/confirm command. Restarts a busted round, settles a complete
    /// tower, reveals the gate and first row together on an empty tower,
    /// and otherwise deals a single row.
    pub fn advance(&mut self) -> Event {
        if self.state() == State::GameOver {
            self.new_round();
            return Event::Restarted;
        }
        if self.round.is_complete() {
            return self.cash_out();
        }
        let rows = if self.round.cursor() == 0 { 2 } else { 1 };
        let mut outcome = Outcome::Clear;
        for _ in 0..rows {
            match self.deal_next_row() {
                Some(o) => outcome = o,
                None => break,
            }
        }
        if self.settlement == Settlement::Automatic && self.round.is_complete() && !outcome.is_bust()
        {
            return self.cash_out();
        }
        Event::Dealt { rows, outcome }
    }

    /// The cash-out command. Restarts a busted round.
    pub fn cash_out(&mut self) -> Event {
        if self.state() == State::GameOver {
            self.new_round();
            return Event::Restarted;
        }
        match self.settle() {
            Some(payout) => Event::Settled(payout),
            None => Event::Ignored,
        }
    }

    pub fn apply(&mut self, command: Command) -> Event {
        match command {
            Command::Advance => self.advance(),
            Command::Settle => self.cash_out(),
        }
    }

    /// Raw symbol entry point. Unrecognized symbols change nothing.
    pub fn input(&mut self, symbol: &str) -> Event {
        match Command::try_from(symbol) {
            Ok(command) => self.apply(command),
            Err(e) => {
                log::debug!("{}", e);
                Event::Ignored
            }
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Options::default())
    }
}
