use super::payout::Payout;
use super::payout::Prize;
use super::state::State;
use crate::cards::card::Card;
use crate::cards::counts::Counts;
use crate::cards::deck::Deck;
use crate::tower::outcome::Outcome;
use crate::tower::tower::Tower;
use crate::Chips;
use crate::ROWS;

/// Everything that lives and dies with a single round: the deck being
/// read, the remaining counts, the tower, and the running multiplier.
/// Balance and wager belong to the Session.
#[derive(Debug, Clone)]
pub struct Round {
    deck: Deck,
    counts: Counts,
    tower: Tower,
    multiplier: Chips,
    state: State,
}

impl Round {
    pub fn new(deck: Deck) -> Self {
        Self {
            deck,
            counts: Counts::stock(),
            tower: Tower::default(),
            multiplier: 1,
            state: State::Betting,
        }
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }
    pub fn counts(&self) -> &Counts {
        &self.counts
    }
    pub fn tower(&self) -> &Tower {
        &self.tower
    }
    pub fn multiplier(&self) -> Chips {
        self.multiplier
    }
    pub fn state(&self) -> State {
        self.state
    }
    /// rows dealt so far, which is also the index of the next row
    pub fn cursor(&self) -> usize {
        self.tower.dealt()
    }
    pub fn is_complete(&self) -> bool {
        self.tower.is_complete()
    }

    /// Value shown beside a row. Every playing row shows the jackpot once
    /// the jackpot condition holds.
    pub fn display_value(&self, row: usize) -> Chips {
        if row > 0 && self.tower.is_jackpot() {
            self.tower.jackpot_value()
        } else {
            self.tower.row_value(row)
        }
    }

    /// What cashing out right now would pay, if anything.
    pub fn payout(&self) -> Option<Payout> {
        if self.cursor() == 0 || self.state == State::GameOver {
            return None;
        }
        Some(if self.tower.is_jackpot() {
            Payout::new(Prize::Jackpot, self.tower.jackpot_value(), self.multiplier)
        } else {
            let row = self.paying_row();
            Payout::new(Prize::Row(row), self.tower.row_value(row), self.multiplier)
        })
    }

    /// The row a plain cash-out pays. A complete tower without the jackpot
    /// pays the second-to-last row; the cursor stops at the last row index.
    fn paying_row(&self) -> usize {
        if self.is_complete() {
            ROWS - 2
        } else {
            self.cursor() - 1
        }
    }

    pub(crate) fn scale(&mut self, factor: Chips) {
        self.multiplier *= factor;
    }

    /// Deal the next row, resolve collisions against the row above, and
    /// reward a uniform row.
    pub(crate) fn deal(&mut self) -> Outcome {
        assert!(self.state != State::GameOver, "dealing into a busted round");
        assert!(!self.is_complete(), "dealing into a complete tower");
        let size = self.cursor() + 1;
        let cards = (0..size).map(|_| self.draw()).collect::<Vec<Card>>();
        self.tower.deal(cards);
        self.state = State::Playing;
        let outcome = self.tower.resolve();
        if outcome.is_bust() {
            self.state = State::GameOver;
            return outcome;
        }
        let row = self.tower.row(self.cursor() - 1);
        if row.is_uniform() {
            self.multiplier *= row.len() as Chips;
        }
        outcome
    }

    fn draw(&mut self) -> Card {
        let card = self.deck.draw();
        self.counts.take(card);
        log::trace!("draw {} ({} left)", card.value(), self.deck.len());
        card
    }
}
