use super::outcome::Outcome;
use super::row::Row;
use crate::cards::card::Card;
use crate::Chips;
use crate::ROWS;

/// The triangular layout. Row 0 banks the single gate card; row r holds
/// r + 1 cards once dealt. Rows are dealt strictly in order.
#[derive(Debug, Clone, Default)]
pub struct Tower {
    rows: [Row; ROWS],
    dealt: usize,
    burned: Vec<Card>,
}

impl Tower {
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }
    pub fn row(&self, i: usize) -> &Row {
        &self.rows[i]
    }
    /// rows dealt so far this round
    pub fn dealt(&self) -> usize {
        self.dealt
    }
    /// cards overwritten by gate rescues
    pub fn burned(&self) -> &[Card] {
        &self.burned
    }
    /// the banked gate card, if it has not been spent
    pub fn gate(&self) -> Option<Card> {
        self.rows[0].get(0)
    }
    pub fn is_complete(&self) -> bool {
        self.dealt == ROWS
    }
    /// full tower with the gate card never spent
    pub fn is_jackpot(&self) -> bool {
        self.is_complete() && self.rows[0].len() == 1 && self.rows[ROWS - 1].len() == ROWS
    }
    pub fn row_value(&self, i: usize) -> Chips {
        self.rows[i].value()
    }
    /// every playing row summed, gate row excluded
    pub fn jackpot_value(&self) -> Chips {
        self.rows[1..].iter().map(Row::value).sum()
    }
    /// copies of a card currently standing in the tower
    pub fn count(&self, card: Card) -> usize {
        self.rows.iter().map(|r| r.count(card)).sum()
    }

    /// place the next row
    pub fn deal(&mut self, cards: impl IntoIterator<Item = Card>) {
        assert!(!self.is_complete(), "tower already complete");
        let row = &mut self.rows[self.dealt];
        for card in cards {
            row.push(card);
        }
        assert!(row.len() == self.dealt + 1, "row {} has wrong size", self.dealt);
        self.dealt += 1;
    }

    /// First column of the newest row that matches one of its two upward
    /// diagonal neighbours. Same-index neighbour is checked before the
    /// left one. Any gate card in the row clears the whole row. The gate row
    /// is never a neighbour, so the first playing row cannot collide.
    pub fn collision(&self) -> Option<usize> {
        if self.dealt < 3 {
            return None;
        }
        let above = &self.rows[self.dealt - 2];
        let below = &self.rows[self.dealt - 1];
        if below.has_gate() {
            return None;
        }
        below.cards().iter().enumerate().position(|(i, card)| {
            above.get(i) == Some(*card) || (i > 0 && above.get(i - 1) == Some(*card))
        })
    }

    /// Spend the gate card over the colliding column. Returns the burned
    /// card, or None when the gate was already spent.
    pub fn rescue(&mut self, column: usize) -> Option<Card> {
        let gate = self.rows[0].take()?;
        let burned = self.rows[self.dealt - 1].replace(column, gate);
        self.burned.push(burned);
        Some(burned)
    }

    /// At most two passes: the first collision may be rescued, a second one
    /// in the same row is final.
    pub fn resolve(&mut self) -> Outcome {
        let Some(column) = self.collision() else {
            return Outcome::Clear;
        };
        let Some(burned) = self.rescue(column) else {
            return Outcome::Bust { column };
        };
        match self.collision() {
            Some(column) => Outcome::Bust { column },
            None => Outcome::Rescued { column, burned },
        }
    }
}
