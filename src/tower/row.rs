use crate::cards::card::Card;
use crate::Chips;
use serde::Serialize;

/// One tier of the tower. Cards are only ever appended, except for the
/// in-place swap of a gate rescue.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Row(Vec<Card>);

impl Row {
    pub fn cards(&self) -> &[Card] {
        &self.0
    }
    pub fn get(&self, i: usize) -> Option<Card> {
        self.0.get(i).copied()
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn push(&mut self, card: Card) {
        self.0.push(card);
    }
    /// sum of raw card values, gate cards count zero
    pub fn value(&self) -> Chips {
        self.0.iter().map(|c| c.value() as Chips).sum()
    }
    /// every card matches; a single card trivially does
    pub fn is_uniform(&self) -> bool {
        self.0.windows(2).all(|w| w[0] == w[1])
    }
    pub fn has_gate(&self) -> bool {
        self.0.iter().any(Card::is_gate)
    }
    pub fn count(&self, card: Card) -> usize {
        self.0.iter().filter(|c| **c == card).count()
    }

    /// swap in a card, returning the one it displaced
    pub(crate) fn replace(&mut self, i: usize, card: Card) -> Card {
        std::mem::replace(&mut self.0[i], card)
    }
    pub(crate) fn take(&mut self) -> Option<Card> {
        let card = self.0.first().copied();
        self.0.clear();
        card
    }
}

impl From<Vec<Card>> for Row {
    fn from(cards: Vec<Card>) -> Self {
        Self(cards)
    }
}

/// str isomorphism
impl From<&str> for Row {
    fn from(s: &str) -> Self {
        Self(s.split_whitespace().map(Card::from).collect())
    }
}

impl std::fmt::Display for Row {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, card) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", card)?;
        }
        write!(f, "]")
    }
}
