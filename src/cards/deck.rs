use super::card::Card;
use rand::seq::SliceRandom;
use rand::Rng;

/// Deck is an immutable card sequence read through a cursor. Drawing never
/// reorders or shrinks the underlying cards, so the undrawn tail is always
/// available via ::remaining().
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
    next: usize,
}

impl Deck {
    /// a fresh deck in value order: four gate cards, then eight of each 1..=7
    pub fn ordered() -> Self {
        Self::from(
            Card::all()
                .flat_map(|card| std::iter::repeat(card).take(card.copies()))
                .collect::<Vec<Card>>(),
        )
    }

    /// a fresh deck, uniformly shuffled
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut cards = Self::ordered().cards;
        cards.shuffle(rng);
        Self::from(cards)
    }

    /// take the next card off the front
    pub fn draw(&mut self) -> Card {
        assert!(!self.is_empty(), "deck exhausted");
        let card = self.cards[self.next];
        self.next += 1;
        card
    }

    pub fn remaining(&self) -> &[Card] {
        &self.cards[self.next..]
    }
    pub fn drawn(&self) -> usize {
        self.next
    }
    pub fn len(&self) -> usize {
        self.cards.len() - self.next
    }
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<Vec<Card>> for Deck {
    fn from(cards: Vec<Card>) -> Self {
        Self { cards, next: 0 }
    }
}

/// str isomorphism
/// "7 1 1 2" deals 7 first
impl From<&str> for Deck {
    fn from(s: &str) -> Self {
        Self::from(s.split_whitespace().map(Card::from).collect::<Vec<Card>>())
    }
}

impl std::fmt::Display for Deck {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for card in self.remaining() {
            write!(f, "{}", card)?;
        }
        Ok(())
    }
}
