use crate::round::command::Command;
use crate::round::event::Event;
use crate::round::session::Session;
use serde::Serialize;

/// A fixed cash-out policy for simulated play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Strategy {
    /// settle as soon as this playing row is dealt
    CashAt(usize),
    /// deal the whole tower, then settle
    Ride,
}

impl Strategy {
    /// whether to cash out with `cursor` rows on the table
    pub fn stops(&self, cursor: usize) -> bool {
        match self {
            Self::CashAt(row) => cursor > *row,
            Self::Ride => false,
        }
    }

    /// Drive one round to its end. Returns the settlement, the bust, or
    /// whatever stopped the round.
    pub fn play(&self, session: &mut Session) -> Event {
        loop {
            let command = match self.stops(session.round().cursor()) {
                true => Command::Settle,
                false => Command::Advance,
            };
            match session.apply(command) {
                Event::Dealt { outcome, .. } if !outcome.is_bust() => continue,
                event => return event,
            }
        }
    }
}

impl From<Option<usize>> for Strategy {
    fn from(row: Option<usize>) -> Self {
        match row {
            Some(row) => Self::CashAt(row),
            None => Self::Ride,
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::CashAt(row) => write!(f, "cash at row {}", row),
            Self::Ride => write!(f, "ride"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::deck::Deck;
    use crate::round::payout::Prize;

    #[test]
    fn stops_after_row() {
        assert!(!Strategy::CashAt(2).stops(2));
        assert!(Strategy::CashAt(2).stops(3));
        assert!(!Strategy::Ride.stops(8));
    }

    #[test]
    fn cashes_at_first_row() {
        let mut session = Session::default();
        session.new_round_from(Deck::from("7 1 2"));
        match Strategy::CashAt(1).play(&mut session) {
            Event::Settled(payout) => {
                assert_eq!(payout.prize, Prize::Row(1));
                assert_eq!(payout.amount, 3);
            }
            other => panic!("expected settlement, got {:?}", other),
        }
    }
}
