use super::session::Session;
use super::state::State;
use crate::Chips;
use serde::Serialize;

/// Row 0 never reveals its card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Gate {
    Hidden,
    Empty,
}

impl std::fmt::Display for Gate {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Gate::Hidden => write!(f, "[?]"),
            Gate::Empty => write!(f, "[ ]"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowView {
    pub index: usize,
    pub cards: Vec<u8>,
    pub value: Chips,
}

/// The externally visible state of a session, safe to render or ship.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub balance: Chips,
    pub wager: Chips,
    pub multiplier: Chips,
    pub state: State,
    pub cursor: usize,
    pub complete: bool,
    pub jackpot: bool,
    pub gate: Gate,
    pub rows: Vec<RowView>,
}

impl From<&Session> for Snapshot {
    fn from(session: &Session) -> Self {
        let round = session.round();
        let tower = round.tower();
        Self {
            balance: session.balance(),
            wager: session.wager(),
            multiplier: round.multiplier(),
            state: round.state(),
            cursor: round.cursor(),
            complete: tower.is_complete(),
            jackpot: tower.is_jackpot(),
            gate: match tower.gate() {
                Some(_) => Gate::Hidden,
                None => Gate::Empty,
            },
            rows: (1..round.cursor())
                .map(|index| RowView {
                    index,
                    cards: tower.row(index).cards().iter().map(|c| c.value()).collect(),
                    value: round.display_value(index),
                })
                .collect(),
        }
    }
}
