use crate::round::command::Command;
use crate::round::snapshot::Snapshot;
use crate::Chips;

/// What the player wants next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Play(Command),
    /// raw symbol, passed through to the session unparsed
    Symbol(String),
    Wager(Chips),
    Quit,
}

/// Source of player intents. Implementors decide how to ask.
pub trait Controller {
    fn intent(&mut self, snapshot: &Snapshot) -> anyhow::Result<Intent>;
}
