use super::payout::Payout;
use crate::tower::outcome::Outcome;

/// What a command did, for the presentation layer to report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// rows dealt by this command, and the outcome of the last one
    Dealt { rows: usize, outcome: Outcome },
    Settled(Payout),
    Restarted,
    Ignored,
}
