pub mod command;
pub use command::*;

pub mod event;
pub use event::*;

pub mod ledger;
pub use ledger::*;

pub mod options;
pub use options::*;

pub mod payout;
pub use payout::*;

pub mod round;
pub use round::*;

pub mod session;
pub use session::*;

pub mod snapshot;
pub use snapshot::*;

pub mod state;
pub use state::*;

#[cfg(test)]
mod tests;
