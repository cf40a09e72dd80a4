use colored::Colorize;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum State {
    /// no cards on the table, wager may change
    Betting,
    Playing,
    /// an unrescued bust ended the round
    GameOver,
}

impl std::fmt::Display for State {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            State::Betting => write!(f, "{}", "BETTING".cyan()),
            State::Playing => write!(f, "{}", "PLAYING".green()),
            State::GameOver => write!(f, "{}", "GAME OVER".red()),
        }
    }
}
