use crate::cards::card::Card;
use serde::Serialize;

/// What bust handling made of a freshly dealt row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Outcome {
    Clear,
    /// the gate card replaced the colliding card, which was burned
    Rescued { column: usize, burned: Card },
    Bust { column: usize },
}

impl Outcome {
    pub fn is_bust(&self) -> bool {
        matches!(self, Self::Bust { .. })
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use colored::Colorize;
        match self {
            Self::Clear => write!(f, "{}", "CLEAR".white()),
            Self::Rescued { column, burned } => write!(
                f,
                "{}",
                format!("GATE  saved column {} (burned {})", column, burned.value()).yellow()
            ),
            Self::Bust { column } => write!(f, "{}", format!("BUST  at column {}", column).red()),
        }
    }
}
