/// The two symbols a player can send to a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// deal the next row, or confirm
    Advance,
    /// cash out at the current row
    Settle,
}

impl TryFrom<&str> for Command {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "z" | "advance" | "deal" => Ok(Self::Advance),
            "x" | "settle" | "cash" => Ok(Self::Settle),
            other => Err(anyhow::anyhow!("unrecognized command {:?}", other)),
        }
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Advance => write!(f, "z"),
            Self::Settle => write!(f, "x"),
        }
    }
}
