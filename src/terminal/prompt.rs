use super::controller::Controller;
use super::controller::Intent;
use crate::round::command::Command;
use crate::round::snapshot::Snapshot;
use crate::round::state::State;
use crate::Chips;
use dialoguer::Input;
use dialoguer::Select;

/// Interactive menus on the controlling terminal.
pub struct Prompt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Choice {
    Bet(Chips),
    Deal,
    Collect,
    Cash,
    Restart,
    Wager,
    Quit,
}

impl Choice {
    fn menu(snapshot: &Snapshot) -> Vec<Self> {
        match snapshot.state {
            State::Betting => vec![Self::Bet(snapshot.wager), Self::Wager, Self::Quit],
            State::Playing if snapshot.complete => vec![Self::Collect, Self::Quit],
            State::Playing => vec![Self::Deal, Self::Cash, Self::Quit],
            State::GameOver => vec![Self::Restart, Self::Quit],
        }
    }
}

impl std::fmt::Display for Choice {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Bet(wager) => write!(f, "Bet {}", wager),
            Self::Deal => write!(f, "Deal the next row"),
            Self::Collect => write!(f, "Collect"),
            Self::Cash => write!(f, "Cash out"),
            Self::Restart => write!(f, "New round"),
            Self::Wager => write!(f, "Change wager"),
            Self::Quit => write!(f, "Quit"),
        }
    }
}

impl Prompt {
    fn wager(&self, current: Chips) -> anyhow::Result<Chips> {
        Ok(Input::<Chips>::new()
            .with_prompt("Wager")
            .default(current)
            .validate_with(|w: &Chips| -> Result<(), &str> {
                match *w > 0 {
                    true => Ok(()),
                    false => Err("Wager must be positive"),
                }
            })
            .interact_text()?)
    }
}

impl Controller for Prompt {
    fn intent(&mut self, snapshot: &Snapshot) -> anyhow::Result<Intent> {
        let choices = Choice::menu(snapshot);
        let selection = Select::new()
            .items(&choices)
            .default(0)
            .report(false)
            .interact()?;
        Ok(match choices[selection] {
            Choice::Bet(_) | Choice::Deal | Choice::Restart => Intent::Play(Command::Advance),
            Choice::Collect | Choice::Cash => Intent::Play(Command::Settle),
            Choice::Wager => Intent::Wager(self.wager(snapshot.wager)?),
            Choice::Quit => Intent::Quit,
        })
    }
}
