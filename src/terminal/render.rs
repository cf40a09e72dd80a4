//! Text for the terminal. Pure functions of a Snapshot or Event.

use crate::round::event::Event;
use crate::round::snapshot::RowView;
use crate::round::snapshot::Snapshot;
use crate::round::state::State;
use crate::tower::outcome::Outcome;
use crate::ROWS;
use colored::Colorize;

/// the dealt rows, gate row first, indented into a pyramid
pub fn tower(snapshot: &Snapshot) -> String {
    if snapshot.cursor == 0 {
        return String::new();
    }
    let mut lines = vec![format!("{}{}", indent(0), snapshot.gate)];
    lines.extend(snapshot.rows.iter().map(row));
    lines.join("\n")
}

fn row(view: &RowView) -> String {
    let cards = view
        .cards
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<String>>()
        .join(" ");
    format!(
        "{}[{}]{}{}",
        indent(view.index),
        cards,
        indent(view.index),
        format!("({})", view.value).green()
    )
}

fn indent(row: usize) -> String {
    " ".repeat(ROWS - row)
}

/// instructions for the current state, then the purse
pub fn status(snapshot: &Snapshot) -> String {
    let hint = match snapshot.state {
        State::Betting => format!("Type \"z\" to bet {}", snapshot.wager),
        State::Playing if snapshot.complete => "\"z\" or \"x\" to collect".to_string(),
        State::Playing => "\"z\" to deal the next row, \"x\" to cash out".to_string(),
        State::GameOver => format!("{} \"z\" or \"x\" to start a new round", "BUST!".red()),
    };
    format!(
        "{}\nMoney: {}  Multiplier: x{}",
        hint, snapshot.balance, snapshot.multiplier
    )
}

/// a line worth reporting after a command, if any
pub fn event(event: &Event) -> Option<String> {
    match event {
        Event::Dealt {
            outcome: Outcome::Clear,
            ..
        } => None,
        Event::Dealt { outcome, .. } => Some(outcome.to_string()),
        Event::Settled(payout) => Some(payout.to_string()),
        Event::Restarted => Some("new round".to_string()),
        Event::Ignored => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::deck::Deck;
    use crate::round::session::Session;

    fn session(deck: &str) -> Session {
        colored::control::set_override(false);
        let mut session = Session::default();
        session.new_round_from(Deck::from(deck));
        session
    }

    #[test]
    fn empty_tower_renders_nothing() {
        assert_eq!(tower(&session("1 1 2").snapshot()), "");
    }

    #[test]
    fn pyramid_with_hidden_gate() {
        let mut session = session("7 1 2 3 4 5");
        session.advance();
        session.advance();
        let text = tower(&session.snapshot());
        let lines = text.lines().collect::<Vec<&str>>();
        assert_eq!(lines[0], "        [?]");
        assert_eq!(lines[1], "       [1 2]       (3)");
        assert_eq!(lines[2], "      [3 4 5]      (12)");
    }

    #[test]
    fn spent_gate_renders_empty() {
        let mut session = session("7 1 1 2 2 1");
        session.advance();
        session.advance();
        assert!(tower(&session.snapshot()).starts_with("        [ ]"));
    }

    #[test]
    fn status_by_state() {
        let mut session = session("7 1 7 2 1 2");
        assert!(status(&session.snapshot()).starts_with("Type \"z\" to bet 15"));
        session.advance();
        assert!(status(&session.snapshot()).contains("\"x\" to cash out"));
        assert!(status(&session.snapshot()).contains("Money: 285"));
        session.advance();
        assert!(status(&session.snapshot()).starts_with("BUST!"));
        assert!(event(&Event::Ignored).is_none());
    }
}
