use super::controller::Controller;
use super::controller::Intent;
use super::render;
use crate::round::event::Event;
use crate::round::ledger::Ledger;
use crate::round::session::Session;
use crate::Chips;
use colored::Colorize;
use std::time::Duration;

/// The turn loop: show the state, ask for an intent, apply it, show the
/// tower, pause.
pub struct Console {
    session: Session,
    controller: Box<dyn Controller>,
    pace: Duration,
    json: bool,
}

impl Console {
    pub fn new(session: Session, controller: Box<dyn Controller>) -> Self {
        Self {
            session,
            controller,
            pace: Duration::from_millis(crate::PACE_MILLIS),
            json: false,
        }
    }
    pub fn pace(mut self, pace: Duration) -> Self {
        self.pace = pace;
        self
    }
    pub fn json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// play until the controller quits; returns the session tallies
    pub fn run(&mut self) -> anyhow::Result<Ledger> {
        loop {
            let snapshot = self.session.snapshot();
            if !self.json {
                println!("{}", render::status(&snapshot));
            }
            match self.controller.intent(&snapshot)? {
                Intent::Quit => break,
                Intent::Wager(wager) => {
                    if let Some(line) = self.wager(wager) {
                        println!("{}", line);
                    }
                }
                Intent::Play(command) => {
                    let event = self.session.apply(command);
                    self.report(&event);
                }
                Intent::Symbol(symbol) => {
                    let event = self.session.input(&symbol);
                    self.report(&event);
                }
            }
            self.show()?;
            std::thread::sleep(self.pace);
        }
        log::info!("{}", self.session.ledger());
        Ok(*self.session.ledger())
    }

    /// Apply a wager change; a rejection comes back as a line for the
    /// human-readable stream.
    fn wager(&mut self, wager: Chips) -> Option<String> {
        match self.session.set_wager(wager) {
            Ok(()) => {
                log::info!("wager set to {}", wager);
                None
            }
            Err(e) => {
                log::warn!("{}", e);
                self.visible(e.to_string().red().to_string())
            }
        }
    }

    fn report(&self, event: &Event) {
        if let Some(line) = render::event(event).and_then(|line| self.visible(line)) {
            println!("{}", line);
        }
    }

    /// JSON mode keeps stdout to one snapshot per line.
    fn visible(&self, line: String) -> Option<String> {
        match self.json {
            true => None,
            false => Some(line),
        }
    }

    fn show(&self) -> anyhow::Result<()> {
        let snapshot = self.session.snapshot();
        if self.json {
            println!("{}", serde_json::to_string(&snapshot)?);
        } else {
            println!("{}\n", render::tower(&snapshot));
        }
        Ok(())
    }
}
