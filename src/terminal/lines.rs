use super::controller::Controller;
use super::controller::Intent;
use crate::round::snapshot::Snapshot;
use std::io::BufRead;

/// Line protocol: `z` deals, `x` cashes out, `w <n>` sets the wager,
/// `q` quits. End of input quits.
pub struct Lines<R: BufRead> {
    input: R,
}

impl<R: BufRead> Lines<R> {
    pub fn new(input: R) -> Self {
        Self { input }
    }
}

impl Lines<std::io::StdinLock<'static>> {
    pub fn stdin() -> Self {
        Self::new(std::io::stdin().lock())
    }
}

impl<R: BufRead> Controller for Lines<R> {
    fn intent(&mut self, _: &Snapshot) -> anyhow::Result<Intent> {
        let ref mut line = String::new();
        if self.input.read_line(line)? == 0 {
            return Ok(Intent::Quit);
        }
        let words = line.split_whitespace().collect::<Vec<&str>>();
        Ok(match words.as_slice() {
            ["q"] | ["quit"] => Intent::Quit,
            ["w", n] | ["wager", n] => match n.parse() {
                Ok(wager) => Intent::Wager(wager),
                Err(_) => Intent::Symbol(line.trim().to_string()),
            },
            _ => Intent::Symbol(line.trim().to_string()),
        })
    }
}
