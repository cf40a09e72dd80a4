use clap::Parser;
use gatetower::analysis::Simulation;
use gatetower::analysis::Strategy;
use gatetower::round::Options;
use gatetower::round::Session;
use gatetower::terminal::*;
use std::time::Duration;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    gatetower::log(args.verbose)?;
    let options = Options::from(&args);
    match args.mode {
        Some(Mode::Simulate {
            rounds,
            cash_at,
            seed,
        }) => {
            let report = Simulation {
                rounds,
                strategy: Strategy::from(cash_at),
                seed,
                wager: args.wager,
            }
            .run();
            match args.json {
                true => println!("{}", serde_json::to_string_pretty(&report)?),
                false => println!("{}", report),
            }
        }
        None => {
            let controller: Box<dyn Controller> = match args.plain {
                true => Box::new(Lines::stdin()),
                false => Box::new(Prompt),
            };
            let ledger = Console::new(Session::new(options), controller)
                .pace(Duration::from_millis(args.pace))
                .json(args.json)
                .run()?;
            println!("{}", ledger);
        }
    }
    Ok(())
}
