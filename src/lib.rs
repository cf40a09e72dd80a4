pub mod analysis;
pub mod cards;
pub mod round;
#[cfg(feature = "terminal")]
pub mod terminal;
pub mod tower;

pub type Chips = i64;

/// deck and tower geometry
pub const ROWS: usize = 8;
pub const VALUES: usize = 8;
pub const GATE_COPIES: usize = 4;
pub const VALUE_COPIES: usize = 8;
pub const DECK_SIZE: usize = GATE_COPIES + (VALUES - 1) * VALUE_COPIES;
pub const TOWER_SIZE: usize = ROWS * (ROWS + 1) / 2;

// a full tower can always be dealt from one deck
const _: () = assert!(TOWER_SIZE <= DECK_SIZE);

/// table parameters
pub const BASE_WAGER: Chips = 15;
pub const MAX_WAGER: Chips = 1_000_000;
pub const STARTING_BALANCE: Chips = 300;
pub const PACE_MILLIS: u64 = 200;
pub const LOG_FILE: &str = "gatetower.log";

/// initialize logging. the terminal belongs to the game, so records go to
/// a file unless verbose output is requested on stderr as well.
#[cfg(feature = "terminal")]
pub fn log(verbose: bool) -> anyhow::Result<()> {
    use simplelog::*;
    let config = ConfigBuilder::new()
        .set_location_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .build();
    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![WriteLogger::new(
        LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(LOG_FILE)?,
    )];
    if verbose {
        loggers.push(TermLogger::new(
            LevelFilter::Info,
            config,
            TerminalMode::Stderr,
            ColorChoice::Auto,
        ));
    }
    CombinedLogger::init(loggers)?;
    Ok(())
}
