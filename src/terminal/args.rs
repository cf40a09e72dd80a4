use crate::round::options::Options;
use crate::round::options::Settlement;
use crate::Chips;
use crate::BASE_WAGER;
use crate::MAX_WAGER;
use crate::PACE_MILLIS;
use crate::STARTING_BALANCE;
use clap::Parser;
use clap::Subcommand;

#[derive(Parser, Debug)]
#[command(author, version, about = "Deal the tower, dodge the busts, cash out or ride", long_about = None)]
pub struct Args {
    #[arg(long, default_value_t = STARTING_BALANCE, help = "Starting balance")]
    pub balance: Chips,
    #[arg(long, default_value_t = BASE_WAGER, value_parser = clap::value_parser!(i64).range(1..=MAX_WAGER), help = "Wager per round")]
    pub wager: Chips,
    #[arg(long, default_value_t = PACE_MILLIS, help = "Milliseconds to pause between turns")]
    pub pace: u64,
    #[arg(long, help = "Fixed shuffle seed")]
    pub seed: Option<u64>,
    #[arg(long, help = "Cash out a complete tower without waiting")]
    pub auto_settle: bool,
    #[arg(long, help = "Read raw z/x lines instead of menus")]
    pub plain: bool,
    #[arg(long, help = "Print state as JSON")]
    pub json: bool,
    #[arg(short, long, help = "Echo logs to stderr")]
    pub verbose: bool,
    #[command(subcommand)]
    pub mode: Option<Mode>,
}

#[derive(Subcommand, Debug)]
pub enum Mode {
    #[command(about = "Estimate the return of a cash-out policy", alias = "sim")]
    Simulate {
        #[arg(long, default_value_t = 100_000)]
        rounds: usize,
        #[arg(long, value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..8), help = "Playing row to cash out at; rides the whole tower when absent")]
        cash_at: Option<usize>,
        #[arg(long, default_value_t = 0)]
        seed: u64,
    },
}

impl From<&Args> for Options {
    fn from(args: &Args) -> Self {
        Self {
            balance: args.balance,
            wager: args.wager,
            settlement: match args.auto_settle {
                true => Settlement::Automatic,
                false => Settlement::Explicit,
            },
            seed: args.seed,
        }
    }
}
