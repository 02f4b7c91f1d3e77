//! dominion-check CLI - randomized property checks for a card effect.
//!
//! PASS/FAIL lines and the final tally go to stdout; state dumps, rule
//! echoes and logs go to stderr. The exit status is 0 whatever the checks
//! report.

use clap::{Parser, ValueEnum};
use tracing::info;

use dominion_check::core::DEFAULT_TRIALS;
use dominion_check::{battery_for, Card, ReferenceEngine, ReportConfig, Reporter, TrialConfig, TrialDriver};

#[derive(Parser)]
#[command(name = "dominion-check")]
#[command(about = "Randomized property checks for Dominion card effects")]
struct Args {
    /// Trials per phase
    #[arg(default_value_t = DEFAULT_TRIALS)]
    trials: usize,

    /// Card effect to check
    #[arg(long, value_enum, default_value = "adventurer")]
    card: CardArg,

    /// Driver seed (drawn from the OS when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Only print failing checks
    #[arg(short, long)]
    quiet: bool,

    /// Echo each rule to stderr before it is checked
    #[arg(long)]
    debug_rules: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CardArg {
    Adventurer,
    SeaHag,
}

impl From<CardArg> for Card {
    fn from(arg: CardArg) -> Self {
        match arg {
            CardArg::Adventurer => Card::Adventurer,
            CardArg::SeaHag => Card::SeaHag,
        }
    }
}

fn main() {
    let args = Args::parse();

    let filter = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let card = Card::from(args.card);
    let Some(battery) = battery_for(card) else {
        // Every `CardArg` has a battery.
        return;
    };

    let report = ReportConfig::default()
        .with_print_on_success(!args.quiet)
        .with_debug_rules(args.debug_rules);
    let mut config = TrialConfig::new().with_trials(args.trials).with_report(report);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    let mut driver = TrialDriver::new(ReferenceEngine::new(), battery, config, Reporter::stdio(report));
    info!(seed = driver.seed(), trials = args.trials, %card, "starting run");
    driver.run();
}
