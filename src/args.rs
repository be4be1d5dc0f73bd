use clap::Parser;
use std::num::NonZeroUsize;
use std::path::PathBuf;

/// Preview the new transactions of a ledger file and mark them as processed.
#[derive(Parser, Debug)]
pub struct Args {
    /// Processing profile to use
    pub profile: String,

    /// Ledger file to process
    pub path: PathBuf,

    /// Configuration file defining the processing profiles
    #[clap(long, default_value = "ledger-triage.yaml")]
    pub config: PathBuf,

    /// Database file remembering which transactions were already processed
    #[clap(long, default_value = "ledger-triage.db")]
    pub database: PathBuf,

    /// How many of the latest new transactions to show before asking to process them
    #[clap(long, default_value = "10")]
    pub display_limit: NonZeroUsize,
}

pub fn parse() -> Args {
    Args::parse()
}
