//! Command implementations for the war losses CLI.
//!
//! Provides subcommands that fetch the losses and stats feeds and print the
//! same derived figures the dashboard shows.

use clap::{Args, Subcommand};
use wld_feed::endpoint::{DEFAULT_COUNTRY, DEFAULT_HOST};
use wld_feed::FeedConfig;

pub mod losses;
pub mod snapshot;
pub mod stats;

/// Where to fetch from.
#[derive(Args, Debug, Clone)]
pub struct FeedArgs {
    /// Feed host, or a full http(s):// base URL
    #[arg(long, default_value = DEFAULT_HOST)]
    pub host: String,

    /// Country path segment of the feeds
    #[arg(long, default_value = DEFAULT_COUNTRY)]
    pub country: String,
}

impl FeedArgs {
    pub fn config(&self) -> FeedConfig {
        FeedConfig::new(&self.host, &self.country)
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Days without reported losses, marker count and optionally the recent list
    Losses {
        #[command(flatten)]
        feed: FeedArgs,

        /// Evaluate as of this date (YYYY-MM-DD) instead of today
        #[arg(long)]
        as_of: Option<String>,

        /// Also list losses from the last 7 days
        #[arg(long)]
        recent: bool,
    },

    /// Counts by status and by equipment type
    Stats {
        #[command(flatten)]
        feed: FeedArgs,
    },

    /// Fetch both feeds concurrently and print a one-line summary of each
    Snapshot {
        #[command(flatten)]
        feed: FeedArgs,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Losses {
            feed,
            as_of,
            recent,
        } => losses::run_losses(&feed.config(), as_of.as_deref(), recent).await,
        Command::Stats { feed } => stats::run_stats(&feed.config()).await,
        Command::Snapshot { feed } => snapshot::run_snapshot(&feed.config()).await,
    }
}
