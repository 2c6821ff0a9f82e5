//! `snapshot` subcommand: both feeds at once.

use chrono::{Local, NaiveDateTime};
use wld_feed::client::FeedClient;
use wld_feed::{FeedConfig, FeedError, LossRecord, StatsSummary};
use wld_view::derive_view;

fn losses_line(losses: &Result<Vec<LossRecord>, FeedError>, now: &NaiveDateTime) -> String {
    match losses {
        Ok(records) => {
            let view = derive_view(records, now);
            let days = view
                .days_without_losses
                .map_or_else(|| "unknown".to_string(), |d| d.to_string());
            format!(
                "losses: {} records, {} recent, {} days without reported losses",
                records.len(),
                view.recent_losses.len(),
                days
            )
        }
        Err(e) => format!("losses: unavailable ({})", e),
    }
}

fn stats_line(stats: &Result<StatsSummary, FeedError>) -> String {
    match stats {
        Ok(stats) => format!(
            "stats: {} total across {} statuses, {} equipment types",
            stats.counts_by_status.total(),
            stats.counts_by_status.len(),
            stats.counts_by_type.len()
        ),
        Err(e) => format!("stats: unavailable ({})", e),
    }
}

/// One feed failing does not hide the other; the command fails only if both do.
pub async fn run_snapshot(config: &FeedConfig) -> anyhow::Result<()> {
    let client = FeedClient::new(config.clone());
    let (losses, stats) = client.fetch_both().await;
    let now = Local::now().naive_local();
    println!("{}", losses_line(&losses, &now));
    println!("{}", stats_line(&stats));
    if losses.is_err() && stats.is_err() {
        anyhow::bail!("both feeds failed for {}", config.country);
    }
    Ok(())
}
