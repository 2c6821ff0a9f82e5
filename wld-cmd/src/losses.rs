//! `losses` subcommand: the map card's figures, as text.

use chrono::{Local, NaiveDateTime, NaiveTime};
use log::info;
use std::fmt::Write;
use wld_feed::client::FeedClient;
use wld_feed::{FeedConfig, LossRecord};
use wld_view::present::{days_without_losses_label, ListItem};
use wld_view::{derive_view, RECENT_WINDOW_DAYS};

/// Resolve `--as-of` to an instant; today (local time) when absent.
pub fn resolve_now(as_of: Option<&str>) -> anyhow::Result<NaiveDateTime> {
    match as_of {
        Some(s) => {
            let date = wld_utils::dates::parse_as_of(s)?;
            Ok(date.and_time(NaiveTime::MIN))
        }
        None => Ok(Local::now().naive_local()),
    }
}

/// Render the losses report.
pub fn render_losses_report(records: &[LossRecord], now: &NaiveDateTime, recent: bool) -> String {
    let view = derive_view(records, now);
    let mut out = String::new();
    let _ = writeln!(out, "{}", days_without_losses_label(view.days_without_losses));
    let _ = writeln!(
        out,
        "{} losses, {} on the map, {} in the last {} days",
        records.len(),
        view.markers.len(),
        view.recent_losses.len(),
        RECENT_WINDOW_DAYS
    );
    if recent {
        for record in &view.recent_losses {
            let item = ListItem::from_record(record);
            let _ = writeln!(out, "- {}", item.headline);
            let _ = writeln!(out, "  {}", item.subline);
        }
    }
    out
}

pub async fn run_losses(config: &FeedConfig, as_of: Option<&str>, recent: bool) -> anyhow::Result<()> {
    let now = resolve_now(as_of)?;
    info!("Fetching losses from {}", config.losses_url());
    let client = FeedClient::new(config.clone());
    let records = client.fetch_losses().await?;
    print!("{}", render_losses_report(&records, &now, recent));
    Ok(())
}
