//! `stats` subcommand: the stats card, as text.

use log::info;
use std::fmt::Write;
use wld_feed::client::FeedClient;
use wld_feed::{FeedConfig, StatsSummary};
use wld_view::present::{status_rows, type_rows, TYPE_TABLE_HEADERS};

/// Render the status list and the type table, both in feed order.
pub fn render_stats_report(stats: &StatsSummary) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Counts by Status");
    for row in status_rows(stats) {
        let _ = writeln!(out, "  {}", row.label());
    }

    let rows: Vec<[String; 5]> = type_rows(stats).iter().map(|r| r.cells()).collect();
    let mut widths = TYPE_TABLE_HEADERS.map(str::len);
    for cells in &rows {
        for (width, cell) in widths.iter_mut().zip(cells) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let _ = writeln!(out, "Counts by Type");
    let header = TYPE_TABLE_HEADERS.map(str::to_string);
    for cells in std::iter::once(&header).chain(rows.iter()) {
        let line: Vec<String> = cells
            .iter()
            .zip(widths)
            .enumerate()
            .map(|(i, (cell, width))| {
                if i == 0 {
                    format!("{:<width$}", cell, width = width)
                } else {
                    format!("{:>width$}", cell, width = width)
                }
            })
            .collect();
        let _ = writeln!(out, "  {}", line.join("  ").trim_end());
    }
    out
}

pub async fn run_stats(config: &FeedConfig) -> anyhow::Result<()> {
    info!("Fetching stats from {}", config.stats_url());
    let client = FeedClient::new(config.clone());
    let stats = client.fetch_stats().await?;
    print!("{}", render_stats_report(&stats));
    Ok(())
}
