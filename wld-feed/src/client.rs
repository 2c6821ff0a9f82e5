//! Native feed client. One best-effort GET per feed, no retries.

use log::{error, info};
use reqwest::Client;
use std::time::Duration;

use crate::endpoint::{Feed, FeedConfig};
use crate::error::{ensure_success, FeedError};
use crate::loss::{LossRecord, LossesResponse};
use crate::stats::StatsSummary;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Debug, Clone)]
pub struct FeedClient {
    client: Client,
    config: FeedConfig,
}

impl FeedClient {
    pub fn new(config: FeedConfig) -> Self {
        Self::with_client(Client::new(), config)
    }

    pub fn with_client(client: Client, config: FeedConfig) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &FeedConfig {
        &self.config
    }

    async fn get_body(&self, feed: Feed) -> Result<String, FeedError> {
        let url = self.config.url(feed);
        let network = |e: reqwest::Error| FeedError::Network {
            url: url.clone(),
            reason: e.to_string(),
        };
        let response = self
            .client
            .get(&url)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await
            .map_err(network)?;
        ensure_success(&url, response.status().as_u16())?;
        response.text().await.map_err(network)
    }

    /// Fetch the losses feed, in source order.
    pub async fn fetch_losses(&self) -> Result<Vec<LossRecord>, FeedError> {
        let body = self.get_body(Feed::Losses).await?;
        let losses = LossesResponse::from_json(&body)?.losses;
        info!("Fetched {} losses for {}", losses.len(), self.config.country);
        Ok(losses)
    }

    /// Fetch the aggregated stats feed.
    pub async fn fetch_stats(&self) -> Result<StatsSummary, FeedError> {
        let body = self.get_body(Feed::Stats).await?;
        let stats = StatsSummary::from_json(&body)?;
        info!(
            "Fetched stats for {}: {} statuses, {} types",
            self.config.country,
            stats.counts_by_status.len(),
            stats.counts_by_type.len()
        );
        Ok(stats)
    }

    /// Fetch both feeds concurrently. Each result stands on its own.
    pub async fn fetch_both(
        &self,
    ) -> (
        Result<Vec<LossRecord>, FeedError>,
        Result<StatsSummary, FeedError>,
    ) {
        let (losses, stats) = tokio::join!(self.fetch_losses(), self.fetch_stats());
        if let Err(e) = &losses {
            error!("Error fetching war losses: {}", e);
        }
        if let Err(e) = &stats {
            error!("Error fetching war stats: {}", e);
        }
        (losses, stats)
    }
}
