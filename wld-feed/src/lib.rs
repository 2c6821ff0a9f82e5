//! Feed models and API access for the war losses dashboard.
//!
//! - `loss`: one reported equipment loss and the losses payload
//! - `stats`: aggregated counts per status and per equipment type
//! - `endpoint`: host/country configuration and URL building
//! - `error`: fetch and decode failures
//! - `client`: native `reqwest` client (only with the `api` feature)

pub mod endpoint;
pub mod error;
pub mod loss;
pub mod stats;

#[cfg(feature = "api")]
pub mod client;

pub use endpoint::{Feed, FeedConfig};
pub use error::FeedError;
pub use loss::{LossId, LossRecord, LossesResponse};
pub use stats::{Counts, StatsSummary, StatusCount, StatusCounts, TypeCounts};
