//! Dioxus RSX components for the dashboard surfaces.

mod card_header;
mod error_display;
mod loading_spinner;
mod losses_map_card;
mod map_container;
mod recent_losses_list;
mod stats_card;

pub use card_header::CardHeader;
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use losses_map_card::{LossesMapCard, MAP_CARD_ID, MAP_ID};
pub use map_container::MapContainer;
pub use recent_losses_list::RecentLossesList;
pub use stats_card::StatsCard;
