//! Small client for the Genius API: search an artist by name, fetch the
//! profile of the first match and collect a batch of searches into a report.

pub mod api;
pub mod config;
pub mod models;
pub mod report;

pub use api::{GeniusClient, GeniusError};
pub use config::AppConfig;
pub use models::{Artist, ArtistId, Resolution};
pub use report::{Report, ReportRow};
