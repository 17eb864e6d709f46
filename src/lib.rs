pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::TomlConfig;

pub use adapters::http::HttpFetcher;
pub use adapters::storage::{JsonFileStore, LocalStorage};
pub use crate::core::{aggregator::MonumentAggregator, favorites::FavoritesService};
pub use domain::model::{Coordinates, Datation, FilterCriteria, Monument, SourceKind};
pub use utils::error::{MonumentError, Result};
