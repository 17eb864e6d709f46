pub mod aggregator;
pub mod favorites;
pub mod geo;
pub mod mapping;
pub mod query;
pub mod source;

pub use crate::domain::model::{Coordinates, Datation, FilterCriteria, Monument, SourceKind};
pub use crate::domain::ports::{ConfigProvider, KeyValueStore, RecordFetcher, Storage};
pub use crate::utils::error::Result;
