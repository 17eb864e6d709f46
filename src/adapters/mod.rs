// Adapters layer: concrete implementations for external systems (http sources, favorites storage).

pub mod http;
pub mod storage;
