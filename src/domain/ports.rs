use crate::domain::model::{RequestTarget, SourceKind};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
    fn exists(&self, path: &str) -> impl std::future::Future<Output = bool> + Send;
}

/// Per-user favorites persistence: `get(user_id)` / `put(user_id, list)`.
pub trait KeyValueStore: Send + Sync {
    fn get(
        &self,
        user_id: &str,
    ) -> impl std::future::Future<Output = Result<Option<Vec<String>>>> + Send;
    fn put(
        &self,
        user_id: &str,
        values: &[String],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn source_endpoint(&self, kind: SourceKind) -> &str;
    fn favorites_dir(&self) -> &str;
    fn request_timeout(&self) -> Option<Duration>;
    fn user_agent(&self) -> &str;
}

/// Fetches the raw `results` array of one source.
#[async_trait]
pub trait RecordFetcher: Send + Sync {
    async fn fetch(
        &self,
        source: SourceKind,
        target: &RequestTarget,
    ) -> Result<Vec<serde_json::Value>>;
}
