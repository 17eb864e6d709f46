use crate::domain::model::{RequestTarget, SourceKind};
use crate::domain::ports::{ConfigProvider, RecordFetcher};
use crate::utils::error::{MonumentError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

/// explore v2.1 `/records` envelope.
#[derive(Debug, Deserialize)]
struct RecordsEnvelope {
    results: Vec<serde_json::Value>,
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        let mut builder = Client::builder().user_agent(config.user_agent().to_string());
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        Ok(Self::new(builder.build()?))
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new(Client::new())
    }
}

#[async_trait]
impl RecordFetcher for HttpFetcher {
    async fn fetch(
        &self,
        source: SourceKind,
        target: &RequestTarget,
    ) -> Result<Vec<serde_json::Value>> {
        let mut request = self.client.get(&target.endpoint);
        if let Some(filter) = &target.filter {
            request = request.query(&[("where", filter)]);
        }

        let response = request.send().await?;
        tracing::debug!("{}: API response status: {}", source, response.status());

        if !response.status().is_success() {
            return Err(MonumentError::UpstreamStatus {
                source_tag: source.tag().to_string(),
                status: response.status().as_u16(),
            });
        }

        let body = response.bytes().await?;
        let envelope: RecordsEnvelope =
            serde_json::from_slice(&body).map_err(|e| MonumentError::MalformedPayload {
                source_tag: source.tag().to_string(),
                message: e.to_string(),
            })?;

        Ok(envelope.results)
    }
}
