use crate::adapters::http::HttpFetcher;
use crate::core::geo::filter_by_distance;
use crate::core::mapping::normalize_all;
use crate::core::query::build_query;
use crate::core::source::SourceDescriptor;
use crate::domain::model::{FilterCriteria, Monument, SourceKind};
use crate::domain::ports::{ConfigProvider, RecordFetcher};
use crate::utils::error::Result;
use futures::future::join_all;

/// Result of querying one source.
#[derive(Debug)]
pub struct SourceOutcome {
    pub source: SourceKind,
    pub result: Result<Vec<Monument>>,
}

/// 聚合三個開放資料來源並轉換成統一格式
pub struct MonumentAggregator<F: RecordFetcher> {
    fetcher: F,
    sources: Vec<SourceDescriptor>,
}

impl<F: RecordFetcher> MonumentAggregator<F> {
    pub fn new(fetcher: F, sources: Vec<SourceDescriptor>) -> Self {
        Self { fetcher, sources }
    }

    pub fn sources(&self) -> &[SourceDescriptor] {
        &self.sources
    }

    /// Queries every source concurrently and keeps each outcome separate.
    pub async fn fetch_outcomes(&self, criteria: &FilterCriteria) -> Vec<SourceOutcome> {
        let futures = self.sources.iter().map(|source| async move {
            let target = build_query(source, criteria);
            tracing::debug!("📡 {}: GET {}", source.kind, target.to_url());

            let result = self
                .fetcher
                .fetch(source.kind, &target)
                .await
                .map(|records| normalize_all(source.fields, &records));

            SourceOutcome {
                source: source.kind,
                result,
            }
        });

        join_all(futures).await
    }

    /// Concatenates every source that answered, then applies the distance filter if any.
    /// A failing source is logged and contributes nothing.
    pub async fn fetch_all(&self, criteria: &FilterCriteria) -> Vec<Monument> {
        let outcomes = self.fetch_outcomes(criteria).await;
        let mut monuments = Vec::new();

        for outcome in outcomes {
            match outcome.result {
                Ok(records) => {
                    tracing::debug!("📥 {}: {} records", outcome.source, records.len());
                    monuments.extend(records);
                }
                Err(e) => {
                    tracing::warn!("⚠️ {}: source skipped: {}", outcome.source, e);
                }
            }
        }

        if let Some(geo) = criteria.geo_filter() {
            let before = monuments.len();
            monuments = filter_by_distance(monuments, &geo);
            tracing::debug!(
                "📍 Distance filter ({:.0} m around {}, {}): {} -> {} records",
                geo.radius_meters,
                geo.center.lat,
                geo.center.lon,
                before,
                monuments.len()
            );
        }

        tracing::info!("✅ {} monuments aggregated", monuments.len());
        monuments
    }

    /// Distinct `type` values across the full dump of every source, in first-seen order.
    pub async fn list_types(&self) -> Vec<String> {
        let monuments = self.fetch_all(&FilterCriteria::default()).await;
        let mut types: Vec<String> = Vec::new();

        for monument_type in monuments.into_iter().filter_map(|m| m.monument_type) {
            if !types.contains(&monument_type) {
                types.push(monument_type);
            }
        }

        types
    }
}

impl MonumentAggregator<HttpFetcher> {
    /// HTTP-backed aggregator over the endpoints of `config`.
    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        Ok(Self::new(
            HttpFetcher::from_config(config)?,
            SourceDescriptor::from_config(config),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{Coordinates, RequestTarget};
    use crate::utils::error::MonumentError;
    use async_trait::async_trait;
    use serde_json::{json, Value};
    use std::collections::HashMap;
    use std::sync::Mutex;

    struct MockFetcher {
        responses: HashMap<SourceKind, Vec<Value>>,
        requests: Mutex<Vec<RequestTarget>>,
    }

    impl MockFetcher {
        fn new(responses: HashMap<SourceKind, Vec<Value>>) -> Self {
            Self {
                responses,
                requests: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl RecordFetcher for MockFetcher {
        async fn fetch(&self, source: SourceKind, target: &RequestTarget) -> Result<Vec<Value>> {
            self.requests.lock().unwrap().push(target.clone());
            self.responses
                .get(&source)
                .cloned()
                .ok_or_else(|| MonumentError::UpstreamStatus {
                    source_tag: source.tag().to_string(),
                    status: 500,
                })
        }
    }

    fn fixtures() -> HashMap<SourceKind, Vec<Value>> {
        HashMap::from([
            (
                SourceKind::Armentieres,
                vec![json!({
                    "monum_his_com_id": "A1",
                    "coordonnees_geographiques": {"lat": 50.6875, "lon": 2.8829},
                    "appellation_courante": "Hôtel de ville",
                    "commune": "Armentières"
                })],
            ),
            (
                SourceKind::Lille,
                vec![
                    json!({
                        "id_merimee": "PA00107501",
                        "coord_geo": "50.6376,3.0635",
                        "edifice": "Eglise",
                        "commune": "Lille"
                    }),
                    json!({"id_merimee": "PA00107502", "edifice": "Hôtel de ville", "commune": "Lille"}),
                ],
            ),
            (
                SourceKind::Roubaix,
                vec![json!({
                    "monum_his_com_id": "R1",
                    "geo_point_2d": {"lat": 50.6942, "lon": 3.1746},
                    "appellation_courante": "Villa",
                    "commune": "Roubaix"
                })],
            ),
        ])
    }

    fn aggregator(responses: HashMap<SourceKind, Vec<Value>>) -> MonumentAggregator<MockFetcher> {
        MonumentAggregator::new(MockFetcher::new(responses), SourceDescriptor::defaults())
    }

    #[tokio::test]
    async fn test_fetch_all_concatenates_sources() {
        let aggregator = aggregator(fixtures());

        let monuments = aggregator.fetch_all(&FilterCriteria::default()).await;

        assert_eq!(monuments.len(), 4);
        let requests = aggregator.fetcher.requests.lock().unwrap();
        assert_eq!(requests.len(), 3);
        assert!(requests.iter().all(|target| target.filter.is_none()));
    }

    #[tokio::test]
    async fn test_failing_source_contributes_nothing() {
        let mut responses = fixtures();
        responses.remove(&SourceKind::Lille);
        let aggregator = aggregator(responses);

        let outcomes = aggregator.fetch_outcomes(&FilterCriteria::default()).await;
        let failed: Vec<_> = outcomes
            .iter()
            .filter(|o| o.result.is_err())
            .map(|o| o.source)
            .collect();
        assert_eq!(failed, vec![SourceKind::Lille]);

        let monuments = aggregator.fetch_all(&FilterCriteria::default()).await;
        let ids: Vec<_> = monuments.iter().filter_map(|m| m.id.as_deref()).collect();
        assert_eq!(ids, vec!["A1", "R1"]);
    }

    #[tokio::test]
    async fn test_all_sources_failing_yields_empty_list() {
        let aggregator = aggregator(HashMap::new());
        assert!(aggregator.fetch_all(&FilterCriteria::default()).await.is_empty());
        assert!(aggregator.list_types().await.is_empty());
    }

    #[tokio::test]
    async fn test_geo_filter_applies_after_concatenation() {
        let aggregator = aggregator(fixtures());
        let criteria = FilterCriteria {
            lat: Some(50.6292),
            lon: Some(3.0573),
            radius_meters: Some(2_000.0),
            ..Default::default()
        };

        let monuments = aggregator.fetch_all(&criteria).await;

        assert_eq!(monuments.len(), 1);
        assert_eq!(monuments[0].id.as_deref(), Some("PA00107501"));
        assert_eq!(
            monuments[0].coordinates,
            Some(Coordinates::new(50.6376, 3.0635))
        );
    }

    #[tokio::test]
    async fn test_radius_without_center_is_ignored() {
        let aggregator = aggregator(fixtures());
        let criteria = FilterCriteria {
            radius_meters: Some(10.0),
            ..Default::default()
        };

        assert_eq!(aggregator.fetch_all(&criteria).await.len(), 4);
    }

    #[tokio::test]
    async fn test_list_types_is_distinct_in_first_seen_order() {
        let aggregator = aggregator(fixtures());

        let types = aggregator.list_types().await;

        assert_eq!(types, vec!["Hôtel de ville", "Eglise", "Villa"]);
    }

    #[tokio::test]
    async fn test_criteria_translated_per_source() {
        let aggregator = aggregator(fixtures());
        let criteria = FilterCriteria {
            monument_type: Some("Eglise".to_string()),
            ..Default::default()
        };

        aggregator.fetch_all(&criteria).await;

        let requests = aggregator.fetcher.requests.lock().unwrap();
        let filters: Vec<_> = requests
            .iter()
            .filter_map(|target| target.filter.clone())
            .collect();
        assert!(filters.contains(&"denomination LIKE '%Eglise%'".to_string()));
        assert!(filters.contains(&"appellation_courante LIKE '%Eglise%'".to_string()));
    }
}
