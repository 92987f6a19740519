use crate::core::{CategoryResult, ConfigProvider, Endpoint, FetchReport, JsonSource};
use chrono::Utc;
use std::time::Instant;

/// 依登錄順序逐一抓取各類別；單一類別失敗不影響其他類別
pub struct BuoyFetcher<S: JsonSource, C: ConfigProvider> {
    source: S,
    config: C,
}

impl<S: JsonSource, C: ConfigProvider> BuoyFetcher<S, C> {
    pub fn new(source: S, config: C) -> Self {
        Self { source, config }
    }

    pub fn config(&self) -> &C {
        &self.config
    }

    pub async fn fetch_one(&self, endpoint: &Endpoint) -> CategoryResult {
        let started = Instant::now();
        let outcome = self
            .source
            .get_json(&endpoint.url, self.config.request_timeout())
            .await;

        match &outcome {
            Ok(_) => tracing::info!(
                "✅ Fetched {} in {:?}",
                endpoint.category,
                started.elapsed()
            ),
            Err(e) => tracing::warn!(
                "❌ Fetching {} failed ({:?}): {}",
                endpoint.category,
                e.kind(),
                e
            ),
        }

        CategoryResult {
            category: endpoint.category,
            url: endpoint.url.clone(),
            outcome,
        }
    }

    pub async fn fetch_all(&self) -> FetchReport {
        let mut report = FetchReport::new(Utc::now());
        let endpoints = self.config.endpoints();
        tracing::info!("🚀 Fetching {} buoy categories", endpoints.len());

        for endpoint in endpoints {
            report.results.push(self.fetch_one(endpoint).await);
        }

        tracing::info!(
            "Finished: {} succeeded, {} failed",
            report.success_count(),
            report.failure_count()
        );
        report
    }
}
