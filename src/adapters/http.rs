use crate::domain::ports::JsonSource;
use crate::utils::error::{FetchError, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// reqwest 實作的 JSON 來源
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: Client,
}

impl HttpSource {
    pub fn new() -> Result<Self> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { client })
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl JsonSource for HttpSource {
    async fn get_json(
        &self,
        url: &str,
        timeout: Duration,
    ) -> std::result::Result<serde_json::Value, FetchError> {
        tracing::debug!("Making API request to: {}", url);

        let response = self
            .client
            .get(url)
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| FetchError::from_reqwest(e, timeout))?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        // 逾時設定涵蓋讀取 body 的時間
        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::from_reqwest(e, timeout))?;

        Ok(serde_json::from_slice(&body)?)
    }
}
