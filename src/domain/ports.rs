use crate::domain::model::Endpoint;
use crate::utils::error::FetchError;
use async_trait::async_trait;
use std::time::Duration;

/// 以 GET 取得一個 URL 並解碼為 JSON
#[async_trait]
pub trait JsonSource: Send + Sync {
    async fn get_json(
        &self,
        url: &str,
        timeout: Duration,
    ) -> std::result::Result<serde_json::Value, FetchError>;
}

pub trait ConfigProvider: Send + Sync {
    fn endpoints(&self) -> &[Endpoint];
    fn request_timeout(&self) -> Duration;
}
