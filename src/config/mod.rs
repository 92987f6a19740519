#[cfg(feature = "cli")]
pub mod cli;
pub mod registry;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::{CliConfig, OutputFormat};
pub use registry::EndpointRegistry;

use crate::domain::model::{BuoyCategory, Endpoint};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_positive_number, Validate};
use std::time::Duration;

pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// 抓取設定：端點對照表與每次請求的逾時上限
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchConfig {
    registry: EndpointRegistry,
    request_timeout: Duration,
}

impl FetchConfig {
    pub fn new(registry: EndpointRegistry, request_timeout: Duration) -> Self {
        Self {
            registry,
            request_timeout,
        }
    }

    pub fn registry(&self) -> &EndpointRegistry {
        &self.registry
    }

    pub fn with_timeout(self, request_timeout: Duration) -> Self {
        Self {
            request_timeout,
            ..self
        }
    }

    pub fn only(self, categories: &[BuoyCategory]) -> Self {
        Self {
            registry: self.registry.select(categories),
            ..self
        }
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self::new(
            EndpointRegistry::default(),
            Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        )
    }
}

impl ConfigProvider for FetchConfig {
    fn endpoints(&self) -> &[Endpoint] {
        self.registry.endpoints()
    }

    fn request_timeout(&self) -> Duration {
        self.request_timeout
    }
}

impl Validate for FetchConfig {
    fn validate(&self) -> Result<()> {
        validate_positive_number("fetch.timeout_ms", self.request_timeout.as_millis(), 1)?;
        self.registry.validate()
    }
}
