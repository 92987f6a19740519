use crate::domain::model::{BuoyCategory, Endpoint};
use crate::utils::error::{BuoyError, Result};
use crate::utils::validation::{validate_url, Validate};
use std::collections::HashSet;

pub const MOORED_URL: &str = "https://incois.gov.in/OON/fetchMooredBuoyData.jsp";
pub const AWS_URL: &str = "https://incois.gov.in/OON/fetchAWSBuoyData.jsp";
pub const DRIFTING_URL: &str = "https://incois.gov.in/OON/fetchDRIFTINGBuoyData.jsp";
pub const ARGO_URL: &str = "https://incois.gov.in/OON/fetchArgoData.jsp";

/// 類別到端點的對照表，建立後不再變動
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointRegistry {
    endpoints: Vec<Endpoint>,
}

impl EndpointRegistry {
    pub fn new(endpoints: Vec<Endpoint>) -> Self {
        Self { endpoints }
    }

    pub fn default_url(category: BuoyCategory) -> &'static str {
        match category {
            BuoyCategory::Moored => MOORED_URL,
            BuoyCategory::Aws => AWS_URL,
            BuoyCategory::Drifting => DRIFTING_URL,
            BuoyCategory::Argo => ARGO_URL,
        }
    }

    pub fn endpoints(&self) -> &[Endpoint] {
        &self.endpoints
    }

    pub fn url_for(&self, category: BuoyCategory) -> Option<&str> {
        self.endpoints
            .iter()
            .find(|e| e.category == category)
            .map(|e| e.url.as_str())
    }

    /// 只保留指定類別，順序維持登錄順序
    pub fn select(&self, only: &[BuoyCategory]) -> Self {
        if only.is_empty() {
            return self.clone();
        }
        Self {
            endpoints: self
                .endpoints
                .iter()
                .filter(|e| only.contains(&e.category))
                .cloned()
                .collect(),
        }
    }
}

impl Default for EndpointRegistry {
    fn default() -> Self {
        Self {
            endpoints: BuoyCategory::ALL
                .into_iter()
                .map(|c| Endpoint::new(c, Self::default_url(c)))
                .collect(),
        }
    }
}

impl Validate for EndpointRegistry {
    fn validate(&self) -> Result<()> {
        if self.endpoints.is_empty() {
            return Err(BuoyError::ConfigValidationError {
                field: "endpoints".to_string(),
                message: "no endpoints to fetch".to_string(),
            });
        }

        let mut seen = HashSet::new();
        for endpoint in &self.endpoints {
            if !seen.insert(endpoint.category) {
                return Err(BuoyError::InvalidConfigValueError {
                    field: "endpoints".to_string(),
                    value: endpoint.category.to_string(),
                    reason: "category listed more than once".to_string(),
                });
            }
            validate_url(&format!("endpoints.{}", endpoint.category), &endpoint.url)?;
        }

        Ok(())
    }
}
