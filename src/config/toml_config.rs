use crate::config::{EndpointRegistry, FetchConfig, DEFAULT_TIMEOUT_SECS};
use crate::domain::model::{BuoyCategory, Endpoint};
use crate::utils::error::{BuoyError, Result};
use crate::utils::validation::Validate;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub fetch: FetchSection,
    #[serde(default)]
    pub endpoints: EndpointOverrides,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FetchSection {
    pub timeout_seconds: Option<u64>,
    pub timeout_ms: Option<u64>,
}

/// 未填寫的類別沿用預設網址
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EndpointOverrides {
    pub moored: Option<String>,
    pub aws: Option<String>,
    pub drifting: Option<String>,
    pub argo: Option<String>,
}

impl EndpointOverrides {
    fn get(&self, category: BuoyCategory) -> Option<&str> {
        match category {
            BuoyCategory::Moored => self.moored.as_deref(),
            BuoyCategory::Aws => self.aws.as_deref(),
            BuoyCategory::Drifting => self.drifting.as_deref(),
            BuoyCategory::Argo => self.argo.as_deref(),
        }
    }
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(BuoyError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| BuoyError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${BUOY_HOST})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| BuoyError::ConfigValidationError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 取得逾時設定，毫秒優先
    pub fn request_timeout(&self) -> Duration {
        match (self.fetch.timeout_ms, self.fetch.timeout_seconds) {
            (Some(ms), _) => Duration::from_millis(ms),
            (None, Some(secs)) => Duration::from_secs(secs),
            (None, None) => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn registry(&self) -> EndpointRegistry {
        EndpointRegistry::new(
            BuoyCategory::ALL
                .into_iter()
                .map(|c| {
                    let url = self
                        .endpoints
                        .get(c)
                        .unwrap_or_else(|| EndpointRegistry::default_url(c));
                    Endpoint::new(c, url)
                })
                .collect(),
        )
    }

    pub fn to_fetch_config(&self) -> FetchConfig {
        FetchConfig::new(self.registry(), self.request_timeout())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.to_fetch_config().validate()
    }
}
