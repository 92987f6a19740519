use crate::utils::error::{BuoyError, FetchError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 浮標資料類別，順序即為報表順序
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuoyCategory {
    Moored,
    Aws,
    Drifting,
    Argo,
}

impl BuoyCategory {
    pub const ALL: [BuoyCategory; 4] = [
        BuoyCategory::Moored,
        BuoyCategory::Aws,
        BuoyCategory::Drifting,
        BuoyCategory::Argo,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            BuoyCategory::Moored => "moored",
            BuoyCategory::Aws => "aws",
            BuoyCategory::Drifting => "drifting",
            BuoyCategory::Argo => "argo",
        }
    }

    /// 報表標題用的大寫名稱
    pub fn header(&self) -> String {
        self.label().to_uppercase()
    }
}

impl fmt::Display for BuoyCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for BuoyCategory {
    type Err = BuoyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        BuoyCategory::ALL
            .into_iter()
            .find(|c| c.label() == wanted)
            .ok_or_else(|| BuoyError::UnknownCategory(wanted))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoint {
    pub category: BuoyCategory,
    pub url: String,
}

impl Endpoint {
    pub fn new(category: BuoyCategory, url: impl Into<String>) -> Self {
        Self {
            category,
            url: url.into(),
        }
    }
}

/// 單一類別的抓取結果：解碼後的 JSON 或錯誤
#[derive(Debug)]
pub struct CategoryResult {
    pub category: BuoyCategory,
    pub url: String,
    pub outcome: Result<serde_json::Value, FetchError>,
}

impl CategoryResult {
    pub fn is_success(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// 一次執行的完整結果，每個登錄的端點恰好一筆，依登錄順序排列
#[derive(Debug)]
pub struct FetchReport {
    pub started_at: DateTime<Utc>,
    pub results: Vec<CategoryResult>,
}

impl FetchReport {
    pub fn new(started_at: DateTime<Utc>) -> Self {
        Self {
            started_at,
            results: Vec::new(),
        }
    }

    pub fn get(&self, category: BuoyCategory) -> Option<&CategoryResult> {
        self.results.iter().find(|r| r.category == category)
    }

    pub fn success_count(&self) -> usize {
        self.results.iter().filter(|r| r.is_success()).count()
    }

    pub fn failure_count(&self) -> usize {
        self.results.len() - self.success_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_labels_and_headers() {
        let labels: Vec<&str> = BuoyCategory::ALL.iter().map(|c| c.label()).collect();
        assert_eq!(labels, vec!["moored", "aws", "drifting", "argo"]);
        assert_eq!(BuoyCategory::Aws.header(), "AWS");
        assert_eq!(BuoyCategory::Drifting.to_string(), "drifting");
    }

    #[test]
    fn test_category_parse_is_case_insensitive() {
        assert_eq!("ARGO".parse::<BuoyCategory>().unwrap(), BuoyCategory::Argo);
        assert_eq!(" Moored ".parse::<BuoyCategory>().unwrap(), BuoyCategory::Moored);
    }

    #[test]
    fn test_category_parse_unknown() {
        let err = "rama".parse::<BuoyCategory>().unwrap_err();
        assert!(matches!(err, BuoyError::UnknownCategory(ref s) if s == "rama"));
    }

    #[test]
    fn test_report_counts() {
        let mut report = FetchReport::new(Utc::now());
        report.results.push(CategoryResult {
            category: BuoyCategory::Moored,
            url: "http://localhost/moored".to_string(),
            outcome: Ok(serde_json::json!({"id": 1})),
        });
        report.results.push(CategoryResult {
            category: BuoyCategory::Aws,
            url: "http://localhost/aws".to_string(),
            outcome: Err(FetchError::Status { status: 500 }),
        });

        assert_eq!(report.success_count(), 1);
        assert_eq!(report.failure_count(), 1);
        assert!(report.get(BuoyCategory::Aws).is_some());
        assert!(report.get(BuoyCategory::Argo).is_none());
    }
}
