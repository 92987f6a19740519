//! 報表輸出：把 `FetchReport` 寫到呼叫端提供的 writer。
//!
//! 文字格式每個類別一段：成功時為 `=== MOORED BUOYS ===` 標題加上 JSON，
//! 失敗時為一行 `Error fetching moored: ...`。JSON 格式把所有類別合併成一個物件。

use crate::core::FetchReport;
use crate::utils::error::Result;
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use std::io::Write;

pub fn write_text<W: Write>(out: &mut W, report: &FetchReport, pretty: bool) -> Result<()> {
    for result in &report.results {
        match &result.outcome {
            Ok(payload) => {
                writeln!(out)?;
                writeln!(out, "=== {} BUOYS ===", result.category.header())?;
                let body = if pretty {
                    serde_json::to_string_pretty(payload)?
                } else {
                    serde_json::to_string(payload)?
                };
                writeln!(out, "{}", body)?;
            }
            Err(e) => writeln!(out, "Error fetching {}: {}", result.category, e)?,
        }
    }
    out.flush()?;
    Ok(())
}

pub fn render_text(report: &FetchReport, pretty: bool) -> Result<String> {
    let mut buf = Vec::new();
    write_text(&mut buf, report, pretty)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// 以登錄順序輸出的合併 JSON
#[derive(Serialize)]
struct CombinedReport<'a> {
    success: bool,
    fetched_at: String,
    all: Payloads<'a>,
    errors: Errors<'a>,
}

struct Payloads<'a>(&'a FetchReport);

impl Serialize for Payloads<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.results.len()))?;
        for result in &self.0.results {
            map.serialize_entry(result.category.label(), &result.outcome.as_ref().ok())?;
        }
        map.end()
    }
}

struct Errors<'a>(&'a FetchReport);

impl Serialize for Errors<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        for result in &self.0.results {
            if let Err(e) = &result.outcome {
                map.serialize_entry(result.category.label(), &e.to_string())?;
            }
        }
        map.end()
    }
}

pub fn write_json<W: Write>(out: &mut W, report: &FetchReport, pretty: bool) -> Result<()> {
    let combined = CombinedReport {
        success: true,
        fetched_at: report.started_at.to_rfc3339(),
        all: Payloads(report),
        errors: Errors(report),
    };
    if pretty {
        serde_json::to_writer_pretty(&mut *out, &combined)?;
    } else {
        serde_json::to_writer(&mut *out, &combined)?;
    }
    writeln!(out)?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{BuoyCategory, CategoryResult};
    use crate::utils::error::FetchError;
    use chrono::{TimeZone, Utc};

    fn sample_report() -> FetchReport {
        let mut report = FetchReport::new(Utc.with_ymd_and_hms(2025, 9, 1, 6, 30, 0).unwrap());
        report.results = vec![
            CategoryResult {
                category: BuoyCategory::Moored,
                url: "http://localhost/moored".to_string(),
                outcome: Ok(serde_json::json!({"id": "AD06"})),
            },
            CategoryResult {
                category: BuoyCategory::Aws,
                url: "http://localhost/aws".to_string(),
                outcome: Err(FetchError::Status { status: 500 }),
            },
            CategoryResult {
                category: BuoyCategory::Argo,
                url: "http://localhost/argo".to_string(),
                outcome: Ok(serde_json::json!([1, 2])),
            },
        ];
        report
    }

    #[test]
    fn test_text_report() {
        let text = render_text(&sample_report(), false).unwrap();
        assert_eq!(
            text,
            "\n=== MOORED BUOYS ===\n{\"id\":\"AD06\"}\n\
             Error fetching aws: HTTP status 500\n\
             \n=== ARGO BUOYS ===\n[1,2]\n"
        );
    }

    #[test]
    fn test_text_report_pretty() {
        let text = render_text(&sample_report(), true).unwrap();
        assert!(text.contains("{\n  \"id\": \"AD06\"\n}"));
    }

    #[test]
    fn test_json_report_keeps_registry_order() {
        let mut buf = Vec::new();
        write_json(&mut buf, &sample_report(), false).unwrap();
        let text = String::from_utf8(buf).unwrap();

        let moored = text.find("\"moored\"").unwrap();
        let aws = text.find("\"aws\"").unwrap();
        let argo = text.find("\"argo\"").unwrap();
        assert!(moored < aws && aws < argo);

        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["success"], true);
        assert_eq!(value["fetched_at"], "2025-09-01T06:30:00+00:00");
        assert_eq!(value["all"]["moored"]["id"], "AD06");
        assert!(value["all"]["aws"].is_null());
        assert_eq!(value["errors"]["aws"], "HTTP status 500");
        assert!(value["errors"].get("moored").is_none());
    }
}
