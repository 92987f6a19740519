use crate::utils::error::{BuoyError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(BuoyError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(BuoyError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(BuoyError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_positive_number(field_name: &str, value: u128, min_value: u128) -> Result<()> {
    if value < min_value {
        return Err(BuoyError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("endpoints.moored", "https://incois.gov.in/OON/fetchArgoData.jsp").is_ok());
        assert!(validate_url("endpoints.moored", "http://localhost:8080/argo").is_ok());
        assert!(validate_url("endpoints.moored", "").is_err());
        assert!(validate_url("endpoints.moored", "invalid-url").is_err());
        assert!(validate_url("endpoints.moored", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("fetch.timeout", 10_000, 1).is_ok());
        assert!(validate_positive_number("fetch.timeout", 0, 1).is_err());
    }
}
