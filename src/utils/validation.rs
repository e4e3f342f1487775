use crate::utils::error::{ScrapeError, Result};
use regex::RegexBuilder;
use scraper::Selector;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(ScrapeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(ScrapeError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(ScrapeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(ScrapeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(ScrapeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(ScrapeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ScrapeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Compiles a CSS selector, mapping the parser's error into a configuration error.
pub fn parse_selector(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| ScrapeError::SelectorError {
        selector: selector.to_string(),
        message: e.to_string(),
    })
}

pub fn validate_selectors(field_name: &str, selectors: &[String]) -> Result<()> {
    if selectors.is_empty() {
        return Err(ScrapeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: "[]".to_string(),
            reason: "At least one selector is required".to_string(),
        });
    }
    for selector in selectors {
        parse_selector(selector)?;
    }
    Ok(())
}

pub fn validate_pattern(field_name: &str, pattern: &str) -> Result<()> {
    validate_non_empty_string(field_name, pattern)?;
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .map_err(|e| ScrapeError::ConfigValidationError {
            field: field_name.to_string(),
            message: e.to_string(),
        })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("source.url", "https://example.com").is_ok());
        assert!(validate_url("source.url", "http://example.com").is_ok());
        assert!(validate_url("source.url", "").is_err());
        assert!(validate_url("source.url", "invalid-url").is_err());
        assert!(validate_url("source.url", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("source.timeout_seconds", 30, 1).is_ok());
        assert!(validate_positive_number("source.timeout_seconds", 0, 1).is_err());
    }

    #[test]
    fn test_validate_selectors() {
        let good = vec![".team-name".to_string(), "table tr td:nth-of-type(2)".to_string()];
        assert!(validate_selectors("extraction.team_selectors", &good).is_ok());

        let bad = vec!["td[".to_string()];
        assert!(matches!(
            validate_selectors("extraction.team_selectors", &bad),
            Err(ScrapeError::SelectorError { .. })
        ));
        assert!(validate_selectors("extraction.team_selectors", &[]).is_err());
    }

    #[test]
    fn test_validate_pattern() {
        assert!(validate_pattern("extraction.gameweek_pattern", "gameweek|round").is_ok());
        assert!(validate_pattern("extraction.gameweek_pattern", "(unclosed").is_err());
        assert!(validate_pattern("extraction.gameweek_pattern", "  ").is_err());
    }
}
