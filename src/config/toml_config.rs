use crate::core::extract::{ExtractionRules, LeagueDefaults};
use crate::core::ConfigProvider;
use crate::sources::DEFAULT_USER_AGENT;
use crate::utils::error::{Result, ScrapeError};
use crate::utils::validation::{
    validate_non_empty_string, validate_path, validate_pattern, validate_positive_number,
    validate_selectors, validate_url, Validate,
};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_LEAGUE_URL: &str =
    "https://www.playfootball.net/venues/islington-market-road/players-lounge/3359/15144/186";

static ENV_VAR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern compiles"));

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub source: SourceConfig,
    pub league: LeagueDefaults,
    pub extraction: ExtractionRules,
    pub load: LoadConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    pub url: String,
    pub timeout_seconds: u64,
    pub user_agent: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_LEAGUE_URL.to_string(),
            timeout_seconds: 30,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadConfig {
    pub output_path: String,
    pub output_file: String,
    /// Also store the raw page under this name.
    pub dump_html_file: Option<String>,
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self {
            output_path: "./data".to_string(),
            output_file: "results.json".to_string(),
            dump_html_file: None,
        }
    }
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ScrapeError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| ScrapeError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// `${VAR}` is replaced from the environment; unknown variables are left as written.
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.source.timeout_seconds)
    }
}

impl ConfigProvider for TomlConfig {
    fn output_path(&self) -> &str {
        &self.load.output_path
    }

    fn output_file(&self) -> &str {
        &self.load.output_file
    }

    fn dump_html_file(&self) -> Option<&str> {
        self.load.dump_html_file.as_deref()
    }

    fn extraction_rules(&self) -> &ExtractionRules {
        &self.extraction
    }

    fn league_defaults(&self) -> &LeagueDefaults {
        &self.league
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_url("source.url", &self.source.url)?;
        validate_positive_number("source.timeout_seconds", self.source.timeout_seconds, 1)?;
        validate_non_empty_string("source.user_agent", &self.source.user_agent)?;

        validate_non_empty_string("league.name", &self.league.league_name)?;
        validate_non_empty_string("league.venue", &self.league.venue)?;

        validate_selectors("extraction.team_selectors", &self.extraction.team_selectors)?;
        validate_pattern("extraction.gameweek_pattern", &self.extraction.gameweek_pattern)?;
        validate_pattern("extraction.fixture_row_pattern", &self.extraction.fixture_row_pattern)?;
        validate_pattern(
            "extraction.results_table_pattern",
            &self.extraction.results_table_pattern,
        )?;
        if self.extraction.gameweek_container_tags.is_empty() {
            return Err(ScrapeError::MissingConfigError {
                field: "extraction.gameweek_container_tags".to_string(),
            });
        }
        if self.extraction.fixture_row_tags.is_empty() {
            return Err(ScrapeError::MissingConfigError {
                field: "extraction.fixture_row_tags".to_string(),
            });
        }

        validate_path("load.output_path", &self.load.output_path)?;
        validate_path("load.output_file", &self.load.output_file)?;
        if let Some(dump) = &self.load.dump_html_file {
            validate_path("load.dump_html_file", dump)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert_eq!(config, TomlConfig::default());
        assert_eq!(config.source.url, DEFAULT_LEAGUE_URL);
        assert_eq!(config.league.league_name, "Players Lounge");
        assert_eq!(config.output_file(), "results.json");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_partial_config() {
        let toml_content = r#"
[source]
url = "https://example.com/league"
timeout_seconds = 10

[league]
name = "Sunday League"
venue = "Hackney Marshes"

[extraction]
team_selectors = [".club"]
gameweek_pattern = "matchday"

[load]
output_path = "./out"
dump_html_file = "page_source.html"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.source.url, "https://example.com/league");
        assert_eq!(config.request_timeout(), Duration::from_secs(10));
        assert_eq!(config.source.user_agent, DEFAULT_USER_AGENT);
        assert_eq!(config.league.league_name, "Sunday League");
        assert_eq!(config.league.title_marker, "Players Lounge");
        assert_eq!(config.extraction.team_selectors, vec![".club"]);
        assert_eq!(config.extraction.fixture_row_pattern, "match|fixture");
        assert_eq!(config.output_path(), "./out");
        assert_eq!(config.dump_html_file(), Some("page_source.html"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("LEAGUE_SCRAPE_TEST_URL", "https://test.example.com/league");

        let toml_content = r#"
[source]
url = "${LEAGUE_SCRAPE_TEST_URL}"
user_agent = "${LEAGUE_SCRAPE_TEST_UNSET_VAR}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.source.url, "https://test.example.com/league");
        assert_eq!(config.source.user_agent, "${LEAGUE_SCRAPE_TEST_UNSET_VAR}");

        std::env::remove_var("LEAGUE_SCRAPE_TEST_URL");
    }

    #[test]
    fn test_config_validation() {
        let config = TomlConfig::from_toml_str("[source]\nurl = \"invalid-url\"\n").unwrap();
        assert!(config.validate().is_err());

        let config =
            TomlConfig::from_toml_str("[extraction]\nteam_selectors = [\"td[\"]\n").unwrap();
        assert!(matches!(
            config.validate(),
            Err(ScrapeError::SelectorError { .. })
        ));

        let config = TomlConfig::from_toml_str("[source]\ntimeout_seconds = 0\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_toml_is_reported() {
        let err = TomlConfig::from_toml_str("[source\nurl = 1").unwrap_err();
        assert!(matches!(err, ScrapeError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[league]\nname = \"File League\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.league.league_name, "File League");
    }
}
