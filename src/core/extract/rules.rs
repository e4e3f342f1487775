use crate::utils::error::Result;
use crate::utils::validation::parse_selector;
use regex::{Regex, RegexBuilder};
use scraper::Selector;
use serde::{Deserialize, Serialize};

/// Structural patterns the extractors look for. Everything here can be
/// overridden from the `[extraction]` table of the config file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionRules {
    /// Tried in order; the first selector yielding a team name wins.
    pub team_selectors: Vec<String>,
    /// Cell index used when scanning every table for team names.
    pub team_fallback_column: usize,
    pub gameweek_container_tags: Vec<String>,
    pub gameweek_pattern: String,
    pub fixture_row_tags: Vec<String>,
    pub fixture_row_pattern: String,
    pub results_table_pattern: String,
}

impl Default for ExtractionRules {
    fn default() -> Self {
        Self {
            team_selectors: vec![
                "table.league-table tr td:first-child".to_string(),
                "table tr td.team-name".to_string(),
                ".team-name".to_string(),
                "table.standings tr td:nth-of-type(2)".to_string(),
            ],
            team_fallback_column: 1,
            gameweek_container_tags: vec!["section".to_string(), "div".to_string()],
            gameweek_pattern: "gameweek|round|week|fixture".to_string(),
            fixture_row_tags: vec!["tr".to_string(), "div".to_string()],
            fixture_row_pattern: "match|fixture".to_string(),
            results_table_pattern: "fixture|match|result".to_string(),
        }
    }
}

/// [`ExtractionRules`] with selectors and patterns compiled once per run.
#[derive(Debug, Clone)]
pub struct CompiledRules {
    pub team_selectors: Vec<(String, Selector)>,
    pub team_fallback_column: usize,
    pub gameweek_container_tags: Vec<String>,
    pub gameweek_pattern: Regex,
    pub fixture_row_tags: Vec<String>,
    pub fixture_row_pattern: Regex,
    pub results_table_pattern: Regex,
    pub table: Selector,
    pub row: Selector,
    pub cell: Selector,
}

impl CompiledRules {
    pub fn compile(rules: &ExtractionRules) -> Result<Self> {
        let team_selectors = rules
            .team_selectors
            .iter()
            .map(|raw| parse_selector(raw).map(|sel| (raw.clone(), sel)))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            team_selectors,
            team_fallback_column: rules.team_fallback_column,
            gameweek_container_tags: rules.gameweek_container_tags.clone(),
            gameweek_pattern: case_insensitive(&rules.gameweek_pattern)?,
            fixture_row_tags: rules.fixture_row_tags.clone(),
            fixture_row_pattern: case_insensitive(&rules.fixture_row_pattern)?,
            results_table_pattern: case_insensitive(&rules.results_table_pattern)?,
            table: parse_selector("table")?,
            row: parse_selector("tr")?,
            cell: parse_selector("td, th")?,
        })
    }
}

fn case_insensitive(pattern: &str) -> Result<Regex> {
    Ok(RegexBuilder::new(pattern).case_insensitive(true).build()?)
}
