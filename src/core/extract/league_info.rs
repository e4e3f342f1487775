use crate::core::extract::dom::{raw_text, stripped_text};
use crate::domain::model::LeagueInfo;
use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use serde::{Deserialize, Serialize};

static TITLE: Lazy<Selector> = Lazy::new(|| Selector::parse("title").expect("valid selector"));
static HEADING: Lazy<Selector> = Lazy::new(|| Selector::parse("h1").expect("valid selector"));

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeagueDefaults {
    #[serde(rename = "name")]
    pub league_name: String,
    pub venue: String,
    /// A page title containing this confirms the default league name.
    pub title_marker: String,
}

impl Default for LeagueDefaults {
    fn default() -> Self {
        Self {
            league_name: "Players Lounge".to_string(),
            venue: "Islington Market Road".to_string(),
            title_marker: "Players Lounge".to_string(),
        }
    }
}

/// The venue is never read from the page; only the league name can change.
pub fn extract_league_info(document: &Html, defaults: &LeagueDefaults) -> LeagueInfo {
    let mut league_name = defaults.league_name.clone();

    if let Some(title) = document.select(&TITLE).next() {
        if raw_text(title).contains(&defaults.title_marker) {
            league_name = defaults.league_name.clone();
        }
    }

    if let Some(heading) = document.select(&HEADING).next() {
        let text = stripped_text(heading);
        if !text.is_empty() {
            league_name = text;
        }
    }

    LeagueInfo {
        league_name,
        venue: defaults.venue.clone(),
    }
}
