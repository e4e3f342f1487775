use crate::core::extract::fixtures::{FixtureExtractor, FixtureOutcome};
use crate::core::extract::league_info::{extract_league_info, LeagueDefaults};
use crate::core::extract::rules::{CompiledRules, ExtractionRules};
use crate::core::extract::teams::TeamExtractor;
use crate::domain::model::{Gameweek, LeagueInfo, LeagueSnapshot, TeamSet};
use crate::utils::error::Result;
use chrono::{Local, NaiveDateTime};
use scraper::Html;

#[derive(Debug, Default)]
pub struct SnapshotBuilder {
    info: Option<LeagueInfo>,
    teams: TeamSet,
    gameweeks: Vec<Gameweek>,
    generated_at: Option<NaiveDateTime>,
}

impl SnapshotBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn info(mut self, info: LeagueInfo) -> Self {
        self.info = Some(info);
        self
    }

    pub fn teams(mut self, teams: TeamSet) -> Self {
        self.teams = teams;
        self
    }

    pub fn gameweeks(mut self, gameweeks: Vec<Gameweek>) -> Self {
        self.gameweeks = gameweeks;
        self
    }

    pub fn generated_at(mut self, generated_at: NaiveDateTime) -> Self {
        self.generated_at = Some(generated_at);
        self
    }

    /// Missing info falls back to [`LeagueDefaults`], a missing timestamp to now.
    pub fn build(self) -> LeagueSnapshot {
        let info = self.info.unwrap_or_else(|| {
            let defaults = LeagueDefaults::default();
            LeagueInfo {
                league_name: defaults.league_name,
                venue: defaults.venue,
            }
        });
        let generated_at = self
            .generated_at
            .unwrap_or_else(|| Local::now().naive_local());
        LeagueSnapshot::new(info, &self.teams, self.gameweeks, generated_at)
    }
}

/// Runs the whole extraction over one parsed document.
///
/// Teams are extracted first and the resulting [`TeamSet`] is what fixture
/// extraction disambiguates against.
#[derive(Debug, Clone)]
pub struct LeagueExtractor {
    rules: CompiledRules,
    defaults: LeagueDefaults,
}

impl LeagueExtractor {
    pub fn new(rules: &ExtractionRules, defaults: LeagueDefaults) -> Result<Self> {
        Ok(Self {
            rules: CompiledRules::compile(rules)?,
            defaults,
        })
    }

    pub fn extract(&self, document: &Html) -> LeagueSnapshot {
        self.extract_at(document, Local::now().naive_local())
    }

    pub fn extract_at(&self, document: &Html, generated_at: NaiveDateTime) -> LeagueSnapshot {
        let info = extract_league_info(document, &self.defaults);

        let teams = self.extract_teams(document);
        tracing::info!(
            "Found {} teams: {}",
            teams.len(),
            teams.iter().collect::<Vec<_>>().join(", ")
        );

        let outcome = self.extract_fixtures(document, &teams);
        let fixture_count: usize = outcome.gameweeks.iter().map(|gw| gw.fixtures.len()).sum();
        tracing::info!(
            "Found {} gameweeks with {} total fixtures",
            outcome.gameweeks.len(),
            fixture_count
        );

        SnapshotBuilder::new()
            .info(info)
            .teams(teams)
            .gameweeks(outcome.gameweeks)
            .generated_at(generated_at)
            .build()
    }

    pub fn extract_teams(&self, document: &Html) -> TeamSet {
        TeamExtractor::new(&self.rules).extract(document)
    }

    pub fn extract_fixtures(&self, document: &Html, teams: &TeamSet) -> FixtureOutcome {
        FixtureExtractor::new(&self.rules).extract(document, teams)
    }
}
