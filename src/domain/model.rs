use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeSet;

/// Names shorter than this are never treated as teams.
pub const MIN_TEAM_NAME_LEN: usize = 2;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Sorted, deduplicated team names found in one document.
///
/// Fixture extraction takes a `&TeamSet`, so teams have to be extracted first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeamSet {
    names: BTreeSet<String>,
}

impl TeamSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a trimmed name, ignoring anything shorter than [`MIN_TEAM_NAME_LEN`].
    pub fn insert(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name.chars().count() < MIN_TEAM_NAME_LEN {
            return false;
        }
        self.names.insert(name.to_string())
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.names.iter().cloned().collect()
    }
}

impl<S: AsRef<str>> FromIterator<S> for TeamSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = TeamSet::new();
        for name in iter {
            set.insert(name.as_ref());
        }
        set
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fixture {
    #[serde(rename = "home")]
    pub home_team: String,
    #[serde(rename = "away")]
    pub away_team: String,
    pub home_score: u32,
    pub away_score: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gameweek {
    pub week: u32,
    pub date: Option<NaiveDate>,
    pub fixtures: Vec<Fixture>,
}

impl Gameweek {
    pub fn new(week: u32, fixtures: Vec<Fixture>) -> Self {
        Self {
            week,
            date: None,
            fixtures,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeagueInfo {
    pub league_name: String,
    pub venue: String,
}

/// The full record produced by one extraction run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeagueSnapshot {
    league_name: String,
    venue: String,
    #[serde(
        rename = "last_updated",
        serialize_with = "serialize_timestamp",
        deserialize_with = "deserialize_timestamp"
    )]
    generated_at: NaiveDateTime,
    teams: Vec<String>,
    gameweeks: Vec<Gameweek>,
}

impl LeagueSnapshot {
    pub(crate) fn new(
        info: LeagueInfo,
        teams: &TeamSet,
        gameweeks: Vec<Gameweek>,
        generated_at: NaiveDateTime,
    ) -> Self {
        Self {
            league_name: info.league_name,
            venue: info.venue,
            generated_at,
            teams: teams.to_vec(),
            gameweeks,
        }
    }

    pub fn league_name(&self) -> &str {
        &self.league_name
    }

    pub fn venue(&self) -> &str {
        &self.venue
    }

    pub fn generated_at(&self) -> NaiveDateTime {
        self.generated_at
    }

    pub fn teams(&self) -> &[String] {
        &self.teams
    }

    pub fn gameweeks(&self) -> &[Gameweek] {
        &self.gameweeks
    }

    pub fn fixture_count(&self) -> usize {
        self.gameweeks.iter().map(|gw| gw.fixtures.len()).sum()
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

fn serialize_timestamp<S: Serializer>(ts: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&ts.format(TIMESTAMP_FORMAT).to_string())
}

fn deserialize_timestamp<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
    let raw = String::deserialize(deserializer)?;
    NaiveDateTime::parse_from_str(&raw, TIMESTAMP_FORMAT).map_err(serde::de::Error::custom)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_opt(18, 5, 0)
            .unwrap()
    }

    #[test]
    fn test_team_set_dedups_sorts_and_filters_short_names() {
        let teams: TeamSet = ["Zeta FC", "A", " Alpha ", "Alpha", "", "Mu"].into_iter().collect();
        assert_eq!(teams.to_vec(), vec!["Alpha", "Mu", "Zeta FC"]);
        assert!(!teams.contains("A"));
    }

    #[test]
    fn test_snapshot_wire_format() {
        let teams: TeamSet = ["Team B", "Team A"].into_iter().collect();
        let snapshot = LeagueSnapshot::new(
            LeagueInfo {
                league_name: "Players Lounge".to_string(),
                venue: "Islington Market Road".to_string(),
            },
            &teams,
            vec![Gameweek::new(
                1,
                vec![Fixture {
                    home_team: "Team A".to_string(),
                    away_team: "Team B".to_string(),
                    home_score: 3,
                    away_score: 1,
                }],
            )],
            ts(),
        );

        let value = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(value["last_updated"], "2024-03-09 18:05:00");
        assert_eq!(value["teams"], serde_json::json!(["Team A", "Team B"]));
        assert_eq!(value["gameweeks"][0]["date"], serde_json::Value::Null);
        assert_eq!(value["gameweeks"][0]["fixtures"][0]["home"], "Team A");
        assert_eq!(value["gameweeks"][0]["fixtures"][0]["away_score"], 1);
        assert!(value.get("generated_at").is_none());

        let parsed: LeagueSnapshot = serde_json::from_value(value).unwrap();
        assert_eq!(parsed, snapshot);
    }
}
