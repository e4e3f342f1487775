use crate::core::extract::cascade::first_success;
use crate::core::extract::disambiguate::disambiguate;
use crate::core::extract::dom::{class_matches, has_tag, raw_text, stripped_text};
use crate::core::extract::rules::CompiledRules;
use crate::core::extract::score::first_score;
use crate::domain::model::{Fixture, Gameweek, TeamSet};
use scraper::{ElementRef, Html};

/// Fixture grouping strategies, in the order they are tried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    /// Containers whose class names a gameweek/round.
    Structural,
    /// Result tables, one gameweek per table.
    ResultTables,
    /// Every table row, collapsed into a single gameweek.
    Ungrouped,
}

impl Tier {
    pub const ALL: [Tier; 3] = [Tier::Structural, Tier::ResultTables, Tier::Ungrouped];
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureOutcome {
    /// `None` when no tier found anything.
    pub tier: Option<Tier>,
    pub gameweeks: Vec<Gameweek>,
}

pub struct FixtureExtractor<'r> {
    rules: &'r CompiledRules,
}

impl<'r> FixtureExtractor<'r> {
    pub fn new(rules: &'r CompiledRules) -> Self {
        Self { rules }
    }

    pub fn extract(&self, document: &Html, teams: &TeamSet) -> FixtureOutcome {
        match first_success(Tier::ALL, |tier| self.run_tier(*tier, document, teams)) {
            Some((tier, gameweeks)) => {
                tracing::debug!("Fixtures resolved by {:?} tier", tier);
                FixtureOutcome {
                    tier: Some(tier),
                    gameweeks,
                }
            }
            None => FixtureOutcome {
                tier: None,
                gameweeks: Vec::new(),
            },
        }
    }

    fn run_tier(&self, tier: Tier, document: &Html, teams: &TeamSet) -> Vec<Gameweek> {
        match tier {
            Tier::Structural => self.structural(document, teams),
            Tier::ResultTables => self.result_tables(document, teams),
            Tier::Ungrouped => self.ungrouped(document, teams),
        }
    }

    fn structural(&self, document: &Html, teams: &TeamSet) -> Vec<Gameweek> {
        let containers = document.root_element().descendants().filter_map(ElementRef::wrap).filter(|el| {
            has_tag(*el, &self.rules.gameweek_container_tags)
                && class_matches(*el, &self.rules.gameweek_pattern)
        });

        numbered(containers.map(|container| {
            container
                .descendants()
                .skip(1)
                .filter_map(ElementRef::wrap)
                .filter(|el| {
                    has_tag(*el, &self.rules.fixture_row_tags)
                        && class_matches(*el, &self.rules.fixture_row_pattern)
                })
                .filter_map(|row| {
                    let text = raw_text(row);
                    let score = first_score(&text)?;
                    disambiguate(&text, score.start, score.home, score.away, teams)
                })
                .collect()
        }))
    }

    fn result_tables(&self, document: &Html, teams: &TeamSet) -> Vec<Gameweek> {
        let tables = document
            .select(&self.rules.table)
            .filter(|table| class_matches(*table, &self.rules.results_table_pattern));

        numbered(tables.map(|table| {
            table
                .select(&self.rules.row)
                .skip(1)
                .filter_map(|row| self.table_row(row, teams))
                .collect()
        }))
    }

    fn ungrouped(&self, document: &Html, teams: &TeamSet) -> Vec<Gameweek> {
        let fixtures: Vec<Fixture> = document
            .select(&self.rules.table)
            .flat_map(|table| table.select(&self.rules.row))
            .filter_map(|row| self.table_row(row, teams))
            .collect();

        if fixtures.is_empty() {
            return Vec::new();
        }
        // no grouping information survives at this tier
        vec![Gameweek::new(1, fixtures)]
    }

    /// Scores come from the space-joined cell texts, team positions from the
    /// row's raw text.
    fn table_row(&self, row: ElementRef<'_>, teams: &TeamSet) -> Option<Fixture> {
        let cells: Vec<String> = row.select(&self.rules.cell).map(stripped_text).collect();
        let joined = cells.join(" ");
        let score = first_score(&joined)?;

        let text = raw_text(row);
        // a score missing from the raw text leaves every team after it
        let score_offset = text.find(score.text).unwrap_or(0);
        disambiguate(&text, score_offset, score.home, score.away, teams)
    }
}

/// Numbers groups by their 1-based position and drops the empty ones.
fn numbered(groups: impl Iterator<Item = Vec<Fixture>>) -> Vec<Gameweek> {
    groups
        .zip(1u32..)
        .filter(|(fixtures, _)| !fixtures.is_empty())
        .map(|(fixtures, week)| Gameweek::new(week, fixtures))
        .collect()
}
