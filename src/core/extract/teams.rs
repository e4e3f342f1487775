use crate::core::extract::cascade::first_success;
use crate::core::extract::dom::stripped_text;
use crate::core::extract::rules::CompiledRules;
use crate::domain::model::{TeamSet, MIN_TEAM_NAME_LEN};
use scraper::{Html, Selector};

#[derive(Clone, Copy)]
enum TeamStrategy<'r> {
    Selector(&'r str, &'r Selector),
    TableColumn(usize),
}

impl TeamStrategy<'_> {
    fn describe(&self) -> String {
        match self {
            TeamStrategy::Selector(raw, _) => format!("selector '{}'", raw),
            TeamStrategy::TableColumn(column) => format!("table column {}", column),
        }
    }
}

pub struct TeamExtractor<'r> {
    rules: &'r CompiledRules,
}

impl<'r> TeamExtractor<'r> {
    pub fn new(rules: &'r CompiledRules) -> Self {
        Self { rules }
    }

    pub fn extract(&self, document: &Html) -> TeamSet {
        let strategies = self
            .rules
            .team_selectors
            .iter()
            .map(|(raw, sel)| TeamStrategy::Selector(raw, sel))
            .chain(std::iter::once(TeamStrategy::TableColumn(
                self.rules.team_fallback_column,
            )));

        match first_success(strategies, |strategy| self.candidates(document, strategy)) {
            Some((strategy, names)) => {
                tracing::debug!("Team names resolved by {}", strategy.describe());
                names.into_iter().collect()
            }
            None => {
                tracing::warn!("No team names found in document");
                TeamSet::new()
            }
        }
    }

    fn candidates(&self, document: &Html, strategy: &TeamStrategy<'_>) -> Vec<String> {
        let names: Vec<String> = match strategy {
            TeamStrategy::Selector(_, selector) => {
                document.select(selector).map(stripped_text).collect()
            }
            TeamStrategy::TableColumn(column) => self.table_column(document, *column),
        };
        names
            .into_iter()
            .filter(|name| name.chars().count() >= MIN_TEAM_NAME_LEN)
            .collect()
    }

    fn table_column(&self, document: &Html, column: usize) -> Vec<String> {
        let mut names = Vec::new();
        for table in document.select(&self.rules.table) {
            // first row is the header
            for row in table.select(&self.rules.row).skip(1) {
                if let Some(cell) = row.select(&self.rules.cell).nth(column) {
                    names.push(stripped_text(cell));
                }
            }
        }
        names
    }
}
