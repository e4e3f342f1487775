//! Heuristic extraction of a league record from a parsed page.
//!
//! Nothing in here does I/O or returns an error once the rules are compiled:
//! a page that matches no strategy produces an empty record.

pub mod cascade;
pub mod disambiguate;
pub mod dom;
pub mod fixtures;
pub mod league_info;
pub mod rules;
pub mod score;
pub mod snapshot;
pub mod teams;

pub use fixtures::{FixtureExtractor, FixtureOutcome, Tier};
pub use league_info::LeagueDefaults;
pub use rules::{CompiledRules, ExtractionRules};
pub use snapshot::{LeagueExtractor, SnapshotBuilder};
pub use teams::TeamExtractor;
