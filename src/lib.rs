pub mod config;
pub mod core;
pub mod domain;
pub mod sources;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{cli::LocalStorage, toml_config::TomlConfig};
pub use crate::core::{
    etl::EtlEngine,
    extract::{ExtractionRules, LeagueDefaults, LeagueExtractor},
    pipeline::ScrapePipeline,
};
pub use domain::model::{Fixture, Gameweek, LeagueSnapshot, TeamSet};
pub use sources::{AnySource, FileSource, HttpSource};
pub use utils::error::{Result, ScrapeError};
