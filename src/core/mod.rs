pub mod etl;
pub mod extract;
pub mod pipeline;

pub use crate::domain::model::{Fixture, Gameweek, LeagueInfo, LeagueSnapshot, TeamSet};
pub use crate::domain::ports::{ConfigProvider, DocumentSource, Pipeline, RawDocument, Storage};
pub use crate::utils::error::Result;
