use crate::core::extract::{ExtractionRules, LeagueDefaults};
use crate::domain::model::LeagueSnapshot;
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// Where the league page comes from.
pub trait DocumentSource: Send + Sync {
    /// Human readable origin, used in logs and errors.
    fn describe(&self) -> String;
    fn fetch(&self) -> impl std::future::Future<Output = Result<String>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn output_path(&self) -> &str;
    fn output_file(&self) -> &str;
    fn dump_html_file(&self) -> Option<&str>;
    fn extraction_rules(&self) -> &ExtractionRules;
    fn league_defaults(&self) -> &LeagueDefaults;
}

/// Raw page as handed over by a [`DocumentSource`].
#[derive(Debug, Clone)]
pub struct RawDocument {
    pub origin: String,
    pub html: String,
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<RawDocument>;
    async fn transform(&self, document: RawDocument) -> Result<LeagueSnapshot>;
    async fn load(&self, snapshot: LeagueSnapshot) -> Result<String>;
}
