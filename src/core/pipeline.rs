use crate::core::extract::LeagueExtractor;
use crate::core::{ConfigProvider, DocumentSource, Pipeline, RawDocument, Storage};
use crate::domain::model::LeagueSnapshot;
use crate::utils::error::{Result, ScrapeError};
use scraper::Html;

pub struct ScrapePipeline<D: DocumentSource, S: Storage, C: ConfigProvider> {
    source: D,
    storage: S,
    config: C,
    extractor: LeagueExtractor,
}

impl<D: DocumentSource, S: Storage, C: ConfigProvider> ScrapePipeline<D, S, C> {
    /// Fails only if the configured selectors or patterns do not compile.
    pub fn new(source: D, storage: S, config: C) -> Result<Self> {
        let extractor =
            LeagueExtractor::new(config.extraction_rules(), config.league_defaults().clone())?;
        Ok(Self {
            source,
            storage,
            config,
            extractor,
        })
    }

    /// Parses and extracts synchronously; the parsed tree never crosses an await.
    fn build_snapshot(&self, html: &str) -> LeagueSnapshot {
        let document = Html::parse_document(html);
        self.extractor.extract(&document)
    }
}

#[async_trait::async_trait]
impl<D: DocumentSource, S: Storage, C: ConfigProvider> Pipeline for ScrapePipeline<D, S, C> {
    async fn extract(&self) -> Result<RawDocument> {
        let origin = self.source.describe();
        tracing::debug!("Fetching league page from {}", origin);
        let html = self.source.fetch().await?;

        if html.trim().is_empty() {
            return Err(ScrapeError::AcquisitionError {
                source_name: origin,
                message: "document is empty".to_string(),
            });
        }

        if let Some(dump) = self.config.dump_html_file() {
            self.storage.write_file(dump, html.as_bytes()).await?;
            tracing::info!("Raw page saved to {}", dump);
        }

        Ok(RawDocument { origin, html })
    }

    async fn transform(&self, document: RawDocument) -> Result<LeagueSnapshot> {
        tracing::debug!("Extracting league record from {}", document.origin);
        Ok(self.build_snapshot(&document.html))
    }

    async fn load(&self, snapshot: LeagueSnapshot) -> Result<String> {
        let json = snapshot.to_json_pretty()?;
        let file = self.config.output_file();

        tracing::debug!("Writing {} bytes to storage", json.len());
        self.storage.write_file(file, json.as_bytes()).await?;

        Ok(format!("{}/{}", self.config.output_path(), file))
    }
}
