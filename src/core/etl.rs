use crate::core::Pipeline;
use crate::utils::error::Result;
use std::time::Instant;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<String> {
        let started = Instant::now();
        tracing::info!("Starting league scrape");

        // Extract
        let document = self.pipeline.extract().await?;
        tracing::info!(
            "Fetched {} bytes from {}",
            document.html.len(),
            document.origin
        );

        // Transform
        let snapshot = self.pipeline.transform(document).await?;
        tracing::info!(
            "Built record for '{}' with {} teams and {} fixtures",
            snapshot.league_name(),
            snapshot.teams().len(),
            snapshot.fixture_count()
        );

        // Load
        let output = self.pipeline.load(snapshot).await?;
        tracing::info!("Saved record to {} in {:?}", output, started.elapsed());

        Ok(output)
    }
}
