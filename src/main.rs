use clap::Parser;
use league_scrape::core::Pipeline;
use league_scrape::utils::error::ErrorSeverity;
use league_scrape::utils::{logger, validation::Validate};
use league_scrape::{
    AnySource, CliConfig, EtlEngine, FileSource, HttpSource, LocalStorage, ScrapeError,
    ScrapePipeline, TomlConfig,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliConfig::parse();

    // 初始化日誌
    if args.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(args.verbose);
    }

    tracing::info!("Starting league-scrape");

    let mut config = match &args.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path);
            TomlConfig::from_file(path).unwrap_or_else(|e| fail(&e))
        }
        None => TomlConfig::default(),
    };
    args.apply_overrides(&mut config);

    if let Err(e) = config.validate() {
        fail(&e);
    }
    if args.verbose {
        tracing::debug!("Effective config: {:?}", config);
    }

    let source = match &args.input {
        Some(path) => AnySource::File(FileSource::new(path)),
        None => AnySource::Http(
            HttpSource::new(
                config.source.url.clone(),
                &config.source.user_agent,
                config.request_timeout(),
            )
            .unwrap_or_else(|e| fail(&e)),
        ),
    };
    let storage = LocalStorage::new(config.load.output_path.clone());
    let pipeline = ScrapePipeline::new(source, storage, config).unwrap_or_else(|e| fail(&e));

    if args.dry_run {
        tracing::info!("Dry run: the record is printed, not saved");
        let document = pipeline.extract().await.unwrap_or_else(|e| fail(&e));
        let snapshot = pipeline.transform(document).await.unwrap_or_else(|e| fail(&e));
        println!("{}", snapshot.to_json_pretty()?);
        return Ok(());
    }

    let engine = EtlEngine::new(pipeline);
    match engine.run().await {
        Ok(output_path) => {
            println!("Scraping completed successfully!");
            println!("Data saved to {}", output_path);
        }
        Err(e) => fail(&e),
    }

    Ok(())
}

fn fail(e: &ScrapeError) -> ! {
    tracing::error!(
        "League scrape failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code)
}
