use anyhow::Result;
use httpmock::prelude::*;
use league_scrape::core::extract::Tier;
use league_scrape::utils::error::ErrorCategory;
use league_scrape::{
    AnySource, EtlEngine, FileSource, HttpSource, LeagueSnapshot, LocalStorage, ScrapeError,
    ScrapePipeline, TomlConfig,
};
use std::time::Duration;
use tempfile::TempDir;

const LEAGUE_PAGE: &str = r#"
<html>
<head><title>Players Lounge | playfootball.net</title></head>
<body>
  <table class="standings">
    <tr><th>Pos</th><th>Team</th><th>Pts</th></tr>
    <tr><td>1</td><td>Colonel Getafe</td><td>6</td></tr>
    <tr><td>2</td><td>Ajax Trousers</td><td>3</td></tr>
    <tr><td>3</td><td>Norwich Pity</td><td>0</td></tr>
  </table>
  <table class="fixtures-table">
    <tr><th>Home</th><th>Result</th><th>Away</th></tr>
    <tr><td>Colonel Getafe</td><td>5 - 2</td><td>Ajax Trousers</td></tr>
  </table>
  <table class="fixtures-table">
    <tr><th>Home</th><th>Result</th><th>Away</th></tr>
    <tr><td>Norwich Pity</td><td>1 – 3</td><td>Colonel Getafe</td></tr>
    <tr><td>Ajax Trousers</td><td>v</td><td>Norwich Pity</td></tr>
  </table>
</body>
</html>
"#;

fn config_for(output_path: &str) -> TomlConfig {
    let mut config = TomlConfig::default();
    config.load.output_path = output_path.to_string();
    config
}

#[tokio::test]
async fn test_end_to_end_scrape_with_real_http() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let server = MockServer::start();
    let page_mock = server.mock(|when, then| {
        when.method(GET).path("/league");
        then.status(200)
            .header("Content-Type", "text/html; charset=utf-8")
            .body(LEAGUE_PAGE);
    });

    let source = HttpSource::new(server.url("/league"), "test-agent", Duration::from_secs(5))?;
    let storage = LocalStorage::new(output_path.clone());
    let pipeline = ScrapePipeline::new(source, storage, config_for(&output_path))?;

    let engine = EtlEngine::new(pipeline);
    let saved_to = engine.run().await?;

    page_mock.assert();
    assert!(saved_to.ends_with("results.json"));

    let written = std::fs::read_to_string(temp_dir.path().join("results.json"))?;
    let snapshot: LeagueSnapshot = serde_json::from_str(&written)?;

    assert_eq!(snapshot.league_name(), "Players Lounge");
    assert_eq!(snapshot.venue(), "Islington Market Road");
    assert_eq!(
        snapshot.teams(),
        ["Ajax Trousers", "Colonel Getafe", "Norwich Pity"]
    );

    let gameweeks = snapshot.gameweeks();
    assert_eq!(gameweeks.len(), 2);
    assert_eq!(gameweeks[0].week, 1);
    assert_eq!(gameweeks[0].fixtures[0].home_team, "Colonel Getafe");
    assert_eq!(gameweeks[0].fixtures[0].home_score, 5);
    assert_eq!(gameweeks[1].week, 2);
    assert_eq!(gameweeks[1].fixtures.len(), 1);
    assert_eq!(gameweeks[1].fixtures[0].home_team, "Norwich Pity");
    assert_eq!(gameweeks[1].fixtures[0].away_score, 3);

    // wire names, not field names
    let raw: serde_json::Value = serde_json::from_str(&written)?;
    assert!(raw["last_updated"].is_string());
    assert_eq!(raw["gameweeks"][0]["fixtures"][0]["away"], "Ajax Trousers");

    Ok(())
}

#[tokio::test]
async fn test_forbidden_page_is_an_acquisition_failure() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let server = MockServer::start();
    let page_mock = server.mock(|when, then| {
        when.method(GET).path("/league");
        then.status(403).body("Forbidden");
    });

    let source = HttpSource::new(server.url("/league"), "test-agent", Duration::from_secs(5))?;
    let pipeline = ScrapePipeline::new(
        source,
        LocalStorage::new(output_path.clone()),
        config_for(&output_path),
    )?;

    let err = EtlEngine::new(pipeline).run().await.unwrap_err();
    page_mock.assert();
    assert!(matches!(err, ScrapeError::AcquisitionError { .. }));
    assert_eq!(err.category(), ErrorCategory::Acquisition);

    // nothing is written when acquisition fails
    assert!(!temp_dir.path().join("results.json").exists());
    Ok(())
}

#[tokio::test]
async fn test_saved_page_with_raw_dump() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let output_path = temp_dir.path().to_str().unwrap().to_string();
    let page_path = temp_dir.path().join("saved.html");
    std::fs::write(&page_path, LEAGUE_PAGE)?;

    let mut config = config_for(&output_path);
    config.load.output_file = "league.json".to_string();
    config.load.dump_html_file = Some("raw/page_source.html".to_string());

    let source = AnySource::File(FileSource::new(&page_path));
    let pipeline = ScrapePipeline::new(source, LocalStorage::new(output_path.clone()), config)?;
    EtlEngine::new(pipeline).run().await?;

    let dumped = std::fs::read_to_string(temp_dir.path().join("raw/page_source.html"))?;
    assert_eq!(dumped, LEAGUE_PAGE);

    let snapshot: LeagueSnapshot =
        serde_json::from_str(&std::fs::read_to_string(temp_dir.path().join("league.json"))?)?;
    assert_eq!(snapshot.fixture_count(), 2);
    Ok(())
}

#[tokio::test]
async fn test_missing_saved_page_is_reported() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let source = FileSource::new(temp_dir.path().join("does-not-exist.html"));
    let pipeline = ScrapePipeline::new(
        source,
        LocalStorage::new(output_path.clone()),
        config_for(&output_path),
    )?;

    let err = EtlEngine::new(pipeline).run().await.unwrap_err();
    assert!(matches!(err, ScrapeError::AcquisitionError { .. }));
    Ok(())
}

#[test]
fn test_result_tables_tier_is_used_for_the_sample_page() {
    let config = TomlConfig::default();
    let extractor = league_scrape::LeagueExtractor::new(&config.extraction, config.league.clone())
        .unwrap();
    let doc = scraper::Html::parse_document(LEAGUE_PAGE);
    let teams = extractor.extract_teams(&doc);
    assert_eq!(
        extractor.extract_fixtures(&doc, &teams).tier,
        Some(Tier::ResultTables)
    );
}
