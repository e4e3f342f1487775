use anyhow::{Context, Result};
use clap::Parser;
use league_scrape::core::{DocumentSource, Storage};
use league_scrape::config::toml_config::DEFAULT_LEAGUE_URL;
use league_scrape::sources::DEFAULT_USER_AGENT;
use league_scrape::utils::logger;
use league_scrape::{HttpSource, LocalStorage};
use std::time::Duration;

/// Fetch the league page and report what its markup contains, to help pick
/// selectors and patterns for the `[extraction]` config section.
#[derive(Parser)]
#[command(name = "inspect-page")]
struct Args {
    #[arg(long, default_value = DEFAULT_LEAGUE_URL)]
    url: String,

    /// Text expected somewhere on the page, usually a team name
    #[arg(long, default_value = "Colonel Getafe")]
    probe: String,

    #[arg(long, default_value = ".")]
    output_path: String,

    #[arg(long, default_value = "page_source.html")]
    output_file: String,

    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    logger::init_cli_logger(args.verbose);

    let source = HttpSource::new(args.url.clone(), DEFAULT_USER_AGENT, Duration::from_secs(30))?;
    let html = source
        .fetch()
        .await
        .with_context(|| format!("failed to fetch {}", source.describe()))?;

    let storage = LocalStorage::new(args.output_path.clone());
    storage
        .write_file(&args.output_file, html.as_bytes())
        .await
        .context("failed to save page source")?;

    println!("Page HTML saved to {}/{}", args.output_path, args.output_file);
    println!("Total length: {} characters", html.chars().count());

    if let Some(idx) = html.find(&args.probe) {
        println!("\n✓ Found '{}' in the page!", args.probe);
        println!("Context: {}", context_around(&html, idx, args.probe.len()));
    }

    let lower = html.to_lowercase();
    if lower.contains("<table") {
        println!("\n✓ Found table elements");
    }
    if lower.contains("gameweek") || lower.contains("fixture") {
        println!("✓ Found gameweek/fixture references");
    }

    Ok(())
}

/// Up to 100 bytes before and 200 after the match, widened to char boundaries.
fn context_around(html: &str, idx: usize, len: usize) -> &str {
    let mut start = idx.saturating_sub(100);
    while !html.is_char_boundary(start) {
        start -= 1;
    }
    let mut end = (idx + len + 200).min(html.len());
    while !html.is_char_boundary(end) {
        end += 1;
    }
    &html[start..end]
}
