pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use toml_config::TomlConfig;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "league-scrape")]
#[command(about = "Scrape a league page into a structured results record")]
pub struct CliConfig {
    /// League page to fetch
    #[arg(long)]
    pub url: Option<String>,

    /// Parse a saved HTML page instead of fetching
    #[arg(long, conflicts_with = "url")]
    pub input: Option<String>,

    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(long)]
    pub output_path: Option<String>,

    #[arg(long)]
    pub output_file: Option<String>,

    /// Also save the raw page (relative to the output path)
    #[arg(long)]
    pub dump_html: Option<String>,

    /// Print the record instead of saving it
    #[arg(long)]
    pub dry_run: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub log_json: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Command line values win over the file.
    pub fn apply_overrides(&self, config: &mut TomlConfig) {
        if let Some(url) = &self.url {
            config.source.url = url.clone();
        }
        if let Some(output_path) = &self.output_path {
            config.load.output_path = output_path.clone();
        }
        if let Some(output_file) = &self.output_file {
            config.load.output_file = output_file.clone();
        }
        if let Some(dump) = &self.dump_html {
            config.load.dump_html_file = Some(dump.clone());
        }
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;
    use crate::core::ConfigProvider;

    #[test]
    fn test_cli_overrides_file_values() {
        let args = CliConfig::parse_from([
            "league-scrape",
            "--url",
            "https://example.com/other",
            "--output-file",
            "league.json",
            "--dump-html",
            "page.html",
        ]);
        let mut config = TomlConfig::from_toml_str("[load]\noutput_path = \"./out\"\n").unwrap();
        args.apply_overrides(&mut config);

        assert_eq!(config.source.url, "https://example.com/other");
        assert_eq!(config.output_path(), "./out");
        assert_eq!(config.output_file(), "league.json");
        assert_eq!(config.dump_html_file(), Some("page.html"));
    }

    #[test]
    fn test_input_conflicts_with_url() {
        let result = CliConfig::try_parse_from([
            "league-scrape",
            "--url",
            "https://example.com",
            "--input",
            "page.html",
        ]);
        assert!(result.is_err());
    }
}
