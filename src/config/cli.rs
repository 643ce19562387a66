use crate::config::ClientConfig;
use crate::utils::error::Result;
use crate::utils::validation::{validate_url, Validate};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "cwgc")]
#[command(about = "Extract a casualty record from a CWGC register page as JSON")]
pub struct CliConfig {
    /// Casualty page URL, e.g. http://www.cwgc.org/find-war-dead/casualty/313405/...
    pub url: String,

    #[arg(long, help = "Read the page from a saved HTML file instead of fetching it")]
    pub file: Option<PathBuf>,

    #[arg(long, help = "TOML file with client settings")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Override the site root used for cemetery links")]
    pub base_url: Option<String>,

    #[arg(long)]
    pub timeout_seconds: Option<u64>,

    #[arg(long, help = "Pretty-print the JSON output")]
    pub pretty: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Settings from `--config` (or defaults), with flag overrides on top.
    pub fn client_config(&self) -> Result<ClientConfig> {
        let mut config = match &self.config {
            Some(path) => ClientConfig::from_file(path)?,
            None => ClientConfig::default(),
        };
        if let Some(base_url) = &self.base_url {
            config.base_url = base_url.clone();
        }
        if let Some(timeout) = self.timeout_seconds {
            config.timeout_seconds = Some(timeout);
        }
        config.validate()?;
        Ok(config)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        // a local file only needs the URL as a label for the record
        if self.file.is_none() {
            validate_url("url", &self.url)?;
        }
        Ok(())
    }
}
