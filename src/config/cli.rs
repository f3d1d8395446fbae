use crate::adapters::wiktionary::{DEFAULT_ENDPOINT, DEFAULT_USER_AGENT};
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "shobdo-bisharod")]
#[command(about = "Classify Bengali words as pure (native) or foreign")]
pub struct CliConfig {
    /// Words to classify
    pub words: Vec<String>,

    #[arg(long, help = "Read one word per line from stdin")]
    pub stdin: bool,

    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    pub api_endpoint: String,

    #[arg(long, default_value = "8")]
    pub timeout_seconds: u64,

    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    #[arg(short, long, help = "TOML config file; replaces the source options above")]
    pub config: Option<String>,

    #[arg(long, help = "Pretty-print JSON results")]
    pub pretty: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn api_endpoint(&self) -> &str {
        &self.api_endpoint
    }

    fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("api_endpoint", &self.api_endpoint)?;
        validation::validate_range("timeout_seconds", self.timeout_seconds, 1, 30)?;
        validation::validate_non_empty_string("user_agent", &self.user_agent)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CliConfig::parse_from(["shobdo-bisharod", "আকাশ", "চেয়ার"]);

        assert_eq!(config.words, vec!["আকাশ".to_string(), "চেয়ার".to_string()]);
        assert_eq!(config.api_endpoint(), DEFAULT_ENDPOINT);
        assert_eq!(config.timeout(), Duration::from_secs(8));
        assert!(config.markers().is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_out_of_range_timeout() {
        let config =
            CliConfig::parse_from(["shobdo-bisharod", "--timeout-seconds", "120", "জল"]);
        assert!(config.validate().is_err());
    }
}
