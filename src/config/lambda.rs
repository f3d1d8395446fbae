use crate::adapters::wiktionary::{DEFAULT_ENDPOINT, DEFAULT_USER_AGENT};
use crate::core::checker::DEFAULT_LOOKUP_TIMEOUT;
use crate::core::ConfigProvider;
use crate::utils::error::{OriginError, Result};
use crate::utils::validation::{self, Validate};
use std::env;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct LambdaConfig {
    pub api_endpoint: String,
    pub timeout_seconds: u64,
    pub user_agent: String,
}

impl LambdaConfig {
    pub fn from_env() -> Result<Self> {
        let timeout_seconds = match env::var("LOOKUP_TIMEOUT_SECONDS") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| OriginError::InvalidConfigValueError {
                    field: "LOOKUP_TIMEOUT_SECONDS".to_string(),
                    value: raw.clone(),
                    reason: "Must be a whole number of seconds".to_string(),
                })?,
            Err(_) => DEFAULT_LOOKUP_TIMEOUT.as_secs(),
        };

        Ok(Self {
            api_endpoint: env::var("WIKTIONARY_ENDPOINT")
                .unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string()),
            timeout_seconds,
            user_agent: env::var("LOOKUP_USER_AGENT")
                .unwrap_or_else(|_| DEFAULT_USER_AGENT.to_string()),
        })
    }
}

impl ConfigProvider for LambdaConfig {
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

impl Validate for LambdaConfig {
    fn validate(&self) -> Result<()> {
        // 驗證API端點
        validation::validate_url("WIKTIONARY_ENDPOINT", &self.api_endpoint)?;

        validation::validate_range("LOOKUP_TIMEOUT_SECONDS", self.timeout_seconds, 1, 30)?;
        validation::validate_non_empty_string("LOOKUP_USER_AGENT", &self.user_agent)?;

        Ok(())
    }
}
