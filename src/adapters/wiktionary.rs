use crate::core::{ConfigProvider, DocumentSource, SourceEntry};
use crate::utils::error::{OriginError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use url::Url;

pub const DEFAULT_ENDPOINT: &str = "https://bn.wiktionary.org/w/api.php";
pub const DEFAULT_USER_AGENT: &str = concat!("shobdo-bisharod/", env!("CARGO_PKG_VERSION"));

/// MediaWiki `action=query` client that returns the latest revision's wikitext.
#[derive(Debug, Clone)]
pub struct WiktionarySource {
    client: Client,
    endpoint: Url,
    timeout: Duration,
}

impl WiktionarySource {
    pub fn new(endpoint: &str, timeout: Duration, user_agent: &str) -> Result<Self> {
        let endpoint = Url::parse(endpoint).map_err(|e| OriginError::InvalidConfigValueError {
            field: "source.endpoint".to_string(),
            value: endpoint.to_string(),
            reason: format!("Invalid URL format: {}", e),
        })?;

        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            endpoint,
            timeout,
        })
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        Self::new(config.api_endpoint(), config.timeout(), config.user_agent())
    }

    /// 組出查詢單一標題的 URL
    pub fn query_url(&self, title: &str) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("action", "query")
            .append_pair("prop", "revisions")
            .append_pair("titles", title)
            .append_pair("rvprop", "content")
            .append_pair("rvslots", "main")
            .append_pair("format", "json")
            .append_pair("formatversion", "1");
        url
    }
}

#[async_trait]
impl DocumentSource for WiktionarySource {
    async fn fetch(&self, title: &str) -> Result<SourceEntry> {
        let url = self.query_url(title);
        tracing::debug!("Making API request to: {}", url);

        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                OriginError::SourceTimeout {
                    seconds: self.timeout.as_secs(),
                }
            } else {
                OriginError::ApiError(e)
            }
        })?;

        tracing::debug!("API response status: {}", response.status());
        if !response.status().is_success() {
            return Err(OriginError::SourceStatus {
                status: response.status().as_u16(),
            });
        }

        let body = response.text().await?;
        let json: Value =
            serde_json::from_str(&body).map_err(|e| OriginError::MalformedResponse {
                message: e.to_string(),
            })?;

        Ok(parse_query_response(&json))
    }
}

/// Interprets a `prop=revisions` query response for a single title.
pub fn parse_query_response(json: &Value) -> SourceEntry {
    let Some(pages) = json.pointer("/query/pages").and_then(Value::as_object) else {
        return SourceEntry::Missing;
    };

    let Some((page_id, page)) = pages.iter().next() else {
        return SourceEntry::Missing;
    };

    if page_id == "-1" || page.get("missing").is_some() || page.get("invalid").is_some() {
        return SourceEntry::Missing;
    }

    let revision = page.pointer("/revisions/0");
    let content = revision
        .and_then(|rev| {
            rev.pointer("/slots/main/*")
                .or_else(|| rev.pointer("/slots/main/content"))
                .or_else(|| rev.get("*"))
        })
        .and_then(Value::as_str)
        .unwrap_or_default();

    SourceEntry::Found(content.to_string())
}
