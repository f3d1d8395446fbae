use crate::core::classifier::classify;
use crate::core::lexicon::Lexicon;
use crate::core::markers::MarkerTables;
use crate::core::normalizer::normalize;
use crate::domain::model::{ClassificationResult, SourceEntry, WordType};
use crate::domain::ports::DocumentSource;
use crate::utils::error::OriginError;
use std::sync::Arc;
use std::time::Duration;

pub const DEFAULT_LOOKUP_TIMEOUT: Duration = Duration::from_secs(8);

/// 使用者可見的理由字串
pub mod reasons {
    pub const NO_WORD: &str = "শব্দ প্রদান করা হয়নি";
    pub const LOCAL_FOREIGN: &str = "বিদেশী শব্দ (স্থানীয় অভিধান)";
    pub const LOCAL_PURE: &str = "খাঁটি বাংলা শব্দ (স্থানীয় অভিধান)";
    pub const SOURCE_UNAVAILABLE: &str = "API ত্রুটি — শব্দের উৎস নিশ্চিত করা সম্ভব হয়নি";
    pub const NOT_FOUND: &str = "উইকিশব্দকোষে খুঁজে পাওয়া যায়নি";
    pub const NO_CONTENT: &str = "উইকিশব্দকোষে বিষয়বস্তু পাওয়া যায়নি";
    pub const UNDETERMINED: &str = "শব্দের উৎস নিশ্চিত করা যায়নি";
}

/// Runs one word through the local lexicon, then the external source and the
/// marker classifier. Every path ends in a [`ClassificationResult`].
pub struct WordChecker<S: DocumentSource> {
    lexicon: Arc<Lexicon>,
    markers: Arc<MarkerTables>,
    source: S,
    timeout: Duration,
}

impl<S: DocumentSource> WordChecker<S> {
    pub fn new(lexicon: Arc<Lexicon>, markers: Arc<MarkerTables>, source: S) -> Self {
        Self {
            lexicon,
            markers,
            source,
            timeout: DEFAULT_LOOKUP_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Validates a JSON request field: anything but a string is `invalid`.
    pub async fn check_value(&self, raw: Option<&serde_json::Value>) -> ClassificationResult {
        self.check(raw.and_then(serde_json::Value::as_str)).await
    }

    pub async fn check(&self, raw: Option<&str>) -> ClassificationResult {
        let Some(raw) = raw else {
            return ClassificationResult::new("", WordType::Invalid, reasons::NO_WORD);
        };

        // 回傳給呼叫端的是「只去空白」的原字
        let trimmed = raw.trim();
        let word = normalize(trimmed);

        if word.is_empty() {
            tracing::debug!("Rejecting empty word");
            return ClassificationResult::new(trimmed, WordType::Invalid, reasons::NO_WORD);
        }

        if self.lexicon.contains_foreign(&word) {
            tracing::debug!("'{}' found in local foreign lexicon", word);
            return ClassificationResult::new(trimmed, WordType::Foreign, reasons::LOCAL_FOREIGN);
        }

        if self.lexicon.contains_pure(&word) {
            tracing::debug!("'{}' found in local pure lexicon", word);
            return ClassificationResult::new(trimmed, WordType::Pure, reasons::LOCAL_PURE);
        }

        tracing::debug!("'{}' not in local lexicon, querying external source", word);
        let fetched = tokio::time::timeout(self.timeout, self.source.fetch(&word))
            .await
            .unwrap_or_else(|_| {
                Err(OriginError::SourceTimeout {
                    seconds: self.timeout.as_secs(),
                })
            });

        // 單次嘗試，失敗不重試
        let entry = match fetched {
            Ok(entry) => entry,
            Err(e) => {
                if e.is_source_failure() {
                    tracing::warn!("⚠️ Lookup source error for '{}': {}", trimmed, e);
                } else {
                    tracing::error!("❌ Unexpected lookup error for '{}': {}", trimmed, e);
                }
                return ClassificationResult::new(
                    trimmed,
                    WordType::Unknown,
                    reasons::SOURCE_UNAVAILABLE,
                );
            }
        };

        let content = match entry {
            SourceEntry::Missing => {
                tracing::debug!("'{}' has no entry in external source", word);
                return ClassificationResult::new(trimmed, WordType::Unknown, reasons::NOT_FOUND);
            }
            SourceEntry::Found(content) if content.is_empty() => {
                tracing::debug!("'{}' entry has no content", word);
                return ClassificationResult::new(trimmed, WordType::Unknown, reasons::NO_CONTENT);
            }
            SourceEntry::Found(content) => content,
        };

        match classify(&content, &self.markers) {
            Some(verdict) => {
                tracing::debug!(
                    "'{}' classified as {:?} by marker '{}'",
                    word,
                    verdict.origin,
                    verdict.marker
                );
                ClassificationResult::new(trimmed, verdict.origin.into(), verdict.reason())
            }
            None => {
                tracing::debug!("'{}' entry carries no origin marker", word);
                ClassificationResult::new(trimmed, WordType::Unknown, reasons::UNDETERMINED)
            }
        }
    }
}
