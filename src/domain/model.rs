use serde::{Deserialize, Serialize};
use std::fmt;

/// 查詢結果的分類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WordType {
    Pure,
    Foreign,
    Unknown,
    Invalid,
}

impl fmt::Display for WordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            WordType::Pure => "pure",
            WordType::Foreign => "foreign",
            WordType::Unknown => "unknown",
            WordType::Invalid => "invalid",
        };
        f.write_str(label)
    }
}

/// One terminal answer for one requested word.
///
/// `word` echoes the trimmed input as typed; `valid` is true only for
/// [`WordType::Pure`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub word: String,
    pub valid: bool,
    #[serde(rename = "type")]
    pub kind: WordType,
    pub reason: String,
}

impl ClassificationResult {
    pub fn new(word: impl Into<String>, kind: WordType, reason: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            valid: kind == WordType::Pure,
            kind,
            reason: reason.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    Pure,
    Foreign,
}

impl From<Origin> for WordType {
    fn from(origin: Origin) -> Self {
        match origin {
            Origin::Pure => WordType::Pure,
            Origin::Foreign => WordType::Foreign,
        }
    }
}

/// 分類器的判定：來源與命中的標記
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OriginVerdict {
    pub origin: Origin,
    pub marker: String,
}

impl OriginVerdict {
    pub fn reason(&self) -> String {
        match self.origin {
            Origin::Pure => format!("খাঁটি বাংলা শব্দ — \"{}\" (উইকিশব্দকোষ)", self.marker),
            Origin::Foreign => format!("বিদেশী উৎসের শব্দ — \"{}\" (উইকিশব্দকোষ)", self.marker),
        }
    }
}

/// What the external dictionary knows about a title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceEntry {
    Missing,
    /// 頁面存在；內容可能是空字串
    Found(String),
}
