use crate::core::normalizer::normalize;
use crate::utils::error::{OriginError, Result};

/// 外來語來源標記；只在沒有任何純詞標記時才使用
#[rustfmt::skip]
pub const FOREIGN_MARKERS: &[&str] = &[
    "বিদেশী", "বিদেশি",
    "আরবি", "আরবী",
    "ফার্সি", "ফারসি", "ফার্সী",
    "ইংরেজি", "ইংরেজী",
    "পর্তুগিজ", "পর্তুগীজ",
    "বর্মী", "বর্মি",
    "তুর্কি", "তুর্কী",
    "হিন্দি", "হিন্দী",
    "উর্দু",
    "ফরাসি", "ফরাসী",
    "ওলন্দাজ",
    "জাপানি", "জাপানী",
    "চীনা",
    "মালয়",
    "গ্রিক",
    "লাতিন",
];

/// 純詞 (বাংলা/সংস্কৃত) 標記；優先檢查
#[rustfmt::skip]
pub const PURE_MARKERS: &[&str] = &[
    "তৎসম",
    "তদ্ভব",
    "সংস্কৃত",
    "প্রাকৃত",
    "বাংলা",
    "দেশি", "দেশী",
    "অর্ধতৎসম",
];

#[derive(Debug, Clone, PartialEq, Eq)]
struct Marker {
    label: String,
    key: String,
}

/// An ordered marker list. Earlier entries win when several match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerList {
    markers: Vec<Marker>,
}

impl MarkerList {
    fn new<S: AsRef<str>>(field: &str, labels: &[S]) -> Result<Self> {
        let markers: Vec<Marker> = labels
            .iter()
            .map(|label| Marker {
                label: label.as_ref().to_string(),
                key: normalize(label.as_ref()),
            })
            .filter(|marker| !marker.key.is_empty())
            .collect();

        if markers.is_empty() {
            return Err(OriginError::ConfigValidationError {
                field: field.to_string(),
                message: "Marker list cannot be empty".to_string(),
            });
        }

        Ok(Self { markers })
    }

    fn from_static(labels: &[&str]) -> Self {
        Self {
            markers: labels
                .iter()
                .map(|label| Marker {
                    label: label.to_string(),
                    key: normalize(label),
                })
                .collect(),
        }
    }

    /// First marker, in list order, contained in `text` (both sides normalized).
    pub fn find_in(&self, text: &str) -> Option<&str> {
        let haystack = normalize(text);
        self.markers
            .iter()
            .find(|marker| haystack.contains(marker.key.as_str()))
            .map(|marker| marker.label.as_str())
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}

/// 兩張標記表；替換表格只改變資料，不改變演算法
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerTables {
    pub pure: MarkerList,
    pub foreign: MarkerList,
}

impl MarkerTables {
    pub fn new<P: AsRef<str>, F: AsRef<str>>(pure: &[P], foreign: &[F]) -> Result<Self> {
        Ok(Self {
            pure: MarkerList::new("markers.pure", pure)?,
            foreign: MarkerList::new("markers.foreign", foreign)?,
        })
    }

    pub fn bundled() -> Self {
        Self {
            pure: MarkerList::from_static(PURE_MARKERS),
            foreign: MarkerList::from_static(FOREIGN_MARKERS),
        }
    }
}

impl Default for MarkerTables {
    fn default() -> Self {
        Self::bundled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_tables_are_non_empty() {
        let tables = MarkerTables::bundled();
        assert_eq!(tables.pure.len(), PURE_MARKERS.len());
        assert_eq!(tables.foreign.len(), FOREIGN_MARKERS.len());
        assert!(!tables.pure.is_empty());
        assert!(!tables.foreign.is_empty());
    }

    #[test]
    fn test_first_marker_in_list_order_is_reported() {
        let tables = MarkerTables::bundled();
        // সংস্কৃত 出現在 তৎসম 之前，但清單順序以 তৎসম 為先
        let text = "সংস্কৃত থেকে আগত তৎসম শব্দ";
        assert_eq!(tables.pure.find_in(text), Some("তৎসম"));
    }

    #[test]
    fn test_find_in_normalizes_haystack() {
        let tables = MarkerTables::bundled();
        let text = "উৎস: ইংরে\u{200C}জি";
        assert_eq!(tables.foreign.find_in(text), Some("ইংরেজি"));
    }

    #[test]
    fn test_no_match_returns_none() {
        let tables = MarkerTables::bundled();
        assert_eq!(tables.pure.find_in("কোনো তথ্য নেই"), None);
        assert_eq!(tables.foreign.find_in(""), None);
    }

    #[test]
    fn test_custom_tables_reject_empty_lists() {
        let empty: Vec<String> = vec![];
        assert!(MarkerTables::new(&["তৎসম"], &empty).is_err());
        assert!(MarkerTables::new(&["  "], &["আরবি"]).is_err());
        assert!(MarkerTables::new(&["তৎসম"], &["আরবি"]).is_ok());
    }
}
