use crate::core::normalizer::normalize;
use std::collections::HashSet;

const BUNDLED_PURE_WORDS: &str = include_str!("../../data/pure_words.txt");
const BUNDLED_FOREIGN_WORDS: &str = include_str!("../../data/foreign_words.txt");

/// 本地詞庫：已知的純詞與外來詞，啟動時載入後不再變動
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    pure_words: HashSet<String>,
    foreign_words: HashSet<String>,
}

impl Lexicon {
    /// Loads the word lists compiled into the binary.
    pub fn bundled() -> Self {
        Self::from_lists(BUNDLED_PURE_WORDS, BUNDLED_FOREIGN_WORDS)
    }

    /// Builds a lexicon from two line lists. Blank lines and `#` comments are
    /// skipped; every entry is stored in normalized form.
    pub fn from_lists(pure_source: &str, foreign_source: &str) -> Self {
        let lexicon = Self {
            pure_words: parse_word_list(pure_source),
            foreign_words: parse_word_list(foreign_source),
        };

        tracing::debug!(
            "Lexicon loaded: {} pure words, {} foreign words",
            lexicon.pure_words.len(),
            lexicon.foreign_words.len()
        );

        lexicon
    }

    /// `word` must already be normalized.
    pub fn contains_pure(&self, word: &str) -> bool {
        self.pure_words.contains(word)
    }

    /// `word` must already be normalized.
    pub fn contains_foreign(&self, word: &str) -> bool {
        self.foreign_words.contains(word)
    }

    pub fn pure_len(&self) -> usize {
        self.pure_words.len()
    }

    pub fn foreign_len(&self) -> usize {
        self.foreign_words.len()
    }

    /// 同時出現在兩個集合的詞 (資料錯誤)
    pub fn overlap(&self) -> Vec<&str> {
        let mut shared: Vec<&str> = self
            .pure_words
            .intersection(&self.foreign_words)
            .map(String::as_str)
            .collect();
        shared.sort_unstable();
        shared
    }
}

fn parse_word_list(source: &str) -> HashSet<String> {
    source
        .lines()
        .map(normalize)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_sets_are_disjoint() {
        let lexicon = Lexicon::bundled();
        assert!(lexicon.pure_len() > 0);
        assert!(lexicon.foreign_len() > 0);
        assert!(lexicon.overlap().is_empty(), "shared: {:?}", lexicon.overlap());
    }

    #[test]
    fn test_bundled_contains_known_words() {
        let lexicon = Lexicon::bundled();
        assert!(lexicon.contains_pure("আকাশ"));
        assert!(lexicon.contains_foreign(&normalize("চেয়ার")));
        assert!(!lexicon.contains_pure(&normalize("চেয়ার")));
    }

    #[test]
    fn test_entries_are_normalized_on_load() {
        let lexicon = Lexicon::from_lists("  ব\u{09C7}\u{09BE}ন\u{200C}\n", "চে\u{09DF}ার\n");
        assert!(lexicon.contains_pure(&normalize("বোন")));
        assert!(lexicon.contains_foreign(&normalize("চে\u{09AF}\u{09BC}ার")));
    }

    #[test]
    fn test_comments_and_blank_lines_are_skipped() {
        let lexicon = Lexicon::from_lists("# header\n\nজল\n   \n", "");
        assert_eq!(lexicon.pure_len(), 1);
        assert_eq!(lexicon.foreign_len(), 0);
    }

    #[test]
    fn test_overlap_reports_shared_entries() {
        let lexicon = Lexicon::from_lists("জল\nমাটি\n", "মাটি\nবাস\n");
        assert_eq!(lexicon.overlap(), vec!["মাটি"]);
    }
}
