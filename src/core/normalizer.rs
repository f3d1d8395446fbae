//! Canonical form used as the only comparison key for words and markers.

use unicode_normalization::UnicodeNormalization;

const ZERO_WIDTH_NON_JOINER: char = '\u{200C}';
const ZERO_WIDTH_JOINER: char = '\u{200D}';

/// Normalizes Bengali text for matching.
///
/// Strips ZWJ/ZWNJ, applies NFC, then trims surrounding whitespace. Joiners
/// are removed before composition so that `normalize(normalize(x))` equals
/// `normalize(x)`: a joiner sitting between a vowel sign pair blocks NFC,
/// and dropping it afterwards would leave an uncomposed sequence behind.
pub fn normalize(text: &str) -> String {
    let composed: String = text
        .chars()
        .filter(|c| *c != ZERO_WIDTH_NON_JOINER && *c != ZERO_WIDTH_JOINER)
        .nfc()
        .collect();

    composed.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trims_whitespace() {
        assert_eq!(normalize("  আকাশ  "), "আকাশ");
        assert_eq!(normalize("\tআকাশ\n"), "আকাশ");
    }

    #[test]
    fn test_strips_joiners() {
        assert_eq!(normalize("আ\u{200C}কাশ"), "আকাশ");
        assert_eq!(normalize("আকা\u{200D}শ"), "আকাশ");
    }

    #[test]
    fn test_composed_and_decomposed_vowel_sign_match() {
        // ো (U+09CB) == ে (U+09C7) + া (U+09BE)
        let composed = "ব\u{09CB}ন";
        let decomposed = "ব\u{09C7}\u{09BE}ন";
        assert_ne!(composed, decomposed);
        assert_eq!(normalize(composed), normalize(decomposed));
    }

    #[test]
    fn test_precomposed_yya_matches_nukta_sequence() {
        // য় (U+09DF) 是組合排除字元，NFC 後兩種寫法一致
        let precomposed = "চে\u{09DF}ার";
        let sequence = "চে\u{09AF}\u{09BC}ার";
        assert_eq!(normalize(precomposed), normalize(sequence));
    }

    #[test]
    fn test_idempotent() {
        let samples = [
            "",
            "   ",
            "  আকাশ  ",
            "ব\u{09C7}\u{200C}\u{09BE}ন",
            "চে\u{09DF}ার\u{200D}",
            " \u{200D} ",
            "e\u{0301}",
        ];
        for sample in samples {
            let once = normalize(sample);
            assert_eq!(normalize(&once), once, "not idempotent for {:?}", sample);
        }
    }

    #[test]
    fn test_joiner_between_vowel_sign_parts_still_composes() {
        assert_eq!(normalize("ব\u{09C7}\u{200C}\u{09BE}ন"), "ব\u{09CB}ন");
    }

    #[test]
    fn test_only_joiners_becomes_empty() {
        assert_eq!(normalize("\u{200C}\u{200D}"), "");
    }
}
