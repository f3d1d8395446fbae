//! Best-effort slice of the etymology section out of raw wikitext.

use regex::Regex;
use std::sync::LazyLock;

/// "ব্যুৎপত্তি" 標題及該行剩餘部分
static HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"ব্যুৎপত্তি[^\n]*\n").expect("valid heading pattern"));

/// 下一個章節標題 (`==`) 或模板區塊 (`{{`) 的起點
static SECTION_END: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n(==|\{\{)").expect("valid section end pattern"));

/// Returns the text after the first etymology heading line, up to the next
/// `\n==`, `\n{{` or the end of the document. `None` when there is no
/// heading followed by a line break.
pub fn extract_etymology(document: &str) -> Option<&str> {
    let heading = HEADING.find(document)?;
    let body = &document[heading.end()..];

    let end = SECTION_END
        .find(body)
        .map(|boundary| boundary.start())
        .unwrap_or(body.len());

    Some(&body[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_until_next_heading() {
        let doc = "== বাংলা ==\n=== ব্যুৎপত্তি ===\nসংস্কৃত আকাশ থেকে।\nতৎসম শব্দ।\n=== বিশেষ্য ===\nsky";
        assert_eq!(
            extract_etymology(doc),
            Some("সংস্কৃত আকাশ থেকে।\nতৎসম শব্দ।")
        );
    }

    #[test]
    fn test_stops_at_template_block() {
        let doc = "===ব্যুৎপত্তি===\nআরবি থেকে\n{{বিশেষ্য}}\nইংরেজি: book";
        assert_eq!(extract_etymology(doc), Some("আরবি থেকে"));
    }

    #[test]
    fn test_runs_to_end_of_document() {
        let doc = "ব্যুৎপত্তি\nফার্সি থেকে আগত";
        assert_eq!(extract_etymology(doc), Some("ফার্সি থেকে আগত"));
    }

    #[test]
    fn test_empty_section_when_heading_directly_followed_by_next() {
        let doc = "=== ব্যুৎপত্তি ===\n\n=== উচ্চারণ ===\n";
        assert_eq!(extract_etymology(doc), Some(""));
    }

    #[test]
    fn test_absent_without_heading() {
        assert_eq!(extract_etymology("== বাংলা ==\nবিশেষ্য"), None);
        assert_eq!(extract_etymology(""), None);
    }

    #[test]
    fn test_absent_when_heading_is_last_line() {
        assert_eq!(extract_etymology("শেষে === ব্যুৎপত্তি ==="), None);
    }

    #[test]
    fn test_first_heading_wins() {
        let doc = "ব্যুৎপত্তি ১\nতদ্ভব\n== x ==\nব্যুৎপত্তি ২\nআরবি";
        assert_eq!(extract_etymology(doc), Some("তদ্ভব"));
    }
}
