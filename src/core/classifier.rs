use crate::core::etymology::extract_etymology;
use crate::core::markers::{MarkerList, MarkerTables};
use crate::domain::model::{Origin, OriginVerdict};

/// Classifies a dictionary entry by marker terms, pure markers first.
///
/// Foreign-language names often show up in a native entry as translation
/// glosses, so any pure marker anywhere in the document wins over any
/// foreign marker. Returns `None` when neither table matches.
pub fn classify(document: &str, markers: &MarkerTables) -> Option<OriginVerdict> {
    let etymology = extract_etymology(document);

    if let Some(marker) = find_marker(etymology, document, &markers.pure) {
        return Some(OriginVerdict {
            origin: Origin::Pure,
            marker: marker.to_string(),
        });
    }

    find_marker(etymology, document, &markers.foreign).map(|marker| OriginVerdict {
        origin: Origin::Foreign,
        marker: marker.to_string(),
    })
}

/// 先查詞源段落，再查整份文件
fn find_marker<'m>(
    etymology: Option<&str>,
    document: &str,
    markers: &'m MarkerList,
) -> Option<&'m str> {
    etymology
        .and_then(|section| markers.find_in(section))
        .or_else(|| markers.find_in(document))
}
