// Application wiring: builds a ready-to-use checker from any config provider.

use crate::adapters::WiktionarySource;
use crate::core::checker::WordChecker;
use crate::core::lexicon::Lexicon;
use crate::core::markers::MarkerTables;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use std::sync::Arc;

/// 載入內建詞庫與標記表 (或設定檔中的自訂標記表)，並建立維基詞典來源
pub fn build_checker<C: ConfigProvider>(config: &C) -> Result<WordChecker<WiktionarySource>> {
    let lexicon = Arc::new(Lexicon::bundled());

    let markers = match config.markers() {
        Some((pure, foreign)) => {
            tracing::info!(
                "Using custom marker tables: {} pure, {} foreign",
                pure.len(),
                foreign.len()
            );
            MarkerTables::new(pure, foreign)?
        }
        None => MarkerTables::bundled(),
    };

    let source = WiktionarySource::from_config(config)?;

    Ok(WordChecker::new(lexicon, Arc::new(markers), source).with_timeout(config.timeout()))
}
