pub mod checker;
pub mod classifier;
pub mod etymology;
pub mod lexicon;
pub mod markers;
pub mod normalizer;

pub use crate::domain::model::{ClassificationResult, Origin, OriginVerdict, SourceEntry, WordType};
pub use crate::domain::ports::{ConfigProvider, DocumentSource};
pub use crate::utils::error::Result;
