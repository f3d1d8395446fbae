// Adapters layer: concrete implementations for external systems.

pub mod wiktionary;

pub use wiktionary::WiktionarySource;
