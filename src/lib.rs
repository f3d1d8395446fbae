pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

#[cfg(feature = "lambda")]
pub use config::lambda::LambdaConfig;

pub use adapters::WiktionarySource;
pub use app::build_checker;
pub use config::toml_config::TomlConfig;
pub use core::checker::WordChecker;
pub use domain::model::{ClassificationResult, WordType};
pub use utils::error::{OriginError, Result};
