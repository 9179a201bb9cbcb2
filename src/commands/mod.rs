//! CLI command implementations for lineage-map.
//!
//! Available commands:
//! - **classify** / **score**: one-off classification of answers given as flags
//! - **answer** / **show** / **reset** / **share**: work on the stored answers
//! - **questions**: list question metadata
//! - **export** / **stats**: full decision tables and code distributions
//! - **init**: write a default configuration file
//!
//! Handlers write to a caller-supplied writer so they can be exercised
//! without a terminal.

pub mod classify;
pub mod export;
pub mod init;
pub mod session;

pub use classify::{classify_command, score_command, HistoricalInput, WokeInput};
pub use export::{export_table, print_stats};
pub use init::init_config;
pub use session::{answer_command, print_questions, reset_command, share_command, show_command};

use std::path::PathBuf;

use crate::config::LineageConfig;
use crate::formatting::{ColorMode, FormattingConfig, ResultFormatter};

/// Settings every command needs, resolved once in `main`.
#[derive(Debug, Clone)]
pub struct CommandContext {
    pub config: LineageConfig,
    pub formatting: FormattingConfig,
    pub store_path: PathBuf,
}

impl CommandContext {
    /// CLI flags win over the configuration file, which wins over defaults.
    pub fn resolve(config: LineageConfig, store_override: Option<PathBuf>, plain: bool) -> Self {
        let formatting = if plain {
            FormattingConfig::plain()
        } else {
            let base = config
                .output
                .as_ref()
                .and_then(|o| o.color_mode())
                .unwrap_or(ColorMode::Auto);
            FormattingConfig::from_env(base)
        };
        let store_path = store_override.unwrap_or_else(|| config.store_path());
        Self {
            config,
            formatting,
            store_path,
        }
    }

    pub fn formatter(&self) -> ResultFormatter {
        ResultFormatter::new(self.formatting)
    }
}
