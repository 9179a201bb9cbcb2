//! Rule-based classification of lineage history and present-day position.
//!
//! Two independent, pure classifiers sit at the core:
//!
//! - [`classify_historical`] maps six tri-state answers to one of eight
//!   [`HistoricalCode`]s through an ordered precedence chain.
//! - [`score_woke`] turns five tri-state answers, a migration [`Motive`] and a
//!   transformation [`Stance`] into a benefit score, a [`WokeCode`] and
//!   warning flags.
//!
//! Both are total over their finite input domains and hold no state. The
//! remaining modules are edges around them: question metadata, a persisted
//! answer store, decision-table export, configuration and terminal output.

// Export modules for library usage
pub mod answer;
pub mod cli;
pub mod commands;
pub mod config;
pub mod errors;
pub mod export;
pub mod formatting;
pub mod history;
pub mod questions;
pub mod store;
pub mod summary;
pub mod tone;
pub mod woke;

// Re-export commonly used types
pub use crate::answer::{Motive, Stance, Tri};
pub use crate::errors::{Error, Result};
pub use crate::history::{
    classify_historical, HistoricalAnswers, HistoricalCode, HistoricalField, HistoricalResult,
};
pub use crate::questions::{Question, HISTORICAL_QUESTIONS, WOKE_QUESTIONS};
pub use crate::store::{AnswerStore, Classification, FileStore, KeyValueStore, MemoryStore};
pub use crate::summary::share_text;
pub use crate::tone::Tone;
pub use crate::woke::{
    benefit_score, score_woke, WokeAnswers, WokeCode, WokeField, WokeFlags, WokeResult,
};
