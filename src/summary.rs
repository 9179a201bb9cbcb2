//! Shareable plain-text summary of the current answers.

use crate::errors::{Error, Result};
use crate::history::{HistoricalAnswers, HistoricalField, HistoricalResult};
use crate::woke::WokeResult;

pub const SUMMARY_TITLE: &str = "Are You a Colonizer?";

/// Answered historical questions as `key=value` pairs joined by `&`, in
/// question order. Unset answers are left out.
pub fn answers_query(answers: &HistoricalAnswers) -> String {
    HistoricalField::ALL
        .iter()
        .filter_map(|f| answers.answered(*f).map(|v| format!("{}={}", f.as_str(), v)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Builds the text a user copies to share their result.
///
/// ```
/// use lineage_map::{classify_historical, share_text, HistoricalAnswers};
///
/// let answers = HistoricalAnswers::default();
/// let text = share_text(&answers, &classify_historical(&answers), None);
/// assert_eq!(
///     text,
///     "Are You a Colonizer?\nHistorical: Inconclusive (need more data)\nAnswers: (none)\nBonus (Woke): see in-app panel."
/// );
/// ```
pub fn share_text(
    answers: &HistoricalAnswers,
    historical: &HistoricalResult,
    woke: Option<&WokeResult>,
) -> String {
    let query = answers_query(answers);
    let query = if query.is_empty() { "(none)" } else { query.as_str() };
    let bonus = woke.map_or("see in-app panel.", |w| w.label);
    format!(
        "{}\nHistorical: {}\nAnswers: {}\nBonus (Woke): {}",
        SUMMARY_TITLE, historical.label, query, bonus
    )
}

/// Places `text` on the system clipboard.
///
/// # Errors
///
/// Returns [`Error::Clipboard`] when no clipboard is available (headless
/// sessions, missing display server) or the write is refused.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = arboard::Clipboard::new().map_err(|e| Error::Clipboard(e.to_string()))?;
    clipboard
        .set_text(text.to_owned())
        .map_err(|e| Error::Clipboard(e.to_string()))
}
