use anyhow::Result;
use comfy_table::{presets::UTF8_FULL, Table};
use std::io::Write;

use super::CommandContext;
use crate::cli::OutputFormat;
use crate::errors::Error;
use crate::questions::{self, HISTORICAL_QUESTIONS, WOKE_QUESTIONS};
use crate::store::{AnswerStore, Classification, FileStore, ResetScope};
use crate::summary::{copy_to_clipboard, share_text};

fn open_store(ctx: &CommandContext) -> AnswerStore<FileStore> {
    let store = AnswerStore::open_file(&ctx.store_path);
    log::debug!("Using answer store {}", store.backend().path().display());
    store
}

pub fn answer_command<W: Write>(
    ctx: &CommandContext,
    id: &str,
    value: &str,
    out: &mut W,
) -> Result<()> {
    let question = questions::find(id).ok_or_else(|| Error::UnknownQuestion(id.to_string()))?;
    let mut store = open_store(ctx);
    let formatter = ctx.formatter();
    writeln!(out, "{}", question.prompt)?;
    match store.set_answer(question.id, value)? {
        Classification::Historical(result) => write!(out, "{}", formatter.historical(&result))?,
        Classification::Woke(result) => write!(out, "{}", formatter.woke(&result))?,
    }
    Ok(())
}

pub fn show_command<W: Write>(ctx: &CommandContext, format: OutputFormat, out: &mut W) -> Result<()> {
    let store = open_store(ctx);
    let historical = store.historical_result();
    let woke = store.woke_result();

    match format {
        OutputFormat::Json => {
            let doc = serde_json::json!({
                "historical": {
                    "answers": store.historical(),
                    "result": historical,
                },
                "woke": {
                    "answers": store.woke(),
                    "result": woke,
                },
            });
            writeln!(out, "{}", serde_json::to_string_pretty(&doc)?)?;
        }
        OutputFormat::Terminal => {
            let formatter = ctx.formatter();
            write!(out, "{}", formatter.historical(&historical))?;
            writeln!(out)?;
            write!(out, "{}", formatter.woke(&woke))?;
        }
    }
    Ok(())
}

pub fn reset_command<W: Write>(ctx: &CommandContext, scope: ResetScope, out: &mut W) -> Result<()> {
    let mut store = open_store(ctx);
    store.reset(scope);
    let what = match scope {
        ResetScope::Historical => "historical answers",
        ResetScope::Woke => "woke answers",
        ResetScope::All => "all answers",
    };
    writeln!(out, "Cleared {what}")?;
    Ok(())
}

pub fn print_questions<W: Write>(out: &mut W) -> Result<()> {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec!["Id", "Question", "Help"]);
    for q in HISTORICAL_QUESTIONS.iter().chain(WOKE_QUESTIONS.iter()) {
        table.add_row(vec![q.id, q.prompt, q.help]);
    }
    writeln!(out, "{table}")?;
    Ok(())
}

/// Prints the share summary; with `copy`, also tries the clipboard. A
/// clipboard failure is reported and otherwise ignored.
pub fn share_command<W: Write>(ctx: &CommandContext, copy: bool, out: &mut W) -> Result<()> {
    let store = open_store(ctx);
    let text = share_text(
        store.historical(),
        &store.historical_result(),
        Some(&store.woke_result()),
    );
    writeln!(out, "{text}")?;

    if copy {
        match copy_to_clipboard(&text) {
            Ok(()) => writeln!(out, "Copied!")?,
            Err(e) => log::warn!("{}", e),
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LineageConfig;

    fn ctx_in(dir: &tempfile::TempDir) -> CommandContext {
        CommandContext::resolve(
            LineageConfig::default(),
            Some(dir.path().join("answers.json")),
            true,
        )
    }

    #[test]
    fn answers_persist_between_commands() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = ctx_in(&dir);

        let mut out = Vec::new();
        answer_command(&ctx, "enslaved_or_forced", "yes", &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Were your ancestors enslaved"), "{text}");
        assert!(text.contains("[FORCED]"));

        let mut out = Vec::new();
        show_command(&ctx, OutputFormat::Json, &mut out).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["historical"]["result"]["code"], "FORCED");
        assert_eq!(value["historical"]["answers"]["enslaved_or_forced"], "yes");
        assert_eq!(value["woke"]["result"]["T"], 2);
    }

    #[test]
    fn unknown_question_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut out = Vec::new();
        let err = answer_command(&ctx_in(&dir), "shoe_size", "42", &mut out).unwrap_err();
        assert_eq!(err.to_string(), "Unknown question id: shoe_size");
        assert!(out.is_empty());
        assert!(!dir.path().join("answers.json").exists());
    }

    #[test]
    fn reset_then_share_shows_no_answers() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = ctx_in(&dir);
        answer_command(&ctx, "post_entrenchment", "yes", &mut Vec::<u8>::new()).unwrap();

        let mut out = Vec::new();
        reset_command(&ctx, ResetScope::Historical, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Cleared historical answers\n");

        let mut out = Vec::new();
        share_command(&ctx, false, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Answers: (none)"));
        assert!(text.contains("Historical: Inconclusive (need more data)"));
    }

    #[test]
    fn questions_table_lists_every_id() {
        let mut out = Vec::new();
        print_questions(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        for q in HISTORICAL_QUESTIONS.iter().chain(WOKE_QUESTIONS.iter()) {
            assert!(text.contains(q.id), "missing {}", q.id);
        }
    }
}
