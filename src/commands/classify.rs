use anyhow::Result;
use std::io::Write;

use super::CommandContext;
use crate::answer::{Motive, Stance, Tri};
use crate::cli::OutputFormat;
use crate::history::{classify_historical, HistoricalAnswers};
use crate::woke::{score_woke, WokeAnswers};

/// Raw historical flags as typed on the command line.
#[derive(Debug, Clone, Default)]
pub struct HistoricalInput {
    pub indigenous: Option<String>,
    pub forced: Option<String>,
    pub arrived: Option<String>,
    pub participation: Option<String>,
    pub post_entrenchment: Option<String>,
    pub origin_after: Option<String>,
}

fn tri(value: &Option<String>) -> Option<Tri> {
    value.as_deref().map(Tri::parse)
}

impl HistoricalInput {
    /// Normalizes every flag; anything unrecognized becomes unknown.
    pub fn to_answers(&self) -> HistoricalAnswers {
        HistoricalAnswers {
            indigenous_lineage: tri(&self.indigenous),
            enslaved_or_forced: tri(&self.forced),
            arrived_during_colonial: tri(&self.arrived),
            direct_participation: tri(&self.participation),
            post_entrenchment: tri(&self.post_entrenchment),
            origin_colonized_after_left: tri(&self.origin_after),
        }
    }
}

/// Raw woke flags as typed on the command line.
#[derive(Debug, Clone, Default)]
pub struct WokeInput {
    pub wealth: Option<String>,
    pub role: Option<String>,
    pub constrained: Option<String>,
    pub compelled: Option<String>,
    pub no_benefit: Option<String>,
    pub motive: Option<String>,
    pub infra: Option<i64>,
}

impl WokeInput {
    /// Normalizes every flag; the stance is clamped to `0..=4`.
    pub fn to_answers(&self) -> WokeAnswers {
        WokeAnswers {
            wealth_extractive: tri(&self.wealth),
            role_extractive: tri(&self.role),
            constrained: tri(&self.constrained),
            compelled_lineage: tri(&self.compelled),
            no_benefit_from_settlers: tri(&self.no_benefit),
            migration_motive: self.motive.as_deref().map(Motive::parse),
            infra2: self.infra.map(Stance::clamped),
        }
    }
}

pub fn classify_command<W: Write>(
    ctx: &CommandContext,
    input: &HistoricalInput,
    format: OutputFormat,
    out: &mut W,
) -> Result<()> {
    let answers = input.to_answers();
    let result = classify_historical(&answers);
    log::debug!("Classified {:?} as {}", answers, result.code);

    match format {
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(&result)?)?,
        OutputFormat::Terminal => write!(out, "{}", ctx.formatter().historical(&result))?,
    }
    Ok(())
}

pub fn score_command<W: Write>(
    ctx: &CommandContext,
    input: &WokeInput,
    format: OutputFormat,
    out: &mut W,
) -> Result<()> {
    let answers = input.to_answers();
    let result = score_woke(&answers);
    log::debug!(
        "Scored {:?} as {} (B={}, T={})",
        answers,
        result.code,
        result.benefit,
        result.transformation
    );

    match format {
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(&result)?)?,
        OutputFormat::Terminal => write!(out, "{}", ctx.formatter().woke(&result))?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LineageConfig;

    fn ctx() -> CommandContext {
        CommandContext::resolve(LineageConfig::default(), None, true)
    }

    #[test]
    fn flags_are_normalized() {
        let input = HistoricalInput {
            indigenous: Some("NO".into()),
            arrived: Some("y".into()),
            participation: Some("dunno".into()),
            ..Default::default()
        };
        let answers = input.to_answers();
        assert_eq!(answers.indigenous_lineage, Some(Tri::No));
        assert_eq!(answers.arrived_during_colonial, Some(Tri::Yes));
        assert_eq!(answers.direct_participation, Some(Tri::Unknown));
        assert_eq!(answers.enslaved_or_forced, None);

        let woke = WokeInput {
            motive: Some("adventure".into()),
            infra: Some(-5),
            ..Default::default()
        }
        .to_answers();
        assert_eq!(woke.migration_motive, Some(Motive::Unknown));
        assert_eq!(woke.infra2, Some(Stance::clamped(0)));
    }

    #[test]
    fn classify_json_output() {
        let input = HistoricalInput {
            arrived: Some("yes".into()),
            participation: Some("no".into()),
            ..Default::default()
        };
        let mut out = Vec::new();
        classify_command(&ctx(), &input, OutputFormat::Json, &mut out).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["code"], "COLONIZER_ARRIVAL");
    }

    #[test]
    fn score_terminal_output() {
        let input = WokeInput {
            constrained: Some("yes".into()),
            compelled: Some("yes".into()),
            ..Default::default()
        };
        let mut out = Vec::new();
        score_command(&ctx(), &input, OutputFormat::Terminal, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("[COMPELLED]"));
        assert!(text.contains("Benefit B = -4, Transformation T = 2 (Neutral)"));
    }
}
