//! Exhaustive decision tables.
//!
//! Both input domains are small enough to enumerate completely: 3^6 = 729
//! historical records and 3^5 x 4 x 5 = 4860 woke records. Rows are produced
//! lazily in a fixed order (tri values `yes, no, unknown`; motives
//! `opportunity, mixed, survival, unknown`; stance `0..=4`), nested in column
//! order so the first column varies slowest.

mod writers;

pub use writers::{DelimitedWriter, ExportFormat, JsonWriter, TableWriter};

use crate::answer::{Motive, Stance, Tri};
use crate::history::{classify_historical, HistoricalAnswers, HistoricalField, HistoricalResult};
use crate::woke::{score_woke, WokeAnswers, WokeField, WokeResult};
use std::collections::BTreeMap;

pub const HISTORICAL_HEADER: [&str; 8] = [
    "indigenous",
    "forced",
    "arrived",
    "participation",
    "post_entrench",
    "origin_after",
    "code",
    "label",
];

pub const WOKE_HEADER: [&str; 11] = [
    "wealth",
    "role",
    "constrained",
    "compelled",
    "noBenefit",
    "motive",
    "infra",
    "code",
    "B",
    "T",
    "flags",
];

const WOKE_RADICES: [usize; 7] = [3, 3, 3, 3, 3, 4, 5];

/// Splits `index` into digits of the given mixed radix, most significant first.
fn mixed_radix<const N: usize>(mut index: usize, radices: &[usize; N]) -> [usize; N] {
    let mut digits = [0; N];
    for (digit, radix) in digits.iter_mut().zip(radices.iter()).rev() {
        *digit = index % radix;
        index /= radix;
    }
    digits
}

/// Number of records in the historical domain.
pub fn historical_domain_size() -> usize {
    Tri::ALL.len().pow(HistoricalField::ALL.len() as u32)
}

/// Number of records in the woke domain.
pub fn woke_domain_size() -> usize {
    WOKE_RADICES.iter().product()
}

/// Every historical answer record, all fields answered.
pub fn historical_domain() -> impl Iterator<Item = HistoricalAnswers> {
    (0..historical_domain_size()).map(|index| {
        let digits = mixed_radix(index, &[3; 6]);
        HistoricalField::ALL
            .into_iter()
            .zip(digits)
            .fold(HistoricalAnswers::default(), |answers, (field, digit)| {
                answers.with(field, Tri::ALL[digit])
            })
    })
}

/// Every woke answer record, all fields answered.
pub fn woke_domain() -> impl Iterator<Item = WokeAnswers> {
    (0..woke_domain_size()).map(|index| {
        let digits = mixed_radix(index, &WOKE_RADICES);
        let answers = WokeField::ALL
            .into_iter()
            .zip(digits)
            .fold(WokeAnswers::default(), |answers, (field, digit)| {
                answers.with(field, Tri::ALL[digit])
            });
        WokeAnswers {
            migration_motive: Some(Motive::ALL[digits[5]]),
            infra2: Some(Stance::clamped(digits[6] as i64)),
            ..answers
        }
    })
}

/// One line of the historical decision table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoricalRow {
    pub answers: HistoricalAnswers,
    pub result: HistoricalResult,
}

impl HistoricalRow {
    /// Cells in [`HISTORICAL_HEADER`] order.
    pub fn cells(&self) -> Vec<String> {
        HistoricalField::ALL
            .iter()
            .map(|f| self.answers.get(*f).to_string())
            .chain([
                self.result.code.to_string(),
                self.result.label.to_string(),
            ])
            .collect()
    }
}

/// One line of the woke decision table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WokeRow {
    pub answers: WokeAnswers,
    pub result: WokeResult,
}

impl WokeRow {
    /// Cells in [`WOKE_HEADER`] order; flags are rendered as compact JSON.
    pub fn cells(&self) -> serde_json::Result<Vec<String>> {
        let flags = serde_json::to_string(&self.result.flags)?;
        Ok(WokeField::ALL
            .iter()
            .map(|f| self.answers.get(*f).to_string())
            .chain([
                self.answers.motive().to_string(),
                self.answers.stance().to_string(),
                self.result.code.to_string(),
                self.result.benefit.to_string(),
                self.result.transformation.to_string(),
                flags,
            ])
            .collect())
    }
}

pub fn historical_table() -> impl Iterator<Item = HistoricalRow> {
    historical_domain().map(|answers| HistoricalRow {
        answers,
        result: classify_historical(&answers),
    })
}

pub fn woke_table() -> impl Iterator<Item = WokeRow> {
    woke_domain().map(|answers| WokeRow {
        answers,
        result: score_woke(&answers),
    })
}

/// How often each code occurs across a full enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Distribution {
    pub total: usize,
    pub counts: BTreeMap<&'static str, usize>,
}

impl Distribution {
    /// Starts every known code at zero so unreachable codes still show up.
    fn with_codes(codes: impl IntoIterator<Item = &'static str>) -> Self {
        Self {
            total: 0,
            counts: codes.into_iter().map(|c| (c, 0)).collect(),
        }
    }

    fn record(&mut self, code: &'static str) {
        self.total += 1;
        *self.counts.entry(code).or_insert(0) += 1;
    }

    pub fn count(&self, code: &str) -> usize {
        self.counts.get(code).copied().unwrap_or(0)
    }

    /// Codes that never occurred.
    pub fn unreached(&self) -> Vec<&'static str> {
        self.counts
            .iter()
            .filter(|(_, n)| **n == 0)
            .map(|(code, _)| *code)
            .collect()
    }
}

pub fn historical_distribution() -> Distribution {
    let mut dist = Distribution::with_codes(
        crate::history::HistoricalCode::ALL.iter().map(|c| c.as_str()),
    );
    for row in historical_table() {
        dist.record(row.result.code.as_str());
    }
    dist
}

pub fn woke_distribution() -> Distribution {
    let mut dist =
        Distribution::with_codes(crate::woke::WokeCode::ALL.iter().map(|c| c.as_str()));
    for row in woke_table() {
        dist.record(row.result.code.as_str());
    }
    dist
}
