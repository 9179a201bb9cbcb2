//! Historical classification of a lineage's relationship to a colonial project.
//!
//! Six tri-state answers are mapped to one of eight [`HistoricalCode`]s by an
//! ordered precedence chain (see [`classify_historical`]).

mod classify;

pub use classify::{classify_historical, historical_code};

use crate::answer::{tri_or_unknown, Tri};
use crate::tone::Tone;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies one of the six historical questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HistoricalField {
    IndigenousLineage,
    EnslavedOrForced,
    ArrivedDuringColonial,
    DirectParticipation,
    PostEntrenchment,
    OriginColonizedAfterLeft,
}

impl HistoricalField {
    /// Question order, which is also the export column order.
    pub const ALL: [HistoricalField; 6] = [
        Self::IndigenousLineage,
        Self::EnslavedOrForced,
        Self::ArrivedDuringColonial,
        Self::DirectParticipation,
        Self::PostEntrenchment,
        Self::OriginColonizedAfterLeft,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::IndigenousLineage => "indigenous_lineage",
            Self::EnslavedOrForced => "enslaved_or_forced",
            Self::ArrivedDuringColonial => "arrived_during_colonial",
            Self::DirectParticipation => "direct_participation",
            Self::PostEntrenchment => "post_entrenchment",
            Self::OriginColonizedAfterLeft => "origin_colonized_after_left",
        }
    }

    pub fn parse(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.as_str() == id)
    }
}

/// Answers to the historical questions. Unset fields count as unknown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HistoricalAnswers {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub indigenous_lineage: Option<Tri>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enslaved_or_forced: Option<Tri>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arrived_during_colonial: Option<Tri>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direct_participation: Option<Tri>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post_entrenchment: Option<Tri>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin_colonized_after_left: Option<Tri>,
}

impl HistoricalAnswers {
    fn slot(&self, field: HistoricalField) -> Option<Tri> {
        match field {
            HistoricalField::IndigenousLineage => self.indigenous_lineage,
            HistoricalField::EnslavedOrForced => self.enslaved_or_forced,
            HistoricalField::ArrivedDuringColonial => self.arrived_during_colonial,
            HistoricalField::DirectParticipation => self.direct_participation,
            HistoricalField::PostEntrenchment => self.post_entrenchment,
            HistoricalField::OriginColonizedAfterLeft => self.origin_colonized_after_left,
        }
    }

    fn slot_mut(&mut self, field: HistoricalField) -> &mut Option<Tri> {
        match field {
            HistoricalField::IndigenousLineage => &mut self.indigenous_lineage,
            HistoricalField::EnslavedOrForced => &mut self.enslaved_or_forced,
            HistoricalField::ArrivedDuringColonial => &mut self.arrived_during_colonial,
            HistoricalField::DirectParticipation => &mut self.direct_participation,
            HistoricalField::PostEntrenchment => &mut self.post_entrenchment,
            HistoricalField::OriginColonizedAfterLeft => &mut self.origin_colonized_after_left,
        }
    }

    /// Effective answer, with unset read as [`Tri::Unknown`].
    pub fn get(&self, field: HistoricalField) -> Tri {
        tri_or_unknown(self.slot(field))
    }

    /// The raw answer, `None` when the question was never answered.
    pub fn answered(&self, field: HistoricalField) -> Option<Tri> {
        self.slot(field)
    }

    pub fn set(&mut self, field: HistoricalField, value: Tri) {
        *self.slot_mut(field) = Some(value);
    }

    pub fn with(mut self, field: HistoricalField, value: Tri) -> Self {
        self.set(field, value);
        self
    }

    pub fn clear(&mut self, field: HistoricalField) {
        *self.slot_mut(field) = None;
    }

    pub fn is_empty(&self) -> bool {
        HistoricalField::ALL
            .iter()
            .all(|f| self.slot(*f).is_none())
    }
}

/// The eight historical categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HistoricalCode {
    Indigenous,
    Forced,
    ColonizerFoundational,
    ColonizerArrival,
    ColonizerParticipatory,
    ImmigrantEntrenched,
    ImmigrantOriginLater,
    Inconclusive,
}

impl HistoricalCode {
    pub const ALL: [HistoricalCode; 8] = [
        Self::Indigenous,
        Self::Forced,
        Self::ColonizerFoundational,
        Self::ColonizerArrival,
        Self::ColonizerParticipatory,
        Self::ImmigrantEntrenched,
        Self::ImmigrantOriginLater,
        Self::Inconclusive,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Indigenous => "INDIGENOUS",
            Self::Forced => "FORCED",
            Self::ColonizerFoundational => "COLONIZER_FOUNDATIONAL",
            Self::ColonizerArrival => "COLONIZER_ARRIVAL",
            Self::ColonizerParticipatory => "COLONIZER_PARTICIPATORY",
            Self::ImmigrantEntrenched => "IMMIGRANT_ENTRENCHED",
            Self::ImmigrantOriginLater => "IMMIGRANT_ORIGIN_LATER",
            Self::Inconclusive => "INCONCLUSIVE",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Indigenous => "Indigenous (sovereignty-centered)",
            Self::Forced => "Enslaved / Forced Migration (distinct category)",
            Self::ColonizerFoundational => "Colonizer (foundational/participatory)",
            Self::ColonizerArrival => "Colonizer (arrival during colonial period)",
            Self::ColonizerParticipatory => "Colonizer (participatory without arrival timing)",
            Self::ImmigrantEntrenched => "Immigrant (to a settler-colonial state)",
            Self::ImmigrantOriginLater => "Immigrant (origin colonized elsewhere later)",
            Self::Inconclusive => "Inconclusive (need more data)",
        }
    }

    pub const fn explanation(self) -> &'static str {
        match self {
            Self::Indigenous => "Belongs to an Indigenous nation; analysis centers sovereignty and ongoing colonial impacts.",
            Self::Forced => "Lineage transported without agency; not colonizer or immigrant. Historical harms differ categorically.",
            Self::ColonizerFoundational => "Arrival during the colonial project plus material enablement/enforcement (or plausible benefit).",
            Self::ColonizerArrival => "Arrival occurred while colonization was ongoing; part of settler expansion even without office.",
            Self::ColonizerParticipatory => "Direct material enablement/enforcement counts even if arrival occurred later or timing is unknown.",
            Self::ImmigrantEntrenched => "Arrival after colonial structures were entrenched or post-independence; not founder/enforcer.",
            Self::ImmigrantOriginLater => "Origin colonized others only after ancestors left; lineage not implicated.",
            Self::Inconclusive => "Add dates/locations, legal status, roles. Colonial period boundaries vary by region.",
        }
    }

    pub const fn tone(self) -> Tone {
        match self {
            Self::Indigenous => Tone::Sky,
            Self::Forced => Tone::Amber,
            Self::ColonizerFoundational => Tone::Red,
            Self::ColonizerArrival | Self::ColonizerParticipatory => Tone::Rose,
            Self::ImmigrantEntrenched => Tone::Green,
            Self::ImmigrantOriginLater => Tone::Emerald,
            Self::Inconclusive => Tone::Slate,
        }
    }
}

impl fmt::Display for HistoricalCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A display-ready historical classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HistoricalResult {
    pub code: HistoricalCode,
    pub label: &'static str,
    pub explanation: &'static str,
    #[serde(rename = "color")]
    pub tone: Tone,
}

impl From<HistoricalCode> for HistoricalResult {
    fn from(code: HistoricalCode) -> Self {
        Self {
            code,
            label: code.label(),
            explanation: code.explanation(),
            tone: code.tone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_ids_round_trip() {
        for field in HistoricalField::ALL {
            assert_eq!(HistoricalField::parse(field.as_str()), Some(field));
        }
        assert_eq!(HistoricalField::parse("infra2"), None);
    }

    #[test]
    fn set_get_and_clear() {
        let mut answers = HistoricalAnswers::default();
        assert!(answers.is_empty());
        assert_eq!(answers.get(HistoricalField::PostEntrenchment), Tri::Unknown);

        answers.set(HistoricalField::PostEntrenchment, Tri::Yes);
        assert_eq!(answers.post_entrenchment, Some(Tri::Yes));
        assert!(!answers.is_empty());

        answers.clear(HistoricalField::PostEntrenchment);
        assert_eq!(answers.answered(HistoricalField::PostEntrenchment), None);
        assert!(answers.is_empty());
    }

    #[test]
    fn unset_fields_are_omitted_from_json() {
        let answers = HistoricalAnswers::default().with(HistoricalField::EnslavedOrForced, Tri::No);
        assert_eq!(
            serde_json::to_string(&answers).unwrap(),
            r#"{"enslaved_or_forced":"no"}"#
        );
    }

    #[test]
    fn result_serializes_code_in_screaming_case() {
        let json = serde_json::to_value(HistoricalResult::from(HistoricalCode::ColonizerArrival)).unwrap();
        assert_eq!(json["code"], "COLONIZER_ARRIVAL");
        assert_eq!(json["color"], "rose");
    }
}
