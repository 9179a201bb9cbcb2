//! Present-day position scoring.
//!
//! Separates extractive benefit (property, speculation, resource rights) from
//! participation under survival constraints, then combines the resulting
//! benefit score with the respondent's transformation stance.

mod score;

pub use score::{benefit_score, is_motive_colonizer, raw_benefit_score, score_woke};

use crate::answer::{lenient_stance, tri_or_unknown, Motive, Stance, Tri};
use crate::tone::Tone;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies one of the five tri-state woke questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WokeField {
    WealthExtractive,
    RoleExtractive,
    Constrained,
    CompelledLineage,
    NoBenefitFromSettlers,
}

impl WokeField {
    pub const ALL: [WokeField; 5] = [
        Self::WealthExtractive,
        Self::RoleExtractive,
        Self::Constrained,
        Self::CompelledLineage,
        Self::NoBenefitFromSettlers,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::WealthExtractive => "wealth_extractive",
            Self::RoleExtractive => "role_extractive",
            Self::Constrained => "constrained",
            Self::CompelledLineage => "compelled_lineage",
            Self::NoBenefitFromSettlers => "no_benefit_from_settlers",
        }
    }

    pub fn parse(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.as_str() == id)
    }
}

/// Answers to the woke questions. Unset tri-state fields contribute nothing,
/// an unset motive contributes nothing, and an unset stance reads as neutral.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WokeAnswers {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wealth_extractive: Option<Tri>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role_extractive: Option<Tri>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constrained: Option<Tri>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compelled_lineage: Option<Tri>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub no_benefit_from_settlers: Option<Tri>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub migration_motive: Option<Motive>,
    #[serde(
        default,
        deserialize_with = "lenient_stance",
        skip_serializing_if = "Option::is_none"
    )]
    pub infra2: Option<Stance>,
}

impl WokeAnswers {
    fn slot_mut(&mut self, field: WokeField) -> &mut Option<Tri> {
        match field {
            WokeField::WealthExtractive => &mut self.wealth_extractive,
            WokeField::RoleExtractive => &mut self.role_extractive,
            WokeField::Constrained => &mut self.constrained,
            WokeField::CompelledLineage => &mut self.compelled_lineage,
            WokeField::NoBenefitFromSettlers => &mut self.no_benefit_from_settlers,
        }
    }

    pub fn get(&self, field: WokeField) -> Tri {
        tri_or_unknown(match field {
            WokeField::WealthExtractive => self.wealth_extractive,
            WokeField::RoleExtractive => self.role_extractive,
            WokeField::Constrained => self.constrained,
            WokeField::CompelledLineage => self.compelled_lineage,
            WokeField::NoBenefitFromSettlers => self.no_benefit_from_settlers,
        })
    }

    pub fn set(&mut self, field: WokeField, value: Tri) {
        *self.slot_mut(field) = Some(value);
    }

    pub fn with(mut self, field: WokeField, value: Tri) -> Self {
        self.set(field, value);
        self
    }

    pub fn motive(&self) -> Motive {
        self.migration_motive.unwrap_or_default()
    }

    pub fn stance(&self) -> Stance {
        self.infra2.unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// The four present-day categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WokeCode {
    Exploiter,
    Beneficiary,
    Compelled,
    Participant,
}

impl WokeCode {
    pub const ALL: [WokeCode; 4] = [
        Self::Exploiter,
        Self::Beneficiary,
        Self::Compelled,
        Self::Participant,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Exploiter => "EXPLOITER",
            Self::Beneficiary => "BENEFICIARY",
            Self::Compelled => "COMPELLED",
            Self::Participant => "PARTICIPANT",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Exploiter => "Present-Day Colonizer (Exploitative Actor)",
            Self::Beneficiary => "Inherited Beneficiary",
            Self::Compelled => "Compelled Participant / Survivor",
            Self::Participant => "Participant Under Constraint",
        }
    }

    pub const fn tone(self) -> Tone {
        match self {
            Self::Exploiter => Tone::Fuchsia,
            Self::Beneficiary => Tone::Indigo,
            Self::Compelled => Tone::Amber,
            Self::Participant => Tone::Slate,
        }
    }
}

impl fmt::Display for WokeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Warning signals computed alongside the numeric score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WokeFlags {
    /// Elective migration for gain combined with extractive wealth or role.
    pub motive_colonizer: bool,
    /// Beneficiary tier reached through motive alone, with no extractive
    /// wealth or role to corroborate it.
    pub motive_only_flag: bool,
}

/// A display-ready woke classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WokeResult {
    pub code: WokeCode,
    pub label: &'static str,
    pub explanation: &'static str,
    #[serde(rename = "color")]
    pub tone: Tone,
    /// Benefit/extraction score, clamped to `[-4, 6]`.
    #[serde(rename = "B")]
    pub benefit: i32,
    /// Transformation stance.
    #[serde(rename = "T")]
    pub transformation: u8,
    pub flags: WokeFlags,
}

impl WokeResult {
    /// Stance at or above which the result earns the ally badge.
    pub const ALLY_THRESHOLD: u8 = 3;

    /// Badges a front end shows next to the result.
    pub fn badges(&self) -> Vec<&'static str> {
        let mut badges = Vec::new();
        if self.transformation >= Self::ALLY_THRESHOLD {
            badges.push("Transformation Ally (Infra 2.0)");
        }
        if self.flags.motive_colonizer {
            badges.push("Red flag: elective migration for gain with extractive benefit");
        }
        if self.flags.motive_only_flag {
            badges.push("Motive-only: elevated by migration motive without extractive wealth or role");
        }
        badges
    }
}
