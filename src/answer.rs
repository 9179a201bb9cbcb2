//! Answer domains shared by both classifiers.
//!
//! Every value type here is a small closed enumeration. Text coming from the
//! outside world (CLI flags, stored JSON) is normalized into these domains at
//! the boundary: anything unrecognized becomes the "unknown"/default member
//! instead of an error, so the classifiers never see an out-of-domain value.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

/// A three-valued survey answer. An unset answer is treated as [`Tri::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Value", into = "&'static str")]
pub enum Tri {
    Yes,
    No,
    #[default]
    Unknown,
}

impl Tri {
    /// Enumeration order used by the decision-table export.
    pub const ALL: [Tri; 3] = [Tri::Yes, Tri::No, Tri::Unknown];

    /// Lenient parse: unrecognized text maps to [`Tri::Unknown`].
    ///
    /// ```
    /// use lineage_map::Tri;
    ///
    /// assert_eq!(Tri::parse("Yes"), Tri::Yes);
    /// assert_eq!(Tri::parse(" n "), Tri::No);
    /// assert_eq!(Tri::parse("maybe"), Tri::Unknown);
    /// ```
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "yes" | "y" | "true" => Self::Yes,
            "no" | "n" | "false" => Self::No,
            _ => Self::Unknown,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Yes => "yes",
            Self::No => "no",
            Self::Unknown => "unknown",
        }
    }

    #[inline]
    pub const fn is_yes(self) -> bool {
        matches!(self, Self::Yes)
    }
}

/// Any stored value that is not recognized answer text reads as unknown.
impl From<Value> for Tri {
    fn from(value: Value) -> Self {
        value.as_str().map_or(Self::Unknown, Self::parse)
    }
}

impl From<Tri> for &'static str {
    fn from(t: Tri) -> Self {
        t.as_str()
    }
}

impl fmt::Display for Tri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reads an optional answer with the "unset means unknown" rule applied.
#[inline]
pub(crate) fn tri_or_unknown(answer: Option<Tri>) -> Tri {
    answer.unwrap_or_default()
}

/// Why the respondent (or their parents) migrated, if they did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Value", into = "&'static str")]
pub enum Motive {
    /// Elective entry for financial advantage.
    Opportunity,
    Mixed,
    /// War, famine, persecution, climate.
    Survival,
    #[default]
    Unknown,
}

impl Motive {
    pub const ALL: [Motive; 4] = [
        Motive::Opportunity,
        Motive::Mixed,
        Motive::Survival,
        Motive::Unknown,
    ];

    /// Lenient parse: unrecognized text maps to [`Motive::Unknown`].
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "opportunity" => Self::Opportunity,
            "mixed" => Self::Mixed,
            "survival" => Self::Survival,
            _ => Self::Unknown,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Opportunity => "opportunity",
            Self::Mixed => "mixed",
            Self::Survival => "survival",
            Self::Unknown => "unknown",
        }
    }
}

impl From<Value> for Motive {
    fn from(value: Value) -> Self {
        value.as_str().map_or(Self::Unknown, Self::parse)
    }
}

impl From<Motive> for &'static str {
    fn from(m: Motive) -> Self {
        m.as_str()
    }
}

impl fmt::Display for Motive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stance on decoupling essential infrastructure from private land ownership,
/// on a 0 (oppose) to 4 (strongly support) scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Value", into = "u8")]
pub struct Stance(u8);

impl Stance {
    pub const MIN: u8 = 0;
    pub const MAX: u8 = 4;
    /// Value used when the question was never answered.
    pub const DEFAULT: Stance = Stance(2);

    const NAMES: [&'static str; 5] = ["Oppose", "Skeptical", "Neutral", "Support", "Strongly"];

    /// Builds a stance, clamping out-of-range input into `0..=4`.
    ///
    /// ```
    /// use lineage_map::Stance;
    ///
    /// assert_eq!(Stance::clamped(3).value(), 3);
    /// assert_eq!(Stance::clamped(-7).value(), 0);
    /// assert_eq!(Stance::clamped(12).value(), 4);
    /// ```
    pub fn clamped(value: i64) -> Self {
        Self(value.clamp(Self::MIN as i64, Self::MAX as i64) as u8)
    }

    /// Parses numeric text, rounding fractions before clamping. Anything that
    /// is not a finite number gives `None`.
    ///
    /// ```
    /// use lineage_map::Stance;
    ///
    /// assert_eq!(Stance::parse(" 3 ").map(Stance::value), Some(3));
    /// assert_eq!(Stance::parse("2.5").map(Stance::value), Some(3));
    /// assert_eq!(Stance::parse("lots"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        s.trim().parse::<f64>().ok().and_then(Self::from_f64)
    }

    fn from_f64(value: f64) -> Option<Self> {
        value
            .is_finite()
            .then(|| Self::clamped(value.round() as i64))
    }

    pub fn all() -> impl Iterator<Item = Stance> {
        (Self::MIN..=Self::MAX).map(Stance)
    }

    #[inline]
    pub const fn value(self) -> u8 {
        self.0
    }

    pub fn name(self) -> &'static str {
        Self::NAMES[self.0 as usize]
    }
}

impl Default for Stance {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<Value> for Stance {
    type Error = String;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let stance = match &value {
            Value::Number(n) => n.as_f64().and_then(Self::from_f64),
            Value::String(s) => Self::parse(s),
            _ => None,
        };
        stance.ok_or_else(|| format!("expected a stance between 0 and 4, got {value}"))
    }
}

/// Field deserializer for an optional stance: anything that does not read as
/// a number becomes `None` instead of failing the whole record.
pub(crate) fn lenient_stance<'de, D>(deserializer: D) -> Result<Option<Stance>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(Stance::try_from(value).ok())
}

impl From<Stance> for u8 {
    fn from(s: Stance) -> Self {
        s.0
    }
}

impl fmt::Display for Stance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
