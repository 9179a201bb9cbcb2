use colored::Color;
use serde::Serialize;

/// Display hint attached to every classification result.
///
/// The tone carries no meaning for the classification itself; it only tells
/// a front end how to tint the result card. It maps onto a terminal color and
/// onto the utility classes the web form used.
///
/// # Examples
///
/// ```
/// use lineage_map::Tone;
/// use colored::Color;
///
/// assert_eq!(Tone::Red.color(), Color::Red);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Sky,
    Amber,
    Red,
    Rose,
    Green,
    Emerald,
    Slate,
    Fuchsia,
    Indigo,
}

impl Tone {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sky => "sky",
            Self::Amber => "amber",
            Self::Red => "red",
            Self::Rose => "rose",
            Self::Green => "green",
            Self::Emerald => "emerald",
            Self::Slate => "slate",
            Self::Fuchsia => "fuchsia",
            Self::Indigo => "indigo",
        }
    }

    /// Returns the terminal color for this tone.
    pub const fn color(self) -> Color {
        match self {
            Self::Sky => Color::BrightCyan,
            Self::Amber => Color::Yellow,
            Self::Red => Color::Red,
            Self::Rose => Color::BrightRed,
            Self::Green => Color::Green,
            Self::Emerald => Color::BrightGreen,
            Self::Slate => Color::White,
            Self::Fuchsia => Color::Magenta,
            Self::Indigo => Color::Blue,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_tone_has_a_distinct_color() {
        let tones = [
            Tone::Sky,
            Tone::Amber,
            Tone::Red,
            Tone::Rose,
            Tone::Green,
            Tone::Emerald,
            Tone::Slate,
            Tone::Fuchsia,
            Tone::Indigo,
        ];
        for (i, a) in tones.iter().enumerate() {
            for b in &tones[i + 1..] {
                assert_ne!(a.color(), b.color(), "{} and {}", a.as_str(), b.as_str());
            }
        }
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Tone::Fuchsia).unwrap(), "\"fuchsia\"");
    }
}
