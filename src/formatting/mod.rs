use crate::answer::Stance;
use crate::history::HistoricalResult;
use crate::tone::Tone;
use crate::woke::WokeResult;
use colored::*;
use std::env;
use std::fmt::Write as _;
use std::io::IsTerminal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Auto,   // Detect based on terminal
    Always, // Force colors on
    Never,  // Force colors off
}

impl ColorMode {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "auto" => Some(Self::Auto),
            "always" => Some(Self::Always),
            "never" => Some(Self::Never),
            _ => None,
        }
    }

    pub fn should_use_color(&self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => detect_color_support(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormattingConfig {
    pub color: ColorMode,
}

impl Default for FormattingConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::Auto,
        }
    }
}

impl FormattingConfig {
    pub fn new(color: ColorMode) -> Self {
        Self { color }
    }

    /// Starts from `base` and applies the NO_COLOR / CLICOLOR conventions.
    pub fn from_env(base: ColorMode) -> Self {
        let mut config = Self::new(base);

        // Check NO_COLOR environment variable (per no-color.org standard)
        if env::var("NO_COLOR").is_ok() {
            config.color = ColorMode::Never;
        }

        // Check CLICOLOR environment variable
        if let Ok(val) = env::var("CLICOLOR") {
            if val == "0" {
                config.color = ColorMode::Never;
            }
        }

        // Check CLICOLOR_FORCE environment variable
        if let Ok(val) = env::var("CLICOLOR_FORCE") {
            if val == "1" {
                config.color = ColorMode::Always;
            }
        }

        config
    }

    /// Create a plain output configuration (no colors)
    pub fn plain() -> Self {
        Self {
            color: ColorMode::Never,
        }
    }
}

/// Renders classification results as terminal text, tinted by their tone.
pub struct ResultFormatter {
    use_color: bool,
}

impl ResultFormatter {
    pub fn new(config: FormattingConfig) -> Self {
        let use_color = config.color.should_use_color();
        colored::control::set_override(use_color);
        Self { use_color }
    }

    fn tinted(&self, text: &str, tone: Tone) -> String {
        if self.use_color {
            text.color(tone.color()).bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn header(&self, text: &str) -> String {
        if self.use_color {
            text.blue().bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn dim(&self, text: &str) -> String {
        if self.use_color {
            text.dimmed().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn historical(&self, result: &HistoricalResult) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", self.header("Result (Historical)"));
        let _ = writeln!(
            out,
            "  {} [{}]",
            self.tinted(result.label, result.tone),
            result.code
        );
        let _ = writeln!(out, "  {}", result.explanation);
        let _ = writeln!(
            out,
            "  {}",
            self.dim("Scope: historical lineage and structural participation. This classifies position in systems; it isn't a moral score.")
        );
        out
    }

    pub fn woke(&self, result: &WokeResult) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", self.header("Result (Woke Edition)"));
        let _ = writeln!(
            out,
            "  {} [{}]",
            self.tinted(result.label, result.tone),
            result.code
        );
        let _ = writeln!(out, "  {}", result.explanation);
        let _ = writeln!(
            out,
            "  {}",
            self.dim(&format!(
                "Benefit B = {}, Transformation T = {} ({})",
                result.benefit,
                result.transformation,
                Stance::clamped(i64::from(result.transformation)).name()
            ))
        );
        for badge in result.badges() {
            let _ = writeln!(out, "  Badge: {}", badge);
        }
        out
    }
}

fn detect_color_support() -> bool {
    // Check if we're in a dumb terminal
    if let Ok(term) = env::var("TERM") {
        if term == "dumb" {
            return false;
        }
    }

    // Check if stdout is a TTY
    std::io::stdout().is_terminal()
}
