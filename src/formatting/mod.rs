//! Terminal styling: colour and emoji decisions plus rating colours.

use colored::*;
use std::env;
use std::io::IsTerminal;

use crate::scoring::{EmissionRating, ScoreBand};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Auto,   // Detect based on terminal
    Always, // Force colors on
    Never,  // Force colors off
}

impl ColorMode {
    pub fn should_use_color(&self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => detect_color_support(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmojiMode {
    Auto,
    Always,
    Never,
}

impl EmojiMode {
    pub fn should_use_emoji(&self) -> bool {
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
    pub emoji: EmojiMode,
}

impl Default for FormattingConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::Auto,
            emoji: EmojiMode::Auto,
        }
    }
}

impl FormattingConfig {
    pub fn from_env() -> Self {
        Self::from_vars(|name| env::var(name).ok())
    }

    /// Apply NO_COLOR, CLICOLOR and CLICOLOR_FORCE in that order.
    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        // https://no-color.org
        if var("NO_COLOR").is_some() {
            config.color = ColorMode::Never;
        }

        if var("CLICOLOR").as_deref() == Some("0") {
            config.color = ColorMode::Never;
        }

        if var("CLICOLOR_FORCE").as_deref() == Some("1") {
            config.color = ColorMode::Always;
        }

        config
    }

    /// ASCII-only, no colors, no emoji.
    pub fn plain() -> Self {
        Self {
            color: ColorMode::Never,
            emoji: EmojiMode::Never,
        }
    }

    pub fn formatter(self) -> Box<dyn OutputFormatter> {
        if self == Self::plain() {
            Box::new(PlainFormatter)
        } else {
            Box::new(ColoredFormatter::new(self))
        }
    }
}

pub trait OutputFormatter {
    fn success(&self, text: &str) -> String;
    fn warning(&self, text: &str) -> String;
    fn error(&self, text: &str) -> String;
    fn header(&self, text: &str) -> String;
    fn emoji(&self, emoji: &str, fallback: &str) -> String;
    fn bold(&self, text: &str) -> String;
    fn dim(&self, text: &str) -> String;

    /// Green for A and B, yellow for C to E, red for F and G.
    fn rating(&self, rating: EmissionRating) -> String {
        let letter = rating.letter().to_string();
        match rating {
            EmissionRating::A | EmissionRating::B => self.success(&letter),
            EmissionRating::C | EmissionRating::D | EmissionRating::E => self.warning(&letter),
            EmissionRating::F | EmissionRating::G => self.error(&letter),
        }
    }

    fn score(&self, score: u8, band: ScoreBand) -> String {
        let text = format!("{}/100 ({})", score, band);
        match band {
            ScoreBand::Excellent | ScoreBand::VeryGood | ScoreBand::Good => self.success(&text),
            ScoreBand::Average => self.warning(&text),
            ScoreBand::BelowAverage | ScoreBand::Poor => self.error(&text),
        }
    }
}

pub struct ColoredFormatter {
    config: FormattingConfig,
}

impl ColoredFormatter {
    pub fn new(config: FormattingConfig) -> Self {
        colored::control::set_override(config.color.should_use_color());
        Self { config }
    }

    fn paint(&self, text: &str, style: impl FnOnce(&str) -> ColoredString) -> String {
        if self.config.color.should_use_color() {
            style(text).to_string()
        } else {
            text.to_string()
        }
    }
}

impl OutputFormatter for ColoredFormatter {
    fn success(&self, text: &str) -> String {
        self.paint(text, |t| t.green())
    }

    fn warning(&self, text: &str) -> String {
        self.paint(text, |t| t.yellow())
    }

    fn error(&self, text: &str) -> String {
        self.paint(text, |t| t.red())
    }

    fn header(&self, text: &str) -> String {
        self.paint(text, |t| t.blue().bold())
    }

    fn emoji(&self, emoji: &str, fallback: &str) -> String {
        if self.config.emoji.should_use_emoji() {
            emoji.to_string()
        } else {
            fallback.to_string()
        }
    }

    fn bold(&self, text: &str) -> String {
        self.paint(text, |t| t.bold())
    }

    fn dim(&self, text: &str) -> String {
        self.paint(text, |t| t.dimmed())
    }
}

pub struct PlainFormatter;

impl OutputFormatter for PlainFormatter {
    fn success(&self, text: &str) -> String {
        text.to_string()
    }

    fn warning(&self, text: &str) -> String {
        text.to_string()
    }

    fn error(&self, text: &str) -> String {
        text.to_string()
    }

    fn header(&self, text: &str) -> String {
        text.to_string()
    }

    fn emoji(&self, _emoji: &str, fallback: &str) -> String {
        fallback.to_string()
    }

    fn bold(&self, text: &str) -> String {
        text.to_string()
    }

    fn dim(&self, text: &str) -> String {
        text.to_string()
    }
}

fn detect_color_support() -> bool {
    if env::var("TERM").is_ok_and(|term| term == "dumb") {
        return false;
    }
    std::io::stdout().is_terminal()
}
