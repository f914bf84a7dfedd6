//! Core types shared across the myeongham crates.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

mod rng;

pub use rng::{Rand, SplitMix64};

/// Accent color theme for text and borders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColorTheme {
    #[default]
    Magenta,
    Cyan,
    Blue,
    Green,
    Yellow,
}

impl ColorTheme {
    /// Cycle to the next accent theme.
    pub fn next(self) -> Self {
        match self {
            ColorTheme::Magenta => ColorTheme::Cyan,
            ColorTheme::Cyan => ColorTheme::Blue,
            ColorTheme::Blue => ColorTheme::Green,
            ColorTheme::Green => ColorTheme::Yellow,
            ColorTheme::Yellow => ColorTheme::Magenta,
        }
    }

    /// Convert the theme to a Ratatui color.
    pub fn color(self) -> Color {
        match self {
            ColorTheme::Magenta => Color::Magenta,
            ColorTheme::Cyan => Color::Cyan,
            ColorTheme::Blue => Color::Blue,
            ColorTheme::Green => Color::Green,
            ColorTheme::Yellow => Color::Yellow,
        }
    }
}

/// Ambient background mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BackgroundMode {
    /// Drifting polygon field.
    #[default]
    Drift,
    /// No background.
    Off,
}

impl BackgroundMode {
    /// Toggle the background on or off.
    pub fn toggle(self) -> Self {
        match self {
            BackgroundMode::Drift => BackgroundMode::Off,
            BackgroundMode::Off => BackgroundMode::Drift,
        }
    }
}
