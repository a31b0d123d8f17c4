//! Theme presets for the editor chrome.
//!
//! Exactly two presets exist — dark and light — selected by the session's
//! [`ThemePreset`] tag. Toggling restyles the toolbar, editor surface,
//! output panel, and status bar from the active palette; nothing is
//! persisted across runs.

use coderoom_core::ThemePreset;
use serde::{Deserialize, Serialize};

/// Color representation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Converts to iced Color.
    pub fn to_iced(&self) -> iced::Color {
        iced::Color::from_rgba(self.r, self.g, self.b, self.a)
    }
}

/// Editor theme.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    /// Theme name
    pub name: String,

    /// Is this a dark theme?
    pub is_dark: bool,

    /// Background colors
    pub background: BackgroundColors,

    /// Foreground colors
    pub foreground: ForegroundColors,

    /// UI element colors
    pub ui: UiColors,

    /// Syntax highlighting colors
    pub syntax: SyntaxColors,
}

/// Background colors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackgroundColors {
    /// Editor surface
    pub primary: Color,
    /// Toolbar, output panel, status bar
    pub secondary: Color,
    /// Buttons and inputs at rest
    pub tertiary: Color,
    /// Hovered buttons
    pub hover: Color,
    /// Text selection
    pub selection: Color,
}

/// Foreground (text) colors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForegroundColors {
    pub primary: Color,
    pub secondary: Color,
    pub muted: Color,
    pub accent: Color,
}

/// UI element colors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiColors {
    pub border: Color,
    pub run_button: Color,
    pub assist_button: Color,
}

/// Syntax highlighting colors, one per token category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyntaxColors {
    pub keyword: Color,
    pub string: Color,
    pub number: Color,
    pub bracket: Color,
    pub comment: Color,
    pub text: Color,
}

impl Theme {
    /// The palette for a preset.
    pub fn preset(preset: ThemePreset) -> Self {
        match preset {
            ThemePreset::Dark => Self::dark(),
            ThemePreset::Light => Self::light(),
        }
    }

    /// Creates the dark preset.
    pub fn dark() -> Self {
        Self {
            name: "Coderoom Dark".to_string(),
            is_dark: true,
            background: BackgroundColors {
                primary: Color::rgb(0.07, 0.07, 0.07),
                secondary: Color::rgb(0.12, 0.12, 0.12),
                tertiary: Color::rgb(0.18, 0.18, 0.20),
                hover: Color::rgb(0.24, 0.24, 0.26),
                selection: Color::rgba(0.25, 0.46, 0.85, 0.45),
            },
            foreground: ForegroundColors {
                primary: Color::rgb(0.86, 0.86, 0.86),
                secondary: Color::rgb(0.70, 0.70, 0.70),
                muted: Color::rgb(0.48, 0.48, 0.50),
                accent: Color::rgb(0.36, 0.54, 0.90),
            },
            ui: UiColors {
                border: Color::rgb(0.25, 0.25, 0.28),
                run_button: Color::rgb(1.0, 0.76, 0.03),
                assist_button: Color::rgb(0.0, 0.82, 0.70),
            },
            syntax: SyntaxColors {
                keyword: Color::rgb(0.86, 0.55, 0.76),
                string: Color::rgb(0.72, 0.84, 0.55),
                number: Color::rgb(0.82, 0.68, 0.55),
                bracket: Color::rgb(0.80, 0.80, 0.90),
                comment: Color::rgb(0.50, 0.55, 0.55),
                text: Color::rgb(0.90, 0.90, 0.90),
            },
        }
    }

    /// Creates the light preset.
    pub fn light() -> Self {
        Self {
            name: "Coderoom Light".to_string(),
            is_dark: false,
            background: BackgroundColors {
                primary: Color::rgb(1.0, 1.0, 1.0),
                secondary: Color::rgb(0.94, 0.94, 0.94),
                tertiary: Color::rgb(0.88, 0.88, 0.88),
                hover: Color::rgb(0.82, 0.82, 0.82),
                selection: Color::rgba(0.25, 0.46, 0.85, 0.25),
            },
            foreground: ForegroundColors {
                primary: Color::rgb(0.13, 0.13, 0.13),
                secondary: Color::rgb(0.27, 0.27, 0.27),
                muted: Color::rgb(0.50, 0.50, 0.50),
                accent: Color::rgb(0.20, 0.40, 0.80),
            },
            ui: UiColors {
                border: Color::rgb(0.80, 0.80, 0.80),
                run_button: Color::rgb(1.0, 0.76, 0.03),
                assist_button: Color::rgb(0.0, 0.82, 0.70),
            },
            syntax: SyntaxColors {
                keyword: Color::rgb(0.60, 0.30, 0.60),
                string: Color::rgb(0.30, 0.60, 0.30),
                number: Color::rgb(0.70, 0.40, 0.20),
                bracket: Color::rgb(0.30, 0.30, 0.40),
                comment: Color::rgb(0.50, 0.50, 0.50),
                text: Color::rgb(0.13, 0.13, 0.13),
            },
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}
