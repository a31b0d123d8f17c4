//! Syntax highlighting integration for the editor surface.
//!
//! Bridges the ruleset tokenizer to iced's line-oriented
//! [`Highlighter`] trait: one classified span becomes one colored
//! format region. Colors come from the active theme preset so a theme
//! toggle restyles the code as well as the chrome.

use crate::theme::Theme;
use coderoom_core::ThemePreset;
use coderoom_syntax::{Ruleset, TokenKind};
use iced::advanced::text::highlighter::{Format, Highlighter};
use iced::{Color, Font};
use std::ops::Range;
use std::sync::Arc;

/// Settings for the highlighter.
#[derive(Debug, Clone)]
pub struct HighlightSettings {
    /// Ruleset registered for the selected language
    pub rules: Arc<Ruleset>,
    /// Active theme preset
    pub theme: ThemePreset,
}

impl PartialEq for HighlightSettings {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.rules, &other.rules) && self.theme == other.theme
    }
}

/// Format for highlighted text.
#[derive(Debug, Clone, Copy)]
pub struct HighlightFormat {
    pub color: Color,
}

impl HighlightFormat {
    pub fn to_format(self, _font: Font) -> Format<Font> {
        Format {
            color: Some(self.color),
            font: None,
        }
    }
}

fn token_color(kind: TokenKind, theme: &Theme) -> Color {
    let color = match kind {
        TokenKind::Keyword => theme.syntax.keyword,
        TokenKind::Str => theme.syntax.string,
        TokenKind::Number => theme.syntax.number,
        TokenKind::Bracket => theme.syntax.bracket,
        TokenKind::Comment => theme.syntax.comment,
        TokenKind::Text => theme.syntax.text,
    };
    color.to_iced()
}

/// Line highlighter over the session's registered ruleset.
pub struct EditorHighlighter {
    settings: HighlightSettings,
    theme: Theme,
    current_line_idx: usize,
}

impl Highlighter for EditorHighlighter {
    type Settings = HighlightSettings;
    type Highlight = HighlightFormat;
    type Iterator<'a> = std::vec::IntoIter<(Range<usize>, HighlightFormat)> where Self: 'a;

    fn new(settings: &Self::Settings) -> Self {
        Self {
            settings: settings.clone(),
            theme: Theme::preset(settings.theme),
            current_line_idx: 0,
        }
    }

    fn update(&mut self, new_settings: &Self::Settings) {
        if self.settings != *new_settings {
            self.settings = new_settings.clone();
            self.theme = Theme::preset(new_settings.theme);
            self.current_line_idx = 0;
        }
    }

    fn change_line(&mut self, line: usize) {
        if line < self.current_line_idx {
            self.current_line_idx = line;
        }
    }

    fn highlight_line(&mut self, line: &str) -> Self::Iterator<'_> {
        self.current_line_idx += 1;

        self.settings
            .rules
            .tokenize(line)
            .into_iter()
            .map(|span| {
                (
                    span.range,
                    HighlightFormat {
                        color: token_color(span.kind, &self.theme),
                    },
                )
            })
            .collect::<Vec<_>>()
            .into_iter()
    }

    fn current_line(&self) -> usize {
        self.current_line_idx
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coderoom_syntax::RulesetRegistry;

    fn settings(language: &str, theme: ThemePreset) -> HighlightSettings {
        let mut registry = RulesetRegistry::new();
        HighlightSettings {
            rules: registry.register(language),
            theme,
        }
    }

    #[test]
    fn test_highlight_line_emits_contiguous_formats() {
        let mut highlighter = EditorHighlighter::new(&settings("python", ThemePreset::Dark));
        let line = "def f(): # c";
        let formats: Vec<_> = highlighter.highlight_line(line).collect();

        assert!(!formats.is_empty());
        let mut covered = 0;
        for (range, _) in &formats {
            assert_eq!(range.start, covered);
            covered = range.end;
        }
        assert_eq!(covered, line.len());
    }

    #[test]
    fn test_keyword_color_tracks_theme() {
        let mut dark = EditorHighlighter::new(&settings("python", ThemePreset::Dark));
        let mut light = EditorHighlighter::new(&settings("python", ThemePreset::Light));

        let dark_first = dark.highlight_line("def").next().unwrap().1;
        let light_first = light.highlight_line("def").next().unwrap().1;
        assert_ne!(dark_first.color, light_first.color);
    }

    #[test]
    fn test_settings_equality_is_by_ruleset_identity() {
        let mut registry = RulesetRegistry::new();
        let a = HighlightSettings {
            rules: registry.register("python"),
            theme: ThemePreset::Dark,
        };
        let b = HighlightSettings {
            rules: registry.register("python"),
            theme: ThemePreset::Dark,
        };
        // Idempotent registration returns the same Arc, so settings match.
        assert_eq!(a, b);

        let c = HighlightSettings {
            rules: registry.register("cpp"),
            theme: ThemePreset::Dark,
        };
        assert_ne!(a, c);
    }
}
