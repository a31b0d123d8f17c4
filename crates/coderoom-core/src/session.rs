//! Editor session state.
//!
//! ## Learning: Making Invalid States Unrepresentable
//!
//! The original sync scheme this client implements is
//! last-writer-broadcast: whoever's update arrives last wins, detected by
//! a full string compare. The subtle part is echo prevention — an update
//! we just received must not be re-broadcast as if we typed it. Instead
//! of a mutable "suppress the next send" flag, every mutation enters the
//! session through one of two methods, so its origin is part of the call:
//!
//! - [`Session::edit_local`] — a keystroke; returns the update to
//!   broadcast (if the text actually changed).
//! - [`Session::apply_remote`] — an inbound envelope; never produces an
//!   outbound update.
//!
//! There is no conflict resolution and no ordering metadata beyond what
//! the transport delivers.

use crate::identity::SessionIdentity;
use crate::language::Language;
use serde::{Deserialize, Serialize};

/// Initial buffer contents for a fresh session.
pub const DEFAULT_TEXT: &str = "// Start coding here...";

/// Last-editor label before any remote edit arrives.
pub const NO_EDITOR_YET: &str = "No one yet";

/// The unit exchanged with peers: who edited, and the full new text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteUpdate {
    /// Display name of the author.
    pub author: String,
    /// The complete document text after the edit.
    pub content: String,
}

/// One of the two fixed visual presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreset {
    #[default]
    Dark,
    Light,
}

impl ThemePreset {
    /// The other preset.
    pub fn toggled(self) -> Self {
        match self {
            ThemePreset::Dark => ThemePreset::Light,
            ThemePreset::Light => ThemePreset::Dark,
        }
    }

    /// Human-readable name.
    pub fn label(&self) -> &'static str {
        match self {
            ThemePreset::Dark => "Dark",
            ThemePreset::Light => "Light",
        }
    }
}

/// The state of one editor session: the document, its display tags, and
/// the identity edits are attributed to.
#[derive(Debug, Clone)]
pub struct Session {
    identity: SessionIdentity,
    text: String,
    language: Language,
    theme: ThemePreset,
    last_editor: String,
}

impl Session {
    /// Creates a session with the default document.
    pub fn new(identity: SessionIdentity) -> Self {
        Self {
            identity,
            text: DEFAULT_TEXT.to_string(),
            language: Language::default(),
            theme: ThemePreset::default(),
            last_editor: NO_EDITOR_YET.to_string(),
        }
    }

    /// Creates a session with explicit language and theme defaults.
    pub fn with_defaults(
        identity: SessionIdentity,
        language: Language,
        theme: ThemePreset,
    ) -> Self {
        Self {
            language,
            theme,
            ..Self::new(identity)
        }
    }

    /// The identity this session attributes its edits to.
    pub fn identity(&self) -> &SessionIdentity {
        &self.identity
    }

    /// The current document text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The selected language.
    pub fn language(&self) -> Language {
        self.language
    }

    /// The selected theme preset.
    pub fn theme(&self) -> ThemePreset {
        self.theme
    }

    /// Display name of whoever last edited remotely, or [`NO_EDITOR_YET`].
    pub fn last_editor(&self) -> &str {
        &self.last_editor
    }

    /// Records a local edit.
    ///
    /// Returns the update to broadcast, or `None` when the text is
    /// unchanged (cursor movement and selection produce no traffic).
    pub fn edit_local(&mut self, text: String) -> Option<RemoteUpdate> {
        if text == self.text {
            return None;
        }
        self.text = text;
        Some(RemoteUpdate {
            author: self.identity.name().to_string(),
            content: self.text.clone(),
        })
    }

    /// Applies an inbound update from a peer.
    ///
    /// Returns `true` when the update changed the document. An update
    /// whose content equals the current buffer mutates nothing — not
    /// even the last-editor label.
    pub fn apply_remote(&mut self, update: RemoteUpdate) -> bool {
        if update.content == self.text {
            return false;
        }
        self.text = update.content;
        self.last_editor = update.author;
        true
    }

    /// Selects a language.
    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    /// Flips between the two theme presets, returning the new one.
    pub fn toggle_theme(&mut self) -> ThemePreset {
        self.theme = self.theme.toggled();
        self.theme
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session::new(SessionIdentity::new("Alice"))
    }

    #[test]
    fn test_fresh_session_defaults() {
        let s = session();
        assert_eq!(s.text(), DEFAULT_TEXT);
        assert_eq!(s.language(), Language::Python);
        assert_eq!(s.theme(), ThemePreset::Dark);
        assert_eq!(s.last_editor(), NO_EDITOR_YET);
    }

    #[test]
    fn test_local_edit_produces_one_update() {
        let mut s = session();
        let update = s.edit_local("print(1)".to_string()).unwrap();
        assert_eq!(update.author, "Alice");
        assert_eq!(update.content, "print(1)");
        assert_eq!(s.text(), "print(1)");
    }

    #[test]
    fn test_unchanged_local_edit_is_quiet() {
        let mut s = session();
        s.edit_local("print(1)".to_string()).unwrap();
        assert!(s.edit_local("print(1)".to_string()).is_none());
    }

    #[test]
    fn test_remote_update_applies_and_attributes() {
        let mut s = session();
        s.edit_local("print(1)".to_string());

        let changed = s.apply_remote(RemoteUpdate {
            author: "Bob".to_string(),
            content: "print(2)".to_string(),
        });

        assert!(changed);
        assert_eq!(s.text(), "print(2)");
        assert_eq!(s.last_editor(), "Bob");
    }

    #[test]
    fn test_equal_remote_update_mutates_nothing() {
        let mut s = session();
        s.edit_local("print(1)".to_string());

        let changed = s.apply_remote(RemoteUpdate {
            author: "Bob".to_string(),
            content: "print(1)".to_string(),
        });

        assert!(!changed);
        assert_eq!(s.text(), "print(1)");
        assert_eq!(s.last_editor(), NO_EDITOR_YET);
    }

    #[test]
    fn test_remote_content_not_rebroadcast_as_local() {
        // Applying a remote update and then syncing the widget back into
        // the session must not produce an outbound echo: the texts are
        // equal, so edit_local stays quiet.
        let mut s = session();
        s.apply_remote(RemoteUpdate {
            author: "Bob".to_string(),
            content: "print(2)".to_string(),
        });
        assert!(s.edit_local("print(2)".to_string()).is_none());
    }

    #[test]
    fn test_last_write_wins_by_arrival() {
        let mut s = session();
        s.apply_remote(RemoteUpdate {
            author: "Bob".to_string(),
            content: "a".to_string(),
        });
        s.edit_local("b".to_string());
        assert_eq!(s.text(), "b");

        s.apply_remote(RemoteUpdate {
            author: "Carol".to_string(),
            content: "c".to_string(),
        });
        assert_eq!(s.text(), "c");
        assert_eq!(s.last_editor(), "Carol");
    }

    #[test]
    fn test_theme_toggle_flips_between_two_presets() {
        let mut s = session();
        assert_eq!(s.toggle_theme(), ThemePreset::Light);
        assert_eq!(s.toggle_theme(), ThemePreset::Dark);
        assert_eq!(s.toggle_theme(), ThemePreset::Light);
    }
}
