//! Session identity.
//!
//! A display name chosen once when the client starts (CLI flag or config
//! file) and immutable for the lifetime of the session. The name travels
//! on every outbound envelope so peers can attribute edits.

/// Fallback display name when none is supplied.
pub const ANONYMOUS: &str = "Anonymous";

/// The display name for this session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionIdentity {
    name: String,
}

impl SessionIdentity {
    /// Creates an identity from a user-supplied name.
    ///
    /// Blank names fall back to [`ANONYMOUS`].
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            Self {
                name: ANONYMOUS.to_string(),
            }
        } else {
            Self {
                name: trimmed.to_string(),
            }
        }
    }

    /// Creates the anonymous identity.
    pub fn anonymous() -> Self {
        Self {
            name: ANONYMOUS.to_string(),
        }
    }

    /// The display name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Default for SessionIdentity {
    fn default() -> Self {
        Self::anonymous()
    }
}

impl std::fmt::Display for SessionIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_identity() {
        let id = SessionIdentity::new("Alice");
        assert_eq!(id.name(), "Alice");
    }

    #[test]
    fn test_blank_name_falls_back() {
        assert_eq!(SessionIdentity::new("").name(), ANONYMOUS);
        assert_eq!(SessionIdentity::new("   ").name(), ANONYMOUS);
    }

    #[test]
    fn test_name_is_trimmed() {
        assert_eq!(SessionIdentity::new("  Bob  ").name(), "Bob");
    }
}
