//! Room identifiers.
//!
//! A room identifier names the collaborative session a client intends to
//! join. The join screen accepts free text; parsing trims surrounding
//! whitespace and rejects anything empty. There is no further character
//! policy — the server treats the identifier as an opaque path segment.

/// A validated, non-empty room identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RoomId(String);

impl RoomId {
    /// Parses user input into a room identifier.
    ///
    /// Returns `None` for empty or whitespace-only input; otherwise the
    /// trimmed identifier, verbatim.
    pub fn parse(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RoomId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
