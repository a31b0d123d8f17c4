//! The wire format.
//!
//! Both directions carry the same JSON shape:
//!
//! ```json
//! { "user": "Alice", "code": "print(1)" }
//! ```
//!
//! The field names are fixed by the room server; the model-level
//! [`RemoteUpdate`] uses clearer names and converts at this boundary.

use coderoom_core::RemoteUpdate;
use serde::{Deserialize, Serialize};

/// The author+content pair exchanged over the channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope {
    /// Display name of the author
    pub user: String,
    /// Complete document text
    pub code: String,
}

impl Envelope {
    /// Serializes to the wire JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Parses an inbound frame.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}

impl From<RemoteUpdate> for Envelope {
    fn from(update: RemoteUpdate) -> Self {
        Self {
            user: update.author,
            code: update.content,
        }
    }
}

impl From<Envelope> for RemoteUpdate {
    fn from(envelope: Envelope) -> Self {
        Self {
            author: envelope.user,
            content: envelope.code,
        }
    }
}
