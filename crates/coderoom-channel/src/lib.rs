//! # Coderoom Channel
//!
//! The room-scoped realtime channel: one WebSocket connection per mounted
//! editor session, carrying full-document envelopes in both directions.
//!
//! Provides:
//! - Connection lifecycle (`Connecting → Open → Closed`, no reconnection)
//! - A guarded [`Connection`] send handle that silently drops envelopes
//!   outside the `Open` state
//! - Inbound traffic and closure surfaced as a [`ChannelEvent`] stream
//!
//! The channel offers no ordering guarantee beyond what the transport
//! delivers and no buffering: an envelope is either sent now or dropped.

pub mod channel;
pub mod connection;
pub mod envelope;

pub use channel::{ChannelEndpoint, ChannelEvent, RoomChannel};
pub use connection::{Connection, ConnectionState};
pub use envelope::Envelope;

/// Errors that can occur establishing a channel.
#[derive(Debug, thiserror::Error)]
pub enum ChannelError {
    #[error("WebSocket error: {0}")]
    Transport(#[from] tokio_tungstenite::tungstenite::Error),
}
