//! The guarded send handle.
//!
//! ## Learning: Sharing State With Background Tasks
//!
//! The socket reader and writer run as tokio tasks while the UI thread
//! holds a [`Connection`]. The only state they share is the
//! [`ConnectionState`] cell behind an `Arc<Mutex<_>>` — sends check it at
//! call time, tasks flip it on open/close. Everything else flows through
//! channels.

use crate::envelope::Envelope;
use coderoom_core::RemoteUpdate;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

/// Lifecycle of the room channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectionState {
    /// Handshake in progress; outbound envelopes are dropped.
    #[default]
    Connecting,
    /// Bidirectional flow enabled.
    Open,
    /// Torn down locally or by the remote end. Terminal.
    Closed,
}

/// Shared state cell between the handle and the socket tasks.
pub(crate) type StateCell = Arc<Mutex<ConnectionState>>;

/// A cloneable handle for sending envelopes into the room.
///
/// `send` is guarded: outside the `Open` state the envelope is dropped
/// silently (debug log only). There is no retry and no buffering.
#[derive(Debug, Clone)]
pub struct Connection {
    state: StateCell,
    outgoing: mpsc::Sender<Envelope>,
}

impl Connection {
    pub(crate) fn new(state: StateCell, outgoing: mpsc::Sender<Envelope>) -> Self {
        Self { state, outgoing }
    }

    /// Attempts to broadcast an update to the room.
    ///
    /// Returns `true` if the envelope was handed to the writer, `false`
    /// if it was dropped because the connection is not open.
    pub fn send(&self, update: RemoteUpdate) -> bool {
        if self.state() != ConnectionState::Open {
            tracing::debug!("dropping outbound envelope: connection not open");
            return false;
        }
        match self.outgoing.try_send(Envelope::from(update)) {
            Ok(()) => true,
            Err(err) => {
                tracing::debug!(%err, "dropping outbound envelope: writer unavailable");
                false
            }
        }
    }

    /// The current connection state.
    pub fn state(&self) -> ConnectionState {
        *self.state.lock().expect("connection state lock poisoned")
    }
}

pub(crate) fn set_state(cell: &StateCell, state: ConnectionState) {
    *cell.lock().expect("connection state lock poisoned") = state;
}
