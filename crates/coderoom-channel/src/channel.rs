//! Channel lifecycle and socket tasks.
//!
//! [`RoomChannel::connect`] performs the WebSocket handshake against the
//! room-scoped address and spawns two tasks: a writer draining the
//! outbound queue into the socket, and a reader decoding inbound frames
//! into [`ChannelEvent`]s. Dropping the channel (and every [`Connection`]
//! handle cloned from it) closes the outbound queue, which makes the
//! writer send a close frame and exit; the reader exits when the socket
//! does.

use crate::connection::{set_state, Connection, ConnectionState, StateCell};
use crate::envelope::Envelope;
use crate::ChannelError;
use coderoom_core::{RemoteUpdate, RoomId};
use futures_util::{SinkExt, StreamExt};
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;
use tokio_tungstenite::tungstenite::Message;

/// The room-scoped address of a channel.
#[derive(Debug, Clone)]
pub struct ChannelEndpoint {
    ws_base: String,
    room: RoomId,
}

impl ChannelEndpoint {
    /// Builds the endpoint for a room on a server.
    pub fn new(ws_base: impl Into<String>, room: RoomId) -> Self {
        Self {
            ws_base: ws_base.into(),
            room,
        }
    }

    /// The room this endpoint addresses.
    pub fn room(&self) -> &RoomId {
        &self.room
    }

    /// The full WebSocket URL, bound to the room identifier.
    pub fn url(&self) -> String {
        format!("{}/ws/{}", self.ws_base.trim_end_matches('/'), self.room)
    }
}

/// Events surfaced by the channel.
#[derive(Debug)]
pub enum ChannelEvent {
    /// A peer's envelope arrived.
    Received(RemoteUpdate),
    /// The channel reached the `Closed` state. Terminal.
    Closed,
}

/// One live channel to a room.
pub struct RoomChannel {
    connection: Connection,
    event_rx: mpsc::Receiver<ChannelEvent>,
}

impl RoomChannel {
    /// Opens the channel and transitions it to `Open`.
    ///
    /// On handshake failure the channel ends in `Closed` and the error is
    /// returned; there is no retry.
    pub async fn connect(endpoint: &ChannelEndpoint) -> Result<Self, ChannelError> {
        let state: StateCell = Arc::new(Mutex::new(ConnectionState::Connecting));
        let url = endpoint.url();
        tracing::info!(%url, "connecting to room channel");

        let (socket, _) = match tokio_tungstenite::connect_async(&url).await {
            Ok(ok) => ok,
            Err(err) => {
                tracing::warn!(%err, "room channel handshake failed");
                set_state(&state, ConnectionState::Closed);
                return Err(err.into());
            }
        };

        let (sink, stream) = socket.split();
        let (out_tx, out_rx) = mpsc::channel::<Envelope>(256);
        let (event_tx, event_rx) = mpsc::channel::<ChannelEvent>(256);

        tokio::spawn(write_outbound(sink, out_rx, Arc::clone(&state)));
        tokio::spawn(read_inbound(stream, event_tx, Arc::clone(&state)));

        set_state(&state, ConnectionState::Open);
        tracing::info!(room = %endpoint.room(), "room channel open");

        Ok(Self {
            connection: Connection::new(state, out_tx),
            event_rx,
        })
    }

    /// A cloneable send handle for this channel.
    pub fn connection(&self) -> Connection {
        self.connection.clone()
    }

    /// Waits for the next channel event.
    ///
    /// Returns `None` once the channel is closed and drained.
    pub async fn next_event(&mut self) -> Option<ChannelEvent> {
        self.event_rx.recv().await
    }
}

type SocketSink = futures_util::stream::SplitSink<
    tokio_tungstenite::WebSocketStream<tokio_tungstenite::MaybeTlsStream<tokio::net::TcpStream>>,
    Message,
>;

type SocketStream = futures_util::stream::SplitStream<
    tokio_tungstenite::WebSocketStream<tokio_tungstenite::MaybeTlsStream<tokio::net::TcpStream>>,
>;

/// Writer task: drains the outbound queue into the socket.
async fn write_outbound(mut sink: SocketSink, mut out_rx: mpsc::Receiver<Envelope>, state: StateCell) {
    while let Some(envelope) = out_rx.recv().await {
        let json = match envelope.to_json() {
            Ok(json) => json,
            Err(err) => {
                tracing::warn!(%err, "skipping unencodable envelope");
                continue;
            }
        };
        if let Err(err) = sink.send(Message::Text(json.into())).await {
            tracing::warn!(%err, "room channel write failed");
            break;
        }
    }

    // Queue closed (session unmounted) or the socket died.
    let _ = sink.send(Message::Close(None)).await;
    set_state(&state, ConnectionState::Closed);
}

/// Reader task: decodes inbound frames into events.
///
/// Malformed frames are logged and skipped; they do not terminate the
/// loop.
async fn read_inbound(
    mut stream: SocketStream,
    event_tx: mpsc::Sender<ChannelEvent>,
    state: StateCell,
) {
    while let Some(message) = stream.next().await {
        match message {
            Ok(Message::Text(text)) => match Envelope::from_json(text.as_str()) {
                Ok(envelope) => {
                    if event_tx
                        .send(ChannelEvent::Received(envelope.into()))
                        .await
                        .is_err()
                    {
                        break;
                    }
                }
                Err(err) => {
                    tracing::warn!(%err, "skipping malformed inbound frame");
                }
            },
            Ok(Message::Close(_)) => break,
            Ok(_) => {}
            Err(err) => {
                tracing::warn!(%err, "room channel read failed");
                break;
            }
        }
    }

    set_state(&state, ConnectionState::Closed);
    let _ = event_tx.send(ChannelEvent::Closed).await;
    tracing::info!("room channel closed");
}
