//! End-to-end channel behavior against an in-process WebSocket server.

use coderoom_channel::{ChannelEndpoint, ChannelEvent, ConnectionState, RoomChannel};
use coderoom_core::{RemoteUpdate, RoomId};
use futures_util::{SinkExt, StreamExt};
use tokio::net::TcpListener;
use tokio_tungstenite::tungstenite::Message;

fn endpoint(addr: std::net::SocketAddr) -> ChannelEndpoint {
    ChannelEndpoint::new(
        format!("ws://{addr}"),
        RoomId::parse("room123").unwrap(),
    )
}

#[tokio::test]
async fn envelope_round_trip_through_server() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    // Minimal room peer: push one edit at the client, then wait for the
    // client's broadcast and hand it back to the test.
    let server = tokio::spawn(async move {
        let (stream, _) = listener.accept().await.unwrap();
        let mut socket = tokio_tungstenite::accept_async(stream).await.unwrap();

        socket
            .send(Message::Text(
                r#"{"user":"Bob","code":"print(2)"}"#.into(),
            ))
            .await
            .unwrap();

        loop {
            let message = socket.next().await.unwrap().unwrap();
            if message.is_text() {
                return message.into_text().unwrap().as_str().to_string();
            }
        }
    });

    let mut channel = RoomChannel::connect(&endpoint(addr)).await.unwrap();
    let connection = channel.connection();
    assert_eq!(connection.state(), ConnectionState::Open);

    // Inbound envelope surfaces as a Received event.
    match channel.next_event().await.unwrap() {
        ChannelEvent::Received(update) => {
            assert_eq!(update.author, "Bob");
            assert_eq!(update.content, "print(2)");
        }
        other => panic!("unexpected event: {other:?}"),
    }

    // Outbound update reaches the server with the wire field names.
    assert!(connection.send(RemoteUpdate {
        author: "Alice".to_string(),
        content: "print(3)".to_string(),
    }));
    let broadcast = server.await.unwrap();
    assert_eq!(broadcast, r#"{"user":"Alice","code":"print(3)"}"#);
}

#[tokio::test]
async fn malformed_frame_is_skipped_not_fatal() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let server = tokio::spawn(async move {
        let (stream, _) = listener.accept().await.unwrap();
        let mut socket = tokio_tungstenite::accept_async(stream).await.unwrap();

        // Garbage first, then a well-formed envelope.
        socket
            .send(Message::Text("definitely not json".into()))
            .await
            .unwrap();
        socket
            .send(Message::Text(
                r#"{"user":"Carol","code":"x = 3"}"#.into(),
            ))
            .await
            .unwrap();

        // Keep the socket open until the client has seen both frames.
        let _ = socket.next().await;
    });

    let mut channel = RoomChannel::connect(&endpoint(addr)).await.unwrap();

    // The malformed frame is dropped; the next event is the good one.
    match channel.next_event().await.unwrap() {
        ChannelEvent::Received(update) => {
            assert_eq!(update.author, "Carol");
            assert_eq!(update.content, "x = 3");
        }
        other => panic!("unexpected event: {other:?}"),
    }

    drop(channel);
    server.await.unwrap();
}

#[tokio::test]
async fn remote_close_ends_the_channel() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let server = tokio::spawn(async move {
        let (stream, _) = listener.accept().await.unwrap();
        let mut socket = tokio_tungstenite::accept_async(stream).await.unwrap();
        socket.send(Message::Close(None)).await.unwrap();
        // Drain until the peer hangs up.
        while let Some(Ok(_)) = socket.next().await {}
    });

    let mut channel = RoomChannel::connect(&endpoint(addr)).await.unwrap();
    let connection = channel.connection();

    match channel.next_event().await.unwrap() {
        ChannelEvent::Closed => {}
        other => panic!("unexpected event: {other:?}"),
    }

    assert_eq!(connection.state(), ConnectionState::Closed);
    assert!(!connection.send(RemoteUpdate {
        author: "Alice".to_string(),
        content: "late".to_string(),
    }));

    // Releasing the channel lets the writer finish its close handshake.
    drop(connection);
    drop(channel);
    server.await.unwrap();
}
