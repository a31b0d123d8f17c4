//! # Coderoom - A Collaborative Code Room Editor
//!
//! A desktop client for room-based collaborative coding.
//!
//! ## Quick Start
//!
//! ```bash
//! # Show the join screen
//! cargo run
//!
//! # Jump straight into a room
//! cargo run -- room123 --name Alice
//!
//! # Point at a different server
//! cargo run -- --server https://rooms.example.com --ws-server wss://rooms.example.com
//! ```

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use coderoom_core::{Config, RoomId, SessionIdentity};
use coderoom_ui::{run, Flags};

/// Coderoom - a collaborative code room editor built in Rust
#[derive(Parser, Debug)]
#[command(name = "coderoom")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Room to join on startup (skips the join screen)
    #[arg(value_name = "ROOM")]
    room: Option<String>,

    /// Display name shown to peers
    #[arg(short, long, value_name = "NAME")]
    name: Option<String>,

    /// Base URL of the run/debug backend
    #[arg(long, value_name = "URL")]
    server: Option<String>,

    /// Base URL of the realtime WebSocket server
    #[arg(long, value_name = "URL")]
    ws_server: Option<String>,

    /// Verbose logging
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize logging
    let log_level = match args.verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_level(true),
        )
        .with(tracing_subscriber::filter::LevelFilter::from_level(
            log_level,
        ))
        .init();

    tracing::info!("Starting Coderoom v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration; CLI flags override file values
    let mut config = Config::load();
    if let Some(server) = args.server {
        config.server.http_base = server;
    }
    if let Some(ws_server) = args.ws_server {
        config.server.ws_base = ws_server;
    }
    if let Some(name) = args.name {
        config.user.name = Some(name);
    }

    let identity = config
        .user
        .name
        .as_deref()
        .map(SessionIdentity::new)
        .unwrap_or_default();

    let room = args.room.as_deref().and_then(RoomId::parse);

    let flags = Flags {
        config,
        identity,
        room,
    };

    // Run the application
    run(flags).map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_parsing() {
        let args = Args::parse_from(["coderoom"]);
        assert!(args.room.is_none());
        assert!(args.name.is_none());
        assert_eq!(args.verbose, 0);
    }

    #[test]
    fn test_args_with_room_and_name() {
        let args = Args::parse_from(["coderoom", "room123", "--name", "Alice"]);
        assert_eq!(args.room.as_deref(), Some("room123"));
        assert_eq!(args.name.as_deref(), Some("Alice"));
    }

    #[test]
    fn test_args_server_overrides() {
        let args = Args::parse_from([
            "coderoom",
            "--server",
            "https://rooms.example.com",
            "--ws-server",
            "wss://rooms.example.com",
        ]);
        assert_eq!(args.server.as_deref(), Some("https://rooms.example.com"));
        assert_eq!(args.ws_server.as_deref(), Some("wss://rooms.example.com"));
    }
}
