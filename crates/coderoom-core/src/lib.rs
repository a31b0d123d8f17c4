//! # Coderoom Core
//!
//! Session model and configuration for the Coderoom client.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                      Session                          │
//! │  ┌──────────────┐ ┌───────────┐ ┌─────────────────┐  │
//! │  │   Identity   │ │  Document │ │  Last editor    │  │
//! │  │ (name, once) │ │ text/lang │ │  label          │  │
//! │  └──────────────┘ └───────────┘ └─────────────────┘  │
//! │         edits tagged Local or Remote at the seam      │
//! └──────────────────────────────────────────────────────┘
//! ```
//!
//! ## Learning: Module Organization
//!
//! Rust modules map to files:
//! - `mod foo;` looks for `foo.rs` or `foo/mod.rs`
//! - `pub use` re-exports items for cleaner public APIs

pub mod config;
pub mod identity;
pub mod language;
pub mod room;
pub mod session;

pub use config::{Config, ConfigError};
pub use identity::SessionIdentity;
pub use language::Language;
pub use room::RoomId;
pub use session::{RemoteUpdate, Session, ThemePreset};
