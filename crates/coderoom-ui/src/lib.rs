//! # Coderoom UI
//!
//! Iced front-end for the Coderoom client.
//!
//! ## Architecture
//!
//! The UI follows the Elm architecture (TEA):
//! - **Model**: Application state
//! - **Message**: Events that can occur
//! - **Update**: Pure function: (state, message) -> new state
//! - **View**: Pure function: state -> UI elements
//!
//! The room channel lives in a subscription keyed on the room
//! identifier, so its lifetime is exactly the editor screen's lifetime.

pub mod app;
pub mod highlighter;
pub mod style;
pub mod theme;

pub use app::{run, App, Flags};
pub use theme::Theme;
