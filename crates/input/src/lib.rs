//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::GameAction`]. Timing concerns
//! (frame pacing, auto-repeat shaping) stay with the host loop; the engine
//! only ever sees discrete actions.

pub mod map;

pub use blockfall_types as types;

pub use map::{handle_key_event, should_quit};
