//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key and mouse events into [`crate::types::GameAction`].
//! The game has a one-button control scheme, so there is no key-repeat
//! handling to speak of: every mapped press is a discrete action.

pub mod map;

pub use serenity_tower_types as types;

pub use map::{handle_key_event, handle_mouse_event, should_quit};
