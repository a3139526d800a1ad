//! Core game engine - pure, deterministic, I/O free
//!
//! Everything in this crate is plain state plus pure functions: the
//! session state machine, block geometry, the bounce motion step and a
//! seeded RNG. The terminal front end drives it; nothing here knows
//! about terminals, timers or input devices.

pub use serenity_tower_types as types;

pub mod block;
pub mod motion;
pub mod rng;
pub mod session;

pub use block::Block;
pub use rng::SimpleRng;
pub use session::{PlaceOutcome, Session};
