//! Serenity Tower (workspace facade crate).
//!
//! This package keeps the `serenity_tower::{core,input,term,types}` public
//! API in one place while the implementation lives in dedicated crates
//! under `crates/`.

pub use serenity_tower_core as core;
pub use serenity_tower_input as input;
pub use serenity_tower_term as term;
pub use serenity_tower_types as types;
