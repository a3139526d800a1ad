//! Terminal front end: framebuffer, renderer and game view.
//!
//! `fb` and `game_view` are pure and unit-testable; `renderer` is the
//! only module that touches the real terminal.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use serenity_tower_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::TerminalRenderer;
