//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the game.
//! All types are pure data with no external dependencies, making them
//! usable in any context (engine core, input mapping, terminal rendering).
//!
//! # World Geometry
//!
//! The game world uses continuous `f32` units (inherited from the original
//! pixel-based playfield):
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `CONTAINER_WIDTH` | 448 | Playfield width |
//! | `BASE_WIDTH` | 200 | Virtual base block width (centered) |
//! | `BLOCK_HEIGHT` | 40 | Height of every block |
//! | `FIRST_BLOCK_Y` | 20 | Spawn height of the first moving block |
//! | `CAMERA_SHIFT_Y` | 400 | Tower height that triggers compaction |
//!
//! # Pacing
//!
//! - `BASE_SPEED`: 2.0 units per frame at the start of a run
//! - `SPEED_INCREMENT`: 0.2 units per frame added per placed block
//!   (monotonic, unbounded - the difficulty ramp)
//! - `SNAP_TOLERANCE`: 5 units of forgiveness around perfect alignment
//! - `TICK_MS`: 16 ms fixed timestep (~60 FPS)
//!
//! # Color Cycle
//!
//! Block color is display-only: an HSL hue cursor starting at
//! `HUE_START`, stepped by `HUE_STEP` degrees before each spawn
//! (wrapped mod 360), rendered at `HUE_SATURATION` / `HUE_LIGHTNESS`.
//! The first block therefore renders at `HUE_START + HUE_STEP`.

/// Playfield width in world units.
pub const CONTAINER_WIDTH: f32 = 448.0;

/// Width of the virtual base block the first placement is judged against.
pub const BASE_WIDTH: f32 = 200.0;

/// Height of every block in world units.
pub const BLOCK_HEIGHT: f32 = 40.0;

/// Vertical offset of the first moving block (just above the pedestal).
pub const FIRST_BLOCK_Y: f32 = 20.0;

/// When a placed block's `y` exceeds this, the whole tower shifts down
/// by one `BLOCK_HEIGHT` (camera follow).
pub const CAMERA_SHIFT_Y: f32 = 400.0;

/// Horizontal speed of a freshly spawned run, in units per frame.
pub const BASE_SPEED: f32 = 2.0;

/// Speed added after every successful placement.
pub const SPEED_INCREMENT: f32 = 0.2;

/// Forgiveness window around perfect alignment: placements with a left-edge
/// delta strictly below this keep the previous block's full width.
pub const SNAP_TOLERANCE: f32 = 5.0;

/// Fixed timestep interval in milliseconds (16ms ~ 60 FPS).
pub const TICK_MS: u32 = 16;

/// Origin of the hue cursor, in degrees. The cursor steps before each
/// spawn takes its color, so no block renders at exactly this value.
pub const HUE_START: f32 = 160.0;

/// Hue advance per spawned block, in degrees.
pub const HUE_STEP: f32 = 10.0;

/// Saturation used when rendering block hues (0..=1).
pub const HUE_SATURATION: f32 = 0.70;

/// Lightness used when rendering block hues (0..=1).
pub const HUE_LIGHTNESS: f32 = 0.65;

/// Lifecycle phase of a run.
///
/// The only transitions are:
/// `NotStarted --(place)--> Running --(miss)--> GameOver --(restart)--> NotStarted`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Session exists but no block is in motion yet.
    NotStarted,
    /// A block is in motion; placement input is live.
    Running,
    /// A placement missed the tower entirely. Terminal for the run.
    GameOver,
}

impl Phase {
    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::NotStarted => "not_started",
            Phase::Running => "running",
            Phase::GameOver => "game_over",
        }
    }
}

/// Horizontal travel direction of the moving block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// Signed unit step for this direction.
    ///
    /// # Examples
    ///
    /// ```
    /// use serenity_tower_types::Direction;
    ///
    /// assert_eq!(Direction::Right.signum(), 1.0);
    /// assert_eq!(Direction::Left.signum(), -1.0);
    /// ```
    pub fn signum(&self) -> f32 {
        match self {
            Direction::Left => -1.0,
            Direction::Right => 1.0,
        }
    }

    /// The opposite direction.
    pub fn flipped(&self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// Inputs that can be applied to a session.
///
/// The game has exactly two triggers: "place" (which doubles as the start
/// trigger from `NotStarted`) and "restart" (reachable only from
/// `NotStarted`/`GameOver`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Freeze the moving block and resolve the placement
    /// (starts the run when the session is `NotStarted`).
    Place,
    /// Discard the finished run and create a fresh session.
    Restart,
}

impl GameAction {
    /// Parse action from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use serenity_tower_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("place"), Some(GameAction::Place));
    /// assert_eq!(GameAction::from_str("Restart"), Some(GameAction::Restart));
    /// assert_eq!(GameAction::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "place" => Some(GameAction::Place),
            "restart" => Some(GameAction::Restart),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Place => "place",
            GameAction::Restart => "restart",
        }
    }
}
