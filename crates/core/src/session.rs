//! Session module - the full game state machine
//!
//! A [`Session`] owns everything a run needs: the settled tower, the one
//! moving block, pacing, the color cycle and the RNG. It is pure state -
//! no clocks, no terminal, no I/O. The caller drives it with [`tick`]
//! at a fixed cadence and feeds it [`GameAction`]s.
//!
//! [`tick`]: Session::tick

use crate::block::Block;
use crate::motion;
use crate::rng::SimpleRng;
use crate::types::{
    Direction, GameAction, Phase, BASE_SPEED, BASE_WIDTH, BLOCK_HEIGHT, CAMERA_SHIFT_Y,
    CONTAINER_WIDTH, FIRST_BLOCK_Y, HUE_START, HUE_STEP, SNAP_TOLERANCE, SPEED_INCREMENT,
};

/// Result of resolving a placement attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceOutcome {
    /// The block landed on the tower. `snapped` is true when the
    /// forgiveness window restored perfect alignment.
    Placed { snapped: bool },
    /// The block cleared the tower entirely. The run is over.
    Miss,
    /// No block was in motion (already game over, or not started).
    Ignored,
}

/// One run of the stacking game.
#[derive(Debug, Clone)]
pub struct Session {
    phase: Phase,
    score: u32,
    stack: Vec<Block>,
    current: Option<Block>,
    speed: f32,
    direction: Direction,
    hue: f32,
    rng: SimpleRng,
    container_width: f32,
}

impl Session {
    /// Create a fresh session with the default playfield width.
    pub fn new(seed: u32) -> Self {
        Self::with_container_width(seed, CONTAINER_WIDTH)
    }

    /// Create a fresh session with a custom playfield width.
    ///
    /// Widths below one unit are clamped up; the centered virtual base
    /// may overhang a playfield narrower than `BASE_WIDTH`, which only
    /// makes the first placement more forgiving.
    pub fn with_container_width(seed: u32, container_width: f32) -> Self {
        Self {
            phase: Phase::NotStarted,
            score: 0,
            stack: Vec::new(),
            current: None,
            speed: BASE_SPEED,
            direction: Direction::Right,
            hue: HUE_START,
            rng: SimpleRng::new(seed),
            container_width: container_width.max(1.0),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Settled blocks, bottom first. Does not include the virtual base.
    pub fn stack(&self) -> &[Block] {
        &self.stack
    }

    /// The block currently in motion, if any. After a miss this holds the
    /// frozen block where it fell, for display.
    pub fn current(&self) -> Option<&Block> {
        self.current.as_ref()
    }

    pub fn container_width(&self) -> f32 {
        self.container_width
    }

    /// Advance the moving block by one fixed timestep.
    ///
    /// Returns `true` when state changed. Outside `Running` this is a
    /// no-op, so the caller can tick unconditionally on its timer.
    pub fn tick(&mut self) -> bool {
        if self.phase != Phase::Running {
            return false;
        }
        let Some(block) = self.current.as_mut() else {
            return false;
        };
        let (x, dir) = motion::advance(
            block.x,
            block.width,
            self.container_width,
            self.speed,
            self.direction,
        );
        block.x = x;
        self.direction = dir;
        true
    }

    /// Apply a player action. Returns `true` when it changed state.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Place => match self.phase {
                Phase::NotStarted => {
                    self.start();
                    true
                }
                Phase::Running => self.place_current() != PlaceOutcome::Ignored,
                Phase::GameOver => false,
            },
            GameAction::Restart => match self.phase {
                // Restart is not an escape hatch mid-run.
                Phase::Running => false,
                Phase::NotStarted | Phase::GameOver => {
                    self.restart();
                    true
                }
            },
        }
    }

    /// Begin the run: spawn the first moving block above the pedestal.
    fn start(&mut self) {
        self.spawn_block(BASE_WIDTH, FIRST_BLOCK_Y);
        self.phase = Phase::Running;
    }

    /// Freeze the moving block and resolve the placement.
    pub fn place_current(&mut self) -> PlaceOutcome {
        if self.phase != Phase::Running {
            return PlaceOutcome::Ignored;
        }
        let Some(cur) = self.current else {
            return PlaceOutcome::Ignored;
        };

        let prev = match self.stack.last() {
            Some(top) => *top,
            None => Block::virtual_base(self.container_width),
        };

        let Some((left, right)) = cur.overlap_with(&prev) else {
            // Leave the block frozen where it fell.
            self.phase = Phase::GameOver;
            return PlaceOutcome::Miss;
        };

        let snapped = (cur.x - prev.x).abs() < SNAP_TOLERANCE;
        let placed = if snapped {
            // Forgiveness window: restore perfect alignment, keep the
            // full width of the block below.
            Block {
                x: prev.x,
                width: prev.width,
                ..cur
            }
        } else {
            Block {
                x: left,
                width: right - left,
                ..cur
            }
        };

        self.stack.push(placed);
        self.score += 1;
        self.speed += SPEED_INCREMENT;

        let next_y = if placed.y > CAMERA_SHIFT_Y {
            // Camera follow: shift the whole tower down one row. The next
            // spawn row is then the pre-shift top, i.e. placed.y itself.
            for block in &mut self.stack {
                block.y -= BLOCK_HEIGHT;
            }
            placed.y
        } else {
            placed.y + BLOCK_HEIGHT
        };

        self.spawn_block(placed.width, next_y);
        PlaceOutcome::Placed { snapped }
    }

    /// Place the moving block at an explicit left edge.
    ///
    /// Equivalent to the block happening to be at `x` when the player
    /// pressed place. Useful for scripted and deterministic play.
    pub fn place_at(&mut self, x: f32) -> PlaceOutcome {
        if self.phase == Phase::Running {
            if let Some(block) = self.current.as_mut() {
                block.x = x;
            }
        }
        self.place_current()
    }

    /// Discard the run and return to `NotStarted`, keeping the playfield
    /// width. The RNG continues from its live state so consecutive runs
    /// do not replay the same side/direction choices.
    pub fn restart(&mut self) {
        *self = Self::with_container_width(self.rng.state(), self.container_width);
    }

    /// Spawn a new moving block of `width` at height `y`, entering from a
    /// random side with a random initial direction.
    fn spawn_block(&mut self, width: f32, y: f32) {
        let from_left = self.rng.next_bool();
        let x = if from_left {
            0.0
        } else {
            self.container_width - width
        };
        self.direction = if self.rng.next_bool() {
            Direction::Right
        } else {
            Direction::Left
        };
        // The hue cursor steps before the spawn takes its color, so the
        // first block already sits one step past the cycle origin.
        self.hue = (self.hue + HUE_STEP) % 360.0;
        self.current = Some(Block {
            x,
            width,
            y,
            hue: self.hue,
        });
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(1)
    }
}
