//! Motion module - horizontal bounce of the moving block
//!
//! One pure function advances the block by one fixed timestep and
//! bounces it off the playfield walls. Keeping it free of session state
//! makes the overshoot clamping trivially testable.

use crate::types::Direction;

/// Advance a block's left edge by one tick and resolve wall collisions.
///
/// Returns the new left edge and (possibly flipped) direction. Overshoot
/// is clamped flush to the wall in the same tick it occurs, so the block
/// never renders outside the container. A block wider than the container
/// pins to the left wall (the right-wall clamp would push `x` negative,
/// which the left check then catches on the next tick).
pub fn advance(
    x: f32,
    width: f32,
    container_width: f32,
    speed: f32,
    direction: Direction,
) -> (f32, Direction) {
    let moved = x + speed * direction.signum();
    if moved + width > container_width {
        (container_width - width, Direction::Left)
    } else if moved < 0.0 {
        (0.0, Direction::Right)
    } else {
        (moved, direction)
    }
}
