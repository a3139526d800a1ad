//! Block geometry - the axis-aligned rectangles the tower is built from.

use crate::types::{BASE_WIDTH, BLOCK_HEIGHT, FIRST_BLOCK_Y};

/// A block on the tower's fixed vertical axis.
///
/// `x` is the left edge, `y` the vertical offset from the tower base.
/// Once settled, `0 <= x` and `x + width <= container_width` hold; the
/// moving block may transiently violate them for one frame before the
/// bounce correction. `hue` is display-only (degrees on the HSL wheel).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Block {
    pub x: f32,
    pub width: f32,
    pub y: f32,
    pub hue: f32,
}

impl Block {
    /// Right edge (`x + width`).
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// The virtual base block: the sentinel "stack entry zero" that the
    /// first placement is judged against. Horizontally centered, sitting
    /// one block-height below the first spawn row.
    ///
    /// Modeling this as a real value keeps the placement algorithm a
    /// single uniform overlap computation with no empty-stack branch.
    pub fn virtual_base(container_width: f32) -> Self {
        Self {
            x: (container_width - BASE_WIDTH) / 2.0,
            width: BASE_WIDTH,
            y: FIRST_BLOCK_Y - BLOCK_HEIGHT,
            hue: 0.0,
        }
    }

    /// Horizontal intersection with another block.
    ///
    /// Returns the `(left, right)` edges of the overlap, or `None` when
    /// there is no positive-width intersection (touching edges count as
    /// a miss).
    pub fn overlap_with(&self, other: &Block) -> Option<(f32, f32)> {
        let left = self.x.max(other.x);
        let right = self.right().min(other.right());
        if right <= left {
            None
        } else {
            Some((left, right))
        }
    }
}
