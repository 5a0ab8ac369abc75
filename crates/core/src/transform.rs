//! Axis-aligned footprints on the pallet deck.
//!
//! Coordinates follow the placement convention: `x` runs along the pallet
//! length, the second axis (`z` in [`BoxPosition`](crate::placement::BoxPosition))
//! along the pallet width, and the origin is the pallet center.

use nalgebra::RealField;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box in 2D.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AABB2D<S> {
    /// Minimum x coordinate.
    pub min_x: S,
    /// Minimum y coordinate.
    pub min_y: S,
    /// Maximum x coordinate.
    pub max_x: S,
    /// Maximum y coordinate.
    pub max_y: S,
}

impl<S: RealField + Copy> AABB2D<S> {
    /// Creates a new AABB from min/max coordinates.
    pub fn new(min_x: S, min_y: S, max_x: S, max_y: S) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Creates an AABB of the given extents centered on `(cx, cy)`.
    pub fn around(cx: S, cy: S, width: S, height: S) -> Self {
        let two = S::one() + S::one();
        let hw = width / two;
        let hh = height / two;
        Self::new(cx - hw, cy - hh, cx + hw, cy + hh)
    }

    /// Creates an AABB of the given extents centered on the origin.
    pub fn centered(width: S, height: S) -> Self {
        Self::around(S::zero(), S::zero(), width, height)
    }

    /// Returns the width of the AABB.
    pub fn width(&self) -> S {
        self.max_x - self.min_x
    }

    /// Returns the height of the AABB.
    pub fn height(&self) -> S {
        self.max_y - self.min_y
    }

    /// Returns the area of the AABB.
    pub fn area(&self) -> S {
        self.width() * self.height()
    }

    /// Checks if `other` lies inside this AABB, allowing `tolerance` of slack.
    pub fn contains(&self, other: &Self, tolerance: S) -> bool {
        other.min_x >= self.min_x - tolerance
            && other.max_x <= self.max_x + tolerance
            && other.min_y >= self.min_y - tolerance
            && other.max_y <= self.max_y + tolerance
    }

    /// Checks if the interiors of two AABBs overlap by more than `tolerance`.
    ///
    /// Boxes sharing an edge do not overlap.
    pub fn overlaps(&self, other: &Self, tolerance: S) -> bool {
        self.min_x + tolerance < other.max_x
            && other.min_x + tolerance < self.max_x
            && self.min_y + tolerance < other.max_y
            && other.min_y + tolerance < self.max_y
    }

    /// Returns the union (bounding box) of two AABBs.
    pub fn union(&self, other: &Self) -> Self {
        Self {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }
}
