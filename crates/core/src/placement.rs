//! Placement representation for positioned boxes.

use crate::geometry::Orientation;
use crate::transform::AABB2D;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A box footprint within a layer, relative to the pallet center.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FootprintPosition {
    /// Center offset along the pallet length.
    pub x: f64,
    /// Center offset along the pallet width.
    pub z: f64,
    /// Whether the box is turned 90°.
    pub rotated: bool,
}

impl FootprintPosition {
    /// Creates a footprint centered on `(x, z)`.
    pub fn new(x: f64, z: f64, orientation: Orientation) -> Self {
        Self {
            x,
            z,
            rotated: orientation.is_rotated(),
        }
    }

    /// Orientation of this footprint.
    pub fn orientation(&self) -> Orientation {
        if self.rotated {
            Orientation::Rotated
        } else {
            Orientation::Normal
        }
    }

    /// Area occupied on the deck by a box of the given length and width.
    pub fn bounds(&self, box_length: f64, box_width: f64) -> AABB2D<f64> {
        let (along_length, along_width) = self.orientation().effective(box_length, box_width);
        AABB2D::around(self.x, self.z, along_length, along_width)
    }
}

/// Two-tone display color keyed to layer parity. Cosmetic only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LayerColor {
    /// Even 0-based layers.
    #[cfg_attr(feature = "serde", serde(rename = "#3b82f6"))]
    Even,
    /// Odd 0-based layers.
    #[cfg_attr(feature = "serde", serde(rename = "#2563eb"))]
    Odd,
}

impl LayerColor {
    /// Color for the given 0-based layer index.
    pub fn for_layer(layer_index: usize) -> Self {
        if layer_index % 2 == 0 {
            LayerColor::Even
        } else {
            LayerColor::Odd
        }
    }

    /// CSS hex representation.
    pub fn hex(self) -> &'static str {
        match self {
            LayerColor::Even => "#3b82f6",
            LayerColor::Odd => "#2563eb",
        }
    }
}

/// One placed box in 3D.
///
/// `y` is vertical and includes the pallet deck height.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct BoxPosition {
    /// Center along the pallet length.
    pub x: f64,
    /// Center height above the floor.
    pub y: f64,
    /// Center along the pallet width.
    pub z: f64,
    /// Whether the box is turned 90°.
    pub rotated: bool,
    /// Display color.
    pub color: LayerColor,
    /// 0-based layer the box belongs to.
    pub layer_index: usize,
}

impl BoxPosition {
    /// Lifts a layer footprint to height `y` in layer `layer_index`.
    pub fn from_footprint(footprint: &FootprintPosition, y: f64, layer_index: usize) -> Self {
        Self {
            x: footprint.x,
            y,
            z: footprint.z,
            rotated: footprint.rotated,
            color: LayerColor::for_layer(layer_index),
            layer_index,
        }
    }
}
