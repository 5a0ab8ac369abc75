//! Layer patterns and the aggregate load plan.

use crate::geometry::{MaterialData, Orientation, PalletConfig};
use crate::placement::{BoxPosition, FootprintPosition};
use crate::transform::AABB2D;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use std::fmt;

/// Name of a layer layout variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PatternId {
    /// Primary best-fit layout.
    A,
    /// Alternate layout in the opposite orientation, for cross-stacking.
    B,
}

impl fmt::Display for PatternId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatternId::A => f.write_str("A"),
            PatternId::B => f.write_str("B"),
        }
    }
}

/// A single-layer grid layout.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct LayerPattern {
    /// Variant name.
    pub id: PatternId,

    /// Orientation shared by every box in the layer.
    pub orientation: Orientation,

    /// Grid columns along the pallet length.
    pub cols: usize,

    /// Grid rows along the pallet width.
    pub rows: usize,

    /// Boxes in the layer, always `cols * rows`.
    pub items: usize,

    /// Box footprints, column-major.
    pub positions: Vec<FootprintPosition>,

    /// Extent consumed along the pallet length.
    pub layer_length: f64,

    /// Extent consumed along the pallet width.
    pub layer_width: f64,
}

impl LayerPattern {
    /// A layer that holds nothing.
    pub fn empty(id: PatternId, orientation: Orientation) -> Self {
        Self {
            id,
            orientation,
            cols: 0,
            rows: 0,
            items: 0,
            positions: Vec::new(),
            layer_length: 0.0,
            layer_width: 0.0,
        }
    }

    /// Returns true if the layer holds no boxes.
    pub fn is_empty(&self) -> bool {
        self.items == 0
    }

    /// Returns true if the layer's boxes are turned 90°.
    pub fn is_rotated(&self) -> bool {
        self.orientation.is_rotated()
    }

    /// Deck area consumed by the layer (mm²).
    pub fn area(&self) -> f64 {
        self.layer_length * self.layer_width
    }

    /// Bounding box of the layer, centered on the pallet.
    pub fn footprint(&self) -> AABB2D<f64> {
        AABB2D::centered(self.layer_length, self.layer_width)
    }
}

/// Which pattern a vertical layer uses.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct LayerAssignment {
    /// 1-based layer number.
    pub layer_index: usize,
    /// Pattern laid at this layer.
    pub pattern_id: PatternId,
    /// Cumulative goods height at the top of this layer.
    pub height: f64,
    /// Boxes in this layer.
    pub item_count: usize,
}

/// The complete load plan for one box type on one pallet.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CalculationResult {
    /// The box that was planned.
    pub material: MaterialData,

    /// Boxes on the pallet.
    pub total_items: usize,

    /// Layers stacked.
    pub total_layers: usize,

    /// Box volume over load envelope volume, as a percentage.
    pub volume_utilization: f64,

    /// Pattern A area over pallet area, as a percentage.
    pub area_utilization: f64,

    /// Every placed box.
    pub positions: Vec<BoxPosition>,

    /// Goods height, pallet excluded.
    pub stack_height: f64,

    /// Distinct patterns used: `[A]` or `[A, B]`.
    pub unique_patterns: Vec<LayerPattern>,

    /// Per-layer pattern choice, bottom to top.
    pub layer_assignments: Vec<LayerAssignment>,
}

impl CalculationResult {
    /// A plan that loads nothing, keeping `pattern_a` as the sole pattern.
    pub fn empty(material: MaterialData, pattern_a: LayerPattern) -> Self {
        Self {
            material,
            total_items: 0,
            total_layers: 0,
            volume_utilization: 0.0,
            area_utilization: 0.0,
            positions: Vec::new(),
            stack_height: 0.0,
            unique_patterns: vec![pattern_a],
            layer_assignments: Vec::new(),
        }
    }

    /// Returns true if nothing was loaded.
    pub fn is_empty(&self) -> bool {
        self.total_items == 0
    }

    /// Looks up a pattern by id.
    pub fn pattern(&self, id: PatternId) -> Option<&LayerPattern> {
        self.unique_patterns.iter().find(|p| p.id == id)
    }

    /// Returns true if layers alternate between A and B.
    pub fn is_cross_stacked(&self) -> bool {
        self.pattern(PatternId::B).is_some()
    }

    /// Height from the floor to the top of the load.
    pub fn total_height(&self, pallet: &PalletConfig) -> f64 {
        self.stack_height + pallet.height
    }

    /// Compact numeric summary.
    pub fn summary(&self) -> PlanSummary {
        PlanSummary::from(self)
    }
}

/// Summary statistics for a load plan.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PlanSummary {
    /// Material display name.
    pub material: String,
    /// Boxes on the pallet.
    pub total_items: usize,
    /// Layers stacked.
    pub total_layers: usize,
    /// Boxes per layer of pattern A.
    pub items_per_layer: usize,
    /// Whether an alternate pattern is used.
    pub cross_stacked: bool,
    /// Volume utilization percentage.
    pub volume_utilization: f64,
    /// Area utilization percentage.
    pub area_utilization: f64,
    /// Goods height.
    pub stack_height: f64,
}

impl From<&CalculationResult> for PlanSummary {
    fn from(result: &CalculationResult) -> Self {
        Self {
            material: result.material.name.clone(),
            total_items: result.total_items,
            total_layers: result.total_layers,
            items_per_layer: result
                .pattern(PatternId::A)
                .map(|p| p.items)
                .unwrap_or_default(),
            cross_stacked: result.is_cross_stacked(),
            volume_utilization: result.volume_utilization,
            area_utilization: result.area_utilization,
            stack_height: result.stack_height,
        }
    }
}
