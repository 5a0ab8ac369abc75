//! # Palletizer
//!
//! Load planning for uniform boxes on a pallet.
//!
//! Given a box and a pallet, the planner picks the better of the two
//! axis-aligned grid layouts for a layer, adds an alternate layer in the
//! opposite orientation for cross-stacking when it keeps at least 85% of the
//! boxes, stacks layers up to the load ceiling and reports utilization.
//!
//! ## Quick Start
//!
//! ```rust
//! use palletizer::{MaterialData, PalletConfig, PalletPacker, Planner};
//!
//! let carton = MaterialData::new("carton", 400.0, 300.0, 100.0);
//! let pallet = PalletConfig::standard();
//!
//! let plan = PalletPacker::default_config().plan(&carton, &pallet);
//! assert_eq!(plan.total_layers, 13);
//! assert_eq!(plan.total_items, 78);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Serialization support

/// Core types and abstractions.
pub use palletizer_core as core;

/// Layer fitting and stacking.
pub use palletizer_stack as stack;

// Re-export commonly used types at root level
pub use palletizer_core::{
    BoxPosition, CalculationResult, Error, LayerAssignment, LayerPattern, LoadHeightPreset,
    MaterialData, Orientation, PackingPolicy, PalletConfig, PatternId, PlanSummary, Planner,
    Result,
};
pub use palletizer_stack::{calculate_pallet, PalletPacker};
