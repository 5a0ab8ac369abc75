//! # Palletizer Stack
//!
//! Layer layout and stacking for uniform boxes on a pallet.
//!
//! A load is built from at most two single-layer grids: pattern A, the best
//! of the two axis-aligned orientations, and pattern B, the opposite
//! orientation laid on odd layers for cross-stacking when it keeps enough
//! boxes per layer.

pub mod complement;
pub mod grid;
pub mod packer;
pub mod stacking;

// Re-exports
pub use complement::complement_layer;
pub use grid::{fit_layer, grid_for};
pub use packer::{calculate_pallet, PalletPacker};
pub use palletizer_core::{
    CalculationResult, Error, MaterialData, PackingPolicy, PalletConfig, Planner, Result,
};
pub use stacking::stack_layers;
