//! # Palletizer Core
//!
//! Core types and abstractions for the Palletizer load planning engine.
//!
//! This crate provides the records exchanged with callers and the trait the
//! layout engine implements.
//!
//! ## Core Components
//!
//! - **Inputs**: `MaterialData`, `PalletConfig`, `LoadHeightPreset`
//! - **Outputs**: `CalculationResult`, `LayerPattern`, `LayerAssignment`, `BoxPosition`
//! - **Planner trait**: Common interface for load planners
//! - **Policy**: `PackingPolicy` thresholds for alternate layers
//! - **Footprints**: 2D AABBs on the pallet deck
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization support

pub mod error;
pub mod geometry;
pub mod placement;
pub mod result;
pub mod solver;
pub mod transform;

// Re-exports
pub use error::{Error, Result};
pub use geometry::{LoadHeightPreset, MaterialData, Orientation, PalletConfig};
pub use placement::{BoxPosition, FootprintPosition, LayerColor};
pub use result::{CalculationResult, LayerAssignment, LayerPattern, PatternId, PlanSummary};
pub use solver::{PackingPolicy, Planner};
pub use transform::AABB2D;
