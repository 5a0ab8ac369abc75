//! Alternate layer generation for cross-stacking.
//!
//! Laying every other layer in the opposite orientation breaks up the vertical
//! seams between boxes. The alternate is not searched for: it is always the
//! grid in the orientation opposite pattern A, and it is dropped when it
//! costs too many boxes per layer.

use crate::grid::grid_for;
use palletizer_core::{LayerPattern, PackingPolicy, PatternId};

/// Builds pattern B for the given pattern A, or `None` if it is discarded.
pub fn complement_layer(
    primary: &LayerPattern,
    box_length: f64,
    box_width: f64,
    pallet_length: f64,
    pallet_width: f64,
    policy: &PackingPolicy,
) -> Option<LayerPattern> {
    if !policy.cross_stacking {
        return None;
    }

    let candidate = grid_for(
        box_length,
        box_width,
        pallet_length,
        pallet_width,
        primary.orientation.opposite(),
        PatternId::B,
    );

    if candidate.is_empty() {
        log::debug!(
            "Pattern B discarded: {:?} grid is {}x{}",
            candidate.orientation,
            candidate.cols,
            candidate.rows
        );
        return None;
    }

    if !policy.keeps_complement(candidate.items, primary.items) {
        log::debug!(
            "Pattern B discarded: {} items < {} x {} items of pattern A",
            candidate.items,
            policy.min_complement_ratio,
            primary.items
        );
        return None;
    }

    Some(candidate)
}
