//! Single-layer grid fitting.
//!
//! A layer is a regular grid of identically oriented boxes. Only the two
//! axis-aligned orientations are considered; the one holding more boxes wins
//! and ties go to [`Orientation::Normal`].

use palletizer_core::{FootprintPosition, LayerPattern, Orientation, PatternId};
use std::mem::size_of;

/// Number of whole boxes of size `pitch` fitting along `extent`.
///
/// Non-finite or non-positive inputs fit nothing.
pub fn grid_count(extent: f64, pitch: f64) -> usize {
    if !(extent.is_finite() && pitch.is_finite()) || extent <= 0.0 || pitch <= 0.0 {
        return 0;
    }
    (extent / pitch).floor() as usize
}

/// Boxes in a `cols` x `rows` grid, or `None` if the count (or the byte
/// size of its position buffer) overflows.
///
/// Overflow only happens for pitches many orders of magnitude below the
/// pallet size; such grids are treated as degenerate.
pub fn grid_items(cols: usize, rows: usize) -> Option<usize> {
    let items = cols.checked_mul(rows)?;
    let bytes = items.checked_mul(size_of::<FootprintPosition>())?;
    (bytes <= isize::MAX as usize).then_some(items)
}

/// Columns and rows for a box in the given orientation.
pub fn grid_dimensions(
    box_length: f64,
    box_width: f64,
    pallet_length: f64,
    pallet_width: f64,
    orientation: Orientation,
) -> (usize, usize) {
    let (pitch_x, pitch_z) = orientation.effective(box_length, box_width);
    (
        grid_count(pallet_length, pitch_x),
        grid_count(pallet_width, pitch_z),
    )
}

/// Builds the grid pattern for a forced orientation.
///
/// The grid is centered on the pallet center and positions are emitted
/// column by column. If either grid dimension is zero, or the box count
/// overflows, the pattern is empty.
pub fn grid_for(
    box_length: f64,
    box_width: f64,
    pallet_length: f64,
    pallet_width: f64,
    orientation: Orientation,
    id: PatternId,
) -> LayerPattern {
    let (cols, rows) = grid_dimensions(
        box_length,
        box_width,
        pallet_length,
        pallet_width,
        orientation,
    );
    let items = match grid_items(cols, rows) {
        Some(items) if items > 0 => items,
        _ => 0,
    };
    if items == 0 {
        return LayerPattern {
            cols,
            rows,
            ..LayerPattern::empty(id, orientation)
        };
    }

    let (pitch_x, pitch_z) = orientation.effective(box_length, box_width);
    let layer_length = cols as f64 * pitch_x;
    let layer_width = rows as f64 * pitch_z;
    let start_x = -layer_length / 2.0;
    let start_z = -layer_width / 2.0;

    let mut positions = Vec::with_capacity(items);
    for c in 0..cols {
        let x = start_x + c as f64 * pitch_x + pitch_x / 2.0;
        for r in 0..rows {
            let z = start_z + r as f64 * pitch_z + pitch_z / 2.0;
            positions.push(FootprintPosition::new(x, z, orientation));
        }
    }

    LayerPattern {
        id,
        orientation,
        cols,
        rows,
        items,
        positions,
        layer_length,
        layer_width,
    }
}

/// Fits the best of the two axis-aligned grids onto the pallet.
pub fn fit_layer(
    box_length: f64,
    box_width: f64,
    pallet_length: f64,
    pallet_width: f64,
    id: PatternId,
) -> LayerPattern {
    let (cols1, rows1) = grid_dimensions(
        box_length,
        box_width,
        pallet_length,
        pallet_width,
        Orientation::Normal,
    );
    let (cols2, rows2) = grid_dimensions(
        box_length,
        box_width,
        pallet_length,
        pallet_width,
        Orientation::Rotated,
    );

    let count_normal = grid_items(cols1, rows1).unwrap_or(0);
    let count_rotated = grid_items(cols2, rows2).unwrap_or(0);
    let orientation = if count_normal >= count_rotated {
        Orientation::Normal
    } else {
        Orientation::Rotated
    };

    log::debug!(
        "Layer {}: normal {}x{}={}, rotated {}x{}={}, chose {:?}",
        id,
        cols1,
        rows1,
        count_normal,
        cols2,
        rows2,
        count_rotated,
        orientation
    );

    grid_for(
        box_length,
        box_width,
        pallet_length,
        pallet_width,
        orientation,
        id,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_grid_count() {
        assert_eq!(grid_count(1180.0, 400.0), 2);
        assert_eq!(grid_count(1200.0, 400.0), 3);
        assert_eq!(grid_count(300.0, 400.0), 0);
        assert_eq!(grid_count(1180.0, 0.0), 0);
        assert_eq!(grid_count(1180.0, -5.0), 0);
        assert_eq!(grid_count(f64::NAN, 10.0), 0);
        assert_eq!(grid_count(1180.0, f64::INFINITY), 0);
    }

    #[test]
    fn test_tie_prefers_normal() {
        let layer = fit_layer(400.0, 300.0, 1180.0, 980.0, PatternId::A);
        assert_eq!(layer.orientation, Orientation::Normal);
        assert_eq!((layer.cols, layer.rows), (2, 3));
        assert_eq!(layer.items, 6);
        assert_relative_eq!(layer.layer_length, 800.0);
        assert_relative_eq!(layer.layer_width, 900.0);
    }

    #[test]
    fn test_rotation_wins_when_better() {
        // 500x300 on 1000x600: normal 2x2 = 4, rotated 3x1 = 3
        let layer = fit_layer(500.0, 300.0, 1000.0, 600.0, PatternId::A);
        assert_eq!(layer.orientation, Orientation::Normal);

        // box 300x500: normal 3x1 = 3, rotated 2x2 = 4 -> rotated
        let layer = fit_layer(300.0, 500.0, 1000.0, 600.0, PatternId::A);
        assert_eq!(layer.orientation, Orientation::Rotated);
        assert_eq!(layer.items, 4);
        assert!(layer.positions.iter().all(|p| p.rotated));
        assert_relative_eq!(layer.layer_length, 1000.0);
        assert_relative_eq!(layer.layer_width, 600.0);
    }

    #[test]
    fn test_positions_centered_column_major() {
        let layer = fit_layer(400.0, 300.0, 1180.0, 980.0, PatternId::A);
        let first = layer.positions[0];
        assert_relative_eq!(first.x, -200.0);
        assert_relative_eq!(first.z, -300.0);

        // second entry walks along the row axis first
        let second = layer.positions[1];
        assert_relative_eq!(second.x, -200.0);
        assert_relative_eq!(second.z, 0.0);

        let sum_x: f64 = layer.positions.iter().map(|p| p.x).sum();
        let sum_z: f64 = layer.positions.iter().map(|p| p.z).sum();
        assert_relative_eq!(sum_x, 0.0, epsilon = 1e-9);
        assert_relative_eq!(sum_z, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_oversized_box_is_empty() {
        let layer = fit_layer(1300.0, 1300.0, 1180.0, 980.0, PatternId::A);
        assert!(layer.is_empty());
        assert!(layer.positions.is_empty());
        assert_eq!(layer.orientation, Orientation::Normal);
        assert_eq!(layer.layer_length, 0.0);
        assert_eq!(layer.layer_width, 0.0);
    }

    #[test]
    fn test_one_axis_fits_is_still_empty() {
        // 1000 fits along 1180 once but not along 980
        let layer = grid_for(1000.0, 1000.0, 1180.0, 980.0, Orientation::Normal, PatternId::A);
        assert_eq!(layer.cols, 1);
        assert_eq!(layer.rows, 0);
        assert_eq!(layer.items, 0);
        assert!(layer.positions.is_empty());
    }

    #[test]
    fn test_overflowing_grid_is_empty() {
        assert_eq!(grid_items(usize::MAX, 2), None);
        assert_eq!(grid_items(3, 4), Some(12));
        assert_eq!(grid_items(usize::MAX / 4, 1), None);

        let layer = fit_layer(1e-10, 1e-10, 1180.0, 980.0, PatternId::A);
        assert!(layer.is_empty());
        assert!(layer.positions.is_empty());

        let forced = grid_for(1e-10, 1e-10, 1180.0, 980.0, Orientation::Rotated, PatternId::B);
        assert!(forced.is_empty());
    }
}
