//! Vertical stacking and plan statistics.

use palletizer_core::{
    BoxPosition, CalculationResult, LayerAssignment, LayerPattern, MaterialData, PalletConfig,
};
use std::mem::size_of;

/// Number of whole box layers fitting under the load ceiling.
pub fn layer_count(max_load_height: f64, box_height: f64) -> usize {
    crate::grid::grid_count(max_load_height, box_height)
}

/// Element counts for the position and assignment buffers of a stack, or
/// `None` if either count or its byte size overflows.
pub fn stack_capacity(total_layers: usize, per_layer: usize) -> Option<(usize, usize)> {
    let positions = per_layer.checked_mul(total_layers)?;
    let max_bytes = isize::MAX as usize;
    if positions.checked_mul(size_of::<BoxPosition>())? > max_bytes
        || total_layers.checked_mul(size_of::<LayerAssignment>())? > max_bytes
    {
        return None;
    }
    Some((positions, total_layers))
}

/// Picks the pattern for 0-based layer `layer_index`.
///
/// Even layers always use A; odd layers use B when it exists.
pub fn pattern_for_layer<'a>(
    layer_index: usize,
    pattern_a: &'a LayerPattern,
    pattern_b: Option<&'a LayerPattern>,
) -> &'a LayerPattern {
    match pattern_b {
        Some(b) if layer_index % 2 == 1 => b,
        _ => pattern_a,
    }
}

/// Stacks layers of A (and B on odd layers) up to the load ceiling.
///
/// Boxes sit directly on the pallet deck: the center of layer `i` is at
/// `i * h + h / 2 + pallet.height`. A stack too large to address degrades to
/// an empty plan.
pub fn stack_layers(
    material: &MaterialData,
    pallet: &PalletConfig,
    pattern_a: LayerPattern,
    pattern_b: Option<LayerPattern>,
) -> CalculationResult {
    let box_height = material.height;
    let total_layers = layer_count(pallet.max_load_height, box_height);

    log::debug!(
        "Stacking {} layers of {} mm under a {} mm ceiling",
        total_layers,
        box_height,
        pallet.max_load_height
    );

    let per_layer_max = pattern_a
        .items
        .max(pattern_b.as_ref().map(|b| b.items).unwrap_or_default());
    let Some((position_capacity, layer_capacity)) = stack_capacity(total_layers, per_layer_max)
    else {
        log::warn!(
            "{} layers of {} boxes for '{}' overflow the plan, returning an empty plan",
            total_layers,
            per_layer_max,
            material.name
        );
        return CalculationResult::empty(material.clone(), pattern_a);
    };

    let mut positions = Vec::with_capacity(position_capacity);
    let mut layer_assignments = Vec::with_capacity(layer_capacity);
    let mut total_items = 0;

    for i in 0..total_layers {
        let layer = pattern_for_layer(i, &pattern_a, pattern_b.as_ref());
        let y = i as f64 * box_height + box_height / 2.0 + pallet.height;

        layer_assignments.push(LayerAssignment {
            layer_index: i + 1,
            pattern_id: layer.id,
            height: (i + 1) as f64 * box_height,
            item_count: layer.items,
        });

        positions.extend(
            layer
                .positions
                .iter()
                .map(|fp| BoxPosition::from_footprint(fp, y, i)),
        );
        total_items += layer.items;
    }

    let stack_height = total_layers as f64 * box_height;
    let load_volume = pallet.footprint_area() * stack_height;
    let volume_utilization = if load_volume > 0.0 {
        total_items as f64 * material.volume() / load_volume * 100.0
    } else {
        0.0
    };

    let pallet_area = pallet.footprint_area();
    let area_utilization = if pallet_area > 0.0 {
        pattern_a.area() / pallet_area * 100.0
    } else {
        0.0
    };

    let mut unique_patterns = vec![pattern_a];
    unique_patterns.extend(pattern_b);

    CalculationResult {
        material: material.clone(),
        total_items,
        total_layers,
        volume_utilization,
        area_utilization,
        positions,
        stack_height,
        unique_patterns,
        layer_assignments,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{fit_layer, grid_for};
    use approx::assert_relative_eq;
    use palletizer_core::{LayerColor, Orientation, PatternId};

    fn standard_patterns() -> (LayerPattern, LayerPattern) {
        let a = fit_layer(400.0, 300.0, 1180.0, 980.0, PatternId::A);
        let b = grid_for(400.0, 300.0, 1180.0, 980.0, Orientation::Rotated, PatternId::B);
        (a, b)
    }

    #[test]
    fn test_layer_count() {
        assert_eq!(layer_count(1350.0, 100.0), 13);
        assert_eq!(layer_count(1350.0, 1350.0), 1);
        assert_eq!(layer_count(1350.0, 1400.0), 0);
        assert_eq!(layer_count(0.0, 100.0), 0);
    }

    #[test]
    fn test_alternation() {
        let (a, b) = standard_patterns();
        assert_eq!(pattern_for_layer(0, &a, Some(&b)).id, PatternId::A);
        assert_eq!(pattern_for_layer(1, &a, Some(&b)).id, PatternId::B);
        assert_eq!(pattern_for_layer(2, &a, Some(&b)).id, PatternId::A);
        assert_eq!(pattern_for_layer(1, &a, None).id, PatternId::A);
    }

    #[test]
    fn test_stack_with_alternate() {
        let material = MaterialData::new("M1", 400.0, 300.0, 100.0);
        let pallet = PalletConfig::standard();
        let (a, b) = standard_patterns();

        let result = stack_layers(&material, &pallet, a, Some(b));

        assert_eq!(result.total_layers, 13);
        assert_eq!(result.total_items, 78);
        assert_eq!(result.positions.len(), 78);
        assert_eq!(result.layer_assignments.len(), 13);
        assert_eq!(result.unique_patterns.len(), 2);
        assert_relative_eq!(result.stack_height, 1300.0);

        let second = result.layer_assignments[1];
        assert_eq!(second.layer_index, 2);
        assert_eq!(second.pattern_id, PatternId::B);
        assert_relative_eq!(second.height, 200.0);
        assert_eq!(second.item_count, 6);

        // 78 * 12e6 / (1180 * 980 * 1300) * 100
        assert_relative_eq!(
            result.volume_utilization,
            78.0 * 12_000_000.0 / (1180.0 * 980.0 * 1300.0) * 100.0,
            epsilon = 1e-9
        );
        assert_relative_eq!(
            result.area_utilization,
            800.0 * 900.0 / (1180.0 * 980.0) * 100.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_vertical_positions_include_deck() {
        let material = MaterialData::new("M1", 400.0, 300.0, 100.0);
        let pallet = PalletConfig::standard();
        let (a, b) = standard_patterns();

        let result = stack_layers(&material, &pallet, a, Some(b));

        let bottom = &result.positions[0];
        assert_relative_eq!(bottom.y, 200.0);
        assert_eq!(bottom.layer_index, 0);
        assert_eq!(bottom.color, LayerColor::Even);
        assert!(!bottom.rotated);

        let second = result.positions.iter().find(|p| p.layer_index == 1).unwrap();
        assert_relative_eq!(second.y, 300.0);
        assert_eq!(second.color, LayerColor::Odd);
        assert!(second.rotated);
    }

    #[test]
    fn test_box_taller_than_ceiling() {
        let material = MaterialData::new("M1", 400.0, 300.0, 1400.0);
        let pallet = PalletConfig::standard();
        let (a, b) = standard_patterns();

        let result = stack_layers(&material, &pallet, a, Some(b));

        assert_eq!(result.total_layers, 0);
        assert_eq!(result.total_items, 0);
        assert_eq!(result.stack_height, 0.0);
        assert_eq!(result.volume_utilization, 0.0);
        assert!(result.layer_assignments.is_empty());
        assert!(result.positions.is_empty());
    }

    #[test]
    fn test_stack_capacity() {
        assert_eq!(stack_capacity(13, 6), Some((78, 13)));
        assert_eq!(stack_capacity(usize::MAX / 2, 6), None);
        assert_eq!(stack_capacity(usize::MAX / 2, 0), None);
    }

    #[test]
    fn test_unaddressable_stack_is_empty() {
        let material = MaterialData::new("M1", 400.0, 300.0, 1e-16);
        let pallet = PalletConfig::standard();
        let (a, b) = standard_patterns();

        let result = stack_layers(&material, &pallet, a, Some(b));

        assert!(result.is_empty());
        assert_eq!(result.total_layers, 0);
        assert!(result.layer_assignments.is_empty());
        assert_eq!(result.unique_patterns.len(), 1);
    }
}
