//! Pallet load planner.

use crate::complement::complement_layer;
use crate::grid::{fit_layer, grid_dimensions, grid_items};
use crate::stacking::stack_layers;
use palletizer_core::{
    CalculationResult, LayerPattern, MaterialData, Orientation, PackingPolicy, PalletConfig,
    PatternId, Planner,
};

/// Plans uniform box loads with an optional cross-stacked alternate layer.
#[derive(Debug, Clone, Default)]
pub struct PalletPacker {
    policy: PackingPolicy,
}

impl PalletPacker {
    /// Creates a packer with the given policy.
    pub fn new(policy: PackingPolicy) -> Self {
        Self { policy }
    }

    /// Creates a packer with the default policy.
    pub fn default_config() -> Self {
        Self::new(PackingPolicy::default())
    }

    /// Returns the policy in use.
    pub fn policy(&self) -> &PackingPolicy {
        &self.policy
    }

    /// Whether either orientation's grid is too large to enumerate.
    fn grid_overflows(material: &MaterialData, pallet: &PalletConfig) -> bool {
        [Orientation::Normal, Orientation::Rotated]
            .into_iter()
            .any(|orientation| {
                let (cols, rows) = grid_dimensions(
                    material.length,
                    material.width,
                    pallet.length,
                    pallet.width,
                    orientation,
                );
                grid_items(cols, rows).is_none()
            })
    }

    /// Patterns A and, if kept, B for a box on a pallet footprint.
    pub fn layer_patterns(
        &self,
        material: &MaterialData,
        pallet: &PalletConfig,
    ) -> (LayerPattern, Option<LayerPattern>) {
        let pattern_a = fit_layer(
            material.length,
            material.width,
            pallet.length,
            pallet.width,
            PatternId::A,
        );
        let pattern_b = complement_layer(
            &pattern_a,
            material.length,
            material.width,
            pallet.length,
            pallet.width,
            &self.policy,
        );
        (pattern_a, pattern_b)
    }
}

impl Planner for PalletPacker {
    fn plan(&self, material: &MaterialData, pallet: &PalletConfig) -> CalculationResult {
        if !material.is_usable() || !pallet.is_usable() {
            log::warn!(
                "Unusable dimensions for '{}' on '{}', returning an empty plan",
                material.name,
                pallet.name
            );
            return CalculationResult::empty(
                material.clone(),
                LayerPattern::empty(PatternId::A, Orientation::Normal),
            );
        }

        if Self::grid_overflows(material, pallet) {
            log::warn!(
                "Footprint of '{}' is too small to grid on '{}', returning an empty plan",
                material.name,
                pallet.name
            );
            return CalculationResult::empty(
                material.clone(),
                LayerPattern::empty(PatternId::A, Orientation::Normal),
            );
        }

        let (pattern_a, pattern_b) = self.layer_patterns(material, pallet);
        stack_layers(material, pallet, pattern_a, pattern_b)
    }
}

/// Plans a load with the default policy.
pub fn calculate_pallet(material: &MaterialData, pallet: &PalletConfig) -> CalculationResult {
    PalletPacker::default_config().plan(material, pallet)
}
