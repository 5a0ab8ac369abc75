//! Planner trait and packing policy.

use crate::geometry::{MaterialData, PalletConfig};
use crate::result::CalculationResult;
use crate::Result;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Heuristic thresholds steering layer selection.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct PackingPolicy {
    /// Minimum share of pattern A's item count an alternate pattern must
    /// reach to be kept. Equality keeps the alternate.
    pub min_complement_ratio: f64,

    /// Whether an alternate pattern is attempted at all.
    pub cross_stacking: bool,
}

impl PackingPolicy {
    /// An alternate layer may give up at most 15% of pattern A's boxes.
    pub const DEFAULT_MIN_COMPLEMENT_RATIO: f64 = 0.85;

    /// Creates a policy with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the minimum complement ratio.
    pub fn with_min_complement_ratio(mut self, ratio: f64) -> Self {
        self.min_complement_ratio = ratio;
        self
    }

    /// Enables or disables cross-stacking.
    pub fn with_cross_stacking(mut self, enabled: bool) -> Self {
        self.cross_stacking = enabled;
        self
    }

    /// Returns true if an alternate layer holding `candidate` boxes should be
    /// kept next to a primary layer holding `primary` boxes.
    pub fn keeps_complement(&self, candidate: usize, primary: usize) -> bool {
        self.cross_stacking
            && candidate > 0
            && candidate as f64 >= primary as f64 * self.min_complement_ratio
    }
}

impl Default for PackingPolicy {
    fn default() -> Self {
        Self {
            min_complement_ratio: Self::DEFAULT_MIN_COMPLEMENT_RATIO,
            cross_stacking: true,
        }
    }
}

/// Computes load plans for a single box type on a single pallet.
///
/// Implementations are pure: the same inputs always yield an equal plan.
pub trait Planner {
    /// Plans the load. Degenerate inputs produce an empty plan.
    fn plan(&self, material: &MaterialData, pallet: &PalletConfig) -> CalculationResult;

    /// Validates both inputs, then plans the load.
    fn try_plan(
        &self,
        material: &MaterialData,
        pallet: &PalletConfig,
    ) -> Result<CalculationResult> {
        material.validate()?;
        pallet.validate()?;
        Ok(self.plan(material, pallet))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy() {
        let policy = PackingPolicy::default();
        assert_eq!(policy.min_complement_ratio, 0.85);
        assert!(policy.cross_stacking);
    }

    #[test]
    fn test_threshold_boundary() {
        let policy = PackingPolicy::default();
        // 17 / 20 = 0.85 exactly
        assert!(policy.keeps_complement(17, 20));
        assert!(!policy.keeps_complement(16, 20));
        assert!(!policy.keeps_complement(0, 0));
    }

    #[test]
    fn test_disabled_cross_stacking() {
        let policy = PackingPolicy::new().with_cross_stacking(false);
        assert!(!policy.keeps_complement(20, 20));
    }
}
