//! Input records: the box being loaded and the pallet it is loaded onto.

use crate::error::is_usable_dimension;
use crate::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Orientation of a box footprint relative to the pallet axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Orientation {
    /// Box length runs parallel to the pallet length.
    #[default]
    Normal,
    /// Box turned 90° about the vertical axis.
    Rotated,
}

impl Orientation {
    /// Returns the other orientation.
    pub fn opposite(self) -> Self {
        match self {
            Orientation::Normal => Orientation::Rotated,
            Orientation::Rotated => Orientation::Normal,
        }
    }

    /// Returns true for [`Orientation::Rotated`].
    pub fn is_rotated(self) -> bool {
        matches!(self, Orientation::Rotated)
    }

    /// Effective (along pallet length, along pallet width) extents of a box
    /// with the given length and width in this orientation.
    pub fn effective(self, length: f64, width: f64) -> (f64, f64) {
        match self {
            Orientation::Normal => (length, width),
            Orientation::Rotated => (width, length),
        }
    }
}

/// A box type to be loaded. Dimensions are in millimeters.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct MaterialData {
    /// Identifier assigned by whoever ingested the record.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Length (mm).
    pub length: f64,

    /// Width (mm).
    pub width: f64,

    /// Height (mm).
    pub height: f64,
}

impl MaterialData {
    /// Creates a box record. The display name defaults to the id.
    pub fn new(id: impl Into<String>, length: f64, width: f64, height: f64) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            length,
            width,
            height,
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Box volume (mm³).
    pub fn volume(&self) -> f64 {
        self.length * self.width * self.height
    }

    /// Box footprint area (mm²).
    pub fn footprint_area(&self) -> f64 {
        self.length * self.width
    }

    /// Returns true if every dimension is finite and positive.
    pub fn is_usable(&self) -> bool {
        is_usable_dimension(self.length)
            && is_usable_dimension(self.width)
            && is_usable_dimension(self.height)
    }

    /// Checks the positive-dimension precondition.
    pub fn validate(&self) -> Result<()> {
        for (label, value) in [
            ("length", self.length),
            ("width", self.width),
            ("height", self.height),
        ] {
            if !is_usable_dimension(value) {
                return Err(Error::InvalidMaterial(format!(
                    "{} of '{}' must be a positive finite number, got {}",
                    label, self.name, value
                )));
            }
        }
        Ok(())
    }
}

/// Load ceilings offered for the standard pallet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LoadHeightPreset {
    /// 1350 mm of goods.
    #[default]
    Standard,
    /// 700 mm of goods, for half-height loads.
    Low,
}

impl LoadHeightPreset {
    /// All presets, in display order.
    pub const ALL: [LoadHeightPreset; 2] = [LoadHeightPreset::Standard, LoadHeightPreset::Low];

    /// Ceiling in millimeters.
    pub fn max_load_height(self) -> f64 {
        match self {
            LoadHeightPreset::Standard => 1350.0,
            LoadHeightPreset::Low => 700.0,
        }
    }
}

/// Pallet footprint and load ceiling. Dimensions are in millimeters.
///
/// `max_load_height` bounds the stacked goods only. The pallet's own
/// `height` is added underneath as a fixed offset and is not counted
/// against the ceiling.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PalletConfig {
    /// Display name.
    pub name: String,

    /// Footprint length (mm).
    pub length: f64,

    /// Footprint width (mm).
    pub width: f64,

    /// Height of the pallet deck itself (mm).
    pub height: f64,

    /// Maximum cumulative height of the stacked boxes (mm).
    pub max_load_height: f64,
}

impl PalletConfig {
    /// Standard pallet footprint length.
    pub const STANDARD_LENGTH: f64 = 1180.0;
    /// Standard pallet footprint width.
    pub const STANDARD_WIDTH: f64 = 980.0;
    /// Approximate height of a wooden standard pallet.
    pub const STANDARD_DECK_HEIGHT: f64 = 150.0;

    /// Creates a pallet with the given footprint, deck height and ceiling.
    pub fn new(length: f64, width: f64, height: f64, max_load_height: f64) -> Self {
        Self {
            name: format!("Pallet ({} x {})", length, width),
            length,
            width,
            height,
            max_load_height,
        }
    }

    /// The 1180 x 980 pallet with a 1350 mm ceiling.
    pub fn standard() -> Self {
        Self::new(
            Self::STANDARD_LENGTH,
            Self::STANDARD_WIDTH,
            Self::STANDARD_DECK_HEIGHT,
            LoadHeightPreset::Standard.max_load_height(),
        )
        .with_name(format!(
            "Standard pallet ({} x {})",
            Self::STANDARD_LENGTH,
            Self::STANDARD_WIDTH
        ))
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the load ceiling.
    pub fn with_max_load_height(mut self, max_load_height: f64) -> Self {
        self.max_load_height = max_load_height;
        self
    }

    /// Sets the load ceiling from a preset.
    pub fn with_preset(self, preset: LoadHeightPreset) -> Self {
        self.with_max_load_height(preset.max_load_height())
    }

    /// Sets the deck height.
    pub fn with_deck_height(mut self, height: f64) -> Self {
        self.height = height;
        self
    }

    /// Footprint area (mm²).
    pub fn footprint_area(&self) -> f64 {
        self.length * self.width
    }

    /// Returns true if the footprint and ceiling are finite and positive and
    /// the deck height is finite and non-negative.
    pub fn is_usable(&self) -> bool {
        is_usable_dimension(self.length)
            && is_usable_dimension(self.width)
            && is_usable_dimension(self.max_load_height)
            && self.height.is_finite()
            && self.height >= 0.0
    }

    /// Checks the positive-dimension precondition.
    pub fn validate(&self) -> Result<()> {
        for (label, value) in [
            ("length", self.length),
            ("width", self.width),
            ("max load height", self.max_load_height),
        ] {
            if !is_usable_dimension(value) {
                return Err(Error::InvalidPallet(format!(
                    "{} of '{}' must be a positive finite number, got {}",
                    label, self.name, value
                )));
            }
        }

        if !self.height.is_finite() || self.height < 0.0 {
            return Err(Error::InvalidPallet(format!(
                "deck height of '{}' cannot be negative, got {}",
                self.name, self.height
            )));
        }

        Ok(())
    }
}

impl Default for PalletConfig {
    fn default() -> Self {
        Self::standard()
    }
}
