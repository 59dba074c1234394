//! Generation parameters with the ranges the viewer exposes.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::api::NoiseError;

pub const SCALE_RANGE: RangeInclusive<f64> = 0.001..=1.0;
pub const OCTAVES_RANGE: RangeInclusive<u32> = 1..=10;
pub const PERSISTENCE_RANGE: RangeInclusive<f64> = 0.1..=5.0;
pub const SEED_RANGE: RangeInclusive<u32> = 1..=16;

/// Everything one regenerate call needs besides the engine itself.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoiseParameters {
    /// Noise-space distance between neighbouring pixels.
    pub scale: f64,
    pub octaves: u32,
    /// Amplitude multiplier applied per octave.
    pub persistence: f64,
    pub seed: u32,
}

impl Default for NoiseParameters {
    fn default() -> Self {
        Self {
            scale: 0.1,
            octaves: 4,
            persistence: 0.75,
            seed: 1,
        }
    }
}

impl NoiseParameters {
    /// Rejects values the sampler cannot give a meaningful image for. The
    /// sampler itself never fails, so this is for input boundaries.
    pub fn validate(&self) -> Result<(), NoiseError> {
        if !(self.scale.is_finite() && self.scale > 0.0) {
            return Err(NoiseError::InvalidParameter { name: "scale", value: self.scale });
        }
        if self.octaves == 0 {
            return Err(NoiseError::InvalidParameter { name: "octaves", value: 0.0 });
        }
        if !(self.persistence.is_finite() && self.persistence > 0.0) {
            return Err(NoiseError::InvalidParameter {
                name: "persistence",
                value: self.persistence,
            });
        }
        Ok(())
    }

    /// Copy with every field pulled into its slider range. Non-finite values
    /// fall back to the defaults.
    pub fn clamped(&self) -> Self {
        let defaults = Self::default();
        Self {
            scale: clamp_finite(self.scale, &SCALE_RANGE, defaults.scale),
            octaves: self.octaves.clamp(*OCTAVES_RANGE.start(), *OCTAVES_RANGE.end()),
            persistence: clamp_finite(self.persistence, &PERSISTENCE_RANGE, defaults.persistence),
            seed: self.seed.clamp(*SEED_RANGE.start(), *SEED_RANGE.end()),
        }
    }

    pub fn to_ron(&self) -> Result<String, NoiseError> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
            .map_err(|e| NoiseError::Preset(e.to_string()))
    }

    /// Parses a preset. Missing fields take their defaults; the result is
    /// validated but not clamped.
    pub fn from_ron(s: &str) -> Result<Self, NoiseError> {
        let params: Self = ron::from_str(s).map_err(|e| NoiseError::Preset(e.to_string()))?;
        params.validate()?;
        Ok(params)
    }
}

fn clamp_finite(value: f64, range: &RangeInclusive<f64>, fallback: f64) -> f64 {
    if value.is_finite() {
        value.clamp(*range.start(), *range.end())
    } else {
        fallback
    }
}
