//! Start-up configuration read from `viewer.ron`.

use bevy::prelude::*;
use perlin_engine::NoiseParameters;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_CONFIG_PATH: &str = "viewer.ron";

/// Largest accepted image side; keeps one regenerate inside a frame or two.
pub const MAX_IMAGE_SIDE: u32 = 2048;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub width: u32,
    pub height: u32,
    pub params: NoiseParameters,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            width: 256,
            height: 256,
            params: NoiseParameters::default(),
        }
    }
}

impl ViewerConfig {
    /// Image size within `1..=MAX_IMAGE_SIDE`, parameters within slider ranges.
    pub fn sanitized(self) -> Self {
        Self {
            width: self.width.clamp(1, MAX_IMAGE_SIDE),
            height: self.height.clamp(1, MAX_IMAGE_SIDE),
            params: self.params.clamped(),
        }
    }
}

pub fn load_from_file(path: &str) -> anyhow::Result<ViewerConfig> {
    let s = std::fs::read_to_string(path)?;
    let config: ViewerConfig = ron::from_str(&s)?;
    Ok(config.sanitized())
}

/// Defaults when `path` is absent; a file that fails to parse is reported and
/// also replaced by defaults.
pub fn load_or_default(path: &str) -> ViewerConfig {
    if !Path::new(path).exists() {
        info!("No viewer config at {}, using defaults", path);
        return ViewerConfig::default();
    }
    match load_from_file(path) {
        Ok(config) => {
            info!("Loaded viewer config from {}", path);
            config
        }
        Err(e) => {
            warn!("Failed to load viewer config '{}': {}", path, e);
            ViewerConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_partial_ron() {
        let config: ViewerConfig = ron::from_str("(width: 128, params: (octaves: 7))").unwrap();
        assert_eq!(config.width, 128);
        assert_eq!(config.height, 256);
        assert_eq!(config.params.octaves, 7);
        assert_eq!(config.params.scale, 0.1);
    }

    #[test]
    fn sanitized_clamps_size_and_params() {
        let config = ViewerConfig {
            width: 0,
            height: 100_000,
            params: NoiseParameters { octaves: 50, seed: 0, ..Default::default() },
        }
        .sanitized();
        assert_eq!((config.width, config.height), (1, MAX_IMAGE_SIDE));
        assert_eq!(config.params.octaves, 10);
        assert_eq!(config.params.seed, 1);
    }

    #[test]
    fn missing_file_gives_defaults() {
        assert_eq!(load_or_default("no/such/dir/viewer.ron"), ViewerConfig::default());
    }
}
