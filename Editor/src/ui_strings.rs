use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_STRINGS_PATH: &str = "ui_strings.json";

#[derive(Debug, Serialize, Deserialize, Clone, Default, Resource)]
#[serde(default)]
pub struct UiStrings {
    pub app: AppStrings,
    pub controls: ControlStrings,
    pub preview: PreviewStrings,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct AppStrings {
    pub window_title: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ControlStrings {
    pub title: String,
    pub scale: String,
    pub octaves: String,
    pub persistence: String,
    pub seed: String,
    pub reset: String,
    pub copy_preset: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct PreviewStrings {
    pub title: String,
    pub resolution: String,
    pub empty: String,
}

impl Default for AppStrings {
    fn default() -> Self {
        Self {
            window_title: "Perlin Noise Generator".to_string(),
        }
    }
}

impl Default for ControlStrings {
    fn default() -> Self {
        Self {
            title: "Perlin Noise Parameters".to_string(),
            scale: "Scale".to_string(),
            octaves: "Octaves".to_string(),
            persistence: "Persistence".to_string(),
            seed: "Seed".to_string(),
            reset: "Reset".to_string(),
            copy_preset: "Copy preset".to_string(),
        }
    }
}

impl Default for PreviewStrings {
    fn default() -> Self {
        Self {
            title: "Preview".to_string(),
            resolution: "Resolution".to_string(),
            empty: "Nothing to show yet".to_string(),
        }
    }
}

pub fn load_from_file(path: &str) -> anyhow::Result<UiStrings> {
    let s = std::fs::read_to_string(path)?;
    let ui: UiStrings = serde_json::from_str(&s)?;
    Ok(ui)
}

/// Built-in English unless `path` exists and parses.
pub fn load_or_default(path: &str) -> UiStrings {
    if !Path::new(path).exists() {
        return UiStrings::default();
    }
    match load_from_file(path) {
        Ok(strings) => {
            info!("Loaded UI strings from {}", path);
            strings
        }
        Err(e) => {
            warn!("Failed to load UI strings '{}': {}", path, e);
            UiStrings::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_other_defaults() {
        let ui: UiStrings = serde_json::from_str(r#"{ "controls": { "scale": "Zoom" } }"#).unwrap();
        assert_eq!(ui.controls.scale, "Zoom");
        assert_eq!(ui.controls.octaves, "Octaves");
        assert_eq!(ui.app.window_title, "Perlin Noise Generator");
    }

    #[test]
    fn missing_file_falls_back() {
        let ui = load_or_default("definitely/not/here/ui_strings.json");
        assert_eq!(ui.controls.seed, "Seed");
    }
}
