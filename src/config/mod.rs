//! Scan configuration and JSON persistence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Top-level scan configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Stripe pattern generation.
    pub pattern: PatternSettings,
    /// Camera capture input.
    pub captures: CaptureSettings,
    /// Binarization and column decoding.
    pub decode: DecodeSettings,
    /// Camera/projector geometry.
    pub rig: RigSettings,
    /// Point cloud output.
    pub cloud: CloudSettings,
}

/// Stripe pattern generation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatternSettings {
    /// Side length of the square patterns in pixels.
    pub size: u32,
    /// Number of frequency levels (and capture frames).
    pub levels: u32,
    /// Directory the pattern PNGs are written to.
    pub output_dir: PathBuf,
}

impl Default for PatternSettings {
    fn default() -> Self {
        Self {
            size: 1024,
            levels: 7,
            output_dir: PathBuf::from("output"),
        }
    }
}

/// Camera capture input settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptureSettings {
    /// Directory holding the capture frames.
    pub dir: PathBuf,
    /// Filename stem; frames are `<stem>_1.png` .. `<stem>_N.png`.
    pub stem: String,
}

impl Default for CaptureSettings {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("captures"),
            stem: "capture".to_string(),
        }
    }
}

/// Binarization and decoding settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecodeSettings {
    /// Minimum per-pixel luminance contrast for a decode to count
    /// (0 disables the contrast test).
    pub contrast_threshold: f32,
}

impl Default for DecodeSettings {
    fn default() -> Self {
        Self {
            contrast_threshold: 0.05,
        }
    }
}

/// Camera/projector rig geometry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RigSettings {
    /// Vertical field of view shared by camera and projector, degrees.
    pub fov_y_degrees: f32,
    /// Near clip plane distance.
    pub near: f32,
    /// Far clip plane distance.
    pub far: f32,
    /// Projector translation along X relative to the camera.
    pub projector_offset_x: f32,
    /// Projector yaw about Y relative to the camera, degrees.
    pub projector_yaw_degrees: f32,
}

impl Default for RigSettings {
    fn default() -> Self {
        Self {
            fov_y_degrees: 50.0,
            near: 0.1,
            far: 100.0,
            projector_offset_x: -0.2,
            projector_yaw_degrees: -10.0,
        }
    }
}

/// Point cloud output settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CloudSettings {
    /// Path of the .xyz point cloud.
    pub output_path: PathBuf,
    /// Points with any coordinate outside [-bound, bound] are discarded.
    pub bound: f32,
    /// Whether to write bit plane / column map / depth map rasters.
    pub debug_images: bool,
    /// Directory the debug rasters are written to.
    pub debug_dir: PathBuf,
}

impl Default for CloudSettings {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from("out.xyz"),
            bound: 10.0,
            debug_images: true,
            debug_dir: PathBuf::from("debug"),
        }
    }
}

impl ScanConfig {
    /// Save as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        log::info!("Saved scan config to {:?}", path);
        Ok(())
    }

    /// Load from a JSON file.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&contents)?;
        log::info!("Loaded scan config from {:?}", path);
        Ok(config)
    }

    /// Load `path` when it exists, otherwise fall back to defaults.
    pub fn load_or_default(path: &Path) -> anyhow::Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            log::info!("No config at {:?}, using defaults", path);
            Ok(Self::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reference_rig() {
        let config = ScanConfig::default();
        assert_eq!(config.pattern.size, 1024);
        assert_eq!(config.pattern.levels, 7);
        assert_eq!(config.decode.contrast_threshold, 0.05);
        assert_eq!(config.rig.fov_y_degrees, 50.0);
        assert_eq!(config.rig.projector_offset_x, -0.2);
        assert_eq!(config.rig.projector_yaw_degrees, -10.0);
        assert_eq!(config.cloud.bound, 10.0);
    }

    #[test]
    fn test_json_roundtrip() {
        let mut config = ScanConfig::default();
        config.pattern.size = 512;
        config.rig.projector_yaw_degrees = -5.0;

        let json = serde_json::to_string(&config).unwrap();
        let back: ScanConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.pattern.size, 512);
        assert_eq!(back.rig.projector_yaw_degrees, -5.0);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let back: ScanConfig = serde_json::from_str(r#"{"pattern":{"size":256,"levels":5,"output_dir":"out"}}"#).unwrap();
        assert_eq!(back.pattern.size, 256);
        assert_eq!(back.captures.stem, "capture");
        assert_eq!(back.cloud.bound, 10.0);
    }

    #[test]
    fn test_load_or_default_without_file() {
        let missing = std::env::temp_dir().join("structlight_missing_config.json");
        let _ = std::fs::remove_file(&missing);
        let config = ScanConfig::load_or_default(&missing).unwrap();
        assert_eq!(config.pattern.levels, 7);
    }

    #[test]
    fn test_save_and_load() {
        let path = std::env::temp_dir().join(format!(
            "structlight_config_{}.json",
            std::process::id()
        ));

        let mut config = ScanConfig::default();
        config.captures.stem = "scene".to_string();
        config.save(&path).unwrap();

        let back = ScanConfig::load(&path).unwrap();
        assert_eq!(back.captures.stem, "scene");

        let _ = std::fs::remove_file(&path);
    }
}
