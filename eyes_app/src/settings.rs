//! Demo configuration

use gaze_engine::animation::DEFAULT_SPEED;
use gaze_engine::config::{Config, ConfigError};
use gaze_engine::foundation::math::{Color3, Vec3};
use gaze_engine::gaze::{EyeStyle, FlyStyle};
use gaze_engine::scene::{CameraDesc, LightDesc};
use gaze_engine::EngineConfig;
use serde::{Deserialize, Serialize};

/// One pair of eyes in the scene
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EyePairConfig {
    /// Iris color
    pub color: Color3,
    /// Midpoint between the two eyes
    pub center: Vec3,
}

impl EyePairConfig {
    fn new(color: Color3, center: Vec3) -> Self {
        Self { color, center }
    }
}

/// Everything the demo scene can be tuned with
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Tick loop and logging
    pub engine: EngineConfig,
    /// Orbit speed multiplier of the fly
    pub speed: f32,
    /// Log where the eyes look every this many ticks; 0 disables the report
    pub report_every: u64,
    /// Scene camera
    pub camera: CameraDesc,
    /// Scene light
    pub light: LightDesc,
    /// Proportions shared by all eyes
    pub eye_style: EyeStyle,
    /// The fly
    pub fly: FlyStyle,
    /// Eye pairs, in creation order
    pub eye_pairs: Vec<EyePairConfig>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            engine: EngineConfig::default(),
            speed: DEFAULT_SPEED,
            report_every: 60,
            camera: CameraDesc::default(),
            light: LightDesc::default(),
            eye_style: EyeStyle::default(),
            fly: FlyStyle::default(),
            eye_pairs: vec![
                EyePairConfig::new(Color3::new(0.0, 0.85, 1.0), Vec3::new(0.0, 0.0, 0.0)),
                EyePairConfig::new(Color3::new(0.0, 1.0, 0.58), Vec3::new(-10.0, 5.0, 10.0)),
                EyePairConfig::new(Color3::new(0.6, 0.85, 1.0), Vec3::new(4.0, 4.0, 4.0)),
                EyePairConfig::new(Color3::new(0.6, 0.44, 0.6), Vec3::new(-3.0, -3.0, -3.0)),
            ],
        }
    }
}

impl Config for DemoConfig {}

impl DemoConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.engine.validate()?;

        if !self.speed.is_finite() || self.speed < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "speed must be a non-negative number, got {}",
                self.speed
            )));
        }

        let invalid = |e: gaze_engine::scene::SceneError| ConfigError::Invalid(e.to_string());
        self.eye_style.validate().map_err(invalid)?;
        self.light.validate().map_err(invalid)?;

        for (index, pair) in self.eye_pairs.iter().enumerate() {
            if !pair.color.is_normalized() {
                return Err(ConfigError::Invalid(format!(
                    "eye pair {index} has color outside [0, 1]: {:?}",
                    pair.color
                )));
            }
        }
        if !self.fly.color.is_normalized() {
            return Err(ConfigError::Invalid(format!(
                "fly color outside [0, 1]: {:?}",
                self.fly.color
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_path(file: &str) -> PathBuf {
        std::env::temp_dir().join(format!("eyes_app_{}_{file}", std::process::id()))
    }

    #[test]
    fn test_default_matches_original_scene() {
        let config = DemoConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.eye_pairs.len(), 4);
        assert_eq!(config.eye_pairs[1].center, Vec3::new(-10.0, 5.0, 10.0));
        assert_eq!(config.speed, 0.3);
        assert_eq!(config.engine.tick_rate, 60.0);
        assert_eq!(config.engine.max_ticks, None);
        assert_eq!(config.camera.position, Vec3::new(0.0, 0.0, -20.0));
    }

    #[test]
    fn test_bundled_config_loads() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/config/eyes.toml");
        let config = DemoConfig::load_from_file(path).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.eye_pairs, DemoConfig::default().eye_pairs);
        assert_eq!(config.light, LightDesc::default());
    }

    #[test]
    fn test_toml_and_ron_roundtrip() {
        let mut config = DemoConfig::default();
        config.engine.max_ticks = Some(600);
        config.speed = 0.5;

        for file in ["demo.toml", "demo.ron"] {
            let path = temp_path(file);
            config.save_to_file(&path).unwrap();
            let loaded = DemoConfig::load_from_file(&path).unwrap();
            std::fs::remove_file(&path).ok();
            assert_eq!(loaded, config, "roundtrip through {file}");
        }
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let path = temp_path("partial.toml");
        std::fs::write(&path, "speed = 1.5\n\n[engine]\nmax_ticks = 120\n").unwrap();
        let config = DemoConfig::load_from_file(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(config.speed, 1.5);
        assert_eq!(config.engine.max_ticks, Some(120));
        assert_eq!(config.engine.tick_rate, 60.0);
        assert_eq!(config.eye_pairs.len(), 4);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let negative_speed = DemoConfig {
            speed: -0.1,
            ..DemoConfig::default()
        };
        assert!(matches!(negative_speed.validate(), Err(ConfigError::Invalid(_))));

        let mut flat_eyes = DemoConfig::default();
        flat_eyes.eye_style.radius = 0.0;
        assert!(flat_eyes.validate().is_err());

        let mut neon = DemoConfig::default();
        neon.eye_pairs[2].color = Color3::new(0.0, 2.0, 0.0);
        assert!(neon.validate().is_err());

        let mut frozen = DemoConfig::default();
        frozen.engine.tick_rate = 0.0;
        assert!(frozen.validate().is_err());
    }
}
