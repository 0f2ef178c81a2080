//! User settings read from `settings.json`.

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use sliding_choices::ChoicesConfig;

use crate::error::SettingsError;
use crate::paths;

/// Settings with defaults for every missing key.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Apply indicator slides instantly.
    pub reduced_motion: bool,
    /// Redraw rate while an indicator is sliding.
    pub animation_fps: u16,
    /// Length of an indicator slide in milliseconds.
    pub slide_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            reduced_motion: false,
            animation_fps: 30,
            slide_ms: 1500,
        }
    }
}

impl Settings {
    /// Load from the platform config directory.
    ///
    /// A missing file yields the defaults; a broken one is an error.
    pub fn load() -> Result<Self, SettingsError> {
        match paths::settings_file() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Widget configuration derived from these settings.
    pub fn choices_config(&self) -> ChoicesConfig {
        let defaults = ChoicesConfig::default();
        ChoicesConfig::new()
            .slide(Duration::from_millis(self.slide_ms), defaults.slide.easing)
            .reduced_motion(self.reduced_motion)
    }

    /// Interval between redraws while animating.
    pub fn frame_duration(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.animation_fps.max(1)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{ "reduced_motion": true }"#).unwrap();

        let settings = Settings::load_from(&path).unwrap();
        assert!(settings.reduced_motion);
        assert_eq!(settings.animation_fps, 30);
        assert_eq!(settings.slide_ms, 1500);
    }

    #[test]
    fn invalid_json_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{ not json").unwrap();

        assert!(matches!(
            Settings::load_from(&path),
            Err(SettingsError::Parse(_))
        ));
    }

    #[test]
    fn choices_config_uses_slide_and_motion() {
        let settings = Settings {
            reduced_motion: true,
            animation_fps: 60,
            slide_ms: 250,
        };
        let config = settings.choices_config();
        assert_eq!(config.slide.duration, Duration::from_millis(250));
        assert!(config.reduced_motion);
    }

    #[test]
    fn zero_fps_does_not_divide_by_zero() {
        let settings = Settings {
            animation_fps: 0,
            ..Settings::default()
        };
        assert_eq!(settings.frame_duration(), Duration::from_secs(1));
    }
}
