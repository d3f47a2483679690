//! Carousel configuration and its TOML loader.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::constants::*;
use crate::easing::Easing;
use crate::transition::TransitionParams;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("scale must be a positive finite number, got {0}")]
    InvalidScale(f32),

    #[error("autoplay duration must be greater than zero")]
    ZeroDuration,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FadeZoomConfig {
    /// Delay before autoplay moves on.
    #[serde(rename = "duration_ms", with = "millis")]
    pub duration: Duration,
    /// Length of one cross-fade.
    #[serde(rename = "transition_duration_ms", with = "millis")]
    pub transition_duration: Duration,
    /// Zoom reached by the outgoing slide at the end of a transition.
    pub scale: f32,
    pub easing: Easing,
    pub autoplay: bool,
    pub infinite: bool,
    pub pause_on_hover: bool,
    pub arrows: bool,
    pub indicators: bool,
    pub default_index: Option<usize>,
    pub css_class: String,
}

impl Default for FadeZoomConfig {
    fn default() -> Self {
        Self {
            duration: DEFAULT_DURATION,
            transition_duration: DEFAULT_TRANSITION_DURATION,
            scale: DEFAULT_SCALE,
            easing: Easing::Linear,
            autoplay: true,
            infinite: true,
            pause_on_hover: true,
            arrows: true,
            indicators: false,
            default_index: None,
            css_class: String::new(),
        }
    }
}

impl FadeZoomConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: FadeZoomConfig = toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(ConfigError::InvalidScale(self.scale));
        }
        if self.duration.is_zero() {
            return Err(ConfigError::ZeroDuration);
        }
        Ok(())
    }

    pub fn transition_params(&self) -> TransitionParams {
        TransitionParams {
            easing: self.easing,
            scale: self.scale,
            duration: self.transition_duration,
        }
    }
}

mod millis {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_match_the_stock_carousel() {
        let config = FadeZoomConfig::default();
        assert_eq!(config.duration, Duration::from_millis(5000));
        assert_eq!(config.transition_duration, Duration::from_millis(1000));
        assert!(config.autoplay && config.infinite && config.pause_on_hover && config.arrows);
        assert!(!config.indicators);
        assert_eq!(config.easing, Easing::Linear);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config: FadeZoomConfig = toml::from_str(
            r#"
            duration_ms = 3000
            easing = "cubic-out"
            infinite = false
            default_index = 2
            "#,
        )
        .unwrap();
        assert_eq!(config.duration, Duration::from_millis(3000));
        assert_eq!(config.easing, Easing::CubicOut);
        assert!(!config.infinite);
        assert_eq!(config.default_index, Some(2));
        assert_eq!(config.transition_duration, DEFAULT_TRANSITION_DURATION);
    }

    #[test]
    fn unknown_easing_is_rejected() {
        assert!(toml::from_str::<FadeZoomConfig>(r#"easing = "bounce""#).is_err());
    }

    #[test]
    fn invalid_values_fail_validation() {
        let config = FadeZoomConfig { scale: 0.0, ..Default::default() };
        assert!(matches!(config.validate(), Err(ConfigError::InvalidScale(_))));

        let config = FadeZoomConfig { scale: f32::NAN, ..Default::default() };
        assert!(matches!(config.validate(), Err(ConfigError::InvalidScale(_))));

        let config = FadeZoomConfig { duration: Duration::ZERO, ..Default::default() };
        assert!(matches!(config.validate(), Err(ConfigError::ZeroDuration)));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "scale = 2.0\nindicators = true").unwrap();
        let config = FadeZoomConfig::load(file.path()).unwrap();
        assert_eq!(config.scale, 2.0);
        assert!(config.indicators);
    }

    #[test]
    fn load_reports_missing_and_malformed_files() {
        let missing = FadeZoomConfig::load(Path::new("/nonexistent/fadezoom.toml"));
        assert!(matches!(missing, Err(ConfigError::Io { .. })));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "scale = ").unwrap();
        assert!(matches!(
            FadeZoomConfig::load(file.path()),
            Err(ConfigError::Parse { .. })
        ));
    }
}
