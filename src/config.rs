use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::core::viewport::limits::{AutoZoomLimits, InvalidLimit, ViewportLimits};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid config field {section}.{field}: {reason}")]
    Invalid {
        section: &'static str,
        field: &'static str,
        reason: &'static str,
    },
}

impl ConfigError {
    fn invalid(section: &'static str) -> impl FnOnce(InvalidLimit) -> Self {
        move |InvalidLimit { field, reason }| Self::Invalid {
            section,
            field,
            reason,
        }
    }
}

/// Engine tunables; any field left out of the JSON keeps its default.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub viewport: ViewportLimits,
    pub auto_zoom: AutoZoomLimits,
}

impl EngineConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;

        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.viewport.validate().map_err(ConfigError::invalid("viewport"))?;
        self.auto_zoom.validate().map_err(ConfigError::invalid("auto_zoom"))?;

        Ok(())
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let config = Self::from_json_str(&json)?;
        info!(path = %path.display(), "loaded engine config");

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_gives_defaults() {
        assert_eq!(EngineConfig::from_json_str("{}").unwrap(), EngineConfig::default());
    }

    #[test]
    fn partial_sections_override_only_named_fields() {
        let config = EngineConfig::from_json_str(
            r#"{ "viewport": { "max_zoom": 1e12 }, "auto_zoom": { "tick_hz": 30 } }"#,
        )
        .unwrap();

        assert_eq!(config.viewport.max_zoom, 1e12);
        assert_eq!(config.viewport.inertia_decay, 0.85);
        assert_eq!(config.auto_zoom.tick_hz, 30);
        assert_eq!(config.auto_zoom.max_ticks_per_update, 10);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(matches!(
            EngineConfig::from_json_str("{ viewport: "),
            Err(ConfigError::Json(_))
        ));
    }

    fn invalid_field(json: &str) -> (&'static str, &'static str) {
        match EngineConfig::from_json_str(json) {
            Err(ConfigError::Invalid { section, field, .. }) => (section, field),
            other => panic!("expected an invalid field, got {other:?}"),
        }
    }

    #[test]
    fn inverted_zoom_range_is_rejected() {
        assert_eq!(
            invalid_field(r#"{ "viewport": { "min_zoom": 10.0, "max_zoom": 1.0 } }"#),
            ("viewport", "max_zoom")
        );
    }

    #[test]
    fn zero_iteration_floor_is_rejected() {
        assert_eq!(
            invalid_field(r#"{ "viewport": { "base_iterations": 0, "iterations_per_decade": 0 } }"#),
            ("viewport", "base_iterations")
        );
    }

    #[test]
    fn iteration_ceiling_above_hard_cap_is_rejected() {
        assert_eq!(
            invalid_field(r#"{ "viewport": { "max_iterations": 50000 } }"#),
            ("viewport", "max_iterations")
        );
    }

    #[test]
    fn non_decaying_inertia_is_rejected() {
        assert_eq!(
            invalid_field(r#"{ "viewport": { "inertia_decay": 1.0 } }"#),
            ("viewport", "inertia_decay")
        );
    }

    #[test]
    fn auto_zoom_section_is_validated() {
        assert_eq!(
            invalid_field(r#"{ "auto_zoom": { "tick_hz": 0 } }"#),
            ("auto_zoom", "tick_hz")
        );
    }

    #[test]
    fn invalid_field_error_names_section_and_field() {
        let error = EngineConfig::from_json_str(r#"{ "viewport": { "zoom_out_factor": 1.5 } }"#)
            .unwrap_err();

        assert!(error.to_string().contains("viewport.zoom_out_factor"));
    }

    #[test]
    fn missing_file_reports_path() {
        let error = EngineConfig::load("does/not/exist.json").unwrap_err();

        assert!(matches!(error, ConfigError::Io { ref path, .. } if path.ends_with("exist.json")));
    }

    #[test]
    fn defaults_survive_serialization() {
        let json = serde_json::to_string(&EngineConfig::default()).unwrap();

        assert_eq!(EngineConfig::from_json_str(&json).unwrap(), EngineConfig::default());
    }
}
