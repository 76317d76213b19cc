use serde::{Deserialize, Serialize};

use crate::core::data::complex::Complex;
use crate::core::viewport::state::FractalState;

/// The subset of [`FractalState`] that travels in a share link.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShareableState {
    pub x: f64,
    pub y: f64,
    pub zoom: f64,
    #[serde(rename = "iter")]
    pub iterations: u32,
    pub palette: u32,
    #[serde(with = "flag")]
    pub julia: bool,
    pub jx: f64,
    pub jy: f64,
}

/// Mode flag written as `0`/`1`; `true`/`false` are also read.
mod flag {
    use serde::de::{self, Unexpected};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(u8::from(*value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        let text = String::deserialize(deserializer)?;

        match text.as_str() {
            "1" | "true" => Ok(true),
            "0" | "false" => Ok(false),
            other => Err(de::Error::invalid_value(Unexpected::Str(other), &"0 or 1")),
        }
    }
}

impl ShareableState {
    #[must_use]
    pub fn from_state(state: &FractalState) -> Self {
        Self {
            x: state.center.real,
            y: state.center.imag,
            zoom: state.zoom,
            iterations: state.max_iterations,
            palette: state.colour_palette,
            julia: state.is_julia,
            jx: state.julia_c.real,
            jy: state.julia_c.imag,
        }
    }

    /// Overlays the shared fields on `base`; auto-zoom settings are left alone.
    #[must_use]
    pub fn apply_to(&self, base: FractalState) -> FractalState {
        FractalState {
            center: Complex::new(self.x, self.y),
            zoom: self.zoom,
            max_iterations: self.iterations,
            colour_palette: self.palette,
            is_julia: self.julia,
            julia_c: Complex::new(self.jx, self.jy),
            ..base
        }
    }
}

impl Default for ShareableState {
    fn default() -> Self {
        Self::from_state(&FractalState::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_round_trips_through_shared_fields() {
        let state = FractalState {
            center: Complex::new(-0.743_643_887_037_151, 0.131_825_904_205_330),
            zoom: 2.5e9,
            max_iterations: 612,
            colour_palette: 2,
            is_julia: true,
            julia_c: Complex::new(0.285, 0.01),
            auto_zoom: true,
            animation_speed: 4,
        };

        let restored = ShareableState::from_state(&state).apply_to(FractalState::default());

        assert_eq!(restored.center, state.center);
        assert_eq!(restored.zoom, state.zoom);
        assert_eq!(restored.max_iterations, state.max_iterations);
        assert_eq!(restored.colour_palette, state.colour_palette);
        assert_eq!(restored.is_julia, state.is_julia);
        assert_eq!(restored.julia_c, state.julia_c);
        assert!(!restored.auto_zoom);
    }

    #[test]
    fn json_with_missing_fields_uses_defaults() {
        let decoded: ShareableState =
            serde_json::from_str(r#"{"zoom": 8.0, "julia": "1"}"#).unwrap();

        assert_eq!(decoded.zoom, 8.0);
        assert!(decoded.julia);
        assert_eq!(decoded.x, -0.5);
        assert_eq!(decoded.iterations, 150);
    }
}
