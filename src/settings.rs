//! Brush configuration.

use crate::float_types::{DEFAULT_TEXEL_DENSITY, Real};
use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

/// Options consulted while building and exposing brush geometry.
///
/// Every field has a default, and a serialized settings block may omit any of
/// them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrushSettings {
    /// Texels per world unit, per texture axis
    pub texel_density: Vector2<Real>,
    /// Whether [`crate::Brush::surfaces`] produces render surfaces
    pub visual_enabled: bool,
    /// Whether [`crate::Brush::collision_shape`] produces a hull
    pub collision_enabled: bool,
}

impl Default for BrushSettings {
    fn default() -> Self {
        BrushSettings {
            texel_density: Vector2::from(DEFAULT_TEXEL_DENSITY),
            visual_enabled: true,
            collision_enabled: true,
        }
    }
}

impl BrushSettings {
    pub fn with_texel_density(mut self, texel_density: Vector2<Real>) -> Self {
        self.texel_density = texel_density;
        self
    }

    /// Texel density actually used for UVs. Non-positive or non-finite
    /// components fall back to the default.
    pub fn effective_texel_density(&self) -> Vector2<Real> {
        let fallback = Vector2::from(DEFAULT_TEXEL_DENSITY);
        Vector2::new(
            if self.texel_density.x.is_finite() && self.texel_density.x > 0.0 {
                self.texel_density.x
            } else {
                fallback.x
            },
            if self.texel_density.y.is_finite() && self.texel_density.y > 0.0 {
                self.texel_density.y
            } else {
                fallback.y
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let settings: BrushSettings = serde_json::from_str(r#"{ "visual_enabled": false }"#).unwrap();
        assert_eq!(settings.texel_density, Vector2::new(1024.0, 1024.0));
        assert!(!settings.visual_enabled);
        assert!(settings.collision_enabled);
    }

    #[test]
    fn bad_density_falls_back() {
        let settings = BrushSettings::default().with_texel_density(Vector2::new(0.0, 256.0));
        assert_eq!(settings.effective_texel_density(), Vector2::new(1024.0, 256.0));
    }
}
