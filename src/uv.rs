//! Texture coordinates for brush faces.
//!
//! A face point is flattened through the face's [`TangentBasis`], run through
//! the face's own [`UvTransform`] and then rescaled so that one texture repeat
//! covers `texture_pixels / texel_density` world units.

use crate::float_types::Real;
use crate::material::{MaterialId, MaterialSource};
use crate::settings::BrushSettings;
use crate::tangent::TangentBasis;
use nalgebra::{Matrix2, Point3, Rotation2, Vector2};
use serde::{Deserialize, Serialize};

/// 2D affine transform applied to raw projected texture coordinates.
///
/// `apply(p) = basis * p + origin`, with the columns of `basis` being the
/// images of the texture x and y axes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UvTransform {
    pub basis: Matrix2<Real>,
    pub origin: Vector2<Real>,
}

impl Default for UvTransform {
    fn default() -> Self {
        Self::identity()
    }
}

impl UvTransform {
    pub fn identity() -> Self {
        UvTransform {
            basis: Matrix2::identity(),
            origin: Vector2::zeros(),
        }
    }

    pub const fn new(basis: Matrix2<Real>, origin: Vector2<Real>) -> Self {
        UvTransform { basis, origin }
    }

    /// The usual editor controls: scale first, then rotate (radians), then offset.
    pub fn from_scale_rotation_offset(scale: Vector2<Real>, rotation: Real, offset: Vector2<Real>) -> Self {
        let rotation = Rotation2::new(rotation).into_inner();
        UvTransform {
            basis: rotation * Matrix2::from_diagonal(&scale),
            origin: offset,
        }
    }

    /// Pure translation.
    pub fn from_offset(offset: Vector2<Real>) -> Self {
        UvTransform {
            basis: Matrix2::identity(),
            origin: offset,
        }
    }

    /// This transform followed by a non-uniform scale; both the basis and the
    /// origin are scaled.
    pub fn scaled(&self, scale: &Vector2<Real>) -> Self {
        let s = Matrix2::from_diagonal(scale);
        UvTransform {
            basis: s * self.basis,
            origin: self.origin.component_mul(scale),
        }
    }

    #[inline]
    pub fn apply(&self, p: &Vector2<Real>) -> Vector2<Real> {
        self.basis * p + self.origin
    }
}

/// World-space size of one texture repeat: texture pixels over texel density.
///
/// Faces without a material, materials without an albedo texture and textures
/// that never declared a size count as a single `1x1` pixel, so untextured
/// faces repeat every `1 / texel_density` units.
pub fn texture_world_size(
    material: Option<MaterialId>,
    materials: &dyn MaterialSource,
    settings: &BrushSettings,
) -> Vector2<Real> {
    let pixels = match material.and_then(|id| materials.albedo_size(id)) {
        Some(size) if !size.is_empty() => Vector2::new(size.width as Real, size.height as Real),
        _ => Vector2::new(1.0, 1.0),
    };
    pixels.component_div(&settings.effective_texel_density())
}

/// Texture coordinate of `point` on a face.
///
/// Depends only on its arguments; calling it twice with the same inputs gives
/// the same bits.
pub fn compute_uv(
    point: &Point3<Real>,
    tangent: &TangentBasis,
    uv_transform: &UvTransform,
    texture_world: &Vector2<Real>,
) -> Vector2<Real> {
    let raw = tangent.project(point);
    let inv = Vector2::new(1.0 / texture_world.x, 1.0 / texture_world.y);
    uv_transform.scaled(&inv).apply(&raw)
}
