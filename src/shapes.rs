//! Preset brushes built from well-known plane sets.

use crate::brush::Brush;
use crate::errors::BrushError;
use crate::float_types::{Real, TAU};
use crate::plane::Plane;
use nalgebra::Vector3;
use tracing::debug;

/// Principal axis a cylinder is extruded along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Axis {
    X,
    #[default]
    Y,
    Z,
}

impl Axis {
    const fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

/// Six planes bounding the box `[-extents, extents]`, ordered
/// +X, -X, +Y, -Y, +Z, -Z.
pub fn box_planes(extents: Vector3<Real>) -> Vec<Plane> {
    vec![
        Plane::from_normal(Vector3::x(), extents.x),
        Plane::from_normal(-Vector3::x(), extents.x),
        Plane::from_normal(Vector3::y(), extents.y),
        Plane::from_normal(-Vector3::y(), extents.y),
        Plane::from_normal(Vector3::z(), extents.z),
        Plane::from_normal(-Vector3::z(), extents.z),
    ]
}

/// `sides` planes around `axis` at distance `radius`, followed by the two cap
/// planes at `±height / 2`.
///
/// Side `i` faces the angle `i · τ / sides`, measured from the axis after
/// `axis` (cyclically) towards the one after that.
pub fn cylinder_planes(radius: Real, height: Real, sides: usize, axis: Axis) -> Result<Vec<Plane>, BrushError> {
    if sides < 3 {
        return Err(BrushError::InvalidShape(format!(
            "a cylinder needs at least 3 sides, got {sides}"
        )));
    }
    if !(radius > 0.0 && radius.is_finite()) || !(height > 0.0 && height.is_finite()) {
        return Err(BrushError::InvalidShape(format!(
            "cylinder radius ({radius}) and height ({height}) must be positive"
        )));
    }

    let a = axis.index();
    let step = TAU / sides as Real;
    let mut planes = Vec::with_capacity(sides + 2);

    for i in 0..sides {
        let angle = i as Real * step;
        let mut normal = Vector3::zeros();
        normal[(a + 1) % 3] = angle.cos();
        normal[(a + 2) % 3] = angle.sin();
        planes.push(Plane::from_normal(normal, radius));
    }

    let mut up = Vector3::zeros();
    up[a] = 1.0;
    planes.push(Plane::from_normal(up, height * 0.5));
    planes.push(Plane::from_normal(-up, height * 0.5));

    Ok(planes)
}

impl Brush {
    /// Box spanning `[-extents, extents]`.
    pub fn cuboid(extents: Vector3<Real>) -> Self {
        debug!(?extents, "creating box brush");
        Brush::from_planes(box_planes(extents))
    }

    /// The default box brush: planes at distance 1 on all six axes.
    pub fn unit_box() -> Self {
        Self::cuboid(Vector3::new(1.0, 1.0, 1.0))
    }

    /// Prism approximating a cylinder with `sides` flat sides.
    pub fn cylinder(radius: Real, height: Real, sides: usize, axis: Axis) -> Result<Self, BrushError> {
        debug!(radius, height, sides, ?axis, "creating cylinder brush");
        Ok(Brush::from_planes(cylinder_planes(radius, height, sides, axis)?))
    }

    /// The default cylinder brush: radius 1, height 1, 16 sides around Y.
    pub fn default_cylinder() -> Self {
        Brush::from_planes(
            cylinder_planes(1.0, 1.0, 16, Axis::Y).unwrap_or_default(),
        )
    }
}
