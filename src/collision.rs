//! Collision hull data.
//!
//! The point cloud is every corner of every non-degenerate face, merged across
//! faces. A physics host can take the points directly, or take the
//! [`SharedShape`] built here with parry's convex hull.

use crate::face::FaceSurface;
use crate::float_types::parry3d::shape::SharedShape;
use crate::float_types::{Real, tolerance};
use crate::vertex::points_coincide;
use nalgebra::Point3;

/// A convex hull needs at least a tetrahedron.
pub const MIN_HULL_POINTS: usize = 4;

/// Unique corner positions of all faces with at least three vertices, in face
/// order. Skipped faces are included.
pub fn hull_points(surfaces: &[FaceSurface]) -> Vec<Point3<Real>> {
    let eps = tolerance();
    let mut points: Vec<Point3<Real>> = Vec::new();

    for surface in surfaces.iter().filter(|s| !s.is_degenerate()) {
        for vertex in &surface.vertices {
            if !points.iter().any(|p| points_coincide(p, &vertex.pos, eps)) {
                points.push(vertex.pos);
            }
        }
    }

    points
}

/// Convex hull shape of `points`, or `None` with fewer than
/// [`MIN_HULL_POINTS`] points or when parry finds the cloud flat.
pub fn convex_hull_shape(points: &[Point3<Real>]) -> Option<SharedShape> {
    if points.len() < MIN_HULL_POINTS {
        return None;
    }
    SharedShape::convex_hull(points)
}
