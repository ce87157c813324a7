//! Polytope vertices of a single face.
//!
//! Every corner of a convex brush is the meeting point of (at least) three of
//! its planes and lies on or behind all the others. For one target face the
//! solver walks every ordered pair of planes, intersects it with the target,
//! throws away points that poke out of any plane and merges duplicates.
//!
//! ```text
//! for b in planes:
//!     for c in planes:
//!         p = intersect(target, b, c)        // skip if det ≈ 0
//!         if ∀ q ∈ planes: q(p) <= ε         // inside the brush
//!             if p ∉ accepted (≈):
//!                 accepted.push(p)
//! ```
//!
//! That is O(F²) intersections and O(F³) inside tests per face, so O(F⁴) for a
//! whole brush. Fine for hand-built brushes of a few dozen faces; not meant
//! for general meshes.

use crate::float_types::{Real, tolerance};
use crate::plane::Plane;
use crate::vertex::points_coincide;
use nalgebra::Point3;

/// `true` when `point` is on or behind every plane, within `eps`.
pub fn is_inside_all(point: &Point3<Real>, planes: &[Plane], eps: Real) -> bool {
    planes.iter().all(|plane| !plane.is_point_over(point, eps))
}

/// Unique brush corners lying on `target`, in discovery order.
///
/// `planes` is the full plane set of the brush, `target` included. The result
/// is empty (or has fewer than three points) when the planes do not close
/// around this face; that is not an error.
pub fn face_points(target: &Plane, planes: &[Plane]) -> Vec<Point3<Real>> {
    face_points_with_tolerance(target, planes, tolerance())
}

/// [`face_points`] with an explicit tolerance for the determinant test, the
/// inside test and vertex merging.
pub fn face_points_with_tolerance(target: &Plane, planes: &[Plane], eps: Real) -> Vec<Point3<Real>> {
    let mut points: Vec<Point3<Real>> = Vec::new();

    if target.is_degenerate() {
        return points;
    }

    for b in planes {
        for c in planes {
            let Some(candidate) = target.intersect_3(b, c, eps) else {
                continue;
            };
            if !is_inside_all(&candidate, planes, eps) {
                continue;
            }
            if points.iter().any(|p| points_coincide(p, &candidate, eps)) {
                continue;
            }
            points.push(candidate);
        }
    }

    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Vector3;

    fn unit_box() -> Vec<Plane> {
        [
            Vector3::x(),
            -Vector3::x(),
            Vector3::y(),
            -Vector3::y(),
            Vector3::z(),
            -Vector3::z(),
        ]
        .into_iter()
        .map(|n| Plane::from_normal(n, 1.0))
        .collect()
    }

    #[test]
    fn box_face_has_four_corners() {
        let planes = unit_box();
        for plane in &planes {
            let points = face_points(plane, &planes);
            assert_eq!(points.len(), 4);
            for p in &points {
                assert!(plane.signed_distance(p).abs() < 1e-9);
                assert!(p.iter().all(|c| (c.abs() - 1.0).abs() < 1e-9));
            }
        }
    }

    #[test]
    fn open_brush_has_no_corners() {
        let planes = vec![
            Plane::from_normal(Vector3::x(), 1.0),
            Plane::from_normal(Vector3::y(), 1.0),
        ];
        for plane in &planes {
            assert!(face_points(plane, &planes).is_empty());
        }
    }

    #[test]
    fn cut_corner_adds_vertices() {
        let mut planes = unit_box();
        planes.push(Plane::from_normal(Vector3::new(1.0, 1.0, 1.0), 2.5 / (3.0 as Real).sqrt()));
        // the +X face loses its (1,1,1) corner and gains two cut vertices
        let points = face_points(&planes[0], &planes);
        assert_eq!(points.len(), 5);
        assert!(!points.iter().any(|p| points_coincide(p, &Point3::new(1.0, 1.0, 1.0), 1e-5)));
    }

    #[test]
    fn repeated_runs_are_identical() {
        let mut planes = unit_box();
        planes.push(Plane::from_normal(Vector3::new(0.2, 1.0, -0.4), 0.9));
        for plane in &planes {
            let a = face_points(plane, &planes);
            let b = face_points(plane, &planes);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn zero_plane_face_stays_empty() {
        let mut planes = unit_box();
        planes.push(Plane::zero());
        assert!(face_points(&planes[6], &planes).is_empty());
        assert_eq!(face_points(&planes[0], &planes).len(), 4);
    }
}
