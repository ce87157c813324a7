//! Editor handle data: one handle per face, placed on the face centroid and
//! dragged along the face normal.

use crate::brush::Brush;
use crate::errors::BrushError;
use crate::float_types::parry3d::query::Ray;
use crate::float_types::Real;
use crate::plane::Plane;
use nalgebra::Point3;
use tracing::trace;

/// What an editor needs to draw and drag a face handle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceHandle {
    pub index: usize,
    /// Face centroid
    pub position: Point3<Real>,
    pub plane: Plane,
}

/// Distance along `plane.normal` of the point on the normal line through the
/// origin that is closest to `ray`.
///
/// Returns `None` if the ray runs parallel to the normal (or has no
/// direction), in which case the drag has no effect.
pub fn drag_distance(plane: &Plane, ray: &Ray) -> Option<Real> {
    let n = plane.normal;
    let d = ray.dir;
    let w0 = -ray.origin.coords;

    let a = n.dot(&n);
    let b = n.dot(&d);
    let c = d.dot(&d);
    let denom = a * c - b * b;
    if a < Real::EPSILON || denom.abs() <= Real::EPSILON * a * c.max(1.0) {
        return None;
    }

    let dn = n.dot(&w0);
    let dd = d.dot(&w0);
    Some((b * dd - c * dn) / denom)
}

impl Brush {
    /// One handle per face, at the face centroid.
    pub fn handles(&self) -> Vec<FaceHandle> {
        let geometry = self.geometry();
        self.faces()
            .iter()
            .zip(&geometry.faces)
            .enumerate()
            .map(|(index, (face, surface))| FaceHandle {
                index,
                position: surface.centroid,
                plane: face.plane,
            })
            .collect()
    }

    /// Closed outline of a face as line segments, in winding order.
    pub fn face_outline(&self, index: usize) -> Result<Vec<[Point3<Real>; 2]>, BrushError> {
        let surface = self.surface(index)?;
        if surface.is_degenerate() {
            return Ok(Vec::new());
        }
        let vertices = &surface.vertices;
        Ok(vertices
            .iter()
            .zip(vertices.iter().cycle().skip(1))
            .map(|(a, b)| [a.pos, b.pos])
            .collect())
    }

    /// Move face `index` to where `ray` points along its normal and return
    /// the resulting plane distance.
    pub fn drag_face(&mut self, index: usize, ray: &Ray) -> Result<Real, BrushError> {
        let plane = self.face_plane(index)?;
        let Some(w) = drag_distance(&plane, ray) else {
            trace!(index, "ray parallel to face normal, drag ignored");
            return Ok(plane.w);
        };
        self.set_face_plane(index, plane.with_offset(w))?;
        Ok(w)
    }
}
