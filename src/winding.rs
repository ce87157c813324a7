//! Winding order of face polygons.
//!
//! Brush faces are convex, so sorting their corners by angle around the
//! centroid traces the boundary. The angle is measured in a frame built from
//! the face's tangent `u` axis (flattened onto the face) and `u × normal`.
//! That frame is left-handed when seen from outside the brush, so ascending
//! angles run clockwise from outside and counter-clockwise in `(u, v)`.

use crate::float_types::Real;
use crate::tangent::TangentBasis;
use crate::vertex::Vertex;
use nalgebra::{Point3, Vector3};

/// In-plane `(u, v)` axes used to sort and measure a face polygon.
///
/// Normally derived from the tangent basis. If that is unusable (a collapsed
/// normal) the first edge of the polygon is used instead, and with fewer than
/// two distinct vertices there is no frame at all.
pub fn winding_axes(
    vertices: &[Vertex],
    normal: &Vector3<Real>,
    tangent: &TangentBasis,
) -> Option<(Vector3<Real>, Vector3<Real>)> {
    let u = match tangent.u_in_plane(normal) {
        Some(u) if normal.norm_squared() > Real::EPSILON => u,
        _ => match vertices {
            [a, b, ..] => (b.pos - a.pos).try_normalize(Real::EPSILON)?,
            _ => return None,
        },
    };
    let v = u.cross(normal).try_normalize(Real::EPSILON)?;
    Some((u, v))
}

/// Sort `vertices` clockwise (seen from the outside) around `centroid`.
///
/// Faces with fewer than three vertices are left alone. The sort is stable and
/// never adds or drops vertices.
pub fn sort_winding(
    vertices: &mut Vec<Vertex>,
    centroid: &Point3<Real>,
    normal: &Vector3<Real>,
    tangent: &TangentBasis,
) {
    if vertices.len() < 3 {
        return;
    }
    let Some((u, v)) = winding_axes(vertices, normal, tangent) else {
        return;
    };

    let mut keyed: Vec<(Real, Vertex)> = vertices
        .iter()
        .map(|vertex| {
            let local = vertex.pos - centroid;
            (local.dot(&v).atan2(local.dot(&u)), *vertex)
        })
        .collect();
    keyed.sort_by(|a, b| a.0.total_cmp(&b.0));

    vertices.clear();
    vertices.extend(keyed.into_iter().map(|(_, vertex)| vertex));
}

/// Signed area of the polygon projected onto `(u, v)` (shoelace formula).
/// Positive for a polygon wound by [`sort_winding`] in the same frame.
pub fn signed_area(vertices: &[Vertex], u: &Vector3<Real>, v: &Vector3<Real>) -> Real {
    if vertices.len() < 3 {
        return 0.0;
    }
    let origin = vertices[0].pos;
    let flat: Vec<(Real, Real)> = vertices
        .iter()
        .map(|vertex| {
            let d = vertex.pos - origin;
            (d.dot(u), d.dot(v))
        })
        .collect();

    let twice_area: Real = flat
        .iter()
        .zip(flat.iter().cycle().skip(1))
        .map(|(a, b)| a.0 * b.1 - b.0 * a.1)
        .sum();
    twice_area * 0.5
}
