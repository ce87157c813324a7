//! Faces: the editable per-plane record and the surface derived from it.

use crate::float_types::Real;
use crate::material::MaterialId;
use crate::plane::Plane;
use crate::solver;
use crate::tangent::TangentBasis;
use crate::uv::{UvTransform, compute_uv};
use crate::vertex::Vertex;
use crate::winding::sort_winding;
use nalgebra::{Point3, Vector2, Vector3};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// One bounding plane of a brush together with its texturing metadata.
///
/// `Face::default()` is what a brush grows with when a face is assigned past
/// its end: zero plane, no material, identity UV transform, not skipped.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Face {
    pub plane: Plane,
    pub material: Option<MaterialId>,
    pub uv_transform: UvTransform,
    /// Left out of visual surfaces, still part of the collision hull
    pub skip: bool,
}

impl Face {
    pub fn new(plane: Plane) -> Self {
        Face {
            plane,
            ..Default::default()
        }
    }

    pub fn with_material(mut self, material: MaterialId) -> Self {
        self.material = Some(material);
        self
    }

    pub fn with_uv_transform(mut self, uv_transform: UvTransform) -> Self {
        self.uv_transform = uv_transform;
        self
    }

    pub fn with_skip(mut self, skip: bool) -> Self {
        self.skip = skip;
        self
    }
}

impl From<Plane> for Face {
    fn from(plane: Plane) -> Self {
        Face::new(plane)
    }
}

/// Geometry of one face, rebuilt from the whole plane set on every recompute.
#[derive(Debug, Clone, PartialEq)]
pub struct FaceSurface {
    /// Average of the vertex positions; the origin for a face without vertices
    pub centroid: Point3<Real>,
    pub tangent_basis: TangentBasis,
    /// Clockwise as seen from outside the brush
    pub vertices: Vec<Vertex>,
}

impl Default for FaceSurface {
    fn default() -> Self {
        FaceSurface {
            centroid: Point3::origin(),
            tangent_basis: TangentBasis::default(),
            vertices: Vec::new(),
        }
    }
}

impl FaceSurface {
    /// Solve, texture and wind `face` against the brush's `planes`.
    ///
    /// `texture_world` is the world-space size of one texture repeat for the
    /// face's material, see [`crate::uv::texture_world_size`].
    pub fn build(face: &Face, planes: &[Plane], texture_world: &Vector2<Real>) -> Self {
        let normal = face.plane.normal;
        let tangent_basis = TangentBasis::from_normal(&normal);

        let mut vertices: Vec<Vertex> = solver::face_points(&face.plane, planes)
            .into_iter()
            .map(|pos| {
                let uv = compute_uv(&pos, &tangent_basis, &face.uv_transform, texture_world);
                Vertex::new(pos, normal, uv)
            })
            .collect();

        let centroid = if vertices.is_empty() {
            Point3::origin()
        } else {
            let sum = vertices
                .iter()
                .fold(Vector3::zeros(), |acc, v| acc + v.pos.coords);
            Point3::from(sum / vertices.len() as Real)
        };

        sort_winding(&mut vertices, &centroid, &normal, &tangent_basis);
        trace!(vertices = vertices.len(), ?centroid, "face surface built");

        FaceSurface {
            centroid,
            tangent_basis,
            vertices,
        }
    }

    /// Fewer than three vertices: no polygon to draw or collide with.
    pub fn is_degenerate(&self) -> bool {
        self.vertices.len() < 3
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn positions(&self) -> Vec<Point3<Real>> {
        self.vertices.iter().map(|v| v.pos).collect()
    }

    pub fn normals(&self) -> Vec<Vector3<Real>> {
        self.vertices.iter().map(|v| v.normal).collect()
    }

    pub fn uvs(&self) -> Vec<Vector2<Real>> {
        self.vertices.iter().map(|v| v.uv).collect()
    }
}
