//! Render-ready streams, one surface per material.
//!
//! Faces are not triangulated. Each face lands in its material's surface as a
//! contiguous run of vertices ([`FaceFan`]) already in fan order, so the
//! consumer can emit `(start, start + i, start + i + 1)` triangles or hand the
//! run to an API that takes polygons.

use crate::face::{Face, FaceSurface};
use crate::float_types::Real;
use crate::material::MaterialId;
use nalgebra::{Point3, Vector2, Vector3};

#[cfg(feature = "hashmap")]
use hashbrown::HashMap;

/// Where one face's vertices sit inside a [`VisualSurface`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceFan {
    /// Index of the face in the brush
    pub face: usize,
    /// First vertex of the face in the surface streams
    pub start: usize,
    /// Number of vertices, at least three
    pub len: usize,
}

/// Vertex streams for every drawn face sharing one material.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct VisualSurface {
    pub material: Option<MaterialId>,
    pub positions: Vec<Point3<Real>>,
    pub normals: Vec<Vector3<Real>>,
    pub uvs: Vec<Vector2<Real>>,
    /// Tangent `u` axis in the face plane, `w` = bitangent sign
    pub tangents: Vec<[Real; 4]>,
    pub fans: Vec<FaceFan>,
}

impl VisualSurface {
    fn new(material: Option<MaterialId>) -> Self {
        VisualSurface {
            material,
            ..Default::default()
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    fn push_face(&mut self, index: usize, face: &Face, surface: &FaceSurface) {
        let normal = face.plane.normal;
        let tangent = surface
            .tangent_basis
            .u_in_plane(&normal)
            .unwrap_or(surface.tangent_basis.u);
        let handedness = if normal.cross(&tangent).dot(&surface.tangent_basis.v) < 0.0 {
            -1.0
        } else {
            1.0
        };

        let start = self.positions.len();
        for vertex in &surface.vertices {
            self.positions.push(vertex.pos);
            self.normals.push(vertex.normal);
            self.uvs.push(vertex.uv);
            self.tangents.push([tangent.x, tangent.y, tangent.z, handedness]);
        }
        self.fans.push(FaceFan {
            face: index,
            start,
            len: surface.vertices.len(),
        });
    }
}

/// Group the drawable faces by material.
///
/// Skipped and degenerate faces are left out. Surfaces appear in the order
/// their material is first used, faces within a surface in brush order.
pub fn build_surfaces(faces: &[Face], surfaces: &[FaceSurface]) -> Vec<VisualSurface> {
    let mut out: Vec<VisualSurface> = Vec::new();
    #[cfg(feature = "hashmap")]
    let mut by_material: HashMap<Option<MaterialId>, usize> = HashMap::new();

    for (index, (face, surface)) in faces.iter().zip(surfaces).enumerate() {
        if face.skip || surface.is_degenerate() {
            continue;
        }

        #[cfg(feature = "hashmap")]
        let slot = *by_material.entry(face.material).or_insert_with(|| {
            out.push(VisualSurface::new(face.material));
            out.len() - 1
        });

        #[cfg(not(feature = "hashmap"))]
        let slot = match out.iter().position(|s| s.material == face.material) {
            Some(slot) => slot,
            None => {
                out.push(VisualSurface::new(face.material));
                out.len() - 1
            },
        };

        out[slot].push_face(index, face, surface);
    }

    out
}
