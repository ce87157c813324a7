//! `Brush`: the plane store and the lazily rebuilt geometry derived from it.
//!
//! Edits only touch the plane store and drop the cached geometry. The next
//! read rebuilds every face once, however many edits came before it, so a
//! caller never observes geometry older than the planes it just set.

use crate::collision::{self, MIN_HULL_POINTS};
use crate::errors::BrushError;
use crate::face::{Face, FaceSurface};
use crate::float_types::Real;
use crate::float_types::parry3d::shape::SharedShape;
use crate::material::{MaterialId, MaterialSource, NoMaterials};
use crate::plane::Plane;
use crate::settings::BrushSettings;
use crate::surface::{self, VisualSurface};
use crate::tangent::TangentBasis;
use crate::uv::{UvTransform, texture_world_size};
use nalgebra::{Point3, Vector2, Vector3};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, OnceLock};
use tracing::{debug, instrument, trace};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Everything derived from the plane store in one rebuild.
#[derive(Debug, Clone, PartialEq)]
pub struct BrushGeometry {
    /// One entry per face, same indices as [`Brush::faces`]
    pub faces: Vec<FaceSurface>,
    /// Mean of the face centroids
    pub centroid: Point3<Real>,
    /// Unique corners of all non-degenerate faces
    pub hull_points: Vec<Point3<Real>>,
    /// [`Brush::revision`] this geometry was built from
    pub revision: u64,
}

impl BrushGeometry {
    /// Run the whole pipeline over `faces`.
    #[instrument(level = "debug", skip_all, fields(faces = faces.len(), revision = revision))]
    pub fn build(
        faces: &[Face],
        materials: &dyn MaterialSource,
        settings: &BrushSettings,
        revision: u64,
    ) -> Self {
        let planes: Vec<Plane> = faces.iter().map(|f| f.plane).collect();

        let build_face = |face: &Face| {
            let texture_world = texture_world_size(face.material, materials, settings);
            FaceSurface::build(face, &planes, &texture_world)
        };

        #[cfg(not(feature = "parallel"))]
        let surfaces: Vec<FaceSurface> = faces.iter().map(build_face).collect();

        #[cfg(feature = "parallel")]
        let surfaces: Vec<FaceSurface> = faces.par_iter().map(build_face).collect();

        // Faces without vertices still count, pulling the mean towards the origin.
        let centroid = if surfaces.is_empty() {
            Point3::origin()
        } else {
            let sum = surfaces
                .iter()
                .fold(Vector3::zeros(), |acc, s| acc + s.centroid.coords);
            Point3::from(sum / surfaces.len() as Real)
        };

        let hull_points = collision::hull_points(&surfaces);

        debug!(
            revision,
            degenerate = surfaces.iter().filter(|s| s.is_degenerate()).count(),
            hull_points = hull_points.len(),
            "brush geometry rebuilt"
        );

        BrushGeometry {
            faces: surfaces,
            centroid,
            hull_points,
            revision,
        }
    }
}

/// A convex brush: an ordered list of [`Face`]s plus derived geometry.
///
/// Face indices are stable; faces are only ever appended.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "BrushData", into = "BrushData")]
pub struct Brush {
    faces: Vec<Face>,
    settings: BrushSettings,
    materials: Arc<dyn MaterialSource>,
    revision: u64,
    geometry: OnceLock<BrushGeometry>,
}

/// Serialized form of a [`Brush`]: its plane store and settings. Geometry is
/// rebuilt after loading; the material source is not part of the data.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BrushData {
    pub faces: Vec<Face>,
    #[serde(default)]
    pub settings: BrushSettings,
}

impl From<BrushData> for Brush {
    fn from(data: BrushData) -> Self {
        Brush::from_faces(data.faces).with_settings(data.settings)
    }
}

impl From<Brush> for BrushData {
    fn from(brush: Brush) -> Self {
        BrushData {
            faces: brush.faces,
            settings: brush.settings,
        }
    }
}

impl Default for Brush {
    fn default() -> Self {
        Self::new()
    }
}

impl Brush {
    /// A brush with no faces.
    pub fn new() -> Self {
        Brush {
            faces: Vec::new(),
            settings: BrushSettings::default(),
            materials: Arc::new(NoMaterials),
            revision: 0,
            geometry: OnceLock::new(),
        }
    }

    /// A brush with one untextured face per plane.
    pub fn from_planes<I: IntoIterator<Item = Plane>>(planes: I) -> Self {
        Self::from_faces(planes.into_iter().map(Face::new).collect())
    }

    pub fn from_faces(faces: Vec<Face>) -> Self {
        let mut brush = Self::new();
        brush.faces = faces;
        brush
    }

    pub fn with_settings(mut self, settings: BrushSettings) -> Self {
        self.set_settings(settings);
        self
    }

    pub fn with_materials(mut self, materials: Arc<dyn MaterialSource>) -> Self {
        self.set_materials(materials);
        self
    }

    // ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
    // Plane store
    // ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    pub fn face(&self, index: usize) -> Result<&Face, BrushError> {
        self.faces.get(index).ok_or(BrushError::FaceIndexOutOfRange {
            index,
            len: self.faces.len(),
        })
    }

    pub fn face_plane(&self, index: usize) -> Result<Plane, BrushError> {
        self.face(index).map(|f| f.plane)
    }

    pub fn face_material(&self, index: usize) -> Result<Option<MaterialId>, BrushError> {
        self.face(index).map(|f| f.material)
    }

    pub fn face_uv_transform(&self, index: usize) -> Result<UvTransform, BrushError> {
        self.face(index).map(|f| f.uv_transform)
    }

    pub fn face_skip(&self, index: usize) -> Result<bool, BrushError> {
        self.face(index).map(|f| f.skip)
    }

    /// Append a face and return its index.
    pub fn push_face(&mut self, face: Face) -> usize {
        self.faces.push(face);
        self.invalidate();
        self.faces.len() - 1
    }

    /// Store `face` at `index`. Assigning past the end grows the brush with
    /// default faces up to `index`.
    pub fn set_face(&mut self, index: usize, face: Face) {
        if index >= self.faces.len() {
            self.faces.resize_with(index + 1, Face::default);
        }
        self.faces[index] = face;
        self.invalidate();
    }

    #[instrument(level = "trace", skip(self))]
    pub fn set_face_plane(&mut self, index: usize, plane: Plane) -> Result<(), BrushError> {
        self.face_mut(index)?.plane = plane;
        self.invalidate();
        Ok(())
    }

    /// Move a face along its own normal.
    pub fn set_face_distance(&mut self, index: usize, w: Real) -> Result<(), BrushError> {
        let plane = self.face_plane(index)?.with_offset(w);
        self.set_face_plane(index, plane)
    }

    pub fn set_face_material(&mut self, index: usize, material: Option<MaterialId>) -> Result<(), BrushError> {
        self.face_mut(index)?.material = material;
        self.invalidate();
        Ok(())
    }

    pub fn set_face_uv_transform(&mut self, index: usize, uv_transform: UvTransform) -> Result<(), BrushError> {
        self.face_mut(index)?.uv_transform = uv_transform;
        self.invalidate();
        Ok(())
    }

    pub fn set_face_skip(&mut self, index: usize, skip: bool) -> Result<(), BrushError> {
        self.face_mut(index)?.skip = skip;
        self.invalidate();
        Ok(())
    }

    fn face_mut(&mut self, index: usize) -> Result<&mut Face, BrushError> {
        let len = self.faces.len();
        self.faces
            .get_mut(index)
            .ok_or(BrushError::FaceIndexOutOfRange { index, len })
    }

    // ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
    // Settings and materials
    // ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~

    pub const fn settings(&self) -> &BrushSettings {
        &self.settings
    }

    /// Replace the settings. Only a texel density change invalidates geometry.
    pub fn set_settings(&mut self, settings: BrushSettings) {
        let density_changed = settings.texel_density != self.settings.texel_density;
        self.settings = settings;
        if density_changed {
            self.invalidate();
        }
    }

    pub fn set_texel_density(&mut self, texel_density: Vector2<Real>) {
        self.set_settings(self.settings.with_texel_density(texel_density));
    }

    pub const fn is_visual_enabled(&self) -> bool {
        self.settings.visual_enabled
    }

    /// Toggle render output. Geometry stays valid either way.
    pub fn set_visual_enabled(&mut self, enabled: bool) {
        self.settings.visual_enabled = enabled;
    }

    pub const fn is_collision_enabled(&self) -> bool {
        self.settings.collision_enabled
    }

    /// Toggle collision output. Geometry stays valid either way.
    pub fn set_collision_enabled(&mut self, enabled: bool) {
        self.settings.collision_enabled = enabled;
    }

    pub fn materials(&self) -> &Arc<dyn MaterialSource> {
        &self.materials
    }

    pub fn set_materials(&mut self, materials: Arc<dyn MaterialSource>) {
        self.materials = materials;
        self.invalidate();
    }

    // ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
    // Recompute
    // ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~

    /// `true` between an edit and the next rebuild.
    pub fn is_dirty(&self) -> bool {
        self.geometry.get().is_none()
    }

    /// Number of edits applied since the brush was created.
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    /// Drop the cached geometry, e.g. after a material's texture changed
    /// behind the brush's back.
    pub fn invalidate(&mut self) {
        self.revision += 1;
        if self.geometry.take().is_some() {
            trace!(revision = self.revision, "brush marked dirty");
        }
    }

    /// Current geometry, rebuilding first if any edit happened since the last
    /// build.
    pub fn geometry(&self) -> &BrushGeometry {
        self.geometry.get_or_init(|| {
            BrushGeometry::build(&self.faces, self.materials.as_ref(), &self.settings, self.revision)
        })
    }

    /// Rebuild now if dirty. Returns the (possibly cached) geometry.
    pub fn rebuild(&mut self) -> &BrushGeometry {
        self.geometry()
    }

    // ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
    // Derived geometry
    // ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~

    pub fn surface(&self, index: usize) -> Result<&FaceSurface, BrushError> {
        self.face(index)?;
        Ok(&self.geometry().faces[index])
    }

    pub fn face_centroid(&self, index: usize) -> Result<Point3<Real>, BrushError> {
        self.surface(index).map(|s| s.centroid)
    }

    pub fn face_tangent_basis(&self, index: usize) -> Result<TangentBasis, BrushError> {
        self.surface(index).map(|s| s.tangent_basis)
    }

    pub fn face_vertex_positions(&self, index: usize) -> Result<Vec<Point3<Real>>, BrushError> {
        self.surface(index).map(FaceSurface::positions)
    }

    pub fn face_vertex_normals(&self, index: usize) -> Result<Vec<Vector3<Real>>, BrushError> {
        self.surface(index).map(FaceSurface::normals)
    }

    pub fn face_vertex_uvs(&self, index: usize) -> Result<Vec<Vector2<Real>>, BrushError> {
        self.surface(index).map(FaceSurface::uvs)
    }

    /// Mean of all face centroids.
    pub fn centroid(&self) -> Point3<Real> {
        self.geometry().centroid
    }

    /// Deduplicated corners for convex-hull collision.
    pub fn hull_points(&self) -> &[Point3<Real>] {
        &self.geometry().hull_points
    }

    /// Render surfaces grouped by material; empty while visual output is off.
    pub fn surfaces(&self) -> Vec<VisualSurface> {
        if !self.settings.visual_enabled {
            return Vec::new();
        }
        surface::build_surfaces(&self.faces, &self.geometry().faces)
    }

    /// Convex hull of [`Brush::hull_points`]; `None` while collision output is
    /// off or with fewer than four points.
    pub fn collision_shape(&self) -> Option<SharedShape> {
        if !self.settings.collision_enabled {
            return None;
        }
        let points = self.hull_points();
        if points.len() < MIN_HULL_POINTS {
            trace!(points = points.len(), "too few points for a collision hull");
            return None;
        }
        collision::convex_hull_shape(points)
    }
}
