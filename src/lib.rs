//! Convex **brush** geometry from bounding half-space planes.
//!
//! A [`Brush`] is an ordered list of [`Face`]s, each one a [`Plane`] with a
//! material handle, a UV transform and a skip flag. From those planes the
//! crate derives, per face, the polygon the planes cut out of each other:
//! corner positions wound clockwise as seen from outside, the face normal on
//! every vertex, texture coordinates from an axis-aligned projection, the face
//! centroid and its tangent basis. Brush-wide it derives the centroid, the
//! deduplicated corner cloud for convex-hull collision, a parry hull built
//! from it and render streams grouped by material.
//!
//! Geometry is cached and rebuilt lazily: any edit drops the cache and the
//! next read rebuilds it once.
//!
//! ```rust
//! use brushy::Brush;
//!
//! let mut brush = Brush::unit_box();
//! assert_eq!(brush.hull_points().len(), 8);
//!
//! brush.set_face_distance(0, 2.0).unwrap();
//! assert!(brush.is_dirty());
//! assert_eq!(brush.face_vertex_positions(0).unwrap().len(), 4);
//! assert!(!brush.is_dirty());
//! ```
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//! - **hashmap**: use hashbrown to group render surfaces by material
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64
//! - **parallel**: rebuild faces on the rayon thread pool

#![forbid(unsafe_code)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod errors;
pub mod float_types;
pub mod plane;
pub mod vertex;
pub mod material;
pub mod settings;
pub mod tangent;
pub mod uv;
pub mod solver;
pub mod winding;
pub mod face;
pub mod collision;
pub mod surface;
pub mod brush;
pub mod shapes;
pub mod handles;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use brush::{Brush, BrushData, BrushGeometry};
pub use errors::BrushError;
pub use face::{Face, FaceSurface};
pub use material::{Material, MaterialId, MaterialLibrary, MaterialSource, NoMaterials, TextureSize};
pub use plane::Plane;
pub use settings::BrushSettings;
pub use shapes::Axis;
pub use surface::{FaceFan, VisualSurface};
pub use tangent::TangentBasis;
pub use uv::UvTransform;
pub use vertex::Vertex;
