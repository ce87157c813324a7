//! Brush errors

use crate::float_types::Real;

/// Conditions reported back to the caller of a brush operation.
///
/// Degenerate plane triples, brushes that do not close, missing textures and
/// hulls with too few points are not errors: they produce empty geometry.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BrushError {
    /// (FaceIndexOutOfRange) A per-face accessor or setter was given an index past the end
    #[error("(FaceIndexOutOfRange) face index {index} is out of range (face count = {len})")]
    FaceIndexOutOfRange { index: usize, len: usize },
    /// (InvalidPlane) A plane with a zero-length or non-finite normal, or a non-finite distance
    #[error("(InvalidPlane) {0}")]
    InvalidPlane(String),
    /// (InvalidShape) A preset was asked for an impossible shape
    #[error("(InvalidShape) {0}")]
    InvalidShape(String),
}

impl BrushError {
    pub(crate) fn invalid_plane(normal: [Real; 3], w: Real) -> Self {
        BrushError::InvalidPlane(format!(
            "normal ({}, {}, {}) with distance {} does not describe a half-space",
            normal[0], normal[1], normal[2], w
        ))
    }
}
