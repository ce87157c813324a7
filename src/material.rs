//! Material handles and the lookup the UV mapper uses to size textures.
//!
//! A face only stores a [`MaterialId`]. What the id refers to lives with the
//! renderer; the brush asks a [`MaterialSource`] for the pixel size of the
//! material's albedo texture and nothing else.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Copyable handle into an external material registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MaterialId(pub u32);

/// Pixel dimensions of a texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextureSize {
    pub width: u32,
    pub height: u32,
}

impl TextureSize {
    pub const fn new(width: u32, height: u32) -> Self {
        TextureSize { width, height }
    }

    /// A zero dimension means the texture never declared a size.
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// The part of a material the brush cares about.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Material {
    pub name: String,
    /// Base-color texture, if the material has one
    pub albedo: Option<TextureSize>,
}

impl Material {
    pub fn new(name: impl Into<String>) -> Self {
        Material {
            name: name.into(),
            albedo: None,
        }
    }

    pub fn with_albedo(mut self, width: u32, height: u32) -> Self {
        self.albedo = Some(TextureSize::new(width, height));
        self
    }
}

/// Read-only view of a material registry.
pub trait MaterialSource: Debug + Send + Sync {
    /// Albedo texture size of `id`, or `None` when the material is unknown or
    /// has no albedo texture.
    fn albedo_size(&self, id: MaterialId) -> Option<TextureSize>;
}

/// A registry that knows no materials. Every face maps at unit texture scale.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoMaterials;

impl MaterialSource for NoMaterials {
    fn albedo_size(&self, _id: MaterialId) -> Option<TextureSize> {
        None
    }
}

/// Simple in-memory registry; ids are handed out densely in insertion order.
#[derive(Debug, Default, Clone)]
pub struct MaterialLibrary {
    materials: Vec<Material>,
}

impl MaterialLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `material` and return its handle.
    pub fn insert(&mut self, material: Material) -> MaterialId {
        let id = MaterialId(self.materials.len() as u32);
        self.materials.push(material);
        id
    }

    pub fn get(&self, id: MaterialId) -> Option<&Material> {
        self.materials.get(id.0 as usize)
    }

    /// Mutable access for swapping textures. Brushes that use `id` must be
    /// invalidated afterwards for the new size to show up in their UVs.
    pub fn get_mut(&mut self, id: MaterialId) -> Option<&mut Material> {
        self.materials.get_mut(id.0 as usize)
    }

    /// Look a material up by name.
    pub fn find(&self, name: &str) -> Option<MaterialId> {
        self.materials
            .iter()
            .position(|m| m.name == name)
            .map(|i| MaterialId(i as u32))
    }

    pub fn len(&self) -> usize {
        self.materials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }
}

impl MaterialSource for MaterialLibrary {
    fn albedo_size(&self, id: MaterialId) -> Option<TextureSize> {
        self.get(id).and_then(|m| m.albedo)
    }
}
