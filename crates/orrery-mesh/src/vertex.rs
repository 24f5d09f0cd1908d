//! Interleaved vertex format shared by the generators and the renderer upload path.

use bytemuck::{Pod, Zeroable};
use glam::{Vec2, Vec3};

/// A single mesh vertex.
///
/// Field order is the interleaved upload order: position, texture coordinate,
/// normal. `uv[0]` carries the scalar gradient coordinate written by the
/// height gradient pass; `uv[1]` is padding.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    /// Object-space position.
    pub position: [f32; 3],
    /// Texture coordinate.
    pub uv: [f32; 2],
    /// Vertex normal. Zero when not yet computed.
    pub normal: [f32; 3],
}

impl Vertex {
    /// Create a vertex with the given position and normal and a zero texture coordinate.
    pub fn new(position: Vec3, normal: Vec3) -> Self {
        Self {
            position: position.to_array(),
            uv: [0.0; 2],
            normal: normal.to_array(),
        }
    }

    /// Position as a vector.
    #[inline]
    pub fn position(&self) -> Vec3 {
        Vec3::from_array(self.position)
    }

    /// Normal as a vector.
    #[inline]
    pub fn normal(&self) -> Vec3 {
        Vec3::from_array(self.normal)
    }

    /// Texture coordinate as a vector.
    #[inline]
    pub fn uv(&self) -> Vec2 {
        Vec2::from_array(self.uv)
    }

    #[inline]
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position.to_array();
    }

    #[inline]
    pub fn set_normal(&mut self, normal: Vec3) {
        self.normal = normal.to_array();
    }
}

/// Which vertex attributes of a mesh carry meaningful data.
///
/// Ordered from the poorest to the richest layout, so combining two meshes
/// keeps the minimum of both.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum VertexLayout {
    /// Positions only.
    #[default]
    Position,
    /// Positions and normals.
    PositionNormal,
    /// Positions, texture coordinates and normals.
    PositionUvNormal,
}

impl VertexLayout {
    /// Whether normals are meaningful.
    pub fn has_normals(self) -> bool {
        self >= VertexLayout::PositionNormal
    }

    /// Whether texture coordinates are meaningful.
    pub fn has_uvs(self) -> bool {
        self == VertexLayout::PositionUvNormal
    }
}
