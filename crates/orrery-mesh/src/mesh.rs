//! Indexed triangle mesh with in-place transforms and face-normal recomputation.

use glam::Vec3;

use crate::error::MeshError;
use crate::vertex::{Vertex, VertexLayout};

/// An ordered vertex list plus a triangle index list referencing it.
///
/// Indices are 0-based, three per triangle. Vertex order only matters for
/// GPU upload.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct IndexedMesh {
    /// Vertex buffer.
    pub vertices: Vec<Vertex>,
    /// Index buffer (triangles, 3 indices per triangle).
    pub indices: Vec<u32>,
    /// Attributes that carry meaningful data.
    pub layout: VertexLayout,
}

impl IndexedMesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty mesh with preallocated buffers.
    pub fn with_capacity(vertices: usize, indices: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertices),
            indices: Vec::with_capacity(indices),
            layout: VertexLayout::default(),
        }
    }

    /// Assemble a mesh from raw buffers, validating the index list.
    pub fn from_parts(
        vertices: Vec<Vertex>,
        indices: Vec<u32>,
        layout: VertexLayout,
    ) -> Result<Self, MeshError> {
        let mesh = Self {
            vertices,
            indices,
            layout,
        };
        mesh.validate()?;
        Ok(mesh)
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Returns `true` if the mesh has no vertices or no triangles.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() || self.indices.len() < 3
    }

    /// Append a vertex and return its index.
    pub fn push_vertex(&mut self, vertex: Vertex) -> u32 {
        self.vertices.push(vertex);
        (self.vertices.len() - 1) as u32
    }

    pub fn push_triangle(&mut self, triangle: [u32; 3]) {
        self.indices.extend_from_slice(&triangle);
    }

    /// Iterate over triangles as index triples. A trailing partial triangle is ignored.
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }

    /// Check that the index list is whole triangles and every index is in range.
    pub fn validate(&self) -> Result<(), MeshError> {
        if self.indices.len() % 3 != 0 {
            return Err(MeshError::RaggedIndices(self.indices.len()));
        }
        let vertex_count = self.vertices.len();
        if let Some((position, &index)) = self
            .indices
            .iter()
            .enumerate()
            .find(|&(_, &i)| i as usize >= vertex_count)
        {
            return Err(MeshError::IndexOutOfRange {
                index,
                position,
                vertex_count,
            });
        }
        Ok(())
    }

    /// Component-wise minimum and maximum position, or `None` for an empty vertex list.
    pub fn bounds(&self) -> Option<(Vec3, Vec3)> {
        let first = self.vertices.first()?.position();
        Some(
            self.vertices
                .iter()
                .skip(1)
                .fold((first, first), |(min, max), v| {
                    let p = v.position();
                    (min.min(p), max.max(p))
                }),
        )
    }

    /// Uniformly scale every position about the origin.
    pub fn scale(&mut self, factor: f32) {
        for v in &mut self.vertices {
            v.set_position(v.position() * factor);
        }
    }

    /// Move every position by `offset`.
    pub fn translate(&mut self, offset: Vec3) {
        for v in &mut self.vertices {
            v.set_position(v.position() + offset);
        }
    }

    /// Append `other`'s vertices and triangles to this mesh.
    ///
    /// The appended indices are shifted by this mesh's previous vertex count.
    /// The resulting layout is the poorer of the two.
    pub fn combine(&mut self, other: &IndexedMesh) {
        let offset = self.vertices.len() as u32;
        self.vertices.extend_from_slice(&other.vertices);
        self.indices
            .extend(other.indices.iter().map(|&i| i + offset));
        self.layout = self.layout.min(other.layout);
    }

    /// Recompute every vertex normal from the triangles that reference it.
    ///
    /// Each triangle's area-weighted face normal is summed into its three
    /// vertex slots and the sums are normalized. Slots with a zero sum
    /// (unreferenced or only on degenerate triangles) get a zero normal.
    /// Triangles with an out-of-range index are skipped.
    pub fn recompute_face_normals(&mut self) {
        let count = self.vertices.len();
        let mut normals = vec![Vec3::ZERO; count];

        for [a, b, c] in self.triangles() {
            let (a, b, c) = (a as usize, b as usize, c as usize);
            if a >= count || b >= count || c >= count {
                continue;
            }
            let pa = self.vertices[a].position();
            let edge_ab = self.vertices[b].position() - pa;
            let edge_ac = self.vertices[c].position() - pa;
            let face = edge_ab.cross(edge_ac);

            normals[a] += face;
            normals[b] += face;
            normals[c] += face;
        }

        for (v, n) in self.vertices.iter_mut().zip(normals) {
            v.set_normal(n.normalize_or_zero());
        }
        self.layout = self.layout.max(VertexLayout::PositionNormal);
    }

    /// Vertex buffer as bytes for GPU upload.
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Index buffer as bytes for GPU upload.
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}
