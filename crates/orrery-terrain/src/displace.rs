//! Height-field displacement and the height gradient coordinate.

use orrery_mesh::{IndexedMesh, VertexLayout};
use tracing::debug;

use crate::noise_context::NoiseContext;

/// Set each vertex's elevation to `noise.sample(x, z) * amplitude` and rebuild normals.
///
/// Only Y changes. Normals are recomputed by summing area-weighted face
/// normals per vertex slot (see [`IndexedMesh::recompute_face_normals`]),
/// which is the input [`orrery_mesh::smooth_normals`] expects. An empty mesh
/// is left untouched.
pub fn displace(mesh: &mut IndexedMesh, noise: &NoiseContext, amplitude: f32) {
    if mesh.vertices.is_empty() {
        return;
    }
    for v in &mut mesh.vertices {
        let [x, _, z] = v.position;
        v.position[1] = noise.sample(x, z) * amplitude;
    }
    mesh.recompute_face_normals();
    mesh.layout = VertexLayout::PositionNormal;
    debug!(
        seed = noise.seed(),
        amplitude,
        vertices = mesh.vertex_count(),
        "displaced height field"
    );
}

/// Inverse lerp of `y` over `[min_y, max_y]`; 0 when the range is empty.
#[inline]
pub fn gradient_coordinate(y: f32, min_y: f32, max_y: f32) -> f32 {
    let range = max_y - min_y;
    if range > 0.0 {
        ((y - min_y) / range).clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// Write each vertex's normalized elevation into `uv[0]` (and 0 into `uv[1]`).
///
/// The lowest vertex maps to 0 and the highest to 1. A flat mesh maps every
/// vertex to 0; an empty mesh is left untouched.
pub fn apply_height_gradient(mesh: &mut IndexedMesh) {
    let Some((min, max)) = mesh.bounds() else {
        return;
    };
    for v in &mut mesh.vertices {
        v.uv = [gradient_coordinate(v.position[1], min.y, max.y), 0.0];
    }
    mesh.layout = VertexLayout::PositionUvNormal;
}
