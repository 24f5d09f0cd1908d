//! Base mesh generators: a flat grid plane and a unit cube-sphere.
//!
//! Both generators emit four unshared vertices per quad so every quad can
//! carry its own flat normal. Corners that coincide in space are produced by
//! identical arithmetic and are therefore bit-identical, which lets the
//! welding pass in [`crate::weld`] group them exactly.

use glam::Vec3;

use crate::cube_face::CubeFace;
use crate::mesh::IndexedMesh;
use crate::vertex::{Vertex, VertexLayout};

/// A `rows × cols` grid of unit quads in the XZ plane, centered on the origin.
///
/// Quads are wound counter-clockwise when seen from +Y and all normals are +Y.
/// Returns an empty mesh if either dimension is zero.
pub fn plane(rows: u32, cols: u32) -> IndexedMesh {
    let quads = rows as usize * cols as usize;
    let mut mesh = IndexedMesh::with_capacity(quads * 4, quads * 6);
    mesh.layout = VertexLayout::PositionNormal;

    let x_at = |col: u32| col as f32 - cols as f32 * 0.5;
    let z_at = |row: u32| row as f32 - rows as f32 * 0.5;

    for row in 0..rows {
        for col in 0..cols {
            let corners = [
                Vec3::new(x_at(col), 0.0, z_at(row)),
                Vec3::new(x_at(col), 0.0, z_at(row + 1)),
                Vec3::new(x_at(col + 1), 0.0, z_at(row + 1)),
                Vec3::new(x_at(col + 1), 0.0, z_at(row)),
            ];
            push_quad(&mut mesh, corners.map(|p| Vertex::new(p, Vec3::Y)));
        }
    }

    mesh
}

/// A unit cube-sphere with `subdivisions × subdivisions` quads per cube face.
///
/// Each face point is `normal + tangent·u + bitangent·v` normalized onto the
/// unit sphere, with outward normals equal to the positions.
/// Returns an empty mesh for zero subdivisions.
pub fn sphere(subdivisions: u32) -> IndexedMesh {
    let quads = 6 * subdivisions as usize * subdivisions as usize;
    let mut mesh = IndexedMesh::with_capacity(quads * 4, quads * 6);
    mesh.layout = VertexLayout::PositionNormal;

    for face in CubeFace::ALL {
        let point = |i: u32, j: u32| {
            let u = grid_coordinate(i, subdivisions);
            let v = grid_coordinate(j, subdivisions);
            let p = (face.normal() + face.tangent() * u + face.bitangent() * v).normalize();
            Vertex::new(p, p)
        };
        for j in 0..subdivisions {
            for i in 0..subdivisions {
                push_quad(
                    &mut mesh,
                    [point(i, j), point(i + 1, j), point(i + 1, j + 1), point(i, j + 1)],
                );
            }
        }
    }

    mesh
}

/// Maps grid line `i` of `n` onto `[-1, 1]`.
///
/// Written as `(2i − n) / n` so that `grid_coordinate(n − i) == −grid_coordinate(i)`
/// bit for bit; neighbouring cube faces traverse shared edges in opposite directions.
fn grid_coordinate(i: u32, n: u32) -> f32 {
    (2.0 * i as f32 - n as f32) / n as f32
}

/// Push four counter-clockwise corners as two triangles.
fn push_quad(mesh: &mut IndexedMesh, corners: [Vertex; 4]) {
    let base = mesh.vertices.len() as u32;
    mesh.vertices.extend_from_slice(&corners);
    mesh.indices
        .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
}
