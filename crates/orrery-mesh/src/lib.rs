//! Indexed triangle meshes: vertex layout, primitive generators, transforms,
//! face normals, vertex welding with normal smoothing, and OBJ export.

mod cube_face;
mod error;
mod mesh;
mod vertex;

pub mod obj;
pub mod primitives;
pub mod weld;

pub use cube_face::CubeFace;
pub use error::MeshError;
pub use mesh::IndexedMesh;
pub use obj::{save_obj, save_obj_quick, write_obj, write_obj_quick};
pub use vertex::{Vertex, VertexLayout};
pub use weld::{
    ExactPosition, NormalTable, QuantizedPosition, WeldPolicy, smooth_normals,
    smooth_normals_with, smooth_sphere_normals, weld_normals,
};
