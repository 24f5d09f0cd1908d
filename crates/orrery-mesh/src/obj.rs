//! Wavefront OBJ export.
//!
//! [`write_obj`] emits every attribute the mesh layout marks as meaningful
//! (`v`, `vt`, `vn`) with matching face references; [`write_obj_quick`]
//! emits positions and plain faces only. OBJ indices are 1-based.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::debug;

use crate::error::MeshError;
use crate::mesh::IndexedMesh;

/// Write `mesh` with all attributes its layout carries.
pub fn write_obj<W: Write>(mesh: &IndexedMesh, out: &mut W) -> Result<(), MeshError> {
    let layout = mesh.layout;
    writeln!(
        out,
        "# {} vertices, {} triangles",
        mesh.vertex_count(),
        mesh.triangle_count()
    )?;

    for v in &mesh.vertices {
        let [x, y, z] = v.position;
        writeln!(out, "v {x:.6} {y:.6} {z:.6}")?;
    }
    if layout.has_uvs() {
        for v in &mesh.vertices {
            let [u, t] = v.uv;
            writeln!(out, "vt {u:.6} {t:.6}")?;
        }
    }
    if layout.has_normals() {
        for v in &mesh.vertices {
            let [x, y, z] = v.normal;
            writeln!(out, "vn {x:.6} {y:.6} {z:.6}")?;
        }
    }

    for [a, b, c] in mesh.triangles() {
        let (a, b, c) = (a + 1, b + 1, c + 1);
        if layout.has_uvs() {
            writeln!(out, "f {a}/{a}/{a} {b}/{b}/{b} {c}/{c}/{c}")?;
        } else if layout.has_normals() {
            writeln!(out, "f {a}//{a} {b}//{b} {c}//{c}")?;
        } else {
            writeln!(out, "f {a} {b} {c}")?;
        }
    }
    Ok(())
}

/// Write positions and faces only.
pub fn write_obj_quick<W: Write>(mesh: &IndexedMesh, out: &mut W) -> Result<(), MeshError> {
    for v in &mesh.vertices {
        let [x, y, z] = v.position;
        writeln!(out, "v {x} {y} {z}")?;
    }
    for [a, b, c] in mesh.triangles() {
        writeln!(out, "f {} {} {}", a + 1, b + 1, c + 1)?;
    }
    Ok(())
}

/// Write `mesh` to `path` with [`write_obj`].
pub fn save_obj(mesh: &IndexedMesh, path: &Path) -> Result<(), MeshError> {
    let mut out = BufWriter::new(File::create(path)?);
    write_obj(mesh, &mut out)?;
    out.flush()?;
    debug!(path = %path.display(), vertices = mesh.vertex_count(), "saved mesh");
    Ok(())
}

/// Write `mesh` to `path` with [`write_obj_quick`].
pub fn save_obj_quick(mesh: &IndexedMesh, path: &Path) -> Result<(), MeshError> {
    let mut out = BufWriter::new(File::create(path)?);
    write_obj_quick(mesh, &mut out)?;
    out.flush()?;
    debug!(path = %path.display(), vertices = mesh.vertex_count(), "saved mesh (quick)");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives;
    use crate::vertex::VertexLayout;

    fn render(mesh: &IndexedMesh, quick: bool) -> String {
        let mut buf = Vec::new();
        if quick {
            write_obj_quick(mesh, &mut buf).unwrap();
        } else {
            write_obj(mesh, &mut buf).unwrap();
        }
        String::from_utf8(buf).unwrap()
    }

    fn count_prefix(text: &str, prefix: &str) -> usize {
        text.lines().filter(|l| l.starts_with(prefix)).count()
    }

    #[test]
    fn test_verbose_writes_all_attributes() {
        let mut mesh = primitives::plane(1, 2);
        mesh.layout = VertexLayout::PositionUvNormal;
        let text = render(&mesh, false);

        assert_eq!(count_prefix(&text, "v "), 8);
        assert_eq!(count_prefix(&text, "vt "), 8);
        assert_eq!(count_prefix(&text, "vn "), 8);
        assert_eq!(count_prefix(&text, "f "), 4);
        assert!(text.contains("f 1/1/1 2/2/2 3/3/3"), "faces should be 1-based:\n{text}");
    }

    #[test]
    fn test_verbose_respects_normal_only_layout() {
        let mesh = primitives::plane(1, 1);
        let text = render(&mesh, false);
        assert_eq!(count_prefix(&text, "vt "), 0);
        assert_eq!(count_prefix(&text, "vn "), 4);
        assert!(text.contains("f 1//1 2//2 3//3"));
    }

    #[test]
    fn test_quick_omits_extra_attributes() {
        let mut mesh = primitives::plane(2, 2);
        mesh.layout = VertexLayout::PositionUvNormal;
        let text = render(&mesh, true);

        assert_eq!(count_prefix(&text, "v "), 16);
        assert_eq!(count_prefix(&text, "vt "), 0);
        assert_eq!(count_prefix(&text, "vn "), 0);
        assert_eq!(count_prefix(&text, "f "), 8);
        assert!(text.lines().any(|l| l == "f 1 2 3"));
    }

    #[test]
    fn test_save_to_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sphere.obj");
        let mesh = primitives::sphere(2);
        save_obj(&mesh, &path).unwrap();
        save_obj_quick(&mesh, &dir.path().join("sphere_quick.obj")).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(count_prefix(&text, "v "), mesh.vertex_count());
        assert_eq!(count_prefix(&text, "f "), mesh.triangle_count());
    }

    #[test]
    fn test_save_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("mesh.obj");
        let result = save_obj(&primitives::plane(1, 1), &path);
        assert!(matches!(result, Err(MeshError::Io(_))));
    }
}
