//! Planet and moon assembly from cube-spheres.

use glam::Vec3;
use orrery_mesh::{IndexedMesh, primitives, smooth_normals, smooth_sphere_normals};
use tracing::debug;

use crate::displace::apply_height_gradient;

/// Sizes and placement of the planet and its moon.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlanetParams {
    /// Quads per cube face edge of the planet.
    pub subdivisions: u32,
    pub radius: f32,
    pub moon_subdivisions: u32,
    pub moon_radius: f32,
    /// Moon center relative to the planet center.
    pub moon_offset: Vec3,
    /// Use exact radial normals. Otherwise normals are flat face normals
    /// welded across coincident corners.
    pub sphere_normals: bool,
}

impl Default for PlanetParams {
    fn default() -> Self {
        Self {
            subdivisions: 4,
            radius: 12.0,
            moon_subdivisions: 8,
            moon_radius: 6.0,
            moon_offset: Vec3::new(34.0, 0.0, 0.0),
            sphere_normals: true,
        }
    }
}

/// One mesh holding the planet at the origin and the moon at `moon_offset`,
/// with height gradient coordinates over the combined bounds.
pub fn build_planet(params: &PlanetParams) -> IndexedMesh {
    let mut planet = body(params.subdivisions, params.radius, params.sphere_normals);
    let mut moon = body(params.moon_subdivisions, params.moon_radius, params.sphere_normals);
    moon.translate(params.moon_offset);
    planet.combine(&moon);
    apply_height_gradient(&mut planet);

    debug!(
        vertices = planet.vertex_count(),
        triangles = planet.triangle_count(),
        "assembled planet"
    );
    planet
}

// Normals are resolved while the sphere is still centered on the origin.
fn body(subdivisions: u32, radius: f32, sphere_normals: bool) -> IndexedMesh {
    let mut mesh = primitives::sphere(subdivisions);
    mesh.scale(radius);
    if sphere_normals {
        smooth_sphere_normals(&mut mesh);
    } else {
        mesh.recompute_face_normals();
        smooth_normals(&mut mesh);
    }
    mesh
}

#[cfg(test)]
mod tests {
    use super::*;
    use orrery_mesh::VertexLayout;

    fn small() -> PlanetParams {
        PlanetParams {
            subdivisions: 2,
            moon_subdivisions: 3,
            ..PlanetParams::default()
        }
    }

    #[test]
    fn test_combined_counts() {
        let mesh = build_planet(&small());
        let quads = 6 * (2 * 2 + 3 * 3);
        assert_eq!(mesh.vertex_count(), quads * 4);
        assert_eq!(mesh.triangle_count(), quads * 2);
        assert!(mesh.validate().is_ok());
        assert_eq!(mesh.layout, VertexLayout::PositionUvNormal);
    }

    #[test]
    fn test_bodies_are_sized_and_placed() {
        let params = small();
        let mesh = build_planet(&params);
        let planet_slots = 6 * 2 * 2 * 4;
        let (planet, moon) = mesh.vertices.split_at(planet_slots);

        for v in planet {
            let r = v.position().length();
            assert!((r - 12.0).abs() < 1e-4, "planet vertex at radius {r}");
        }
        for v in moon {
            let r = (v.position() - params.moon_offset).length();
            assert!((r - 6.0).abs() < 1e-4, "moon vertex at radius {r}");
        }
    }

    #[test]
    fn test_sphere_normals_point_outward_from_each_center() {
        let params = small();
        let mesh = build_planet(&params);
        let planet_slots = 6 * 2 * 2 * 4;
        for (i, v) in mesh.vertices.iter().enumerate() {
            let center = if i < planet_slots { Vec3::ZERO } else { params.moon_offset };
            let expected = (v.position() - center).normalize();
            assert!(
                v.normal().distance(expected) < 1e-4,
                "slot {i}: normal {:?} expected {expected:?}",
                v.normal()
            );
        }
    }

    #[test]
    fn test_welded_normals_are_unit_and_outward() {
        let params = PlanetParams {
            sphere_normals: false,
            ..small()
        };
        let mesh = build_planet(&params);
        let planet_slots = 6 * 2 * 2 * 4;
        for (i, v) in mesh.vertices.iter().enumerate() {
            let center = if i < planet_slots { Vec3::ZERO } else { params.moon_offset };
            let n = v.normal();
            assert!((n.length() - 1.0).abs() < 1e-5, "slot {i}: |n| = {}", n.length());
            assert!(n.dot(v.position() - center) > 0.0, "slot {i} faces inward");
        }
    }

    #[test]
    fn test_gradient_spans_combined_height() {
        let mesh = build_planet(&small());
        let (min, max) = mesh.bounds().unwrap();
        assert_eq!(min.y, -12.0);
        assert_eq!(max.y, 12.0);
        for v in &mesh.vertices {
            assert!((0.0..=1.0).contains(&v.uv[0]));
        }
    }

    #[test]
    fn test_zero_subdivision_moon_is_empty() {
        let params = PlanetParams {
            moon_subdivisions: 0,
            ..small()
        };
        let mesh = build_planet(&params);
        assert_eq!(mesh.vertex_count(), 6 * 2 * 2 * 4);
    }
}
