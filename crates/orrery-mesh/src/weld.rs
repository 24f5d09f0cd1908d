//! Vertex welding for smooth shading.
//!
//! Vertices that share a position are grouped and each group's normals are
//! averaged, so adjacent flat-shaded faces blend into one smooth surface
//! without touching the triangle topology. Grouping uses a pluggable
//! [`WeldPolicy`]; the default [`ExactPosition`] merges only bit-identical
//! positions, i.e. corners produced by the same arithmetic path. Visually
//! coincident vertices that differ in the last bit stay separate unless a
//! tolerant policy such as [`QuantizedPosition`] is used.

use std::hash::Hash;

use glam::Vec3;
use rustc_hash::FxHashMap;
use tracing::debug;

use crate::mesh::IndexedMesh;
use crate::vertex::{Vertex, VertexLayout};

/// Decides which vertex positions count as the same point.
pub trait WeldPolicy {
    /// Hashable identity of a position. Positions with equal keys are welded.
    type Key: Hash + Eq;

    fn key(&self, position: [f32; 3]) -> Self::Key;
}

/// Bit-for-bit position equality. `0.0` and `-0.0` are distinct.
#[derive(Clone, Copy, Debug, Default)]
pub struct ExactPosition;

impl WeldPolicy for ExactPosition {
    type Key = [u32; 3];

    fn key(&self, position: [f32; 3]) -> Self::Key {
        position.map(f32::to_bits)
    }
}

/// Snaps positions to a grid of cell size `epsilon` before comparing.
///
/// Points closer than `epsilon` usually weld, but two points straddling a
/// cell boundary do not.
#[derive(Clone, Copy, Debug)]
pub struct QuantizedPosition {
    pub epsilon: f32,
}

impl WeldPolicy for QuantizedPosition {
    type Key = [i64; 3];

    fn key(&self, position: [f32; 3]) -> Self::Key {
        position.map(|c| (c / self.epsilon).round() as i64)
    }
}

/// One unique position and the vertex slots that share it.
#[derive(Clone, Debug)]
struct WeldGroup {
    position: Vec3,
    slots: Vec<u32>,
    normal: Vec3,
}

/// Unique positions of a vertex list (first-seen order), the slots mapped to
/// each, and each group's averaged unit normal.
///
/// A build-time structure: create it, scatter or compact, and drop it.
#[derive(Clone, Debug)]
pub struct NormalTable {
    groups: Vec<WeldGroup>,
    slot_group: Vec<usize>,
}

impl NormalTable {
    /// Group `vertices` by `policy` and average each group's normals.
    ///
    /// A group whose normals cancel out gets a zero normal.
    pub fn build<P: WeldPolicy>(vertices: &[Vertex], policy: &P) -> Self {
        let mut lookup: FxHashMap<P::Key, usize> = FxHashMap::default();
        let mut groups: Vec<WeldGroup> = Vec::new();
        let mut slot_group = Vec::with_capacity(vertices.len());

        for (slot, vertex) in vertices.iter().enumerate() {
            let group = *lookup.entry(policy.key(vertex.position)).or_insert_with(|| {
                groups.push(WeldGroup {
                    position: vertex.position(),
                    slots: Vec::new(),
                    normal: Vec3::ZERO,
                });
                groups.len() - 1
            });
            groups[group].slots.push(slot as u32);
            groups[group].normal += vertex.normal();
            slot_group.push(group);
        }

        for group in &mut groups {
            let count = group.slots.len() as f32;
            group.normal = (group.normal / count).normalize_or_zero();
        }

        Self { groups, slot_group }
    }

    /// Number of distinct positions.
    pub fn unique_count(&self) -> usize {
        self.groups.len()
    }

    /// Number of vertex slots the table was built from.
    pub fn slot_count(&self) -> usize {
        self.slot_group.len()
    }

    /// Distinct positions in first-seen order.
    pub fn positions(&self) -> impl Iterator<Item = Vec3> + '_ {
        self.groups.iter().map(|g| g.position)
    }

    /// Averaged unit normal of each distinct position, parallel to [`Self::positions`].
    pub fn averaged_normals(&self) -> impl Iterator<Item = Vec3> + '_ {
        self.groups.iter().map(|g| g.normal)
    }

    /// Slots sharing the `group`-th distinct position.
    ///
    /// # Panics
    ///
    /// Panics if `group >= unique_count()`.
    pub fn slots(&self, group: usize) -> &[u32] {
        &self.groups[group].slots
    }

    /// Averaged normal of the group that `slot` belongs to.
    ///
    /// # Panics
    ///
    /// Panics if `slot >= slot_count()`.
    pub fn normal_for_slot(&self, slot: usize) -> Vec3 {
        self.groups[self.slot_group[slot]].normal
    }

    /// One averaged normal per original slot, in slot order.
    pub fn scatter(&self) -> Vec<Vec3> {
        self.slot_group
            .iter()
            .map(|&g| self.groups[g].normal)
            .collect()
    }

    /// Build a mesh with one vertex per distinct position and remapped indices.
    ///
    /// Each welded vertex copies the first slot of its group and takes the
    /// averaged normal. `mesh` must be the mesh the table was built from.
    pub fn compact(&self, mesh: &IndexedMesh) -> IndexedMesh {
        let vertices = self
            .groups
            .iter()
            .map(|g| {
                let mut v = mesh.vertices[g.slots[0] as usize];
                v.set_normal(g.normal);
                v
            })
            .collect();
        let indices = mesh
            .indices
            .iter()
            .map(|&i| self.slot_group[i as usize] as u32)
            .collect();

        IndexedMesh {
            vertices,
            indices,
            layout: mesh.layout.max(VertexLayout::PositionNormal),
        }
    }
}

/// Averaged normals for `vertices`, one per slot, grouped by `policy`.
pub fn weld_normals<P: WeldPolicy>(vertices: &[Vertex], policy: &P) -> Vec<Vec3> {
    NormalTable::build(vertices, policy).scatter()
}

/// Replace every normal of `mesh` with the average of all normals at its exact position.
pub fn smooth_normals(mesh: &mut IndexedMesh) {
    smooth_normals_with(mesh, &ExactPosition);
}

/// Like [`smooth_normals`] with a custom grouping policy.
pub fn smooth_normals_with<P: WeldPolicy>(mesh: &mut IndexedMesh, policy: &P) {
    if mesh.vertices.is_empty() {
        return;
    }
    let table = NormalTable::build(&mesh.vertices, policy);
    debug!(
        slots = table.slot_count(),
        unique = table.unique_count(),
        "welded vertex normals"
    );
    for (v, n) in mesh.vertices.iter_mut().zip(table.scatter()) {
        v.set_normal(n);
    }
    mesh.layout = mesh.layout.max(VertexLayout::PositionNormal);
}

/// Set every normal to the normalized position.
///
/// Only meaningful for meshes centered on the origin, such as an untranslated
/// sphere. A vertex at the origin gets a zero normal.
pub fn smooth_sphere_normals(mesh: &mut IndexedMesh) {
    for v in &mut mesh.vertices {
        v.set_normal(v.position().normalize_or_zero());
    }
    mesh.layout = mesh.layout.max(VertexLayout::PositionNormal);
}
