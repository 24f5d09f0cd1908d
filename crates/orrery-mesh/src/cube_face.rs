//! The six axis-aligned cube faces and their basis vectors.

use glam::Vec3;

/// One of the six faces of a cube, named by the axis its outward normal
/// points along.
///
/// The discriminant order matches the conventional cube-map layer order
/// (+X, −X, +Y, −Y, +Z, −Z).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum CubeFace {
    /// +X face
    PosX = 0,
    /// −X face
    NegX = 1,
    /// +Y face
    PosY = 2,
    /// −Y face
    NegY = 3,
    /// +Z face
    PosZ = 4,
    /// −Z face
    NegZ = 5,
}

impl CubeFace {
    /// All six faces in cube-map layer order.
    pub const ALL: [CubeFace; 6] = [
        CubeFace::PosX,
        CubeFace::NegX,
        CubeFace::PosY,
        CubeFace::NegY,
        CubeFace::PosZ,
        CubeFace::NegZ,
    ];

    /// Layer index of this face in a cube map.
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Outward-pointing unit normal.
    #[must_use]
    pub fn normal(self) -> Vec3 {
        match self {
            CubeFace::PosX => Vec3::X,
            CubeFace::NegX => Vec3::NEG_X,
            CubeFace::PosY => Vec3::Y,
            CubeFace::NegY => Vec3::NEG_Y,
            CubeFace::PosZ => Vec3::Z,
            CubeFace::NegZ => Vec3::NEG_Z,
        }
    }

    /// Direction of increasing `u` on this face.
    #[must_use]
    pub fn tangent(self) -> Vec3 {
        match self {
            CubeFace::PosX => Vec3::NEG_Z,
            CubeFace::NegX => Vec3::Z,
            CubeFace::PosY => Vec3::X,
            CubeFace::NegY => Vec3::X,
            CubeFace::PosZ => Vec3::X,
            CubeFace::NegZ => Vec3::NEG_X,
        }
    }

    /// Direction of increasing `v` on this face.
    ///
    /// `tangent × bitangent == normal` for every face, so a quad wound
    /// counter-clockwise in `(u, v)` faces outward.
    #[must_use]
    pub fn bitangent(self) -> Vec3 {
        match self {
            CubeFace::PosX => Vec3::Y,
            CubeFace::NegX => Vec3::Y,
            CubeFace::PosY => Vec3::NEG_Z,
            CubeFace::NegY => Vec3::Z,
            CubeFace::PosZ => Vec3::Y,
            CubeFace::NegZ => Vec3::Y,
        }
    }

    /// Short lowercase name, e.g. `"px"` for +X, used in file names.
    #[must_use]
    pub fn short_name(self) -> &'static str {
        match self {
            CubeFace::PosX => "px",
            CubeFace::NegX => "nx",
            CubeFace::PosY => "py",
            CubeFace::NegY => "ny",
            CubeFace::PosZ => "pz",
            CubeFace::NegZ => "nz",
        }
    }
}
