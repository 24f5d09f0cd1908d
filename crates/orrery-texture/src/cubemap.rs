//! Six-face skybox textures.

use orrery_mesh::CubeFace;
use rand::Rng;
use tracing::debug;

use crate::bitmap::Bitmap;
use crate::starfield::{FieldParams, synthesize_field};

/// Six equal-sized bitmaps, one per cube-map direction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CubeFaceSet {
    face_size: u32,
    faces: [Bitmap; 6],
}

impl CubeFaceSet {
    /// Synthesize six independent `face_size × face_size` starfield faces.
    ///
    /// Faces are drawn from one random stream in [`CubeFace::ALL`] order, so
    /// they are uncorrelated but the whole set is reproducible from a seeded `rng`.
    pub fn synthesize<R: Rng + ?Sized>(face_size: u32, params: &FieldParams, rng: &mut R) -> Self {
        let faces = std::array::from_fn(|_| synthesize_field(face_size, face_size, params, rng));
        debug!(face_size, ?params, "synthesized skybox faces");
        Self { face_size, faces }
    }

    /// Width and height of every face in pixels.
    pub fn face_size(&self) -> u32 {
        self.face_size
    }

    pub fn face(&self, face: CubeFace) -> &Bitmap {
        &self.faces[face.index()]
    }

    /// Faces paired with their direction, in cube-map layer order.
    pub fn iter(&self) -> impl Iterator<Item = (CubeFace, &Bitmap)> {
        CubeFace::ALL.into_iter().zip(self.faces.iter())
    }

    /// RGBA bytes of all six faces concatenated in layer order, for a single
    /// cube-texture upload.
    pub fn to_layered_bytes(&self) -> Vec<u8> {
        self.faces
            .iter()
            .flat_map(|f| f.as_bytes().iter().copied())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn params() -> FieldParams {
        FieldParams {
            threshold: 90,
            range: 100,
            smooth: 2,
        }
    }

    #[test]
    fn test_faces_share_dimensions() {
        let set = CubeFaceSet::synthesize(32, &params(), &mut ChaCha8Rng::seed_from_u64(1));
        assert_eq!(set.face_size(), 32);
        for (face, bitmap) in set.iter() {
            assert_eq!(bitmap.dimensions(), (32, 32), "{face:?}");
            assert_eq!(bitmap.channels(), 4);
        }
    }

    #[test]
    fn test_faces_are_independent() {
        let set = CubeFaceSet::synthesize(32, &params(), &mut ChaCha8Rng::seed_from_u64(1));
        for a in CubeFace::ALL {
            for b in CubeFace::ALL {
                if a < b {
                    assert_ne!(set.face(a), set.face(b), "{a:?} and {b:?} are identical");
                }
            }
        }
    }

    #[test]
    fn test_first_face_matches_single_field() {
        let set = CubeFaceSet::synthesize(16, &params(), &mut ChaCha8Rng::seed_from_u64(4));
        let single = synthesize_field(16, 16, &params(), &mut ChaCha8Rng::seed_from_u64(4));
        assert_eq!(set.face(CubeFace::PosX), &single);
    }

    #[test]
    fn test_layered_bytes_length() {
        let set = CubeFaceSet::synthesize(8, &params(), &mut ChaCha8Rng::seed_from_u64(2));
        assert_eq!(set.to_layered_bytes().len(), 6 * 8 * 8 * 4);
    }
}
