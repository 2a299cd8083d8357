//! Translation-invariant local signatures.
//!
//! For a voxel `v`, the signature maps every relative offset within a
//! bounding cube (half-width = largest lattice dimension) to the
//! material found there under periodic wraparound. Each offset is
//! re-centered on the cargo sub-position of the voxel found there, so
//! cargo orientation participates in symmetry checks.

use std::collections::BTreeMap;

use glam::Vec3;
use lattice::{Lattice, Material, VoxelId};

use crate::rotation::RotationOp;

/// Signature keys are offsets quantized to centi-units, which absorbs
/// the float error of rotation application (two-decimal precision).
pub type SigKey = (i32, i32, i32);

/// Offset -> material map. A sorted map keeps iteration (and therefore
/// overwrite resolution on colliding keys) deterministic.
pub type Signature = BTreeMap<SigKey, Material>;

const KEY_SCALE: f32 = 100.0;

#[inline]
fn quantize(v: Vec3) -> SigKey {
    let q = (v * KEY_SCALE).round();
    (q.x as i32, q.y as i32, q.z as i32)
}

#[inline]
fn unquantize(key: SigKey) -> Vec3 {
    Vec3::new(key.0 as f32, key.1 as f32, key.2 as f32) / KEY_SCALE
}

/// Signature builder over one lattice
pub struct Surroundings<'a> {
    lattice: &'a Lattice,
}

impl<'a> Surroundings<'a> {
    pub fn new(lattice: &'a Lattice) -> Self {
        Self { lattice }
    }

    /// Build the surroundings signature of one voxel
    pub fn signature(&self, voxel: VoxelId) -> Signature {
        let center = self.lattice.voxel(voxel).coords;
        let reach = self.lattice.dims().max_element();

        let mut sig = Signature::new();
        for dx in -reach..=reach {
            for dy in -reach..=reach {
                for dz in -reach..=reach {
                    let offset = glam::IVec3::new(dx, dy, dz);
                    let found = self
                        .lattice
                        .voxel(self.lattice.voxel_at(center + offset));
                    let key = quantize(offset.as_vec3() + found.cargo_coords);
                    sig.insert(key, found.cargo);
                }
            }
        }
        sig
    }

    /// Rotate every offset key of a signature, keeping values
    pub fn rotate(sig: &Signature, op: &RotationOp) -> Signature {
        sig.iter()
            .map(|(&key, &material)| (quantize(op.rotate_vec3(unquantize(key))), material))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rotation::octahedral_rotations;
    use glam::IVec3;
    use lattice::GridSpec;

    #[test]
    fn test_uniform_signature_is_rotation_invariant() {
        let lattice =
            Lattice::from_grid(&GridSpec::uniform(IVec3::new(2, 2, 2), 1)).unwrap();
        let surr = Surroundings::new(&lattice);
        let sig = surr.signature(0);
        for op in octahedral_rotations() {
            assert_eq!(Surroundings::rotate(&sig, op), sig, "op {}", op.label);
        }
    }

    #[test]
    fn test_cargo_offset_shifts_keys() {
        let mut spec = GridSpec::uniform(IVec3::ONE, 1);
        spec.set_with_offset(IVec3::ZERO, 1, Vec3::new(0.0, 0.0, 0.5));
        let lattice = Lattice::from_grid(&spec).unwrap();
        let sig = Surroundings::new(&lattice).signature(0);
        // every visible copy of the voxel sits half a step up in z
        assert!(sig.keys().all(|&(_, _, z)| z % 100 != 0));
        assert!(sig.contains_key(&(0, 0, 50)));
    }

    #[test]
    fn test_materials_read_through_wrap() {
        let mut spec = GridSpec::uniform(IVec3::new(2, 1, 1), 1);
        spec.set(IVec3::new(1, 0, 0), 9);
        let lattice = Lattice::from_grid(&spec).unwrap();
        let sig = Surroundings::new(&lattice).signature(0);
        // odd x offsets see material 9, even see material 1
        assert_eq!(sig[&(100, 0, 0)], 9);
        assert_eq!(sig[&(-100, 0, 0)], 9);
        assert_eq!(sig[&(200, 0, 0)], 1);
    }
}
