//! Pairwise symmetry table — the oracle every painting phase queries.

use std::collections::HashMap;

use lattice::{Lattice, VoxelId};
use tracing::debug;

use crate::rotation::{octahedral_rotations, RotIdx};
use crate::surroundings::Surroundings;

/// For every unordered voxel pair (self-pairs included), the rotation
/// operators under which the lower-id voxel's surroundings match the
/// higher-id voxel's. Computed once per lattice, read-only afterward.
///
/// Self-pairs capture a voxel's own point-group stabilizer, exploited
/// by self-symmetry painting.
#[derive(Debug, Clone)]
pub struct SymmetryTable {
    n_voxels: usize,
    pairs: HashMap<(VoxelId, VoxelId), Vec<RotIdx>>,
}

impl SymmetryTable {
    /// Full O(V^2 * R) build: one signature per voxel, one rotated
    /// signature per (voxel, rotation), one comparison per pair.
    pub fn build(lattice: &Lattice) -> Self {
        let rotations = octahedral_rotations();
        let surroundings = Surroundings::new(lattice);

        let signatures: Vec<_> = (0..lattice.len())
            .map(|v| surroundings.signature(v))
            .collect();

        let mut pairs: HashMap<(VoxelId, VoxelId), Vec<RotIdx>> = HashMap::new();
        for (rot_idx, op) in rotations.iter().enumerate() {
            for v1 in 0..lattice.len() {
                let rotated = Surroundings::rotate(&signatures[v1], op);
                for v2 in v1..lattice.len() {
                    if rotated == signatures[v2] {
                        pairs.entry((v1, v2)).or_default().push(rot_idx as RotIdx);
                    }
                }
            }
        }

        debug!(
            voxels = lattice.len(),
            rotations = rotations.len(),
            symmetric_pairs = pairs.len(),
            "symmetry table built"
        );
        Self {
            n_voxels: lattice.len(),
            pairs,
        }
    }

    #[inline]
    fn key(v1: VoxelId, v2: VoxelId) -> (VoxelId, VoxelId) {
        (v1.min(v2), v1.max(v2))
    }

    /// Rotation indices under which the pair is symmetric; empty when
    /// none. Order-independent in the arguments. Out-of-range ids are
    /// programmer errors.
    pub fn symlist(&self, v1: VoxelId, v2: VoxelId) -> &[RotIdx] {
        assert!(v1 < self.n_voxels && v2 < self.n_voxels, "voxel id out of range");
        self.pairs
            .get(&Self::key(v1, v2))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Boolean form of [`symlist`](Self::symlist)
    pub fn has_symmetry(&self, v1: VoxelId, v2: VoxelId) -> bool {
        !self.symlist(v1, v2).is_empty()
    }

    /// All voxels the given voxel has any symmetry with (self included,
    /// since the identity always stabilizes a voxel's own signature)
    pub fn sym_voxels(&self, voxel: VoxelId) -> Vec<VoxelId> {
        (0..self.n_voxels)
            .filter(|&other| self.has_symmetry(voxel, other))
            .collect()
    }

    /// Per-voxel map of symmetric partners and their rotation lists,
    /// for diagnostics
    pub fn symdict(&self, voxel: VoxelId) -> Vec<(VoxelId, &[RotIdx])> {
        (0..self.n_voxels)
            .map(|other| (other, self.symlist(voxel, other)))
            .filter(|(_, list)| !list.is_empty())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rotation::IDENTITY;
    use glam::IVec3;
    use lattice::GridSpec;

    #[test]
    fn test_reflexive_identity() {
        let lattice =
            Lattice::from_grid(&GridSpec::uniform(IVec3::new(2, 2, 1), 1)).unwrap();
        let table = SymmetryTable::build(&lattice);
        for v in 0..lattice.len() {
            assert!(table.symlist(v, v).contains(&IDENTITY));
        }
    }

    #[test]
    fn test_order_independent() {
        let lattice =
            Lattice::from_grid(&GridSpec::uniform(IVec3::new(2, 2, 2), 1)).unwrap();
        let table = SymmetryTable::build(&lattice);
        for a in 0..lattice.len() {
            for b in 0..lattice.len() {
                assert_eq!(table.symlist(a, b), table.symlist(b, a));
            }
        }
    }

    #[test]
    fn test_uniform_lattice_fully_symmetric() {
        let lattice =
            Lattice::from_grid(&GridSpec::uniform(IVec3::new(2, 2, 2), 1)).unwrap();
        let table = SymmetryTable::build(&lattice);
        for v in 0..lattice.len() {
            assert_eq!(table.sym_voxels(v).len(), lattice.len());
        }
    }

    #[test]
    fn test_distinct_materials_break_symmetry() {
        let mut spec = GridSpec::uniform(IVec3::new(2, 1, 1), 1);
        spec.set(IVec3::new(1, 0, 0), 2);
        let lattice = Lattice::from_grid(&spec).unwrap();
        let table = SymmetryTable::build(&lattice);
        assert!(!table.has_symmetry(0, 1));
        assert!(table.has_symmetry(0, 0));
    }

    #[test]
    #[should_panic(expected = "voxel id out of range")]
    fn test_bad_id_fails_fast() {
        let lattice =
            Lattice::from_grid(&GridSpec::uniform(IVec3::ONE, 1)).unwrap();
        let table = SymmetryTable::build(&lattice);
        table.symlist(0, 5);
    }
}
