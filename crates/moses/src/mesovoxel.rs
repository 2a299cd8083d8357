//! The evolving minimal representative set of voxel prototypes.

use std::collections::BTreeMap;

use lattice::{ClassId, Lattice, VoxelId};
use symmetry::SymmetryTable;
use tracing::debug;

/// Structural and complementary voxel prototypes plus per-class
/// membership.
///
/// Structural classes are fixed greedily at construction (one
/// representative per symmetry-equivalence class, in lattice iteration
/// order, assigned class ids `1..=K`). Complementary classes (`-K`)
/// are attached lazily while painting. The first member recorded for a
/// class is its proto-voxel, the canonical source of that class's bond
/// coloring.
#[derive(Debug, Clone)]
pub struct Mesovoxel {
    structural: Vec<VoxelId>,
    complementary: Vec<VoxelId>,
    members: BTreeMap<ClassId, Vec<VoxelId>>,
}

impl Mesovoxel {
    /// Greedy structural classification: a voxel opens a new class iff
    /// it has no symmetry with any representative chosen so far.
    pub fn new(lattice: &mut Lattice, table: &SymmetryTable) -> Self {
        let mut mesovoxel = Self {
            structural: Vec::new(),
            complementary: Vec::new(),
            members: BTreeMap::new(),
        };

        for voxel in 0..lattice.len() {
            let is_new_class = mesovoxel
                .structural
                .iter()
                .all(|&s| !table.has_symmetry(voxel, s));
            if is_new_class {
                let class = mesovoxel.structural.len() as ClassId + 1;
                mesovoxel.structural.push(voxel);
                mesovoxel.record(lattice, voxel, class);
                debug!(voxel, class, "new structural class");
            }
        }
        mesovoxel
    }

    /// Structural class representatives in creation order
    #[inline]
    pub fn structural(&self) -> &[VoxelId] {
        &self.structural
    }

    /// Complementary voxels in creation order
    #[inline]
    pub fn complementary(&self) -> &[VoxelId] {
        &self.complementary
    }

    /// Raw voxel-id membership in either prototype set
    pub fn contains_voxel(&self, voxel: VoxelId) -> bool {
        self.structural.contains(&voxel) || self.complementary.contains(&voxel)
    }

    /// Whether the given class id exists (structural or complementary)
    pub fn contains_class(&self, class: ClassId) -> bool {
        self.members.contains_key(&class)
    }

    /// Whether a voxel is one of the structural representatives
    pub fn is_structural(&self, voxel: VoxelId) -> bool {
        self.structural.contains(&voxel)
    }

    /// Proto-voxel of a class: its first-ever member
    pub fn proto(&self, class: ClassId) -> Option<VoxelId> {
        self.members.get(&class).and_then(|m| m.first().copied())
    }

    /// All prototype voxels (structural, then complementary)
    pub fn voxels(&self) -> impl Iterator<Item = VoxelId> + '_ {
        self.structural
            .iter()
            .chain(self.complementary.iter())
            .copied()
    }

    /// First structural and first complementary representative with a
    /// nonzero symlist to the voxel, in class-creation order.
    ///
    /// First-match, not best-match: changing the tie-break would change
    /// output determinism.
    pub fn mesoparents(
        &self,
        table: &SymmetryTable,
        voxel: VoxelId,
    ) -> (Option<(VoxelId, ClassId)>, Option<(VoxelId, ClassId)>) {
        let structural = self
            .structural
            .iter()
            .enumerate()
            .find(|&(_, &s)| table.has_symmetry(voxel, s))
            .map(|(i, &s)| (s, i as ClassId + 1));

        let complementary = self
            .complementary
            .iter()
            .find(|&&c| table.has_symmetry(voxel, c))
            .map(|&c| (c, self.class_of(c)));

        (structural, complementary)
    }

    /// Register `comp` as the complementary partner of a structural
    /// class, assigning it the negated class id.
    pub fn add_complementary(
        &mut self,
        lattice: &mut Lattice,
        comp: VoxelId,
        structural_class: ClassId,
    ) {
        let class = -structural_class;
        self.complementary.push(comp);
        self.record(lattice, comp, class);
        debug!(voxel = comp, class, "new complementary voxel");
    }

    /// Map a voxel onto an existing class
    pub fn assign(&mut self, lattice: &mut Lattice, voxel: VoxelId, class: ClassId) {
        self.record(lattice, voxel, class);
    }

    fn record(&mut self, lattice: &mut Lattice, voxel: VoxelId, class: ClassId) {
        lattice.voxel_mut(voxel).class_id = Some(class);
        self.members.entry(class).or_default().push(voxel);
    }

    fn class_of(&self, voxel: VoxelId) -> ClassId {
        self.members
            .iter()
            .find(|(_, m)| m.first() == Some(&voxel))
            .map(|(&class, _)| class)
            .expect("complementary voxel must be its class proto")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::IVec3;
    use lattice::GridSpec;

    fn setup(spec: &GridSpec) -> (Lattice, SymmetryTable, Mesovoxel) {
        let mut lattice = Lattice::from_grid(spec).unwrap();
        let table = SymmetryTable::build(&lattice);
        let mesovoxel = Mesovoxel::new(&mut lattice, &table);
        (lattice, table, mesovoxel)
    }

    #[test]
    fn test_uniform_cube_collapses_to_one_class() {
        let (lattice, _, mesovoxel) =
            setup(&GridSpec::uniform(IVec3::new(2, 2, 2), 1));
        assert_eq!(mesovoxel.structural(), &[0]);
        assert_eq!(lattice.voxel(0).class_id, Some(1));
        assert_eq!(mesovoxel.proto(1), Some(0));
    }

    #[test]
    fn test_distinct_materials_open_distinct_classes() {
        let mut spec = GridSpec::uniform(IVec3::new(2, 1, 1), 1);
        spec.set(IVec3::new(1, 0, 0), 2);
        let (lattice, _, mesovoxel) = setup(&spec);
        assert_eq!(mesovoxel.structural().len(), 2);
        assert_eq!(lattice.voxel(0).class_id, Some(1));
        assert_eq!(lattice.voxel(1).class_id, Some(2));
    }

    #[test]
    fn test_complementary_registration() {
        let (mut lattice, table, mut mesovoxel) =
            setup(&GridSpec::uniform(IVec3::new(2, 2, 2), 1));
        mesovoxel.add_complementary(&mut lattice, 1, 1);
        assert_eq!(lattice.voxel(1).class_id, Some(-1));
        assert!(mesovoxel.contains_class(-1));
        assert!(mesovoxel.contains_voxel(1));
        assert_eq!(mesovoxel.proto(-1), Some(1));

        // both parents now resolvable, first-match
        let (sv, cv) = mesovoxel.mesoparents(&table, 2);
        assert_eq!(sv, Some((0, 1)));
        assert_eq!(cv, Some((1, -1)));

        // later members never displace the proto as the class source
        mesovoxel.assign(&mut lattice, 2, -1);
        let (_, cv) = mesovoxel.mesoparents(&table, 3);
        assert_eq!(cv, Some((1, -1)));
    }
}
