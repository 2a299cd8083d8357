use std::collections::HashMap;

use glam::IVec3;
use tracing::debug;

use crate::axis::Axis;
use crate::error::{LatticeError, Result};
use crate::grid::GridSpec;
use crate::voxel::{Bond, BondRef, ClassId, Voxel, VoxelId};

/// The full voxel graph: an index-based arena of voxels plus the
/// periodic bond-partner adjacency.
///
/// Every voxel has exactly 6 bonds and every bond has a partner;
/// boundary voxels wrap modulo the lattice dimensions, so the graph
/// is 6-regular and connected.
#[derive(Debug, Clone)]
pub struct Lattice {
    voxels: Vec<Voxel>,
    dims: IVec3,
    coord_to_id: HashMap<IVec3, VoxelId>,
}

impl Lattice {
    /// Build the lattice from a grid specification: materialize the
    /// minimal tileable unit, then link every bond to its periodic
    /// partner.
    pub fn from_grid(spec: &GridSpec) -> Result<Self> {
        spec.validate()?;
        let (dims, cells) = spec.unit_cells();

        let mut voxels = Vec::with_capacity(cells.len());
        let mut coord_to_id = HashMap::with_capacity(cells.len());
        for (coords, material, cargo_offset) in cells {
            let id = voxels.len();
            coord_to_id.insert(coords, id);
            voxels.push(Voxel::new(id, coords, material, cargo_offset));
        }

        let mut lattice = Self {
            voxels,
            dims,
            coord_to_id,
        };
        lattice.fill_partners()?;
        debug!(
            voxels = lattice.voxels.len(),
            dims = ?lattice.dims,
            "lattice constructed"
        );
        Ok(lattice)
    }

    /// Lattice dimensions of the minimal tileable unit
    #[inline]
    pub fn dims(&self) -> IVec3 {
        self.dims
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.voxels.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.voxels.is_empty()
    }

    /// All voxels in id order
    #[inline]
    pub fn voxels(&self) -> &[Voxel] {
        &self.voxels
    }

    /// Voxel by id. Out-of-range ids are programmer errors and panic.
    #[inline]
    pub fn voxel(&self, id: VoxelId) -> &Voxel {
        &self.voxels[id]
    }

    #[inline]
    pub fn voxel_mut(&mut self, id: VoxelId) -> &mut Voxel {
        &mut self.voxels[id]
    }

    /// Wrap a coordinate into the periodic unit
    #[inline]
    pub fn wrap(&self, coords: IVec3) -> IVec3 {
        IVec3::new(
            coords.x.rem_euclid(self.dims.x),
            coords.y.rem_euclid(self.dims.y),
            coords.z.rem_euclid(self.dims.z),
        )
    }

    /// Voxel id at a (wrapped) coordinate
    #[inline]
    pub fn voxel_at(&self, coords: IVec3) -> VoxelId {
        self.coord_to_id[&self.wrap(coords)]
    }

    #[inline]
    pub fn bond(&self, bond: BondRef) -> &Bond {
        self.voxels[bond.voxel].bond(bond.axis)
    }

    #[inline]
    pub fn bond_mut(&mut self, bond: BondRef) -> &mut Bond {
        self.voxels[bond.voxel].bond_mut(bond.axis)
    }

    /// Partner bond of `bond`, surfacing a structural error if the
    /// partner graph is incomplete.
    pub fn partner_of(&self, bond: BondRef) -> Result<BondRef> {
        self.bond(bond).partner.ok_or_else(|| {
            tracing::error!(voxel = bond.voxel, axis = %bond.axis, "missing bond partner");
            LatticeError::MissingPartner {
                voxel: bond.voxel,
                axis: bond.axis,
            }
        })
    }

    /// Whether any of `voxel`'s bonds reaches `other` directly
    pub fn touches_voxel(&self, voxel: VoxelId, other: VoxelId) -> bool {
        self.voxel(voxel)
            .bonds
            .iter()
            .filter_map(|b| b.partner)
            .any(|p| p.voxel == other)
    }

    /// Whether any of `voxel`'s bonds reaches a voxel of class `class`
    pub fn touches_class(&self, voxel: VoxelId, class: ClassId) -> bool {
        self.voxel(voxel)
            .bonds
            .iter()
            .filter_map(|b| b.partner)
            .any(|p| self.voxel(p.voxel).class_id == Some(class))
    }

    /// Link every bond with its periodic partner, in place
    fn fill_partners(&mut self) -> Result<()> {
        for id in 0..self.voxels.len() {
            for axis in Axis::ALL {
                if self.voxels[id].bond(axis).partner.is_some() {
                    continue;
                }
                let partner_coords = self.voxels[id].coords + axis.to_ivec3();
                let pid = self.voxel_at(partner_coords);
                let pref = BondRef::new(pid, axis.opposite());
                self.voxels[id].bond_mut(axis).partner = Some(pref);
                self.voxels[pid].bond_mut(axis.opposite()).partner =
                    Some(BondRef::new(id, axis));
            }
        }
        // construction guarantees completeness, but keep the invariant checked
        for v in &self.voxels {
            for axis in Axis::ALL {
                if v.bond(axis).partner.is_none() {
                    return Err(LatticeError::MissingPartner {
                        voxel: v.id,
                        axis,
                    });
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    fn cube2() -> Lattice {
        Lattice::from_grid(&GridSpec::uniform(IVec3::new(2, 2, 2), 1)).unwrap()
    }

    #[test]
    fn test_partners_are_mutual() {
        let lattice = cube2();
        for v in lattice.voxels() {
            for axis in Axis::ALL {
                let here = BondRef::new(v.id, axis);
                let there = lattice.partner_of(here).unwrap();
                assert_eq!(lattice.partner_of(there).unwrap(), here);
            }
        }
    }

    #[test]
    fn test_periodic_wrap() {
        let lattice = cube2();
        let v0 = lattice.voxel_at(IVec3::ZERO);
        // +x from (1,0,0) wraps back to (0,0,0)
        let v1 = lattice.voxel_at(IVec3::new(1, 0, 0));
        let p = lattice.partner_of(BondRef::new(v1, Axis::PosX)).unwrap();
        assert_eq!(p.voxel, v0);
        assert_eq!(p.axis, Axis::NegX);
    }

    #[test]
    fn test_single_voxel_self_wrap() {
        let lattice =
            Lattice::from_grid(&GridSpec::uniform(IVec3::ONE, 1)).unwrap();
        assert_eq!(lattice.len(), 1);
        for axis in Axis::ALL {
            let p = lattice.partner_of(BondRef::new(0, axis)).unwrap();
            assert_eq!(p.voxel, 0);
            assert_eq!(p.axis, axis.opposite());
        }
    }

    #[test]
    fn test_touching_by_voxel_and_class() {
        let mut lattice =
            Lattice::from_grid(&GridSpec::uniform(IVec3::new(2, 1, 1), 1)).unwrap();
        assert!(lattice.touches_voxel(0, 1));
        assert!(!lattice.touches_class(0, 1));
        lattice.voxel_mut(1).class_id = Some(1);
        assert!(lattice.touches_class(0, 1));
    }

    #[test]
    fn test_cargo_carried_through() {
        let mut spec = GridSpec::uniform(IVec3::new(2, 1, 1), 1);
        spec.set_with_offset(IVec3::ZERO, 2, Vec3::new(0.0, 0.0, 0.5));
        let lattice = Lattice::from_grid(&spec).unwrap();
        let v = lattice.voxel(lattice.voxel_at(IVec3::ZERO));
        assert_eq!(v.cargo, 2);
        assert_eq!(v.cargo_coords, Vec3::new(0.0, 0.0, 0.5));
    }
}
