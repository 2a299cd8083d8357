//! Symmetry-propagation painting primitives.
//!
//! `map_paint` copies one voxel's bond coloring onto another through
//! every rotation the symmetry table allows, subject to an
//! all-or-nothing palindrome check; `self_sym_paint` is the same
//! operation through a voxel's own stabilizer.

use lattice::{Axis, BondKind, BondRef, Lattice, VoxelId};
use symmetry::{octahedral_rotations, RotationOp, SymmetryTable};
use tracing::{debug, trace};

use crate::error::Result;

/// Painting engine over one symmetry table. Holds no lattice state;
/// all mutation goes through the `&mut Lattice` handed to each call.
pub struct Painter<'a> {
    table: &'a SymmetryTable,
    rotations: &'static [RotationOp],
}

impl<'a> Painter<'a> {
    pub fn new(table: &'a SymmetryTable) -> Self {
        Self {
            table,
            rotations: octahedral_rotations(),
        }
    }

    /// Write `color` onto a bond and `-color` onto its partner,
    /// tagging both with `kind`.
    pub fn paint_pair(
        &self,
        lattice: &mut Lattice,
        bond: BondRef,
        color: i32,
        kind: BondKind,
    ) -> Result<()> {
        let partner = lattice.partner_of(bond)?;
        let b = lattice.bond_mut(bond);
        b.color = Some(color);
        b.kind = Some(kind);
        let p = lattice.bond_mut(partner);
        p.color = Some(-color);
        p.kind = Some(kind);
        trace!(%bond, %partner, color, kind = %kind, "painted bond pair");
        Ok(())
    }

    /// Propagate a voxel's coloring through its own point-group
    /// stabilizer.
    pub fn self_sym_paint(&self, lattice: &mut Lattice, voxel: VoxelId) -> Result<bool> {
        self.map_paint(lattice, voxel, voxel, false)
    }

    /// Map the parent's bond coloring onto the child via every valid
    /// rotation. Copies touch only (colored parent, uncolored child)
    /// slots; `flip` negates complementary-tagged colors during the
    /// copy. Returns `Ok(false)` without mutating anything when the
    /// mapping would put a color and its negation on the same voxel.
    pub fn map_paint(
        &self,
        lattice: &mut Lattice,
        parent: VoxelId,
        child: VoxelId,
        flip: bool,
    ) -> Result<bool> {
        if self.is_palindromic(lattice, parent, child, flip)? {
            debug!(parent, child, flip, "map skipped: palindrome conflict");
            return Ok(false);
        }

        for &rot_idx in self.table.symlist(parent, child) {
            let op = &self.rotations[rot_idx as usize];
            for axis in Axis::ALL {
                // read live: earlier copies within this call may have
                // extended the parent's coloring (parent == child in
                // the self-symmetry case)
                let pb = lattice.voxel(parent).bond(axis);
                let (Some(color), Some(kind)) = (pb.color, pb.kind) else {
                    continue;
                };
                let target = BondRef::new(child, op.rotate_axis(axis));
                if lattice.bond(target).is_colored() {
                    continue;
                }
                let neg = if flip && kind == BondKind::Complementary {
                    -1
                } else {
                    1
                };
                self.paint_pair(lattice, target, neg * color, kind)?;
            }
        }
        Ok(true)
    }

    /// Pre-mutation palindrome scan: would copying any of the parent's
    /// colors (flipped or not) put a color and its negation on the
    /// child, or the mirrored pair on a child bond's partner?
    fn is_palindromic(
        &self,
        lattice: &Lattice,
        parent: VoxelId,
        child: VoxelId,
        flip: bool,
    ) -> Result<bool> {
        for axis in Axis::ALL {
            let pb = lattice.voxel(parent).bond(axis);
            let (Some(color), Some(kind)) = (pb.color, pb.kind) else {
                continue;
            };
            let neg = if flip && kind == BondKind::Complementary {
                -1
            } else {
                1
            };
            let mappable = neg * color;

            for child_axis in Axis::ALL {
                let child_ref = BondRef::new(child, child_axis);
                let Some(child_color) = lattice.bond(child_ref).color else {
                    continue;
                };
                if child_color == -mappable {
                    return Ok(true);
                }
                let partner = lattice.partner_of(child_ref)?;
                if lattice.bond(partner).color == Some(mappable) {
                    return Ok(true);
                }
            }
        }
        Ok(false)
    }
}
