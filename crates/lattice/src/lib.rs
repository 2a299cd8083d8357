//! Voxel/bond data model for octahedral DNA-origami lattices.
//!
//! A lattice is a periodic 3D grid of voxels, each owning six
//! directional bonds. Bonds are addressed by `(VoxelId, Axis)` and
//! linked pairwise across voxel faces with wrap-around boundary
//! conditions. Painting (color/kind assignment) mutates bonds in
//! place through the arena.

mod axis;
mod error;
mod grid;
mod lattice;
mod voxel;

pub use axis::Axis;
pub use error::{LatticeError, Result};
pub use grid::{GridCell, GridSpec};
pub use lattice::Lattice;
pub use voxel::{Bond, BondKind, BondRef, ClassId, Material, Voxel, VoxelId};
