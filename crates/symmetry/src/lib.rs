//! Symmetry oracle for lattice painting.
//!
//! [`Surroundings`] builds translation-invariant local signatures,
//! [`octahedral_rotations`] enumerates the rigid rotation operators of
//! the cubic point group, and [`SymmetryTable`] precomputes for every
//! voxel pair the rotations under which their signatures coincide.

mod rotation;
mod surroundings;
mod table;

pub use rotation::{octahedral_rotations, RotIdx, RotationOp, IDENTITY};
pub use surroundings::{SigKey, Signature, Surroundings};
pub use table::SymmetryTable;
