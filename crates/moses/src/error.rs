//! Error types for the painting pipeline

use lattice::{BondRef, ClassId, LatticeError, VoxelId};

/// Errors surfaced by the painting phases.
///
/// Palindrome conflicts are not errors (they are normal negative
/// results recovered locally); these are the structural failures that
/// abort the run for a lattice.
#[derive(Debug, thiserror::Error)]
pub enum PaintError {
    /// Malformed lattice underneath the painter
    #[error(transparent)]
    Lattice(#[from] LatticeError),

    /// A voxel has no symmetry with any structural class, which the
    /// greedy class construction should make impossible
    #[error("No structural mesoparent for voxel {voxel}")]
    NoMesoparent { voxel: VoxelId },

    /// A class id is assigned but its proto-voxel is unknown
    #[error("No proto-voxel for class {class}")]
    MissingProto { class: ClassId },

    /// The three phases finished but the lattice is not fully resolved
    /// (rotation exhaustion left bonds uncolored or voxels unclassified)
    #[error(
        "Painting incomplete: {} uncolored bonds, {} unclassified voxels",
        uncolored_bonds.len(),
        unclassified_voxels.len()
    )]
    Unresolved {
        uncolored_bonds: Vec<BondRef>,
        unclassified_voxels: Vec<VoxelId>,
    },
}

/// Result type for painting operations
pub type Result<T> = std::result::Result<T, PaintError>;
