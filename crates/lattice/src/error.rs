//! Error types for lattice construction and lookup

use glam::IVec3;

use crate::axis::Axis;
use crate::voxel::VoxelId;

/// Errors that can occur while building or querying a lattice
#[derive(Debug, thiserror::Error)]
pub enum LatticeError {
    /// The grid specification contains no occupied dimensions
    #[error("Grid is empty")]
    EmptyGrid,

    /// A cell was specified outside the declared grid dimensions
    #[error("Cell {coords} outside grid dimensions {dims}")]
    CellOutOfBounds { coords: IVec3, dims: IVec3 },

    /// A cargo sub-offset component left the [-0.5, 0.5] range
    #[error("Cargo offset {offset:?} out of range at cell {coords}")]
    CargoOffsetOutOfRange { coords: IVec3, offset: [f32; 3] },

    /// A bond expected to have a partner does not (malformed wraparound)
    #[error("No bond partner for voxel {voxel} in direction {axis}")]
    MissingPartner { voxel: VoxelId, axis: Axis },
}

/// Result type for lattice operations
pub type Result<T> = std::result::Result<T, LatticeError>;
