//! Minimal-color bond painting for periodic voxel lattices.
//!
//! Given a lattice of octahedral voxels, the painting engine assigns
//! every bond a signed integer color so that the two halves of each
//! bond carry complementary colors, symmetry-equivalent voxels carry
//! rotated copies of the same palette, and the total number of
//! distinct colors stays minimal. Colors map directly onto DNA
//! sticky-end sequences in the downstream origami design.
//!
//! Painting runs in three phases driven by [`Moses`]:
//! 1. structural painting of bonds inside the structural classes,
//! 2. worklist-driven complementary painting that grows the mesovoxel,
//! 3. lattice-wide mapping of the finished prototypes.

mod error;
mod mesovoxel;
mod moses;
mod painter;
mod summary;

pub use error::{PaintError, Result};
pub use mesovoxel::Mesovoxel;
pub use moses::Moses;
pub use painter::Painter;
pub use summary::{BondReport, PaintSummary, VoxelReport};
