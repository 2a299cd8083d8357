//! Grid input contract for the design collaborator.
//!
//! A lattice is specified as a dense 3D grid of material tags plus an
//! optional cargo sub-offset per occupied cell. Every cell inside the
//! grid dimensions exists as a voxel; material 0 marks an empty cell.

use glam::{IVec3, Vec3};

use crate::error::{LatticeError, Result};
use crate::voxel::Material;

/// One explicitly specified grid cell
#[derive(Debug, Clone, Copy, serde::Serialize, serde::Deserialize)]
pub struct GridCell {
    pub coords: IVec3,
    pub material: Material,
    /// Sub-voxel position of the cargo, components in [-0.5, 0.5]
    #[serde(default)]
    pub cargo_offset: Vec3,
}

/// Dense grid specification consumed by `Lattice::from_grid`.
///
/// Cells not listed default to material 0 with no cargo offset. When
/// `includes_wrap_layer` is set the supplied grid carries the
/// wrap-around duplicate layer (one extra plane per axis) and lattice
/// construction strips it back down to the minimal tileable unit.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct GridSpec {
    pub dims: IVec3,
    #[serde(default)]
    pub includes_wrap_layer: bool,
    #[serde(default)]
    pub cells: Vec<GridCell>,
}

impl GridSpec {
    pub fn new(dims: IVec3) -> Self {
        Self {
            dims,
            includes_wrap_layer: false,
            cells: Vec::new(),
        }
    }

    /// Grid with every cell set to the same material, no cargo offsets
    pub fn uniform(dims: IVec3, material: Material) -> Self {
        let mut spec = Self::new(dims);
        for x in 0..dims.x {
            for y in 0..dims.y {
                for z in 0..dims.z {
                    spec.cells.push(GridCell {
                        coords: IVec3::new(x, y, z),
                        material,
                        cargo_offset: Vec3::ZERO,
                    });
                }
            }
        }
        spec
    }

    /// Set a cell's material, replacing any earlier entry at the same coords
    pub fn set(&mut self, coords: IVec3, material: Material) -> &mut Self {
        self.set_with_offset(coords, material, Vec3::ZERO)
    }

    /// Set a cell's material and cargo sub-offset
    pub fn set_with_offset(
        &mut self,
        coords: IVec3,
        material: Material,
        cargo_offset: Vec3,
    ) -> &mut Self {
        self.cells.retain(|c| c.coords != coords);
        self.cells.push(GridCell {
            coords,
            material,
            cargo_offset,
        });
        self
    }

    /// Dimensions of the minimal tileable unit (wrap layer stripped)
    pub fn unit_dims(&self) -> IVec3 {
        if self.includes_wrap_layer {
            self.dims - IVec3::ONE
        } else {
            self.dims
        }
    }

    /// Check dimensions, cell bounds, and cargo offset ranges
    pub fn validate(&self) -> Result<()> {
        let unit = self.unit_dims();
        if unit.x < 1 || unit.y < 1 || unit.z < 1 {
            return Err(LatticeError::EmptyGrid);
        }
        for cell in &self.cells {
            let c = cell.coords;
            if c.x < 0 || c.y < 0 || c.z < 0 || c.x >= self.dims.x || c.y >= self.dims.y || c.z >= self.dims.z {
                return Err(LatticeError::CellOutOfBounds {
                    coords: c,
                    dims: self.dims,
                });
            }
            let o = cell.cargo_offset;
            if o.abs().max_element() > 0.5 {
                return Err(LatticeError::CargoOffsetOutOfRange {
                    coords: c,
                    offset: o.to_array(),
                });
            }
        }
        Ok(())
    }

    /// Dense (material, cargo offset) tables for the minimal unit, in
    /// x-major cell order. Cells of a stripped wrap layer are dropped.
    pub(crate) fn unit_cells(&self) -> (IVec3, Vec<(IVec3, Material, Vec3)>) {
        let unit = self.unit_dims();
        let mut materials = vec![(0u8, Vec3::ZERO); (unit.x * unit.y * unit.z) as usize];
        let index =
            |c: IVec3| -> usize { ((c.x * unit.y + c.y) * unit.z + c.z) as usize };
        for cell in &self.cells {
            let c = cell.coords;
            if c.x >= unit.x || c.y >= unit.y || c.z >= unit.z {
                continue; // duplicate wrap layer
            }
            materials[index(c)] = (cell.material, cell.cargo_offset);
        }

        let mut out = Vec::with_capacity(materials.len());
        for x in 0..unit.x {
            for y in 0..unit.y {
                for z in 0..unit.z {
                    let c = IVec3::new(x, y, z);
                    let (material, offset) = materials[index(c)];
                    out.push((c, material, offset));
                }
            }
        }
        (unit, out)
    }
}
