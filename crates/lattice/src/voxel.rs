use glam::{IVec3, Vec3};

use crate::axis::Axis;

/// Dense index of a voxel into its parent lattice
pub type VoxelId = usize;

/// Material tag carried by a voxel (0 = empty cell, no cargo)
pub type Material = u8;

/// Mesovoxel class identity: positive = structural class N,
/// negative = complementary partner of class N
pub type ClassId = i32;

/// Why a bond needed a color
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum BondKind {
    /// Painted between two structural-class voxels
    Structural,
    /// Painted while growing the complementary set
    Complementary,
}

impl std::fmt::Display for BondKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BondKind::Structural => f.write_str("structural"),
            BondKind::Complementary => f.write_str("complementary"),
        }
    }
}

/// Index-based address of one bond: voxel id + direction slot.
///
/// Bonds are stored inside their voxel; cross-voxel "references"
/// (partner links, worklist entries) are these addresses, never
/// owning pointers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct BondRef {
    pub voxel: VoxelId,
    pub axis: Axis,
}

impl BondRef {
    #[inline]
    pub fn new(voxel: VoxelId, axis: Axis) -> Self {
        Self { voxel, axis }
    }
}

impl std::fmt::Display for BondRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "v{}({})", self.voxel, self.axis)
    }
}

/// One directional connection point of a voxel.
///
/// `color` and `kind` start unset and are written exactly once during
/// painting; `partner` is filled during lattice construction and
/// always points back (`partner.partner == self`).
#[derive(Debug, Clone, Default)]
pub struct Bond {
    pub color: Option<i32>,
    pub kind: Option<BondKind>,
    pub partner: Option<BondRef>,
}

impl Bond {
    #[inline]
    pub fn is_colored(&self) -> bool {
        self.color.is_some()
    }
}

/// One octahedral lattice site: a point with 6 directional bonds and
/// an oriented cargo.
#[derive(Debug, Clone)]
pub struct Voxel {
    /// Index into the parent lattice, unique and stable once assigned
    pub id: VoxelId,
    /// Integer lattice position
    pub coords: IVec3,
    /// Material tag (0 = empty)
    pub cargo: Material,
    /// Sub-voxel offset of the cargo, each component in [-0.5, 0.5]
    pub cargo_coords: Vec3,
    /// Mesovoxel class, `None` until classified
    pub class_id: Option<ClassId>,
    /// One bond per direction, indexed by `Axis::index`
    pub bonds: [Bond; 6],
}

impl Voxel {
    pub fn new(id: VoxelId, coords: IVec3, cargo: Material, cargo_coords: Vec3) -> Self {
        Self {
            id,
            coords,
            cargo,
            cargo_coords,
            class_id: None,
            bonds: Default::default(),
        }
    }

    #[inline]
    pub fn bond(&self, axis: Axis) -> &Bond {
        &self.bonds[axis.index()]
    }

    #[inline]
    pub fn bond_mut(&mut self, axis: Axis) -> &mut Bond {
        &mut self.bonds[axis.index()]
    }

    /// Colors currently present on this voxel's bonds
    pub fn colors(&self) -> impl Iterator<Item = i32> + '_ {
        self.bonds.iter().filter_map(|b| b.color)
    }

    /// True once every bond carries a color
    pub fn fully_colored(&self) -> bool {
        self.bonds.iter().all(Bond::is_colored)
    }
}
