//! Serializable snapshots of a finished painting.

use lattice::{Axis, ClassId, Lattice, Material, VoxelId};
use serde::{Deserialize, Serialize};

/// Aggregate painting counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaintSummary {
    /// Colors allocated by the painting engine
    pub n_colors: i32,
    /// Distinct signed color values present on the lattice
    /// (a self-complementary design has twice `n_colors` of these)
    pub distinct_colors: usize,
    /// Structural classes discovered
    pub n_structural: usize,
    /// Complementary classes grown during painting
    pub n_complementary: usize,
}

/// One bond of a [`VoxelReport`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BondReport {
    pub direction: String,
    pub color: Option<i32>,
    pub kind: Option<String>,
    pub partner: Option<VoxelId>,
}

/// Per-voxel snapshot for rendering and export collaborators
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoxelReport {
    pub id: VoxelId,
    pub coords: [i32; 3],
    pub cargo: Material,
    pub cargo_offset: [f32; 3],
    pub class_id: Option<ClassId>,
    pub bonds: Vec<BondReport>,
}

pub(crate) fn voxel_reports(lattice: &Lattice) -> Vec<VoxelReport> {
    lattice
        .voxels()
        .iter()
        .map(|v| VoxelReport {
            id: v.id,
            coords: v.coords.to_array(),
            cargo: v.cargo,
            cargo_offset: v.cargo_coords.to_array(),
            class_id: v.class_id,
            bonds: Axis::ALL
                .iter()
                .map(|&axis| {
                    let b = v.bond(axis);
                    BondReport {
                        direction: axis.label().to_string(),
                        color: b.color,
                        kind: b.kind.map(|k| k.to_string()),
                        partner: b.partner.map(|p| p.voxel),
                    }
                })
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::IVec3;
    use lattice::GridSpec;

    #[test]
    fn test_reports_cover_every_bond() {
        let spec = GridSpec::uniform(IVec3::new(2, 2, 2), 1);
        let lattice = Lattice::from_grid(&spec).unwrap();
        let reports = voxel_reports(&lattice);
        assert_eq!(reports.len(), 8);
        for report in &reports {
            assert_eq!(report.bonds.len(), 6);
            assert!(report.bonds.iter().all(|b| b.partner.is_some()));
        }
    }

    #[test]
    fn test_summary_serializes() {
        let summary = PaintSummary {
            n_colors: 3,
            distinct_colors: 6,
            n_structural: 2,
            n_complementary: 1,
        };
        let json = serde_json::to_string(&summary).unwrap();
        let back: PaintSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(back, summary);
    }
}
