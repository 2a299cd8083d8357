//! Three-phase MOSES painting orchestration.

use std::collections::HashSet;

use lattice::{Axis, BondKind, BondRef, GridSpec, Lattice, VoxelId};
use symmetry::SymmetryTable;
use tracing::{debug, info};

use crate::error::{PaintError, Result};
use crate::mesovoxel::Mesovoxel;
use crate::painter::Painter;
use crate::summary::{voxel_reports, PaintSummary, VoxelReport};

/// Orchestrator wiring lattice, symmetry table, mesovoxel, and painter
/// into the three sequential painting phases.
///
/// Owns the global painting state: the color counter and the FIFO
/// uncolored-bond worklist (with a seen-set preventing duplicate
/// enqueues). The painting engine mutates the counter only through
/// [`paint_new_bond`](Self::paint_new_bond).
pub struct Moses {
    lattice: Lattice,
    table: SymmetryTable,
    mesovoxel: Mesovoxel,
    n_colors: i32,
    worklist: Vec<BondRef>,
    cursor: usize,
    seen: HashSet<BondRef>,
}

impl Moses {
    /// Build the full pipeline for a lattice: surroundings signatures
    /// and the symmetry table, then the structural classification.
    pub fn new(mut lattice: Lattice) -> Self {
        let table = SymmetryTable::build(&lattice);
        let mesovoxel = Mesovoxel::new(&mut lattice, &table);

        let mut moses = Self {
            lattice,
            table,
            mesovoxel,
            n_colors: 0,
            worklist: Vec::new(),
            cursor: 0,
            seen: HashSet::new(),
        };
        // seed the worklist with every (still fully uncolored) bond
        // touching the mesovoxel
        for voxel in moses.mesovoxel.voxels().collect::<Vec<_>>() {
            moses.enqueue_uncolored_bonds(voxel);
        }
        moses
    }

    /// Convenience constructor from the grid input contract
    pub fn from_grid(spec: &GridSpec) -> Result<Self> {
        Ok(Self::new(Lattice::from_grid(spec)?))
    }

    #[inline]
    pub fn lattice(&self) -> &Lattice {
        &self.lattice
    }

    #[inline]
    pub fn table(&self) -> &SymmetryTable {
        &self.table
    }

    #[inline]
    pub fn mesovoxel(&self) -> &Mesovoxel {
        &self.mesovoxel
    }

    #[inline]
    pub fn n_colors(&self) -> i32 {
        self.n_colors
    }

    /// Run all three phases, then verify the lattice is fully resolved.
    pub fn run(&mut self) -> Result<PaintSummary> {
        self.structural_paint()?;
        self.complementary_paint()?;
        self.map_lattice()?;
        self.verify()?;
        let summary = self.summary();
        info!(
            n_colors = summary.n_colors,
            distinct_colors = summary.distinct_colors,
            structural = summary.n_structural,
            complementary = summary.n_complementary,
            "painting complete"
        );
        Ok(summary)
    }

    /// Phase 1: paint every fully uncolored bond pair between two
    /// structural-class voxels, so the directly observable
    /// structural-structural bonds are colored before anything else.
    pub fn structural_paint(&mut self) -> Result<()> {
        info!("phase 1: structural painting");
        let structural = self.mesovoxel.structural().to_vec();
        for v1 in structural {
            for axis in Axis::ALL {
                let bond1 = BondRef::new(v1, axis);
                let bond2 = self.lattice.partner_of(bond1)?;
                if self.lattice.bond(bond1).is_colored()
                    || self.lattice.bond(bond2).is_colored()
                {
                    continue;
                }
                if !self.mesovoxel.is_structural(bond2.voxel) {
                    continue;
                }
                self.paint_new_bond(bond1, bond2, BondKind::Structural)?;
            }
        }
        Ok(())
    }

    /// Phase 2: drain the uncolored-bond worklist, growing the
    /// complementary set on demand. Strictly FIFO; bonds of a newly
    /// added complementary voxel are appended at the tail.
    pub fn complementary_paint(&mut self) -> Result<()> {
        info!("phase 2: complementary painting");
        while self.cursor < self.worklist.len() {
            let bond1 = self.worklist[self.cursor];
            self.cursor += 1;
            if self.lattice.bond(bond1).is_colored() {
                continue;
            }
            let bond2 = self.lattice.partner_of(bond1)?;
            let far = bond2.voxel;

            // far voxel already classified: its proto-voxel is the
            // canonical coloring, map it over, paint, map back
            if let Some(class) = self.lattice.voxel(far).class_id {
                let proto = self
                    .mesovoxel
                    .proto(class)
                    .ok_or(PaintError::MissingProto { class })?;
                Painter::new(&self.table).map_paint(&mut self.lattice, proto, far, false)?;
                if self.paint_new_bond(bond1, bond2, BondKind::Complementary)? {
                    Painter::new(&self.table)
                        .map_paint(&mut self.lattice, far, proto, false)?;
                }
                continue;
            }

            // unclassified: resolve against its mesoparents
            let (sv, cv) = self.mesovoxel.mesoparents(&self.table, far);
            let (sv, sv_class) = sv.ok_or(PaintError::NoMesoparent { voxel: far })?;

            let (proto, flip) = if self.lattice.touches_class(far, sv_class) {
                // the voxel sits against its own structural class, so it
                // must present the chemically inverted sticky ends
                if !self.mesovoxel.contains_class(-sv_class) {
                    self.mesovoxel
                        .add_complementary(&mut self.lattice, far, sv_class);
                    self.enqueue_uncolored_bonds(far);
                }
                Painter::new(&self.table).map_paint(&mut self.lattice, sv, far, true)?;
                match cv {
                    Some((cv, _)) => (cv, false),
                    None => (sv, true),
                }
            } else {
                Painter::new(&self.table).map_paint(&mut self.lattice, sv, far, false)?;
                if self.lattice.voxel(far).class_id.is_none() {
                    self.mesovoxel.assign(&mut self.lattice, far, sv_class);
                }
                (sv, false)
            };

            if self.paint_new_bond(bond1, bond2, BondKind::Complementary)? {
                Painter::new(&self.table).map_paint(&mut self.lattice, far, proto, flip)?;
            }
        }
        Ok(())
    }

    /// Phase 3: map the finalized mesovoxel prototypes onto every
    /// voxel still outside it.
    pub fn map_lattice(&mut self) -> Result<()> {
        info!("phase 3: lattice-wide mapping");
        for voxel in 0..self.lattice.len() {
            if self.mesovoxel.contains_voxel(voxel) {
                continue;
            }
            let (sv, cv) = self.mesovoxel.mesoparents(&self.table, voxel);
            let (sv, sv_class) = sv.ok_or(PaintError::NoMesoparent { voxel })?;
            let touching = self.lattice.touches_class(voxel, sv_class);

            if let Some((cv, cv_class)) = cv {
                if touching {
                    Painter::new(&self.table).map_paint(&mut self.lattice, cv, voxel, false)?;
                    self.mesovoxel.assign(&mut self.lattice, voxel, cv_class);
                    continue;
                }
            }
            if touching {
                Painter::new(&self.table).map_paint(&mut self.lattice, sv, voxel, true)?;
                self.mesovoxel.assign(&mut self.lattice, voxel, -sv_class);
            } else {
                Painter::new(&self.table).map_paint(&mut self.lattice, sv, voxel, false)?;
                self.mesovoxel.assign(&mut self.lattice, voxel, sv_class);
            }
        }
        Ok(())
    }

    /// Shared painting primitive: allocate a fresh color for a fully
    /// uncolored bond pair and immediately exploit it through both
    /// endpoints' self-symmetries. Painting an already-colored pair is
    /// a no-op returning `Ok(false)`.
    pub fn paint_new_bond(
        &mut self,
        bond1: BondRef,
        bond2: BondRef,
        kind: BondKind,
    ) -> Result<bool> {
        if self.lattice.bond(bond1).is_colored() || self.lattice.bond(bond2).is_colored() {
            return Ok(false);
        }
        self.n_colors += 1;
        let painter = Painter::new(&self.table);
        painter.paint_pair(&mut self.lattice, bond1, self.n_colors, kind)?;
        debug!(color = self.n_colors, %bond1, %bond2, kind = %kind, "new bond color");
        painter.self_sym_paint(&mut self.lattice, bond1.voxel)?;
        painter.self_sym_paint(&mut self.lattice, bond2.voxel)?;
        Ok(true)
    }

    /// Post-run check: every bond colored, every voxel classified.
    /// Rotation exhaustion during phase 2 shows up here instead of as
    /// a silently partial coloring.
    pub fn verify(&self) -> Result<()> {
        let mut uncolored_bonds = Vec::new();
        let mut unclassified_voxels = Vec::new();
        for v in self.lattice.voxels() {
            if v.class_id.is_none() {
                unclassified_voxels.push(v.id);
            }
            for axis in Axis::ALL {
                if !v.bond(axis).is_colored() {
                    uncolored_bonds.push(BondRef::new(v.id, axis));
                }
            }
        }
        if uncolored_bonds.is_empty() && unclassified_voxels.is_empty() {
            Ok(())
        } else {
            Err(PaintError::Unresolved {
                uncolored_bonds,
                unclassified_voxels,
            })
        }
    }

    /// Aggregate counts of the finished painting
    pub fn summary(&self) -> PaintSummary {
        let distinct: HashSet<i32> = self
            .lattice
            .voxels()
            .iter()
            .flat_map(|v| v.colors())
            .collect();
        PaintSummary {
            n_colors: self.n_colors,
            distinct_colors: distinct.len(),
            n_structural: self.mesovoxel.structural().len(),
            n_complementary: self.mesovoxel.complementary().len(),
        }
    }

    /// Read-only per-voxel snapshot for rendering/export collaborators
    pub fn reports(&self) -> Vec<VoxelReport> {
        voxel_reports(&self.lattice)
    }

    fn enqueue_uncolored_bonds(&mut self, voxel: VoxelId) {
        for axis in Axis::ALL {
            let bond = BondRef::new(voxel, axis);
            if !self.lattice.bond(bond).is_colored() && self.seen.insert(bond) {
                self.worklist.push(bond);
            }
        }
    }
}
