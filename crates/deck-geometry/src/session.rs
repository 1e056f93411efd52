//! The modeling session: three append-only registries (materials,
//! surfaces, cells) with monotone numbering assigned at creation.
//!
//! Registry iteration order is creation order, and every number is final
//! at creation time. Entities stay mutable through the accessors, but no
//! registration is ever removed for the lifetime of the session.

use serde::{Deserialize, Serialize};
use tracing::debug;

use deck_materials::{Material, MaterialCatalog, MaterialSpec, NotFoundError};
use deck_types::{AngelColor, RatioType};

use crate::cell::{Cell, CellToken};
use crate::surface::{Surface, SurfaceInit, SurfaceKind};

/// Material number of the outer sentinel.
pub const OUTER_MATN: i32 = -1;
/// Material number of the void sentinel.
pub const VOID_MATN: i32 = 0;
/// First assigned cell number, offset to stay clear of the low surface and
/// material numbers in the emitted file.
pub const CELL_NUMBER_BASE: u32 = 100;

fn sentinel(matn: i32, name: &str) -> Material {
    Material {
        matn,
        name: name.to_string(),
        elements: Vec::new(),
        ratio_type: RatioType::Atomic,
        density: 0.0,
        gas: false,
        color: AngelColor::Gray,
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    materials: Vec<Material>,
    surfaces: Vec<Surface>,
    cells: Vec<Cell>,
    next_matn: i32,
    next_sn: u32,
    next_cn: u32,
    /// Surface numbers handed to the canvas, in first-draw order.
    drawn: Vec<u32>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// An empty session with the outer (-1) and void (0) sentinel
    /// materials pre-registered.
    pub fn new() -> Self {
        Self {
            materials: vec![
                sentinel(OUTER_MATN, "MAT_OUTER"),
                sentinel(VOID_MATN, "MAT_VOID"),
            ],
            surfaces: Vec::new(),
            cells: Vec::new(),
            next_matn: 1,
            next_sn: 1,
            next_cn: CELL_NUMBER_BASE,
            drawn: Vec::new(),
        }
    }

    /// Register a material under the next free number and return it.
    pub fn add_material(&mut self, spec: MaterialSpec) -> i32 {
        let matn = self.next_matn;
        self.next_matn += 1;
        debug!(matn, name = %spec.name, "registering material");
        self.materials.push(Material {
            matn,
            name: spec.name,
            elements: spec.elements,
            ratio_type: spec.ratio_type,
            density: spec.density,
            gas: spec.gas,
            color: spec.color,
        });
        matn
    }

    /// Register a material under an explicit number, bypassing the counter.
    ///
    /// This is how the sentinels get their fixed numbers; the counter is
    /// not advanced, so user materials stay densely numbered.
    pub fn add_material_numbered(&mut self, spec: MaterialSpec, matn: i32) -> i32 {
        debug!(matn, name = %spec.name, "registering material with explicit number");
        self.materials.push(Material {
            matn,
            name: spec.name,
            elements: spec.elements,
            ratio_type: spec.ratio_type,
            density: spec.density,
            gas: spec.gas,
            color: spec.color,
        });
        matn
    }

    /// Register a material from the built-in catalog.
    ///
    /// Fails with [`NotFoundError`] before touching the registry, so a miss
    /// never leaves a partial registration behind. Without an explicit
    /// color the palette is cycled by the assigned number, which keeps
    /// repeated runs deterministic.
    pub fn material_from_catalog(
        &mut self,
        name: &str,
        gas: bool,
        color: Option<AngelColor>,
    ) -> Result<i32, NotFoundError> {
        let entry = MaterialCatalog::global().lookup(name)?;
        let ratio_type = MaterialCatalog::infer_ratio_type(entry.elements);
        let color = color.unwrap_or_else(|| AngelColor::cycle(self.next_matn as usize));
        Ok(self.add_material(MaterialSpec {
            elements: entry.elements.iter().map(|&e| e.into()).collect(),
            name: format!("MAT_{name}"),
            ratio_type,
            density: entry.density,
            gas,
            color,
        }))
    }

    /// Register a surface under the next free number and return its number.
    pub fn add_surface(&mut self, kind: SurfaceKind, init: SurfaceInit) -> u32 {
        let sn = self.next_sn;
        self.next_sn += 1;
        debug!(sn, symbol = kind.symbol(), name = %init.name, "registering surface");
        self.surfaces.push(Surface {
            sn,
            name: init.name,
            trn: init.trn,
            matn: init.matn,
            kind,
        });
        sn
    }

    /// Register a cell under the next free number and return its number.
    pub fn add_cell(
        &mut self,
        tokens: Vec<CellToken>,
        name: impl Into<String>,
        matn: i32,
        volume: Option<f64>,
    ) -> u32 {
        let cn = self.next_cn;
        self.next_cn += 1;
        let name = name.into();
        debug!(cn, matn, name = %name, "registering cell");
        self.cells.push(Cell {
            cn,
            name,
            matn,
            volume,
            tokens,
        });
        cn
    }

    pub fn materials(&self) -> &[Material] {
        &self.materials
    }

    pub fn surfaces(&self) -> &[Surface] {
        &self.surfaces
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn material(&self, matn: i32) -> Option<&Material> {
        self.materials.iter().find(|m| m.matn == matn)
    }

    pub fn material_mut(&mut self, matn: i32) -> Option<&mut Material> {
        self.materials.iter_mut().find(|m| m.matn == matn)
    }

    pub fn surface(&self, sn: u32) -> Option<&Surface> {
        self.surfaces.iter().find(|s| s.sn == sn)
    }

    pub fn surface_mut(&mut self, sn: u32) -> Option<&mut Surface> {
        self.surfaces.iter_mut().find(|s| s.sn == sn)
    }

    pub fn cell(&self, cn: u32) -> Option<&Cell> {
        self.cells.iter().find(|c| c.cn == cn)
    }

    /// Surface numbers that have been drawn, in first-draw order.
    pub fn drawn(&self) -> &[u32] {
        &self.drawn
    }

    pub(crate) fn mark_drawn(&mut self, sn: u32) {
        if !self.drawn.contains(&sn) {
            self.drawn.push(sn);
        }
    }
}
