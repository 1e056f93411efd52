//! SceneBuilder — fluent API for scripting modeling sessions in tests.
//!
//! Wraps a [`Session`] and provides named access to materials and surfaces,
//! so scenarios read as a sequence of modeling steps instead of number
//! bookkeeping.

use std::collections::HashMap;

use deck_export::{export_deck, ExportOptions};
use deck_geometry::{BoolOp, CellToken, Session, SurfaceInit, SurfaceKind};
use deck_materials::MaterialSpec;

use crate::helpers::HarnessError;

/// A fluent builder for constructing sessions and exporting decks in tests.
#[derive(Debug)]
pub struct SceneBuilder {
    pub session: Session,
    materials: HashMap<String, i32>,
    surfaces: HashMap<String, u32>,
}

impl Default for SceneBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneBuilder {
    pub fn new() -> Self {
        Self {
            session: Session::new(),
            materials: HashMap::new(),
            surfaces: HashMap::new(),
        }
    }

    fn check_material_name(&self, name: &str) -> Result<(), HarnessError> {
        if self.materials.contains_key(name) {
            return Err(HarnessError::DuplicateName {
                name: name.to_string(),
            });
        }
        Ok(())
    }

    /// Register a material and remember it under its spec name.
    pub fn material(&mut self, spec: MaterialSpec) -> Result<&mut Self, HarnessError> {
        self.check_material_name(&spec.name)?;
        let name = spec.name.clone();
        let matn = self.session.add_material(spec);
        self.materials.insert(name, matn);
        Ok(self)
    }

    /// Register a material from the built-in catalog.
    pub fn material_from_catalog(&mut self, name: &str) -> Result<&mut Self, HarnessError> {
        let full = format!("MAT_{name}");
        self.check_material_name(&full)?;
        let matn = self
            .session
            .material_from_catalog(name, false, None)
            .map_err(|_| HarnessError::MaterialNotFound {
                name: name.to_string(),
            })?;
        self.materials.insert(full, matn);
        Ok(self)
    }

    /// Register a surface under `name`, owned by material `material_name`.
    pub fn surface(
        &mut self,
        name: &str,
        material_name: &str,
        kind: SurfaceKind,
    ) -> Result<&mut Self, HarnessError> {
        if self.surfaces.contains_key(name) {
            return Err(HarnessError::DuplicateName {
                name: name.to_string(),
            });
        }
        let matn = self.matn(material_name)?;
        let sn = self
            .session
            .add_surface(kind, SurfaceInit::named(name).with_material(matn));
        self.surfaces.insert(name.to_string(), sn);
        Ok(self)
    }

    /// Cell filling the inside of a named surface.
    pub fn cell_inside(
        &mut self,
        cell_name: &str,
        surface_name: &str,
        material_name: &str,
        volume: Option<f64>,
    ) -> Result<&mut Self, HarnessError> {
        let sn = self.sn(surface_name)?;
        let matn = self.matn(material_name)?;
        let inner = self
            .session
            .surface(sn)
            .ok_or_else(|| HarnessError::SurfaceNotFound {
                name: surface_name.to_string(),
            })?
            .negative();
        self.session
            .add_cell(vec![CellToken::Ref(inner)], cell_name, matn, volume);
        Ok(self)
    }

    /// Cell covering everything outside all the named surfaces.
    pub fn cell_outside_all(
        &mut self,
        cell_name: &str,
        surface_names: &[&str],
        material_name: &str,
    ) -> Result<&mut Self, HarnessError> {
        let matn = self.matn(material_name)?;
        let mut tokens = Vec::new();
        for (i, surface_name) in surface_names.iter().enumerate() {
            if i > 0 {
                tokens.push(CellToken::Op(BoolOp::And));
            }
            let sn = self.sn(surface_name)?;
            let outer = self
                .session
                .surface(sn)
                .ok_or_else(|| HarnessError::SurfaceNotFound {
                    name: surface_name.to_string(),
                })?
                .positive();
            tokens.push(CellToken::Ref(outer));
        }
        self.session.add_cell(tokens, cell_name, matn, None);
        Ok(self)
    }

    /// Resolve a material name; the two sentinels are always available.
    pub fn matn(&self, name: &str) -> Result<i32, HarnessError> {
        match name {
            "MAT_OUTER" => return Ok(deck_geometry::OUTER_MATN),
            "MAT_VOID" => return Ok(deck_geometry::VOID_MATN),
            _ => {}
        }
        self.materials
            .get(name)
            .copied()
            .ok_or_else(|| HarnessError::MaterialNotFound {
                name: name.to_string(),
            })
    }

    pub fn sn(&self, name: &str) -> Result<u32, HarnessError> {
        self.surfaces
            .get(name)
            .copied()
            .ok_or_else(|| HarnessError::SurfaceNotFound {
                name: name.to_string(),
            })
    }

    /// Export the deck with all sections enabled.
    pub fn deck(&self) -> Result<String, HarnessError> {
        Ok(export_deck(&self.session, &ExportOptions::default())?)
    }
}
