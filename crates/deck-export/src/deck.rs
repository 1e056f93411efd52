//! Render a session into the three bracketed deck sections.

use tracing::warn;

use deck_geometry::Session;

use crate::errors::ExportError;

/// Selects which sections the deck text includes. Section order in the
/// output is fixed regardless: materials, surfaces, cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportOptions {
    pub materials: bool,
    pub surfaces: bool,
    pub cells: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            materials: true,
            surfaces: true,
            cells: true,
        }
    }
}

/// Render the deck text.
///
/// A section whose registry has nothing to emit is skipped entirely, with
/// a diagnostic; an empty bracketed header would be rejected by the
/// consuming solver. The material section is considered empty when only
/// the two sentinels are registered.
pub fn export_deck(session: &Session, options: &ExportOptions) -> Result<String, ExportError> {
    let mut out = String::new();

    if options.materials {
        if session.materials().iter().all(|m| m.is_sentinel()) {
            warn!("no material is defined, skipping [ Material ] section");
        } else {
            out.push_str("\n[ Material ]\n");
            for mat in session.materials() {
                let rec = mat.record().map_err(|source| ExportError::Material {
                    matn: mat.matn,
                    name: mat.name.clone(),
                    source,
                })?;
                if !rec.is_empty() {
                    out.push_str(&rec);
                    out.push('\n');
                }
            }

            out.push_str("\n[ Mat Name Color ]\n\tmat\tname\tsize\tcolor\n");
            for mat in session.materials() {
                if mat.matn > 0 {
                    let escaped = format!("{{{}}}", mat.name.replace('_', "\\_"));
                    out.push_str(&format!(
                        "\t{}\t{}\t1.00\t{}\n",
                        mat.matn,
                        escaped,
                        mat.color.name()
                    ));
                }
            }
        }
    }

    if options.surfaces {
        if session.surfaces().is_empty() {
            warn!("no surface is defined, skipping [ Surface ] section");
        } else {
            out.push_str("\n[ Surface ]\n");
            for surface in session.surfaces() {
                out.push_str(&surface.record());
                out.push('\n');
            }
        }
    }

    if options.cells {
        if session.cells().is_empty() {
            warn!("no cell is defined, skipping [ Cell ] section");
        } else {
            out.push_str("\n[ Cell ]\n");
            for cell in session.cells() {
                let material =
                    session
                        .material(cell.matn)
                        .ok_or(ExportError::UnknownMaterial {
                            cn: cell.cn,
                            matn: cell.matn,
                        })?;
                let rec = cell.record(material).map_err(|source| ExportError::Cell {
                    cn: cell.cn,
                    name: cell.name.clone(),
                    source,
                })?;
                out.push_str(&rec);
                out.push('\n');
            }
        }
    }

    Ok(out)
}
