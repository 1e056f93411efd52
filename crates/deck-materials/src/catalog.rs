//! Built-in material database.
//!
//! Three tabulated sources (compendium compounds, pure elements, detector
//! and special materials) concatenated at load time with first-occurrence-
//! wins de-duplication. The merged catalog is loaded once per process and
//! immutable thereafter.

use std::sync::OnceLock;

use deck_types::RatioType;

/// Catalog lookup by an unknown name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("material '{name}' is not in the catalog")]
pub struct NotFoundError {
    pub name: String,
}

/// One pre-tabulated material: `(mass_number, atomic_number, quantity)`
/// triples plus a density in g/cm^3. Quantities are atom counts or mass
/// fractions depending on the source table; [`MaterialCatalog::infer_ratio_type`]
/// classifies them.
#[derive(Debug, Clone, Copy)]
pub struct CatalogEntry {
    pub name: &'static str,
    pub elements: &'static [(u32, u32, f64)],
    pub density: f64,
}

// Compound materials, mostly atom-ratio compositions.
const COMPOUNDS: &[CatalogEntry] = &[
    CatalogEntry {
        name: "WATER",
        elements: &[(0, 1, 2.0), (0, 8, 1.0)],
        density: 1.0,
    },
    CatalogEntry {
        name: "WATER_HEAVY",
        elements: &[(2, 1, 2.0), (0, 8, 1.0)],
        density: 1.105,
    },
    CatalogEntry {
        name: "POLYETHYLENE",
        elements: &[(0, 1, 2.0), (0, 6, 1.0)],
        density: 0.93,
    },
    CatalogEntry {
        name: "PMMA",
        elements: &[(0, 1, 8.0), (0, 6, 5.0), (0, 8, 2.0)],
        density: 1.19,
    },
    CatalogEntry {
        name: "QUARTZ",
        elements: &[(0, 14, 1.0), (0, 8, 2.0)],
        density: 2.32,
    },
    CatalogEntry {
        name: "BORON_CARBIDE",
        elements: &[(0, 5, 4.0), (0, 6, 1.0)],
        density: 2.52,
    },
    CatalogEntry {
        name: "LITHIUM_FLUORIDE",
        elements: &[(0, 3, 1.0), (0, 9, 1.0)],
        density: 2.635,
    },
    // Mass-fraction compositions (fractions sum to ~1).
    CatalogEntry {
        name: "AIR",
        elements: &[
            (0, 6, 0.000124),
            (0, 7, 0.755268),
            (0, 8, 0.231781),
            (0, 18, 0.012827),
        ],
        density: 0.001205,
    },
    CatalogEntry {
        name: "CONCRETE_PORTLAND",
        elements: &[
            (0, 1, 0.01),
            (0, 6, 0.001),
            (0, 8, 0.529107),
            (0, 11, 0.016),
            (0, 12, 0.002),
            (0, 13, 0.033872),
            (0, 14, 0.337021),
            (0, 19, 0.013),
            (0, 20, 0.044),
            (0, 26, 0.014),
        ],
        density: 2.3,
    },
    CatalogEntry {
        name: "STAINLESS_STEEL_304",
        elements: &[
            (0, 24, 0.19),
            (0, 25, 0.02),
            (0, 26, 0.695),
            (0, 28, 0.095),
        ],
        density: 8.0,
    },
    CatalogEntry {
        name: "TISSUE_SOFT_ICRP",
        elements: &[
            (0, 1, 0.104472),
            (0, 6, 0.23219),
            (0, 7, 0.02488),
            (0, 8, 0.630238),
            (0, 11, 0.00113),
            (0, 15, 0.00133),
            (0, 16, 0.00199),
            (0, 17, 0.00134),
            (0, 19, 0.00199),
        ],
        density: 1.0,
    },
    CatalogEntry {
        name: "BONE_COMPACT_ICRU",
        elements: &[
            (0, 1, 0.063984),
            (0, 6, 0.278),
            (0, 7, 0.027),
            (0, 8, 0.410016),
            (0, 12, 0.002),
            (0, 15, 0.07),
            (0, 16, 0.002),
            (0, 20, 0.147),
        ],
        density: 1.85,
    },
];

// Pure elements, single constituent with quantity 1 (classified atomic).
const ELEMENTS_TABLE: &[CatalogEntry] = &[
    CatalogEntry {
        name: "BERYLLIUM",
        elements: &[(0, 4, 1.0)],
        density: 1.848,
    },
    CatalogEntry {
        name: "GRAPHITE",
        elements: &[(0, 6, 1.0)],
        density: 1.7,
    },
    CatalogEntry {
        name: "ALUMINUM",
        elements: &[(0, 13, 1.0)],
        density: 2.699,
    },
    CatalogEntry {
        name: "IRON",
        elements: &[(0, 26, 1.0)],
        density: 7.874,
    },
    CatalogEntry {
        name: "COPPER",
        elements: &[(0, 29, 1.0)],
        density: 8.96,
    },
    CatalogEntry {
        name: "TUNGSTEN",
        elements: &[(0, 74, 1.0)],
        density: 19.3,
    },
    CatalogEntry {
        name: "LEAD",
        elements: &[(0, 82, 1.0)],
        density: 11.35,
    },
    CatalogEntry {
        name: "URANIUM",
        elements: &[(0, 92, 1.0)],
        density: 18.95,
    },
];

// Detector crystals and other special materials. WATER appears here again
// with a different density; the compendium entry wins on merge.
const SPECIAL: &[CatalogEntry] = &[
    CatalogEntry {
        name: "SODIUM_IODIDE",
        elements: &[(0, 11, 1.0), (0, 53, 1.0)],
        density: 3.667,
    },
    CatalogEntry {
        name: "CESIUM_IODIDE",
        elements: &[(0, 55, 1.0), (0, 53, 1.0)],
        density: 4.51,
    },
    CatalogEntry {
        name: "BGO",
        elements: &[(0, 83, 4.0), (0, 32, 3.0), (0, 8, 12.0)],
        density: 7.13,
    },
    CatalogEntry {
        name: "LYSO",
        elements: &[(0, 71, 9.0), (0, 39, 1.0), (0, 14, 5.0), (0, 8, 25.0)],
        density: 7.1,
    },
    CatalogEntry {
        name: "WATER",
        elements: &[(0, 1, 2.0), (0, 8, 1.0)],
        density: 0.998,
    },
];

/// The merged, de-duplicated material database.
#[derive(Debug)]
pub struct MaterialCatalog {
    entries: Vec<CatalogEntry>,
}

impl MaterialCatalog {
    /// The process-wide catalog, merged on first use.
    pub fn global() -> &'static MaterialCatalog {
        static CATALOG: OnceLock<MaterialCatalog> = OnceLock::new();
        CATALOG.get_or_init(MaterialCatalog::load)
    }

    /// Merge the backing tables in order; the first occurrence of a name
    /// wins, later duplicates are dropped.
    fn load() -> MaterialCatalog {
        let mut entries: Vec<CatalogEntry> = Vec::new();
        for table in [COMPOUNDS, ELEMENTS_TABLE, SPECIAL] {
            for entry in table {
                if entries.iter().any(|e| e.name == entry.name) {
                    tracing::debug!(name = entry.name, "duplicate catalog entry dropped");
                    continue;
                }
                entries.push(*entry);
            }
        }
        MaterialCatalog { entries }
    }

    /// Look a material up by name.
    pub fn lookup(&self, name: &str) -> Result<&CatalogEntry, NotFoundError> {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .ok_or_else(|| NotFoundError {
                name: name.to_string(),
            })
    }

    /// All known material names, in table order.
    pub fn names(&self) -> Vec<&'static str> {
        self.entries.iter().map(|e| e.name).collect()
    }

    /// Classify a composition as atomic or mass ratios.
    ///
    /// Atom counts normally sum past 1 (or are a single `1.0` for a pure
    /// element); mass fractions sum to at most 1. A multi-constituent list
    /// summing to exactly 1.0 classifies as mass even though it could be a
    /// legitimate atomic composition; the boundary is preserved as observed
    /// in the reference tables.
    pub fn infer_ratio_type(elements: &[(u32, u32, f64)]) -> RatioType {
        let total: f64 = elements.iter().map(|e| e.2).sum();
        if total > 1.0 || (total == 1.0 && elements.len() == 1) {
            RatioType::Atomic
        } else {
            RatioType::Mass
        }
    }
}
