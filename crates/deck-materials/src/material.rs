//! Material entity and its `[ Material ]` record formatter.

use serde::{Deserialize, Serialize};

use deck_types::fmt::quantity;
use deck_types::{AngelColor, RatioType};

use crate::ptable::{element_symbol, LookupError};

/// One constituent of a material composition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ElementRatio {
    /// Mass number A; 0 means "natural composition" and prints blank.
    pub mass_number: u32,
    /// Atomic number Z, resolved to a symbol at format time.
    pub atomic_number: u32,
    /// Atom count or mass fraction, depending on the ratio type.
    pub quantity: f64,
}

impl ElementRatio {
    pub fn new(mass_number: u32, atomic_number: u32, quantity: f64) -> Self {
        Self {
            mass_number,
            atomic_number,
            quantity,
        }
    }
}

impl From<(u32, u32, f64)> for ElementRatio {
    fn from((a, z, q): (u32, u32, f64)) -> Self {
        Self::new(a, z, q)
    }
}

/// Everything needed to register a material, minus the number the session
/// assigns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaterialSpec {
    pub elements: Vec<ElementRatio>,
    pub name: String,
    pub ratio_type: RatioType,
    /// Density in g/cm^3.
    pub density: f64,
    pub gas: bool,
    pub color: AngelColor,
}

/// A registered material. The number is its identity for the whole session;
/// cosmetic fields stay mutable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Material {
    /// Material number. -1 and 0 are the outer/void sentinels.
    pub matn: i32,
    pub name: String,
    pub elements: Vec<ElementRatio>,
    pub ratio_type: RatioType,
    pub density: f64,
    pub gas: bool,
    pub color: AngelColor,
}

impl Material {
    /// True for the outer (-1) and void (0) sentinels.
    pub fn is_sentinel(&self) -> bool {
        self.matn < 1
    }

    /// Render the one-line `[ Material ]` record.
    ///
    /// Sentinels render to the empty string (the exporter skips them).
    /// Mass-ratio quantities are rounded to 6 decimals and prefixed with
    /// `-`, the PHITS convention for mass fractions. Element symbols are
    /// resolved here, so a bad atomic number fails at format time.
    pub fn record(&self) -> Result<String, LookupError> {
        if self.is_sentinel() {
            return Ok(String::new());
        }

        let gas = if self.gas { "GAS=1" } else { "GAS=0" };

        let mut elrat = String::new();
        for element in &self.elements {
            let a = if element.mass_number == 0 {
                String::new()
            } else {
                element.mass_number.to_string()
            };
            let symbol = element_symbol(element.atomic_number)?;
            let q = match self.ratio_type {
                RatioType::Atomic => quantity(element.quantity),
                RatioType::Mass => {
                    let rounded = (element.quantity * 1e6).round() / 1e6;
                    format!("-{}", quantity(rounded))
                }
            };
            elrat.push_str(&format!("{a}{symbol} {q} "));
        }

        Ok(format!(
            "    mat[{}] {} {} $ name: '{}'",
            self.matn, elrat, gas, self.name
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn water(matn: i32) -> Material {
        Material {
            matn,
            name: "MAT_WATER".to_string(),
            elements: vec![ElementRatio::new(0, 1, 2.0), ElementRatio::new(0, 8, 1.0)],
            ratio_type: RatioType::Atomic,
            density: 1.0,
            gas: false,
            color: AngelColor::Blue,
        }
    }

    #[test]
    fn atomic_record() {
        let rec = water(1).record().unwrap();
        assert_eq!(rec, "    mat[1] H 2 O 1  GAS=0 $ name: 'MAT_WATER'");
    }

    #[test]
    fn mass_record_negates_and_rounds() {
        let mat = Material {
            ratio_type: RatioType::Mass,
            elements: vec![
                ElementRatio::new(0, 7, 0.7552680001),
                ElementRatio::new(0, 8, 0.231781),
            ],
            ..water(2)
        };
        let rec = mat.record().unwrap();
        assert!(rec.contains("N -0.755268 O -0.231781"), "got: {rec}");
    }

    #[test]
    fn mass_number_prints_before_symbol() {
        let mat = Material {
            elements: vec![ElementRatio::new(2, 1, 2.0), ElementRatio::new(0, 8, 1.0)],
            ..water(3)
        };
        let rec = mat.record().unwrap();
        assert!(rec.contains("2H 2 O 1"), "got: {rec}");
    }

    #[test]
    fn sentinel_record_is_empty() {
        assert_eq!(water(0).record().unwrap(), "");
        assert_eq!(water(-1).record().unwrap(), "");
    }

    #[test]
    fn bad_atomic_number_fails_at_format_time() {
        let mat = Material {
            elements: vec![ElementRatio::new(0, 300, 1.0)],
            ..water(1)
        };
        assert!(mat.record().is_err());
    }

    #[test]
    fn gas_flag_token() {
        let mat = Material {
            gas: true,
            ..water(1)
        };
        assert!(mat.record().unwrap().contains("GAS=1"));
    }
}
