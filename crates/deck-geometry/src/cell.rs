//! Boolean cells: signed surface references combined with the three region
//! operators, rendered into `[ Cell ]` records.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use deck_materials::Material;
use deck_types::fmt::num;

/// Which side of a surface a reference selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sign {
    Positive,
    Negative,
}

/// A signed reference to a surface by number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurfaceRef {
    pub sign: Sign,
    pub sn: u32,
}

impl SurfaceRef {
    fn render(&self) -> String {
        match self.sign {
            Sign::Positive => self.sn.to_string(),
            Sign::Negative => format!("-{}", self.sn),
        }
    }
}

/// Region operators. Blank is intersection, `:` union, `#` complement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoolOp {
    And,
    Or,
    Not,
}

impl BoolOp {
    fn literal(&self) -> &'static str {
        match self {
            BoolOp::And => " ",
            BoolOp::Or => ":",
            BoolOp::Not => "#",
        }
    }
}

/// One element of a cell's region expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum CellToken {
    Ref(SurfaceRef),
    Op(BoolOp),
}

impl From<SurfaceRef> for CellToken {
    fn from(r: SurfaceRef) -> Self {
        CellToken::Ref(r)
    }
}

impl From<BoolOp> for CellToken {
    fn from(op: BoolOp) -> Self {
        CellToken::Op(op)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormatError {
    #[error("cell has an empty region expression")]
    Empty,
    #[error("token {position} references surface number 0, which is never assigned")]
    InvalidReference { position: usize },
}

/// A registered cell. Numbers start at the session's cell base offset so
/// they never collide with surface or material numbers in the emitted file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cell {
    pub cn: u32,
    pub name: String,
    /// Owning material number, resolved against the session at format time.
    pub matn: i32,
    /// Explicit volume for the `VOL=` field; omitted when absent.
    pub volume: Option<f64>,
    pub tokens: Vec<CellToken>,
}

impl Cell {
    /// Render the region expression: each surface reference wrapped in
    /// parentheses, operators verbatim between them.
    pub fn expression(&self) -> Result<String, FormatError> {
        if self.tokens.is_empty() {
            return Err(FormatError::Empty);
        }
        let mut out = String::new();
        for (position, token) in self.tokens.iter().enumerate() {
            match token {
                CellToken::Op(op) => out.push_str(op.literal()),
                CellToken::Ref(r) => {
                    if r.sn == 0 {
                        return Err(FormatError::InvalidReference { position });
                    }
                    out.push('(');
                    out.push_str(&r.render());
                    out.push(')');
                }
            }
        }
        Ok(out)
    }

    /// Render the one-line `[ Cell ]` record. Sentinel-owned cells (outer
    /// and void) carry no density or volume fields.
    pub fn record(&self, material: &Material) -> Result<String, FormatError> {
        let expr = self.expression()?;

        if material.is_sentinel() {
            return Ok(format!(
                "    {} {}  {} $ name: '{}' ",
                self.cn, material.matn, expr, self.name
            ));
        }

        let volume = match self.volume {
            Some(v) => format!("VOL={}", num(v)),
            None => String::new(),
        };

        Ok(format!(
            "    {} {}  {}  {}  {} $ name: '{}' ",
            self.cn,
            material.matn,
            num(material.density),
            expr,
            volume,
            self.name
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use deck_materials::ElementRatio;
    use deck_types::{AngelColor, RatioType};

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

    fn inside_outside() -> Vec<CellToken> {
        vec![
            CellToken::Ref(SurfaceRef {
                sign: Sign::Negative,
                sn: 1,
            }),
            CellToken::Op(BoolOp::And),
            CellToken::Ref(SurfaceRef {
                sign: Sign::Positive,
                sn: 2,
            }),
        ]
    }

    #[test]
    fn expression_wraps_refs_and_leaves_operators() {
        let cell = Cell {
            cn: 100,
            name: "C".to_string(),
            matn: 1,
            volume: None,
            tokens: inside_outside(),
        };
        assert_eq!(cell.expression().unwrap(), "(-1) (2)");
    }

    #[test]
    fn union_and_complement_literals() {
        let cell = Cell {
            cn: 100,
            name: "C".to_string(),
            matn: 1,
            volume: None,
            tokens: vec![
                CellToken::Op(BoolOp::Not),
                CellToken::Ref(SurfaceRef {
                    sign: Sign::Positive,
                    sn: 3,
                }),
                CellToken::Op(BoolOp::Or),
                CellToken::Ref(SurfaceRef {
                    sign: Sign::Negative,
                    sn: 4,
                }),
            ],
        };
        assert_eq!(cell.expression().unwrap(), "#(3):(-4)");
    }

    #[test]
    fn empty_tokens_fail() {
        let cell = Cell {
            cn: 100,
            name: "C".to_string(),
            matn: 1,
            volume: None,
            tokens: vec![],
        };
        assert_eq!(cell.expression(), Err(FormatError::Empty));
    }

    #[test]
    fn zero_surface_number_fails_with_position() {
        let cell = Cell {
            cn: 100,
            name: "C".to_string(),
            matn: 1,
            volume: None,
            tokens: vec![CellToken::Ref(SurfaceRef {
                sign: Sign::Positive,
                sn: 0,
            })],
        };
        assert_eq!(
            cell.expression(),
            Err(FormatError::InvalidReference { position: 0 })
        );
    }

    #[test]
    fn record_with_density_and_volume() {
        let cell = Cell {
            cn: 100,
            name: "water ball".to_string(),
            matn: 1,
            volume: Some(4.2),
            tokens: inside_outside(),
        };
        let rec = cell.record(&water(1)).unwrap();
        assert_eq!(
            rec,
            "    100 1  1.0  (-1) (2)  VOL=4.2 $ name: 'water ball' "
        );
    }

    #[test]
    fn record_without_volume_leaves_field_blank() {
        let cell = Cell {
            cn: 101,
            name: "C".to_string(),
            matn: 1,
            volume: None,
            tokens: inside_outside(),
        };
        let rec = cell.record(&water(1)).unwrap();
        assert_eq!(rec, "    101 1  1.0  (-1) (2)   $ name: 'C' ");
    }

    #[test]
    fn sentinel_owner_omits_density_and_volume() {
        let cell = Cell {
            cn: 102,
            name: "outer".to_string(),
            matn: -1,
            volume: Some(9.9),
            tokens: vec![CellToken::Ref(SurfaceRef {
                sign: Sign::Positive,
                sn: 1,
            })],
        };
        let rec = cell.record(&water(-1)).unwrap();
        assert_eq!(rec, "    102 -1  (1) $ name: 'outer' ");
        assert!(!rec.contains("VOL="));
    }
}
