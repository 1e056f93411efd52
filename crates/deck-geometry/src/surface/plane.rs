//! P/PX/PY/PZ: unbounded plane, either the general Ax + By + Cz = D form
//! or an axis-perpendicular specialization.

use serde::{Deserialize, Serialize};

use deck_types::fmt::num;
use deck_types::Axis;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Plane {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    /// Axis the plane is perpendicular to, for the PX/PY/PZ forms. The
    /// specialized records carry only D.
    pub vert: Option<Axis>,
}

impl Plane {
    /// General plane Ax + By + Cz = D. The axis-perpendicular form is
    /// detected from the coefficients.
    pub fn new(a: f64, b: f64, c: f64, d: f64) -> Self {
        let vert = if a == 1.0 && b == 0.0 && c == 0.0 {
            Some(Axis::X)
        } else if a == 0.0 && b == 1.0 && c == 0.0 {
            Some(Axis::Y)
        } else if a == 0.0 && b == 0.0 && c == 1.0 {
            Some(Axis::Z)
        } else {
            None
        };
        Self { a, b, c, d, vert }
    }

    /// Plane perpendicular to `axis` at coordinate `d`.
    pub fn vertical(axis: Axis, d: f64) -> Self {
        let (a, b, c) = match axis {
            Axis::X => (1.0, 0.0, 0.0),
            Axis::Y => (0.0, 1.0, 0.0),
            Axis::Z => (0.0, 0.0, 1.0),
        };
        Self {
            a,
            b,
            c,
            d,
            vert: Some(axis),
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self.vert {
            None => "P",
            Some(Axis::X) => "PX",
            Some(Axis::Y) => "PY",
            Some(Axis::Z) => "PZ",
        }
    }

    fn equation(&self) -> String {
        match self.vert {
            Some(axis) => format!("{} = {}", axis.as_str(), num(self.d)),
            None => format!(
                "{}x + {}y + {}z \u{2212} {} = 0",
                num(self.a),
                num(self.b),
                num(self.c),
                num(self.d)
            ),
        }
    }

    /// The specialized forms leave the A B C columns blank.
    pub(super) fn fields(&self) -> String {
        let (a, b, c) = if self.vert.is_some() {
            (String::new(), String::new(), String::new())
        } else {
            (num(self.a), num(self.b), num(self.c))
        };
        format!("{} {} {}  {}", a, b, c, num(self.d))
    }

    pub(super) fn comment(&self) -> String {
        format!("(Plane) {}", self.equation())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn general_plane() {
        let p = Plane::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(p.symbol(), "P");
        assert_eq!(p.fields(), "1.0 2.0 3.0  4.0");
        assert_eq!(p.comment(), "(Plane) 1.0x + 2.0y + 3.0z \u{2212} 4.0 = 0");
    }

    #[test]
    fn unit_coefficients_detected_as_vertical() {
        assert_eq!(Plane::new(1.0, 0.0, 0.0, 2.0).symbol(), "PX");
        assert_eq!(Plane::new(0.0, 1.0, 0.0, 2.0).symbol(), "PY");
        assert_eq!(Plane::new(0.0, 0.0, 1.0, 2.0).symbol(), "PZ");
        assert_eq!(Plane::new(2.0, 0.0, 0.0, 2.0).symbol(), "P");
    }

    #[test]
    fn vertical_plane_blanks_coefficient_columns() {
        let p = Plane::vertical(Axis::Z, 5.0);
        assert_eq!(p.symbol(), "PZ");
        assert_eq!(p.fields(), "    5.0");
        assert_eq!(p.comment(), "(Plane) z = 5.0");
    }
}
