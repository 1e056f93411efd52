//! WED: wedge (right triangular prism) from a base corner, two triangle
//! edge vectors and a height vector.

use serde::{Deserialize, Serialize};

use deck_types::Vec3;

use super::join3;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Wed {
    /// Base corner, the right-angle vertex of the triangular face.
    pub base: Vec3,
    pub a: Vec3,
    pub b: Vec3,
    /// Height vector, perpendicular extent of the prism.
    pub h: Vec3,
}

impl Wed {
    pub fn new(base: Vec3, a: Vec3, b: Vec3, h: Vec3) -> Self {
        Self { base, a, b, h }
    }

    /// Half the parallelepiped spanned by a, b and h.
    pub fn volume(&self) -> f64 {
        self.a.triple(&self.b, &self.h).abs() / 2.0
    }

    /// Area of one triangular face.
    pub fn base_area(&self) -> f64 {
        self.a.cross(&self.b).length() / 2.0
    }

    pub fn ah_area(&self) -> f64 {
        self.a.cross(&self.h).length()
    }

    pub fn bh_area(&self) -> f64 {
        self.b.cross(&self.h).length()
    }

    /// Area of the slanted side, spanned by the hypotenuse and the height.
    pub fn hypotenuse_area(&self) -> f64 {
        (self.b - self.a).cross(&self.h).length()
    }

    pub fn full_area(&self) -> f64 {
        2.0 * self.base_area() + self.ah_area() + self.bh_area() + self.hypotenuse_area()
    }

    /// Triangle centroid lifted to half height.
    pub fn center(&self) -> Vec3 {
        self.base + (self.a + self.b) / 3.0 + self.h / 2.0
    }

    /// Scale the height vector so the volume becomes v; the triangular
    /// face is unchanged.
    pub fn set_volume(&mut self, v: f64) {
        let s = v / self.volume();
        self.h = self.h * s;
    }

    pub(super) fn fields(&self) -> String {
        format!(
            "{}  {}  {}  {}",
            join3(self.base),
            join3(self.a),
            join3(self.b),
            join3(self.h)
        )
    }
}
