//! BOX: general parallelepiped from a base corner and three edge vectors.

use serde::{Deserialize, Serialize};

use deck_types::Vec3;

use super::join3;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoxSolid {
    /// Base corner.
    pub base: Vec3,
    pub a: Vec3,
    pub b: Vec3,
    pub c: Vec3,
}

impl BoxSolid {
    pub fn new(base: Vec3, a: Vec3, b: Vec3, c: Vec3) -> Self {
        Self { base, a, b, c }
    }

    /// Scalar triple product magnitude.
    pub fn volume(&self) -> f64 {
        self.a.triple(&self.b, &self.c).abs()
    }

    pub fn ab_area(&self) -> f64 {
        self.a.cross(&self.b).length()
    }

    pub fn ac_area(&self) -> f64 {
        self.a.cross(&self.c).length()
    }

    pub fn bc_area(&self) -> f64 {
        self.b.cross(&self.c).length()
    }

    pub fn full_area(&self) -> f64 {
        2.0 * (self.ab_area() + self.ac_area() + self.bc_area())
    }

    pub fn diagonal(&self) -> Vec3 {
        self.a + self.b + self.c
    }

    pub fn diagonal_length(&self) -> f64 {
        self.diagonal().length()
    }

    pub fn center(&self) -> Vec3 {
        self.base + self.diagonal() / 2.0
    }

    /// Scale all three edges uniformly so the volume becomes v. The base
    /// corner stays put.
    pub fn set_volume(&mut self, v: f64) {
        let s = (v / self.volume()).cbrt();
        self.a = self.a * s;
        self.b = self.b * s;
        self.c = self.c * s;
    }

    pub(super) fn fields(&self) -> String {
        format!(
            "{}  {}  {}  {}",
            join3(self.base),
            join3(self.a),
            join3(self.b),
            join3(self.c)
        )
    }
}
