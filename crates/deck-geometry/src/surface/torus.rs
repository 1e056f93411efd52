//! TX/TY/TZ: torus with an elliptical cross section, rotated about one of
//! the coordinate axes through its center.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use deck_types::fmt::num;
use deck_types::{Axis, Vec3};

use crate::math::ellipk;

use super::join3;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Torus {
    pub center: Vec3,
    /// Distance from the center to the middle of the tube (major radius).
    pub r: f64,
    /// Cross-section semi-axis along the rotational axis.
    pub b: f64,
    /// Cross-section semi-axis in the equatorial plane.
    pub c: f64,
    /// Rotational axis, selects TX, TY or TZ.
    pub rot: Axis,
}

impl Torus {
    pub fn new(center: Vec3, r: f64, b: f64, c: f64, rot: Axis) -> Self {
        Self { center, r, b, c, rot }
    }

    pub fn symbol(&self) -> &'static str {
        match self.rot {
            Axis::X => "TX",
            Axis::Y => "TY",
            Axis::Z => "TZ",
        }
    }

    /// Circumference of the circle through the tube centers.
    pub fn circumference(&self) -> f64 {
        2.0 * PI * self.r
    }

    pub fn set_circumference(&mut self, c: f64) {
        self.r = c / (2.0 * PI);
    }

    /// Area of the elliptical tube cross section.
    pub fn cross_section(&self) -> f64 {
        PI * self.b * self.c
    }

    /// Full surface area.
    ///
    /// Circular cross section: 4 pi^2 R b. Elliptical: 8 pi a R K(e^2)
    /// with a the larger semi-axis and e^2 = 1 - (min/max)^2, so the
    /// eccentricity argument stays in [0, 1) no matter which semi-axis is
    /// larger. See https://mathworld.wolfram.com/EllipticTorus.html
    pub fn full_area(&self) -> f64 {
        if self.b == self.c {
            return 4.0 * PI * PI * self.r * self.b;
        }
        let a = self.b.max(self.c);
        let m = self.b.min(self.c);
        let e2 = 1.0 - (m * m) / (a * a);
        8.0 * PI * a * self.r * ellipk(e2)
    }

    /// V = 2 pi^2 b c R.
    pub fn volume(&self) -> f64 {
        2.0 * PI * PI * self.b * self.c * self.r
    }

    /// Solve R = v / (2 pi^2 b c); the cross section is unchanged.
    pub fn set_volume(&mut self, v: f64) {
        self.r = v / (2.0 * PI * PI * self.b * self.c);
    }

    pub(super) fn fields(&self) -> String {
        format!(
            "{}  {}  {}  {}",
            join3(self.center),
            num(self.r),
            num(self.b),
            num(self.c)
        )
    }
}
