//! RCC: right circular cylinder from a base center, height vector and radius.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use deck_types::fmt::num;
use deck_types::Vec3;

use super::join3;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rcc {
    /// Bottom face center.
    pub base: Vec3,
    /// Height vector, bottom to top.
    pub h: Vec3,
    pub r: f64,
}

impl Rcc {
    pub fn new(base: Vec3, h: Vec3, r: f64) -> Self {
        Self { base, h, r }
    }

    pub fn height(&self) -> f64 {
        self.h.length()
    }

    pub fn diameter(&self) -> f64 {
        2.0 * self.r
    }

    pub fn circumference(&self) -> f64 {
        2.0 * PI * self.r
    }

    pub fn bottom_area(&self) -> f64 {
        PI * self.r * self.r
    }

    pub fn side_area(&self) -> f64 {
        2.0 * PI * self.r * self.height()
    }

    pub fn full_area(&self) -> f64 {
        self.side_area() + 2.0 * self.bottom_area()
    }

    pub fn volume(&self) -> f64 {
        self.bottom_area() * self.height()
    }

    pub fn center(&self) -> Vec3 {
        self.base + self.h / 2.0
    }

    pub fn set_diameter(&mut self, d: f64) {
        self.r = d / 2.0;
    }

    /// Solve r = c / 2pi.
    pub fn set_circumference(&mut self, c: f64) {
        self.r = c / (2.0 * PI);
    }

    /// Solve r = sqrt(s / pi).
    pub fn set_bottom_area(&mut self, s: f64) {
        self.r = (s / PI).sqrt();
    }

    /// Solve r = sqrt(v / (pi |h|)); the height vector is unchanged.
    pub fn set_volume(&mut self, v: f64) {
        self.r = (v / (PI * self.height())).sqrt();
    }

    pub(super) fn fields(&self) -> String {
        format!("{}  {}  {}", join3(self.base), join3(self.h), num(self.r))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn unit() -> Rcc {
        Rcc::new(Vec3::ZERO, Vec3::new(0.0, 2.0, 0.0), 1.0)
    }

    #[test]
    fn quantities() {
        let c = unit();
        assert_relative_eq!(c.volume(), 2.0 * PI);
        assert_relative_eq!(c.side_area(), 4.0 * PI);
        assert_relative_eq!(c.full_area(), 6.0 * PI);
        assert_eq!(c.center(), Vec3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn volume_inverse_solves_radius() {
        let mut c = unit();
        c.set_volume(8.0 * PI);
        assert_relative_eq!(c.r, 2.0, max_relative = 1e-12);
        assert_eq!(c.h, Vec3::new(0.0, 2.0, 0.0));
    }

    #[test]
    fn circumference_and_area_inverses() {
        let mut c = unit();
        c.set_circumference(2.0 * PI * 3.5);
        assert_relative_eq!(c.r, 3.5, max_relative = 1e-12);
        c.set_bottom_area(PI * 4.0);
        assert_relative_eq!(c.r, 2.0, max_relative = 1e-12);
        assert_relative_eq!(c.circumference(), 4.0 * PI, max_relative = 1e-12);
    }

    #[test]
    fn fields_layout() {
        assert_eq!(unit().fields(), "0.0 0.0 0.0  0.0 2.0 0.0  1.0");
    }
}
