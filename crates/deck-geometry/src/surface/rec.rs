//! REC: right elliptical cylinder from a base center, height vector and two
//! semi-axis vectors of the elliptical cross section.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use deck_types::Vec3;

use crate::math::ellipe;

use super::join3;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rec {
    /// Bottom face center.
    pub base: Vec3,
    /// Height vector, bottom to top.
    pub h: Vec3,
    /// Major semi-axis vector of the cross section.
    pub a: Vec3,
    /// Minor semi-axis vector of the cross section.
    pub b: Vec3,
}

impl Rec {
    pub fn new(base: Vec3, h: Vec3, a: Vec3, b: Vec3) -> Self {
        Self { base, h, a, b }
    }

    pub fn height(&self) -> f64 {
        self.h.length()
    }

    pub fn semi_a(&self) -> f64 {
        self.a.length()
    }

    pub fn semi_b(&self) -> f64 {
        self.b.length()
    }

    /// Area of one elliptical cap.
    pub fn bottom_area(&self) -> f64 {
        PI * self.semi_a() * self.semi_b()
    }

    /// Lateral area, 4 a |h| E(m) with a the larger semi-axis length and
    /// m = (a^2 - b^2) / a^2 clamped symmetric in the two axes.
    pub fn side_area(&self) -> f64 {
        let a = self.semi_a().max(self.semi_b());
        let b = self.semi_a().min(self.semi_b());
        let m = (a * a - b * b) / (a * a);
        4.0 * a * self.height() * ellipe(m)
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

    /// Scale the height vector so the volume becomes v; the cross section
    /// is unchanged.
    pub fn set_volume(&mut self, v: f64) {
        let s = v / self.volume();
        self.h = self.h * s;
    }

    pub(super) fn fields(&self) -> String {
        format!(
            "{}  {}  {}  {}",
            join3(self.base),
            join3(self.h),
            join3(self.a),
            join3(self.b)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sample() -> Rec {
        Rec::new(
            Vec3::ZERO,
            Vec3::new(0.0, 2.0, 0.0),
            Vec3::new(3.0, 0.0, 0.0),
            Vec3::new(0.0, 0.0, 1.0),
        )
    }

    #[test]
    fn volume_is_ellipse_times_height() {
        assert_relative_eq!(sample().volume(), PI * 3.0 * 1.0 * 2.0);
    }

    #[test]
    fn circular_section_side_area_matches_cylinder() {
        let r = Rec::new(
            Vec3::ZERO,
            Vec3::new(0.0, 2.0, 0.0),
            Vec3::new(1.5, 0.0, 0.0),
            Vec3::new(0.0, 0.0, 1.5),
        );
        assert_relative_eq!(
            r.side_area(),
            2.0 * PI * 1.5 * 2.0,
            max_relative = 1e-7
        );
    }

    #[test]
    fn side_area_symmetric_in_semi_axes() {
        let swapped = Rec::new(
            Vec3::ZERO,
            Vec3::new(0.0, 2.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 0.0, 3.0),
        );
        assert_relative_eq!(
            sample().side_area(),
            swapped.side_area(),
            max_relative = 1e-12
        );
    }

    #[test]
    fn volume_inverse_scales_height() {
        let mut r = sample();
        r.set_volume(3.0 * r.volume());
        assert_relative_eq!(r.height(), 6.0, max_relative = 1e-12);
    }
}
