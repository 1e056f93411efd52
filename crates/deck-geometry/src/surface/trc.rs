//! TRC: truncated right-angle cone from a base center, height vector and
//! bottom/top radii. Degenerates to a plain cone when the top radius is 0.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use deck_types::fmt::num;
use deck_types::Vec3;

use super::join3;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Trc {
    /// Bottom face center.
    pub base: Vec3,
    /// Height vector, bottom to top.
    pub h: Vec3,
    /// Bottom radius.
    pub r_1: f64,
    /// Top radius.
    pub r_2: f64,
}

impl Trc {
    pub fn new(base: Vec3, h: Vec3, r_1: f64, r_2: f64) -> Self {
        Self { base, h, r_1, r_2 }
    }

    pub fn height(&self) -> f64 {
        self.h.length()
    }

    pub fn bottom_diameter(&self) -> f64 {
        2.0 * self.r_1
    }

    pub fn top_diameter(&self) -> f64 {
        2.0 * self.r_2
    }

    pub fn bottom_area(&self) -> f64 {
        PI * self.r_1 * self.r_1
    }

    pub fn top_area(&self) -> f64 {
        PI * self.r_2 * self.r_2
    }

    /// Slant length of the lateral face.
    pub fn forming(&self) -> f64 {
        let dr = self.r_1 - self.r_2;
        (self.height().powi(2) + dr * dr).sqrt()
    }

    pub fn side_area(&self) -> f64 {
        PI * self.forming() * (self.r_1 + self.r_2)
    }

    pub fn full_area(&self) -> f64 {
        self.side_area() + self.bottom_area() + self.top_area()
    }

    pub fn volume(&self) -> f64 {
        PI / 3.0
            * self.height()
            * (self.r_1 * self.r_1 + self.r_1 * self.r_2 + self.r_2 * self.r_2)
    }

    pub fn center(&self) -> Vec3 {
        self.base + self.h / 2.0
    }

    pub fn set_bottom_diameter(&mut self, d: f64) {
        self.r_1 = d / 2.0;
    }

    pub fn set_top_diameter(&mut self, d: f64) {
        self.r_2 = d / 2.0;
    }

    /// Solve r_1 = sqrt(s / pi).
    pub fn set_bottom_area(&mut self, s: f64) {
        self.r_1 = (s / PI).sqrt();
    }

    /// Solve r_2 = sqrt(s / pi).
    pub fn set_top_area(&mut self, s: f64) {
        self.r_2 = (s / PI).sqrt();
    }

    /// Scale the height vector so the volume becomes v; the radii are
    /// unchanged.
    pub fn set_volume(&mut self, v: f64) {
        let s = v / self.volume();
        self.h = self.h * s;
    }

    pub(super) fn fields(&self) -> String {
        format!(
            "{}  {}  {}  {}",
            join3(self.base),
            join3(self.h),
            num(self.r_1),
            num(self.r_2)
        )
    }
}
