//! SPH: sphere defined by center and radius.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use deck_types::fmt::num;
use deck_types::Vec3;

use super::join3;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sphere {
    pub center: Vec3,
    pub r: f64,
}

impl Sphere {
    pub fn new(center: Vec3, r: f64) -> Self {
        Self { center, r }
    }

    pub fn diameter(&self) -> f64 {
        2.0 * self.r
    }

    pub fn circumference(&self) -> f64 {
        2.0 * PI * self.r
    }

    /// Area of the great circle.
    pub fn cross_section(&self) -> f64 {
        PI * self.r * self.r
    }

    pub fn full_area(&self) -> f64 {
        4.0 * PI * self.r * self.r
    }

    pub fn volume(&self) -> f64 {
        4.0 / 3.0 * PI * self.r.powi(3)
    }

    /// Solve r = d/2.
    pub fn set_diameter(&mut self, d: f64) {
        self.r = d / 2.0;
    }

    /// Solve r = c/2pi.
    pub fn set_circumference(&mut self, c: f64) {
        self.r = c / (2.0 * PI);
    }

    /// Solve r = sqrt(s/pi).
    pub fn set_cross_section(&mut self, s: f64) {
        self.r = (s / PI).sqrt();
    }

    /// Solve r = sqrt(s/4pi).
    pub fn set_full_area(&mut self, s: f64) {
        self.r = (s / (4.0 * PI)).sqrt();
    }

    /// Solve r = (3v/4pi)^(1/3).
    pub fn set_volume(&mut self, v: f64) {
        self.r = (3.0 * v / (4.0 * PI)).cbrt();
    }

    pub(super) fn fields(&self) -> String {
        format!("{}  {}", join3(self.center), num(self.r))
    }
}
