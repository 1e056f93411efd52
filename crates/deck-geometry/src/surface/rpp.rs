//! RPP: axis-aligned rectangular solid from per-axis [min, max] bounds.

use serde::{Deserialize, Serialize};

use deck_types::fmt::num;
use deck_types::Vec3;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rpp {
    pub x: [f64; 2],
    pub y: [f64; 2],
    pub z: [f64; 2],
}

impl Rpp {
    pub fn new(x: [f64; 2], y: [f64; 2], z: [f64; 2]) -> Self {
        Self { x, y, z }
    }

    pub fn width(&self) -> f64 {
        self.x[1] - self.x[0]
    }

    pub fn height(&self) -> f64 {
        self.y[1] - self.y[0]
    }

    pub fn length(&self) -> f64 {
        self.z[1] - self.z[0]
    }

    pub fn volume(&self) -> f64 {
        self.width() * self.height() * self.length()
    }

    pub fn full_area(&self) -> f64 {
        let (w, h, l) = (self.width(), self.height(), self.length());
        2.0 * (w * h + w * l + h * l)
    }

    pub fn center(&self) -> Vec3 {
        Vec3::new(
            (self.x[0] + self.x[1]) / 2.0,
            (self.y[0] + self.y[1]) / 2.0,
            (self.z[0] + self.z[1]) / 2.0,
        )
    }

    /// Scale all three extents uniformly about the center so the volume
    /// becomes v.
    pub fn set_volume(&mut self, v: f64) {
        let s = (v / self.volume()).cbrt();
        let c = self.center();
        let half = |lo: f64, hi: f64| (hi - lo) / 2.0 * s;
        let (hx, hy, hz) = (
            half(self.x[0], self.x[1]),
            half(self.y[0], self.y[1]),
            half(self.z[0], self.z[1]),
        );
        self.x = [c.x - hx, c.x + hx];
        self.y = [c.y - hy, c.y + hy];
        self.z = [c.z - hz, c.z + hz];
    }

    pub(super) fn fields(&self) -> String {
        format!(
            "{} {}  {} {}  {} {}",
            num(self.x[0]),
            num(self.x[1]),
            num(self.y[0]),
            num(self.y[1]),
            num(self.z[0]),
            num(self.z[1])
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn extents_and_volume() {
        let r = Rpp::new([-1.0, 1.0], [0.0, 3.0], [2.0, 4.0]);
        assert_relative_eq!(r.width(), 2.0);
        assert_relative_eq!(r.height(), 3.0);
        assert_relative_eq!(r.length(), 2.0);
        assert_relative_eq!(r.volume(), 12.0);
        assert_relative_eq!(r.full_area(), 2.0 * (6.0 + 4.0 + 6.0));
        assert_eq!(r.center(), Vec3::new(0.0, 1.5, 3.0));
    }

    #[test]
    fn volume_inverse_keeps_center() {
        let mut r = Rpp::new([-1.0, 1.0], [0.0, 3.0], [2.0, 4.0]);
        let c = r.center();
        r.set_volume(96.0);
        assert_relative_eq!(r.volume(), 96.0, max_relative = 1e-12);
        assert_relative_eq!(r.center().y, c.y, max_relative = 1e-12);
    }

    #[test]
    fn fields_layout() {
        let r = Rpp::new([-1.0, 1.0], [0.0, 3.0], [2.0, 4.0]);
        assert_eq!(r.fields(), "-1.0 1.0  0.0 3.0  2.0 4.0");
    }
}
