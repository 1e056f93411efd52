//! Property tests for the inverse solves and the area clamps.

use proptest::prelude::*;

use deck_geometry::surface::{BoxSolid, Rcc, Rec, Rpp, Sphere, Torus, Trc, Wed};
use deck_types::{Axis, Vec3};

fn finite_radius() -> impl Strategy<Value = f64> {
    0.01f64..100.0
}

fn finite_coord() -> impl Strategy<Value = f64> {
    -100.0f64..100.0
}

proptest! {
    #[test]
    fn sphere_volume_inverse(r in finite_radius()) {
        let mut s = Sphere::new(Vec3::ZERO, r);
        let v = s.volume();
        s.r = 1.0;
        s.set_volume(v);
        prop_assert!((s.r - r).abs() <= 1e-9 * r);
    }

    #[test]
    fn cylinder_volume_inverse(r in finite_radius(), h in finite_radius()) {
        let mut c = Rcc::new(Vec3::ZERO, Vec3::new(0.0, h, 0.0), r);
        let v = c.volume();
        c.r = 1.0;
        c.set_volume(v);
        prop_assert!((c.r - r).abs() <= 1e-9 * r);
    }

    #[test]
    fn box_volume_inverse(target in 0.01f64..1e6) {
        let mut b = BoxSolid::new(Vec3::ZERO, Vec3::X, Vec3::Y, Vec3::Z);
        b.set_volume(target);
        prop_assert!((b.volume() - target).abs() <= 1e-9 * target);
    }

    #[test]
    fn rpp_volume_inverse(target in 0.01f64..1e6) {
        let mut r = Rpp::new([-1.0, 1.0], [-2.0, 2.0], [-3.0, 3.0]);
        r.set_volume(target);
        prop_assert!((r.volume() - target).abs() <= 1e-9 * target);
    }

    #[test]
    fn cone_volume_inverse(r1 in finite_radius(), r2 in finite_radius(), target in 0.01f64..1e6) {
        let mut t = Trc::new(Vec3::ZERO, Vec3::new(0.0, 2.0, 0.0), r1, r2);
        t.set_volume(target);
        prop_assert!((t.volume() - target).abs() <= 1e-9 * target);
    }

    #[test]
    fn torus_volume_inverse(b in finite_radius(), c in finite_radius(), target in 0.01f64..1e6) {
        let mut t = Torus::new(Vec3::ZERO, 10.0, b, c, Axis::Y);
        t.set_volume(target);
        prop_assert!((t.volume() - target).abs() <= 1e-9 * target);
    }

    #[test]
    fn torus_area_symmetric(b in finite_radius(), c in finite_radius()) {
        let flat = Torus::new(Vec3::ZERO, 200.0, b, c, Axis::Y);
        let tall = Torus::new(Vec3::ZERO, 200.0, c, b, Axis::Y);
        let (x, y) = (flat.full_area(), tall.full_area());
        prop_assert!((x - y).abs() <= 1e-9 * x.max(y));
    }

    #[test]
    fn elliptic_cylinder_volume_inverse(target in 0.01f64..1e6) {
        let mut r = Rec::new(
            Vec3::ZERO,
            Vec3::new(0.0, 2.0, 0.0),
            Vec3::new(3.0, 0.0, 0.0),
            Vec3::new(0.0, 0.0, 1.0),
        );
        r.set_volume(target);
        prop_assert!((r.volume() - target).abs() <= 1e-9 * target);
    }

    #[test]
    fn wedge_volume_inverse(target in 0.01f64..1e6) {
        let mut w = Wed::new(Vec3::ZERO, Vec3::X, Vec3::Y, Vec3::Z);
        w.set_volume(target);
        prop_assert!((w.volume() - target).abs() <= 1e-9 * target);
    }

    #[test]
    fn box_center_is_midpoint_of_extremes(
        x in finite_coord(), y in finite_coord(), z in finite_coord(),
    ) {
        let base = Vec3::new(x, y, z);
        let b = BoxSolid::new(base, Vec3::X, Vec3::Y, Vec3::Z);
        let far = base + b.diagonal();
        let mid = (base + far) / 2.0;
        prop_assert!((b.center() - mid).length() <= 1e-12);
    }
}
