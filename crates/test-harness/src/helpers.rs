//! Fixtures: error type, material specs and surface constructors used
//! across scenario tests.

use deck_materials::MaterialSpec;
use deck_types::{AngelColor, RatioType, Vec3};

use deck_geometry::surface::{BoxSolid, Rcc, Sphere};
use deck_geometry::SurfaceKind;

/// Unified error type for the test harness.
#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    #[error("material not found: {name}")]
    MaterialNotFound { name: String },

    #[error("surface not found: {name}")]
    SurfaceNotFound { name: String },

    #[error("duplicate name: {name}")]
    DuplicateName { name: String },

    #[error("assertion failed: {detail}")]
    AssertionFailed { detail: String },

    #[error("export error: {0}")]
    Export(#[from] deck_export::ExportError),
}

/// Liquid water, atom ratios.
pub fn water_spec() -> MaterialSpec {
    MaterialSpec {
        elements: vec![(0, 1, 2.0).into(), (0, 8, 1.0).into()],
        name: "MAT_WATER".to_string(),
        ratio_type: RatioType::Atomic,
        density: 1.0,
        gas: false,
        color: AngelColor::Blue,
    }
}

/// Dry air, mass fractions, flagged as gas.
pub fn air_spec() -> MaterialSpec {
    MaterialSpec {
        elements: vec![
            (0, 6, 0.000124).into(),
            (0, 7, 0.755268).into(),
            (0, 8, 0.231781).into(),
            (0, 18, 0.012827).into(),
        ],
        name: "MAT_AIR".to_string(),
        ratio_type: RatioType::Mass,
        density: 0.001205,
        gas: true,
        color: AngelColor::LightGray,
    }
}

/// Sphere of radius r at the origin.
pub fn origin_sphere(r: f64) -> SurfaceKind {
    SurfaceKind::Sphere(Sphere::new(Vec3::ZERO, r))
}

/// Axis-aligned unit cube with its base corner at the origin.
pub fn unit_cube() -> SurfaceKind {
    SurfaceKind::Box(BoxSolid::new(Vec3::ZERO, Vec3::X, Vec3::Y, Vec3::Z))
}

/// Upright cylinder on the y axis.
pub fn upright_cylinder(r: f64, height: f64) -> SurfaceKind {
    SurfaceKind::Rcc(Rcc::new(Vec3::ZERO, Vec3::new(0.0, height, 0.0), r))
}
