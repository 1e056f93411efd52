//! Surface primitives: one module per PHITS surface kind, plus the common
//! wrapper carrying the session-assigned number, name, transform token and
//! owning material.

pub mod box_solid;
pub mod plane;
pub mod rcc;
pub mod rec;
pub mod rpp;
pub mod sphere;
pub mod torus;
pub mod trc;
pub mod wed;

pub use box_solid::BoxSolid;
pub use plane::Plane;
pub use rcc::Rcc;
pub use rec::Rec;
pub use rpp::Rpp;
pub use sphere::Sphere;
pub use torus::Torus;
pub use trc::Trc;
pub use wed::Wed;

use serde::{Deserialize, Serialize};

use deck_types::fmt::num;
use deck_types::Vec3;

use crate::cell::{Sign, SurfaceRef};

/// Space-joined vector components in record notation.
pub(crate) fn join3(v: Vec3) -> String {
    format!("{} {} {}", num(v.x), num(v.y), num(v.z))
}

/// Geometry payload for one surface. Closed set: the consuming solver knows
/// exactly these record kinds.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SurfaceKind {
    Plane(Plane),
    Sphere(Sphere),
    Box(BoxSolid),
    Rpp(Rpp),
    Rcc(Rcc),
    Trc(Trc),
    Torus(Torus),
    Rec(Rec),
    Wed(Wed),
}

impl SurfaceKind {
    /// The record symbol, e.g. `SPH` or `TY`. Plane and torus symbols
    /// depend on their axis tags.
    pub fn symbol(&self) -> &'static str {
        match self {
            SurfaceKind::Plane(p) => p.symbol(),
            SurfaceKind::Sphere(_) => "SPH",
            SurfaceKind::Box(_) => "BOX",
            SurfaceKind::Rpp(_) => "RPP",
            SurfaceKind::Rcc(_) => "RCC",
            SurfaceKind::Trc(_) => "TRC",
            SurfaceKind::Torus(t) => t.symbol(),
            SurfaceKind::Rec(_) => "REC",
            SurfaceKind::Wed(_) => "WED",
        }
    }

    /// Space-joined numeric fields in the record's fixed order. Groups are
    /// separated by double spaces, matching the reference output.
    fn fields(&self) -> String {
        match self {
            SurfaceKind::Plane(p) => p.fields(),
            SurfaceKind::Sphere(s) => s.fields(),
            SurfaceKind::Box(b) => b.fields(),
            SurfaceKind::Rpp(r) => r.fields(),
            SurfaceKind::Rcc(r) => r.fields(),
            SurfaceKind::Trc(t) => t.fields(),
            SurfaceKind::Torus(t) => t.fields(),
            SurfaceKind::Rec(r) => r.fields(),
            SurfaceKind::Wed(w) => w.fields(),
        }
    }

    /// Human-readable description appended to the record comment: shape
    /// kind plus a legend of the field order. Documentation only, the
    /// solver ignores everything after `$`.
    fn comment(&self) -> String {
        match self {
            SurfaceKind::Plane(p) => p.comment(),
            SurfaceKind::Sphere(_) => "(sphere) x0 y0 z0 R".to_string(),
            SurfaceKind::Box(_) => {
                "(box, all angles are 90deg) [x0 y0 z0] [Ax Ay Az] [Bx By Bz] [Cx Cy Cz]"
                    .to_string()
            }
            SurfaceKind::Rpp(_) => {
                "(Rectangular solid) [x_min x_max] [y_min y_max] [z_min z_max]".to_string()
            }
            SurfaceKind::Rcc(_) => "(cylinder) [x0 y0 z0] [Hx, Hy, Hz] R".to_string(),
            SurfaceKind::Trc(_) => {
                "(truncated right-angle cone) [x0 y0 z0] [Hx Hy Hz] R_b R_t".to_string()
            }
            SurfaceKind::Torus(t) => format!(
                "(torus, with {} rotational axis) [x0 y0 z0] A(R) B C",
                t.rot.as_str()
            ),
            SurfaceKind::Rec(_) => {
                "(elliptical cylinder) [x0 y0 z0] [Hx Hy Hz] [Ax Ay Az] [Bx By Bz]".to_string()
            }
            SurfaceKind::Wed(_) => "(wedge) [x0 y0 z0] [Ax Ay Az] [Bx By Bz] [Hx Hy Hz]".to_string(),
        }
    }
}

/// Name, transform token and material for a new surface.
#[derive(Debug, Clone)]
pub struct SurfaceInit {
    /// User-visible name, echoed into the record comment.
    pub name: String,
    /// Opaque transform token, the `n` of a `TRn` block; empty for none.
    pub trn: String,
    /// Owning material number.
    pub matn: i32,
}

impl Default for SurfaceInit {
    fn default() -> Self {
        Self {
            name: "Surface".to_string(),
            trn: String::new(),
            matn: 1,
        }
    }
}

impl SurfaceInit {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_material(mut self, matn: i32) -> Self {
        self.matn = matn;
        self
    }

    pub fn with_transform(mut self, trn: impl Into<String>) -> Self {
        self.trn = trn.into();
        self
    }
}

/// A registered surface. The number is assigned at creation and never
/// changes; geometry stays mutable and every derived quantity recomputes
/// from the current fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Surface {
    pub sn: u32,
    pub name: String,
    pub trn: String,
    pub matn: i32,
    pub kind: SurfaceKind,
}

impl Surface {
    pub fn symbol(&self) -> &'static str {
        self.kind.symbol()
    }

    /// Signed reference for the region on the positive side of the surface
    /// (outside, for closed surfaces). Derived from the number alone, so
    /// cells can capture it by value.
    pub fn positive(&self) -> SurfaceRef {
        SurfaceRef {
            sign: Sign::Positive,
            sn: self.sn,
        }
    }

    /// Signed reference for the negative side (inside, for closed surfaces).
    pub fn negative(&self) -> SurfaceRef {
        SurfaceRef {
            sign: Sign::Negative,
            sn: self.sn,
        }
    }

    /// Render the one-line `[ Surface ]` record. Pure function of the
    /// current field values.
    pub fn record(&self) -> String {
        let mut txt = format!(
            "    {} {}  {}  {} $ name: '{}' {}",
            self.sn,
            self.trn,
            self.symbol(),
            self.kind.fields(),
            self.name,
            self.kind.comment()
        );
        if !self.trn.is_empty() {
            txt.push_str(&format!(" with tr{}", self.trn));
        }
        txt
    }
}
