//! Rendering side channel.
//!
//! The session does not render anything itself; it resolves a surface into
//! a [`DrawCommand`] (world-space geometry, color, opacity, labels) and
//! hands it to a [`Canvas`]. [`RecordingCanvas`] captures the commands for
//! tests and for drawn-subset queries.

use thiserror::Error;

use deck_types::color::GRAY;
use deck_types::fmt::notation;
use deck_types::{Axis, Rgb, Vec3};

use crate::session::Session;
use crate::surface::SurfaceKind;

/// Scene setup handed to the canvas once, before any surface is drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneOptions {
    pub axes_visible: bool,
    pub width: u32,
    pub height: u32,
    pub resizable: bool,
    pub axis_length: f64,
    pub axis_opacity: f64,
    pub background: Rgb,
}

impl Default for SceneOptions {
    fn default() -> Self {
        Self {
            axes_visible: true,
            width: 1500,
            height: 800,
            resizable: true,
            axis_length: 10.0,
            axis_opacity: 0.2,
            background: GRAY,
        }
    }
}

/// Per-draw options.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawOptions {
    /// Overrides the resolved opacity when set. Otherwise gas and sentinel
    /// materials draw translucent, everything else opaque.
    pub opacity: Option<f64>,
    pub label_at_center: bool,
    pub label_at_base: bool,
    /// Cones draw truncated by default; false draws the full cone.
    pub truncated: bool,
    /// Side length of the square used to visualize unbounded planes.
    pub plane_size: f64,
}

impl Default for DrawOptions {
    fn default() -> Self {
        Self {
            opacity: None,
            label_at_center: false,
            label_at_base: false,
            truncated: true,
            plane_size: 10.0,
        }
    }
}

/// World-space geometry resolved for the canvas.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Plane {
        normal: Vec3,
        d: f64,
        size: f64,
    },
    Sphere {
        center: Vec3,
        r: f64,
    },
    Parallelepiped {
        base: Vec3,
        a: Vec3,
        b: Vec3,
        c: Vec3,
    },
    Cylinder {
        base: Vec3,
        axis: Vec3,
        r: f64,
    },
    Cone {
        base: Vec3,
        axis: Vec3,
        r_bottom: f64,
        r_top: f64,
        truncated: bool,
    },
    Torus {
        center: Vec3,
        r: f64,
        b: f64,
        c: f64,
        axis: Axis,
    },
    EllipticCylinder {
        base: Vec3,
        axis: Vec3,
        a: Vec3,
        b: Vec3,
    },
    Wedge {
        base: Vec3,
        a: Vec3,
        b: Vec3,
        h: Vec3,
    },
}

/// A text label anchored at a world-space point.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub text: String,
    pub position: Vec3,
}

/// Everything the canvas needs to render one surface.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCommand {
    pub sn: u32,
    pub symbol: &'static str,
    pub name: String,
    pub color: Rgb,
    pub opacity: f64,
    pub shape: Shape,
    pub labels: Vec<Label>,
}

/// The external rendering collaborator.
pub trait Canvas {
    fn create_scene(&mut self, options: &SceneOptions);
    fn draw(&mut self, command: DrawCommand);
}

/// Canvas that records everything it is asked to render.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    pub scenes: Vec<SceneOptions>,
    pub commands: Vec<DrawCommand>,
}

impl Canvas for RecordingCanvas {
    fn create_scene(&mut self, options: &SceneOptions) {
        self.scenes.push(options.clone());
    }

    fn draw(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DrawError {
    #[error("surface {sn} is not registered")]
    UnknownSurface { sn: u32 },
    #[error("surface {sn} references material {matn}, which is not registered")]
    UnknownMaterial { sn: u32, matn: i32 },
}

fn point_label(prefix: &str, p: Vec3) -> String {
    format!(
        "{prefix}: ({}, {}, {})",
        notation(p.x),
        notation(p.y),
        notation(p.z)
    )
}

impl Session {
    /// Resolve a surface and hand it to the canvas.
    ///
    /// The surface number is appended to the drawn set on first draw only;
    /// redrawing updates the canvas but not the set.
    pub fn draw(
        &mut self,
        sn: u32,
        canvas: &mut dyn Canvas,
        options: &DrawOptions,
    ) -> Result<(), DrawError> {
        let surface = self
            .surface(sn)
            .ok_or(DrawError::UnknownSurface { sn })?
            .clone();
        let material = self
            .material(surface.matn)
            .ok_or(DrawError::UnknownMaterial {
                sn,
                matn: surface.matn,
            })?;

        let translucent = material.gas || material.is_sentinel();
        let opacity = options
            .opacity
            .unwrap_or(if translucent { 0.2 } else { 1.0 });
        let color = material.color.rgb();

        let header = format!("{} '{}' sn: {}", surface.symbol(), surface.name, sn);
        let mut labels = Vec::new();
        let center_label = |labels: &mut Vec<Label>, center: Vec3| {
            if options.label_at_center {
                labels.push(Label {
                    text: format!("{header}\n{}", point_label("center", center)),
                    position: center,
                });
            }
        };
        let base_label = |labels: &mut Vec<Label>, base: Vec3| {
            if options.label_at_base {
                labels.push(Label {
                    text: format!("{header}\n{}", point_label("base", base)),
                    position: base,
                });
            }
        };

        let shape = match &surface.kind {
            SurfaceKind::Plane(p) => {
                let normal = match p.vert {
                    Some(Axis::X) => Vec3::X,
                    Some(Axis::Y) => Vec3::Y,
                    Some(Axis::Z) => Vec3::Z,
                    None => Vec3::new(p.a, p.b, p.c),
                };
                Shape::Plane {
                    normal,
                    d: p.d,
                    size: options.plane_size,
                }
            }
            SurfaceKind::Sphere(s) => {
                center_label(&mut labels, s.center);
                Shape::Sphere {
                    center: s.center,
                    r: s.r,
                }
            }
            SurfaceKind::Box(b) => {
                center_label(&mut labels, b.center());
                base_label(&mut labels, b.base);
                Shape::Parallelepiped {
                    base: b.base,
                    a: b.a,
                    b: b.b,
                    c: b.c,
                }
            }
            SurfaceKind::Rpp(r) => {
                center_label(&mut labels, r.center());
                Shape::Parallelepiped {
                    base: Vec3::new(r.x[0], r.y[0], r.z[0]),
                    a: Vec3::new(r.width(), 0.0, 0.0),
                    b: Vec3::new(0.0, r.height(), 0.0),
                    c: Vec3::new(0.0, 0.0, r.length()),
                }
            }
            SurfaceKind::Rcc(r) => {
                center_label(&mut labels, r.center());
                base_label(&mut labels, r.base);
                Shape::Cylinder {
                    base: r.base,
                    axis: r.h,
                    r: r.r,
                }
            }
            SurfaceKind::Trc(t) => {
                center_label(&mut labels, t.center());
                base_label(&mut labels, t.base);
                Shape::Cone {
                    base: t.base,
                    axis: t.h,
                    r_bottom: t.r_1,
                    r_top: t.r_2,
                    truncated: options.truncated,
                }
            }
            SurfaceKind::Torus(t) => {
                center_label(&mut labels, t.center);
                Shape::Torus {
                    center: t.center,
                    r: t.r,
                    b: t.b,
                    c: t.c,
                    axis: t.rot,
                }
            }
            SurfaceKind::Rec(r) => {
                center_label(&mut labels, r.center());
                base_label(&mut labels, r.base);
                Shape::EllipticCylinder {
                    base: r.base,
                    axis: r.h,
                    a: r.a,
                    b: r.b,
                }
            }
            SurfaceKind::Wed(w) => {
                center_label(&mut labels, w.center());
                base_label(&mut labels, w.base);
                Shape::Wedge {
                    base: w.base,
                    a: w.a,
                    b: w.b,
                    h: w.h,
                }
            }
        };

        canvas.draw(DrawCommand {
            sn,
            symbol: surface.symbol(),
            name: surface.name.clone(),
            color,
            opacity,
            shape,
            labels,
        });
        self.mark_drawn(sn);
        Ok(())
    }
}
