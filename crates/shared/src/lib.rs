//! Domain model for the GLX scene editor.
//!
//! A scene is an ordered list of [`Solid`]s: parametric primitives (box,
//! cylinder, torus, wedge) with a position/rotation transform and a list
//! of planar cut/raise features ([`Shape`]) attached to their faces.
//! Everything here is plain data with pure geometry formulas; I/O lives
//! in the engine crate.

use serde::{Deserialize, Serialize};
use std::f32::consts::PI;

/// Face of a solid that a shape is attached to.
///
/// Serializes to the signed-axis notation used by the GLX format
/// (`Front` is `+Z`, `Bottom` is `-Y`, and so on).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Face {
    #[serde(rename = "+Z")]
    Front,
    #[serde(rename = "-Z")]
    Back,
    #[serde(rename = "+Y")]
    Top,
    #[serde(rename = "-Y")]
    Bottom,
    #[serde(rename = "+X")]
    Right,
    #[serde(rename = "-X")]
    Left,
}

impl Face {
    /// Human-readable face name shown in the UI layer.
    pub fn label(&self) -> &'static str {
        match self {
            Face::Front => "Front",
            Face::Back => "Back",
            Face::Top => "Top",
            Face::Bottom => "Bottom",
            Face::Right => "Right",
            Face::Left => "Left",
        }
    }
}

/// Depth mode of a shape: flat decal, cut inward, or raised outward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DepthMode {
    #[default]
    Planar,
    Intruded,
    Extruded,
}

/// Planar outline of a shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShapeKind {
    Square { width: f32, height: f32 },
    Circle { radius: f32 },
}

impl ShapeKind {
    pub fn label(&self) -> &'static str {
        match self {
            ShapeKind::Square { .. } => "Square",
            ShapeKind::Circle { .. } => "Circle",
        }
    }
}

/// A planar cut/raise feature attached to one face of a solid.
///
/// A shape is owned by exactly one solid (held by value in its shape
/// list). A shape whose depth is zero is always planar, whatever mode
/// was requested; [`Shape::mode`] reflects that demotion.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    pub name: String,
    pub face: Face,
    pub kind: ShapeKind,
    /// In-face coordinates of the shape centre.
    pub x: f32,
    pub y: f32,
    /// In-plane rotation in degrees. Affects drawing only; never serialized.
    pub rotation: f32,
    depth: f32,
    mode: DepthMode,
}

impl Shape {
    /// New planar shape centred on the face.
    pub fn new(name: impl Into<String>, face: Face, kind: ShapeKind) -> Self {
        Self {
            name: name.into(),
            face,
            kind,
            x: 0.0,
            y: 0.0,
            rotation: 0.0,
            depth: 0.0,
            mode: DepthMode::Planar,
        }
    }

    /// New shape with an explicit depth mode. A non-positive depth
    /// demotes the shape to planar regardless of the requested mode.
    pub fn with_mode(
        name: impl Into<String>,
        face: Face,
        kind: ShapeKind,
        mode: DepthMode,
        depth: f32,
    ) -> Self {
        let mut shape = Self::new(name, face, kind);
        shape.mode = mode;
        shape.set_depth(depth);
        shape
    }

    /// Cut/raise depth, always >= 0. The sign convention of the file
    /// format (negative for intrusions) is applied by the writer.
    pub fn depth(&self) -> f32 {
        self.depth
    }

    /// Effective depth mode: a zero-depth shape is planar no matter
    /// what mode was last requested.
    pub fn mode(&self) -> DepthMode {
        if self.depth > 0.0 {
            self.mode
        } else {
            DepthMode::Planar
        }
    }

    pub fn set_depth(&mut self, depth: f32) {
        self.depth = depth.max(0.0);
    }

    pub fn set_mode(&mut self, mode: DepthMode) {
        self.mode = mode;
    }
}

/// Kind of a solid plus its kind-specific parameters.
///
/// Box, cylinder and wedge share the solid's `width`/`length`/`height`
/// fields; the cylinder renders with radius `width / 2` (length is
/// retained but ignored). The torus is driven entirely by its two radii.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SolidKind {
    Box,
    Cylinder,
    Torus { inner_radius: f32, outer_radius: f32 },
    Wedge { slope_factor: f32 },
}

impl SolidKind {
    /// Torus with the default 0.3/0.7 radii.
    pub fn torus() -> Self {
        SolidKind::Torus {
            inner_radius: 0.3,
            outer_radius: 0.7,
        }
    }

    /// Wedge with the apex at the right edge (slope factor 1.0).
    pub fn wedge() -> Self {
        SolidKind::Wedge { slope_factor: 1.0 }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SolidKind::Box => "Box",
            SolidKind::Cylinder => "Cylinder",
            SolidKind::Torus { .. } => "Torus",
            SolidKind::Wedge { .. } => "Wedge",
        }
    }
}

/// A parametric 3-D primitive with transform, size and attached shapes.
///
/// Size fields must stay positive; that is enforced by the validated
/// edit layer in the engine, not by these setters. Rotation is
/// unconstrained float degrees, wrapped only for display.
#[derive(Debug, Clone, PartialEq)]
pub struct Solid {
    /// Scene-allocated id, derived from insertion order.
    pub id: u32,
    pub name: String,
    pub position: [f32; 3],
    /// Euler rotation in degrees, applied X then Y then Z.
    pub rotation: [f32; 3],
    pub width: f32,
    pub length: f32,
    pub height: f32,
    pub kind: SolidKind,
    shapes: Vec<Shape>,
}

impl Solid {
    /// New unit-size solid at the origin.
    pub fn new(id: u32, name: impl Into<String>, kind: SolidKind) -> Self {
        Self {
            id,
            name: name.into(),
            position: [0.0; 3],
            rotation: [0.0; 3],
            width: 1.0,
            length: 1.0,
            height: 1.0,
            kind,
            shapes: Vec::new(),
        }
    }

    pub fn kind_label(&self) -> &'static str {
        self.kind.label()
    }

    /// Deep value copy of every scalar field under a new id and name.
    /// The shape list starts empty: cut/raise features are not duplicated.
    pub fn duplicate(&self, id: u32, new_name: impl Into<String>) -> Solid {
        Solid {
            id,
            name: new_name.into(),
            position: self.position,
            rotation: self.rotation,
            width: self.width,
            length: self.length,
            height: self.height,
            kind: self.kind,
            shapes: Vec::new(),
        }
    }

    pub fn add_shape(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    pub fn remove_shape(&mut self, index: usize) -> Option<Shape> {
        (index < self.shapes.len()).then(|| self.shapes.remove(index))
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn shape_mut(&mut self, index: usize) -> Option<&mut Shape> {
        self.shapes.get_mut(index)
    }

    /// Rotation wrapped into [0, 360) for display. The stored value
    /// stays unconstrained.
    pub fn wrapped_rotation(&self) -> [f32; 3] {
        [
            self.rotation[0].rem_euclid(360.0),
            self.rotation[1].rem_euclid(360.0),
            self.rotation[2].rem_euclid(360.0),
        ]
    }

    /// Volume of the solid. Callers must keep the parameters finite and
    /// positive; there are no error paths here.
    pub fn volume(&self) -> f32 {
        match self.kind {
            SolidKind::Box => self.width * self.length * self.height,
            SolidKind::Cylinder => {
                let r = self.width / 2.0;
                PI * r * r * self.height
            }
            SolidKind::Torus {
                inner_radius,
                outer_radius,
            } => {
                let major = (outer_radius + inner_radius) / 2.0;
                let minor = (outer_radius - inner_radius) / 2.0;
                2.0 * PI * PI * major * minor * minor
            }
            SolidKind::Wedge { .. } => self.width * self.length * self.height / 2.0,
        }
    }

    /// Total surface area of the solid.
    pub fn surface_area(&self) -> f32 {
        match self.kind {
            SolidKind::Box => {
                2.0 * (self.width * self.length
                    + self.width * self.height
                    + self.length * self.height)
            }
            SolidKind::Cylinder => {
                let r = self.width / 2.0;
                2.0 * PI * r * self.height + 2.0 * PI * r * r
            }
            SolidKind::Torus {
                inner_radius,
                outer_radius,
            } => {
                let major = (outer_radius + inner_radius) / 2.0;
                let minor = (outer_radius - inner_radius) / 2.0;
                4.0 * PI * PI * major * minor
            }
            SolidKind::Wedge { slope_factor } => {
                let apex_offset = (slope_factor - 0.5) * self.width;
                let half = self.width / 2.0;
                let left_slope = ((apex_offset + half).powi(2) + self.height.powi(2)).sqrt();
                let right_slope = ((half - apex_offset).powi(2) + self.height.powi(2)).sqrt();
                self.width * self.length
                    + self.width * self.height
                    + (left_slope + right_slope) * self.length
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_box_volume_and_area() {
        let mut s = Solid::new(1, "Box_1", SolidKind::Box);
        s.width = 2.0;
        s.length = 3.0;
        s.height = 4.0;
        assert_relative_eq!(s.volume(), 24.0);
        assert_relative_eq!(s.surface_area(), 2.0 * (6.0 + 8.0 + 12.0));
    }

    #[test]
    fn test_cylinder_volume_and_area() {
        let mut s = Solid::new(1, "Cylinder_1", SolidKind::Cylinder);
        s.width = 2.0; // radius 1
        s.height = 3.0;
        assert_relative_eq!(s.volume(), PI * 3.0, epsilon = 1e-5);
        assert_relative_eq!(s.surface_area(), 2.0 * PI * 3.0 + 2.0 * PI, epsilon = 1e-5);
    }

    #[test]
    fn test_torus_volume_and_area() {
        let s = Solid::new(
            1,
            "Torus_1",
            SolidKind::Torus {
                inner_radius: 0.3,
                outer_radius: 0.7,
            },
        );
        let major = 0.5;
        let minor = 0.2;
        assert_relative_eq!(s.volume(), 2.0 * PI * PI * major * minor * minor, epsilon = 1e-6);
        assert_relative_eq!(s.surface_area(), 4.0 * PI * PI * major * minor, epsilon = 1e-6);
    }

    #[test]
    fn test_wedge_volume() {
        let mut s = Solid::new(1, "Wedge_1", SolidKind::wedge());
        s.width = 2.0;
        s.length = 3.0;
        s.height = 1.0;
        assert_relative_eq!(s.volume(), 3.0);
    }

    #[test]
    fn test_wedge_area_apex_at_edge() {
        // slope factor 1.0: apex offset = w/2, so the right slope is vertical
        let mut s = Solid::new(1, "Wedge_1", SolidKind::wedge());
        s.width = 2.0;
        s.length = 3.0;
        s.height = 1.0;
        let left = (4.0_f32 + 1.0).sqrt(); // sqrt((1+1)^2 + 1)
        let right = 1.0;
        assert_relative_eq!(
            s.surface_area(),
            6.0 + 2.0 + (left + right) * 3.0,
            epsilon = 1e-5
        );
    }

    #[test]
    fn test_wedge_area_centered_apex_is_symmetric() {
        let mut s = Solid::new(1, "Wedge_1", SolidKind::Wedge { slope_factor: 0.5 });
        s.width = 2.0;
        s.length = 2.0;
        s.height = 1.0;
        let slope = (1.0_f32 + 1.0).sqrt();
        assert_relative_eq!(s.surface_area(), 4.0 + 2.0 + 2.0 * slope * 2.0, epsilon = 1e-5);
    }

    #[test]
    fn test_duplicate_copies_scalars_but_not_shapes() {
        let mut s = Solid::new(3, "Wedge_3", SolidKind::Wedge { slope_factor: 0.25 });
        s.position = [1.0, 2.0, 3.0];
        s.rotation = [10.0, 20.0, 30.0];
        s.width = 2.5;
        s.add_shape(Shape::new(
            "Plane-Square_shape",
            Face::Top,
            ShapeKind::Square {
                width: 0.3,
                height: 0.3,
            },
        ));

        let copy = s.duplicate(7, "Wedge_7");
        assert_eq!(copy.id, 7);
        assert_eq!(copy.name, "Wedge_7");
        assert_eq!(copy.position, s.position);
        assert_eq!(copy.rotation, s.rotation);
        assert_eq!(copy.width, 2.5);
        assert_eq!(copy.kind, SolidKind::Wedge { slope_factor: 0.25 });
        assert!(copy.shapes().is_empty());
    }

    #[test]
    fn test_zero_depth_shape_is_planar() {
        let s = Shape::with_mode(
            "s",
            Face::Front,
            ShapeKind::Circle { radius: 0.15 },
            DepthMode::Intruded,
            0.0,
        );
        assert_eq!(s.mode(), DepthMode::Planar);
    }

    #[test]
    fn test_positive_depth_keeps_mode() {
        let s = Shape::with_mode(
            "s",
            Face::Top,
            ShapeKind::Circle { radius: 0.2 },
            DepthMode::Extruded,
            0.1,
        );
        assert_eq!(s.mode(), DepthMode::Extruded);
        assert_relative_eq!(s.depth(), 0.1);
    }

    #[test]
    fn test_set_depth_zero_demotes() {
        let mut s = Shape::with_mode(
            "s",
            Face::Left,
            ShapeKind::Square {
                width: 0.3,
                height: 0.3,
            },
            DepthMode::Intruded,
            0.5,
        );
        assert_eq!(s.mode(), DepthMode::Intruded);
        s.set_depth(0.0);
        assert_eq!(s.mode(), DepthMode::Planar);
    }

    #[test]
    fn test_negative_depth_clamps_to_zero() {
        let mut s = Shape::new("s", Face::Back, ShapeKind::Circle { radius: 0.15 });
        s.set_depth(-0.4);
        assert_relative_eq!(s.depth(), 0.0);
    }

    #[test]
    fn test_face_axis_codes() {
        assert_eq!(serde_json::to_string(&Face::Front).unwrap(), "\"+Z\"");
        assert_eq!(serde_json::to_string(&Face::Bottom).unwrap(), "\"-Y\"");
        let face: Face = serde_json::from_str("\"+X\"").unwrap();
        assert_eq!(face, Face::Right);
    }

    #[test]
    fn test_wrapped_rotation_for_display() {
        let mut s = Solid::new(1, "Box_1", SolidKind::Box);
        s.rotation = [-30.0, 400.0, 360.0];
        let wrapped = s.wrapped_rotation();
        assert_relative_eq!(wrapped[0], 330.0);
        assert_relative_eq!(wrapped[1], 40.0);
        assert_relative_eq!(wrapped[2], 0.0);
    }
}
