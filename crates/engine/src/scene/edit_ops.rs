//! Validated edit layer over the raw scene setters.
//!
//! The raw setters are unconditional; programmatic callers go through
//! these instead so that non-positive dimensions are rejected up front
//! rather than poisoning the geometry formulas downstream.

use shared::ShapeKind;
use thiserror::Error;
use tracing::warn;

use super::Scene;

/// Rejected-input signal for scene mutators.
#[derive(Debug, Error, PartialEq)]
pub enum EditError {
    #[error("{field} must be positive (got {value})")]
    NonPositive { field: &'static str, value: f32 },
}

fn positive(field: &'static str, value: f32) -> Result<f32, EditError> {
    if value > 0.0 {
        Ok(value)
    } else {
        warn!(field, value, "rejecting non-positive dimension");
        Err(EditError::NonPositive { field, value })
    }
}

impl Scene {
    pub fn update_width(&self, width: f32) -> Result<(), EditError> {
        self.set_width(positive("width", width)?);
        Ok(())
    }

    pub fn update_length(&self, length: f32) -> Result<(), EditError> {
        self.set_length(positive("length", length)?);
        Ok(())
    }

    pub fn update_height(&self, height: f32) -> Result<(), EditError> {
        self.set_height(positive("height", height)?);
        Ok(())
    }

    pub fn update_dimensions(&self, width: f32, length: f32, height: f32) -> Result<(), EditError> {
        self.update_width(width)?;
        self.update_length(length)?;
        self.update_height(height)
    }

    /// Multiply all three dimensions of the active solid by `factor`.
    pub fn scale_uniform(&self, factor: f32) -> Result<(), EditError> {
        let factor = positive("scale factor", factor)?;
        self.set_width(self.get_width() * factor);
        self.set_length(self.get_length() * factor);
        self.set_height(self.get_height() * factor);
        Ok(())
    }

    /// Resize a shape: side length for squares, radius for circles.
    pub fn update_shape_size(
        &self,
        solid_id: u32,
        shape_index: usize,
        size: f32,
    ) -> Result<(), EditError> {
        let size = positive("shape size", size)?;
        self.with_shape(solid_id, shape_index, |shape| {
            shape.kind = match shape.kind {
                ShapeKind::Square { .. } => ShapeKind::Square {
                    width: size,
                    height: size,
                },
                ShapeKind::Circle { .. } => ShapeKind::Circle { radius: size },
            };
        });
        Ok(())
    }

    pub fn reset_dimensions(&self) {
        self.set_width(1.0);
        self.set_length(1.0);
        self.set_height(1.0);
    }

    pub fn reset_position(&self) {
        self.set_position_x(0.0);
        self.set_position_y(0.0);
        self.set_position_z(0.0);
    }

    pub fn reset_all(&self) {
        self.reset_dimensions();
        self.reset_position();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use shared::{Face, Shape, SolidKind};

    #[test]
    fn test_update_rejects_non_positive_values() {
        let scene = Scene::new();
        scene.add_solid(SolidKind::Box);

        assert_eq!(
            scene.update_width(0.0),
            Err(EditError::NonPositive {
                field: "width",
                value: 0.0
            })
        );
        assert!(scene.update_height(-2.0).is_err());
        assert_relative_eq!(scene.get_width(), 1.0);
        assert_relative_eq!(scene.get_height(), 1.0);
    }

    #[test]
    fn test_update_applies_positive_values() {
        let scene = Scene::new();
        scene.add_solid(SolidKind::Box);
        scene.update_dimensions(2.0, 3.0, 4.0).unwrap();
        assert_relative_eq!(scene.get_width(), 2.0);
        assert_relative_eq!(scene.get_length(), 3.0);
        assert_relative_eq!(scene.get_height(), 4.0);
    }

    #[test]
    fn test_scale_uniform() {
        let scene = Scene::new();
        scene.add_solid(SolidKind::Box);
        scene.update_dimensions(1.0, 2.0, 3.0).unwrap();
        scene.scale_uniform(2.0).unwrap();
        assert_relative_eq!(scene.get_width(), 2.0);
        assert_relative_eq!(scene.get_length(), 4.0);
        assert_relative_eq!(scene.get_height(), 6.0);

        assert!(scene.scale_uniform(0.0).is_err());
    }

    #[test]
    fn test_update_shape_size() {
        let scene = Scene::new();
        let id = scene.add_solid(SolidKind::Box);
        scene.add_shape(
            id,
            Shape::new("c", Face::Top, ShapeKind::Circle { radius: 0.15 }),
        );

        scene.update_shape_size(id, 0, 0.4).unwrap();
        let solid = scene.active_solid().unwrap();
        assert_eq!(solid.shapes()[0].kind, ShapeKind::Circle { radius: 0.4 });

        assert!(scene.update_shape_size(id, 0, -1.0).is_err());
    }

    #[test]
    fn test_reset_all() {
        let scene = Scene::new();
        scene.add_solid(SolidKind::Box);
        scene.update_dimensions(2.0, 2.0, 2.0).unwrap();
        scene.set_position_x(5.0);
        scene.reset_all();
        assert_relative_eq!(scene.get_width(), 1.0);
        assert_relative_eq!(scene.get_position_x(), 0.0);
    }
}
