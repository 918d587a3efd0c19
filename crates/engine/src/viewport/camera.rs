//! Orbit camera reproducing the renderer's fixed-function transform.
//!
//! The gizmo projector and the rasterizer must agree on the camera
//! matrices, so both are built here: a model-view of
//! `T(0,0,-distance) * Rx(pitch) * Ry(yaw)` and a symmetric frustum
//! projection with near 2, far 20.

use glam::{Mat4, Vec2, Vec3, Vec4};

/// Viewport dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn aspect(&self) -> f32 {
        self.width / self.height
    }
}

/// Orbit camera: yaw/pitch in degrees around the world origin, at a
/// fixed distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitCamera {
    /// Rotation around the vertical axis, degrees.
    pub yaw: f32,
    /// Rotation around the horizontal axis, degrees.
    pub pitch: f32,
    /// Distance from the origin.
    pub distance: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            yaw: 45.0,
            pitch: 30.0,
            distance: 6.0,
        }
    }
}

impl OrbitCamera {
    /// Rotate by a pointer delta (0.5 degrees per pixel), pitch clamped
    /// to +-89 so the camera never flips over the pole.
    pub fn orbit(&mut self, dx: f32, dy: f32) {
        self.yaw += dx * 0.5;
        self.pitch = (self.pitch + dy * 0.5).clamp(-89.0, 89.0);
    }

    /// Zoom by a scroll delta (0.5 units per step), distance clamped to
    /// [3, 15].
    pub fn zoom(&mut self, delta: f32) {
        self.distance = (self.distance - delta * 0.5).clamp(3.0, 15.0);
    }

    /// Model-view matrix (world -> camera).
    pub fn model_view(&self) -> Mat4 {
        Mat4::from_translation(Vec3::new(0.0, 0.0, -self.distance))
            * Mat4::from_rotation_x(self.pitch.to_radians())
            * Mat4::from_rotation_y(self.yaw.to_radians())
    }

    /// Projection matrix (camera -> clip) for the given aspect ratio.
    pub fn projection(&self, aspect: f32) -> Mat4 {
        frustum(-aspect, aspect, -1.0, 1.0, 2.0, 20.0)
    }

    /// Project a world point to screen pixels (origin top-left, y down).
    pub fn world_to_screen(&self, point: Vec3, viewport: Viewport) -> Vec2 {
        let clip =
            self.projection(viewport.aspect()) * self.model_view() * point.extend(1.0);
        // The renderer forces w to 1 instead of clipping points on the
        // camera plane; kept for parity.
        let w = if clip.w == 0.0 { 1.0 } else { clip.w };
        let ndc = clip.truncate() / w;
        Vec2::new(
            viewport.width * (ndc.x + 1.0) / 2.0,
            viewport.height * (1.0 - (ndc.y + 1.0) / 2.0),
        )
    }
}

/// Perspective frustum matching `glFrustum` semantics.
fn frustum(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Mat4 {
    let a = (right + left) / (right - left);
    let b = (top + bottom) / (top - bottom);
    let c = -(far + near) / (far - near);
    let d = -(2.0 * far * near) / (far - near);
    Mat4::from_cols(
        Vec4::new(2.0 * near / (right - left), 0.0, 0.0, 0.0),
        Vec4::new(0.0, 2.0 * near / (top - bottom), 0.0, 0.0),
        Vec4::new(a, b, c, -1.0),
        Vec4::new(0.0, 0.0, d, 0.0),
    )
}
