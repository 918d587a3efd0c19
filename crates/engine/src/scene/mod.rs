//! Scene state: the ordered solid list, the active solid, and the
//! camera/gizmo interaction state.
//!
//! The scene is shared between an interaction context (pointer and
//! keyboard callbacks) and a render context (a tight poll loop reading
//! the solid list once per frame). All state sits behind a single
//! mutation guard; structural reads hand out independent snapshots so
//! the render loop never observes a torn add/remove. Per-field writes
//! to a published solid are not linearizable with rendering beyond the
//! lock itself, which is acceptable: a single frame of torn transform
//! is invisible.

mod edit_ops;
mod solid_ops;
mod transform_ops;

pub use edit_ops::EditError;

use std::sync::{Mutex, MutexGuard, PoisonError};

use glam::{Vec2, Vec3};
use shared::Solid;

use crate::viewport::camera::Viewport;
use crate::viewport::{gizmo, DragState, FrameContext, GizmoAxis, OrbitCamera, Renderer};

/// Shared scene state. All methods take `&self`; clone an `Arc<Scene>`
/// to hand it to another thread.
#[derive(Default)]
pub struct Scene {
    state: Mutex<SceneInner>,
}

pub(crate) struct SceneInner {
    pub(crate) solids: Vec<Solid>,
    /// Index of the active solid in `solids`.
    pub(crate) active: Option<usize>,
    /// Id/name allocator; reset only by an explicit clear.
    pub(crate) next_id: u32,
    pub(crate) camera: OrbitCamera,
    pub(crate) drag: DragState,
}

impl Default for SceneInner {
    fn default() -> Self {
        Self {
            solids: Vec::new(),
            active: None,
            next_id: 1,
            camera: OrbitCamera::default(),
            drag: DragState::default(),
        }
    }
}

impl SceneInner {
    pub(crate) fn active_solid(&self) -> Option<&Solid> {
        self.active.and_then(|i| self.solids.get(i))
    }

    pub(crate) fn active_solid_mut(&mut self) -> Option<&mut Solid> {
        self.active.and_then(|i| self.solids.get_mut(i))
    }
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn lock(&self) -> MutexGuard<'_, SceneInner> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Independent snapshot of the solid list.
    pub fn solids(&self) -> Vec<Solid> {
        self.lock().solids.clone()
    }

    pub fn solid_count(&self) -> usize {
        self.lock().solids.len()
    }

    /// Snapshot of the active solid, if any.
    pub fn active_solid(&self) -> Option<Solid> {
        self.lock().active_solid().cloned()
    }

    pub fn active_id(&self) -> Option<u32> {
        self.lock().active_solid().map(|s| s.id)
    }

    // ── Camera ───────────────────────────────────────────────

    pub fn camera(&self) -> OrbitCamera {
        self.lock().camera
    }

    pub fn set_camera(&self, camera: OrbitCamera) {
        self.lock().camera = camera;
    }

    pub fn orbit_camera(&self, dx: f32, dy: f32) {
        self.lock().camera.orbit(dx, dy);
    }

    pub fn zoom_camera(&self, delta: f32) {
        self.lock().camera.zoom(delta);
    }

    // ── Rendering ────────────────────────────────────────────

    /// Establish the camera transform, snapshot the scene, and hand the
    /// frame to the external rasterizer.
    pub fn render(&self, width: f32, height: f32, renderer: &mut dyn Renderer) {
        let viewport = Viewport::new(width, height);
        let frame = {
            let state = self.lock();
            FrameContext {
                model_view: state.camera.model_view(),
                projection: state.camera.projection(viewport.aspect()),
                viewport,
                solids: state.solids.clone(),
                active_id: state.active_solid().map(|s| s.id),
                dragged_axis: state.drag.active_axis,
            }
        };
        renderer.draw_frame(&frame);
    }

    // ── Gizmo interaction ────────────────────────────────────

    /// Test the pointer against the active solid's gizmo axes.
    pub fn hit_test_gizmo(&self, px: f32, py: f32, width: f32, height: f32) -> Option<GizmoAxis> {
        let state = self.lock();
        let origin = Vec3::from_array(state.active_solid()?.position);
        gizmo::hit_test(
            &state.camera,
            Viewport::new(width, height),
            origin,
            Vec2::new(px, py),
        )
    }

    /// Arm a drag if the pointer hits an axis, anchoring the pointer
    /// and the solid's current position.
    pub fn begin_gizmo_drag(
        &self,
        px: f32,
        py: f32,
        width: f32,
        height: f32,
    ) -> Option<GizmoAxis> {
        let mut state = self.lock();
        let origin = Vec3::from_array(state.active_solid()?.position);
        let pointer = Vec2::new(px, py);
        let axis = gizmo::hit_test(&state.camera, Viewport::new(width, height), origin, pointer)?;
        state.drag.arm(axis, pointer, origin);
        Some(axis)
    }

    /// Move the active solid along the armed axis. No-op while no axis
    /// is armed.
    pub fn drag_gizmo(&self, px: f32, py: f32, _width: f32, _height: f32) {
        let mut state = self.lock();
        let Some(position) = gizmo::dragged_position(&state.drag, Vec2::new(px, py)) else {
            return;
        };
        if let Some(solid) = state.active_solid_mut() {
            solid.position = position.to_array();
        }
    }

    pub fn end_gizmo_drag(&self) {
        self.lock().drag.disarm();
    }

    pub fn dragged_axis(&self) -> Option<GizmoAxis> {
        self.lock().drag.active_axis
    }
}
