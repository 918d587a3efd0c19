//! Viewport boundary: camera transform, gizmo projector, and the frame
//! snapshot handed to the external rasterizer.

pub mod camera;
pub mod gizmo;

pub use camera::{OrbitCamera, Viewport};
pub use gizmo::{DragState, GizmoAxis};

use glam::Mat4;
use shared::Solid;

/// Everything the rasterizer needs to draw one frame. Solids are an
/// independent snapshot, so the render loop never observes a torn
/// add/remove on the scene.
#[derive(Debug, Clone)]
pub struct FrameContext {
    pub model_view: Mat4,
    pub projection: Mat4,
    pub viewport: Viewport,
    pub solids: Vec<Solid>,
    /// Id of the active solid (selection box + gizmo are drawn for it).
    pub active_id: Option<u32>,
    /// Axis currently armed for dragging, highlighted by the renderer.
    pub dragged_axis: Option<GizmoAxis>,
}

/// Render seam. The window shell implements this and paints triangles
/// to its frame buffer; the engine only establishes the camera
/// transform and snapshots the scene.
pub trait Renderer {
    fn draw_frame(&mut self, frame: &FrameContext);
}
