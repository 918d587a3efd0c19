//! Screen-space gizmo projector: axis hit-testing and drag-to-world
//! mapping for the three-axis translation handle.

use glam::{Vec2, Vec3};

use super::camera::{OrbitCamera, Viewport};

/// Axis handle of the translation gizmo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GizmoAxis {
    X,
    Y,
    Z,
}

/// Pixel radius within which a projected axis segment counts as hit.
pub const HIT_THRESHOLD_PX: f32 = 15.0;

/// World units moved per pixel of pointer travel during a drag.
pub const DRAG_SENSITIVITY: f32 = 0.01;

/// World-space length of each gizmo axis segment.
pub const AXIS_LENGTH: f32 = 1.0;

/// Bookkeeping for an armed axis drag: the pointer position and the
/// solid's world position at the moment the axis was grabbed.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DragState {
    pub active_axis: Option<GizmoAxis>,
    pub anchor_screen: Vec2,
    pub anchor_world: Vec3,
}

impl DragState {
    pub fn arm(&mut self, axis: GizmoAxis, anchor_screen: Vec2, anchor_world: Vec3) {
        self.active_axis = Some(axis);
        self.anchor_screen = anchor_screen;
        self.anchor_world = anchor_world;
    }

    pub fn disarm(&mut self) {
        self.active_axis = None;
    }
}

/// Test the pointer against the three projected axis segments rooted at
/// `origin`.
///
/// Axes are checked in the fixed order X, Y, Z and the first one under
/// the threshold wins, even when another axis is numerically closer.
/// That precedence is part of the interaction contract, not a bug.
pub fn hit_test(
    camera: &OrbitCamera,
    viewport: Viewport,
    origin: Vec3,
    pointer: Vec2,
) -> Option<GizmoAxis> {
    let start = camera.world_to_screen(origin, viewport);
    let ends = [
        (GizmoAxis::X, origin + Vec3::X * AXIS_LENGTH),
        (GizmoAxis::Y, origin + Vec3::Y * AXIS_LENGTH),
        (GizmoAxis::Z, origin + Vec3::Z * AXIS_LENGTH),
    ];

    for (axis, end) in ends {
        let end = camera.world_to_screen(end, viewport);
        if point_segment_distance(pointer, start, end) < HIT_THRESHOLD_PX {
            return Some(axis);
        }
    }
    None
}

/// Map the current pointer position to a new world position for the
/// solid anchored in `drag`.
///
/// Only the armed axis moves. X and Z follow horizontal pointer motion;
/// Y follows vertical motion with the screen axis inverted (pixel y
/// grows downward).
pub fn dragged_position(drag: &DragState, pointer: Vec2) -> Option<Vec3> {
    let axis = drag.active_axis?;
    let delta = pointer - drag.anchor_screen;
    let mut position = drag.anchor_world;
    match axis {
        GizmoAxis::X => position.x = drag.anchor_world.x + delta.x * DRAG_SENSITIVITY,
        GizmoAxis::Y => position.y = drag.anchor_world.y - delta.y * DRAG_SENSITIVITY,
        GizmoAxis::Z => position.z = drag.anchor_world.z + delta.x * DRAG_SENSITIVITY,
    }
    Some(position)
}

/// Distance from a point to a 2-D line segment.
fn point_segment_distance(p: Vec2, a: Vec2, b: Vec2) -> f32 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    let t = if len_sq == 0.0 {
        -1.0
    } else {
        (p - a).dot(ab) / len_sq
    };

    let closest = if t < 0.0 {
        a
    } else if t > 1.0 {
        b
    } else {
        a + ab * t
    };
    p.distance(closest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn head_on() -> OrbitCamera {
        OrbitCamera {
            yaw: 0.0,
            pitch: 0.0,
            distance: 6.0,
        }
    }

    #[test]
    fn test_point_segment_distance_interior() {
        let d = point_segment_distance(
            Vec2::new(5.0, 3.0),
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
        );
        assert_relative_eq!(d, 3.0);
    }

    #[test]
    fn test_point_segment_distance_past_endpoint() {
        let d = point_segment_distance(
            Vec2::new(14.0, 3.0),
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
        );
        assert_relative_eq!(d, 5.0);
    }

    #[test]
    fn test_point_segment_distance_degenerate_segment() {
        let d = point_segment_distance(
            Vec2::new(3.0, 4.0),
            Vec2::new(0.0, 0.0),
            Vec2::new(0.0, 0.0),
        );
        assert_relative_eq!(d, 5.0);
    }

    #[test]
    fn test_hit_test_prefers_x_when_all_axes_are_close() {
        // The pointer sits exactly on the projected gizmo origin, which
        // is an endpoint of all three segments: every axis is within
        // threshold, and the fixed precedence must return X.
        let vp = Viewport::new(800.0, 600.0);
        let cam = OrbitCamera::default();
        let origin = Vec3::ZERO;
        let pointer = cam.world_to_screen(origin, vp);
        assert_eq!(hit_test(&cam, vp, origin, pointer), Some(GizmoAxis::X));
    }

    #[test]
    fn test_hit_test_on_y_axis_tip() {
        let vp = Viewport::new(800.0, 600.0);
        let cam = head_on();
        let origin = Vec3::ZERO;
        let pointer = cam.world_to_screen(origin + Vec3::Y, vp);
        assert_eq!(hit_test(&cam, vp, origin, pointer), Some(GizmoAxis::Y));
    }

    #[test]
    fn test_hit_test_misses_far_pointer() {
        let vp = Viewport::new(800.0, 600.0);
        let cam = head_on();
        assert_eq!(hit_test(&cam, vp, Vec3::ZERO, Vec2::new(10.0, 10.0)), None);
    }

    #[test]
    fn test_drag_moves_only_the_armed_axis() {
        let mut drag = DragState::default();
        drag.arm(GizmoAxis::X, Vec2::new(100.0, 100.0), Vec3::new(1.0, 2.0, 3.0));
        let p = dragged_position(&drag, Vec2::new(250.0, 400.0)).unwrap();
        assert_relative_eq!(p.x, 1.0 + 150.0 * DRAG_SENSITIVITY);
        assert_relative_eq!(p.y, 2.0);
        assert_relative_eq!(p.z, 3.0);
    }

    #[test]
    fn test_drag_y_inverts_screen_axis() {
        // Pointer moving down (pixel y grows) lowers the solid.
        let mut drag = DragState::default();
        drag.arm(GizmoAxis::Y, Vec2::new(0.0, 0.0), Vec3::ZERO);
        let p = dragged_position(&drag, Vec2::new(0.0, 100.0)).unwrap();
        assert_relative_eq!(p.y, -1.0);
    }

    #[test]
    fn test_drag_z_follows_horizontal_motion() {
        let mut drag = DragState::default();
        drag.arm(GizmoAxis::Z, Vec2::new(0.0, 0.0), Vec3::ZERO);
        let p = dragged_position(&drag, Vec2::new(50.0, 0.0)).unwrap();
        assert_relative_eq!(p.z, 0.5);
    }

    #[test]
    fn test_no_drag_while_unarmed() {
        let drag = DragState::default();
        assert_eq!(dragged_position(&drag, Vec2::new(100.0, 100.0)), None);
    }
}
