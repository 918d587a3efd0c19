//! Per-field conveniences forwarding to the active solid.
//!
//! Getters return a neutral default (1.0 for sizes, 0.0 for position
//! and rotation) when no solid is active; callers must not read that
//! as an error signal. Setters are unconditional; range validation
//! lives in the edit layer.

use super::Scene;

macro_rules! forward_size {
    ($get:ident, $set:ident, $field:ident) => {
        pub fn $get(&self) -> f32 {
            self.lock().active_solid().map_or(1.0, |s| s.$field)
        }

        pub fn $set(&self, value: f32) {
            if let Some(solid) = self.lock().active_solid_mut() {
                solid.$field = value;
            }
        }
    };
}

macro_rules! forward_axis {
    ($get:ident, $set:ident, $field:ident, $index:expr) => {
        pub fn $get(&self) -> f32 {
            self.lock().active_solid().map_or(0.0, |s| s.$field[$index])
        }

        pub fn $set(&self, value: f32) {
            if let Some(solid) = self.lock().active_solid_mut() {
                solid.$field[$index] = value;
            }
        }
    };
}

impl Scene {
    forward_size!(get_width, set_width, width);
    forward_size!(get_length, set_length, length);
    forward_size!(get_height, set_height, height);

    forward_axis!(get_position_x, set_position_x, position, 0);
    forward_axis!(get_position_y, set_position_y, position, 1);
    forward_axis!(get_position_z, set_position_z, position, 2);

    forward_axis!(get_rotation_x, set_rotation_x, rotation, 0);
    forward_axis!(get_rotation_y, set_rotation_y, rotation, 1);
    forward_axis!(get_rotation_z, set_rotation_z, rotation, 2);

    /// Volume of the active solid, 0.0 when none is active.
    pub fn active_volume(&self) -> f32 {
        self.lock().active_solid().map_or(0.0, |s| s.volume())
    }

    /// Surface area of the active solid, 0.0 when none is active.
    pub fn active_surface_area(&self) -> f32 {
        self.lock().active_solid().map_or(0.0, |s| s.surface_area())
    }
}
