//! Structural scene operations: add/remove/duplicate solids, active
//! solid tracking, shape attachment and editing, and wholesale
//! replacement.

use shared::{DepthMode, Face, Shape, Solid, SolidKind};
use tracing::debug;

use super::Scene;

impl Scene {
    /// Create a solid of the given kind, append it, and return its id.
    /// The first solid added to an empty scene becomes active.
    pub fn add_solid(&self, kind: SolidKind) -> u32 {
        let mut state = self.lock();
        let id = state.next_id;
        state.next_id += 1;
        let solid = Solid::new(id, format!("{}_{}", kind.label(), id), kind);
        debug!(id, name = %solid.name, "adding solid");
        state.solids.push(solid);
        if state.active.is_none() {
            state.active = Some(state.solids.len() - 1);
        }
        id
    }

    /// Append an already-built solid (load paths). Same auto-select
    /// rule as [`Scene::add_solid`].
    pub fn insert_solid(&self, solid: Solid) {
        let mut state = self.lock();
        state.next_id = state.next_id.max(solid.id + 1);
        state.solids.push(solid);
        if state.active.is_none() {
            state.active = Some(state.solids.len() - 1);
        }
    }

    /// Remove a solid by id. If it was active, the first remaining
    /// solid becomes active (or none if the scene is now empty).
    pub fn remove_solid(&self, id: u32) -> bool {
        let mut state = self.lock();
        let Some(index) = state.solids.iter().position(|s| s.id == id) else {
            return false;
        };
        state.solids.remove(index);
        state.active = match state.active {
            Some(active) if active == index => {
                if state.solids.is_empty() {
                    None
                } else {
                    Some(0)
                }
            }
            Some(active) if active > index => Some(active - 1),
            other => other,
        };
        true
    }

    /// Make the solid with the given id active. No-op unless it is a
    /// member of the scene.
    pub fn set_active(&self, id: u32) {
        let mut state = self.lock();
        if let Some(index) = state.solids.iter().position(|s| s.id == id) {
            state.active = Some(index);
        }
    }

    /// Duplicate the active solid: scalar fields are copied, the shape
    /// list starts empty. Returns the new solid's id.
    pub fn duplicate_active(&self) -> Option<u32> {
        let mut state = self.lock();
        let original = state.active_solid()?.clone();
        let id = state.next_id;
        state.next_id += 1;
        let copy = original.duplicate(id, format!("{}_{}", original.kind_label(), id));
        state.solids.push(copy);
        Some(id)
    }

    /// Drop every solid and reset the id allocator.
    pub fn clear(&self) {
        let mut state = self.lock();
        state.solids.clear();
        state.active = None;
        state.next_id = 1;
    }

    /// Replace the whole solid list (after a successful load). The
    /// first solid becomes active; the allocator continues past the
    /// highest id present.
    pub fn replace_all(&self, solids: Vec<Solid>) {
        let mut state = self.lock();
        state.next_id = solids.iter().map(|s| s.id + 1).max().unwrap_or(1);
        state.active = if solids.is_empty() { None } else { Some(0) };
        state.solids = solids;
    }

    /// Attach a shape to the solid with the given id.
    pub fn add_shape(&self, solid_id: u32, shape: Shape) -> bool {
        let mut state = self.lock();
        match state.solids.iter_mut().find(|s| s.id == solid_id) {
            Some(solid) => {
                solid.add_shape(shape);
                true
            }
            None => false,
        }
    }

    /// Detach the shape at `index` from the solid with the given id.
    pub fn remove_shape(&self, solid_id: u32, index: usize) -> Option<Shape> {
        let mut state = self.lock();
        state
            .solids
            .iter_mut()
            .find(|s| s.id == solid_id)?
            .remove_shape(index)
    }

    /// Run an edit against one attached shape. Returns `false` when the
    /// solid or the shape does not exist.
    pub(crate) fn with_shape(
        &self,
        solid_id: u32,
        index: usize,
        edit: impl FnOnce(&mut Shape),
    ) -> bool {
        let mut state = self.lock();
        match state
            .solids
            .iter_mut()
            .find(|s| s.id == solid_id)
            .and_then(|s| s.shape_mut(index))
        {
            Some(shape) => {
                edit(shape);
                true
            }
            None => false,
        }
    }

    pub fn update_shape_x(&self, solid_id: u32, index: usize, x: f32) -> bool {
        self.with_shape(solid_id, index, |shape| shape.x = x)
    }

    pub fn update_shape_y(&self, solid_id: u32, index: usize, y: f32) -> bool {
        self.with_shape(solid_id, index, |shape| shape.y = y)
    }

    /// Move a shape to another face of its solid.
    pub fn update_shape_face(&self, solid_id: u32, index: usize, face: Face) -> bool {
        self.with_shape(solid_id, index, |shape| shape.face = face)
    }

    pub fn update_shape_rotation(&self, solid_id: u32, index: usize, degrees: f32) -> bool {
        self.with_shape(solid_id, index, |shape| shape.rotation = degrees)
    }

    /// Set a shape's cut/raise depth. Negative values clamp to zero,
    /// which demotes the shape to planar.
    pub fn update_shape_depth(&self, solid_id: u32, index: usize, depth: f32) -> bool {
        self.with_shape(solid_id, index, |shape| shape.set_depth(depth))
    }

    pub fn update_shape_mode(&self, solid_id: u32, index: usize, mode: DepthMode) -> bool {
        self.with_shape(solid_id, index, |shape| shape.set_mode(mode))
    }
}
