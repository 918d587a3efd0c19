//! Core engine for the GLX scene editor.
//!
//! Three pieces live here, consumed by the (external) window shell and
//! widget layer:
//!
//! - [`scene`]: the shared scene state. Ordered solid list, active
//!   solid, camera and gizmo interaction state. Snapshot-on-read, one
//!   mutation guard.
//! - [`format`]: the GLX node-list codec. Reader, writer, validation.
//! - [`viewport`]: the camera transform the renderer uses and the
//!   screen-space gizmo projection/hit-test/drag math that must stay
//!   consistent with it.

pub mod format;
pub mod scene;
pub mod viewport;

pub use scene::Scene;
