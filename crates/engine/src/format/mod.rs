//! GLX format codec: the node-list text format used to persist a scene.
//!
//! The canonical on-disk form is pretty-printed JSON with a root
//! `nodes` array. Solid nodes carry coordinates/size/rotation blocks;
//! shape nodes additionally carry a 1-based back-reference to their
//! owning solid's position in the emitted solid sequence and a
//! signed-axis plane code. Loading is two-pass because shape nodes may
//! appear before the solid they reference.

mod errors;
mod reader;
mod schema;
mod writer;

pub use errors::FormatError;
pub use reader::{inspect, load_from_file, load_from_str, validate, DocumentInfo};
pub use writer::{generate, save_to_file};
