//! Error taxonomy of the GLX codec.

use thiserror::Error;

/// Failure loading or saving a GLX document. Loads are all-or-nothing:
/// when any of these is returned, no solids have been produced.
#[derive(Debug, Error)]
pub enum FormatError {
    /// The text is not valid JSON, or a node is missing a required
    /// field that the serde layer enforces (`type`, `data`).
    #[error("malformed GLX document: {0}")]
    Json(#[from] serde_json::Error),

    /// Structurally invalid document: missing back-reference or plane
    /// on a shape node.
    #[error("malformed GLX document: {0}")]
    Malformed(String),

    /// A node's type keyword matches neither a solid kind nor a shape
    /// keyword pattern.
    #[error("unknown node type `{0}`")]
    UnknownKind(String),

    /// Reading or writing the underlying file failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
