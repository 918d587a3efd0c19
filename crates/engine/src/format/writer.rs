//! GLX writer: scene solids to node-list text.

use std::path::Path;

use shared::{DepthMode, Shape, ShapeKind, Solid, SolidKind};
use tracing::debug;

use super::errors::FormatError;
use super::schema::{
    Coordinates, Degrees, DepthData, Document, Node, NodeData, RotationData, Scalar, SizeData,
};

/// Generate the GLX text for a solid list: one node per solid in list
/// order, each immediately followed by the nodes of its shapes.
pub fn generate(solids: &[Solid]) -> String {
    let doc = document(solids);
    // Plain structs with string keys; pretty-printing cannot fail.
    serde_json::to_string_pretty(&doc).unwrap_or_default()
}

/// Generate and write the GLX text to a file.
pub fn save_to_file(solids: &[Solid], path: impl AsRef<Path>) -> Result<(), FormatError> {
    let path = path.as_ref();
    std::fs::write(path, generate(solids))?;
    debug!(path = %path.display(), solids = solids.len(), "saved GLX document");
    Ok(())
}

fn document(solids: &[Solid]) -> Document {
    let mut nodes = Vec::new();
    for (index, solid) in solids.iter().enumerate() {
        nodes.push(solid_node(solid));
        // Back-references use the 1-based position in the emitted solid
        // sequence, never the id: duplicates and removals shift it, so
        // it is recomputed on every write.
        let owner = index as i64 + 1;
        for shape in solid.shapes() {
            nodes.push(shape_node(shape, owner));
        }
    }
    Document { nodes }
}

fn solid_node(solid: &Solid) -> Node {
    let size = match solid.kind {
        SolidKind::Box => SizeData {
            h: Some(Scalar(solid.height)),
            w: Some(Scalar(solid.width)),
            l: Some(Scalar(solid.length)),
            ..SizeData::default()
        },
        SolidKind::Cylinder => SizeData {
            h: Some(Scalar(solid.height)),
            r: Some(Scalar(solid.width / 2.0)),
            ..SizeData::default()
        },
        SolidKind::Torus {
            inner_radius,
            outer_radius,
        } => SizeData {
            inner_r: Some(Scalar(inner_radius)),
            outer_r: Some(Scalar(outer_radius)),
            ..SizeData::default()
        },
        SolidKind::Wedge { slope_factor } => SizeData {
            h: Some(Scalar(solid.height)),
            w: Some(Scalar(solid.width)),
            l: Some(Scalar(solid.length)),
            slope_factor: Some(Scalar(slope_factor)),
            ..SizeData::default()
        },
    };

    Node {
        kind: solid.kind_label().to_string(),
        node: None,
        plane: None,
        data: NodeData {
            coordinates: Some(Coordinates {
                x: Some(Scalar(solid.position[0])),
                y: Some(Scalar(solid.position[1])),
                z: Some(Scalar(solid.position[2])),
            }),
            size: Some(size),
            rotation: Some(RotationData {
                x_rot: Some(Degrees(solid.rotation[0])),
                y_rot: Some(Degrees(solid.rotation[1])),
                z_rot: Some(Degrees(solid.rotation[2])),
            }),
            ..NodeData::default()
        },
    }
}

fn shape_node(shape: &Shape, owner: i64) -> Node {
    let size = match shape.kind {
        ShapeKind::Square { width, height } => SizeData {
            w: Some(Scalar(width)),
            h: Some(Scalar(height)),
            ..SizeData::default()
        },
        ShapeKind::Circle { radius } => SizeData {
            r: Some(Scalar(radius)),
            ..SizeData::default()
        },
    };

    // An intrusion cuts inward: its depth is written negated. A raise
    // keeps its sign. A planar decal has no depth block at all. The
    // demotion rule guarantees a non-planar mode implies depth > 0.
    let (prefix, intrude, extrude) = match shape.mode() {
        DepthMode::Planar => ("Plane-", None, None),
        DepthMode::Intruded => (
            "Cut-Intrude-",
            Some(DepthData {
                depth: Scalar(-shape.depth()),
            }),
            None,
        ),
        DepthMode::Extruded => (
            "Cut-Extrude-",
            None,
            Some(DepthData {
                depth: Scalar(shape.depth()),
            }),
        ),
    };

    Node {
        kind: format!("{}{}", prefix, shape.kind.label()),
        node: Some(owner),
        plane: Some(shape.face),
        data: NodeData {
            coordinates: Some(Coordinates {
                x: Some(Scalar(shape.x)),
                y: Some(Scalar(shape.y)),
                z: None,
            }),
            size: Some(size),
            intrude,
            extrude,
            ..NodeData::default()
        },
    }
}
