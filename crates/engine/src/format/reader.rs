//! GLX reader: node-list text back to scene solids.

use std::path::Path;

use shared::{DepthMode, Face, Shape, ShapeKind, Solid, SolidKind};
use tracing::{debug, warn};

use super::errors::FormatError;
use super::schema::{Document, Node, NodeData, SizeData};

/// Summary of a document's contents without building any solids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentInfo {
    pub solid_count: usize,
    pub shape_count: usize,
    /// Canonical kind labels of the solids, in document order.
    pub solid_kinds: Vec<&'static str>,
}

/// Load a GLX document from a file.
pub fn load_from_file(path: impl AsRef<Path>) -> Result<Vec<Solid>, FormatError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)?;
    let solids = load_from_str(&text)?;
    debug!(path = %path.display(), solids = solids.len(), "loaded GLX document");
    Ok(solids)
}

/// Parse a GLX document. All-or-nothing except for shape nodes whose
/// back-reference points outside the solid sequence; those are dropped
/// with a warning.
///
/// Two passes over the node list: the first builds the solids so that
/// the second can resolve shape back-references even when a shape node
/// appears before its owner.
pub fn load_from_str(text: &str) -> Result<Vec<Solid>, FormatError> {
    let doc: Document = serde_json::from_str(text)?;

    let mut solids = Vec::new();
    for node in &doc.nodes {
        if let Some(kind) = solid_kind(&node.kind) {
            let position = solids.len() + 1;
            solids.push(build_solid(position, kind, node));
        } else if shape_kind(&node.kind).is_none() {
            return Err(FormatError::UnknownKind(node.kind.clone()));
        }
    }

    for node in &doc.nodes {
        let Some((mode, kind)) = shape_kind(&node.kind) else {
            continue;
        };
        let owner = node.node.ok_or_else(|| {
            FormatError::Malformed(format!("shape node `{}` has no back-reference", node.kind))
        })?;
        let plane = node.plane.ok_or_else(|| {
            FormatError::Malformed(format!("shape node `{}` has no plane", node.kind))
        })?;
        let index = owner - 1;
        let Some(solid) = usize::try_from(index).ok().and_then(|i| solids.get_mut(i)) else {
            warn!(
                kind = %node.kind,
                reference = owner,
                "dropping shape with out-of-range back-reference"
            );
            continue;
        };
        solid.add_shape(build_shape(mode, kind, plane, node));
    }

    Ok(solids)
}

/// Cheap structural check: valid JSON with a root `nodes` array whose
/// entries carry a string `type` and an object `data`, with shape
/// nodes also carrying `node` and `plane`. Used to gate file-open
/// dialogs; a `true` here does not guarantee [`load_from_str`] will
/// succeed.
pub fn validate(text: &str) -> bool {
    let Ok(value) = serde_json::from_str::<serde_json::Value>(text) else {
        return false;
    };
    match value.get("nodes").and_then(|n| n.as_array()) {
        Some(nodes) => nodes.iter().all(valid_node),
        None => false,
    }
}

fn valid_node(node: &serde_json::Value) -> bool {
    let Some(kind) = node.get("type").and_then(|t| t.as_str()) else {
        return false;
    };
    if !node.get("data").is_some_and(|d| d.is_object()) {
        return false;
    }
    if shape_kind(kind).is_some() {
        node.get("node").is_some_and(|n| n.is_i64()) && node.get("plane").is_some()
    } else {
        true
    }
}

/// Count solids and shapes without building the scene.
pub fn inspect(text: &str) -> Result<DocumentInfo, FormatError> {
    let doc: Document = serde_json::from_str(text)?;
    let mut info = DocumentInfo {
        solid_count: 0,
        shape_count: 0,
        solid_kinds: Vec::new(),
    };
    for node in &doc.nodes {
        if let Some(kind) = solid_kind(&node.kind) {
            info.solid_count += 1;
            info.solid_kinds.push(kind.label());
        } else if shape_kind(&node.kind).is_some() {
            info.shape_count += 1;
        } else {
            return Err(FormatError::UnknownKind(node.kind.clone()));
        }
    }
    Ok(info)
}

/// Map a type keyword to a solid kind with default parameters.
/// `Cube`, `Donut` and `Triangle` are accepted as historical aliases.
fn solid_kind(keyword: &str) -> Option<SolidKind> {
    match keyword {
        "Box" | "Cube" => Some(SolidKind::Box),
        "Cylinder" => Some(SolidKind::Cylinder),
        "Torus" | "Donut" => Some(SolidKind::torus()),
        "Wedge" | "Triangle" => Some(SolidKind::wedge()),
        _ => None,
    }
}

/// Map a type keyword to a depth mode plus outline kind with default
/// sizes. Returns `None` when the keyword is not a shape keyword.
fn shape_kind(keyword: &str) -> Option<(DepthMode, ShapeKind)> {
    let (mode, outline) = if let Some(rest) = keyword.strip_prefix("Cut-Intrude-") {
        (DepthMode::Intruded, rest)
    } else if let Some(rest) = keyword.strip_prefix("Cut-Extrude-") {
        (DepthMode::Extruded, rest)
    } else if let Some(rest) = keyword.strip_prefix("Plane-") {
        (DepthMode::Planar, rest)
    } else {
        return None;
    };
    let kind = match outline {
        "Square" => ShapeKind::Square {
            width: 0.3,
            height: 0.3,
        },
        "Circle" => ShapeKind::Circle { radius: 0.15 },
        _ => return None,
    };
    Some((mode, kind))
}

fn scalar(value: Option<super::schema::Scalar>, default: f32) -> f32 {
    value.map_or(default, |s| s.0)
}

fn build_solid(position: usize, kind: SolidKind, node: &Node) -> Solid {
    let data = &node.data;
    let size = data.size.unwrap_or_default();

    let kind = match kind {
        SolidKind::Torus { .. } => SolidKind::Torus {
            inner_radius: scalar(size.inner_r, 0.3),
            outer_radius: scalar(size.outer_r, 0.7),
        },
        SolidKind::Wedge { .. } => SolidKind::Wedge {
            slope_factor: scalar(size.slope_factor, 1.0),
        },
        other => other,
    };

    let mut solid = Solid::new(
        position as u32,
        format!("{}_{}", kind.label(), position),
        kind,
    );

    if let Some(coords) = data.coordinates {
        solid.position = [
            scalar(coords.x, 0.0),
            scalar(coords.y, 0.0),
            scalar(coords.z, 0.0),
        ];
    }
    apply_solid_size(&mut solid, &size);
    if let Some(rot) = data.rotation {
        solid.rotation = [
            rot.x_rot.map_or(0.0, |d| d.0),
            rot.y_rot.map_or(0.0, |d| d.0),
            rot.z_rot.map_or(0.0, |d| d.0),
        ];
    }
    solid
}

fn apply_solid_size(solid: &mut Solid, size: &SizeData) {
    match solid.kind {
        SolidKind::Box | SolidKind::Wedge { .. } => {
            solid.width = scalar(size.w, 1.0);
            solid.length = scalar(size.l, 1.0);
            solid.height = scalar(size.h, 1.0);
        }
        SolidKind::Cylinder => {
            // Cylinders persist a radius; width and length mirror the
            // diameter so the shared size fields stay meaningful.
            let r = scalar(size.r, 0.5);
            solid.width = 2.0 * r;
            solid.length = 2.0 * r;
            solid.height = scalar(size.h, 1.0);
        }
        SolidKind::Torus { .. } => {}
    }
}

fn build_shape(mode: DepthMode, kind: ShapeKind, face: Face, node: &Node) -> Shape {
    let data = &node.data;
    let size = data.size.unwrap_or_default();
    let kind = match kind {
        ShapeKind::Square { .. } => ShapeKind::Square {
            width: scalar(size.w, 0.3),
            height: scalar(size.h, 0.3),
        },
        ShapeKind::Circle { .. } => ShapeKind::Circle { radius: scalar(size.r, 0.15) },
    };

    // Intrusions are stored negated; the model keeps depth positive.
    let depth = depth_of(data, mode);
    let mut shape = Shape::with_mode(format!("{}_shape", node.kind), face, kind, mode, depth);
    if let Some(coords) = data.coordinates {
        shape.x = scalar(coords.x, 0.0);
        shape.y = scalar(coords.y, 0.0);
    }
    shape
}

fn depth_of(data: &NodeData, mode: DepthMode) -> f32 {
    match mode {
        DepthMode::Planar => 0.0,
        DepthMode::Intruded => data.intrude.map_or(0.0, |d| d.depth.0.abs()),
        DepthMode::Extruded => data.extrude.map_or(0.0, |d| d.depth.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_solid_keyword_aliases() {
        assert_eq!(solid_kind("Box"), Some(SolidKind::Box));
        assert_eq!(solid_kind("Cube"), Some(SolidKind::Box));
        assert_eq!(solid_kind("Donut"), Some(SolidKind::torus()));
        assert_eq!(solid_kind("Triangle"), Some(SolidKind::wedge()));
        assert_eq!(solid_kind("Sphere"), None);
    }

    #[test]
    fn test_shape_keyword_patterns() {
        assert!(matches!(
            shape_kind("Cut-Intrude-Square"),
            Some((DepthMode::Intruded, ShapeKind::Square { .. }))
        ));
        assert!(matches!(
            shape_kind("Cut-Extrude-Circle"),
            Some((DepthMode::Extruded, ShapeKind::Circle { .. }))
        ));
        assert!(matches!(
            shape_kind("Plane-Square"),
            Some((DepthMode::Planar, ShapeKind::Square { .. }))
        ));
        assert_eq!(shape_kind("Cut-Intrude-Hexagon"), None);
        assert_eq!(shape_kind("Box"), None);
    }

    #[test]
    fn test_minimal_cube_defaults() {
        let text = r#"{"nodes":[{"type":"Cube","data":{}}]}"#;
        let solids = load_from_str(text).unwrap();
        assert_eq!(solids.len(), 1);
        assert_eq!(solids[0].kind, SolidKind::Box);
        assert_eq!(solids[0].name, "Box_1");
        assert_relative_eq!(solids[0].width, 1.0);
        assert_relative_eq!(solids[0].length, 1.0);
        assert_relative_eq!(solids[0].height, 1.0);
        assert_eq!(solids[0].position, [0.0; 3]);
    }

    #[test]
    fn test_cylinder_radius_maps_to_diameter() {
        let text = r#"{"nodes":[{"type":"Cylinder","data":{"size":{"r":0.75,"h":2}}}]}"#;
        let solids = load_from_str(text).unwrap();
        assert_relative_eq!(solids[0].width, 1.5);
        assert_relative_eq!(solids[0].length, 1.5);
        assert_relative_eq!(solids[0].height, 2.0);
    }

    #[test]
    fn test_shape_before_owner_resolves() {
        let text = r#"{"nodes":[
            {"type":"Plane-Circle","node":1,"plane":"+Y","data":{}},
            {"type":"Box","data":{}}
        ]}"#;
        let solids = load_from_str(text).unwrap();
        assert_eq!(solids.len(), 1);
        assert_eq!(solids[0].shapes().len(), 1);
        assert_eq!(solids[0].shapes()[0].face, Face::Top);
    }

    #[test]
    fn test_intrude_depth_read_as_positive() {
        let text = r#"{"nodes":[
            {"type":"Box","data":{}},
            {"type":"Cut-Intrude-Square","node":1,"plane":"+Z",
             "data":{"intrude":{"depth":-0.25}}}
        ]}"#;
        let solids = load_from_str(text).unwrap();
        let shape = &solids[0].shapes()[0];
        assert_eq!(shape.mode(), DepthMode::Intruded);
        assert_relative_eq!(shape.depth(), 0.25);
    }

    #[test]
    fn test_dangling_reference_is_dropped() {
        let text = r#"{"nodes":[
            {"type":"Box","data":{}},
            {"type":"Plane-Square","node":5,"plane":"+X","data":{}}
        ]}"#;
        let solids = load_from_str(text).unwrap();
        assert_eq!(solids.len(), 1);
        assert!(solids[0].shapes().is_empty());
    }

    #[test]
    fn test_unknown_kind_fails() {
        let text = r#"{"nodes":[{"type":"Sphere","data":{}}]}"#;
        assert!(matches!(
            load_from_str(text),
            Err(FormatError::UnknownKind(k)) if k == "Sphere"
        ));
    }

    #[test]
    fn test_shape_without_reference_fails() {
        let text = r#"{"nodes":[{"type":"Plane-Circle","plane":"+Y","data":{}}]}"#;
        assert!(matches!(
            load_from_str(text),
            Err(FormatError::Malformed(_))
        ));
    }

    #[test]
    fn test_shape_without_plane_fails() {
        let text = r#"{"nodes":[{"type":"Plane-Circle","node":1,"data":{}}]}"#;
        assert!(matches!(
            load_from_str(text),
            Err(FormatError::Malformed(_))
        ));
    }

    #[test]
    fn test_validate() {
        assert!(validate(r#"{"nodes":[]}"#));
        assert!(validate(r#"{"nodes":[{"type":"Box","data":{}}]}"#));
        assert!(validate(
            r#"{"nodes":[{"type":"Plane-Circle","node":1,"plane":"+Y","data":{}}]}"#
        ));
        assert!(!validate("not json"));
        assert!(!validate(r#"{"nodes":{}}"#));
        assert!(!validate(r#"{"other":[]}"#));
        assert!(!validate(r#"{"nodes":[{"data":{}}]}"#));
        assert!(!validate(r#"{"nodes":[{"type":"Box"}]}"#));
        assert!(!validate(r#"{"nodes":[{"type":"Plane-Circle","data":{}}]}"#));
    }

    #[test]
    fn test_inspect_counts() {
        let text = r#"{"nodes":[
            {"type":"Box","data":{}},
            {"type":"Plane-Circle","node":1,"plane":"+Y","data":{}},
            {"type":"Donut","data":{}}
        ]}"#;
        let info = inspect(text).unwrap();
        assert_eq!(info.solid_count, 2);
        assert_eq!(info.shape_count, 1);
        assert_eq!(info.solid_kinds, vec!["Box", "Torus"]);
    }
}
