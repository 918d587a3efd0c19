//! Wire representation of the GLX node list.
//!
//! Numbers follow the format's lossy-but-deterministic policy: values
//! are rounded to two decimals and integral results collapse to bare
//! integers. Rotation angles additionally carry a trailing `deg`
//! marker and therefore travel as strings.

use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use shared::Face;

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct Document {
    pub nodes: Vec<Node>,
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct Node {
    #[serde(rename = "type")]
    pub kind: String,
    /// 1-based position of the owning solid in the emitted solid
    /// sequence. Shape nodes only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node: Option<i64>,
    /// Signed-axis face code. Shape nodes only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plane: Option<Face>,
    pub data: NodeData,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub(crate) struct NodeData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<SizeData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<RotationData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intrude: Option<DepthData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extrude: Option<DepthData>,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub(crate) struct Coordinates {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<Scalar>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<Scalar>,
    /// Absent on shape nodes, whose coordinates are in-face 2-D.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z: Option<Scalar>,
}

/// Kind-specific size block; each solid/shape kind fills its own subset.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub(crate) struct SizeData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub h: Option<Scalar>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub w: Option<Scalar>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub l: Option<Scalar>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub r: Option<Scalar>,
    #[serde(rename = "innerR", default, skip_serializing_if = "Option::is_none")]
    pub inner_r: Option<Scalar>,
    #[serde(rename = "outerR", default, skip_serializing_if = "Option::is_none")]
    pub outer_r: Option<Scalar>,
    #[serde(
        rename = "slopeFactor",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub slope_factor: Option<Scalar>,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub(crate) struct RotationData {
    #[serde(rename = "xRot", default, skip_serializing_if = "Option::is_none")]
    pub x_rot: Option<Degrees>,
    #[serde(rename = "yRot", default, skip_serializing_if = "Option::is_none")]
    pub y_rot: Option<Degrees>,
    #[serde(rename = "zRot", default, skip_serializing_if = "Option::is_none")]
    pub z_rot: Option<Degrees>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub(crate) struct DepthData {
    pub depth: Scalar,
}

/// Round to two decimals in f64 so the shortest-repr printer emits
/// `0.1`, not the widened f32 tail.
fn round2(value: f32) -> f64 {
    (f64::from(value) * 100.0).round() / 100.0
}

/// A plain number on the wire: two decimals, integral values collapse
/// to bare integers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Scalar(pub f32);

impl Serialize for Scalar {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let rounded = round2(self.0);
        if rounded.fract() == 0.0 {
            serializer.serialize_i64(rounded as i64)
        } else {
            serializer.serialize_f64(rounded)
        }
    }
}

impl<'de> Deserialize<'de> for Scalar {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        f64::deserialize(deserializer).map(|v| Scalar(v as f32))
    }
}

/// A rotation angle on the wire: same rounding as [`Scalar`], written
/// as a string with a trailing `deg` marker. Bare numbers from older
/// files are accepted on read.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Degrees(pub f32);

impl Serialize for Degrees {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let rounded = round2(self.0);
        if rounded.fract() == 0.0 {
            serializer.serialize_str(&format!("{}deg", rounded as i64))
        } else {
            serializer.serialize_str(&format!("{rounded}deg"))
        }
    }
}

impl<'de> Deserialize<'de> for Degrees {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct DegreesVisitor;

        impl Visitor<'_> for DegreesVisitor {
            type Value = Degrees;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a number or a `<value>deg` string")
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<Degrees, E> {
                Ok(Degrees(v as f32))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Degrees, E> {
                Ok(Degrees(v as f32))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Degrees, E> {
                Ok(Degrees(v as f32))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Degrees, E> {
                v.trim_end_matches("deg")
                    .trim()
                    .parse::<f32>()
                    .map(Degrees)
                    .map_err(|_| E::custom(format!("invalid rotation value `{v}`")))
            }
        }

        deserializer.deserialize_any(DegreesVisitor)
    }
}
