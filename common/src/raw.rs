//! # Raw Eve-Scout Model
//!
//! Upstream entries are untrusted. Fields the normalizer cannot do without
//! are required here so that a missing key or a type mismatch fails the
//! decode of that one entry. Everything else falls back to a default.

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Number, Value};

#[derive(Debug, Clone, Deserialize)]
pub struct RawConnection {
    #[serde(deserialize_with = "lenient_id")]
    pub id: u64,
    #[serde(rename = "type")]
    pub kind: String,
    pub source: RawEndpoint,
    pub target: RawEndpoint,
    pub wormhole: RawWormhole,
    pub created: String,
    pub updated: String,
    /// Opaque reporter data. Anything but an object (PHP emits `[]` for an
    /// empty mapping) reads as an empty map.
    #[serde(default, deserialize_with = "object_or_empty")]
    pub character: Map<String, Value>,
    #[serde(default)]
    pub wh_exits_outward: Option<bool>,
    /// Second spelling of `wh_exits_outward` seen in upstream payloads.
    #[serde(default)]
    pub wh_exits_outware: Option<bool>,
    #[serde(default)]
    pub wh_type: Option<String>,
}

impl RawConnection {
    /// Whether the hub side of this connection is the wormhole's outward exit.
    ///
    /// Both spellings of the flag describe the same fact. The canonical one
    /// wins when both are present; an absent flag reads as `false`.
    pub fn exits_outward(&self) -> bool {
        self.wh_exits_outward
            .or(self.wh_exits_outware)
            .unwrap_or(false)
    }

    /// The wormhole type label, if upstream sent a non-empty one.
    pub fn wormhole_type(&self) -> Option<&str> {
        self.wh_type.as_deref().map(str::trim).filter(|t| !t.is_empty())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawEndpoint {
    #[serde(deserialize_with = "lenient_id")]
    pub id: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub signature: RawSignature,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSignature {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawWormhole {
    /// Kept as the upstream number so it can be echoed back unchanged.
    #[serde(rename = "estimatedEol")]
    pub estimated_eol: Number,
    #[serde(rename = "jumpMass", default)]
    pub jump_mass: Option<String>,
}

fn object_or_empty<'de, D>(deserializer: D) -> Result<Map<String, Value>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Object(map) => Ok(map),
        _ => Ok(Map::new()),
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accepts ids sent either as JSON integers or as numeric strings.
fn lenient_id<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Int(u64),
        Text(String),
    }

    match Id::deserialize(deserializer)? {
        Id::Int(id) => Ok(id),
        Id::Text(text) => text.trim().parse().map_err(serde::de::Error::custom),
    }
}
