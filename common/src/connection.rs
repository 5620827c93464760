//! # Connection Records
//!
//! The normalized shape served to callers. Field names on the wire follow
//! the map client's conventions (`sourceSignature`, `estimatedEol`, ...).

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectionRecord {
    pub id: u64,
    pub scope: Scope,
    pub created: Created,
    /// Unix seconds.
    pub updated: i64,
    #[serde(rename = "type")]
    pub tags: Vec<ConnectionTag>,
    #[serde(rename = "estimatedEol")]
    pub estimated_eol: Number,
    pub source: SystemSnapshot,
    pub target: SystemSnapshot,
    #[serde(rename = "sourceSignature")]
    pub source_signature: SignatureSnapshot,
    #[serde(rename = "targetSignature")]
    pub target_signature: SignatureSnapshot,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    Wh,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Created {
    /// Unix seconds.
    pub timestamp: i64,
    /// Whoever reported the connection, passed through untouched.
    pub character: Map<String, Value>,
}

/// Category tags of a connection, in the order they are emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectionTag {
    Fresh,
    Eol,
    JumpMassXl,
    JumpMassL,
    JumpMassM,
    JumpMassS,
}

/// Largest ship class able to pass a wormhole, as reported upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpMass {
    Small,
    Medium,
    Large,
    Xlarge,
    Capital,
}

impl JumpMass {
    /// Capital and xlarge holes share one tag.
    pub fn tag(self) -> ConnectionTag {
        match self {
            JumpMass::Capital | JumpMass::Xlarge => ConnectionTag::JumpMassXl,
            JumpMass::Large => ConnectionTag::JumpMassL,
            JumpMass::Medium => ConnectionTag::JumpMassM,
            JumpMass::Small => ConnectionTag::JumpMassS,
        }
    }
}

impl FromStr for JumpMass {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "small" => Ok(JumpMass::Small),
            "medium" => Ok(JumpMass::Medium),
            "large" => Ok(JumpMass::Large),
            "xlarge" => Ok(JumpMass::Xlarge),
            "capital" => Ok(JumpMass::Capital),
            other => Err(format!("unknown jump mass: {other}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemSnapshot {
    pub id: u64,
    pub name: String,
    /// True security rounded to four decimals.
    pub system_class: f64,
    pub constellation: ConstellationRef,
    pub region: RegionRef,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstellationRef {
    pub id: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionRef {
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignatureSnapshot {
    pub name: Option<String>,
    pub short_name: Option<String>,
    /// Only set on the side that is the wormhole's outward exit.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<SignatureType>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignatureType {
    pub name: String,
}
