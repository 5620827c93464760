//! # Connection Normalizer
//!
//! Pure mapping from one decoded Eve-Scout entry, plus the static data of
//! both of its systems, into a [`ConnectionRecord`].
//!
//! Every step is a standalone function so it can be exercised on its own.
//! The only hard failure is an unparsable timestamp, checked by
//! [`parse_times`] before anything else is done with the entry.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use thera_common::connection::{
    ConnectionRecord, ConnectionTag, ConstellationRef, Created, JumpMass, RegionRef, Scope,
    SignatureSnapshot, SignatureType, SystemSnapshot,
};
use thera_common::error::Rejected;
use thera_common::raw::{RawConnection, RawSignature, RawWormhole};
use thera_common::system::StaticSystemInfo;

/// Remaining lifetime at or below which a hole counts as end-of-life.
pub const EOL_THRESHOLD: f64 = 4.0;

const SHORT_NAME_LEN: usize = 3;

/// Offset-less layouts, read as UTC.
const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// `created` and `updated` of one entry, in unix seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timestamps {
    pub created: i64,
    pub updated: i64,
}

pub fn parse_times(raw: &RawConnection) -> Result<Timestamps, Rejected> {
    Ok(Timestamps {
        created: parse_timestamp("created", &raw.created)?,
        updated: parse_timestamp("updated", &raw.updated)?,
    })
}

pub fn normalize(
    raw: &RawConnection,
    times: Timestamps,
    source: &StaticSystemInfo,
    target: &StaticSystemInfo,
) -> ConnectionRecord {
    let outward = raw.exits_outward();
    let wh_type = raw.wormhole_type();

    ConnectionRecord {
        id: raw.id,
        scope: Scope::Wh,
        created: Created {
            timestamp: times.created,
            character: raw.character.clone(),
        },
        updated: times.updated,
        tags: categorize(&raw.wormhole),
        estimated_eol: raw.wormhole.estimated_eol.clone(),
        source: system_snapshot(source),
        target: system_snapshot(target),
        source_signature: signature(&raw.source.signature, wh_type.filter(|_| outward)),
        target_signature: signature(&raw.target.signature, wh_type.filter(|_| !outward)),
    }
}

/// Parses an ISO-8601 date-time into unix seconds.
pub fn parse_timestamp(field: &'static str, value: &str) -> Result<i64, Rejected> {
    let value = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.timestamp());
    }

    for format in NAIVE_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(dt.and_utc().timestamp());
        }
    }

    if let Some(midnight) = NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
    {
        return Ok(midnight.and_utc().timestamp());
    }

    Err(Rejected::InvalidTimestamp {
        field,
        value: value.to_string(),
    })
}

/// `fresh` first, then `eol` if due, then the mass tag if the class is known.
pub fn categorize(wormhole: &RawWormhole) -> Vec<ConnectionTag> {
    let mut tags = vec![ConnectionTag::Fresh];

    if wormhole
        .estimated_eol
        .as_f64()
        .is_some_and(|eol| eol <= EOL_THRESHOLD)
    {
        tags.push(ConnectionTag::Eol);
    }

    if let Some(mass) = wormhole
        .jump_mass
        .as_deref()
        .and_then(|mass| mass.parse::<JumpMass>().ok())
    {
        tags.push(mass.tag());
    }

    tags
}

pub fn system_snapshot(info: &StaticSystemInfo) -> SystemSnapshot {
    SystemSnapshot {
        id: info.id,
        name: info.name.clone(),
        system_class: round4(info.true_sec),
        constellation: ConstellationRef {
            id: info.constellation.id,
        },
        region: RegionRef {
            id: info.constellation.region.id,
            name: info.constellation.region.name.clone(),
        },
    }
}

/// Builds one side's signature; `wh_type` is attached uppercased when given.
pub fn signature(raw: &RawSignature, wh_type: Option<&str>) -> SignatureSnapshot {
    let name = raw.name.as_deref().filter(|name| !name.is_empty());

    SignatureSnapshot {
        name: name.map(str::to_string),
        short_name: name.map(|name| name.chars().take(SHORT_NAME_LEN).collect()),
        kind: wh_type.map(|kind| SignatureType {
            name: kind.to_uppercase(),
        }),
    }
}

fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}
