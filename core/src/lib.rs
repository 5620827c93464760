//! # Thera Core
//!
//! Turns the Eve-Scout connection feed into normalized, cached
//! [`ConnectionRecord`](thera_common::connection::ConnectionRecord)s.
//!
//! * **[`normalizer`]**: Pure per-entry mapping.
//! * **[`fetcher`]**: One fetch cycle: request, filter, resolve, normalize.
//! * **[`cache`]** / **[`endpoint`]**: TTL caching around the fetcher.
//! * **[`eve_scout`]**, **[`esi`]**, **[`static_systems`]**: Adapters for the ports in `thera-common`.

pub mod cache;
pub mod endpoint;
pub mod error;
pub mod esi;
pub mod eve_scout;
pub mod fetcher;
pub mod normalizer;
pub mod static_systems;
