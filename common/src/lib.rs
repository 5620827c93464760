//! # Thera Common
//!
//! Shared vocabulary of the workspace: the raw Eve-Scout payload shapes, the
//! normalized connection records, the ports the core talks through and the
//! runtime configuration.
//!
//! * **[`raw`]**: Untrusted upstream entries, decoded leniently.
//! * **[`connection`]**: The strict records handed to callers.
//! * **[`system`]**: Static solar system data and the lookup port.
//! * **[`source`]**: The upstream client port.

pub mod config;
pub mod connection;
pub mod error;
pub mod raw;
pub mod source;
pub mod system;
