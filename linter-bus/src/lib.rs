//! Feed normalization rules for L'Inter (TaCL).
//!
//! Agency-specific rules a GTFS cleaning pipeline plugs in: canonical route
//! and stop IDs, route names, and French label cleanup. Served over HTTP by
//! the `linter-bus` binary.

pub mod agency;
pub mod clean;
pub mod config;
pub mod domain;
pub mod rules;
pub mod web;
