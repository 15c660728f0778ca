//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs`: Wire types and endpoint paths
//! - `client.rs`: Sub-client with the HTTP methods

pub mod agent;
pub mod wiki;
