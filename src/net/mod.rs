//! Network layer: wire types and REST helpers for the guide API.

pub mod api;
pub mod types;
