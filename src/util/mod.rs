//! Browser-environment helpers.

pub mod browser;
pub mod credentials;
