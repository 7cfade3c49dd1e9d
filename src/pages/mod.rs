//! Routed pages.

pub mod admin;
pub mod home;
pub mod login;
