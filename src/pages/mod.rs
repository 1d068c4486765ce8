//! Top-level page components.

pub mod auth;
pub mod home;
