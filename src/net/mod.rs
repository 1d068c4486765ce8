//! HTTP layer for the backend's auth endpoints.
//!
//! `types` holds the decoded-response shape shared with the controller;
//! `api` is the gloo-net implementation of the [`AuthService`] seam,
//! gated behind the `hydrate` feature since it requires a browser.
//!
//! [`AuthService`]: crate::auth::AuthService

pub mod api;
pub mod types;
