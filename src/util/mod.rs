//! Browser-environment glue: token storage, page context, navigation, and
//! the carousel timer. Everything here degrades to a no-op or `None`
//! outside the browser so the core stays testable on the host.

pub mod credential_store;
pub mod csrf;
pub mod navigate;
pub mod ticker;
