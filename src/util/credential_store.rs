//! Session-token persistence in `localStorage`.
//!
//! The token lives under a fixed key and each save overwrites the prior
//! value. Storage failures (quota, disabled storage) are ignored; the
//! login still proceeds and the next request will simply be unauthenticated.

use crate::auth::{AuthToken, CredentialStore};

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "auth_token";

/// [`CredentialStore`] backed by the browser's `localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageCredentialStore;

impl CredentialStore for LocalStorageCredentialStore {
    fn save(&self, token: &AuthToken) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                if let Ok(Some(storage)) = window.local_storage() {
                    let _ = storage.set_item(STORAGE_KEY, token.as_str());
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
        }
    }
}
