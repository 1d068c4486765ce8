//! REST calls to the backend's auth endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, posting the
//! input records as JSON with the CSRF header and cookies included.
//! Server-side (SSR): stubs returning an error, since these endpoints are
//! only meaningful in the browser.

#![allow(clippy::unused_async)]

use serde::Serialize;

use crate::auth::{AuthError, AuthService};
use crate::net::types::ServiceResponse;
use crate::state::auth::{LoginInput, RegistrationInput};

/// Login endpoint, relative to the serving origin.
pub const LOGIN_ENDPOINT: &str = "/security/users/login/";
/// Registration endpoint, relative to the serving origin.
pub const REGISTER_ENDPOINT: &str = "/security/users/register/";

/// Header the backend checks for the anti-forgery token.
pub const CSRF_HEADER: &str = "X-CSRFToken";

/// [`AuthService`] over the real backend via `gloo-net`.
#[derive(Clone, Copy, Debug, Default)]
pub struct GlooAuthService;

impl AuthService for GlooAuthService {
    async fn login(
        &self,
        input: &LoginInput,
        csrf_token: &str,
    ) -> Result<ServiceResponse, AuthError> {
        post_json(LOGIN_ENDPOINT, input, csrf_token).await
    }

    async fn register(
        &self,
        input: &RegistrationInput,
        csrf_token: &str,
    ) -> Result<ServiceResponse, AuthError> {
        post_json(REGISTER_ENDPOINT, input, csrf_token).await
    }
}

/// `POST` a JSON body and decode the reply, whatever its status.
///
/// Transport failures and undecodable bodies both come back as
/// [`AuthError::Unexpected`]; non-2xx statuses are *not* errors here —
/// the controller interprets the payload.
async fn post_json<T: Serialize + ?Sized>(
    endpoint: &str,
    body: &T,
    csrf_token: &str,
) -> Result<ServiceResponse, AuthError> {
    #[cfg(feature = "hydrate")]
    {
        let response = gloo_net::http::Request::post(endpoint)
            .header(CSRF_HEADER, csrf_token)
            .credentials(web_sys::RequestCredentials::Include)
            .json(body)
            .map_err(|e| AuthError::Unexpected(e.to_string()))?
            .send()
            .await
            .map_err(|e| AuthError::Unexpected(e.to_string()))?;

        let ok = response.ok();
        let body = response
            .json::<serde_json::Value>()
            .await
            .map_err(|e| {
                leptos::logging::warn!("undecodable auth response from {endpoint}: {e}");
                AuthError::Unexpected(e.to_string())
            })?;
        Ok(ServiceResponse { ok, body })
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (endpoint, body, csrf_token);
        Err(AuthError::Unexpected("not available on server".to_owned()))
    }
}
