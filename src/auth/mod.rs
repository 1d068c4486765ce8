//! Authentication flow: validation, submit lifecycle, and the seams to the
//! backend and the browser page.
//!
//! DESIGN
//! ======
//! The controller is UI-framework agnostic. Everything it touches beyond
//! its own state record is injected at construction as a trait: the HTTP
//! backend ([`AuthService`]), the page-embedded CSRF token
//! ([`CsrfTokenProvider`]), token persistence ([`CredentialStore`]), and
//! the post-login redirect ([`Navigator`]). Browser implementations live
//! in `net::api` and `util`; tests swap in recording doubles.

pub mod controller;
pub mod error;
pub mod response;
pub mod validate;

pub use controller::AuthFormController;
pub use error::{AuthError, ValidationError};

use crate::net::types::ServiceResponse;
use crate::state::auth::{LoginInput, RegistrationInput};

/// Opaque session token issued by the backend on a successful login or
/// registration. Handed to [`CredentialStore::save`] and not retained by
/// the controller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthToken(String);

impl AuthToken {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// The backend's auth endpoints. Implementations perform the transport
/// only; response interpretation is shared controller logic.
///
/// The futures are not required to be `Send`: the client runs on the
/// browser's single thread.
#[allow(async_fn_in_trait)]
pub trait AuthService {
    /// `POST` the login input, returning the decoded response.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Unexpected`] on transport failure or an
    /// undecodable response body.
    async fn login(
        &self,
        input: &LoginInput,
        csrf_token: &str,
    ) -> Result<ServiceResponse, AuthError>;

    /// `POST` the registration input, returning the decoded response.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Unexpected`] on transport failure or an
    /// undecodable response body.
    async fn register(
        &self,
        input: &RegistrationInput,
        csrf_token: &str,
    ) -> Result<ServiceResponse, AuthError>;
}

/// Source of the anti-forgery token the backend requires on every
/// state-changing request. `None` aborts a submit before any network call.
pub trait CsrfTokenProvider {
    fn csrf_token(&self) -> Option<String>;
}

/// Durable client-side storage for the session token. Overwrites any prior
/// value; persistence failures are not surfaced to the user.
pub trait CredentialStore {
    fn save(&self, token: &AuthToken);
}

/// Post-success redirect to the application home.
pub trait Navigator {
    fn go_home(&self);
}
