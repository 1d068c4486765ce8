//! The auth form controller: validates input, drives the two backend
//! calls, and keeps [`AuthFormState`] honest while a submit is in flight.
//!
//! All collaborators are injected at construction; the page layer hands
//! the controller a shared state handle and an `on_change` callback and
//! renders from its own mirror signals. Submit operations return
//! `Result` — errors never propagate as panics, they are rendered into
//! `error_message` at this boundary.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;

use super::error::AuthError;
use super::{
    AuthService, AuthToken, CredentialStore, CsrfTokenProvider, Navigator, response, validate,
};
use crate::net::types::ServiceResponse;
use crate::state::auth::{AuthFormState, AuthTab, LoginInput, RegistrationInput};

/// Shared handle to the auth page's state record. The client runs on the
/// browser's single thread, so plain `Rc<RefCell<_>>` sharing suffices.
pub type SharedAuthState = Rc<RefCell<AuthFormState>>;

/// Controller for the login/registration forms.
pub struct AuthFormController<S, P, C, N> {
    service: S,
    csrf: P,
    credentials: C,
    navigator: N,
    state: SharedAuthState,
    on_change: Box<dyn Fn()>,
}

impl<S, P, C, N> AuthFormController<S, P, C, N>
where
    S: AuthService,
    P: CsrfTokenProvider,
    C: CredentialStore,
    N: Navigator,
{
    /// Build a controller over an existing state handle. `on_change` runs
    /// after every observable state mutation so the view can refresh.
    pub fn new(
        service: S,
        csrf: P,
        credentials: C,
        navigator: N,
        state: SharedAuthState,
        on_change: impl Fn() + 'static,
    ) -> Self {
        Self {
            service,
            csrf,
            credentials,
            navigator,
            state,
            on_change: Box::new(on_change),
        }
    }

    /// Switch between the login and registration forms.
    pub fn select_tab(&self, tab: AuthTab) {
        self.update(|s| s.active_tab = tab);
    }

    /// Toggle whether password fields render their text.
    pub fn toggle_password_visibility(&self) {
        self.update(|s| s.password_visible = !s.password_visible);
    }

    /// Mutate the login input record. Edits are silent: the inputs are
    /// uncontrolled in the DOM, so there is nothing to re-render.
    pub fn edit_login(&self, edit: impl FnOnce(&mut LoginInput)) {
        edit(&mut self.state.borrow_mut().login);
    }

    /// Mutate the registration input record. Silent, as with `edit_login`.
    pub fn edit_registration(&self, edit: impl FnOnce(&mut RegistrationInput)) {
        edit(&mut self.state.borrow_mut().register);
    }

    /// Submit the login form.
    ///
    /// Clears the error message, validates locally, resolves the CSRF
    /// token, and calls the backend with `busy` held true for exactly the
    /// duration of the call. On success the token is stored and the
    /// browser is sent home; on failure `error_message` is set and the
    /// form is left ready for another attempt.
    ///
    /// # Errors
    ///
    /// Any [`AuthError`]; the same error is also rendered into
    /// `error_message`.
    pub async fn submit_login(&self) -> Result<AuthToken, AuthError> {
        self.update(|s| s.error_message = None);
        let input = self.state.borrow().login.clone();
        let outcome = match self.prepare(validate::login(&input).map_err(AuthError::from)) {
            Ok(csrf_token) => self.dispatch(self.service.login(&input, &csrf_token)).await,
            Err(err) => Err(err),
        };
        self.conclude(outcome)
    }

    /// Submit the registration form. Same lifecycle as [`Self::submit_login`],
    /// with the registration-specific local checks applied first.
    ///
    /// # Errors
    ///
    /// Any [`AuthError`]; the same error is also rendered into
    /// `error_message`.
    pub async fn submit_register(&self) -> Result<AuthToken, AuthError> {
        self.update(|s| s.error_message = None);
        let input = self.state.borrow().register.clone();
        let outcome = match self.prepare(validate::registration(&input).map_err(AuthError::from)) {
            Ok(csrf_token) => self.dispatch(self.service.register(&input, &csrf_token)).await,
            Err(err) => Err(err),
        };
        self.conclude(outcome)
    }

    /// Run the pre-network checks: local validation, then the CSRF token.
    fn prepare(&self, validated: Result<(), AuthError>) -> Result<String, AuthError> {
        validated?;
        self.csrf.csrf_token().ok_or(AuthError::CsrfTokenMissing)
    }

    /// Drive one backend call with `busy` held true for its duration.
    async fn dispatch(
        &self,
        call: impl Future<Output = Result<ServiceResponse, AuthError>>,
    ) -> Result<AuthToken, AuthError> {
        self.update(|s| s.busy = true);
        let reply = call.await;
        self.update(|s| s.busy = false);
        response::interpret(&reply?)
    }

    /// Apply the outcome: store + navigate on success, render the error
    /// otherwise. The token is passed through to the caller either way.
    fn conclude(&self, outcome: Result<AuthToken, AuthError>) -> Result<AuthToken, AuthError> {
        match &outcome {
            Ok(token) => {
                self.credentials.save(token);
                self.navigator.go_home();
            }
            Err(err) => self.update(|s| s.error_message = Some(err.to_string())),
        }
        outcome
    }

    fn update(&self, mutate: impl FnOnce(&mut AuthFormState)) {
        mutate(&mut self.state.borrow_mut());
        (self.on_change)();
    }
}
