#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

/// Which form the auth page is currently showing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthTab {
    #[default]
    Login,
    Register,
}

/// Login form input. Serialized as-is as the login request body, so field
/// names match the backend serializer (`login` accepts username or email).
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct LoginInput {
    pub login: String,
    pub password: String,
    pub remember: bool,
}

/// Registration form input. Serialized as-is as the register request body.
///
/// Only `email`, `username`, `password`, and `confirm_password` are
/// required; the rest are posted as given (possibly empty).
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct RegistrationInput {
    pub email: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
    pub confirm_password: String,
    pub phone: String,
    pub bio: String,
}

/// Transient state of the auth page: the two input records plus the
/// presentational flags the forms render from.
///
/// Owned by the auth page and shared with the [`AuthFormController`] via an
/// `Rc<RefCell<_>>` handle; never persisted.
///
/// Invariants maintained by the controller: `busy` is true only strictly
/// between the start and end of an in-flight submit call, and
/// `error_message` is cleared at the start of every submit attempt.
///
/// [`AuthFormController`]: crate::auth::AuthFormController
#[derive(Clone, Debug, Default)]
pub struct AuthFormState {
    pub active_tab: AuthTab,
    pub busy: bool,
    pub error_message: Option<String>,
    pub password_visible: bool,
    pub login: LoginInput,
    pub register: RegistrationInput,
}
