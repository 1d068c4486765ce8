use std::cell::{Cell, RefCell};
use std::rc::Rc;

use futures::executor::block_on;
use serde_json::json;

use super::*;
use crate::auth::error::ValidationError;

// =============================================================
// Test doubles
// =============================================================

/// Backend double: replays a canned reply and records how it was called,
/// including whether `busy` was held true at call time.
struct ProbeService {
    state: SharedAuthState,
    reply: Result<ServiceResponse, AuthError>,
    login_calls: Rc<Cell<usize>>,
    register_calls: Rc<Cell<usize>>,
    busy_during_call: Rc<Cell<Option<bool>>>,
}

impl ProbeService {
    fn record(&self, calls: &Cell<usize>) -> Result<ServiceResponse, AuthError> {
        calls.set(calls.get() + 1);
        self.busy_during_call.set(Some(self.state.borrow().busy));
        self.reply.clone()
    }
}

impl AuthService for ProbeService {
    async fn login(
        &self,
        _input: &LoginInput,
        _csrf_token: &str,
    ) -> Result<ServiceResponse, AuthError> {
        self.record(&self.login_calls)
    }

    async fn register(
        &self,
        _input: &RegistrationInput,
        _csrf_token: &str,
    ) -> Result<ServiceResponse, AuthError> {
        self.record(&self.register_calls)
    }
}

struct FixedCsrf(Option<&'static str>);

impl CsrfTokenProvider for FixedCsrf {
    fn csrf_token(&self) -> Option<String> {
        self.0.map(str::to_owned)
    }
}

#[derive(Clone, Default)]
struct RecordingStore {
    saved: Rc<RefCell<Vec<String>>>,
}

impl CredentialStore for RecordingStore {
    fn save(&self, token: &AuthToken) {
        self.saved.borrow_mut().push(token.as_str().to_owned());
    }
}

#[derive(Clone, Default)]
struct RecordingNavigator {
    visits: Rc<Cell<usize>>,
}

impl Navigator for RecordingNavigator {
    fn go_home(&self) {
        self.visits.set(self.visits.get() + 1);
    }
}

/// A controller over recording doubles, plus the handles to inspect them.
struct Harness {
    controller:
        AuthFormController<ProbeService, FixedCsrf, RecordingStore, RecordingNavigator>,
    state: SharedAuthState,
    login_calls: Rc<Cell<usize>>,
    register_calls: Rc<Cell<usize>>,
    busy_during_call: Rc<Cell<Option<bool>>>,
    saved: Rc<RefCell<Vec<String>>>,
    visits: Rc<Cell<usize>>,
    changes: Rc<Cell<usize>>,
}

fn harness(reply: Result<ServiceResponse, AuthError>) -> Harness {
    harness_with_csrf(reply, Some("csrf-token"))
}

fn harness_with_csrf(
    reply: Result<ServiceResponse, AuthError>,
    csrf: Option<&'static str>,
) -> Harness {
    let state: SharedAuthState = Rc::new(RefCell::new(AuthFormState::default()));
    let login_calls = Rc::new(Cell::new(0));
    let register_calls = Rc::new(Cell::new(0));
    let busy_during_call = Rc::new(Cell::new(None));
    let service = ProbeService {
        state: Rc::clone(&state),
        reply,
        login_calls: Rc::clone(&login_calls),
        register_calls: Rc::clone(&register_calls),
        busy_during_call: Rc::clone(&busy_during_call),
    };
    let store = RecordingStore::default();
    let navigator = RecordingNavigator::default();
    let changes = Rc::new(Cell::new(0));
    let on_change = {
        let changes = Rc::clone(&changes);
        move || changes.set(changes.get() + 1)
    };
    Harness {
        saved: Rc::clone(&store.saved),
        visits: Rc::clone(&navigator.visits),
        controller: AuthFormController::new(
            service,
            FixedCsrf(csrf),
            store,
            navigator,
            Rc::clone(&state),
            on_change,
        ),
        state,
        login_calls,
        register_calls,
        busy_during_call,
        changes,
    }
}

fn fill_login(h: &Harness) {
    h.controller.edit_login(|input| {
        input.login = "ansel".to_owned();
        input.password = "hunter42".to_owned();
    });
}

fn fill_registration(h: &Harness) {
    h.controller.edit_registration(|input| {
        input.email = "ansel@example.com".to_owned();
        input.username = "ansel".to_owned();
        input.password = "abcdefg1".to_owned();
        input.confirm_password = "abcdefg1".to_owned();
    });
}

fn token_reply(token: &str) -> Result<ServiceResponse, AuthError> {
    Ok(ServiceResponse::success(json!({ "token": token })))
}

// =============================================================
// Validation short-circuits (no network)
// =============================================================

#[test]
fn login_with_empty_field_never_calls_service() {
    let h = harness(token_reply("T"));
    h.controller.edit_login(|input| input.login = "ansel".to_owned());

    let result = block_on(h.controller.submit_login());

    assert_eq!(
        result,
        Err(AuthError::Validation(ValidationError::MissingFields))
    );
    assert_eq!(h.login_calls.get(), 0);
    assert_eq!(
        h.state.borrow().error_message.as_deref(),
        Some("Please fill in all required fields")
    );
    assert!(!h.state.borrow().busy);
}

#[test]
fn register_with_mismatched_passwords_never_calls_service() {
    let h = harness(token_reply("T"));
    fill_registration(&h);
    h.controller
        .edit_registration(|input| input.confirm_password = "abcdefg2".to_owned());

    let result = block_on(h.controller.submit_register());

    assert_eq!(
        result,
        Err(AuthError::Validation(ValidationError::PasswordMismatch))
    );
    assert_eq!(h.register_calls.get(), 0);
    assert_eq!(
        h.state.borrow().error_message.as_deref(),
        Some("Passwords do not match")
    );
}

#[test]
fn register_with_weak_password_never_calls_service() {
    let h = harness(token_reply("T"));
    fill_registration(&h);
    h.controller.edit_registration(|input| {
        input.password = "abcdefgh".to_owned();
        input.confirm_password = "abcdefgh".to_owned();
    });

    let result = block_on(h.controller.submit_register());

    assert_eq!(
        result,
        Err(AuthError::Validation(
            ValidationError::PasswordNeedsLetterAndDigit
        ))
    );
    assert_eq!(h.register_calls.get(), 0);
}

#[test]
fn missing_csrf_token_aborts_before_network() {
    let h = harness_with_csrf(token_reply("T"), None);
    fill_login(&h);

    let result = block_on(h.controller.submit_login());

    assert_eq!(result, Err(AuthError::CsrfTokenMissing));
    assert_eq!(h.login_calls.get(), 0);
    assert_eq!(
        h.state.borrow().error_message.as_deref(),
        Some("CSRF token not found. Please refresh the page.")
    );
}

// =============================================================
// Success path
// =============================================================

#[test]
fn login_success_saves_token_once_and_navigates_once() {
    let h = harness(token_reply("T"));
    fill_login(&h);

    let result = block_on(h.controller.submit_login());

    assert_eq!(result, Ok(AuthToken::new("T")));
    assert_eq!(*h.saved.borrow(), ["T"]);
    assert_eq!(h.visits.get(), 1);
    assert_eq!(h.login_calls.get(), 1);
    let state = h.state.borrow();
    assert!(!state.busy);
    assert!(state.error_message.is_none());
}

#[test]
fn register_success_saves_token_and_navigates() {
    let h = harness(token_reply("R"));
    fill_registration(&h);

    let result = block_on(h.controller.submit_register());

    assert_eq!(result, Ok(AuthToken::new("R")));
    assert_eq!(*h.saved.borrow(), ["R"]);
    assert_eq!(h.visits.get(), 1);
    assert_eq!(h.register_calls.get(), 1);
}

// =============================================================
// Failure path
// =============================================================

#[test]
fn detail_failure_sets_error_verbatim_without_navigation() {
    let h = harness(Ok(ServiceResponse::failure(
        json!({"detail": "bad credentials"}),
    )));
    fill_login(&h);

    let result = block_on(h.controller.submit_login());

    assert_eq!(result, Err(AuthError::Service("bad credentials".to_owned())));
    assert_eq!(
        h.state.borrow().error_message.as_deref(),
        Some("bad credentials")
    );
    assert!(h.saved.borrow().is_empty());
    assert_eq!(h.visits.get(), 0);
}

#[test]
fn field_map_failure_renders_in_payload_order() {
    let h = harness(Ok(ServiceResponse::failure(json!({
        "email": ["invalid"],
        "username": ["taken", "too short"],
    }))));
    fill_registration(&h);

    let _ = block_on(h.controller.submit_register());

    assert_eq!(
        h.state.borrow().error_message.as_deref(),
        Some("email: invalid\nusername: taken, too short")
    );
}

#[test]
fn transport_failure_sets_error_and_clears_busy() {
    let h = harness(Err(AuthError::Unexpected("network down".to_owned())));
    fill_login(&h);

    let result = block_on(h.controller.submit_login());

    assert_eq!(result, Err(AuthError::Unexpected("network down".to_owned())));
    assert_eq!(h.state.borrow().error_message.as_deref(), Some("network down"));
    assert!(!h.state.borrow().busy);
}

// =============================================================
// Busy/error lifecycle
// =============================================================

#[test]
fn busy_is_true_only_while_the_call_is_in_flight() {
    let h = harness(token_reply("T"));
    fill_login(&h);

    assert!(!h.state.borrow().busy);
    let _ = block_on(h.controller.submit_login());
    assert_eq!(h.busy_during_call.get(), Some(true));
    assert!(!h.state.borrow().busy);
}

#[test]
fn busy_clears_after_a_failed_call() {
    let h = harness(Ok(ServiceResponse::failure(json!({"detail": "nope"}))));
    fill_login(&h);

    let _ = block_on(h.controller.submit_login());

    assert_eq!(h.busy_during_call.get(), Some(true));
    assert!(!h.state.borrow().busy);
}

#[test]
fn each_submit_attempt_clears_the_previous_error() {
    let h = harness(token_reply("T"));
    h.state.borrow_mut().error_message = Some("stale error".to_owned());
    fill_login(&h);

    let result = block_on(h.controller.submit_login());

    assert!(result.is_ok());
    assert!(h.state.borrow().error_message.is_none());
}

// =============================================================
// View wiring
// =============================================================

#[test]
fn tab_and_visibility_toggles_notify_the_view() {
    let h = harness(token_reply("T"));
    let before = h.changes.get();

    h.controller.select_tab(AuthTab::Register);
    h.controller.toggle_password_visibility();

    assert_eq!(h.state.borrow().active_tab, AuthTab::Register);
    assert!(h.state.borrow().password_visible);
    assert_eq!(h.changes.get(), before + 2);
}

#[test]
fn input_edits_are_silent() {
    let h = harness(token_reply("T"));
    let before = h.changes.get();

    fill_login(&h);

    assert_eq!(h.changes.get(), before);
    assert_eq!(h.state.borrow().login.login, "ansel");
}
