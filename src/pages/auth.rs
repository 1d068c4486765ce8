//! Auth page: login/registration forms plus the marketing carousel.
//!
//! The page owns the [`AuthFormState`] record and hands the controller a
//! shared handle to it. Rendering goes through mirror signals (tab, busy,
//! error, password visibility) that the controller's `on_change` callback
//! refreshes; the text inputs are uncontrolled and write through to the
//! input records on each keystroke.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::auth::AuthFormController;
use crate::net::api::GlooAuthService;
use crate::state::auth::{AuthFormState, AuthTab};
use crate::state::carousel::{CarouselState, SLIDE_COUNT};
use crate::util::credential_store::LocalStorageCredentialStore;
use crate::util::csrf::DomCsrfProvider;
use crate::util::navigate::BrowserNavigator;
use crate::util::ticker::CarouselTicker;

type PageController =
    AuthFormController<GlooAuthService, DomCsrfProvider, LocalStorageCredentialStore, BrowserNavigator>;

const SLIDES: [(&str, &str); SLIDE_COUNT] = [
    (
        "Capture the moment",
        "Run photo sessions with live capture and instant review.",
    ),
    (
        "Build composites",
        "Turn individual shots into shareable composite layouts.",
    ),
    (
        "Share your albums",
        "Give guests an access code and let them relive the session.",
    ),
];

/// Auth page with login/register tabs and an auto-advancing carousel.
#[component]
pub fn AuthPage() -> impl IntoView {
    let state = Rc::new(RefCell::new(AuthFormState::default()));

    // Mirror signals for the fields the page renders.
    let tab = RwSignal::new(AuthTab::Login);
    let busy = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let password_visible = RwSignal::new(false);
    let slides = RwSignal::new(CarouselState::default());

    let refresh = {
        let state = Rc::clone(&state);
        move || {
            let s = state.borrow();
            tab.set(s.active_tab);
            busy.set(s.busy);
            error.set(s.error_message.clone());
            password_visible.set(s.password_visible);
        }
    };

    let controller: Rc<PageController> = Rc::new(AuthFormController::new(
        GlooAuthService,
        DomCsrfProvider,
        LocalStorageCredentialStore,
        BrowserNavigator,
        Rc::clone(&state),
        refresh,
    ));
    let controller = StoredValue::new_local(controller);

    let _ticker = StoredValue::new_local(CarouselTicker::start(move || {
        slides.update(CarouselState::advance);
    }));

    let on_login_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let controller = controller.get_value();
        leptos::task::spawn_local(async move {
            let _ = controller.submit_login().await;
        });
    };
    let on_register_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let controller = controller.get_value();
        leptos::task::spawn_local(async move {
            let _ = controller.submit_register().await;
        });
    };

    let password_type = move || if password_visible.get() { "text" } else { "password" };

    let login_tab_class = move || {
        if tab.get() == AuthTab::Login {
            "auth-page__tab auth-page__tab--active"
        } else {
            "auth-page__tab"
        }
    };
    let register_tab_class = move || {
        if tab.get() == AuthTab::Register {
            "auth-page__tab auth-page__tab--active"
        } else {
            "auth-page__tab"
        }
    };

    view! {
        <div class="auth-page">
            <Carousel slides=slides/>

            <div class="auth-page__panel">
                <div class="auth-page__tabs">
                    <button
                        class=login_tab_class
                        on:click=move |_| controller.get_value().select_tab(AuthTab::Login)
                    >
                        "Sign in"
                    </button>
                    <button
                        class=register_tab_class
                        on:click=move |_| controller.get_value().select_tab(AuthTab::Register)
                    >
                        "Create account"
                    </button>
                </div>

                <Show when=move || error.get().is_some()>
                    <div class="auth-page__error">{move || error.get().unwrap_or_default()}</div>
                </Show>

                <Show when=move || tab.get() == AuthTab::Login>
                    <form class="auth-page__form" on:submit=on_login_submit>
                        <label>
                            "Username or email"
                            <input
                                type="text"
                                name="login"
                                on:input=move |ev| {
                                    controller
                                        .get_value()
                                        .edit_login(|input| input.login = event_target_value(&ev));
                                }
                            />
                        </label>
                        <label>
                            "Password"
                            <input
                                type=password_type
                                name="password"
                                on:input=move |ev| {
                                    controller
                                        .get_value()
                                        .edit_login(|input| input.password = event_target_value(&ev));
                                }
                            />
                        </label>
                        <button
                            type="button"
                            class="auth-page__show-password"
                            on:click=move |_| controller.get_value().toggle_password_visibility()
                        >
                            {move || if password_visible.get() { "Hide password" } else { "Show password" }}
                        </button>
                        <label class="auth-page__remember">
                            <input
                                type="checkbox"
                                name="remember"
                                on:change=move |ev| {
                                    controller
                                        .get_value()
                                        .edit_login(|input| input.remember = event_target_checked(&ev));
                                }
                            />
                            "Remember me"
                        </label>
                        <button type="submit" class="btn btn--primary" disabled=move || busy.get()>
                            {move || if busy.get() { "Signing in..." } else { "Sign in" }}
                        </button>
                    </form>
                </Show>

                <Show when=move || tab.get() == AuthTab::Register>
                    <form class="auth-page__form" on:submit=on_register_submit>
                        <label>
                            "Email"
                            <input
                                type="email"
                                name="email"
                                on:input=move |ev| {
                                    controller
                                        .get_value()
                                        .edit_registration(|input| input.email = event_target_value(&ev));
                                }
                            />
                        </label>
                        <label>
                            "Username"
                            <input
                                type="text"
                                name="username"
                                on:input=move |ev| {
                                    controller
                                        .get_value()
                                        .edit_registration(|input| input.username = event_target_value(&ev));
                                }
                            />
                        </label>
                        <label>
                            "First name"
                            <input
                                type="text"
                                name="first_name"
                                on:input=move |ev| {
                                    controller
                                        .get_value()
                                        .edit_registration(|input| {
                                            input.first_name = event_target_value(&ev);
                                        });
                                }
                            />
                        </label>
                        <label>
                            "Last name"
                            <input
                                type="text"
                                name="last_name"
                                on:input=move |ev| {
                                    controller
                                        .get_value()
                                        .edit_registration(|input| {
                                            input.last_name = event_target_value(&ev);
                                        });
                                }
                            />
                        </label>
                        <label>
                            "Password"
                            <input
                                type=password_type
                                name="password"
                                on:input=move |ev| {
                                    controller
                                        .get_value()
                                        .edit_registration(|input| {
                                            input.password = event_target_value(&ev);
                                        });
                                }
                            />
                        </label>
                        <label>
                            "Confirm password"
                            <input
                                type=password_type
                                name="confirm_password"
                                on:input=move |ev| {
                                    controller
                                        .get_value()
                                        .edit_registration(|input| {
                                            input.confirm_password = event_target_value(&ev);
                                        });
                                }
                            />
                        </label>
                        <label>
                            "Phone (optional)"
                            <input
                                type="tel"
                                name="phone"
                                on:input=move |ev| {
                                    controller
                                        .get_value()
                                        .edit_registration(|input| input.phone = event_target_value(&ev));
                                }
                            />
                        </label>
                        <label>
                            "Bio (optional)"
                            <textarea
                                name="bio"
                                on:input=move |ev| {
                                    controller
                                        .get_value()
                                        .edit_registration(|input| input.bio = event_target_value(&ev));
                                }
                            ></textarea>
                        </label>
                        <button type="submit" class="btn btn--primary" disabled=move || busy.get()>
                            {move || if busy.get() { "Creating account..." } else { "Create account" }}
                        </button>
                    </form>
                </Show>
            </div>
        </div>
    }
}

/// Marketing carousel: three slides plus dot navigation.
#[component]
fn Carousel(slides: RwSignal<CarouselState>) -> impl IntoView {
    view! {
        <div class="carousel">
            {SLIDES
                .iter()
                .enumerate()
                .map(|(index, (title, text))| {
                    let slide_class = move || {
                        if slides.get().slide == index {
                            "carousel__slide carousel__slide--active"
                        } else {
                            "carousel__slide"
                        }
                    };
                    view! {
                        <div class=slide_class>
                            <h2>{*title}</h2>
                            <p>{*text}</p>
                        </div>
                    }
                })
                .collect::<Vec<_>>()}
            <div class="carousel__dots">
                {(0..SLIDE_COUNT)
                    .map(|index| {
                        let dot_class = move || {
                            if slides.get().slide == index {
                                "carousel__dot carousel__dot--active"
                            } else {
                                "carousel__dot"
                            }
                        };
                        view! {
                            <button
                                class=dot_class
                                aria-label=format!("Show slide {}", index + 1)
                                on:click=move |_| slides.update(|s| s.select(index))
                            ></button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}
