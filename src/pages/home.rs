//! Landing page for an authenticated session.
//!
//! The real dashboard (albums, storage stats) is server-rendered; this is
//! the client-side target of the post-login redirect.

use leptos::prelude::*;

/// Application home — where a successful login or registration lands.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <h1>"Photobooth"</h1>
            <p>"Your sessions and albums live here."</p>
            <a href="/auth" class="home-page__link">
                "Sign in or create an account"
            </a>
        </div>
    }
}
