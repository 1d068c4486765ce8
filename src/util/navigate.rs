//! Post-login navigation.
//!
//! A successful submit leaves the auth page for the application home with
//! a full browser navigation, so the server re-renders the page for the
//! now-authenticated session.

use crate::auth::Navigator;

/// [`Navigator`] that drives `window.location`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn go_home(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href("/");
            }
        }
    }
}
