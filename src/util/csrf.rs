//! CSRF token lookup from the page the server rendered.
//!
//! The backend embeds the anti-forgery token in a hidden
//! `csrfmiddlewaretoken` input; submits read it fresh on every attempt so
//! a re-rendered page is picked up without a reload of the client.

use crate::auth::CsrfTokenProvider;

#[cfg(feature = "hydrate")]
const CSRF_INPUT_SELECTOR: &str = "[name=csrfmiddlewaretoken]";

/// [`CsrfTokenProvider`] reading the embedded hidden input.
#[derive(Clone, Copy, Debug, Default)]
pub struct DomCsrfProvider;

impl CsrfTokenProvider for DomCsrfProvider {
    fn csrf_token(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast;

            let document = web_sys::window()?.document()?;
            let input = document
                .query_selector(CSRF_INPUT_SELECTOR)
                .ok()
                .flatten()?
                .dyn_into::<web_sys::HtmlInputElement>()
                .ok()?;
            let value = input.value();
            if value.is_empty() { None } else { Some(value) }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }
}
