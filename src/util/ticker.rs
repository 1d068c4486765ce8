//! Auto-advance timer for the auth page carousel.
//!
//! Fires the injected tick callback every five seconds while the document
//! is visible. On `visibilitychange` the interval is cancelled when the
//! page hides and re-armed when it shows again; a visible transition only
//! arms when no interval is alive, so repeated hide/show cycles can never
//! stack timers. Dropping the ticker cancels the interval and removes the
//! listener.

#[cfg(test)]
#[path = "ticker_test.rs"]
mod ticker_test;

#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::rc::Rc;

#[cfg(feature = "hydrate")]
use gloo_timers::callback::Interval;
#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast;
#[cfg(feature = "hydrate")]
use wasm_bindgen::closure::Closure;

/// Milliseconds between slide advances.
pub const SLIDE_INTERVAL_MS: u32 = 5_000;

/// Holds the live interval, if any, and decides how visibility changes
/// affect it. Generic over the interval handle so the decision is
/// testable without a browser; dropping the handle cancels the timer.
#[cfg(any(test, feature = "hydrate"))]
struct TickerSlot<T> {
    interval: Option<T>,
}

#[cfg(any(test, feature = "hydrate"))]
impl<T> TickerSlot<T> {
    fn new() -> Self {
        Self { interval: None }
    }

    fn is_armed(&self) -> bool {
        self.interval.is_some()
    }

    /// Unconditionally (re)arm, dropping any prior interval first.
    fn arm(&mut self, make: impl FnOnce() -> T) {
        self.interval = Some(make());
    }

    fn disarm(&mut self) {
        self.interval = None;
    }

    /// Apply a visibility change: hidden drops the interval, visible arms
    /// one only if none is alive.
    fn on_visibility(&mut self, hidden: bool, make: impl FnOnce() -> T) {
        if hidden {
            self.disarm();
        } else if !self.is_armed() {
            self.arm(make);
        }
    }
}

#[cfg(feature = "hydrate")]
struct TickerInner {
    slot: TickerSlot<Interval>,
    on_tick: Rc<RefCell<dyn FnMut()>>,
}

/// Repeating carousel timer bound to document visibility.
pub struct CarouselTicker {
    #[cfg(feature = "hydrate")]
    inner: Rc<RefCell<TickerInner>>,
    #[cfg(feature = "hydrate")]
    visibility: Option<Closure<dyn FnMut()>>,
}

impl CarouselTicker {
    /// Arm the timer and subscribe to visibility changes. `on_tick` is the
    /// slide-state handle: it advances the carousel each firing.
    pub fn start(on_tick: impl FnMut() + 'static) -> Self {
        #[cfg(feature = "hydrate")]
        {
            let inner = Rc::new(RefCell::new(TickerInner {
                slot: TickerSlot::new(),
                on_tick: Rc::new(RefCell::new(on_tick)),
            }));
            {
                let mut guard = inner.borrow_mut();
                let on_tick = Rc::clone(&guard.on_tick);
                guard.slot.arm(|| make_interval(&on_tick));
            }

            let visibility = {
                let inner = Rc::clone(&inner);
                Closure::wrap(Box::new(move || {
                    let hidden = web_sys::window()
                        .and_then(|w| w.document())
                        .is_some_and(|d| d.hidden());
                    let mut guard = inner.borrow_mut();
                    let on_tick = Rc::clone(&guard.on_tick);
                    guard.slot.on_visibility(hidden, || make_interval(&on_tick));
                }) as Box<dyn FnMut()>)
            };
            if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                let _ = document.add_event_listener_with_callback(
                    "visibilitychange",
                    visibility.as_ref().unchecked_ref(),
                );
            }

            Self {
                inner,
                visibility: Some(visibility),
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = on_tick;
            Self {}
        }
    }
}

impl Drop for CarouselTicker {
    fn drop(&mut self) {
        #[cfg(feature = "hydrate")]
        {
            self.inner.borrow_mut().slot.disarm();
            if let Some(callback) = self.visibility.take() {
                if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                    let _ = document.remove_event_listener_with_callback(
                        "visibilitychange",
                        callback.as_ref().unchecked_ref(),
                    );
                }
            }
        }
    }
}

#[cfg(feature = "hydrate")]
fn make_interval(on_tick: &Rc<RefCell<dyn FnMut()>>) -> Interval {
    let on_tick = Rc::clone(on_tick);
    Interval::new(SLIDE_INTERVAL_MS, move || (on_tick.borrow_mut())())
}
