//! Navigation effect layer for route guards.
//!
//! DESIGN
//! ======
//! Guards render from a pure [`Verdict`]; this module decides when a verdict
//! turns into an actual navigation. A redirect is issued once per verdict
//! transition, so re-renders with an unchanged verdict stay quiet. A page
//! restore (`popstate`, or `pageshow` from the back/forward cache) starts a
//! new epoch, and the guard behaves as if freshly mounted.

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

use access::{Destination, Verdict};
use leptos::prelude::*;
use leptos_router::NavigateOptions;

/// Counter bumped on every page restore event, provided as context.
#[derive(Clone, Copy, Debug)]
pub struct RestoreEpoch(pub RwSignal<u64>);

/// Remembers the last verdict a guard acted on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RedirectTracker {
    last: Option<Verdict>,
    epoch: u64,
}

impl RedirectTracker {
    /// Record `verdict` and return the destination to navigate to, if any.
    ///
    /// Only a change of verdict (or a new restore epoch) can yield a
    /// destination.
    pub fn observe(&mut self, epoch: u64, verdict: Verdict) -> Option<Destination> {
        if epoch != self.epoch {
            self.reset();
            self.epoch = epoch;
        }
        if self.last == Some(verdict) {
            return None;
        }
        self.last = Some(verdict);
        verdict.destination()
    }

    /// Forget the previous verdict.
    pub fn reset(&mut self) {
        self.last = None;
    }
}

/// Options for guard redirects: replace the current entry, add no history.
#[must_use]
pub fn redirect_options() -> NavigateOptions {
    NavigateOptions { replace: true, ..NavigateOptions::default() }
}

/// Listen for history restores and bump `epoch` on each one.
///
/// `on_restore` runs first for `pageshow` events served from the
/// back/forward cache, so the store can reload its snapshot before guards
/// re-resolve. Listeners live for the lifetime of the page.
pub fn install_restore_listeners<F>(epoch: RestoreEpoch, on_restore: F)
where
    F: Fn() + 'static,
{
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        let Some(window) = web_sys::window() else {
            return;
        };
        let RestoreEpoch(counter) = epoch;

        let on_popstate = Closure::<dyn Fn(web_sys::Event)>::new(move |_ev: web_sys::Event| {
            counter.update(|n| *n += 1);
        });
        let on_pageshow = Closure::<dyn Fn(web_sys::Event)>::new(move |ev: web_sys::Event| {
            let persisted = ev
                .dyn_ref::<web_sys::PageTransitionEvent>()
                .is_some_and(web_sys::PageTransitionEvent::persisted);
            if persisted {
                on_restore();
                counter.update(|n| *n += 1);
            }
        });

        let _ = window.add_event_listener_with_callback("popstate", on_popstate.as_ref().unchecked_ref());
        let _ = window.add_event_listener_with_callback("pageshow", on_pageshow.as_ref().unchecked_ref());
        on_popstate.forget();
        on_pageshow.forget();
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (epoch, on_restore);
    }
}
