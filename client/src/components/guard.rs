//! Route guard components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each guarded route subtree is wrapped in exactly one guard. [`RouteGuard`]
//! resolves the auth snapshot against its category; the thin wrappers below
//! only pin the category so route declarations read naturally.
//!
//! Rendering is pure: `Allow` renders children, anything else renders the
//! spinner. Navigation happens in a separate effect that fires once per
//! verdict transition.

use access::{RouteCategory, Verdict, resolve};
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::util::navigation::{RedirectTracker, RestoreEpoch, redirect_options};

/// Placeholder shown while the session loads or a redirect is in flight.
#[component]
pub fn GuardSpinner() -> impl IntoView {
    view! {
        <div class="guard-spinner" role="status" aria-live="polite">
            <span class="guard-spinner__dot"></span>
            <span class="visually-hidden">"Loading..."</span>
        </div>
    }
}

/// Render `children` only when the current session may see `category`.
#[component]
pub fn RouteGuard(category: RouteCategory, children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let RestoreEpoch(epoch) = expect_context::<RestoreEpoch>();
    let navigate = use_navigate();

    let verdict = Memo::new(move |_| auth.with(|state| resolve(&state.snapshot(), category)));

    // Runs on mount, on every verdict change, and on every page restore.
    Effect::new(move |prev: Option<RedirectTracker>| {
        let mut tracker = prev.unwrap_or_default();
        if let Some(dest) = tracker.observe(epoch.get(), verdict.get()) {
            navigate(dest.path(), redirect_options());
        }
        tracker
    });

    view! {
        <Show when=move || verdict.get() == Verdict::Allow fallback=|| view! { <GuardSpinner/> }>
            {children()}
        </Show>
    }
}

/// Login and signup screens: signed-in users are sent home.
#[component]
pub fn GuestGuard(children: ChildrenFn) -> impl IntoView {
    view! { <RouteGuard category=RouteCategory::Guest>{children()}</RouteGuard> }
}

/// Any signed-in user.
#[component]
pub fn AuthGuard(children: ChildrenFn) -> impl IntoView {
    view! { <RouteGuard category=RouteCategory::Authenticated>{children()}</RouteGuard> }
}

#[component]
pub fn RoleSelectionGuard(children: ChildrenFn) -> impl IntoView {
    view! { <RouteGuard category=RouteCategory::RoleSelection>{children()}</RouteGuard> }
}

#[component]
pub fn ClientOnboardingGuard(children: ChildrenFn) -> impl IntoView {
    view! { <RouteGuard category=RouteCategory::ClientOnboarding>{children()}</RouteGuard> }
}

#[component]
pub fn FreelancerOnboardingGuard(children: ChildrenFn) -> impl IntoView {
    view! { <RouteGuard category=RouteCategory::FreelancerOnboarding>{children()}</RouteGuard> }
}

#[component]
pub fn ClientGuard(children: ChildrenFn) -> impl IntoView {
    view! { <RouteGuard category=RouteCategory::ClientAccess>{children()}</RouteGuard> }
}

#[component]
pub fn FreelancerGuard(children: ChildrenFn) -> impl IntoView {
    view! { <RouteGuard category=RouteCategory::FreelancerAccess>{children()}</RouteGuard> }
}

#[component]
pub fn AdminGuard(children: ChildrenFn) -> impl IntoView {
    view! { <RouteGuard category=RouteCategory::AdminAccess>{children()}</RouteGuard> }
}

/// Block notice page; only reachable while the client role is blocked.
#[component]
pub fn ClientBlockedGuard(children: ChildrenFn) -> impl IntoView {
    view! { <RouteGuard category=RouteCategory::ClientBlocked>{children()}</RouteGuard> }
}

/// Block notice page; only reachable while the freelancer role is blocked.
#[component]
pub fn FreelancerBlockedGuard(children: ChildrenFn) -> impl IntoView {
    view! { <RouteGuard category=RouteCategory::FreelancerBlocked>{children()}</RouteGuard> }
}
