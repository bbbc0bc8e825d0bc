//! Auth-session store for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `RwSignal<AuthState>` is created by `App` and provided as context.
//! Route guards only read it; the functions below are the sole writers.
//!
//! LIFECYCLE
//! =========
//! - [`init`] on app start: seed from the `localStorage` cache, mark loading,
//!   fetch the current user, then [`finish`].
//! - [`sign_in`] after login or a completed onboarding step.
//! - [`refresh_from_cache`] when the page is restored from the back/forward
//!   cache and another tab may have changed the session.
//! - [`sign_out`] tears everything down: state, cache, cookie, server session.
//!
//! Every write mirrors the user into the cache and the `session` cookie.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use access::{SessionUser, Snapshot};
use leptos::prelude::*;

use crate::util::{session_cookie, storage};

/// `localStorage` key holding the cached user record.
pub const USER_CACHE_KEY: &str = "gigboard.auth.user";

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<SessionUser>,
    pub loading: bool,
}

impl AuthState {
    /// State before the first fetch has answered.
    #[must_use]
    pub fn booting(cached: Option<SessionUser>) -> Self {
        Self { user: cached, loading: true }
    }

    /// Copy out the resolver's view of this state.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot { user: self.user.clone(), is_loading: self.loading }
    }

    /// Settle a fetch. `None` covers both "signed out" and "fetch failed".
    pub fn finish_loading(&mut self, user: Option<SessionUser>) {
        self.user = user;
        self.loading = false;
    }

    pub fn sign_in(&mut self, user: SessionUser) {
        self.user = Some(user);
        self.loading = false;
    }

    pub fn sign_out(&mut self) {
        self.user = None;
        self.loading = false;
    }

    /// Adopt a cached user after a page restore, keeping the loading flag.
    ///
    /// Returns whether anything changed.
    pub fn adopt_cached(&mut self, cached: Option<SessionUser>) -> bool {
        if self.user == cached {
            return false;
        }
        self.user = cached;
        true
    }
}

/// Start the store: seed from cache and fetch the current user.
pub fn init(auth: RwSignal<AuthState>) {
    auth.set(AuthState::booting(storage::load_json(USER_CACHE_KEY)));

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let user = crate::net::api::fetch_current_user().await;
        finish(auth, user);
    });
}

/// Apply the result of a current-user fetch.
pub fn finish(auth: RwSignal<AuthState>, user: Option<SessionUser>) {
    persist(user.as_ref());
    auth.update(|state| state.finish_loading(user));
}

/// Store a freshly authenticated or updated user.
pub fn sign_in(auth: RwSignal<AuthState>, user: SessionUser) {
    persist(Some(&user));
    auth.update(|state| state.sign_in(user));
}

/// Re-read the cached user after a back/forward cache restore.
pub fn refresh_from_cache(auth: RwSignal<AuthState>) {
    let cached = storage::load_json::<SessionUser>(USER_CACHE_KEY);
    let changed = auth.try_update(|state| state.adopt_cached(cached)).unwrap_or(false);
    #[cfg(feature = "hydrate")]
    {
        if changed {
            log::debug!("auth snapshot refreshed from cache after page restore");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = changed;
    }
}

/// Tear down the session locally and on the server.
pub fn sign_out(auth: RwSignal<AuthState>) {
    persist(None);
    auth.update(AuthState::sign_out);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(crate::net::api::logout());
}

fn persist(user: Option<&SessionUser>) {
    match user {
        Some(user) => storage::save_json(USER_CACHE_KEY, user),
        None => storage::remove(USER_CACHE_KEY),
    }
    session_cookie::sync(user);
}
