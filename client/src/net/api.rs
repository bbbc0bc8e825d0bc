//! REST API helpers used by the auth store.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None` since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! A failed or unauthorized fetch yields `None`. The store treats that the
//! same as "signed out", so the worst outcome is a redirect to login.

#![allow(clippy::unused_async)]

use access::SessionUser;

/// Fetch the currently authenticated user from `/api/auth/me`.
pub async fn fetch_current_user() -> Option<SessionUser> {
    #[cfg(feature = "hydrate")]
    {
        let resp = match gloo_net::http::Request::get("/api/auth/me").send().await {
            Ok(resp) => resp,
            Err(e) => {
                log::warn!("current user fetch failed: {e}");
                return None;
            }
        };
        if !resp.ok() {
            return None;
        }
        resp.json::<SessionUser>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Log out the current user by calling `POST /api/auth/logout`.
pub async fn logout() {
    #[cfg(feature = "hydrate")]
    {
        let _ = gloo_net::http::Request::post("/api/auth/logout").send().await;
    }
}
