//! Edge gate: session-cookie route enforcement ahead of SSR.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser mirrors a subset of the signed-in user into the `session`
//! cookie. On full page loads this middleware resolves the requested path
//! with the same resolver the UI guards use and answers with a redirect
//! before any HTML renders. Client-side navigations never reach it.
//!
//! TRADE-OFFS
//! ==========
//! The cookie carries no blocked flags, so block notice pages are only
//! checked for "signed in" here. Enforcing them fully would bounce a blocked
//! user between `/client` and `/client/blocked`; the UI guard, which sees the
//! full user record, makes that call instead.

#[cfg(test)]
#[path = "gate_test.rs"]
mod gate_test;

use access::routes::normalize_path;
use access::{CookieError, Destination, RouteCategory, SESSION_COOKIE_NAME, Snapshot, classify, resolve};
use axum::extract::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar};

/// Axum middleware: redirect or pass the request through.
pub async fn gate(jar: CookieJar, request: Request, next: Next) -> Response {
    let cookie = jar.get(SESSION_COOKIE_NAME).map(Cookie::value);
    match edge_redirect(request.uri().path(), cookie) {
        Some(dest) => {
            tracing::debug!(path = %request.uri().path(), to = %dest, "edge gate redirect");
            Redirect::temporary(dest.path()).into_response()
        }
        None => next.run(request).await,
    }
}

/// Destination for a request to `path` carrying session cookie `cookie`, or
/// `None` to let it through. A redirect back to `path` itself is dropped.
pub(crate) fn edge_redirect(path: &str, cookie: Option<&str>) -> Option<Destination> {
    let category = edge_category(classify(path)?);
    resolve(&edge_snapshot(cookie), category)
        .destination()
        .filter(|dest| dest.path() != normalize_path(path))
}

/// Block notice categories degrade to "signed in"; see module docs.
fn edge_category(category: RouteCategory) -> RouteCategory {
    match category {
        RouteCategory::ClientBlocked | RouteCategory::FreelancerBlocked => RouteCategory::Authenticated,
        other => other,
    }
}

/// Snapshot rebuilt from the cookie. The edge never waits for a fetch, so it
/// is never loading; an unreadable cookie counts as signed out.
fn edge_snapshot(cookie: Option<&str>) -> Snapshot {
    // The jar may already have percent-decoded the value; decoding compact
    // JSON a second time leaves it unchanged.
    let Some(raw) = cookie else {
        return Snapshot::anonymous();
    };
    match access::decode_session_data(raw) {
        Ok(data) => Snapshot::signed_in(data.to_user()),
        Err(CookieError::Empty) => Snapshot::anonymous(),
        Err(e) => {
            tracing::warn!(error = %e, "malformed session cookie; treating request as signed out");
            Snapshot::anonymous()
        }
    }
}
