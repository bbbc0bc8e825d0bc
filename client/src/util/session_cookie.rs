//! Mirror of the signed-in user into the `session` cookie.
//!
//! The server's edge middleware reads this cookie; see `access::cookie` for
//! the value format and attributes.

use access::SessionUser;

/// Write the session cookie for `user`, or delete it when signed out.
pub fn sync(user: Option<&SessionUser>) {
    let assignment = match user {
        Some(user) => match access::cookie::session_cookie_string(&access::build_session_data(user)) {
            Ok(cookie) => cookie,
            Err(e) => {
                #[cfg(feature = "hydrate")]
                log::warn!("session cookie not written: {e}");
                #[cfg(not(feature = "hydrate"))]
                let _ = e;
                return;
            }
        },
        None => access::cookie::expired_session_cookie_string(),
    };
    write_document_cookie(&assignment);
}

fn write_document_cookie(assignment: &str) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let Ok(html) = document.dyn_into::<web_sys::HtmlDocument>() else {
            return;
        };
        if html.set_cookie(assignment).is_err() {
            log::warn!("browser rejected session cookie write");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = assignment;
    }
}
