//! Lightweight session cookie mirrored for non-UI consumers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser auth store writes this cookie whenever the signed-in user
//! changes; the server's edge middleware reads it to redirect before any page
//! renders. The value is the JSON form of [`SessionData`], URL-escaped so it
//! is a valid cookie octet string.
//!
//! TRADE-OFFS
//! ==========
//! Blocked flags are deliberately absent: they are toggled by administrators
//! at any time and a week-long cookie would go stale. Edge redirects built
//! from this cookie are therefore advisory; the in-app guard has the final
//! word for blocked users.

#[cfg(test)]
#[path = "cookie_test.rs"]
mod cookie_test;

use serde::{Deserialize, Serialize};

use crate::role::Role;
use crate::session::SessionUser;

/// Cookie name shared by the client writer and server reader.
pub const SESSION_COOKIE_NAME: &str = "session";

/// Seven days.
pub const SESSION_COOKIE_MAX_AGE_SECS: i64 = 7 * 24 * 60 * 60;

/// Error returned by the session cookie codec.
#[derive(Debug, thiserror::Error)]
pub enum CookieError {
    #[error("cookie value is empty")]
    Empty,
    #[error("failed to serialize session data: {0}")]
    Serialize(#[source] serde_json::Error),
    #[error("failed to parse session data: {0}")]
    Deserialize(#[source] serde_json::Error),
}

/// Subset of the user record carried by the cookie.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SessionData {
    pub active_role: Option<Role>,
    pub roles: Vec<Role>,
    pub is_freelancer_onboarded: bool,
    pub is_client_onboarded: bool,
}

impl SessionData {
    /// Rebuild a user good enough for edge route resolution.
    ///
    /// Blocked flags are not mirrored and come back `false`.
    #[must_use]
    pub fn to_user(&self) -> SessionUser {
        SessionUser {
            roles: self.roles.clone(),
            active_role: self.active_role,
            is_client_onboarded: self.is_client_onboarded,
            is_freelancer_onboarded: self.is_freelancer_onboarded,
            ..SessionUser::default()
        }
    }
}

/// Extract the cookie-mirrored fields from a user record.
#[must_use]
pub fn build_session_data(user: &SessionUser) -> SessionData {
    SessionData {
        active_role: user.active_role,
        roles: user.roles.clone(),
        is_freelancer_onboarded: user.is_freelancer_onboarded,
        is_client_onboarded: user.is_client_onboarded,
    }
}

/// Serialize and URL-escape session data into a cookie value.
///
/// # Errors
///
/// Returns [`CookieError::Serialize`] if JSON serialization fails.
pub fn encode_session_data(data: &SessionData) -> Result<String, CookieError> {
    let json = serde_json::to_string(data).map_err(CookieError::Serialize)?;
    Ok(form_urlencoded::byte_serialize(json.as_bytes()).collect())
}

/// Inverse of [`encode_session_data`].
///
/// # Errors
///
/// Returns [`CookieError::Empty`] for a blank value and
/// [`CookieError::Deserialize`] when the unescaped text is not session JSON.
pub fn decode_session_data(raw: &str) -> Result<SessionData, CookieError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(CookieError::Empty);
    }
    // An escaped value has no `&` or `=`, so it parses as a single bare key.
    let json: String = form_urlencoded::parse(raw.as_bytes())
        .map(|(key, _)| key)
        .next()
        .unwrap_or_default()
        .into_owned();
    serde_json::from_str(&json).map_err(CookieError::Deserialize)
}

/// `document.cookie` assignment that stores `data` for seven days.
///
/// # Errors
///
/// Propagates [`encode_session_data`] failures.
pub fn session_cookie_string(data: &SessionData) -> Result<String, CookieError> {
    let value = encode_session_data(data)?;
    Ok(format!(
        "{SESSION_COOKIE_NAME}={value}; Max-Age={SESSION_COOKIE_MAX_AGE_SECS}; Path=/; SameSite=Lax"
    ))
}

/// `document.cookie` assignment that deletes the session cookie.
#[must_use]
pub fn expired_session_cookie_string() -> String {
    format!("{SESSION_COOKIE_NAME}=; Max-Age=0; Path=/; SameSite=Lax")
}
