//! Session snapshot: the cached user plus the store's loading flag.
//!
//! DESIGN
//! ======
//! The user record arrives from the API and from browser storage, both of
//! which may be stale or partially populated. Every field therefore has an
//! empty default and `null` is accepted wherever a value is expected, so a
//! record missing `roles` reads as "roles empty" instead of failing.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::{Deserialize, Deserializer, Serialize};

use crate::role::Role;

/// Authenticated user as seen by route guards.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SessionUser {
    pub id: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub roles: Vec<Role>,
    pub active_role: Option<Role>,
    #[serde(deserialize_with = "null_as_default")]
    pub is_client_onboarded: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub is_freelancer_onboarded: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub is_client_blocked: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub is_freelancer_blocked: bool,
}

impl SessionUser {
    /// False while the user is mid-signup and has not picked a role yet.
    #[must_use]
    pub fn has_roles(&self) -> bool {
        !self.roles.is_empty()
    }

    /// Whether an administrator has blocked the user in `role`.
    #[must_use]
    pub fn is_blocked(&self, role: Role) -> bool {
        match role {
            Role::Client => self.is_client_blocked,
            Role::Freelancer => self.is_freelancer_blocked,
            Role::Admin | Role::Unknown => false,
        }
    }

    /// Whether the onboarding flow for `role` has completed.
    ///
    /// Admins have no onboarding flow and always count as onboarded.
    #[must_use]
    pub fn is_onboarded(&self, role: Role) -> bool {
        match role {
            Role::Client => self.is_client_onboarded,
            Role::Freelancer => self.is_freelancer_onboarded,
            Role::Admin => true,
            Role::Unknown => false,
        }
    }
}

/// Point-in-time view of the auth store handed to the resolver.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Snapshot {
    /// `None` means unauthenticated.
    pub user: Option<SessionUser>,
    /// True only while the current user is being fetched.
    pub is_loading: bool,
}

impl Snapshot {
    #[must_use]
    pub fn anonymous() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn signed_in(user: SessionUser) -> Self {
        Self { user: Some(user), is_loading: false }
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
