//! Account role tags.

#[cfg(test)]
#[path = "role_test.rs"]
mod role_test;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Role context a user can operate under.
///
/// Tags the API does not know about deserialize as [`Role::Unknown`] rather
/// than failing, so a newer backend never breaks route resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Client,
    Freelancer,
    Admin,
    #[serde(other)]
    Unknown,
}

impl Role {
    /// Lowercase wire tag.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Client => "client",
            Self::Freelancer => "freelancer",
            Self::Admin => "admin",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
