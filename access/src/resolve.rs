//! Route authorization resolver.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every guarded page belongs to one [`RouteCategory`]. Guards in the UI and
//! the edge middleware on the server both call [`resolve`] with the current
//! [`Snapshot`] and act on the returned [`Verdict`]; neither re-implements any
//! branching of its own.
//!
//! ORDERING
//! ========
//! Rules are evaluated top to bottom and the first match wins:
//!
//! 1. loading snapshot -> `Pending`
//! 2. `Guest` -> home when signed in, otherwise `Allow`. A signed-in user
//!    whose home is `/login` itself stays put.
//! 3. any other category without a user -> `/login`
//! 4. `RoleSelection` -> home once a role exists
//! 5. role-specific categories with no roles -> `/onboarding/role`
//! 6. onboarding categories -> blocked page, then profile, then `Allow`
//! 7. access categories -> `Allow` only for the matching active role at its
//!    own home, otherwise home
//!
//! Blocked flags are always checked before onboarded flags.

#[cfg(test)]
#[path = "resolve_test.rs"]
mod resolve_test;

use crate::role::Role;
use crate::session::{SessionUser, Snapshot};

/// Fixed redirect targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Destination {
    Login,
    AdminHome,
    ClientHome,
    ClientBlocked,
    ClientOnboarding,
    ClientProfile,
    FreelancerProfile,
    FreelancerBlocked,
    FreelancerOnboarding,
    RoleSelection,
}

impl Destination {
    /// URL path the browser is sent to.
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::AdminHome => "/admin",
            Self::ClientHome => "/client",
            Self::ClientBlocked => "/client/blocked",
            Self::ClientOnboarding => "/onboarding/client",
            Self::ClientProfile => "/client/profile",
            Self::FreelancerProfile => "/freelancer/profile",
            Self::FreelancerBlocked => "/freelancer/blocked",
            Self::FreelancerOnboarding => "/onboarding/freelancer/0",
            Self::RoleSelection => "/onboarding/role",
        }
    }

    /// Landing page of a fully onboarded, unblocked user in `role`.
    #[must_use]
    pub fn home_of(role: Role) -> Option<Self> {
        match role {
            Role::Client => Some(Self::ClientHome),
            Role::Freelancer => Some(Self::FreelancerProfile),
            Role::Admin => Some(Self::AdminHome),
            Role::Unknown => None,
        }
    }
}

impl std::fmt::Display for Destination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}

/// Access class of a guarded route subtree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RouteCategory {
    /// Login/signup screens; only for signed-out visitors.
    Guest,
    /// Any signed-in user.
    Authenticated,
    RoleSelection,
    ClientOnboarding,
    FreelancerOnboarding,
    ClientAccess,
    FreelancerAccess,
    AdminAccess,
    /// Notice page shown to a blocked client.
    ClientBlocked,
    /// Notice page shown to a blocked freelancer.
    FreelancerBlocked,
}

impl RouteCategory {
    /// Role a category is tied to, if any.
    #[must_use]
    pub fn role(self) -> Option<Role> {
        match self {
            Self::ClientOnboarding | Self::ClientAccess | Self::ClientBlocked => Some(Role::Client),
            Self::FreelancerOnboarding | Self::FreelancerAccess | Self::FreelancerBlocked => {
                Some(Role::Freelancer)
            }
            Self::AdminAccess => Some(Role::Admin),
            Self::Guest | Self::Authenticated | Self::RoleSelection => None,
        }
    }
}

/// Outcome of resolving a snapshot against a route category.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    /// Session still loading; show a placeholder and do not navigate.
    Pending,
    Allow,
    RedirectTo(Destination),
}

impl Verdict {
    #[must_use]
    pub fn destination(self) -> Option<Destination> {
        match self {
            Self::RedirectTo(dest) => Some(dest),
            Self::Pending | Self::Allow => None,
        }
    }
}

/// Decide whether a route of `category` may render for `snapshot`.
#[must_use]
pub fn resolve(snapshot: &Snapshot, category: RouteCategory) -> Verdict {
    let verdict = decide(snapshot, category);
    tracing::debug!(?category, ?verdict, loading = snapshot.is_loading, "route resolved");
    verdict
}

/// Where a signed-in user belongs given their roles and flags.
#[must_use]
pub fn role_based_home(user: &SessionUser) -> Destination {
    if !user.has_roles() {
        return Destination::RoleSelection;
    }
    match user.active_role {
        Some(Role::Admin) => Destination::AdminHome,
        Some(Role::Client) => {
            if user.is_client_blocked {
                Destination::ClientBlocked
            } else if !user.is_client_onboarded {
                Destination::ClientOnboarding
            } else {
                Destination::ClientHome
            }
        }
        Some(Role::Freelancer) => {
            if user.is_freelancer_blocked {
                Destination::FreelancerBlocked
            } else if !user.is_freelancer_onboarded {
                Destination::FreelancerOnboarding
            } else {
                Destination::FreelancerProfile
            }
        }
        Some(Role::Unknown) | None => Destination::Login,
    }
}

fn decide(snapshot: &Snapshot, category: RouteCategory) -> Verdict {
    if snapshot.is_loading {
        return Verdict::Pending;
    }

    let Some(user) = snapshot.user.as_ref() else {
        return if category == RouteCategory::Guest {
            Verdict::Allow
        } else {
            Verdict::RedirectTo(Destination::Login)
        };
    };

    match category {
        RouteCategory::Guest => match role_based_home(user) {
            Destination::Login => Verdict::Allow,
            home => Verdict::RedirectTo(home),
        },
        RouteCategory::Authenticated => Verdict::Allow,
        RouteCategory::RoleSelection => {
            if user.has_roles() {
                Verdict::RedirectTo(role_based_home(user))
            } else {
                Verdict::Allow
            }
        }
        _ if !user.has_roles() => Verdict::RedirectTo(Destination::RoleSelection),
        RouteCategory::ClientOnboarding => onboarding(user, Role::Client),
        RouteCategory::FreelancerOnboarding => onboarding(user, Role::Freelancer),
        RouteCategory::ClientAccess => role_access(user, Role::Client),
        RouteCategory::FreelancerAccess => role_access(user, Role::Freelancer),
        RouteCategory::AdminAccess => role_access(user, Role::Admin),
        RouteCategory::ClientBlocked => blocked_notice(user, Role::Client),
        RouteCategory::FreelancerBlocked => blocked_notice(user, Role::Freelancer),
    }
}

fn onboarding(user: &SessionUser, role: Role) -> Verdict {
    let (blocked_page, profile_page) = match role {
        Role::Freelancer => (Destination::FreelancerBlocked, Destination::FreelancerProfile),
        _ => (Destination::ClientBlocked, Destination::ClientProfile),
    };
    if user.is_blocked(role) {
        Verdict::RedirectTo(blocked_page)
    } else if user.is_onboarded(role) {
        Verdict::RedirectTo(profile_page)
    } else {
        Verdict::Allow
    }
}

fn role_access(user: &SessionUser, role: Role) -> Verdict {
    let home = role_based_home(user);
    if user.active_role == Some(role) && Destination::home_of(role) == Some(home) {
        Verdict::Allow
    } else {
        Verdict::RedirectTo(home)
    }
}

fn blocked_notice(user: &SessionUser, role: Role) -> Verdict {
    if user.is_blocked(role) {
        Verdict::Allow
    } else {
        Verdict::RedirectTo(role_based_home(user))
    }
}
