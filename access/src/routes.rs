//! Path-to-category route table.
//!
//! Matching is by whole path segments, so `/client` covers `/client/jobs/7`
//! but not `/clients`. The longest matching prefix wins, which lets
//! `/client/blocked` and `/admin/login` carve out of their parents.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use crate::resolve::RouteCategory;

/// Guarded path prefixes. Paths not covered here are public.
pub const ROUTE_TABLE: &[(&str, RouteCategory)] = &[
    ("/login", RouteCategory::Guest),
    ("/signup", RouteCategory::Guest),
    ("/forgot-password", RouteCategory::Guest),
    ("/reset-password", RouteCategory::Guest),
    ("/verify-otp", RouteCategory::Guest),
    ("/admin/login", RouteCategory::Guest),
    ("/onboarding/role", RouteCategory::RoleSelection),
    ("/onboarding/client", RouteCategory::ClientOnboarding),
    ("/onboarding/freelancer", RouteCategory::FreelancerOnboarding),
    ("/client/blocked", RouteCategory::ClientBlocked),
    ("/client", RouteCategory::ClientAccess),
    ("/freelancer/blocked", RouteCategory::FreelancerBlocked),
    ("/freelancer", RouteCategory::FreelancerAccess),
    ("/admin", RouteCategory::AdminAccess),
    ("/messages", RouteCategory::Authenticated),
    ("/notifications", RouteCategory::Authenticated),
    ("/settings", RouteCategory::Authenticated),
];

/// Category guarding `path`, or `None` for public pages.
///
/// Query strings, fragments and trailing slashes are ignored.
#[must_use]
pub fn classify(path: &str) -> Option<RouteCategory> {
    let path = normalize_path(path);
    ROUTE_TABLE
        .iter()
        .filter(|(prefix, _)| covers(prefix, path))
        .max_by_key(|(prefix, _)| prefix.len())
        .map(|(_, category)| *category)
}

/// `path` without its query, fragment or trailing slash; empty becomes `/`.
#[must_use]
pub fn normalize_path(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let trimmed = path[..end].trim_end_matches('/');
    if trimmed.is_empty() { "/" } else { trimmed }
}

fn covers(prefix: &str, path: &str) -> bool {
    path.strip_prefix(prefix)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
}
