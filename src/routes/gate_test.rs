use access::{Role, SessionData, encode_session_data};
use axum::Router;
use axum::body::Body;
use axum::http::{StatusCode, header};
use axum::routing::get;
use tower::ServiceExt;

use super::*;

fn cookie_for(data: &SessionData) -> String {
    encode_session_data(data).expect("encode")
}

fn onboarded_client() -> SessionData {
    SessionData {
        active_role: Some(Role::Client),
        roles: vec![Role::Client],
        is_client_onboarded: true,
        is_freelancer_onboarded: false,
    }
}

// =============================================================================
// edge_redirect
// =============================================================================

#[test]
fn public_paths_pass_through() {
    assert_eq!(edge_redirect("/", None), None);
    assert_eq!(edge_redirect("/pkg/gigboard.wasm", None), None);
}

#[test]
fn anonymous_guarded_path_goes_to_login() {
    assert_eq!(edge_redirect("/client/jobs", None), Some(Destination::Login));
    assert_eq!(edge_redirect("/settings", None), Some(Destination::Login));
}

#[test]
fn anonymous_guest_path_passes() {
    assert_eq!(edge_redirect("/login", None), None);
}

#[test]
fn signed_in_guest_path_goes_home() {
    let cookie = cookie_for(&onboarded_client());
    assert_eq!(edge_redirect("/login", Some(&cookie)), Some(Destination::ClientHome));
}

#[test]
fn matching_role_passes() {
    let cookie = cookie_for(&onboarded_client());
    assert_eq!(edge_redirect("/client/profile", Some(&cookie)), None);
}

#[test]
fn mismatched_role_goes_home() {
    let cookie = cookie_for(&onboarded_client());
    assert_eq!(edge_redirect("/admin", Some(&cookie)), Some(Destination::ClientHome));
}

#[test]
fn roleless_cookie_goes_to_role_selection() {
    let cookie = cookie_for(&SessionData::default());
    assert_eq!(edge_redirect("/freelancer/profile", Some(&cookie)), Some(Destination::RoleSelection));
    assert_eq!(edge_redirect("/onboarding/role", Some(&cookie)), None);
}

#[test]
fn block_notice_only_requires_sign_in() {
    let cookie = cookie_for(&onboarded_client());
    assert_eq!(edge_redirect("/client/blocked", Some(&cookie)), None);
    assert_eq!(edge_redirect("/client/blocked", None), Some(Destination::Login));
}

#[test]
fn malformed_cookie_counts_as_signed_out() {
    assert_eq!(edge_redirect("/client", Some("%7Bnope")), Some(Destination::Login));
    assert_eq!(edge_redirect("/client", Some("")), Some(Destination::Login));
    assert_eq!(edge_redirect("/login", Some("garbage")), None);
}

#[test]
fn block_notice_categories_degrade_to_authenticated() {
    assert_eq!(edge_category(RouteCategory::ClientBlocked), RouteCategory::Authenticated);
    assert_eq!(edge_category(RouteCategory::FreelancerBlocked), RouteCategory::Authenticated);
    assert_eq!(edge_category(RouteCategory::AdminAccess), RouteCategory::AdminAccess);
}

#[test]
fn cookie_without_active_role_may_stay_on_login() {
    let data = SessionData { roles: vec![Role::Client], ..SessionData::default() };
    let cookie = cookie_for(&data);
    assert_eq!(edge_redirect("/login", Some(&cookie)), None);
    assert_eq!(edge_redirect("/login/", Some(&cookie)), None);
    assert_eq!(edge_redirect("/client", Some(&cookie)), Some(Destination::Login));
}

#[test]
fn cookie_with_unknown_role_may_stay_on_login() {
    let cookie = r#"{"activeRole":"moderator","roles":["moderator"]}"#;
    assert_eq!(edge_redirect("/login", Some(cookie)), None);
}

// =============================================================================
// gate middleware
// =============================================================================

fn gated_router() -> Router {
    Router::new()
        .route("/client", get(|| async { "client home" }))
        .route("/login", get(|| async { "login" }))
        .layer(axum::middleware::from_fn(gate))
}

#[tokio::test]
async fn middleware_redirects_anonymous_request() {
    let request = axum::http::Request::builder().uri("/client").body(Body::empty()).expect("request");
    let response = gated_router().oneshot(request).await.expect("response");
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.headers().get(header::LOCATION).and_then(|v| v.to_str().ok()), Some("/login"));
}

#[tokio::test]
async fn middleware_passes_allowed_request() {
    let cookie = format!("{SESSION_COOKIE_NAME}={}", cookie_for(&onboarded_client()));
    let request = axum::http::Request::builder()
        .uri("/client")
        .header(header::COOKIE, cookie)
        .body(Body::empty())
        .expect("request");
    let response = gated_router().oneshot(request).await.expect("response");
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn middleware_sends_signed_in_user_away_from_login() {
    let cookie = format!("{SESSION_COOKIE_NAME}={}", cookie_for(&onboarded_client()));
    let request = axum::http::Request::builder()
        .uri("/login")
        .header(header::COOKIE, cookie)
        .body(Body::empty())
        .expect("request");
    let response = gated_router().oneshot(request).await.expect("response");
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.headers().get(header::LOCATION).and_then(|v| v.to_str().ok()), Some("/client"));
}

#[tokio::test]
async fn middleware_serves_login_to_cookie_without_active_role() {
    let data = SessionData { roles: vec![Role::Client], ..SessionData::default() };
    let cookie = format!("{SESSION_COOKIE_NAME}={}", cookie_for(&data));
    let request = axum::http::Request::builder()
        .uri("/login")
        .header(header::COOKIE, cookie)
        .body(Body::empty())
        .expect("request");
    let response = gated_router().oneshot(request).await.expect("response");
    assert_eq!(response.status(), StatusCode::OK);
}
