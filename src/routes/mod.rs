//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module stitches the health check, Leptos SSR rendering, and static
//! WASM/CSS assets under a single Axum router, with the edge gate in front
//! of everything when enabled.

pub mod gate;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::middleware;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

/// Leptos SSR frontend plus static assets and health check.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `Cargo.toml` `[package.metadata.leptos]` section).
pub fn leptos_app(config: &ServerConfig) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    let router = Router::new()
        .route("/healthz", get(healthz))
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")));

    Ok(with_layers(router, config))
}

/// Wrap `router` in the edge gate (if enabled), compression, and tracing.
pub(crate) fn with_layers(router: Router, config: &ServerConfig) -> Router {
    let router = if config.edge_gate {
        router.layer(middleware::from_fn(gate::gate))
    } else {
        tracing::warn!("edge gate disabled; guarded pages rely on client guards only");
        router
    };
    router
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
