//! Network helpers for talking to the REST API.

pub mod api;
