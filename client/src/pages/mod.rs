//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Page bodies are owned by feature teams; this crate only provides the
//! frame each guarded route renders into.

pub mod frame;
