//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (storage, cookies, history
//! events) from the auth store and guard components.

pub mod navigation;
pub mod session_cookie;
pub mod storage;
