//! Reusable UI components.

pub mod guard;
