//! Headless screen controllers.
//!
//! # Responsibility
//! - Model the list screen's load/render/delete cycle and the theme picker
//!   flow without any UI toolkit dependency.
//!
//! # Invariants
//! - Controllers hold transient caches only; the repository is always the
//!   source of truth.

pub mod list;
pub mod theme_picker;
