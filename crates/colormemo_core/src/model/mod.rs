//! Domain model for the memo application.
//!
//! # Responsibility
//! - Define the persisted memo record and the closed theme catalog.
//! - Keep model types free of storage and UI toolkit details.
//!
//! # Invariants
//! - Every memo is identified by a stable `MemoId`.
//! - The theme catalog is closed: exactly seven named themes, one default.

pub mod memo;
pub mod theme;
