//! Platform-independent UI state and helpers.

pub mod logic;
pub mod store;
