//! Browser transport for the analysis backend.

pub(crate) mod api;
