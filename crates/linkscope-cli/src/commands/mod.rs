//! Command handlers.

pub(crate) mod urls;
pub(crate) mod watch;
