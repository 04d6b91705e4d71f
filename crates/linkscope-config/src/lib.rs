#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]

//! Explicit client configuration supplied at startup.
//!
//! Layout: `model.rs` (the [`ClientConfig`] value and its builders),
//! `defaults.rs` (default values and lookup keys), `validate.rs`
//! (field validation and parsing), `error.rs` ([`ConfigError`]).

pub mod defaults;
pub mod error;
pub mod model;
pub mod validate;

pub use error::{ConfigError, ConfigResult};
pub use model::ClientConfig;
