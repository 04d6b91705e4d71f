//! Connection settings persisted in local storage.

use crate::core::logic::storage_key;
use gloo::console;
use gloo::storage::{LocalStorage, Storage};
use linkscope_config::{ClientConfig, ConfigResult};

/// Build the client configuration from stored overrides.
///
/// Invalid overrides are reported on the console and replaced by defaults.
pub(crate) fn load_config() -> ConfigResult<ClientConfig> {
    ClientConfig::from_lookup(read_override).or_else(|err| {
        console::warn!("ignoring stored connection settings", err.to_string());
        ClientConfig::from_lookup(|_| None)
    })
}

fn read_override(config_key: &str) -> Option<String> {
    let key = storage_key(config_key)?;
    LocalStorage::get::<String>(key).ok()
}
