//! Application service: configuration use-cases.

use anyhow::Result;

use crate::application::ports::ConfigStore;
use crate::domain::config::CivitasConfig;

/// Load configuration.
pub fn load_config(store: &impl ConfigStore) -> Result<CivitasConfig> {
    store.load()
}

/// Load, apply `key = value`, and save. Returns the updated configuration.
///
/// Nothing is written when the key or value is rejected.
pub fn set_value(store: &impl ConfigStore, key: &str, value: &str) -> Result<CivitasConfig> {
    let mut config = store.load()?;
    config.set(key, value)?;
    store.save(&config)?;
    Ok(config)
}
