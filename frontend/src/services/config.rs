use anyhow::{anyhow, Context, Result};
use gloo::storage::{LocalStorage, Storage};
use shared::AppConfig;

/// localStorage key holding an optional JSON override of [`AppConfig`]
pub const CONFIG_STORAGE_KEY: &str = "timekeeping.config";

/// Read the stored override, if any. Missing keys fall back to defaults.
pub fn load_config() -> Result<Option<AppConfig>> {
    let raw = LocalStorage::raw()
        .get_item(CONFIG_STORAGE_KEY)
        .map_err(|e| anyhow!("localStorage unavailable: {:?}", e))?;

    raw.map(|json| {
        AppConfig::from_json(&json).with_context(|| format!("parsing '{}'", CONFIG_STORAGE_KEY))
    })
    .transpose()
}
