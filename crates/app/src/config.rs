use shared_types::{AppConfig, FilterConfig};
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Path to the config file, relative to the working directory.
const CONFIG_PATH: &str = "config.toml";

/// Read `config.toml` into the global `OnceLock`. Only the first call has
/// effect. A missing or unparseable file falls back to the stock filter.
pub fn load_config() {
    CONFIG.get_or_init(|| match AppConfig::from_file(CONFIG_PATH) {
        Ok(config) => {
            tracing::info!(filter = ?config.filter, "loaded {CONFIG_PATH}");
            config
        }
        Err(e) => {
            tracing::warn!("{CONFIG_PATH}: {e}; using default filter settings");
            AppConfig::default()
        }
    });
}

/// Filter settings from the loaded config, or the defaults if
/// `load_config()` hasn't run.
pub fn filter_config() -> FilterConfig {
    CONFIG
        .get()
        .map(|c| c.filter.clone())
        .unwrap_or_default()
}
