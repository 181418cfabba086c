use config::Config;
use serde::Deserialize;
use tracing::info;

use crate::error::Result;

pub const DEFAULT_BASE_URL: &str = "https://en.wikipedia.org";
const ENV_PREFIX: &str = "INFOBOX";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    base_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings::with_base_url(DEFAULT_BASE_URL)
    }
}

impl Settings {
    pub fn with_base_url(base_url: &str) -> Self {
        Settings {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        }
    }

    /// Defaults, then `INFOBOX_*` environment variables, then `override_base_url`.
    pub fn load(override_base_url: Option<&str>) -> Result<Self> {
        let loaded: Settings = Config::builder()
            .set_default("base_url", DEFAULT_BASE_URL)?
            .add_source(config::Environment::with_prefix(ENV_PREFIX))
            .build()?
            .try_deserialize()?;

        let base_url = override_base_url.unwrap_or(&loaded.base_url);
        let settings = Settings::with_base_url(base_url);
        info!(base_url = %settings.base_url, "Settings loaded");
        Ok(settings)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
