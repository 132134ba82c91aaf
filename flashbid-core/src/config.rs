//! Page-level settings loaded alongside the listing data.
use serde::{Deserialize, Serialize};

use crate::countdown::{CountdownSettings, DEFAULT_TICK_MS};
use crate::time::ZERO_DISPLAY;

/// Config file name understood by every [`crate::catalog::CatalogLoader`].
pub const PAGE_CONFIG_NAME: &str = "page";

/// Settings for the listing page. Every field falls back to its default when
/// absent from the JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Countdown refresh period in milliseconds.
    pub tick_ms: u32,
    /// Countdown text shown before the first tick.
    pub initial_display: String,
    /// Product image shown on every card.
    pub image_url: String,
    /// Badge printed in the top-left corner of every card.
    pub hot_badge: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            tick_ms: DEFAULT_TICK_MS,
            initial_display: ZERO_DISPLAY.to_string(),
            image_url: "https://source.unsplash.com/random".to_string(),
            hot_badge: "Hot Deal".to_string(),
        }
    }
}

impl PageConfig {
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    #[must_use]
    pub fn countdown_settings(&self) -> CountdownSettings {
        CountdownSettings {
            tick_ms: self.tick_ms.max(1),
            initial_display: self.initial_display.clone(),
        }
    }
}
