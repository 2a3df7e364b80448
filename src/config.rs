//! Page contract and timing configuration.
//!
//! Every field has a default matching the stock page markup, so a page that
//! embeds no configuration gets the standard behavior. A page may override
//! any subset through an inline JSON block:
//!
//! ```html
//! <script type="application/json" id="viewsync-config">
//!   { "badge": { "interval_ms": 60000 } }
//! </script>
//! ```

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

use serde::Deserialize;

use crate::error::ViewError;

pub const CONFIG_ELEMENT_ID: &str = "viewsync-config";

pub const DEFAULT_THEME_STORAGE_KEY: &str = "theme";
pub const DEFAULT_THEME_ATTRIBUTE: &str = "data-bs-theme";
pub const DEFAULT_TOGGLE_ID: &str = "theme-toggle";
pub const DEFAULT_TRANSITION_CLASS: &str = "theme-transition";
pub const DEFAULT_TRANSITION_MS: u64 = 300;

pub const DEFAULT_NAVBAR_SELECTOR: &str = ".navbar";
pub const DEFAULT_SCROLLED_CLASS: &str = "navbar-scroll";
pub const DEFAULT_SCROLL_THRESHOLD_PX: f64 = 100.0;
pub const DEFAULT_REVEAL_SELECTORS: [&str; 2] = [".animate_fade-in-up", ".animate_slide-up"];
pub const DEFAULT_REVEAL_RATIO: f64 = 0.1;
pub const DEFAULT_PRELOAD_CLASS: &str = "preload";

pub const DEFAULT_BADGE_ENDPOINT: &str = "/notifications/unread-count";
pub const DEFAULT_BADGE_ID: &str = "notification-badge";
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 30_000;
/// Largest delay `setTimeout`/`setInterval` honor (`i32::MAX`); longer ones fire at once.
pub const MAX_TIMER_DELAY_MS: u64 = 2_147_483_647;

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    pub theme: ThemeConfig,
    pub scroll: ScrollConfig,
    pub badge: BadgeConfig,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Preference store key holding `"light"` or `"dark"`.
    pub storage_key: String,
    /// Attribute on the root element that drives styling.
    pub attribute: String,
    pub toggle_id: String,
    /// Body class held while colors interpolate.
    pub transition_class: String,
    pub transition_ms: u64,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_THEME_STORAGE_KEY.to_owned(),
            attribute: DEFAULT_THEME_ATTRIBUTE.to_owned(),
            toggle_id: DEFAULT_TOGGLE_ID.to_owned(),
            transition_class: DEFAULT_TRANSITION_CLASS.to_owned(),
            transition_ms: DEFAULT_TRANSITION_MS,
        }
    }
}

impl ThemeConfig {
    pub fn transition(&self) -> Duration {
        Duration::from_millis(self.transition_ms)
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    pub navbar_selector: String,
    pub scrolled_class: String,
    /// Offsets strictly above this mark the navbar as scrolled.
    pub threshold_px: f64,
    /// Marker selectors for elements revealed on first visibility.
    pub reveal_selectors: Vec<String>,
    /// Minimum visible fraction that counts as visible.
    pub reveal_ratio: f64,
    /// Body class removed once the document is ready.
    pub preload_class: String,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            navbar_selector: DEFAULT_NAVBAR_SELECTOR.to_owned(),
            scrolled_class: DEFAULT_SCROLLED_CLASS.to_owned(),
            threshold_px: DEFAULT_SCROLL_THRESHOLD_PX,
            reveal_selectors: DEFAULT_REVEAL_SELECTORS.iter().map(|s| (*s).to_owned()).collect(),
            reveal_ratio: DEFAULT_REVEAL_RATIO,
            preload_class: DEFAULT_PRELOAD_CLASS.to_owned(),
        }
    }
}

impl ScrollConfig {
    /// All reveal markers joined into one `querySelectorAll` selector.
    pub fn reveal_selector_list(&self) -> String {
        self.reveal_selectors.join(", ")
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BadgeConfig {
    pub endpoint: String,
    pub badge_id: String,
    pub interval_ms: u64,
}

impl Default for BadgeConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_BADGE_ENDPOINT.to_owned(),
            badge_id: DEFAULT_BADGE_ID.to_owned(),
            interval_ms: DEFAULT_POLL_INTERVAL_MS,
        }
    }
}

impl BadgeConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

impl ViewConfig {
    /// Parse a JSON override block. Missing fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::Config`] for invalid JSON or out-of-range values.
    pub fn from_json(raw: &str) -> Result<Self, ViewError> {
        let config: Self = serde_json::from_str(raw).map_err(|e| ViewError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges and required names.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::Config`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ViewError> {
        require_non_empty("theme.storage_key", &self.theme.storage_key)?;
        require_non_empty("theme.attribute", &self.theme.attribute)?;
        require_non_empty("theme.toggle_id", &self.theme.toggle_id)?;
        require_non_empty("theme.transition_class", &self.theme.transition_class)?;
        require_non_empty("scroll.navbar_selector", &self.scroll.navbar_selector)?;
        require_non_empty("scroll.scrolled_class", &self.scroll.scrolled_class)?;
        require_non_empty("badge.endpoint", &self.badge.endpoint)?;
        require_non_empty("badge.badge_id", &self.badge.badge_id)?;

        if !self.scroll.threshold_px.is_finite() {
            return Err(ViewError::Config("scroll.threshold_px must be finite".to_owned()));
        }
        if !(0.0..=1.0).contains(&self.scroll.reveal_ratio) {
            return Err(ViewError::Config("scroll.reveal_ratio must be within 0.0..=1.0".to_owned()));
        }
        if self.scroll.reveal_selectors.iter().any(|s| s.trim().is_empty()) {
            return Err(ViewError::Config("scroll.reveal_selectors must not contain empty selectors".to_owned()));
        }
        if self.badge.interval_ms == 0 {
            return Err(ViewError::Config("badge.interval_ms must be greater than zero".to_owned()));
        }
        if self.badge.interval_ms > MAX_TIMER_DELAY_MS {
            return Err(ViewError::Config(format!("badge.interval_ms must be at most {MAX_TIMER_DELAY_MS}")));
        }
        if self.theme.transition_ms > MAX_TIMER_DELAY_MS {
            return Err(ViewError::Config(format!("theme.transition_ms must be at most {MAX_TIMER_DELAY_MS}")));
        }
        Ok(())
    }

    /// Read the inline override block from the page, falling back to defaults.
    #[cfg(feature = "hydrate")]
    pub fn from_page() -> Self {
        let raw = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());
        let Some(raw) = raw else {
            return Self::default();
        };
        match Self::from_json(&raw) {
            Ok(config) => config,
            Err(e) => {
                leptos::logging::warn!("ignoring #{CONFIG_ELEMENT_ID}: {e}");
                Self::default()
            }
        }
    }
}

fn require_non_empty(field: &str, value: &str) -> Result<(), ViewError> {
    if value.trim().is_empty() {
        return Err(ViewError::Config(format!("{field} must not be empty")));
    }
    Ok(())
}
