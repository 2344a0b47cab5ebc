//! Page Configuration
//!
//! Read once per page load from `<script id="portal-config" type="application/json">`.
//! Every field has a default, so the tag may be absent or partial.

use log::Level;
use serde::Deserialize;

use crate::error::UiResult;

pub const CONFIG_ELEMENT_ID: &str = "portal-config";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PortalConfig {
    pub site_name: String,
    pub log_level: String,
    pub toast: ToastConfig,
    pub scroll: ScrollConfig,
    pub share: ShareConfig,
    pub view_counter: ViewCounterConfig,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            site_name: "Portal de Notícias".to_string(),
            log_level: "info".to_string(),
            toast: ToastConfig::default(),
            scroll: ScrollConfig::default(),
            share: ShareConfig::default(),
            view_counter: ViewCounterConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct ToastConfig {
    /// Time fully shown before the exit animation starts
    pub duration_ms: u32,
    pub show_delay_ms: u32,
    pub exit_ms: u32,
    pub max_visible: usize,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            duration_ms: 3500,
            show_delay_ms: 100,
            exit_ms: 300,
            max_visible: 5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    /// Distance from the page bottom that triggers the next load
    pub threshold_px: f64,
    pub load_delay_ms: u32,
    pub back_to_top_px: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            threshold_px: 1000.0,
            load_delay_ms: 1000,
            back_to_top_px: 300.0,
        }
    }
}

/// Last share tier target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShareFallback {
    /// Open the article itself
    #[default]
    OpenUrl,
    /// Open a Twitter intent prefilled with title and url
    TweetIntent,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct ShareConfig {
    pub fallback: ShareFallback,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct ViewCounterConfig {
    pub interval_ms: u32,
}

impl Default for ViewCounterConfig {
    fn default() -> Self {
        Self { interval_ms: 5000 }
    }
}

impl PortalConfig {
    pub fn from_json(json: &str) -> UiResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// `log_level` as a [`Level`]; unknown names fall back to `Info`
    pub fn log_level(&self) -> Level {
        self.log_level.trim().parse().unwrap_or(Level::Info)
    }

    /// Load from the page; a missing or empty tag gives defaults
    pub fn load() -> UiResult<Self> {
        let text = leptos_page_events::query_one(&format!("#{}", CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content())
            .unwrap_or_default();
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        Self::from_json(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::UiError;

    #[test]
    fn test_empty_object_gives_defaults() {
        let config = PortalConfig::from_json("{}").unwrap();
        assert_eq!(config, PortalConfig::default());
    }

    #[test]
    fn test_partial_sections_keep_other_defaults() {
        let config = PortalConfig::from_json(
            r#"{"toast": {"duration_ms": 3000}, "share": {"fallback": "tweet_intent"}, "log_level": "debug"}"#,
        )
        .unwrap();
        assert_eq!(config.toast.duration_ms, 3000);
        assert_eq!(config.toast.exit_ms, 300);
        assert_eq!(config.share.fallback, ShareFallback::TweetIntent);
        assert_eq!(config.scroll.threshold_px, 1000.0);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_log_level_parsing() {
        let level = |name: &str| PortalConfig {
            log_level: name.to_string(),
            ..PortalConfig::default()
        }
        .log_level();
        assert_eq!(PortalConfig::default().log_level(), Level::Info);
        assert_eq!(level("debug"), Level::Debug);
        assert_eq!(level(" WARN "), Level::Warn);
        assert_eq!(level("loud"), Level::Info);
    }

    #[test]
    fn test_malformed_json_is_config_error() {
        let err = PortalConfig::from_json("{toast:").unwrap_err();
        assert!(matches!(err, UiError::Config(_)));
    }
}
