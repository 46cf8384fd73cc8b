//! Worker configuration — the serving origin plus the fixed presentation
//! constants that are not derived from any payload.

use serde::Deserialize;
use std::path::Path;

/// Configuration for a notification worker instance.
///
/// Every field has a default so a bare `[worker]`-less file (or
/// [`WorkerConfig::default()`] in tests) is a complete, valid configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WorkerConfig {
    /// Origin this worker serves. Open windows are matched against it when
    /// routing a notification interaction.
    #[serde(default = "default_origin")]
    pub origin: String,

    /// Notification title used when the payload carries none.
    #[serde(default = "default_fallback_title")]
    pub fallback_title: String,

    /// Notification body used when the payload carries none.
    #[serde(default = "default_fallback_body")]
    pub fallback_body: String,

    /// Badge icon shown in the platform status area.
    #[serde(default = "default_badge")]
    pub badge: String,

    /// Vibration pattern in milliseconds (on/off/on).
    #[serde(default = "default_vibrate")]
    pub vibrate: Vec<u32>,

    /// Keep the notification on screen until the user acts on it.
    #[serde(default)]
    pub require_interaction: bool,

    /// Suppress sound and vibration on display.
    #[serde(default)]
    pub silent: bool,
}

fn default_origin() -> String {
    "http://localhost:8080".into()
}

fn default_fallback_title() -> String {
    "Beacon Notification".into()
}

fn default_fallback_body() -> String {
    "You have a new notification from Beacon".into()
}

fn default_badge() -> String {
    "/icons/Icon-192.png".into()
}

fn default_vibrate() -> Vec<u32> {
    vec![200, 100, 200]
}

impl Default for WorkerConfig {
    fn default() -> Self {
        Self {
            origin: default_origin(),
            fallback_title: default_fallback_title(),
            fallback_body: default_fallback_body(),
            badge: default_badge(),
            vibrate: default_vibrate(),
            require_interaction: false,
            silent: false,
        }
    }
}

impl WorkerConfig {
    /// Load config from a TOML file. Missing fields take their defaults.
    pub fn load(path: &Path) -> color_eyre::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| color_eyre::eyre::eyre!("failed to read {}: {e}", path.display()))?;
        let config: WorkerConfig = toml::from_str(&content)
            .map_err(|e| color_eyre::eyre::eyre!("failed to parse {}: {e}", path.display()))?;
        Ok(config)
    }
}
