//! # Settings
//!
//! Display thresholds and branding, shared by reference instead of through globals.
//!
//! A [`SettingsHandle`] owns the current [`Settings`] behind a `tokio::sync::watch` channel.
//! Anything that renders (the tracker, a header showing the restaurant name) holds a
//! receiver and reads the latest value when it needs it, so a change made through any handle
//! is visible on the very next read. Nothing caches old thresholds.
//!
//! ## Loading
//!
//! [`SettingsHandle::load`] layers, lowest priority first:
//!
//! 1. Built-in defaults (10 / 15 minutes, "Snack 66")
//! 2. An optional JSON file
//! 3. `ORDER_TRACKER_*` environment variables, `__` separating nested keys
//!
//! ```bash
//! ORDER_TRACKER_THRESHOLDS__YELLOW_LIMIT_MINUTES=5 cargo run
//! ```

use figment::providers::{Env, Format, Json, Serialized};
use figment::Figment;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::watch;
use tracing::{debug, info};

pub const ENV_PREFIX: &str = "ORDER_TRACKER_";

/// Minutes after which an order turns yellow, then red.
///
/// Fractional minutes are allowed. `yellow_limit_minutes >= red_limit_minutes` is accepted
/// as-is: yellow simply never shows.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThresholdSettings {
    pub yellow_limit_minutes: f64,
    pub red_limit_minutes: f64,
}

impl Default for ThresholdSettings {
    fn default() -> Self {
        Self {
            yellow_limit_minutes: 10.0,
            red_limit_minutes: 15.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Branding {
    pub restaurant_name: String,
    pub logo_path: Option<PathBuf>,
}

impl Default for Branding {
    fn default() -> Self {
        Self {
            restaurant_name: "Snack 66".to_string(),
            logo_path: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub thresholds: ThresholdSettings,
    pub branding: Branding,
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to load settings: {0}")]
    Load(#[from] figment::Error),
    #[error("Failed to encode settings: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("Failed to write settings: {0}")]
    Io(#[from] std::io::Error),
}

impl Settings {
    /// Defaults, then `path` (if it exists), then environment.
    pub fn load(path: Option<&Path>) -> Result<Self, SettingsError> {
        let mut figment = Figment::from(Serialized::defaults(Settings::default()));
        if let Some(path) = path {
            figment = figment.merge(Json::file(path));
        }
        let settings: Settings = figment.merge(Env::prefixed(ENV_PREFIX).split("__")).extract()?;
        debug!(?settings, "Settings loaded");
        Ok(settings)
    }

    pub fn save(&self, path: &Path) -> Result<(), SettingsError> {
        std::fs::write(path, serde_json::to_string_pretty(self)?)?;
        info!(path = %path.display(), "Settings saved");
        Ok(())
    }
}

/// Publisher side of the settings. Cheap to clone; all clones publish to the same channel.
#[derive(Clone)]
pub struct SettingsHandle {
    sender: Arc<watch::Sender<Settings>>,
}

impl Default for SettingsHandle {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

impl SettingsHandle {
    pub fn new(settings: Settings) -> Self {
        let (sender, _) = watch::channel(settings);
        Self {
            sender: Arc::new(sender),
        }
    }

    pub fn load(path: Option<&Path>) -> Result<Self, SettingsError> {
        Ok(Self::new(Settings::load(path)?))
    }

    pub fn subscribe(&self) -> watch::Receiver<Settings> {
        self.sender.subscribe()
    }

    pub fn current(&self) -> Settings {
        self.sender.borrow().clone()
    }

    pub fn thresholds(&self) -> ThresholdSettings {
        self.sender.borrow().thresholds
    }

    pub fn set_thresholds(&self, thresholds: ThresholdSettings) {
        info!(
            yellow = thresholds.yellow_limit_minutes,
            red = thresholds.red_limit_minutes,
            "Thresholds changed"
        );
        self.sender.send_modify(|s| s.thresholds = thresholds);
    }

    pub fn set_branding(&self, branding: Branding) {
        info!(name = %branding.restaurant_name, "Branding changed");
        self.sender.send_modify(|s| s.branding = branding);
    }

    pub fn save(&self, path: &Path) -> Result<(), SettingsError> {
        self.current().save(path)
    }
}
