//! Game settings and preferences
//!
//! Web: persisted in LocalStorage. Native: read from the JSON file named by
//! `PENNEYS_GAME_SETTINGS`, if any.

use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_FRAME_MS;
use crate::sim::{Coin, Pattern, SpeedTier};

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Speed tier selected at start
    pub speed: SpeedTier,
    /// Last pattern the player chose
    pub pattern: Pattern,
    /// Fixed toss seed; random per game when unset
    pub seed: Option<u64>,
    /// Native frame cadence in milliseconds
    pub frame_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            speed: SpeedTier::Slow,
            pattern: Pattern::new(Coin::Heads, Coin::Heads, Coin::Heads),
            seed: None,
            frame_ms: DEFAULT_FRAME_MS,
        }
    }
}

impl Settings {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "penneys_game_settings";

    /// Environment variable naming the native settings file
    pub const PATH_ENV: &'static str = "PENNEYS_GAME_SETTINGS";

    /// Parse settings JSON, falling back to defaults on malformed input
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str(json) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Ignoring malformed settings: {e}");
                Self::default()
            }
        }
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                log::info!("Loaded settings from LocalStorage");
                return Self::from_json(&json);
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Settings saved");
            }
        }
    }

    /// Load settings from the file in `PENNEYS_GAME_SETTINGS`
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        let Ok(path) = std::env::var(Self::PATH_ENV) else {
            log::info!("Using default settings");
            return Self::default();
        };
        match std::fs::read_to_string(&path) {
            Ok(json) => {
                log::info!("Loaded settings from {path}");
                Self::from_json(&json)
            }
            Err(e) => {
                log::warn!("Cannot read settings file {path}: {e}");
                Self::default()
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}
