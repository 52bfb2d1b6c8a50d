//! Game settings and preferences
//!
//! Persisted separately from the high score record in LocalStorage.

use serde::{Deserialize, Serialize};

/// Player preferences edited through the settings modal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Label attached to reported scores
    pub player_name: String,
    /// API key for the commentary service; empty means fallback lines only
    pub commentary_api_key: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            player_name: "Player 1".to_string(),
            commentary_api_key: String::new(),
        }
    }
}

impl Settings {
    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "gravity_flip_settings";

    /// Player label, never empty
    pub fn label(&self) -> &str {
        let trimmed = self.player_name.trim();
        if trimmed.is_empty() { "Player 1" } else { trimmed }
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(settings) = serde_json::from_str(&json) {
                    log::info!("Loaded settings from LocalStorage");
                    return settings;
                }
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

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_label() {
        let settings = Settings::default();
        assert_eq!(settings.label(), "Player 1");
        assert!(settings.commentary_api_key.is_empty());
    }

    #[test]
    fn test_blank_name_falls_back() {
        let settings = Settings {
            player_name: "   ".into(),
            ..Default::default()
        };
        assert_eq!(settings.label(), "Player 1");
    }

    #[test]
    fn test_roundtrip() {
        let settings = Settings {
            player_name: "Ada".into(),
            commentary_api_key: "k".into(),
        };
        let json = serde_json::to_string(&settings).unwrap();
        let back: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(back.player_name, "Ada");
        assert_eq!(back.commentary_api_key, "k");
    }
}
