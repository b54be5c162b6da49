//! Player settings and preferences
//!
//! Persisted in LocalStorage. Settings cover input bindings and presentation
//! only; physics constants are fixed and never read from here.

use serde::{Deserialize, Serialize};

use crate::renderer::Palette;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Input ===
    /// Keys (`KeyboardEvent.key` values) that trigger a jump
    pub jump_keys: Vec<String>,
    /// Keys that start a new run
    pub start_keys: Vec<String>,
    /// Keys that return to the idle screen
    pub reset_keys: Vec<String>,

    // === HUD ===
    /// Show FPS counter
    pub show_fps: bool,

    // === Accessibility ===
    /// High contrast palette
    pub high_contrast: bool,

    /// Fixed obstacle seed (None = seed from the clock)
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            jump_keys: vec![" ".into(), "ArrowUp".into(), "w".into()],
            start_keys: vec!["Enter".into()],
            reset_keys: vec!["Escape".into()],
            show_fps: false,
            high_contrast: false,
            seed: None,
        }
    }
}

impl Settings {
    /// LocalStorage key
    #[cfg(target_arch = "wasm32")]
    const STORAGE_KEY: &'static str = "jump_runner_settings";

    pub fn is_jump_key(&self, key: &str) -> bool {
        matches_key(&self.jump_keys, key)
    }

    pub fn is_start_key(&self, key: &str) -> bool {
        matches_key(&self.start_keys, key)
    }

    pub fn is_reset_key(&self, key: &str) -> bool {
        matches_key(&self.reset_keys, key)
    }

    /// Flip the FPS counter; returns the new value
    pub fn toggle_fps(&mut self) -> bool {
        self.show_fps = !self.show_fps;
        self.show_fps
    }

    /// Colors to render with
    pub fn palette(&self) -> Palette {
        if self.high_contrast {
            Palette::HIGH_CONTRAST
        } else {
            Palette::STANDARD
        }
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(json) = storage.and_then(|s| s.get_item(Self::STORAGE_KEY).ok().flatten()) {
            match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from LocalStorage");
                    return settings;
                }
                Err(e) => log::warn!("Ignoring stored settings: {}", e),
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
            match self.to_json() {
                Ok(json) => {
                    let _ = storage.set_item(Self::STORAGE_KEY, &json);
                    log::info!("Settings saved");
                }
                Err(e) => log::warn!("Failed to serialize settings: {}", e),
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

/// Single-character keys match either case (`w` / `W` with caps lock)
fn matches_key(bindings: &[String], key: &str) -> bool {
    bindings.iter().any(|b| {
        b == key || (b.chars().count() == 1 && b.eq_ignore_ascii_case(key))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bindings() {
        let settings = Settings::default();
        assert!(settings.is_jump_key(" "));
        assert!(settings.is_jump_key("ArrowUp"));
        assert!(settings.is_jump_key("W"));
        assert!(!settings.is_jump_key("Enter"));
        assert!(settings.is_start_key("Enter"));
        assert!(settings.is_reset_key("Escape"));
        assert!(!settings.is_reset_key("escape"));
    }

    #[test]
    fn test_palette_follows_contrast() {
        let mut settings = Settings::default();
        assert_eq!(settings.palette(), Palette::STANDARD);
        settings.high_contrast = true;
        assert_eq!(settings.palette(), Palette::HIGH_CONTRAST);
    }

    #[test]
    fn test_fps_toggle_persists_through_json() {
        let mut settings = Settings::default();
        assert!(settings.toggle_fps());
        let back = Settings::from_json(&settings.to_json().unwrap()).unwrap();
        assert!(back.show_fps);
        assert!(!settings.toggle_fps());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let settings = Settings::from_json(r#"{"high_contrast": true, "seed": 7}"#).unwrap();
        assert!(settings.high_contrast);
        assert_eq!(settings.seed, Some(7));
        assert_eq!(settings.jump_keys, Settings::default().jump_keys);
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(Settings::from_json("{not json").is_err());
        assert!(Settings::from_json(r#"{"jump_keys": 3}"#).is_err());
    }

    #[test]
    fn test_json_keeps_custom_bindings() {
        let settings = Settings {
            jump_keys: vec!["k".into()],
            ..Default::default()
        };
        let back = Settings::from_json(&settings.to_json().unwrap()).unwrap();
        assert_eq!(back, settings);
        assert!(back.is_jump_key("K"));
        assert!(!back.is_jump_key(" "));
    }
}
