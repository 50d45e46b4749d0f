//! Window and presentation preferences
//!
//! Gameplay tuning lives in `consts`; these only affect how the game is shown.

use serde::{Deserialize, Serialize};

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Window ===
    pub window_title: String,
    /// Initial window width (pixels)
    pub window_width: i32,
    /// Initial window height (pixels), status bar included
    pub window_height: i32,

    // === Assets ===
    pub player_image: String,
    pub beneficial_image: String,
    pub hazard_image: String,

    // === Colors (RGB) ===
    pub background: [u8; 3],
    pub status_bar: [u8; 3],
    pub status_text: [u8; 3],

    // === HUD ===
    /// Show FPS counter in the status bar
    pub show_fps: bool,
    /// Tint obstacles the player is currently touching
    pub highlight_contacts: bool,

    /// Fixed RNG seed; a time-based seed is used when unset
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_title: "Squishy Sprite".to_string(),
            window_width: 800,
            window_height: 600,

            player_image: "assets/player.png".to_string(),
            beneficial_image: "assets/beneficial.png".to_string(),
            hazard_image: "assets/hazard.png".to_string(),

            background: [30, 30, 30],
            status_bar: [15, 15, 15],
            status_text: [235, 235, 235],

            show_fps: false,
            highlight_contacts: true,

            seed: None,
        }
    }
}

impl Settings {
    /// Seed for this run, falling back to `fallback` when none is pinned
    pub fn effective_seed(&self, fallback: u64) -> u64 {
        self.seed.unwrap_or(fallback)
    }

    /// One-line JSON form for startup logging
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|e| format!("<unserializable settings: {e}>"))
    }
}
