//! Squishy Sprite - a tiny arcade toy
//!
//! Core modules:
//! - `sim`: Pure per-frame simulation (geometry, obstacles, collision, score)
//! - `renderer`: macroquad asset loading and drawing
//! - `platform`: Frame timing
//! - `settings`: Window and asset preferences

pub mod error;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::AssetError;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Target tick rate (frames per second)
    pub const TARGET_FPS: u32 = 60;

    /// Player sprite base width as a fraction of the shorter play-area side
    pub const SCALE_FACTOR: f32 = 0.1;
    /// Scale applied to an axis while it is in contact
    pub const SQUISH_FACTOR: f32 = 0.5;
    /// Player displacement per tick per held key (pixels)
    pub const PLAYER_SPEED: i32 = 5;

    /// Height of the score bar reserved at the bottom of the window
    pub const STATUS_BAR_HEIGHT: i32 = 40;

    /// Time between obstacle spawns
    pub const SPAWN_INTERVAL_MS: u64 = 5000;
    /// Lifetime of a spawned obstacle
    pub const SPAWN_DURATION_MS: u64 = 2000;
    /// Rejection-sampling budget before an obstacle falls back to the center
    pub const MAX_PLACEMENT_ATTEMPTS: u32 = 100;

    /// Points for an axis starting to squish
    pub const SQUISH_POINTS: u64 = 10;
    /// Points for a fresh contact with a Beneficial obstacle
    pub const BENEFICIAL_POINTS: u64 = 100;
}
