//! Simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Time comes in as a timestamp, never read from a clock
//! - Seeded RNG only
//! - Stable iteration order (by obstacle ID)
//! - No rendering, logging, or platform dependencies

pub mod collision;
pub mod geometry;
pub mod obstacles;
pub mod rect;
pub mod score;
pub mod state;
pub mod tick;

pub use collision::{Collider, Contact, Resolution, Side, anchored_rect, resolve_movement};
pub use geometry::{Squish, base_size, scaled_size};
pub use rect::{Axis, Rect};
pub use score::{Scoreboard, Touch};
pub use state::{GameEvent, GameState, Obstacle, ObstacleKind, Player, SpriteAspects};
pub use tick::{TickInput, tick};
