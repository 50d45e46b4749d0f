//! Game state and core simulation types
//!
//! Everything the frame loop mutates lives in one `GameState` owned by the
//! driver and passed into `tick`.

use glam::IVec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::geometry::{self, Squish, sanitize_aspect};
use super::rect::Rect;
use super::score::Scoreboard;
use crate::consts::*;

/// Obstacle categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObstacleKind {
    /// Fresh contact grants points
    Beneficial,
    /// Fresh contact resets the score
    Hazard,
}

impl ObstacleKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ObstacleKind::Beneficial => "beneficial",
            ObstacleKind::Hazard => "hazard",
        }
    }
}

/// Width/height ratios of the source images
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteAspects {
    pub player: f32,
    pub beneficial: f32,
    pub hazard: f32,
}

impl Default for SpriteAspects {
    fn default() -> Self {
        Self {
            player: 1.0,
            beneficial: 1.0,
            hazard: 1.0,
        }
    }
}

impl SpriteAspects {
    pub fn new(player: f32, beneficial: f32, hazard: f32) -> Self {
        Self {
            player: sanitize_aspect(player),
            beneficial: sanitize_aspect(beneficial),
            hazard: sanitize_aspect(hazard),
        }
    }

    pub fn for_kind(&self, kind: ObstacleKind) -> f32 {
        match kind {
            ObstacleKind::Beneficial => self.beneficial,
            ObstacleKind::Hazard => self.hazard,
        }
    }
}

/// The player sprite
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub rect: Rect,
    pub squish: Squish,
}

/// A timed obstacle
#[derive(Debug, Clone, PartialEq)]
pub struct Obstacle {
    pub id: u32,
    pub kind: ObstacleKind,
    /// Fixed at spawn; the size follows the window
    pub center: IVec2,
    pub expires_at_ms: u64,
}

impl Obstacle {
    /// Current rectangle for the given play area
    pub fn rect(&self, area: &Rect, aspects: &SpriteAspects) -> Rect {
        let size = geometry::base_size(area.w, area.h, aspects.for_kind(self.kind));
        Rect::from_center(self.center, size)
    }
}

/// Things that happened during one tick, for the driver to log or show
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    Spawned { id: u32, kind: ObstacleKind },
    /// No free spot was found; the obstacle was placed at the center
    PlacementFallback { id: u32 },
    Expired { id: u32 },
    /// At least one axis started squishing
    Squished { x: bool, y: bool },
    Collected { id: u32, points: u64 },
    ScoreReset { id: u32, lost: u64 },
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    rng: Pcg32,
    /// Window size in pixels, updated by the driver on resize
    pub viewport: IVec2,
    pub aspects: SpriteAspects,
    pub player: Player,
    /// Active obstacles (ascending id)
    pub obstacles: Vec<Obstacle>,
    pub scoreboard: Scoreboard,
    pub last_spawn_ms: u64,
    /// Events from the most recent tick
    pub events: Vec<GameEvent>,
    /// Next obstacle ID
    next_id: u32,
}

impl GameState {
    /// Create a new game with the player centered in the play area
    pub fn new(seed: u64, viewport: IVec2, aspects: SpriteAspects) -> Self {
        let area = play_area_for(viewport);
        let size = geometry::base_size(area.w, area.h, aspects.player);
        let mut rect = Rect::from_center(area.center(), size);
        rect.clamp_within(&area);

        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            viewport,
            aspects,
            player: Player {
                rect,
                squish: Squish::NONE,
            },
            obstacles: Vec::new(),
            scoreboard: Scoreboard::default(),
            last_spawn_ms: 0,
            events: Vec::new(),
            next_id: 1,
        }
    }

    /// Playable region: the window minus the status bar
    pub fn play_area(&self) -> Rect {
        play_area_for(self.viewport)
    }

    /// Apply a window resize; takes effect on the next tick
    pub fn resize(&mut self, viewport: IVec2) {
        self.viewport = viewport;
    }

    pub fn score(&self) -> u64 {
        self.scoreboard.score
    }

    /// Allocate a new obstacle ID (never reused)
    pub fn next_obstacle_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub(crate) fn rng(&mut self) -> &mut Pcg32 {
        &mut self.rng
    }
}

/// Play area for a window size
pub fn play_area_for(viewport: IVec2) -> Rect {
    Rect::new(
        0,
        0,
        viewport.x.max(0),
        (viewport.y - STATUS_BAR_HEIGHT).max(0),
    )
}
