//! Per-frame simulation step
//!
//! Order within a tick: obstacle expiry and spawning, movement resolution,
//! scoring, then the squished rebuild of the player rect.

use glam::IVec2;

use super::collision::{self, Collider};
use super::geometry;
use super::obstacles;
use super::state::GameState;
use crate::consts::PLAYER_SPEED;

/// Directional keys held this tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

impl TickInput {
    /// Per-axis displacement; opposite keys cancel
    pub fn displacement(&self, speed: i32) -> IVec2 {
        let dx = self.right as i32 - self.left as i32;
        let dy = self.down as i32 - self.up as i32;
        IVec2::new(dx, dy) * speed
    }
}

/// Advance the game state by one frame at time `now_ms`
pub fn tick(state: &mut GameState, input: &TickInput, now_ms: u64) {
    state.events.clear();

    let area = state.play_area();

    obstacles::expire(state, now_ms);
    obstacles::maybe_spawn(state, &area, now_ms);

    let colliders: Vec<Collider> = state
        .obstacles
        .iter()
        .map(|o| Collider {
            id: o.id,
            kind: o.kind,
            rect: o.rect(&area, &state.aspects),
        })
        .collect();

    let resolution = collision::resolve_movement(
        state.player.rect,
        input.displacement(PLAYER_SPEED),
        &area,
        &colliders,
    );

    let before = state.player.squish;
    let after = geometry::Squish {
        x: resolution.horizontal.is_some(),
        y: resolution.vertical.is_some(),
    };
    state
        .scoreboard
        .apply(before, after, &resolution.touches(), &mut state.events);

    let size = geometry::squished_size(area.w, area.h, state.aspects.player, after);
    state.player.rect = collision::anchored_rect(&resolution, size, &area, &colliders);
    state.player.squish = after;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::rect::Rect;
    use crate::sim::state::{GameEvent, ObstacleKind, SpriteAspects};
    use proptest::prelude::*;

    /// Timestamp of a tick at the target frame rate
    fn frame_ms(frame: u64) -> u64 {
        frame * 1000 / TARGET_FPS as u64
    }

    fn new_state() -> GameState {
        // 800x600 play area, 60x60 player centered at (400, 300)
        GameState::new(42, IVec2::new(800, 600 + STATUS_BAR_HEIGHT), SpriteAspects::default())
    }

    const RIGHT: TickInput = TickInput {
        left: false,
        right: true,
        up: false,
        down: false,
    };

    #[test]
    fn test_displacement_cancels_opposites() {
        let input = TickInput {
            left: true,
            right: true,
            up: false,
            down: true,
        };
        assert_eq!(input.displacement(5), IVec2::new(0, 5));
    }

    #[test]
    fn test_release_from_left_wall_unsquishes() {
        let mut state = new_state();
        state.player.rect.x = 0;

        tick(&mut state, &TickInput::default(), frame_ms(1));
        assert!(state.player.squish.x);
        assert_eq!(state.player.rect.left(), 0);
        assert_eq!(state.player.rect.w, 30);
        let score = state.score();
        assert_eq!(score, SQUISH_POINTS);

        tick(&mut state, &RIGHT, frame_ms(2));
        assert!(!state.player.squish.x);
        assert_eq!(state.player.rect.w, 60);
        assert_eq!(state.score(), score);
    }

    #[test]
    fn test_beneficial_contact_scores_once() {
        let mut state = new_state();
        // Player spans x 370..430; obstacle spans 470..530 at the same height
        let id = obstacles::spawn_at(&mut state, ObstacleKind::Beneficial, IVec2::new(500, 300), 0);

        let mut frame = 0;
        while !state.player.squish.x {
            frame += 1;
            tick(&mut state, &RIGHT, frame_ms(frame));
            assert!(frame < 20, "never reached the obstacle");
        }
        assert_eq!(state.score(), BENEFICIAL_POINTS + SQUISH_POINTS);
        assert_eq!(state.player.rect.right(), 470);
        assert!(state.events.contains(&GameEvent::Collected {
            id,
            points: BENEFICIAL_POINTS
        }));

        for _ in 0..10 {
            frame += 1;
            tick(&mut state, &RIGHT, frame_ms(frame));
            assert!(state.player.squish.x);
            assert_eq!(state.player.rect.right(), 470);
        }
        assert_eq!(state.score(), BENEFICIAL_POINTS + SQUISH_POINTS);
    }

    #[test]
    fn test_hazard_contact_resets_score() {
        let mut state = new_state();
        state.scoreboard.score = 250;
        // Already one step from touching
        state.player.rect.x = 405;
        obstacles::spawn_at(&mut state, ObstacleKind::Hazard, IVec2::new(500, 300), 0);

        tick(&mut state, &RIGHT, frame_ms(1));
        assert!(state.player.squish.x);
        assert_eq!(state.score(), 0);
        assert_eq!(state.scoreboard.best, 250);
    }

    #[test]
    fn test_spawn_next_to_idle_player_scores_nothing() {
        for seed in 0..50 {
            let mut state = GameState::new(
                seed,
                IVec2::new(800, 600 + STATUS_BAR_HEIGHT),
                SpriteAspects::default(),
            );
            // Leave one obstacle-wide strip free on the left
            state.player.rect = Rect::new(60, 0, 740, 600);
            state.player.squish = geometry::Squish { x: true, y: true };
            state.scoreboard.score = 250;

            tick(&mut state, &TickInput::default(), SPAWN_INTERVAL_MS + 1);
            assert_eq!(state.obstacles.len(), 1);
            assert_eq!(state.score(), 250, "seed {seed}: {:?}", state.events);
            assert!(!state.events.iter().any(|e| matches!(
                e,
                GameEvent::ScoreReset { .. } | GameEvent::Collected { .. }
            )));
        }
    }

    #[test]
    fn test_obstacle_lives_for_spawn_duration() {
        let mut state = new_state();
        let mut frame = 0;
        let (spawn_frame, id) = loop {
            frame += 1;
            tick(&mut state, &TickInput::default(), frame_ms(frame));
            if let Some(o) = state.obstacles.first() {
                break (frame, o.id);
            }
            assert!(frame < 1000, "nothing spawned");
        };

        let present = |state: &GameState| state.obstacles.iter().any(|o| o.id == id);
        while frame < spawn_frame + 119 {
            frame += 1;
            tick(&mut state, &TickInput::default(), frame_ms(frame));
        }
        assert!(present(&state));

        while frame < spawn_frame + 121 {
            frame += 1;
            tick(&mut state, &TickInput::default(), frame_ms(frame));
        }
        assert!(!present(&state));
        assert!(!state.scoreboard.is_colliding(id));
    }

    #[test]
    fn test_tiny_window_does_not_crash() {
        let mut state = new_state();
        state.resize(IVec2::new(5, STATUS_BAR_HEIGHT + 300));
        for frame in 1..400 {
            tick(&mut state, &RIGHT, frame_ms(frame));
            assert!(state.player.rect.w >= 1);
            assert!(state.player.rect.h >= 1);
        }
        assert_eq!(state.player.rect.w, 1);

        // Smaller than the status bar
        state.resize(IVec2::new(0, 10));
        tick(&mut state, &TickInput::default(), frame_ms(400));
        assert_eq!(state.player.rect.size(), IVec2::new(1, 1));
    }

    #[test]
    fn test_idle_tick_is_idempotent() {
        let mut state = new_state();
        state.player.rect = Rect::new(0, 540, 60, 60);
        tick(&mut state, &TickInput::default(), frame_ms(1));
        let first = state.player.rect;
        tick(&mut state, &TickInput::default(), frame_ms(2));
        assert_eq!(state.player.rect, first);
        assert_eq!(first, Rect::new(0, 570, 30, 30));
    }

    fn input_strategy() -> impl Strategy<Value = TickInput> {
        (any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>())
            .prop_map(|(left, right, up, down)| TickInput { left, right, up, down })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn player_stays_inside_play_area(
            seed in any::<u64>(),
            width in 100i32..1600,
            height in 140i32..1200,
            aspect in 0.5f32..2.0,
            inputs in prop::collection::vec(input_strategy(), 1..400),
        ) {
            let aspects = SpriteAspects::new(aspect, 1.0, 1.5);
            let mut state = GameState::new(seed, IVec2::new(width, height), aspects);
            for (i, input) in inputs.iter().enumerate() {
                // Jump the clock so obstacles spawn often
                tick(&mut state, input, i as u64 * 100);
                prop_assert!(state.play_area().contains(&state.player.rect));
            }
        }

        #[test]
        fn score_only_grows_or_resets(
            seed in any::<u64>(),
            inputs in prop::collection::vec(input_strategy(), 1..600),
        ) {
            let aspects = SpriteAspects::default();
            let mut state = GameState::new(seed, IVec2::new(800, 600 + STATUS_BAR_HEIGHT), aspects);
            let mut last = state.score();
            for (i, input) in inputs.iter().enumerate() {
                tick(&mut state, input, i as u64 * 50);
                let score = state.score();
                prop_assert!(score >= last || score == 0);
                last = score;
            }
        }

        #[test]
        fn idle_resolution_is_idempotent(
            x in 0i32..740,
            y in 0i32..540,
        ) {
            let mut state = new_state();
            state.player.rect = Rect::new(x, y, 60, 60);
            tick(&mut state, &TickInput::default(), 1);
            let first = state.player.rect;
            tick(&mut state, &TickInput::default(), 2);
            prop_assert_eq!(state.player.rect, first);
        }
    }
}
