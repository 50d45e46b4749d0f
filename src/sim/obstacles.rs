//! Obstacle lifecycle: timed spawning, placement, expiry

use glam::IVec2;
use rand::Rng;

use super::geometry;
use super::rect::Rect;
use super::state::{GameEvent, GameState, Obstacle, ObstacleKind};
use crate::consts::*;

/// Remove every obstacle whose expiry has passed
pub fn expire(state: &mut GameState, now_ms: u64) {
    let mut expired = Vec::new();
    state.obstacles.retain(|o| {
        let alive = o.expires_at_ms > now_ms;
        if !alive {
            expired.push(o.id);
        }
        alive
    });

    for id in expired {
        state.scoreboard.forget(id);
        state.events.push(GameEvent::Expired { id });
    }
}

/// Spawn a random obstacle once the spawn interval has elapsed
///
/// Returns the new obstacle's id, if one was spawned.
pub fn maybe_spawn(state: &mut GameState, area: &Rect, now_ms: u64) -> Option<u32> {
    if now_ms.saturating_sub(state.last_spawn_ms) <= SPAWN_INTERVAL_MS {
        return None;
    }
    state.last_spawn_ms = now_ms;

    let kind = if state.rng().random_bool(0.5) {
        ObstacleKind::Beneficial
    } else {
        ObstacleKind::Hazard
    };
    let player = state.player.rect;
    let (center, placed) = find_spot(state, kind, area, &player);
    let id = spawn_at(state, kind, center, now_ms);
    if !placed {
        state.events.push(GameEvent::PlacementFallback { id });
    }
    Some(id)
}

/// Add an obstacle at a fixed center
pub fn spawn_at(state: &mut GameState, kind: ObstacleKind, center: IVec2, now_ms: u64) -> u32 {
    let id = state.next_obstacle_id();
    state.obstacles.push(Obstacle {
        id,
        kind,
        center,
        expires_at_ms: now_ms + SPAWN_DURATION_MS,
    });
    state.events.push(GameEvent::Spawned { id, kind });
    id
}

/// Rejection-sample a center whose rect neither overlaps nor touches the
/// player. A shared edge would read as contact on the spawn tick.
///
/// Falls back to the area center after `MAX_PLACEMENT_ATTEMPTS`; the bool is
/// false in that case.
fn find_spot(state: &mut GameState, kind: ObstacleKind, area: &Rect, player: &Rect) -> (IVec2, bool) {
    let size = geometry::base_size(area.w, area.h, state.aspects.for_kind(kind));
    let (min_x, max_x) = center_range(area.left(), area.right(), size.x);
    let (min_y, max_y) = center_range(area.top(), area.bottom(), size.y);

    for _ in 0..MAX_PLACEMENT_ATTEMPTS {
        let rng = state.rng();
        let center = IVec2::new(rng.random_range(min_x..=max_x), rng.random_range(min_y..=max_y));
        if !Rect::from_center(center, size).touches_or_overlaps(player) {
            return (center, true);
        }
    }

    (area.center(), false)
}

/// Inclusive range of centers that keep a span of `extent` inside `lo..hi`
fn center_range(lo: i32, hi: i32, extent: i32) -> (i32, i32) {
    let min = lo + extent / 2;
    let max = hi - extent + extent / 2;
    if min > max {
        let mid = lo + (hi - lo) / 2;
        (mid, mid)
    } else {
        (min, max)
    }
}
