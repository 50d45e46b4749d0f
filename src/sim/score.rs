//! Scoring
//!
//! Points come from squish rising edges and from fresh obstacle contacts.
//! A fresh Hazard contact zeroes the score and wins over every bonus earned
//! in the same tick.

use std::collections::BTreeSet;

use super::geometry::Squish;
use super::state::{GameEvent, ObstacleKind};
use crate::consts::{BENEFICIAL_POINTS, SQUISH_POINTS};

/// An obstacle touched this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Touch {
    pub id: u32,
    pub kind: ObstacleKind,
}

/// Score plus the set of obstacles already in contact
#[derive(Debug, Clone, Default)]
pub struct Scoreboard {
    pub score: u64,
    /// Highest score reached this session
    pub best: u64,
    colliding: BTreeSet<u32>,
}

impl Scoreboard {
    /// Whether an obstacle was in contact on the previous tick
    pub fn is_colliding(&self, id: u32) -> bool {
        self.colliding.contains(&id)
    }

    /// Mark an obstacle as already in contact
    pub fn remember(&mut self, id: u32) {
        self.colliding.insert(id);
    }

    /// Drop an obstacle that no longer exists
    pub fn forget(&mut self, id: u32) {
        self.colliding.remove(&id);
    }

    /// Score one tick's contact results and roll the colliding set forward.
    pub fn apply(
        &mut self,
        before: Squish,
        after: Squish,
        touches: &[Touch],
        events: &mut Vec<GameEvent>,
    ) {
        let rose_x = after.x && !before.x;
        let rose_y = after.y && !before.y;
        let mut gained = 0;
        if rose_x {
            gained += SQUISH_POINTS;
        }
        if rose_y {
            gained += SQUISH_POINTS;
        }
        if rose_x || rose_y {
            events.push(GameEvent::Squished { x: rose_x, y: rose_y });
        }

        let mut reset_by = None;
        let mut collected = Vec::new();
        for touch in touches.iter().filter(|t| !self.colliding.contains(&t.id)) {
            match touch.kind {
                ObstacleKind::Beneficial => {
                    gained += BENEFICIAL_POINTS;
                    collected.push(GameEvent::Collected {
                        id: touch.id,
                        points: BENEFICIAL_POINTS,
                    });
                }
                ObstacleKind::Hazard => {
                    reset_by.get_or_insert(touch.id);
                }
            }
        }

        match reset_by {
            Some(id) => {
                self.best = self.best.max(self.score);
                events.push(GameEvent::ScoreReset {
                    id,
                    lost: self.score,
                });
                self.score = 0;
            }
            None => {
                events.extend(collected);
                self.score += gained;
                self.best = self.best.max(self.score);
            }
        }

        self.colliding = touches.iter().map(|t| t.id).collect();
    }
}
