//! Collision and anchoring for the player sprite
//!
//! Movement is resolved one axis at a time (horizontal, then vertical from the
//! horizontally resolved rect). Each axis yields at most one `Contact`. After
//! the new squished size is known, the rect is rebuilt around the old center
//! and the contacted edge is pinned back to whatever it touched, so squishing
//! never makes the sprite visibly slide off a wall or obstacle.

use glam::IVec2;

use super::rect::{Axis, Rect};
use super::score::Touch;
use super::state::ObstacleKind;

/// Which edge of the player is in contact
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
    Top,
    Bottom,
}

impl Side {
    /// The lower-coordinate side of an axis (left or top)
    pub fn near(axis: Axis) -> Side {
        match axis {
            Axis::Horizontal => Side::Left,
            Axis::Vertical => Side::Top,
        }
    }

    /// The higher-coordinate side of an axis (right or bottom)
    pub fn far(axis: Axis) -> Side {
        match axis {
            Axis::Horizontal => Side::Right,
            Axis::Vertical => Side::Bottom,
        }
    }

    pub fn is_near(self) -> bool {
        matches!(self, Side::Left | Side::Top)
    }
}

/// An obstacle rect the player can run into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Collider {
    pub id: u32,
    pub kind: ObstacleKind,
    pub rect: Rect,
}

/// What an axis is touching this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contact {
    /// One wall of the play area
    Wall(Side),
    /// Both walls: the play area is no larger than the sprite on this axis
    BothWalls,
    /// An obstacle, with its rect at the time of contact
    Object {
        id: u32,
        kind: ObstacleKind,
        side: Side,
        rect: Rect,
    },
}

impl Contact {
    /// The single contacted side, if there is one
    pub fn side(&self) -> Option<Side> {
        match *self {
            Contact::Wall(side) | Contact::Object { side, .. } => Some(side),
            Contact::BothWalls => None,
        }
    }

    /// Edge coordinate the player's contacted side should sit at
    fn anchor_edge(&self, axis: Axis, area: &Rect) -> Option<i32> {
        match *self {
            Contact::Wall(side) if side.is_near() => Some(area.min(axis)),
            Contact::Wall(_) => Some(area.max(axis)),
            Contact::Object { side, rect, .. } if side.is_near() => Some(rect.max(axis)),
            Contact::Object { rect, .. } => Some(rect.min(axis)),
            Contact::BothWalls => None,
        }
    }

    fn touch(&self) -> Option<Touch> {
        match *self {
            Contact::Object { id, kind, .. } => Some(Touch { id, kind }),
            _ => None,
        }
    }
}

/// Outcome of moving the player for one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    /// Moved and clamped rect, still at the previous size
    pub rect: Rect,
    pub horizontal: Option<Contact>,
    pub vertical: Option<Contact>,
}

impl Resolution {
    pub fn contact(&self, axis: Axis) -> Option<Contact> {
        match axis {
            Axis::Horizontal => self.horizontal,
            Axis::Vertical => self.vertical,
        }
    }

    /// Obstacles touched this tick, without duplicates
    pub fn touches(&self) -> Vec<Touch> {
        let mut touches: Vec<Touch> = [self.horizontal, self.vertical]
            .iter()
            .flatten()
            .filter_map(Contact::touch)
            .collect();
        touches.dedup_by_key(|t| t.id);
        touches
    }
}

/// Move `rect` by `displacement`, stopping at walls and obstacles.
pub fn resolve_movement(
    rect: Rect,
    displacement: IVec2,
    area: &Rect,
    colliders: &[Collider],
) -> Resolution {
    let (rect, horizontal) = resolve_axis(rect, Axis::Horizontal, displacement.x, area, colliders);
    let (mut rect, vertical) = resolve_axis(rect, Axis::Vertical, displacement.y, area, colliders);
    rect.clamp_within(area);

    Resolution {
        rect,
        horizontal,
        vertical,
    }
}

fn resolve_axis(
    prev: Rect,
    axis: Axis,
    delta: i32,
    area: &Rect,
    colliders: &[Collider],
) -> (Rect, Option<Contact>) {
    let mut moved = prev;
    moved.translate(axis, delta);

    // Touching a wall counts, so a sprite resting on it stays squished
    let near_wall = moved.min(axis) <= area.min(axis);
    let far_wall = moved.max(axis) >= area.max(axis);
    let wall = match (near_wall, far_wall) {
        (true, true) => Some(Contact::BothWalls),
        (true, false) => Some(Contact::Wall(Side::near(axis))),
        (false, true) => Some(Contact::Wall(Side::far(axis))),
        (false, false) => None,
    };
    if wall.is_some() {
        moved.clamp_axis(axis, area);
        return (moved, wall);
    }

    let cross = axis.cross();
    for collider in colliders {
        let other = &collider.rect;
        if !moved.overlaps_on(cross, other) {
            continue;
        }

        // Previous edge must have been outside the obstacle, otherwise the
        // sprites already overlapped and this is not an approach.
        if delta >= 0 && prev.max(axis) <= other.min(axis) && moved.max(axis) >= other.min(axis) {
            moved.set_max(axis, other.min(axis));
            return (moved, Some(object_contact(collider, Side::far(axis))));
        }
        if delta <= 0 && prev.min(axis) >= other.max(axis) && moved.min(axis) <= other.max(axis) {
            moved.set_min(axis, other.max(axis));
            return (moved, Some(object_contact(collider, Side::near(axis))));
        }
    }

    (moved, None)
}

fn object_contact(collider: &Collider, side: Side) -> Contact {
    Contact::Object {
        id: collider.id,
        kind: collider.kind,
        side,
        rect: collider.rect,
    }
}

/// Rebuild the player rect at `size`, keeping contacted edges in place.
pub fn anchored_rect(
    resolution: &Resolution,
    size: IVec2,
    area: &Rect,
    colliders: &[Collider],
) -> Rect {
    let mut rect = Rect::from_center(resolution.rect.center(), size);

    for axis in [Axis::Horizontal, Axis::Vertical] {
        let Some(contact) = resolution.contact(axis) else {
            continue;
        };
        match (contact.side(), contact.anchor_edge(axis, area)) {
            (Some(side), Some(edge)) if side.is_near() => rect.set_min(axis, edge),
            (Some(_), Some(edge)) => rect.set_max(axis, edge),
            // Both walls: leave centered, the clamp sorts it out
            _ => {}
        }
    }
    rect.clamp_within(area);

    for collider in colliders {
        if rect.overlaps(&collider.rect) {
            push_out(&mut rect, resolution, &collider.rect);
        }
    }
    rect.clamp_within(area);

    rect
}

/// Shift a contacted edge back to the facing edge of `other`, along the
/// contacted axis with the shallowest penetration.
fn push_out(rect: &mut Rect, resolution: &Resolution, other: &Rect) {
    let mut best: Option<(i32, Axis, Side)> = None;
    for axis in [Axis::Horizontal, Axis::Vertical] {
        let Some(side) = resolution.contact(axis).and_then(|c| c.side()) else {
            continue;
        };
        let depth = if side.is_near() {
            other.max(axis) - rect.min(axis)
        } else {
            rect.max(axis) - other.min(axis)
        };
        if depth > 0 && best.is_none_or(|(d, _, _)| depth < d) {
            best = Some((depth, axis, side));
        }
    }

    match best {
        Some((_, axis, side)) if side.is_near() => rect.set_min(axis, other.max(axis)),
        Some((_, axis, _)) => rect.set_max(axis, other.min(axis)),
        None => {}
    }
}
