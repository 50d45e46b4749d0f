//! Integer axis-aligned rectangles
//!
//! Screen space: x grows right, y grows down. `right()` and `bottom()` are
//! exclusive edges, so a rect at x = 0 with width 10 spans `0..10`.

use glam::IVec2;

/// One of the two screen axes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    /// The perpendicular axis
    #[inline]
    pub fn cross(self) -> Axis {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }
}

/// Axis-aligned rectangle with integer position and size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Rect of `size` whose center is `center`
    pub fn from_center(center: IVec2, size: IVec2) -> Self {
        Self {
            x: center.x - size.x / 2,
            y: center.y - size.y / 2,
            w: size.x,
            h: size.y,
        }
    }

    #[inline]
    pub fn left(&self) -> i32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    #[inline]
    pub fn top(&self) -> i32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    #[inline]
    pub fn size(&self) -> IVec2 {
        IVec2::new(self.w, self.h)
    }

    #[inline]
    pub fn center(&self) -> IVec2 {
        IVec2::new(self.x + self.w / 2, self.y + self.h / 2)
    }

    /// Lower edge along an axis (left or top)
    #[inline]
    pub fn min(&self, axis: Axis) -> i32 {
        match axis {
            Axis::Horizontal => self.left(),
            Axis::Vertical => self.top(),
        }
    }

    /// Upper edge along an axis (right or bottom)
    #[inline]
    pub fn max(&self, axis: Axis) -> i32 {
        match axis {
            Axis::Horizontal => self.right(),
            Axis::Vertical => self.bottom(),
        }
    }

    /// Extent along an axis (width or height)
    #[inline]
    pub fn extent(&self, axis: Axis) -> i32 {
        match axis {
            Axis::Horizontal => self.w,
            Axis::Vertical => self.h,
        }
    }

    /// Move so the lower edge sits at `edge`, keeping size
    pub fn set_min(&mut self, axis: Axis, edge: i32) {
        match axis {
            Axis::Horizontal => self.x = edge,
            Axis::Vertical => self.y = edge,
        }
    }

    /// Move so the upper edge sits at `edge`, keeping size
    pub fn set_max(&mut self, axis: Axis, edge: i32) {
        match axis {
            Axis::Horizontal => self.x = edge - self.w,
            Axis::Vertical => self.y = edge - self.h,
        }
    }

    pub fn translate(&mut self, axis: Axis, delta: i32) {
        match axis {
            Axis::Horizontal => self.x += delta,
            Axis::Vertical => self.y += delta,
        }
    }

    /// Strict interval overlap along one axis (shared edges don't count)
    #[inline]
    pub fn overlaps_on(&self, axis: Axis, other: &Rect) -> bool {
        self.min(axis) < other.max(axis) && self.max(axis) > other.min(axis)
    }

    /// Strict overlap on both axes
    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.overlaps_on(Axis::Horizontal, other) && self.overlaps_on(Axis::Vertical, other)
    }

    /// Overlap or a shared edge or corner on both axes
    #[inline]
    pub fn touches_or_overlaps(&self, other: &Rect) -> bool {
        self.left() <= other.right()
            && self.right() >= other.left()
            && self.top() <= other.bottom()
            && self.bottom() >= other.top()
    }

    /// Whether `other` lies entirely inside this rect
    pub fn contains(&self, other: &Rect) -> bool {
        other.left() >= self.left()
            && other.right() <= self.right()
            && other.top() >= self.top()
            && other.bottom() <= self.bottom()
    }

    /// Pull the rect inside `area` along one axis.
    ///
    /// A rect at least as large as the area is centered on it instead.
    pub fn clamp_axis(&mut self, axis: Axis, area: &Rect) {
        let extent = self.extent(axis);
        let area_extent = area.extent(axis);
        if extent >= area_extent {
            self.set_min(axis, area.min(axis) + area_extent / 2 - extent / 2);
        } else if self.min(axis) < area.min(axis) {
            self.set_min(axis, area.min(axis));
        } else if self.max(axis) > area.max(axis) {
            self.set_max(axis, area.max(axis));
        }
    }

    /// Pull the rect inside `area` on both axes
    pub fn clamp_within(&mut self, area: &Rect) {
        self.clamp_axis(Axis::Horizontal, area);
        self.clamp_axis(Axis::Vertical, area);
    }
}
