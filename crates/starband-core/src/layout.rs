//! Slot layout for the star row.
//!
//! The container is divided into `star_count` equal-width slots between the
//! margins, separated by `spacing`. Each slot carries the rectangle the star
//! is drawn in, a widened rectangle used only for pointer hit-testing, and
//! the star polygon inscribed in the drawn rectangle.

use kurbo::{Point, Rect, Size};
use serde::{Deserialize, Serialize};

use crate::star::StarPolygon;

/// Margins around the star row, in pixels. May be negative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            left: 2.0,
            right: 2.0,
            top: 2.0,
            bottom: 2.0,
        }
    }
}

/// One star's allotment in the row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StarSlot {
    /// Rectangle the star is drawn in.
    pub rect: Rect,
    /// Rectangle used for pointer containment tests. Extends half the
    /// spacing to the left of `rect` so clicks in the gap between stars
    /// still land on a slot.
    pub hit_rect: Rect,
    /// Star polygon inscribed in `rect`.
    pub star: StarPolygon,
}

impl StarSlot {
    /// Pointer containment test against the widened hit rectangle.
    pub fn contains(&self, point: Point) -> bool {
        self.hit_rect.contains(point)
    }
}

/// Compute the slot sequence for a row of stars.
///
/// Slot width is `(width - left - right - spacing * (count - 1)) / count`;
/// slots are contiguous left to right with `spacing` between them. A
/// container too small for the margins and spacing yields zero-or-negative
/// width slots, which contain no points and draw as collapsed stars. That is
/// tolerated, not an error.
pub fn compute_slots(size: Size, margins: Margins, star_count: u32, spacing: f64) -> Vec<StarSlot> {
    let count = star_count.max(1);
    let star_width =
        (size.width - margins.left - margins.right - spacing * (count - 1) as f64) / count as f64;
    let star_height = size.height - margins.top - margins.bottom;

    let mut slots = Vec::with_capacity(count as usize);
    let mut x = margins.left;
    for _ in 0..count {
        let rect = Rect::new(x, margins.top, x + star_width, margins.top + star_height);
        let hit_rect = Rect::new(rect.x0 - spacing / 2.0, rect.y0, rect.x1, rect.y1);
        slots.push(StarSlot {
            rect,
            hit_rect,
            star: StarPolygon::from_rect(rect),
        });
        x += star_width + spacing;
    }
    slots
}

/// Lazily recomputed slot cache, keyed on the widget's layout epoch.
///
/// An epoch of 0 means "never computed", so a fresh cache is always stale
/// against a widget whose epoch starts at 1.
#[derive(Debug, Clone, Default)]
pub(crate) struct LayoutCache {
    epoch: u64,
    slots: Vec<StarSlot>,
}

impl LayoutCache {
    /// Whether the cached slots were computed for `epoch`.
    pub(crate) fn is_valid(&self, epoch: u64) -> bool {
        self.epoch == epoch
    }

    /// Replace the cached slots, marking them valid for `epoch`.
    pub(crate) fn store(&mut self, epoch: u64, slots: Vec<StarSlot>) {
        self.epoch = epoch;
        self.slots = slots;
    }

    /// The cached slots (possibly stale; callers check `is_valid` first).
    pub(crate) fn slots(&self) -> &[StarSlot] {
        &self.slots
    }
}
