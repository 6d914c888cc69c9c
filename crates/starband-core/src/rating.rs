//! The star rating widget: configuration, interaction state and render driver.

use std::collections::VecDeque;

use kurbo::{Point, Size};

use crate::appearance::{fill_treatment, star_state, FillTreatment, StarState};
use crate::event::RatingEvent;
use crate::layout::{compute_slots, LayoutCache, Margins, StarSlot};
use crate::render::RenderTarget;
use crate::style::RatingStyle;

/// Default container size, matching the original control's designer default.
const DEFAULT_SIZE: Size = Size::new(120.0, 18.0);

/// A horizontal row of clickable stars.
///
/// Single-threaded and synchronous: every operation runs on the host's event
/// thread in response to a discrete notification (resize, pointer event,
/// render request). Slot geometry is cached under a layout epoch and only
/// recomputed after a layout-affecting mutation.
#[derive(Debug, Clone)]
pub struct StarRating {
    size: Size,
    margins: Margins,
    star_count: u32,
    star_spacing: f64,
    style: RatingStyle,
    /// True while the pointer is inside the control bounds.
    hovering: bool,
    /// 1-based star under the pointer, 0 = none. Deliberately sticky: a
    /// pointer-move that hits no slot leaves it unchanged.
    hover_star: u32,
    /// 1-based selected star count, 0 = none.
    selected_star: u32,
    /// Bumped by every layout-affecting mutation.
    layout_epoch: u64,
    cache: LayoutCache,
    events: VecDeque<RatingEvent>,
}

impl Default for StarRating {
    fn default() -> Self {
        Self::new()
    }
}

impl StarRating {
    /// Create a widget with the stock five-star configuration.
    pub fn new() -> Self {
        Self {
            size: DEFAULT_SIZE,
            margins: Margins::default(),
            star_count: 5,
            star_spacing: 5.0,
            style: RatingStyle::default(),
            hovering: false,
            hover_star: 0,
            selected_star: 0,
            layout_epoch: 1,
            cache: LayoutCache::default(),
            events: VecDeque::new(),
        }
    }

    fn invalidate_layout(&mut self) {
        self.layout_epoch += 1;
    }

    // --- configuration surface -------------------------------------------

    pub fn star_count(&self) -> u32 {
        self.star_count
    }

    /// Set the number of stars. Values below 1 are ignored, preserving the
    /// previous count. A selection beyond the new count resets to 0.
    pub fn set_star_count(&mut self, count: u32) {
        if count < 1 {
            log::warn!("ignoring star count {count}: must be at least 1");
            return;
        }
        if count != self.star_count {
            self.star_count = count;
            if self.selected_star > count {
                self.selected_star = 0;
            }
            self.invalidate_layout();
        }
    }

    pub fn star_spacing(&self) -> f64 {
        self.star_spacing
    }

    /// Set the gap between adjacent stars. Values below 1 are ignored.
    pub fn set_star_spacing(&mut self, spacing: f64) {
        if spacing < 1.0 {
            log::warn!("ignoring star spacing {spacing}: must be at least 1");
            return;
        }
        if spacing != self.star_spacing {
            self.star_spacing = spacing;
            self.invalidate_layout();
        }
    }

    pub fn margins(&self) -> Margins {
        self.margins
    }

    pub fn set_left_margin(&mut self, margin: f64) {
        if margin != self.margins.left {
            self.margins.left = margin;
            self.invalidate_layout();
        }
    }

    pub fn set_right_margin(&mut self, margin: f64) {
        if margin != self.margins.right {
            self.margins.right = margin;
            self.invalidate_layout();
        }
    }

    pub fn set_top_margin(&mut self, margin: f64) {
        if margin != self.margins.top {
            self.margins.top = margin;
            self.invalidate_layout();
        }
    }

    pub fn set_bottom_margin(&mut self, margin: f64) {
        if margin != self.margins.bottom {
            self.margins.bottom = margin;
            self.invalidate_layout();
        }
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn style(&self) -> &RatingStyle {
        &self.style
    }

    /// Mutable access to the visual style. Style changes never invalidate
    /// the slot layout; the host just requests a repaint.
    pub fn style_mut(&mut self) -> &mut RatingStyle {
        &mut self.style
    }

    // --- interaction state -----------------------------------------------

    pub fn selected_star(&self) -> u32 {
        self.selected_star
    }

    /// Set the selection programmatically. Out-of-range values reset to 0
    /// rather than erroring. Does not queue a selection-changed event.
    pub fn set_selected_star(&mut self, selected: u32) {
        self.selected_star = if selected <= self.star_count {
            selected
        } else {
            0
        };
    }

    pub fn hover_star(&self) -> u32 {
        self.hover_star
    }

    pub fn is_hovering(&self) -> bool {
        self.hovering
    }

    // --- layout -----------------------------------------------------------

    /// The container was resized by the host layout system. Marks the layout
    /// stale; interaction state is untouched.
    pub fn resize(&mut self, size: Size) {
        if size != self.size {
            self.size = size;
            self.invalidate_layout();
        }
    }

    fn ensure_layout(&mut self) {
        if !self.cache.is_valid(self.layout_epoch) {
            let slots = compute_slots(self.size, self.margins, self.star_count, self.star_spacing);
            self.cache.store(self.layout_epoch, slots);
        }
    }

    /// The slot sequence for the current configuration, recomputing it only
    /// if a layout-affecting property changed since the last call.
    pub fn layout(&mut self) -> &[StarSlot] {
        self.ensure_layout();
        self.cache.slots()
    }

    /// Map a pointer position to a 0-based slot index via the widened hit
    /// rectangles, scanning in ascending order.
    pub fn hit_test(&mut self, point: Point) -> Option<usize> {
        self.ensure_layout();
        self.cache
            .slots()
            .iter()
            .position(|slot| slot.contains(point))
    }

    // --- pointer events ---------------------------------------------------

    pub fn pointer_enter(&mut self) {
        self.hovering = true;
    }

    pub fn pointer_leave(&mut self) {
        self.hovering = false;
    }

    /// Update the hover index from a pointer position. A miss leaves the
    /// hover state unchanged (sticky hover).
    pub fn pointer_move(&mut self, point: Point) {
        if let Some(index) = self.hit_test(point) {
            self.hover_star = index as u32 + 1;
            self.hovering = true;
        }
    }

    /// Select the star under the pointer and queue a selection-changed
    /// event. Clicking the first star while exactly one star is selected
    /// clears the selection instead.
    pub fn pointer_down(&mut self, point: Point) {
        self.ensure_layout();
        if self.selected_star == 1
            && self
                .cache
                .slots()
                .first()
                .is_some_and(|slot| slot.contains(point))
        {
            self.selected_star = 0;
            self.events
                .push_back(RatingEvent::SelectionChanged { selected: 0 });
            return;
        }

        if let Some(index) = self
            .cache
            .slots()
            .iter()
            .position(|slot| slot.contains(point))
        {
            self.selected_star = index as u32 + 1;
            self.hovering = false;
            self.events.push_back(RatingEvent::SelectionChanged {
                selected: self.selected_star,
            });
        }
    }

    /// Drain the next queued event, oldest first.
    pub fn poll_event(&mut self) -> Option<RatingEvent> {
        self.events.pop_front()
    }

    // --- rendering --------------------------------------------------------

    /// The display state of the star at 0-based `index` under the current
    /// interaction state.
    pub fn star_display_state(&self, index: usize) -> StarState {
        star_state(index, self.hovering, self.hover_star, self.selected_star)
    }

    /// The fill descriptor for the star at 0-based `index`.
    pub fn star_fill(&self, index: usize) -> FillTreatment {
        fill_treatment(self.star_display_state(index), &self.style)
    }

    /// Issue one frame to the render target: clear, then per star one fill
    /// followed by one outline stroke with the cached polygon.
    ///
    /// Idempotent given unchanged state; never mutates interaction state and
    /// never recomputes geometry unless the layout is stale.
    pub fn render(&mut self, target: &mut dyn RenderTarget) {
        self.ensure_layout();
        target.clear(self.style.background());
        let outline = self.style.outline();
        let thickness = self.style.outline_thickness;
        for (index, slot) in self.cache.slots().iter().enumerate() {
            let fill = fill_treatment(
                star_state(index, self.hovering, self.hover_star, self.selected_star),
                &self.style,
            );
            target.fill_polygon(&slot.star.points, &fill);
            target.stroke_polygon(&slot.star.points, outline, thickness);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::FillStyle;
    use peniko::Color;

    /// Records draw calls for assertions.
    #[derive(Debug, Default)]
    struct Recording {
        ops: Vec<Op>,
    }

    #[derive(Debug, Clone, PartialEq)]
    enum Op {
        Clear(Color),
        Fill(Vec<Point>, FillTreatment),
        Stroke(Vec<Point>, Color, f64),
    }

    impl RenderTarget for Recording {
        fn clear(&mut self, color: Color) {
            self.ops.push(Op::Clear(color));
        }

        fn fill_polygon(&mut self, points: &[Point], fill: &FillTreatment) {
            self.ops.push(Op::Fill(points.to_vec(), *fill));
        }

        fn stroke_polygon(&mut self, points: &[Point], color: Color, width: f64) {
            self.ops.push(Op::Stroke(points.to_vec(), color, width));
        }
    }

    fn widget() -> StarRating {
        let mut rating = StarRating::new();
        rating.resize(Size::new(240.0, 32.0));
        rating
    }

    fn slot_center(rating: &mut StarRating, index: usize) -> Point {
        rating.layout()[index].rect.center()
    }

    #[test]
    fn test_defaults() {
        let rating = StarRating::new();
        assert_eq!(rating.star_count(), 5);
        assert_eq!(rating.selected_star(), 0);
        assert_eq!(rating.hover_star(), 0);
        assert!(!rating.is_hovering());
        assert_eq!(rating.size(), Size::new(120.0, 18.0));
    }

    #[test]
    fn test_centroid_hit_test_consistent_with_layout() {
        let mut rating = widget();
        for index in 0..5 {
            let center = slot_center(&mut rating, index);
            assert_eq!(rating.hit_test(center), Some(index));
        }
    }

    #[test]
    fn test_pointer_move_sets_hover() {
        let mut rating = widget();
        let center = slot_center(&mut rating, 2);
        rating.pointer_move(center);
        assert_eq!(rating.hover_star(), 3);
        assert!(rating.is_hovering());
    }

    #[test]
    fn test_pointer_move_miss_keeps_hover_sticky() {
        let mut rating = widget();
        let center = slot_center(&mut rating, 1);
        rating.pointer_move(center);
        rating.pointer_move(Point::new(-100.0, -100.0));
        assert_eq!(rating.hover_star(), 2);
        assert!(rating.is_hovering());
    }

    #[test]
    fn test_pointer_enter_leave() {
        let mut rating = widget();
        rating.pointer_enter();
        assert!(rating.is_hovering());
        rating.pointer_leave();
        assert!(!rating.is_hovering());
    }

    #[test]
    fn test_click_selects_and_queues_event() {
        let mut rating = widget();
        rating.pointer_enter();
        let center = slot_center(&mut rating, 3);
        rating.pointer_down(center);

        assert_eq!(rating.selected_star(), 4);
        assert!(!rating.is_hovering());
        assert_eq!(
            rating.poll_event(),
            Some(RatingEvent::SelectionChanged { selected: 4 })
        );
        assert_eq!(rating.poll_event(), None);
    }

    #[test]
    fn test_click_miss_is_a_no_op() {
        let mut rating = widget();
        rating.set_selected_star(2);
        rating.pointer_down(Point::new(-5.0, -5.0));
        assert_eq!(rating.selected_star(), 2);
        assert_eq!(rating.poll_event(), None);
    }

    #[test]
    fn test_click_in_gap_selects_right_star() {
        let mut rating = widget();
        let spacing = rating.star_spacing();
        let (gap_x, y) = {
            let slots = rating.layout();
            (slots[0].rect.x1 + spacing * 0.75, 16.0)
        };
        rating.pointer_down(Point::new(gap_x, y));
        assert_eq!(rating.selected_star(), 2);
    }

    #[test]
    fn test_deselect_on_first_star() {
        let mut rating = widget();
        let center = slot_center(&mut rating, 0);
        rating.pointer_down(center);
        assert_eq!(rating.selected_star(), 1);
        assert_eq!(
            rating.poll_event(),
            Some(RatingEvent::SelectionChanged { selected: 1 })
        );

        rating.pointer_down(center);
        assert_eq!(rating.selected_star(), 0);
        assert_eq!(
            rating.poll_event(),
            Some(RatingEvent::SelectionChanged { selected: 0 })
        );
    }

    #[test]
    fn test_first_star_click_with_higher_selection_selects_one() {
        let mut rating = widget();
        rating.set_selected_star(3);
        let center = slot_center(&mut rating, 0);
        rating.pointer_down(center);
        assert_eq!(rating.selected_star(), 1);
    }

    #[test]
    fn test_selection_clamped_to_star_count() {
        let mut rating = widget();
        rating.set_selected_star(6);
        assert_eq!(rating.selected_star(), 0);
        rating.set_selected_star(5);
        assert_eq!(rating.selected_star(), 5);
        rating.set_selected_star(0);
        assert_eq!(rating.selected_star(), 0);
    }

    #[test]
    fn test_invalid_setters_preserve_previous_values() {
        let mut rating = widget();
        rating.set_star_count(0);
        assert_eq!(rating.star_count(), 5);
        rating.set_star_spacing(0.25);
        assert!((rating.star_spacing() - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_shrinking_star_count_resets_out_of_range_selection() {
        let mut rating = widget();
        rating.set_selected_star(5);
        rating.set_star_count(3);
        assert_eq!(rating.selected_star(), 0);

        rating.set_selected_star(2);
        rating.set_star_count(8);
        assert_eq!(rating.selected_star(), 2);
    }

    #[test]
    fn test_layout_reused_until_invalidated() {
        let mut rating = widget();
        let first = rating.layout().to_vec();
        let second = rating.layout().to_vec();
        assert_eq!(first, second);

        rating.set_left_margin(10.0);
        let third = rating.layout().to_vec();
        assert_ne!(first, third);
    }

    #[test]
    fn test_resize_recomputes_to_fit_exactly() {
        let mut rating = widget();
        rating.layout();
        rating.resize(Size::new(400.0, 40.0));
        let (last_x1, height) = {
            let slots = rating.layout();
            (slots[4].rect.x1, slots[0].rect.height())
        };
        let margins = rating.margins();
        assert!((last_x1 + margins.right - 400.0).abs() < 1e-9);
        assert!((height - (40.0 - margins.top - margins.bottom)).abs() < 1e-9);
    }

    #[test]
    fn test_render_emits_clear_then_fill_stroke_pairs() {
        let mut rating = widget();
        let mut target = Recording::default();
        rating.render(&mut target);

        assert_eq!(target.ops.len(), 1 + 2 * 5);
        assert_eq!(target.ops[0], Op::Clear(rating.style().background()));
        for star in 0..5 {
            assert!(matches!(target.ops[1 + star * 2], Op::Fill(..)));
            assert!(matches!(target.ops[2 + star * 2], Op::Stroke(..)));
        }
    }

    #[test]
    fn test_render_is_idempotent() {
        let mut rating = widget();
        let center = slot_center(&mut rating, 2);
        rating.pointer_move(center);
        rating.set_selected_star(4);

        let mut first = Recording::default();
        rating.render(&mut first);
        let mut second = Recording::default();
        rating.render(&mut second);

        assert_eq!(first.ops, second.ops);
        assert_eq!(rating.hover_star(), 3);
        assert_eq!(rating.selected_star(), 4);
        assert!(rating.is_hovering());
    }

    #[test]
    fn test_render_uses_interaction_state_for_fills() {
        let mut rating = widget();
        rating.set_selected_star(2);
        // Not hovering: the first two stars take the selected treatment.
        assert_eq!(rating.star_display_state(0), StarState::Selected);
        assert_eq!(rating.star_display_state(1), StarState::Selected);
        assert_eq!(rating.star_display_state(2), StarState::Normal);

        let mut target = Recording::default();
        rating.render(&mut target);
        let selected_fill = rating.star_fill(0);
        assert!(matches!(
            &target.ops[1],
            Op::Fill(_, fill) if *fill == selected_fill
        ));
    }

    #[test]
    fn test_style_change_keeps_geometry() {
        let mut rating = widget();
        let before = rating.layout().to_vec();
        rating.style_mut().fill_style = FillStyle::Solid;
        rating.style_mut().outline_thickness = 4.0;
        let after = rating.layout().to_vec();
        assert_eq!(before, after);
    }
}
