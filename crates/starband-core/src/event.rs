//! Events raised by the rating widget for the host application.

/// A notification queued by the widget and drained via
/// [`StarRating::poll_event`](crate::StarRating::poll_event).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingEvent {
    /// The selection changed through a pointer-down hit or the deselect
    /// affordance. Carries the new 1-based star count, 0 meaning cleared.
    SelectionChanged { selected: u32 },
}
