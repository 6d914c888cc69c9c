//! Starband Core Library
//!
//! Platform-agnostic layout and interaction logic for a horizontal star
//! rating widget: slot layout with cached star polygons, pointer hit-testing,
//! hover/selection state, and per-star fill appearance decisions. Actual
//! drawing happens behind the [`RenderTarget`] seam so the core stays
//! agnostic to the host's painting API.

pub mod appearance;
pub mod event;
pub mod layout;
pub mod rating;
pub mod render;
pub mod star;
pub mod style;

pub use appearance::{fill_treatment, star_state, FillTreatment, StarState};
pub use event::RatingEvent;
pub use layout::{compute_slots, Margins, StarSlot};
pub use rating::StarRating;
pub use render::RenderTarget;
pub use star::StarPolygon;
pub use style::{FillStyle, GradientDirection, RatingStyle, SerializableColor};
