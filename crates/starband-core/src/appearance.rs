//! Fill appearance decisions for each star.
//!
//! The ladder in [`star_state`] is evaluated in strict priority order; the
//! order is visible behavior at the boundary between hover and selection and
//! must not be rearranged.

use peniko::Color;

use crate::style::{FillStyle, GradientDirection, RatingStyle};

/// Semantic display state of one star.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StarState {
    /// Base fill, no interaction.
    Normal,
    /// Under or left of the pointer while hovering.
    Hovered,
    /// Within the current selection.
    Selected,
    /// Between the hover point and a higher selection: clicking here would
    /// lower the rating.
    Removing,
}

/// Opaque fill descriptor handed to the render target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FillTreatment {
    /// Flat fill.
    Solid(Color),
    /// Directional gradient from `start` to `end` across the star's slot.
    Linear {
        start: Color,
        end: Color,
        direction: GradientDirection,
    },
}

/// Resolve the display state of the star at 0-based `index`.
///
/// `hover_star` and `selected_star` are 1-based with 0 meaning none. The
/// comparisons are signed so that `hover_star == 0` while hovering marks the
/// whole selection as removable, matching the original control.
pub fn star_state(index: usize, hovering: bool, hover_star: u32, selected_star: u32) -> StarState {
    let i = index as i64;
    let hover = i64::from(hover_star);
    let selected = i64::from(selected_star);

    if hovering && i >= hover - 1 && i < selected {
        StarState::Removing
    } else if hovering && i < selected {
        StarState::Selected
    } else if hovering && hover > i {
        StarState::Hovered
    } else if !hovering && selected > i {
        StarState::Selected
    } else {
        StarState::Normal
    }
}

/// Map a star's display state to a concrete fill descriptor.
///
/// `Normal` is always a flat base fill; the accent states blend toward the
/// base color when the style asks for gradients.
pub fn fill_treatment(state: StarState, style: &RatingStyle) -> FillTreatment {
    let accent = match state {
        StarState::Normal => return FillTreatment::Solid(style.fill()),
        StarState::Hovered => style.hover(),
        StarState::Selected => style.selected(),
        StarState::Removing => style.remove(),
    };
    match style.fill_style {
        FillStyle::Gradient => FillTreatment::Linear {
            start: accent,
            end: style.fill(),
            direction: style.gradient_direction,
        },
        FillStyle::Solid => FillTreatment::Solid(accent),
    }
}
