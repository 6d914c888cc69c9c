//! Visual style properties for the rating widget.

use peniko::Color;
use serde::{Deserialize, Serialize};

/// Serializable color representation (RGBA8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializableColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl SerializableColor {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

impl From<Color> for SerializableColor {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<SerializableColor> for Color {
    fn from(color: SerializableColor) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// Direction of the state-to-base gradient used for star fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GradientDirection {
    /// Left to right.
    Horizontal,
    /// Top to bottom.
    Vertical,
    /// Top-left to bottom-right.
    #[default]
    ForwardDiagonal,
    /// Top-right to bottom-left.
    BackwardDiagonal,
}

impl GradientDirection {
    /// Cycle to the next gradient direction.
    pub fn next(self) -> Self {
        match self {
            GradientDirection::Horizontal => GradientDirection::Vertical,
            GradientDirection::Vertical => GradientDirection::ForwardDiagonal,
            GradientDirection::ForwardDiagonal => GradientDirection::BackwardDiagonal,
            GradientDirection::BackwardDiagonal => GradientDirection::Horizontal,
        }
    }
}

/// How state colors are applied to a star's interior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FillStyle {
    /// Flat fill of the state color.
    Solid,
    /// Directional gradient from the state color toward the base fill color.
    #[default]
    Gradient,
}

impl FillStyle {
    /// Cycle to the next fill style.
    pub fn next(self) -> Self {
        match self {
            FillStyle::Solid => FillStyle::Gradient,
            FillStyle::Gradient => FillStyle::Solid,
        }
    }
}

/// Style properties for the rating widget.
///
/// Purely visual: mutating any of these never invalidates the slot layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingStyle {
    /// Background color the surface is cleared to.
    pub background_color: SerializableColor,
    /// Star outline color.
    pub outline_color: SerializableColor,
    /// Star outline stroke width.
    pub outline_thickness: f64,
    /// Base fill color; also the far end of state gradients.
    pub fill_color: SerializableColor,
    /// Fill accent while the pointer rests on an unselected star.
    pub hover_color: SerializableColor,
    /// Fill accent for stars within the current selection.
    pub selected_color: SerializableColor,
    /// Fill accent for stars that would be dropped by clicking below the
    /// current selection.
    pub remove_color: SerializableColor,
    /// Direction of state gradients.
    pub gradient_direction: GradientDirection,
    /// Whether state colors render flat or as gradients.
    pub fill_style: FillStyle,
}

impl Default for RatingStyle {
    fn default() -> Self {
        Self {
            background_color: SerializableColor::new(250, 250, 250, 255),
            outline_color: SerializableColor::new(128, 128, 128, 255),
            outline_thickness: 2.0,
            fill_color: SerializableColor::new(255, 255, 255, 255),
            hover_color: SerializableColor::new(0, 0, 255, 255),
            selected_color: SerializableColor::new(255, 255, 0, 255),
            remove_color: SerializableColor::new(255, 0, 0, 255),
            gradient_direction: GradientDirection::default(),
            fill_style: FillStyle::default(),
        }
    }
}

impl RatingStyle {
    /// Get the background color as a peniko Color.
    pub fn background(&self) -> Color {
        self.background_color.into()
    }

    /// Get the outline color as a peniko Color.
    pub fn outline(&self) -> Color {
        self.outline_color.into()
    }

    /// Get the base fill color as a peniko Color.
    pub fn fill(&self) -> Color {
        self.fill_color.into()
    }

    /// Get the hover accent as a peniko Color.
    pub fn hover(&self) -> Color {
        self.hover_color.into()
    }

    /// Get the selected accent as a peniko Color.
    pub fn selected(&self) -> Color {
        self.selected_color.into()
    }

    /// Get the removal accent as a peniko Color.
    pub fn remove(&self) -> Color {
        self.remove_color.into()
    }

    /// Set the base fill color from a peniko Color.
    pub fn set_fill(&mut self, color: Color) {
        self.fill_color = color.into();
    }

    /// Set the outline color from a peniko Color.
    pub fn set_outline(&mut self, color: Color) {
        self.outline_color = color.into();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_round_trip() {
        let color = Color::from_rgba8(12, 34, 56, 78);
        let serializable: SerializableColor = color.into();
        let back: Color = serializable.into();
        assert_eq!(back.to_rgba8(), color.to_rgba8());
    }

    #[test]
    fn test_style_serde_round_trip() {
        let mut style = RatingStyle::default();
        style.fill_style = FillStyle::Solid;
        style.gradient_direction = GradientDirection::Vertical;
        style.outline_thickness = 3.5;

        let json = serde_json::to_string(&style).unwrap();
        let back: RatingStyle = serde_json::from_str(&json).unwrap();
        assert_eq!(back, style);
    }

    #[test]
    fn test_direction_cycle_covers_all() {
        let start = GradientDirection::Horizontal;
        let mut dir = start;
        for _ in 0..4 {
            dir = dir.next();
        }
        assert_eq!(dir, start);
        assert_ne!(start.next(), start);
    }
}
