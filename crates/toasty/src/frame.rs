//! Paintable snapshot of a toast at one instant

use glam::Vec2;

use crate::color::Color;
use crate::icon::ToastIcon;
use crate::phase::ToastState;

/// Outline of the toast surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ToastShape {
    /// Circle; the size is a square while the dot is settled
    Dot,
    /// Rectangle with rounded corners
    Rounded { radius: f32 },
}

impl ToastShape {
    /// Corner radius for a surface of `size`, clamped so corners never overlap
    pub fn corner_radius(&self, size: Vec2) -> f32 {
        let half_min = size.min_element() * 0.5;
        match *self {
            ToastShape::Dot => half_min,
            ToastShape::Rounded { radius } => radius.min(half_min),
        }
    }
}

/// Everything a renderer needs to paint a toast for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct ToastFrame<'a> {
    /// Discrete state the controller is in
    pub state: ToastState,
    /// Eased surface size in logical pixels
    pub size: Vec2,
    /// Eased vertical displacement from the resting position
    pub offset: f32,
    pub shape: ToastShape,
    pub background: Color,
    pub message_color: Color,
    /// Icon to draw next to the message, if icons are shown
    pub icon: Option<ToastIcon>,
    pub message: &'a str,
}

impl ToastFrame<'_> {
    /// Whether the message (and icon) should be painted
    pub fn shows_content(&self) -> bool {
        self.state.content_visible
    }

    /// Top-left corner of the surface when centered horizontally in
    /// `available_width` and anchored at `anchor_y`
    pub fn origin(&self, available_width: f32, anchor_y: f32) -> Vec2 {
        Vec2::new(
            (available_width - self.size.x) * 0.5,
            anchor_y + self.offset,
        )
    }
}
