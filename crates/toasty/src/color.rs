//! Colors and the default toast palette

use crate::config::ToastKind;

/// RGBA color in linear space with values in [0, 1]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Convert an sRGB color (0-255) to linear space
    #[inline]
    pub const fn srgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        const fn srgb_to_linear(c: u8) -> f32 {
            let x = c as f32 / 255.0;
            if x <= 0.04045 {
                x / 12.92
            } else {
                // Polynomial approximation of ((x + 0.055) / 1.055)^2.4
                let t = (x + 0.055) / 1.055;
                t * t * (0.5870 * t + 0.4130)
            }
        }

        Self::rgba(
            srgb_to_linear(r),
            srgb_to_linear(g),
            srgb_to_linear(b),
            a as f32 / 255.0,
        )
    }

    /// Decode a packed `0xAARRGGBB` sRGB value, the layout mobile toolkits use
    pub const fn argb(packed: u32) -> Self {
        Self::srgba(
            (packed >> 16) as u8,
            (packed >> 8) as u8,
            packed as u8,
            (packed >> 24) as u8,
        )
    }

    /// Relative luminance (0.0 to 1.0) using linear RGB coefficients
    pub fn luminance(&self) -> f32 {
        0.2126 * self.r + 0.7152 * self.g + 0.0722 * self.b
    }

    /// Contrast ratio with another color (1.0 to 21.0)
    pub fn contrast_ratio(&self, other: &Color) -> f32 {
        let l1 = self.luminance();
        let l2 = other.luminance();
        let lighter = l1.max(l2);
        let darker = l1.min(l2);
        (lighter + 0.05) / (darker + 0.05)
    }
}

/// Default toast palette
pub mod palette {
    use super::Color;

    pub const SUCCESS: Color = Color::argb(0xFF5D_BE55);
    pub const ERROR: Color = Color::argb(0xFFF4_4336);
    pub const WHITE: Color = Color::srgba(255, 255, 255, 255);
    pub const BLACK: Color = Color::srgba(0, 0, 0, 255);
}

/// Default background for a toast kind
pub fn color_for(kind: ToastKind) -> Color {
    match kind {
        ToastKind::Success => palette::SUCCESS,
        ToastKind::Error => palette::ERROR,
    }
}

/// Black or white, whichever reads better on `background`
pub fn message_color_on(background: Color) -> Color {
    if background.contrast_ratio(&palette::WHITE) >= background.contrast_ratio(&palette::BLACK) {
        palette::WHITE
    } else {
        palette::BLACK
    }
}
