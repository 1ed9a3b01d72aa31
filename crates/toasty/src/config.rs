//! Toast configuration
//!
//! [`ToastConfig`] is the whole caller-facing configuration surface. It is
//! validated once when the toast starts and never changes afterwards.

use std::time::Duration;

use toasty_macros::WithBuilders;

use crate::color::Color;
use crate::error::ToastError;
use crate::icon::ToastIcon;

/// Default time the expanded toast stays on screen
pub const DEFAULT_HOLD_DURATION_MS: i64 = 2000;

/// What the toast reports; selects default color and icon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ToastKind {
    #[default]
    Success,
    Error,
}

/// Screen edge the toast anchors to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ToastEdge {
    #[default]
    Top,
    Bottom,
}

/// Configuration for a single toast
///
/// # Example
///
/// ```
/// use toasty::{ToastConfig, ToastEdge};
///
/// let config = ToastConfig::error("Upload failed")
///     .with_edge(ToastEdge::Bottom)
///     .with_hold_duration_ms(3000)
///     .with_show_icon(true);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, WithBuilders)]
pub struct ToastConfig {
    pub kind: ToastKind,
    #[with_builders(into)]
    pub message: String,
    /// Time the expanded toast is held, in milliseconds. Must be >= 0.
    pub hold_duration_ms: i64,
    pub edge: ToastEdge,
    pub show_icon: bool,
    /// Request a haptic pulse when an error toast becomes readable
    pub haptic_on_error: bool,

    /// Icon override; `None` uses the kind's default
    pub icon: Option<ToastIcon>,
    /// Background override; `None` uses the kind's default
    pub background: Option<Color>,
    /// Message and icon tint; `None` picks black or white against the background
    pub message_color: Option<Color>,
    /// Expanded width in logical pixels; `None` fills the width the host offers
    pub width: Option<f32>,
    /// Expanded height in logical pixels
    pub height: f32,
    /// Diameter of the collapsed dot
    pub dot_diameter: f32,
    /// Corner radius of the expanded rectangle
    pub corner_radius: f32,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            kind: ToastKind::Success,
            message: String::from("Success"),
            hold_duration_ms: DEFAULT_HOLD_DURATION_MS,
            edge: ToastEdge::Top,
            show_icon: false,
            haptic_on_error: true,
            icon: None,
            background: None,
            message_color: None,
            width: None,
            height: 60.0,
            dot_diameter: 30.0,
            corner_radius: 12.0,
        }
    }
}

impl ToastConfig {
    /// Success toast with default settings
    pub fn success(message: impl Into<String>) -> Self {
        Self::default()
            .with_kind(ToastKind::Success)
            .with_message(message)
    }

    /// Error toast with default settings
    pub fn error(message: impl Into<String>) -> Self {
        Self::default()
            .with_kind(ToastKind::Error)
            .with_message(message)
    }

    /// Check the config and return the hold duration
    pub fn validate(&self) -> Result<Duration, ToastError> {
        u64::try_from(self.hold_duration_ms)
            .map(Duration::from_millis)
            .map_err(|_| ToastError::InvalidConfig {
                hold_duration_ms: self.hold_duration_ms,
            })
    }

    /// Whether reaching the holding phase should request a haptic pulse
    pub fn wants_haptic(&self) -> bool {
        self.kind == ToastKind::Error && self.haptic_on_error
    }
}
