//! Error types
//!
//! Only configuration can fail. Collaborator failures (haptics) are reported
//! through [`HapticError`] but never leave the controller.

use thiserror::Error;

/// Errors raised when starting a toast
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ToastError {
    /// The configuration cannot describe a valid toast
    #[error("invalid toast config: hold duration must be >= 0 ms, got {hold_duration_ms} ms")]
    InvalidConfig { hold_duration_ms: i64 },
}

/// Errors a [`crate::HapticDevice`] may report
///
/// The controller logs these and carries on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HapticError {
    /// No vibration hardware, or the host refused access
    #[error("haptic feedback is not supported on this device")]
    Unsupported,

    /// The device accepted the request but failed to play it
    #[error("haptic device error: {0}")]
    Device(String),
}
