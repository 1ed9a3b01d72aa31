//! Capabilities the host injects into a toast
//!
//! The controller has no idea how pixels or vibration motors work. It talks to
//! the host through these two traits, so the same state machine drives a GPU
//! renderer, a terminal, or a test recorder.

use std::cell::{Ref, RefCell};
use std::rc::Rc;
use std::time::Duration;

use crate::error::HapticError;
use crate::frame::ToastFrame;

/// Vibration waveform: alternating off/on durations in milliseconds, played once
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HapticPattern {
    pub timings_ms: &'static [u64],
}

impl HapticPattern {
    /// Short double buzz used for error toasts
    pub const ERROR_PULSE: HapticPattern = HapticPattern {
        timings_ms: &[0, 50, 50, 100],
    };

    /// Total time the pattern takes to play
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.timings_ms.iter().sum())
    }

    /// Time the motor is actually running (every second entry)
    pub fn vibration_time(&self) -> Duration {
        Duration::from_millis(self.timings_ms.iter().skip(1).step_by(2).sum())
    }
}

/// Something that can vibrate
///
/// Requests are fire-and-forget: an error is logged by the caller and the
/// toast keeps going.
pub trait HapticDevice {
    fn request_haptic_pulse(&mut self, pattern: &HapticPattern) -> Result<(), HapticError>;
}

/// Device for hosts without vibration hardware; silently accepts every request
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHaptics;

impl HapticDevice for NoHaptics {
    fn request_haptic_pulse(&mut self, _pattern: &HapticPattern) -> Result<(), HapticError> {
        Ok(())
    }
}

/// A device the host keeps a handle to after handing it to a toast
///
/// Clones share one underlying device, so several toasts can drive the same
/// motor and the host can still inspect or reconfigure it.
#[derive(Debug, Default)]
pub struct SharedHaptics<D> {
    device: Rc<RefCell<D>>,
}

impl<D> SharedHaptics<D> {
    pub fn new(device: D) -> Self {
        Self {
            device: Rc::new(RefCell::new(device)),
        }
    }

    /// Borrow the shared device
    ///
    /// Panics if called from inside the device's own `request_haptic_pulse`.
    pub fn borrow(&self) -> Ref<'_, D> {
        self.device.borrow()
    }

    pub fn into_inner(self) -> Rc<RefCell<D>> {
        self.device
    }
}

impl<D> Clone for SharedHaptics<D> {
    fn clone(&self) -> Self {
        Self {
            device: Rc::clone(&self.device),
        }
    }
}

impl<D> From<Rc<RefCell<D>>> for SharedHaptics<D> {
    fn from(device: Rc<RefCell<D>>) -> Self {
        Self { device }
    }
}

impl<D: HapticDevice> HapticDevice for SharedHaptics<D> {
    fn request_haptic_pulse(&mut self, pattern: &HapticPattern) -> Result<(), HapticError> {
        match self.device.try_borrow_mut() {
            Ok(mut device) => device.request_haptic_pulse(pattern),
            Err(_) => Err(HapticError::Device("shared device is busy".into())),
        }
    }
}

impl<F> HapticDevice for F
where
    F: FnMut(&HapticPattern) -> Result<(), HapticError>,
{
    fn request_haptic_pulse(&mut self, pattern: &HapticPattern) -> Result<(), HapticError> {
        self(pattern)
    }
}

/// Paints a toast frame
pub trait Renderer {
    fn render(&mut self, frame: &ToastFrame<'_>);
}

impl<F> Renderer for F
where
    F: FnMut(&ToastFrame<'_>),
{
    fn render(&mut self, frame: &ToastFrame<'_>) {
        self(frame)
    }
}
