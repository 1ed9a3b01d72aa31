//! # toasty
//!
//! Backend agnostic animated toast notifications.
//!
//! A toast grows from a dot into a rounded rectangle, shows an icon and a
//! message, holds, shrinks back and slides off-screen. This crate owns the
//! timing of that sequence and nothing else: painting and vibration are
//! supplied by the host through small capability traits.
//!
//! ## Core Types
//!
//! - [`ToastConfig`] - What to show and for how long
//! - [`Toast`] - Builder that attaches listeners and haptics before starting
//! - [`ToastController`] - The one-shot lifecycle state machine
//! - [`Toaster`] - Handle-based registry for several concurrent toasts
//!
//! ## Observing
//!
//! - [`ToastState`] / [`Phase`] - Discrete state pushed to listeners
//! - [`ToastFrame`] - Eased geometry sampled for painting
//!
//! ## Capabilities
//!
//! - [`Renderer`] - Paints a [`ToastFrame`]
//! - [`HapticDevice`] - Plays the error pulse
//!
//! ## Animation
//!
//! - [`EdgeTiming`] - Per-edge delays and motion
//! - [`Transition`] / [`Tween`] - Easing and interpolation over time

mod capability;
mod color;
mod config;
mod controller;
mod error;
mod frame;
mod icon;
mod phase;
mod timing;
mod toaster;
pub mod transition;

pub use capability::*;
pub use color::*;
pub use config::*;
pub use controller::*;
pub use error::*;
pub use frame::*;
pub use icon::*;
pub use phase::*;
pub use timing::*;
pub use toaster::*;
pub use transition::*;

pub use glam::Vec2;
