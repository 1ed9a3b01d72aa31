//! The toast lifecycle state machine
//!
//! A [`ToastController`] runs one fixed sequence:
//!
//! ```text
//! Entering --entry delay--> Expanding --0--> Holding --hold--> Collapsing --collapse delay--> Complete
//! ```
//!
//! Time only moves when the host calls [`ToastController::update`] from its
//! frame loop. Each phase is entered at its *scheduled* instant, not at the
//! instant the tick arrived, so a late tick never stretches the timeline and
//! never skips a phase.
//!
//! # Example
//!
//! ```
//! use std::time::{Duration, Instant};
//! use toasty::{Phase, Toast, ToastConfig};
//!
//! let start = Instant::now();
//! let mut toast = Toast::new(ToastConfig::success("Saved"))
//!     .on_complete(|| println!("dismissed"))
//!     .start(start)
//!     .unwrap();
//!
//! toast.update(start + Duration::from_millis(100));
//! assert_eq!(toast.phase(), Phase::Holding);
//!
//! toast.update(start + Duration::from_millis(2250));
//! assert!(toast.is_complete());
//! ```

use std::fmt;
use std::time::{Duration, Instant};

use glam::Vec2;

use crate::capability::{HapticDevice, HapticPattern, NoHaptics, Renderer};
use crate::color::{color_for, message_color_on};
use crate::config::ToastConfig;
use crate::error::ToastError;
use crate::frame::{ToastFrame, ToastShape};
use crate::icon::resolve_icon;
use crate::phase::{Phase, ToastState};
use crate::timing::EdgeTiming;
use crate::transition::{lerp_f32, Tween};

/// Observer called on every state mutation
pub type StateListener = Box<dyn FnMut(&ToastState)>;

/// One-shot observer called when the toast completes
pub type CompleteListener = Box<dyn FnOnce()>;

/// Builder for a toast that has not started yet
///
/// Listeners registered here see every state, including the initial
/// `Entering` one.
pub struct Toast {
    config: ToastConfig,
    haptics: Box<dyn HapticDevice>,
    state_listeners: Vec<StateListener>,
    complete_listeners: Vec<CompleteListener>,
}

impl Toast {
    pub fn new(config: ToastConfig) -> Self {
        Self {
            config,
            haptics: Box::new(NoHaptics),
            state_listeners: Vec::new(),
            complete_listeners: Vec::new(),
        }
    }

    pub fn config(&self) -> &ToastConfig {
        &self.config
    }

    /// Device used for the error pulse
    pub fn haptics(mut self, device: impl HapticDevice + 'static) -> Self {
        self.haptics = Box::new(device);
        self
    }

    pub fn on_state_change(mut self, listener: impl FnMut(&ToastState) + 'static) -> Self {
        self.state_listeners.push(Box::new(listener));
        self
    }

    /// Dismissal callback, fired exactly once
    pub fn on_complete(mut self, listener: impl FnOnce() + 'static) -> Self {
        self.complete_listeners.push(Box::new(listener));
        self
    }

    /// Validate the config and begin the sequence at `now`
    ///
    /// On error nothing is notified and no listener ever runs.
    pub fn start(self, now: Instant) -> Result<ToastController, ToastError> {
        let hold = self.config.validate()?;
        let timing = EdgeTiming::for_edge(self.config.edge);
        let off = timing.off_offset;

        let mut controller = ToastController {
            config: self.config,
            timing,
            hold,
            started_at: now,
            phase_started_at: now,
            completed_at: None,
            state: ToastState::entering(off),
            haptics: self.haptics,
            haptic_requested: false,
            state_listeners: self.state_listeners,
            complete_listeners: self.complete_listeners,
            slide: Tween::new(off, 0.0, now, timing.slide),
            grow_width: Tween::settled(0.0, now),
            grow_height: Tween::settled(0.0, now),
        };

        log::debug!(
            "toast started: {:?} at {:?} edge, hold {:?}, completes in {:?}",
            controller.config.kind,
            controller.config.edge,
            hold,
            timing.time_to_complete(hold)
        );
        controller.notify();
        Ok(controller)
    }
}

impl fmt::Debug for Toast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Toast")
            .field("config", &self.config)
            .field("state_listeners", &self.state_listeners.len())
            .field("complete_listeners", &self.complete_listeners.len())
            .finish_non_exhaustive()
    }
}

/// A running toast
///
/// Created by [`Toast::start`] or [`ToastController::start`]. Once it reaches
/// [`Phase::Complete`] it is inert: further updates and cancels do nothing.
pub struct ToastController {
    config: ToastConfig,
    timing: &'static EdgeTiming,
    hold: Duration,
    started_at: Instant,
    /// Scheduled instant the current phase began
    phase_started_at: Instant,
    completed_at: Option<Instant>,
    state: ToastState,
    haptics: Box<dyn HapticDevice>,
    haptic_requested: bool,
    state_listeners: Vec<StateListener>,
    complete_listeners: Vec<CompleteListener>,

    // Renderer-side motion. Grow tweens run from 0.0 (dot) to 1.0 (rectangle).
    slide: Tween,
    grow_width: Tween,
    grow_height: Tween,
}

impl ToastController {
    /// Start a toast without listeners or haptics
    pub fn start(config: ToastConfig, now: Instant) -> Result<Self, ToastError> {
        Toast::new(config).start(now)
    }

    pub fn config(&self) -> &ToastConfig {
        &self.config
    }

    pub fn state(&self) -> ToastState {
        self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    pub fn is_complete(&self) -> bool {
        self.state.phase.is_terminal()
    }

    /// Complete and the exit animation has finished; safe to drop
    pub fn is_settled(&self, now: Instant) -> bool {
        self.is_complete()
            && self.slide.is_finished(now)
            && self.grow_width.is_finished(now)
            && self.grow_height.is_finished(now)
    }

    pub fn started_at(&self) -> Instant {
        self.started_at
    }

    /// Instant `Complete` was entered, by schedule or cancel
    pub fn completed_at(&self) -> Option<Instant> {
        self.completed_at
    }

    /// Instant `Complete` is due if nobody cancels
    pub fn scheduled_completion(&self) -> Instant {
        self.started_at + self.timing.time_to_complete(self.hold)
    }

    pub fn elapsed(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.started_at)
    }

    /// Instant the current phase ends, `None` once complete
    pub fn next_deadline(&self) -> Option<Instant> {
        let length = match self.state.phase {
            Phase::Entering => self.timing.entry_delay,
            Phase::Expanding => Duration::ZERO,
            Phase::Holding => self.hold,
            Phase::Collapsing => self.timing.collapse_delay,
            Phase::Complete => return None,
        };
        Some(self.phase_started_at + length)
    }

    /// Register an observer for every later state mutation
    pub fn on_state_change(&mut self, listener: impl FnMut(&ToastState) + 'static) {
        self.state_listeners.push(Box::new(listener));
    }

    /// Register a completion observer
    ///
    /// If the toast already completed the listener runs immediately, so it
    /// still runs exactly once.
    pub fn on_complete(&mut self, listener: impl FnOnce() + 'static) {
        if self.is_complete() {
            listener();
        } else {
            self.complete_listeners.push(Box::new(listener));
        }
    }

    /// Advance through every phase whose deadline is at or before `now`
    ///
    /// Returns true if the phase changed.
    pub fn update(&mut self, now: Instant) -> bool {
        let before = self.state.phase;
        while let Some(deadline) = self.next_deadline() {
            if deadline > now {
                break;
            }
            let Some(next) = self.state.phase.next() else {
                break;
            };
            log::trace!("toast deadline reached after {:?}", self.elapsed(deadline));
            self.enter(next, deadline);
        }
        self.state.phase != before
    }

    /// Jump straight to `Complete`
    ///
    /// Returns false if the toast had already completed.
    pub fn cancel(&mut self, now: Instant) -> bool {
        if self.is_complete() {
            return false;
        }
        log::debug!("toast cancelled during {:?}", self.state.phase);
        self.enter(Phase::Complete, now);
        true
    }

    /// Eased geometry at `now`
    ///
    /// `available_width` is used when the config has no explicit width.
    pub fn frame(&self, now: Instant, available_width: f32) -> ToastFrame<'_> {
        let dot = self.config.dot_diameter;
        let full_width = self.config.width.unwrap_or(available_width).max(dot);
        let size = Vec2::new(
            lerp_f32(dot, full_width, self.grow_width.value_at(now)),
            lerp_f32(dot, self.config.height.max(dot), self.grow_height.value_at(now)),
        );

        let shape = match self.state.phase {
            Phase::Entering | Phase::Complete => ToastShape::Dot,
            Phase::Expanding | Phase::Holding | Phase::Collapsing => ToastShape::Rounded {
                radius: self.config.corner_radius,
            },
        };

        let background = self
            .config
            .background
            .unwrap_or_else(|| color_for(self.config.kind));

        ToastFrame {
            state: self.state,
            size,
            offset: self.slide.value_at(now),
            shape,
            background,
            message_color: self
                .config
                .message_color
                .unwrap_or_else(|| message_color_on(background)),
            icon: resolve_icon(&self.config),
            message: &self.config.message,
        }
    }

    /// Hand the frame at `now` to a renderer
    pub fn paint(&self, now: Instant, available_width: f32, renderer: &mut dyn Renderer) {
        renderer.render(&self.frame(now, available_width));
    }

    fn enter(&mut self, phase: Phase, at: Instant) {
        let off = self.timing.off_offset;
        log::debug!(
            "toast {:?} -> {:?} at {:?}",
            self.state.phase,
            phase,
            self.elapsed(at)
        );

        self.state = ToastState::for_phase(phase, off);
        self.phase_started_at = at;

        match phase {
            Phase::Entering | Phase::Holding => {}
            Phase::Expanding => {
                self.grow_width.retarget(1.0, at, self.timing.grow_width);
                self.grow_height.retarget(1.0, at, self.timing.grow_height);
            }
            Phase::Collapsing => {
                self.grow_width.retarget(0.0, at, self.timing.grow_width);
                self.grow_height.retarget(0.0, at, self.timing.grow_height);
            }
            Phase::Complete => {
                // A cancel can land mid-grow; shrink from wherever it is
                if self.grow_width.target() != 0.0 {
                    self.grow_width.retarget(0.0, at, self.timing.grow_width);
                }
                if self.grow_height.target() != 0.0 {
                    self.grow_height.retarget(0.0, at, self.timing.grow_height);
                }
                self.slide.retarget(off, at, self.timing.slide);
                self.completed_at = Some(at);
            }
        }

        self.notify();

        match phase {
            Phase::Holding => self.request_haptic(),
            Phase::Complete => self.fire_complete(),
            _ => {}
        }
    }

    fn request_haptic(&mut self) {
        if self.haptic_requested || !self.config.wants_haptic() {
            return;
        }
        self.haptic_requested = true;
        if let Err(err) = self
            .haptics
            .request_haptic_pulse(&HapticPattern::ERROR_PULSE)
        {
            log::warn!("haptic pulse failed: {err}");
        }
    }

    fn notify(&mut self) {
        for listener in &mut self.state_listeners {
            listener(&self.state);
        }
    }

    fn fire_complete(&mut self) {
        let listeners = std::mem::take(&mut self.complete_listeners);
        log::debug!("toast complete, notifying {} listener(s)", listeners.len());
        for listener in listeners {
            listener();
        }
    }
}

impl fmt::Debug for ToastController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToastController")
            .field("config", &self.config)
            .field("state", &self.state)
            .field("started_at", &self.started_at)
            .field("completed_at", &self.completed_at)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use super::*;
    use crate::config::ToastEdge;
    use crate::error::HapticError;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    fn recorded(toast: Toast) -> (Toast, Rc<RefCell<Vec<ToastState>>>) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&log);
        let toast = toast.on_state_change(move |state| sink.borrow_mut().push(*state));
        (toast, log)
    }

    #[test]
    fn test_initial_state() {
        let start = Instant::now();
        let toast = ToastController::start(ToastConfig::default(), start).unwrap();
        let state = toast.state();
        assert_eq!(state.phase, Phase::Entering);
        assert!(!state.expanded);
        assert!(!state.content_visible);
        assert_eq!(state.offset, -100.0);
        assert_eq!(toast.next_deadline(), Some(start + ms(100)));
    }

    #[test]
    fn test_top_timeline() {
        let start = Instant::now();
        let (toast, log) = recorded(Toast::new(ToastConfig::default()));
        let mut toast = toast.start(start).unwrap();

        assert!(!toast.update(start + ms(99)));
        assert_eq!(toast.phase(), Phase::Entering);

        assert!(toast.update(start + ms(100)));
        assert_eq!(toast.phase(), Phase::Holding);

        toast.update(start + ms(2099));
        assert_eq!(toast.phase(), Phase::Holding);
        toast.update(start + ms(2100));
        assert_eq!(toast.phase(), Phase::Collapsing);

        toast.update(start + ms(2249));
        assert_eq!(toast.phase(), Phase::Collapsing);
        toast.update(start + ms(2250));
        assert_eq!(toast.phase(), Phase::Complete);
        assert_eq!(toast.completed_at(), Some(toast.scheduled_completion()));

        let phases: Vec<Phase> = log.borrow().iter().map(|s| s.phase).collect();
        assert_eq!(phases, Phase::ALL);
    }

    #[test]
    fn test_scheduled_completion_per_edge() {
        let start = Instant::now();
        let top = ToastController::start(ToastConfig::default(), start).unwrap();
        let bottom = ToastController::start(
            ToastConfig::default()
                .with_edge(ToastEdge::Bottom)
                .with_hold_duration_ms(500),
            start,
        )
        .unwrap();
        assert_eq!(top.scheduled_completion(), start + ms(2250));
        assert_eq!(bottom.scheduled_completion(), start + ms(330 + 500 + 330));
    }

    #[test]
    fn test_bottom_timeline_offsets_positive() {
        let start = Instant::now();
        let config = ToastConfig::default().with_edge(ToastEdge::Bottom);
        let mut toast = ToastController::start(config, start).unwrap();
        assert_eq!(toast.state().offset, 100.0);

        toast.update(start + ms(329));
        assert_eq!(toast.phase(), Phase::Entering);
        toast.update(start + ms(330));
        assert_eq!(toast.phase(), Phase::Holding);
        assert_eq!(toast.state().offset, 0.0);
        toast.update(start + ms(2660));
        assert!(toast.is_complete());
        assert_eq!(toast.state().offset, 100.0);
    }

    #[test]
    fn test_late_tick_visits_every_phase() {
        let start = Instant::now();
        let (toast, log) = recorded(Toast::new(ToastConfig::default()));
        let mut toast = toast.start(start).unwrap();

        toast.update(start + ms(10_000));
        assert!(toast.is_complete());
        // Scheduled time, not tick time
        assert_eq!(toast.completed_at(), Some(start + ms(2250)));
        let phases: Vec<Phase> = log.borrow().iter().map(|s| s.phase).collect();
        assert_eq!(phases, Phase::ALL);
    }

    #[test]
    fn test_zero_hold() {
        let start = Instant::now();
        let config = ToastConfig::default().with_hold_duration_ms(0);
        let (toast, log) = recorded(Toast::new(config));
        let mut toast = toast.start(start).unwrap();
        toast.update(start + ms(100));
        assert_eq!(toast.phase(), Phase::Collapsing);
        assert_eq!(log.borrow().len(), 4);
    }

    #[test]
    fn test_complete_fires_once() {
        let start = Instant::now();
        let fired = Rc::new(Cell::new(0));
        let counter = Rc::clone(&fired);
        let mut toast = Toast::new(ToastConfig::default())
            .on_complete(move || counter.set(counter.get() + 1))
            .start(start)
            .unwrap();

        toast.update(start + ms(2250));
        toast.update(start + ms(5000));
        assert!(!toast.cancel(start + ms(5001)));
        assert_eq!(fired.get(), 1);
    }

    #[test]
    fn test_on_complete_after_completion_runs_immediately() {
        let start = Instant::now();
        let mut toast = ToastController::start(ToastConfig::default(), start).unwrap();
        toast.update(start + ms(3000));

        let fired = Rc::new(Cell::new(false));
        let flag = Rc::clone(&fired);
        toast.on_complete(move || flag.set(true));
        assert!(fired.get());
    }

    #[test]
    fn test_cancel_from_holding() {
        let start = Instant::now();
        let (toast, log) = recorded(Toast::new(ToastConfig::default()));
        let mut toast = toast.start(start).unwrap();
        toast.update(start + ms(500));
        assert_eq!(toast.phase(), Phase::Holding);

        assert!(toast.cancel(start + ms(600)));
        let state = toast.state();
        assert_eq!(state.phase, Phase::Complete);
        assert!(!state.expanded);
        assert!(!state.content_visible);
        assert_eq!(state.offset, -100.0);
        assert_eq!(toast.next_deadline(), None);

        // Inert afterwards
        let notified = log.borrow().len();
        assert!(!toast.cancel(start + ms(700)));
        assert!(!toast.update(start + ms(10_000)));
        assert_eq!(log.borrow().len(), notified);
    }

    #[test]
    fn test_invalid_config_fires_nothing() {
        let fired = Rc::new(Cell::new(false));
        let (a, b) = (Rc::clone(&fired), Rc::clone(&fired));
        let result = Toast::new(ToastConfig::default().with_hold_duration_ms(-1))
            .on_state_change(move |_| a.set(true))
            .on_complete(move || b.set(true))
            .start(Instant::now());

        assert_eq!(
            result.unwrap_err(),
            ToastError::InvalidConfig {
                hold_duration_ms: -1
            }
        );
        assert!(!fired.get());
    }

    #[test]
    fn test_haptic_at_holding_entry() {
        let start = Instant::now();
        let pulses = Rc::new(RefCell::new(Vec::new()));
        let phase_seen = Rc::new(Cell::new(Phase::Entering));

        let sink = Rc::clone(&pulses);
        let seen = Rc::clone(&phase_seen);
        let watcher = Rc::clone(&phase_seen);
        let mut toast = Toast::new(ToastConfig::error("Upload failed"))
            .on_state_change(move |state| watcher.set(state.phase))
            .haptics(move |pattern: &HapticPattern| -> Result<(), HapticError> {
                sink.borrow_mut().push((seen.get(), *pattern));
                Ok(())
            })
            .start(start)
            .unwrap();

        assert!(pulses.borrow().is_empty());
        toast.update(start + ms(100));
        toast.update(start + ms(3000));

        // Observers already know the toast is holding when the pulse goes out
        let pulses = pulses.borrow();
        assert_eq!(pulses.len(), 1);
        assert_eq!(pulses[0].0, Phase::Holding);
        assert_eq!(pulses[0].1, HapticPattern::ERROR_PULSE);
    }

    #[test]
    fn test_no_haptic_for_success_or_when_disabled() {
        let start = Instant::now();
        for config in [
            ToastConfig::success("ok"),
            ToastConfig::error("nope").with_haptic_on_error(false),
        ] {
            let pulses = Rc::new(Cell::new(0));
            let counter = Rc::clone(&pulses);
            let mut toast = Toast::new(config)
                .haptics(move |_: &HapticPattern| -> Result<(), HapticError> {
                    counter.set(counter.get() + 1);
                    Ok(())
                })
                .start(start)
                .unwrap();
            toast.update(start + ms(5000));
            assert_eq!(pulses.get(), 0);
        }
    }

    #[test]
    fn test_haptic_failure_does_not_stop_sequence() {
        let start = Instant::now();
        let mut toast = Toast::new(ToastConfig::error("nope"))
            .haptics(|_: &HapticPattern| -> Result<(), HapticError> {
                Err(HapticError::Device("no motor".into()))
            })
            .start(start)
            .unwrap();
        toast.update(start + ms(100));
        assert_eq!(toast.phase(), Phase::Holding);
        toast.update(start + ms(2250));
        assert!(toast.is_complete());
    }

    #[test]
    fn test_frame_geometry() {
        let start = Instant::now();
        let config = ToastConfig::default().with_width(Some(300.0));
        let mut toast = ToastController::start(config, start).unwrap();

        let entering = toast.frame(start, 400.0);
        assert_eq!(entering.size, Vec2::splat(30.0));
        assert_eq!(entering.offset, -100.0);
        assert_eq!(entering.shape, ToastShape::Dot);

        toast.update(start + ms(100));
        let holding = toast.frame(start + ms(1000), 400.0);
        assert_eq!(holding.size, Vec2::new(300.0, 60.0));
        assert_eq!(holding.offset, 0.0);
        assert_eq!(holding.shape, ToastShape::Rounded { radius: 12.0 });
        assert!(holding.shows_content());
        assert_eq!(holding.message, "Success");

        toast.update(start + ms(2250));
        let settled = start + ms(2250) + ms(300);
        let exited = toast.frame(settled, 400.0);
        assert_eq!(exited.size, Vec2::splat(30.0));
        assert_eq!(exited.offset, -100.0);
        assert!(toast.is_settled(settled));
    }

    #[test]
    fn test_error_toast_without_device_runs_to_completion() {
        let start = Instant::now();
        let mut toast = ToastController::start(ToastConfig::error("Offline"), start).unwrap();
        toast.update(start + ms(100));
        assert_eq!(toast.phase(), Phase::Holding);
        toast.update(start + ms(2250));
        assert!(toast.is_complete());
    }

    #[test]
    fn test_shared_haptics_observed_by_host() {
        use crate::capability::SharedHaptics;

        let start = Instant::now();
        let pulses = Rc::new(Cell::new(0));
        let counter = Rc::clone(&pulses);
        let host = SharedHaptics::new(move |_: &HapticPattern| -> Result<(), HapticError> {
            counter.set(counter.get() + 1);
            Ok(())
        });

        let mut first = Toast::new(ToastConfig::error("a"))
            .haptics(host.clone())
            .start(start)
            .unwrap();
        let mut second = Toast::new(ToastConfig::error("b"))
            .haptics(host.clone())
            .start(start)
            .unwrap();
        first.update(start + ms(3000));
        second.update(start + ms(3000));
        assert_eq!(pulses.get(), 2);
    }

    #[test]
    fn test_message_color_override() {
        use crate::color::{palette, Color};

        let start = Instant::now();
        let picked = ToastController::start(ToastConfig::success("ok"), start).unwrap();
        assert_eq!(
            picked.frame(start, 320.0).message_color,
            message_color_on(palette::SUCCESS)
        );

        let custom = Color::rgba(0.1, 0.2, 0.3, 1.0);
        let toast = ToastController::start(
            ToastConfig::success("ok").with_message_color(Some(custom)),
            start,
        )
        .unwrap();
        assert_eq!(toast.frame(start, 320.0).message_color, custom);
    }

    #[test]
    fn test_frame_fills_available_width() {
        let start = Instant::now();
        let mut toast = ToastController::start(ToastConfig::default(), start).unwrap();
        toast.update(start + ms(100));
        let frame = toast.frame(start + ms(500), 360.0);
        assert_eq!(frame.size.x, 360.0);
    }

    #[test]
    fn test_paint_hands_frame_to_renderer() {
        let start = Instant::now();
        let toast = ToastController::start(ToastConfig::error("Oops"), start).unwrap();
        let mut painted = Vec::new();
        let mut renderer = |frame: &ToastFrame<'_>| painted.push(frame.message.to_owned());
        toast.paint(start, 400.0, &mut renderer);
        assert_eq!(painted, vec!["Oops".to_owned()]);
    }
}
