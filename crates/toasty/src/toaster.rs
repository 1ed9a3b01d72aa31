//! Registry for several toasts at once
//!
//! Each toast keeps its own controller and timeline; the registry only hands
//! out handles and forwards the frame clock. Nothing is shared between
//! entries, so one toast can never disturb another.

use std::collections::BTreeMap;
use std::time::Instant;

use crate::capability::Renderer;
use crate::controller::{Toast, ToastController};
use crate::error::ToastError;
use crate::frame::ToastFrame;
use crate::phase::ToastState;

/// Handle to a toast inside a [`Toaster`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(u64);

impl ToastId {
    pub fn raw(self) -> u64 {
        self.0
    }
}

/// Drives any number of independent toasts from one frame loop
///
/// Call [`Toaster::begin_frame`] (or [`Toaster::update`] with an explicit
/// instant) once per frame. Toasts that have completed and finished their
/// exit animation are dropped during the update.
pub struct Toaster {
    toasts: BTreeMap<ToastId, ToastController>,
    next_id: u64,
    current_time: Instant,
}

impl Toaster {
    pub fn new() -> Self {
        Self::with_time(Instant::now())
    }

    /// Registry whose clock starts at `now`
    pub fn with_time(now: Instant) -> Self {
        Self {
            toasts: BTreeMap::new(),
            next_id: 0,
            current_time: now,
        }
    }

    pub fn current_time(&self) -> Instant {
        self.current_time
    }

    /// Start a toast now
    ///
    /// The toast's timeline is anchored at `Instant::now()`, not at the last
    /// frame, so a registry that sat idle does not start toasts in the past.
    pub fn start(&mut self, toast: Toast) -> Result<ToastId, ToastError> {
        self.start_at(toast, Instant::now())
    }

    /// Start a toast whose timeline begins at `now`
    ///
    /// For hosts that drive [`Toaster::update`] from their own clock.
    pub fn start_at(&mut self, toast: Toast, now: Instant) -> Result<ToastId, ToastError> {
        let controller = toast.start(now)?;
        self.current_time = self.current_time.max(now);
        let id = ToastId(self.next_id);
        self.next_id += 1;
        log::debug!("toaster: {:?} started", id);
        self.toasts.insert(id, controller);
        Ok(id)
    }

    pub fn get(&self, id: ToastId) -> Option<&ToastController> {
        self.toasts.get(&id)
    }

    pub fn state(&self, id: ToastId) -> Option<ToastState> {
        self.get(id).map(ToastController::state)
    }

    /// Returns false if `id` is no longer tracked
    pub fn on_state_change(
        &mut self,
        id: ToastId,
        listener: impl FnMut(&ToastState) + 'static,
    ) -> bool {
        match self.toasts.get_mut(&id) {
            Some(toast) => {
                toast.on_state_change(listener);
                true
            }
            None => false,
        }
    }

    /// Returns false if `id` is no longer tracked; the listener is dropped unrun
    pub fn on_complete(&mut self, id: ToastId, listener: impl FnOnce() + 'static) -> bool {
        match self.toasts.get_mut(&id) {
            Some(toast) => {
                toast.on_complete(listener);
                true
            }
            None => false,
        }
    }

    /// Cancel a toast. A no-op for completed or unknown handles.
    pub fn cancel(&mut self, id: ToastId) -> bool {
        let now = self.current_time;
        self.toasts
            .get_mut(&id)
            .is_some_and(|toast| toast.cancel(now))
    }

    /// Cancel every running toast
    pub fn cancel_all(&mut self) {
        let now = self.current_time;
        for toast in self.toasts.values_mut() {
            toast.cancel(now);
        }
    }

    /// Update the clock to `Instant::now()` and advance all toasts
    pub fn begin_frame(&mut self) {
        self.update(Instant::now());
    }

    /// Advance all toasts to `now` and drop settled ones
    pub fn update(&mut self, now: Instant) {
        self.current_time = now;
        for toast in self.toasts.values_mut() {
            toast.update(now);
        }
        self.toasts.retain(|id, toast| {
            let keep = !toast.is_settled(now);
            if !keep {
                log::trace!("toaster: {:?} settled", id);
            }
            keep
        });
    }

    /// Earliest pending phase deadline across all toasts
    pub fn next_deadline(&self) -> Option<Instant> {
        self.toasts
            .values()
            .filter_map(ToastController::next_deadline)
            .min()
    }

    /// Whether anything is still moving, so the host should keep redrawing
    pub fn is_animating(&self) -> bool {
        !self.toasts.is_empty()
    }

    /// Frames for every tracked toast, oldest first
    pub fn frames(&self, available_width: f32) -> Vec<(ToastId, ToastFrame<'_>)> {
        let now = self.current_time;
        self.toasts
            .iter()
            .map(|(id, toast)| (*id, toast.frame(now, available_width)))
            .collect()
    }

    /// Paint every tracked toast, oldest first
    pub fn paint(&self, available_width: f32, renderer: &mut dyn Renderer) {
        for toast in self.toasts.values() {
            toast.paint(self.current_time, available_width, renderer);
        }
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

impl Default for Toaster {
    fn default() -> Self {
        Self::new()
    }
}
