//! Per-edge timing constants
//!
//! Top and bottom toasts run the same sequence; only these numbers differ.

use std::time::Duration;

use crate::config::ToastEdge;
use crate::transition::{fast_out_slow_in, linear, Transition};

/// Distance of the off-screen anchor from the resting position
pub const SLIDE_DISTANCE: f32 = 100.0;

/// Timing and motion constants for one edge
#[derive(Debug, Clone, Copy)]
pub struct EdgeTiming {
    /// Time spent in `Entering` before the toast expands
    pub entry_delay: Duration,
    /// Time spent in `Collapsing` before the toast exits
    pub collapse_delay: Duration,
    /// Signed off-screen offset: negative above a top anchor, positive below a bottom one
    pub off_offset: f32,
    /// Width animation between dot and rectangle
    pub grow_width: Transition,
    /// Height animation between dot and rectangle
    pub grow_height: Transition,
    /// Slide in and slide out
    pub slide: Transition,
}

static TOP: EdgeTiming = EdgeTiming {
    entry_delay: Duration::from_millis(100),
    collapse_delay: Duration::from_millis(150),
    off_offset: -SLIDE_DISTANCE,
    grow_width: Transition::new(Duration::from_millis(200), fast_out_slow_in),
    grow_height: Transition::new(Duration::from_millis(300), fast_out_slow_in),
    slide: Transition::new(Duration::from_millis(200), linear),
};

static BOTTOM: EdgeTiming = EdgeTiming {
    entry_delay: Duration::from_millis(330),
    collapse_delay: Duration::from_millis(330),
    off_offset: SLIDE_DISTANCE,
    grow_width: Transition::new(Duration::from_millis(300), fast_out_slow_in),
    grow_height: Transition::new(Duration::from_millis(300), fast_out_slow_in),
    slide: Transition::new(Duration::from_millis(200), linear),
};

impl EdgeTiming {
    /// Lookup the constants for an edge
    pub fn for_edge(edge: ToastEdge) -> &'static EdgeTiming {
        match edge {
            ToastEdge::Top => &TOP,
            ToastEdge::Bottom => &BOTTOM,
        }
    }

    /// Time from start until `Complete` for a given hold duration
    pub fn time_to_complete(&self, hold: Duration) -> Duration {
        self.entry_delay + hold + self.collapse_delay
    }
}
