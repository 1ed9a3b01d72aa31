//! Lifecycle phases and the state snapshot observers receive

/// Stage of a toast's one-shot lifecycle, in the order they are visited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Phase {
    /// Sliding in as a dot
    Entering,
    /// Grow animation triggered; content not yet shown
    Expanding,
    /// Expanded with message and icon visible
    Holding,
    /// Shrinking back to a dot
    Collapsing,
    /// Sliding out. Terminal: nothing changes after this.
    Complete,
}

impl Phase {
    /// All phases in lifecycle order
    pub const ALL: [Phase; 5] = [
        Phase::Entering,
        Phase::Expanding,
        Phase::Holding,
        Phase::Collapsing,
        Phase::Complete,
    ];

    /// Phase that follows this one, `None` for `Complete`
    pub fn next(self) -> Option<Phase> {
        match self {
            Phase::Entering => Some(Phase::Expanding),
            Phase::Expanding => Some(Phase::Holding),
            Phase::Holding => Some(Phase::Collapsing),
            Phase::Collapsing => Some(Phase::Complete),
            Phase::Complete => None,
        }
    }

    pub fn is_terminal(self) -> bool {
        self == Phase::Complete
    }
}

/// Snapshot of a toast's presentation state
///
/// Owned and mutated by the controller only. `offset` is the anchor of the
/// current phase relative to the resting position: off-screen while entering
/// and once complete, zero otherwise. The eased position lives in
/// [`crate::ToastFrame`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToastState {
    pub phase: Phase,
    /// Large rounded shape when true, small dot when false
    pub expanded: bool,
    /// Message and icon visible; implies `expanded`
    pub content_visible: bool,
    pub offset: f32,
}

impl ToastState {
    /// State a toast starts in: a dot parked off-screen
    pub fn entering(off_offset: f32) -> Self {
        Self {
            phase: Phase::Entering,
            expanded: false,
            content_visible: false,
            offset: off_offset,
        }
    }

    /// Entry values for `phase`
    pub fn for_phase(phase: Phase, off_offset: f32) -> Self {
        match phase {
            Phase::Entering => Self::entering(off_offset),
            Phase::Expanding => Self {
                phase,
                expanded: true,
                content_visible: false,
                offset: 0.0,
            },
            Phase::Holding => Self {
                phase,
                expanded: true,
                content_visible: true,
                offset: 0.0,
            },
            Phase::Collapsing => Self {
                phase,
                expanded: false,
                content_visible: false,
                offset: 0.0,
            },
            Phase::Complete => Self {
                phase,
                expanded: false,
                content_visible: false,
                offset: off_offset,
            },
        }
    }
}
