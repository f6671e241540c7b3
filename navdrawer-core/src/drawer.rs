//! Drawer state machine: a side panel that slides open and closed over time.
//!
//! The drawer models the Closed → Opening → Open → Closing → Closed cycle
//! with a single pair of numbers: how far the panel has travelled
//! (`openness`, 0.0 to 1.0) and where it is headed (`target`, exactly 0.0
//! or 1.0). The four observable states are derived from that pair. Two
//! things hold as a result:
//!
//! - Commands are fire-and-forget. `open` and `close` only set the target;
//!   the panel moves when [`Drawer::advance`] is called from the frame loop.
//! - A command opposing an in-flight transition reverses it from the
//!   panel's current position. No command is ever lost and the panel never
//!   jumps.
//!
//! The drawer does NOT know what it covers or how it is drawn. Rendering
//! reads [`Drawer::openness`] each frame and sizes the sheet itself.

use std::time::Duration;

/// Default full-travel time for the slide animation.
pub const DEFAULT_TRAVEL: Duration = Duration::from_millis(250);

/// Observable drawer state. `Opening` and `Closing` are the in-flight
/// halves of the slide; `Closed` and `Open` are settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawerState {
    Closed,
    Opening,
    Open,
    Closing,
}

impl DrawerState {
    pub fn is_settled(self) -> bool {
        matches!(self, DrawerState::Closed | DrawerState::Open)
    }

    /// Lowercase name for status lines and logs.
    pub fn label(self) -> &'static str {
        match self {
            DrawerState::Closed => "closed",
            DrawerState::Opening => "opening",
            DrawerState::Open => "open",
            DrawerState::Closing => "closing",
        }
    }
}

/// The sliding side panel.
#[derive(Debug, Clone, PartialEq)]
pub struct Drawer {
    /// How far the panel has slid out: 0.0 (fully closed) to 1.0 (fully open).
    openness: f32,
    /// Where the panel is headed: exactly 0.0 or 1.0.
    target: f32,
    /// Full-travel time. Zero makes the next `advance` snap to the target.
    travel: Duration,
}

impl Drawer {
    /// A closed drawer that takes `travel` to slide its full distance.
    pub fn new(travel: Duration) -> Self {
        Self {
            openness: 0.0,
            target: 0.0,
            travel,
        }
    }

    // ── Observation ────────────────────────────────────────────────────

    /// Current position of the panel, 0.0 to 1.0.
    pub fn openness(&self) -> f32 {
        self.openness
    }

    /// Derive the observable state from position and direction of travel.
    pub fn state(&self) -> DrawerState {
        if self.target > 0.5 {
            if self.openness >= 1.0 {
                DrawerState::Open
            } else {
                DrawerState::Opening
            }
        } else if self.openness <= 0.0 {
            DrawerState::Closed
        } else {
            DrawerState::Closing
        }
    }

    pub fn is_animating(&self) -> bool {
        !self.state().is_settled()
    }

    // ── Commands ───────────────────────────────────────────────────────

    /// Head for fully open. Returns `true` when this call changed the
    /// direction of travel (a no-op while already open or opening).
    pub fn open(&mut self) -> bool {
        if self.target == 1.0 {
            return false;
        }
        self.target = 1.0;
        true
    }

    /// Head for fully closed. Returns `true` when this call changed the
    /// direction of travel (a no-op while already closed or closing).
    pub fn close(&mut self) -> bool {
        if self.target == 0.0 {
            return false;
        }
        self.target = 0.0;
        true
    }

    /// `close` when heading open, `open` when heading closed. Always
    /// changes the direction of travel, so always returns `true`.
    pub fn toggle(&mut self) -> bool {
        if self.target > 0.5 {
            self.close()
        } else {
            self.open()
        }
    }

    // ── Animation ──────────────────────────────────────────────────────

    /// Move the panel toward its target by `dt` worth of travel.
    ///
    /// Returns the settled state exactly once, on the call that completes
    /// a transition. Returns `None` while mid-flight or already settled,
    /// so the caller can publish settlement without tracking edges itself.
    pub fn advance(&mut self, dt: Duration) -> Option<DrawerState> {
        if self.openness == self.target {
            return None;
        }
        let step = if self.travel.is_zero() {
            1.0
        } else {
            dt.as_secs_f32() / self.travel.as_secs_f32()
        };
        if step <= 0.0 {
            return None;
        }
        if self.target > self.openness {
            self.openness = (self.openness + step).min(self.target);
        } else {
            self.openness = (self.openness - step).max(self.target);
        }
        if self.openness == self.target {
            Some(self.state())
        } else {
            None
        }
    }
}

impl Default for Drawer {
    fn default() -> Self {
        Self::new(DEFAULT_TRAVEL)
    }
}
