//! Shell event plumbing between the scaffold and the frame loop.
//!
//! The scaffold publishes state changes through the `ShellObserver`
//! trait. The TUI's implementation forwards each notification into an
//! mpsc channel; the frame loop drains the channel once per frame and
//! turns events into status line text and event log records.

use std::sync::mpsc::Sender;

use chrono::NaiveDateTime;

use navdrawer_core::drawer::DrawerState;
use navdrawer_core::observer::ShellObserver;
use navdrawer_core::screen::Screen;

/// A state change on its way from the scaffold to the frame loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellEvent {
    ScreenChanged { from: Screen, to: Screen },
    DrawerChanged(DrawerState),
}

impl ShellEvent {
    /// One-line description for the status bar and the event log.
    pub fn describe(&self) -> String {
        match self {
            ShellEvent::ScreenChanged { from, to } => {
                format!("navigated {} -> {}", from.label(), to.label())
            }
            ShellEvent::DrawerChanged(state) => format!("drawer {}", state.label()),
        }
    }
}

/// ShellObserver implementation that sends events through a channel.
pub struct ChannelObserver {
    tx: Sender<ShellEvent>,
}

impl ChannelObserver {
    pub fn new(tx: Sender<ShellEvent>) -> Self {
        Self { tx }
    }
}

impl ShellObserver for ChannelObserver {
    fn on_screen_changed(&self, from: Screen, to: Screen) {
        let _ = self.tx.send(ShellEvent::ScreenChanged { from, to });
    }

    fn on_drawer_changed(&self, state: DrawerState) {
        let _ = self.tx.send(ShellEvent::DrawerChanged(state));
    }
}

/// An event record for the event log overlay.
#[derive(Debug, Clone)]
pub struct EventRecord {
    pub timestamp: NaiveDateTime,
    pub event: ShellEvent,
}

impl EventRecord {
    pub fn new(event: ShellEvent) -> Self {
        Self {
            timestamp: chrono::Local::now().naive_local(),
            event,
        }
    }
}
