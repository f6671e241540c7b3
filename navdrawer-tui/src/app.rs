//! Application state: single-owner, main-thread only.
//!
//! Core shell state (active screen, back-stack, drawer) lives in the
//! scaffold and is only mutated through it. What this struct adds is
//! presentation state: the drawer cursor, the active overlay, the status
//! line, and the shell event history behind the event log overlay.

use std::collections::VecDeque;
use std::sync::mpsc::{self, Receiver};

use navdrawer_core::drawer::DrawerState;
use navdrawer_core::scaffold::Scaffold;

use crate::config::Config;
use crate::events::{ChannelObserver, EventRecord, ShellEvent};

/// Which overlay is on top.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    None,
    Welcome,
    EventLog,
}

/// Cap on retained shell events.
pub const EVENT_HISTORY_CAP: usize = 50;

pub struct AppState {
    /// Core shell state. Every navigation and drawer mutation goes
    /// through here so observers hear about it.
    pub scaffold: Scaffold,
    /// Receiving end of the channel observer subscribed on the scaffold.
    pub shell_rx: Receiver<ShellEvent>,
    /// Cursor over the drawer's destination list.
    pub drawer_cursor: usize,
    /// Active overlay.
    pub overlay: Overlay,
    /// Last status line content.
    pub status_message: Option<String>,
    /// Recent shell events, newest first, capped at [`EVENT_HISTORY_CAP`].
    pub event_history: VecDeque<EventRecord>,
    /// Scroll offset in the event log overlay.
    pub event_scroll: usize,
    /// Main loop liveness.
    pub running: bool,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        let (tx, rx) = mpsc::channel();
        let mut scaffold = Scaffold::new(config.start_screen, config.drawer_travel());
        scaffold.subscribe(Box::new(ChannelObserver::new(tx)));

        Self {
            scaffold,
            shell_rx: rx,
            drawer_cursor: config.start_screen.index(),
            overlay: Overlay::Welcome,
            status_message: None,
            event_history: VecDeque::new(),
            event_scroll: 0,
            running: true,
        }
    }

    /// Whether the drawer owns list-navigation keys right now. True from
    /// the moment it starts opening until it starts closing.
    pub fn drawer_captures_input(&self) -> bool {
        matches!(
            self.scaffold.drawer_state(),
            DrawerState::Open | DrawerState::Opening
        )
    }

    /// Set the status line.
    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some(msg.into());
    }

    /// Record one shell event: status line plus history entry.
    pub fn push_event(&mut self, event: ShellEvent) {
        self.set_status(event.describe());
        self.event_history.push_front(EventRecord::new(event));
        if self.event_history.len() > EVENT_HISTORY_CAP {
            self.event_history.pop_back();
        }
    }

    /// Drain everything the scaffold published since the last frame.
    pub fn drain_shell_events(&mut self) {
        while let Ok(event) = self.shell_rx.try_recv() {
            self.push_event(event);
        }
    }
}
