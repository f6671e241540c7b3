//! The scaffold: navigation and drawer wired together behind one surface.
//!
//! Every mutation of shell state goes through here. The scaffold:
//! - owns the [`Navigator`] and the [`Drawer`],
//! - suppresses no-ops before they reach either one,
//! - publishes each actual change to subscribed observers exactly once,
//! - composes the two on drawer item activation (route first, then put
//!   the drawer away, so observers see the changes in that order).
//!
//! The scaffold does NOT render anything and does NOT own a clock. The
//! frame loop calls [`Scaffold::tick`] with elapsed time and draws from
//! the read accessors.

use std::time::Duration;

use crate::drawer::{Drawer, DrawerState, DEFAULT_TRAVEL};
use crate::navigator::Navigator;
use crate::observer::ShellObserver;
use crate::screen::Screen;

pub struct Scaffold {
    navigator: Navigator,
    drawer: Drawer,
    observers: Vec<Box<dyn ShellObserver>>,
}

impl Scaffold {
    /// Shell starting on `start` with a drawer that takes `drawer_travel`
    /// to slide its full distance.
    pub fn new(start: Screen, drawer_travel: Duration) -> Self {
        Self {
            navigator: Navigator::new(start),
            drawer: Drawer::new(drawer_travel),
            observers: Vec::new(),
        }
    }

    /// Start screen, default travel time.
    pub fn with_defaults() -> Self {
        Self::new(Screen::Start, DEFAULT_TRAVEL)
    }

    // ── Observation ────────────────────────────────────────────────────

    /// Register an observer. Observers are notified in subscription order
    /// and stay subscribed for the scaffold's lifetime.
    pub fn subscribe(&mut self, observer: Box<dyn ShellObserver>) {
        self.observers.push(observer);
    }

    fn publish_screen(&self, from: Screen, to: Screen) {
        for observer in &self.observers {
            observer.on_screen_changed(from, to);
        }
    }

    fn publish_drawer(&self, state: DrawerState) {
        for observer in &self.observers {
            observer.on_drawer_changed(state);
        }
    }

    // ── Read accessors ─────────────────────────────────────────────────

    pub fn current_screen(&self) -> Screen {
        self.navigator.current()
    }

    pub fn can_go_back(&self) -> bool {
        self.navigator.can_go_back()
    }

    pub fn back_stack(&self) -> &[Screen] {
        self.navigator.back_stack()
    }

    pub fn drawer_state(&self) -> DrawerState {
        self.drawer.state()
    }

    pub fn drawer_openness(&self) -> f32 {
        self.drawer.openness()
    }

    // ── Navigation ─────────────────────────────────────────────────────

    /// Route to `target`. Returns `false` (publishing nothing) when
    /// `target` is already the active screen.
    pub fn navigate_to(&mut self, target: Screen) -> bool {
        let from = self.navigator.current();
        if !self.navigator.navigate(target) {
            return false;
        }
        self.publish_screen(from, target);
        true
    }

    /// Pop the back-stack. Returns `false` (publishing nothing) at the
    /// root.
    pub fn go_back(&mut self) -> bool {
        let from = self.navigator.current();
        if !self.navigator.back() {
            return false;
        }
        self.publish_screen(from, self.navigator.current());
        true
    }

    // ── Drawer ─────────────────────────────────────────────────────────

    /// Start sliding the drawer open. No-op while open or opening.
    pub fn open_drawer(&mut self) {
        if self.drawer.open() {
            self.publish_drawer(self.drawer.state());
        }
    }

    /// Start sliding the drawer closed. No-op while closed or closing.
    pub fn close_drawer(&mut self) {
        if self.drawer.close() {
            self.publish_drawer(self.drawer.state());
        }
    }

    /// Reverse the drawer's direction of travel.
    pub fn toggle_drawer(&mut self) {
        if self.drawer.toggle() {
            self.publish_drawer(self.drawer.state());
        }
    }

    /// A drawer item was activated: route to `target`, then put the
    /// drawer away. Observers see the screen change (if any) before the
    /// drawer's `Closing` notification. Selecting the active screen still
    /// closes the drawer.
    pub fn select_destination(&mut self, target: Screen) {
        self.navigate_to(target);
        self.close_drawer();
    }

    // ── Frame tick ─────────────────────────────────────────────────────

    /// Advance the drawer animation by `dt`; publishes the settled state
    /// on the tick that completes a transition.
    pub fn tick(&mut self, dt: Duration) {
        if let Some(settled) = self.drawer.advance(dt) {
            self.publish_drawer(settled);
        }
    }
}

impl Default for Scaffold {
    fn default() -> Self {
        Self::with_defaults()
    }
}
