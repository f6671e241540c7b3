//! Observation seam between shell state and whatever presents it.
//!
//! The scaffold publishes every actual state change through this trait.
//! Reads stay pull-based (the render loop queries state each frame);
//! observers exist for the push side: status surfaces, event logs, tests
//! asserting on ordering. The shell is single-threaded, so observers are
//! called inline from the mutating call and need not be `Send`; an
//! implementation that forwards into a channel is the bridge to anything
//! that is not.

use crate::drawer::DrawerState;
use crate::screen::Screen;

/// Callback surface for shell state changes.
///
/// Suppressed no-ops (navigating to the active screen, opening an open
/// drawer) are never reported. Whatever arrives here really happened.
pub trait ShellObserver {
    /// Called when the active screen changes from `from` to `to`.
    fn on_screen_changed(&self, from: Screen, to: Screen);

    /// Called when the drawer enters `state`. Both transition starts
    /// (`Opening`, `Closing`) and settlements (`Open`, `Closed`) arrive
    /// here, so the last call always names the drawer's current state.
    fn on_drawer_changed(&self, state: DrawerState);
}
