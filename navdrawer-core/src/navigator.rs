//! Navigation history: the active screen plus the back-stack behind it.
//!
//! The stack holds only previous screens. The active screen is never on
//! the stack, so an empty stack means the user is at the root and a back
//! press has nothing to do.

use crate::screen::Screen;

/// Tracks the active screen and the ordered history of screens behind it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigator {
    current: Screen,
    stack: Vec<Screen>,
}

impl Navigator {
    /// Start at `root` with an empty back-stack.
    pub fn new(root: Screen) -> Self {
        Self {
            current: root,
            stack: Vec::new(),
        }
    }

    /// The active screen.
    pub fn current(&self) -> Screen {
        self.current
    }

    /// Whether a back press would change anything.
    pub fn can_go_back(&self) -> bool {
        !self.stack.is_empty()
    }

    /// Previously visited screens, oldest first.
    pub fn back_stack(&self) -> &[Screen] {
        &self.stack
    }

    /// Make `target` the active screen, remembering the one it replaces.
    ///
    /// Navigating to the screen that is already active is a no-op and
    /// returns `false`; the stack never gains an entry equal to the screen
    /// pushed on top of it.
    pub fn navigate(&mut self, target: Screen) -> bool {
        if target == self.current {
            return false;
        }
        self.stack.push(self.current);
        self.current = target;
        true
    }

    /// Pop the most recent screen and make it active again.
    ///
    /// Returns `false` at the root, leaving the state unchanged.
    pub fn back(&mut self) -> bool {
        match self.stack.pop() {
            Some(previous) => {
                self.current = previous;
                true
            }
            None => false,
        }
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new(Screen::Start)
    }
}
