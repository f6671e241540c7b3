//! Navdrawer Core: screen routing, drawer coordination, observation seam.
//!
//! This crate contains the shell state for the navigation drawer demo:
//! - Closed set of screen identifiers
//! - Navigator with a back-stack (current screen is never on the stack)
//! - Drawer state machine with a tick-driven slide animation
//! - Observer trait for pushing state changes to a presentation layer
//! - Scaffold composing all of the above behind one mutation surface
//!
//! Nothing in this crate draws, blocks, or spawns. The presentation layer
//! owns the frame loop and calls in with input and elapsed time.

pub mod drawer;
pub mod navigator;
pub mod observer;
pub mod scaffold;
pub mod screen;
