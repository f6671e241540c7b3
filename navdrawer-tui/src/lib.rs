//! Navdrawer TUI - terminal shell for the navigation drawer demo
//!
//! Provides the full presentation layer over `navdrawer-core`:
//! - Top app bar with menu affordance and back hint
//! - Drawer sheet that slides over the screen host
//! - Three placeholder screens behind a back-stack
//! - Status bar and shell event log fed by the observer channel

pub mod app;
pub mod config;
pub mod events;
pub mod input;
pub mod theme;
pub mod ui;

pub use app::{AppState, Overlay};
pub use config::Config;
pub use events::{ChannelObserver, ShellEvent};
