//! Screen identifiers. The set of destinations is closed: a route that
//! does not exist cannot be represented, so there is no "unknown route"
//! failure path at runtime.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A navigation destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Screen {
    Start,
    Page1,
    Page2,
}

impl Screen {
    /// Every destination, in drawer order.
    pub const ALL: [Screen; 3] = [Screen::Start, Screen::Page1, Screen::Page2];

    pub fn index(self) -> usize {
        match self {
            Screen::Start => 0,
            Screen::Page1 => 1,
            Screen::Page2 => 2,
        }
    }

    pub fn from_index(i: usize) -> Option<Self> {
        match i {
            0 => Some(Screen::Start),
            1 => Some(Screen::Page1),
            2 => Some(Screen::Page2),
            _ => None,
        }
    }

    /// Human-readable name, as shown on the drawer item.
    pub fn label(self) -> &'static str {
        match self {
            Screen::Start => "Start",
            Screen::Page1 => "Page 1",
            Screen::Page2 => "Page 2",
        }
    }

    /// Placeholder body text shown while this screen is active.
    pub fn body(self) -> &'static str {
        match self {
            Screen::Start => "Start Screen",
            Screen::Page1 => "First page",
            Screen::Page2 => "Second page",
        }
    }
}

/// Lowercase token form, matching what [`FromStr`] accepts. Used for
/// config files and flag values rather than display.
impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = match self {
            Screen::Start => "start",
            Screen::Page1 => "page1",
            Screen::Page2 => "page2",
        };
        f.write_str(token)
    }
}

/// A screen name from a config file or flag that names no destination.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown screen {0:?} (expected start, page1, or page2)")]
pub struct ScreenParseError(pub String);

impl FromStr for Screen {
    type Err = ScreenParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "start" => Ok(Screen::Start),
            "page1" => Ok(Screen::Page1),
            "page2" => Ok(Screen::Page2),
            _ => Err(ScreenParseError(s.to_string())),
        }
    }
}
