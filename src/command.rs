//! Modes and types used throughout xtile.
//!
//! This module defines the vocabulary that all components share:
//! [`Mode`] describes every arrangement the binary can perform, and
//! [`WindowId`] / [`Rect`] / [`DisplaySize`] provide the supporting data
//! types.

use std::fmt;

/// Opaque X11 window handle.
///
/// `wmctrl` reports ids in hex, `xdotool` in decimal.  [`Display`](fmt::Display)
/// renders the decimal form, which is what `xdotool` expects back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WindowId(pub u64);

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Window geometry in pixels, origin top-left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Pixel size of the display windows are arranged within.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplaySize {
    pub width: u32,
    pub height: u32,
}

/// Which frame a snapped window occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapSide {
    Left,
    Right,
    Full,
}

impl fmt::Display for SnapSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnapSide::Left => write!(f, "left"),
            SnapSide::Right => write!(f, "right"),
            SnapSide::Full => write!(f, "full"),
        }
    }
}

/// Every arrangement xtile can perform in a single run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Tile all windows in one row with the active window in the middle.
    Rearrange,
    /// Minimize everything but the active window, then center it.
    Focus,
    /// Move the active window into a fixed frame.
    Snap(SnapSide),
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Rearrange => write!(f, "rearrange"),
            Mode::Focus => write!(f, "focus"),
            Mode::Snap(side) => write!(f, "snap {}", side),
        }
    }
}

/// Parse a mode word (case-insensitive).  Returns `None` for anything that
/// is not a known mode.
pub fn parse_mode(s: &str) -> Option<Mode> {
    match s.trim().to_lowercase().as_str() {
        "rearrange" => Some(Mode::Rearrange),
        "focus" => Some(Mode::Focus),
        "left" => Some(Mode::Snap(SnapSide::Left)),
        "right" => Some(Mode::Snap(SnapSide::Right)),
        "full" => Some(Mode::Snap(SnapSide::Full)),
        _ => None,
    }
}
