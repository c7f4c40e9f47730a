//! Core trait that decouples xtile from any specific window system tooling.
//!
//! Every concrete backend (the `xdotool`/`wmctrl` pair, a dry-run wrapper, a
//! test harness, …) implements [`WindowSystem`].  The
//! [`Desktop`](crate::desktop::Desktop) only depends on this abstraction.

use crate::command::{DisplaySize, Rect, WindowId};

/// Abstraction over a window system that can report window geometry and
/// move, resize, activate and minimize windows.
///
/// Every call is blocking.  Commands are fire-and-forget: an implementation
/// reports failure through `Err` but returns no other structured data.
pub trait WindowSystem {
    /// The error type produced by this window system.
    type Error: std::error::Error + Send + 'static;

    /// Return every listed window, excluding desktop and panel entries.
    fn list_windows(&self) -> Result<Vec<WindowId>, Self::Error>;

    /// Return the id of the window currently holding input focus.
    ///
    /// The returned id is not guaranteed to be among
    /// [`list_windows`](WindowSystem::list_windows): when the desktop itself
    /// is focused it usually is not.
    fn active_window(&self) -> Result<WindowId, Self::Error>;

    /// Return the pixel size of the display.
    fn display_size(&self) -> Result<DisplaySize, Self::Error>;

    /// Return the current position and size of `window`.
    fn window_geometry(&self, window: WindowId) -> Result<Rect, Self::Error>;

    /// Move the top-left corner of `window` to `(x, y)`.
    fn move_window(&self, window: WindowId, x: i32, y: i32) -> Result<(), Self::Error>;

    /// Resize `window` to `width × height`.
    fn resize_window(&self, window: WindowId, width: u32, height: u32) -> Result<(), Self::Error>;

    /// Raise and focus `window`.
    fn activate_window(&self, window: WindowId) -> Result<(), Self::Error>;

    /// Minimize (iconify) `window`.
    fn minimize_window(&self, window: WindowId) -> Result<(), Self::Error>;
}
