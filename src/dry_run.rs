//! A [`WindowSystem`] decorator that only pretends to change anything.
//!
//! Queries are forwarded to the wrapped window system so layouts are computed
//! from real geometry; move, resize, activate and minimize are logged at
//! `info` level and then dropped.

use crate::command::{DisplaySize, Rect, WindowId};
use crate::traits::WindowSystem;
use log::info;

/// Wraps `W`, forwarding queries and logging commands instead of issuing them.
pub struct DryRun<W> {
    inner: W,
}

impl<W: WindowSystem> DryRun<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: WindowSystem> WindowSystem for DryRun<W> {
    type Error = W::Error;

    fn list_windows(&self) -> Result<Vec<WindowId>, Self::Error> {
        self.inner.list_windows()
    }

    fn active_window(&self) -> Result<WindowId, Self::Error> {
        self.inner.active_window()
    }

    fn display_size(&self) -> Result<DisplaySize, Self::Error> {
        self.inner.display_size()
    }

    fn window_geometry(&self, window: WindowId) -> Result<Rect, Self::Error> {
        self.inner.window_geometry(window)
    }

    fn move_window(&self, window: WindowId, x: i32, y: i32) -> Result<(), Self::Error> {
        info!("[dry run] move {} to ({}, {})", window, x, y);
        Ok(())
    }

    fn resize_window(&self, window: WindowId, width: u32, height: u32) -> Result<(), Self::Error> {
        info!("[dry run] resize {} to {}x{}", window, width, height);
        Ok(())
    }

    fn activate_window(&self, window: WindowId) -> Result<(), Self::Error> {
        info!("[dry run] activate {}", window);
        Ok(())
    }

    fn minimize_window(&self, window: WindowId) -> Result<(), Self::Error> {
        info!("[dry run] minimize {}", window);
        Ok(())
    }
}
