//! Handle to a single window.

use crate::command::{DisplaySize, Rect, WindowId};
use crate::layout;
use crate::traits::WindowSystem;

/// A window id plus its geometry, fetched on first use and cached.
///
/// The cache is never invalidated by [`move_to`](Window::move_to) or
/// [`resize`](Window::resize): within one run it keeps reporting the geometry
/// seen at the first fetch.  Call [`refresh`](Window::refresh) to re-read it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Window {
    id: WindowId,
    geometry: Option<Rect>,
}

impl Window {
    pub fn new(id: WindowId) -> Self {
        Self { id, geometry: None }
    }

    pub fn id(&self) -> WindowId {
        self.id
    }

    /// The cached geometry, if it has been fetched.
    pub fn cached_geometry(&self) -> Option<Rect> {
        self.geometry
    }

    /// Return the cached geometry, fetching it first if needed.
    pub fn geometry<W: WindowSystem>(&mut self, ws: &W) -> Result<Rect, W::Error> {
        match self.geometry {
            Some(rect) => Ok(rect),
            None => self.refresh(ws),
        }
    }

    /// Re-read the geometry from the window system and cache it.
    pub fn refresh<W: WindowSystem>(&mut self, ws: &W) -> Result<Rect, W::Error> {
        let rect = ws.window_geometry(self.id)?;
        self.geometry = Some(rect);
        Ok(rect)
    }

    pub fn move_to<W: WindowSystem>(&self, ws: &W, x: i32, y: i32) -> Result<(), W::Error> {
        ws.move_window(self.id, x, y)
    }

    pub fn resize<W: WindowSystem>(&self, ws: &W, width: u32, height: u32) -> Result<(), W::Error> {
        ws.resize_window(self.id, width, height)
    }

    /// Resize to `optimal_width`, keeping the cached height.
    pub fn resize_optimal<W: WindowSystem>(
        &mut self,
        ws: &W,
        optimal_width: u32,
    ) -> Result<(), W::Error> {
        let height = self.geometry(ws)?.height;
        self.resize(ws, optimal_width, height)
    }

    pub fn activate<W: WindowSystem>(&self, ws: &W) -> Result<(), W::Error> {
        ws.activate_window(self.id)
    }

    pub fn minimize<W: WindowSystem>(&self, ws: &W) -> Result<(), W::Error> {
        ws.minimize_window(self.id)
    }

    /// Top-left corner that centers this window on `display`.
    pub fn centered_position<W: WindowSystem>(
        &mut self,
        ws: &W,
        display: DisplaySize,
    ) -> Result<(i32, i32), W::Error> {
        let rect = self.geometry(ws)?;
        Ok(layout::centered_position(display, rect.width, rect.height))
    }

    /// `y` that centers this window vertically on `display`.
    pub fn vertical_centered_position<W: WindowSystem>(
        &mut self,
        ws: &W,
        display: DisplaySize,
    ) -> Result<i32, W::Error> {
        let rect = self.geometry(ws)?;
        Ok(layout::vertical_centered_position(display, rect.height))
    }

    /// Move this window to the center of `display`.
    pub fn center<W: WindowSystem>(&mut self, ws: &W, display: DisplaySize) -> Result<(), W::Error> {
        let (x, y) = self.centered_position(ws, display)?;
        self.move_to(ws, x, y)
    }
}
