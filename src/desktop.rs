//! The orchestrator that ties windows, layout and the window system together.
//!
//! [`Desktop`] owns the ordered window list and implements every mode: tiling
//! all windows in one row, focusing the active window, and snapping it into a
//! fixed frame.

use crate::command::{DisplaySize, SnapSide, WindowId};
use crate::config::{Config, SnapConfig};
use crate::layout;
use crate::traits::WindowSystem;
use crate::window::Window;
use log::{debug, info, warn};

/// Possible errors from desktop operations.
#[derive(Debug, thiserror::Error)]
pub enum DesktopError {
    /// The window system returned an error.
    #[error("window system error: {0}")]
    WindowSystem(String),

    /// A width was requested for an empty window list.
    #[error("no windows are open")]
    NoWindows,

    /// The focused window is not among the listed windows (for example the
    /// desktop background or a panel has focus).
    #[error("active window {0} is not among the listed windows")]
    ActiveWindowNotListed(WindowId),
}

fn ws_err<E: std::error::Error>(e: E) -> DesktopError {
    DesktopError::WindowSystem(e.to_string())
}

/// The display and every listed window on it.
///
/// The order of the window list is significant: after
/// [`rearrange`](Desktop::rearrange) it is the left-to-right order on screen.
///
/// # Typical usage
///
/// ```ignore
/// let mut desktop = Desktop::new(XdotoolWs::default(), &Config::default())?;
/// desktop.rearrange()?;
/// ```
pub struct Desktop<W: WindowSystem> {
    ws: W,
    display: DisplaySize,
    windows: Vec<Window>,
    active_id: WindowId,
    gap: u32,
    snap: SnapConfig,
}

impl<W: WindowSystem> Desktop<W> {
    /// Query the display size, the window list and the active window.
    pub fn new(ws: W, config: &Config) -> Result<Self, DesktopError> {
        let display = ws.display_size().map_err(ws_err)?;
        let windows: Vec<Window> = ws
            .list_windows()
            .map_err(ws_err)?
            .into_iter()
            .map(Window::new)
            .collect();
        let active_id = ws.active_window().map_err(ws_err)?;
        debug!(
            "display {}x{}, {} window(s), active {}",
            display.width,
            display.height,
            windows.len(),
            active_id
        );

        Ok(Self {
            ws,
            display,
            windows,
            active_id,
            gap: config.layout.gap,
            snap: config.snap.clone(),
        })
    }

    //  Accessors

    pub fn display(&self) -> DisplaySize {
        self.display
    }

    /// Windows in their current order.
    pub fn windows(&self) -> &[Window] {
        &self.windows
    }

    /// Return the underlying window system.
    pub fn window_system(&self) -> &W {
        &self.ws
    }

    /// Consume the desktop and give back the window system.
    pub fn into_window_system(self) -> W {
        self.ws
    }

    /// Id reported as focused when the desktop was built.
    pub fn active_id(&self) -> WindowId {
        self.active_id
    }

    /// The active window, if it is among the listed windows.  The first
    /// window with a matching id wins.
    pub fn active_window(&self) -> Option<&Window> {
        self.windows.iter().find(|w| w.id() == self.active_id)
    }

    fn active_index(&self) -> Option<usize> {
        self.windows.iter().position(|w| w.id() == self.active_id)
    }

    /// Width each window gets when all of them share the display.
    pub fn optimal_width(&self) -> Result<u32, DesktopError> {
        layout::optimal_width(self.display.width, self.windows.len())
            .ok_or(DesktopError::NoWindows)
    }

    //  Operations

    /// Minimize every window whose id is not in `except`.
    pub fn minimize_all(&self, except: &[WindowId]) -> Result<(), DesktopError> {
        for window in self.windows.iter().filter(|w| !except.contains(&w.id())) {
            debug!("minimize {}", window.id());
            window.minimize(&self.ws).map_err(ws_err)?;
        }
        Ok(())
    }

    /// Minimize everything except the active window, then center it.
    pub fn focus(&mut self) -> Result<(), DesktopError> {
        let index = self
            .active_index()
            .ok_or(DesktopError::ActiveWindowNotListed(self.active_id))?;
        info!("focusing window {}", self.active_id);

        self.minimize_all(&[self.active_id])?;
        self.windows[index]
            .center(&self.ws, self.display)
            .map_err(ws_err)
    }

    /// Tile every window in one row, left to right, equal width, vertically
    /// centered, with the active window in the middle slot.
    ///
    /// Windows are ordered by their current `x`.  The active window is then
    /// moved to [`layout::centered_slot`]; if it is not listed the sorted
    /// order is kept as is.  The first failing command aborts the run.
    pub fn rearrange(&mut self) -> Result<(), DesktopError> {
        if self.windows.is_empty() {
            info!("no windows to arrange");
            return Ok(());
        }

        self.sort_by_x()?;
        self.move_active_to_center();

        let width = self.optimal_width()?;
        let columns = layout::tile_columns(self.display.width, self.windows.len(), self.gap);
        info!(
            "tiling {} window(s) at width {} with gap {}",
            self.windows.len(),
            width,
            self.gap
        );

        for (window, column) in self.windows.iter_mut().zip(columns) {
            window
                .resize_optimal(&self.ws, column.width)
                .map_err(ws_err)?;
            let y = window
                .vertical_centered_position(&self.ws, self.display)
                .map_err(ws_err)?;
            debug!("place {} at ({}, {})", window.id(), column.x, y);
            window.move_to(&self.ws, column.x, y).map_err(ws_err)?;
        }
        Ok(())
    }

    /// Move the active window into the snap frame for `side`.
    ///
    /// The focused window is used even when it is not listed.
    pub fn snap(&self, side: SnapSide) -> Result<(), DesktopError> {
        let frame = layout::snap_frame(self.display, &self.snap, side);
        info!(
            "snapping window {} {} to {}x{}+{}+{}",
            self.active_id, side, frame.width, frame.height, frame.x, frame.y
        );
        let window = Window::new(self.active_id);
        window.move_to(&self.ws, frame.x, frame.y).map_err(ws_err)?;
        window
            .resize(&self.ws, frame.width, frame.height)
            .map_err(ws_err)
    }

    /// Stable sort by the `x` seen at this moment.
    fn sort_by_x(&mut self) -> Result<(), DesktopError> {
        let xs = self
            .windows
            .iter_mut()
            .map(|w| w.geometry(&self.ws).map(|rect| rect.x))
            .collect::<Result<Vec<_>, _>>()
            .map_err(ws_err)?;

        let mut keyed: Vec<(i32, Window)> = xs.into_iter().zip(self.windows.drain(..)).collect();
        keyed.sort_by_key(|(x, _)| *x);
        self.windows = keyed.into_iter().map(|(_, w)| w).collect();
        Ok(())
    }

    fn move_active_to_center(&mut self) {
        let Some(index) = self.active_index() else {
            warn!(
                "active window {} is not listed, keeping left-to-right order",
                self.active_id
            );
            return;
        };
        let slot = layout::centered_slot(self.windows.len());
        let active = self.windows.remove(index);
        self.windows.insert(slot, active);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::Rect;
    use std::cell::{Cell, RefCell};
    use std::collections::HashMap;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Call {
        Move(WindowId, i32, i32),
        Resize(WindowId, u32, u32),
        Activate(WindowId),
        Minimize(WindowId),
    }

    /// Record-keeping mock window system.  Moves and resizes are applied to
    /// the stored geometry so a second run sees the result of the first.
    #[derive(Debug)]
    struct RecorderWs {
        display: DisplaySize,
        order: Vec<WindowId>,
        active: WindowId,
        rects: RefCell<HashMap<WindowId, Rect>>,
        calls: RefCell<Vec<Call>>,
        /// Fail the n-th (0-based) move command.
        fail_move_at: Option<usize>,
        moves_seen: Cell<usize>,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("recorder error")]
    struct RecorderErr;

    impl RecorderWs {
        fn new(display: (u32, u32), windows: &[(u64, Rect)], active: u64) -> Self {
            Self {
                display: DisplaySize {
                    width: display.0,
                    height: display.1,
                },
                order: windows.iter().map(|(id, _)| WindowId(*id)).collect(),
                active: WindowId(active),
                rects: RefCell::new(windows.iter().map(|(id, r)| (WindowId(*id), *r)).collect()),
                calls: RefCell::new(Vec::new()),
                fail_move_at: None,
                moves_seen: Cell::new(0),
            }
        }

        fn calls(&self) -> Vec<Call> {
            self.calls.borrow().clone()
        }

        fn moves(&self) -> Vec<Call> {
            self.calls()
                .into_iter()
                .filter(|c| matches!(c, Call::Move(..)))
                .collect()
        }
    }

    impl WindowSystem for RecorderWs {
        type Error = RecorderErr;

        fn list_windows(&self) -> Result<Vec<WindowId>, RecorderErr> {
            Ok(self.order.clone())
        }

        fn active_window(&self) -> Result<WindowId, RecorderErr> {
            Ok(self.active)
        }

        fn display_size(&self) -> Result<DisplaySize, RecorderErr> {
            Ok(self.display)
        }

        fn window_geometry(&self, w: WindowId) -> Result<Rect, RecorderErr> {
            self.rects.borrow().get(&w).copied().ok_or(RecorderErr)
        }

        fn move_window(&self, w: WindowId, x: i32, y: i32) -> Result<(), RecorderErr> {
            let n = self.moves_seen.get();
            self.moves_seen.set(n + 1);
            if self.fail_move_at == Some(n) {
                return Err(RecorderErr);
            }
            self.calls.borrow_mut().push(Call::Move(w, x, y));
            if let Some(r) = self.rects.borrow_mut().get_mut(&w) {
                r.x = x;
                r.y = y;
            }
            Ok(())
        }

        fn resize_window(&self, w: WindowId, width: u32, height: u32) -> Result<(), RecorderErr> {
            self.calls.borrow_mut().push(Call::Resize(w, width, height));
            if let Some(r) = self.rects.borrow_mut().get_mut(&w) {
                r.width = width;
                r.height = height;
            }
            Ok(())
        }

        fn activate_window(&self, w: WindowId) -> Result<(), RecorderErr> {
            self.calls.borrow_mut().push(Call::Activate(w));
            Ok(())
        }

        fn minimize_window(&self, w: WindowId) -> Result<(), RecorderErr> {
            self.calls.borrow_mut().push(Call::Minimize(w));
            Ok(())
        }
    }

    fn ids<W: WindowSystem>(desktop: &Desktop<W>) -> Vec<u64> {
        desktop.windows().iter().map(|w| w.id().0).collect()
    }

    fn three_windows(active: u64) -> RecorderWs {
        RecorderWs::new(
            (1920, 1080),
            &[
                (1, Rect::new(500, 50, 700, 600)),
                (2, Rect::new(100, 10, 900, 400)),
                (3, Rect::new(900, 90, 500, 800)),
            ],
            active,
        )
    }

    #[test]
    fn rearrange_three_windows_active_in_middle() {
        let mut desktop = Desktop::new(three_windows(1), &Config::default()).unwrap();
        desktop.rearrange().unwrap();

        assert_eq!(ids(&desktop), vec![2, 1, 3]);
        assert_eq!(
            desktop.window_system().calls(),
            vec![
                Call::Resize(WindowId(2), 640, 400),
                Call::Move(WindowId(2), 0, 340),
                Call::Resize(WindowId(1), 640, 600),
                Call::Move(WindowId(1), 648, 240),
                Call::Resize(WindowId(3), 640, 800),
                Call::Move(WindowId(3), 1296, 140),
            ]
        );
    }

    #[test]
    fn rearrange_pulls_leftmost_active_to_center() {
        let mut desktop = Desktop::new(three_windows(2), &Config::default()).unwrap();
        desktop.rearrange().unwrap();
        assert_eq!(ids(&desktop), vec![1, 2, 3]);
    }

    #[test]
    fn rearrange_even_count_puts_active_left_of_center() {
        let ws = RecorderWs::new(
            (2560, 1440),
            &[
                (10, Rect::new(0, 0, 400, 400)),
                (11, Rect::new(300, 0, 400, 400)),
                (12, Rect::new(600, 0, 400, 400)),
                (13, Rect::new(900, 0, 400, 400)),
            ],
            13,
        );
        let mut desktop = Desktop::new(ws, &Config::default()).unwrap();
        desktop.rearrange().unwrap();

        assert_eq!(ids(&desktop), vec![10, 13, 11, 12]);
        let xs: Vec<i32> = desktop
            .window_system()
            .moves()
            .into_iter()
            .map(|c| match c {
                Call::Move(_, x, _) => x,
                _ => unreachable!(),
            })
            .collect();
        assert_eq!(xs, vec![0, 648, 1296, 1944]);
    }

    #[test]
    fn rearrange_uses_configured_gap() {
        let mut config = Config::default();
        config.layout.gap = 0;
        let mut desktop = Desktop::new(three_windows(1), &config).unwrap();
        desktop.rearrange().unwrap();
        assert_eq!(
            desktop.window_system().moves(),
            vec![
                Call::Move(WindowId(2), 0, 340),
                Call::Move(WindowId(1), 640, 240),
                Call::Move(WindowId(3), 1280, 140),
            ]
        );
    }

    #[test]
    fn rearrange_ties_keep_listing_order() {
        let ws = RecorderWs::new(
            (1000, 1000),
            &[
                (5, Rect::new(0, 0, 100, 100)),
                (6, Rect::new(0, 0, 100, 100)),
                (7, Rect::new(0, 0, 100, 100)),
            ],
            7,
        );
        let mut desktop = Desktop::new(ws, &Config::default()).unwrap();
        desktop.rearrange().unwrap();
        assert_eq!(ids(&desktop), vec![5, 7, 6]);
    }

    #[test]
    fn rearrange_twice_reaches_fixed_point() {
        let mut desktop = Desktop::new(three_windows(2), &Config::default()).unwrap();
        desktop.rearrange().unwrap();
        let first = desktop.window_system().calls();

        let ws = desktop.into_window_system();
        ws.calls.borrow_mut().clear();
        let mut desktop = Desktop::new(ws, &Config::default()).unwrap();
        desktop.rearrange().unwrap();

        assert_eq!(desktop.window_system().calls(), first);
    }

    #[test]
    fn rearrange_with_unlisted_active_keeps_sorted_order() {
        let mut desktop = Desktop::new(three_windows(99), &Config::default()).unwrap();
        desktop.rearrange().unwrap();
        assert_eq!(ids(&desktop), vec![2, 1, 3]);
        assert_eq!(desktop.window_system().moves().len(), 3);
    }

    #[test]
    fn rearrange_without_windows_is_noop() {
        let ws = RecorderWs::new((1920, 1080), &[], 1);
        let mut desktop = Desktop::new(ws, &Config::default()).unwrap();
        desktop.rearrange().unwrap();
        assert!(desktop.window_system().calls().is_empty());
        assert!(matches!(
            desktop.optimal_width(),
            Err(DesktopError::NoWindows)
        ));
    }

    #[test]
    fn rearrange_stops_at_first_failure() {
        let mut ws = three_windows(1);
        ws.fail_move_at = Some(1);
        let mut desktop = Desktop::new(ws, &Config::default()).unwrap();

        let err = desktop.rearrange().unwrap_err();
        assert!(matches!(err, DesktopError::WindowSystem(_)));
        assert_eq!(
            desktop.window_system().calls(),
            vec![
                Call::Resize(WindowId(2), 640, 400),
                Call::Move(WindowId(2), 0, 340),
                Call::Resize(WindowId(1), 640, 600),
            ]
        );
    }

    #[test]
    fn focus_minimizes_others_and_centers_active() {
        let mut desktop = Desktop::new(three_windows(1), &Config::default()).unwrap();
        desktop.focus().unwrap();
        assert_eq!(
            desktop.window_system().calls(),
            vec![
                Call::Minimize(WindowId(2)),
                Call::Minimize(WindowId(3)),
                Call::Move(WindowId(1), 610, 240),
            ]
        );
    }

    #[test]
    fn focus_with_unlisted_active_issues_nothing() {
        let mut desktop = Desktop::new(three_windows(42), &Config::default()).unwrap();
        let err = desktop.focus().unwrap_err();
        assert!(matches!(
            err,
            DesktopError::ActiveWindowNotListed(WindowId(42))
        ));
        assert!(desktop.window_system().calls().is_empty());
    }

    #[test]
    fn minimize_all_matches_by_id() {
        let desktop = Desktop::new(three_windows(1), &Config::default()).unwrap();
        desktop.minimize_all(&[WindowId(1), WindowId(3)]).unwrap();
        assert_eq!(
            desktop.window_system().calls(),
            vec![Call::Minimize(WindowId(2))]
        );
    }

    #[test]
    fn active_window_lookup() {
        let desktop = Desktop::new(three_windows(3), &Config::default()).unwrap();
        assert_eq!(desktop.active_window().map(|w| w.id()), Some(WindowId(3)));
        let desktop = Desktop::new(three_windows(4), &Config::default()).unwrap();
        assert!(desktop.active_window().is_none());
        assert_eq!(desktop.active_id(), WindowId(4));
    }

    #[test]
    fn optimal_width_divides_display() {
        let desktop = Desktop::new(three_windows(1), &Config::default()).unwrap();
        assert_eq!(desktop.optimal_width().unwrap(), 640);
        assert_eq!(desktop.display().height, 1080);
    }

    #[test]
    fn snap_moves_then_resizes_active() {
        let ws = RecorderWs::new((3440, 1440), &[(1, Rect::new(0, 0, 100, 100))], 77);
        let desktop = Desktop::new(ws, &Config::default()).unwrap();
        desktop.snap(SnapSide::Right).unwrap();
        assert_eq!(
            desktop.window_system().calls(),
            vec![
                Call::Move(WindowId(77), 2342, 120),
                Call::Resize(WindowId(77), 978, 1200),
            ]
        );
    }
}
