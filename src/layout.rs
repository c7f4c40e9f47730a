//! Arrangement arithmetic.
//!
//! Everything in here is pure: given display and window sizes it computes
//! target positions, without touching the window system.  The
//! [`Desktop`](crate::desktop::Desktop) feeds the results to its windows.
//!
//! All divisions are integer divisions on non-negative operands, so they
//! round down.

use crate::command::{DisplaySize, Rect, SnapSide};
use crate::config::SnapConfig;

/// One horizontal slot of a tiled row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub x: i32,
    pub width: u32,
}

/// Index at which the active window is placed among `count` windows.
///
/// Odd counts put it dead center; even counts put it just left of center.
pub fn centered_slot(count: usize) -> usize {
    if count % 2 == 0 {
        count.saturating_sub(1) / 2
    } else {
        count / 2
    }
}

/// Width every window receives when `count` windows share `display_width`.
///
/// Returns `None` when `count` is zero.
pub fn optimal_width(display_width: u32, count: usize) -> Option<u32> {
    if count == 0 {
        return None;
    }
    let count = u32::try_from(count).unwrap_or(u32::MAX);
    Some(display_width / count)
}

/// Lay `count` windows of equal width left to right, starting at `x = 0`,
/// with `gap` pixels between neighbours.
///
/// Each column starts where the previous one ends plus the gap:
/// `x[0] = 0`, `x[i] = x[i-1] + width + gap`.
pub fn tile_columns(display_width: u32, count: usize, gap: u32) -> Vec<Column> {
    let Some(width) = optimal_width(display_width, count) else {
        return Vec::new();
    };
    let mut columns: Vec<Column> = Vec::with_capacity(count);
    for _ in 0..count {
        let x = match columns.last() {
            None => 0,
            Some(prev) => prev.x + prev.width as i32 + gap as i32,
        };
        columns.push(Column { x, width });
    }
    columns
}

/// Top-left corner that centers a `width × height` window on `display`.
pub fn centered_position(display: DisplaySize, width: u32, height: u32) -> (i32, i32) {
    (
        half(display.width) - half(width),
        vertical_centered_position(display, height),
    )
}

/// `y` that centers a window of `height` vertically on `display`.
pub fn vertical_centered_position(display: DisplaySize, height: u32) -> i32 {
    half(display.height) - half(height)
}

/// Target geometry for a window snapped to `side`.
///
/// The frame's top-right corner sits `margin_right` pixels in from the right
/// edge and `margin_top` pixels down.  The halves are each `split_gap`
/// pixels narrower than half the frame, leaving `2 × split_gap` between them.
pub fn snap_frame(display: DisplaySize, snap: &SnapConfig, side: SnapSide) -> Rect {
    let corner_x = display.width as i32 - snap.width as i32 - snap.margin_right as i32;
    let corner_y = snap.margin_top as i32;
    let half_width = (snap.width / 2).saturating_sub(snap.split_gap);

    match side {
        SnapSide::Full => Rect::new(corner_x, corner_y, snap.width, snap.height),
        SnapSide::Left => Rect::new(corner_x, corner_y, half_width, snap.height),
        SnapSide::Right => Rect::new(
            corner_x + half(snap.width) + snap.split_gap as i32,
            corner_y,
            half_width,
            snap.height,
        ),
    }
}

fn half(v: u32) -> i32 {
    (v / 2) as i32
}
