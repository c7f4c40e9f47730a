//! **xtile**: arrange X11 windows from the command line.
//!
//! Three modes are offered:
//!
//! * *rearrange* tiles every listed window in one row of equal-width columns,
//!   vertically centered, with the focused window in the middle slot;
//! * *focus* minimizes everything but the focused window and centers it;
//! * *snap* (`left` / `right` / `full`) drops the focused window into a fixed
//!   frame near the top-right of the display.
//!
//! # Architecture
//!
//! The crate is organised around one core trait,
//! [`traits::WindowSystem`], which abstracts geometry queries and window
//! commands so the layout logic in [`desktop`] is not coupled to any specific
//! tool.  The concrete implementation lives in [`xdotool`] (spawning `xdotool`
//! and `wmctrl`); [`dry_run`] wraps any implementation to log commands instead
//! of issuing them.

pub mod command;
pub mod config;
pub mod desktop;
pub mod dry_run;
pub mod layout;
pub mod traits;
pub mod window;
pub mod xdotool;
