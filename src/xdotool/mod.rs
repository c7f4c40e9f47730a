//! X11 implementation of the window system.
//!
//! This module provides the concrete backend for the
//! [`WindowSystem`](crate::traits::WindowSystem) trait, powered by the
//! `xdotool` and `wmctrl` command-line tools.
//!
//! Nothing outside this module should spawn those tools or parse their
//! output directly.

pub mod parse;
pub mod wm;
