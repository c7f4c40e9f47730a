//! [`WindowSystem`] implementation backed by the `xdotool` and `wmctrl`
//! command-line tools.
//!
//! Every call spawns one child process and blocks until it exits.  A
//! non-zero exit status is reported as [`XdotoolError::Exit`] together with
//! whatever the tool wrote to stderr.

use super::parse::{self, ParseError};
use crate::command::{DisplaySize, Rect, WindowId};
use crate::config::ToolsConfig;
use crate::traits::WindowSystem;
use log::debug;
use std::process::Command;

/// Window system driven through `xdotool` (geometry and commands) and
/// `wmctrl` (window enumeration).
pub struct XdotoolWs {
    xdotool: String,
    wmctrl: String,
}

/// Errors that can occur when talking to the external tools.
#[derive(Debug, thiserror::Error)]
pub enum XdotoolError {
    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        source: std::io::Error,
    },
    #[error("`{command}` exited with {status}: {stderr}")]
    Exit {
        command: String,
        status: std::process::ExitStatus,
        stderr: String,
    },
    #[error("unexpected output: {0}")]
    Parse(#[from] ParseError),
}

impl Default for XdotoolWs {
    fn default() -> Self {
        Self::new(&ToolsConfig::default())
    }
}

impl XdotoolWs {
    /// Create a new handle using the executables named in `tools`.
    ///
    /// Nothing is spawned eagerly; each method call runs its own process.
    pub fn new(tools: &ToolsConfig) -> Self {
        Self {
            xdotool: tools.xdotool.clone(),
            wmctrl: tools.wmctrl.clone(),
        }
    }

    fn xdotool(&self, args: &[String]) -> Result<String, XdotoolError> {
        run_tool(&self.xdotool, args)
    }
}

//  Process helpers

/// Run `program args…` to completion and return its stdout.
fn run_tool(program: &str, args: &[String]) -> Result<String, XdotoolError> {
    let command = std::iter::once(program)
        .chain(args.iter().map(String::as_str))
        .collect::<Vec<_>>()
        .join(" ");
    debug!("running `{}`", command);

    let output = Command::new(program)
        .args(args)
        .output()
        .map_err(|source| XdotoolError::Spawn {
            program: program.to_string(),
            source,
        })?;

    if !output.status.success() {
        return Err(XdotoolError::Exit {
            command,
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

//  WindowSystem implementation

impl WindowSystem for XdotoolWs {
    type Error = XdotoolError;

    fn list_windows(&self) -> Result<Vec<WindowId>, Self::Error> {
        let output = run_tool(&self.wmctrl, &["-l".to_string()])?;
        Ok(parse::parse_window_list(&output)?)
    }

    fn active_window(&self) -> Result<WindowId, Self::Error> {
        let output = self.xdotool(&["getactivewindow".to_string()])?;
        Ok(parse::parse_window_id(&output)?)
    }

    fn display_size(&self) -> Result<DisplaySize, Self::Error> {
        let output = self.xdotool(&["getdisplaygeometry".to_string()])?;
        Ok(parse::parse_display_size(&output)?)
    }

    fn window_geometry(&self, window: WindowId) -> Result<Rect, Self::Error> {
        let output = self.xdotool(&["getwindowgeometry".to_string(), window.to_string()])?;
        Ok(parse::parse_window_geometry(&output)?)
    }

    fn move_window(&self, window: WindowId, x: i32, y: i32) -> Result<(), Self::Error> {
        self.xdotool(&[
            "windowmove".to_string(),
            window.to_string(),
            x.to_string(),
            y.to_string(),
        ])?;
        Ok(())
    }

    fn resize_window(&self, window: WindowId, width: u32, height: u32) -> Result<(), Self::Error> {
        self.xdotool(&[
            "windowsize".to_string(),
            window.to_string(),
            width.to_string(),
            height.to_string(),
        ])?;
        Ok(())
    }

    fn activate_window(&self, window: WindowId) -> Result<(), Self::Error> {
        self.xdotool(&["windowactivate".to_string(), window.to_string()])?;
        Ok(())
    }

    fn minimize_window(&self, window: WindowId) -> Result<(), Self::Error> {
        self.xdotool(&["windowminimize".to_string(), window.to_string()])?;
        Ok(())
    }
}
