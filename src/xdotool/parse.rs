//! Parsers for the human-readable output of `wmctrl` and `xdotool`.
//!
//! Each parser accepts the raw stdout of one command and either returns the
//! typed value or a [`ParseError`] naming the line that did not fit.

use crate::command::{DisplaySize, Rect, WindowId};

/// Output of `wmctrl`/`xdotool` that does not match the expected format.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("window list line has too few fields: {0:?}")]
    ShortListLine(String),
    #[error("invalid hex window id: {0:?}")]
    HexId(String),
    #[error("invalid desktop field: {0:?}")]
    DesktopField(String),
    #[error("invalid window id: {0:?}")]
    Id(String),
    #[error("expected {label} line, got {line:?}")]
    MissingLine { label: &'static str, line: String },
    #[error("malformed {label} value: {value:?}")]
    Pair { label: &'static str, value: String },
    #[error("malformed display geometry: {0:?}")]
    Display(String),
}

/// Parse `wmctrl -l`.
///
/// Each line is `<hex id> <desktop> <host> <title…>`.  Sticky entries such as
/// the desktop background and panels report a desktop below zero and are
/// dropped.  Blank lines are skipped.
///
/// ```text
/// 0x01000003 -1 host Desktop
/// 0x03a00007  0 host Terminal
/// ```
pub fn parse_window_list(output: &str) -> Result<Vec<WindowId>, ParseError> {
    let mut ids = Vec::new();
    for line in output.lines().filter(|l| !l.trim().is_empty()) {
        let mut fields = line.split_whitespace();
        let (hex, desktop) = match (fields.next(), fields.next()) {
            (Some(h), Some(d)) => (h, d),
            _ => return Err(ParseError::ShortListLine(line.to_string())),
        };
        let desktop: i64 = desktop
            .parse()
            .map_err(|_| ParseError::DesktopField(desktop.to_string()))?;
        if desktop < 0 {
            continue;
        }
        let digits = hex
            .strip_prefix("0x")
            .or_else(|| hex.strip_prefix("0X"))
            .unwrap_or(hex);
        let id = u64::from_str_radix(digits, 16)
            .map_err(|_| ParseError::HexId(hex.to_string()))?;
        ids.push(WindowId(id));
    }
    Ok(ids)
}

/// Parse `xdotool getactivewindow`: a single decimal id.
pub fn parse_window_id(output: &str) -> Result<WindowId, ParseError> {
    let trimmed = output.trim();
    trimmed
        .parse()
        .map(WindowId)
        .map_err(|_| ParseError::Id(trimmed.to_string()))
}

/// Parse `xdotool getdisplaygeometry`: `"<width> <height>"`.
pub fn parse_display_size(output: &str) -> Result<DisplaySize, ParseError> {
    let trimmed = output.trim();
    let bad = || ParseError::Display(trimmed.to_string());
    let fields: Vec<&str> = trimmed.split_whitespace().collect();
    if fields.len() != 2 {
        return Err(bad());
    }
    Ok(DisplaySize {
        width: fields[0].parse().map_err(|_| bad())?,
        height: fields[1].parse().map_err(|_| bad())?,
    })
}

/// Parse `xdotool getwindowgeometry <id>`.
///
/// The output is a header followed by exactly a `Position:` line and a
/// `Geometry:` line; anything after the first value on each line is ignored:
///
/// ```text
/// Window 60817415
///   Position: 100,200 (screen: 0)
///   Geometry: 800x600
/// ```
pub fn parse_window_geometry(output: &str) -> Result<Rect, ParseError> {
    let mut lines = output.trim().lines().skip(1);

    let (x, y) = labelled_pair(lines.next(), "Position:", ',')?;
    let (width, height) = labelled_pair(lines.next(), "Geometry:", 'x')?;

    Ok(Rect { x, y, width, height })
}

/// Second whitespace-separated field of `line`, if the first is `label`.
fn second_field<'a>(line: &'a str, label: &str) -> Option<&'a str> {
    let mut fields = line.split_whitespace();
    match fields.next() {
        Some(first) if first == label => fields.next(),
        _ => None,
    }
}

fn labelled_pair<A, B>(
    line: Option<&str>,
    label: &'static str,
    sep: char,
) -> Result<(A, B), ParseError>
where
    A: std::str::FromStr,
    B: std::str::FromStr,
{
    let line = line.unwrap_or("");
    let value = second_field(line, label).ok_or_else(|| ParseError::MissingLine {
        label,
        line: line.trim().to_string(),
    })?;
    let bad = || ParseError::Pair {
        label,
        value: value.to_string(),
    };
    let (a, b) = value.split_once(sep).ok_or_else(bad)?;
    Ok((a.parse().map_err(|_| bad())?, b.parse().map_err(|_| bad())?))
}
