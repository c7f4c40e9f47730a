//! Entry point for **xtile**.
//!
//! ```text
//! xtile [focus|left|right|full] [--dry-run]
//! ```
//!
//! Without a mode argument every window is tiled.  The process exits with
//! status 1 as soon as any external command fails.

use log::{error, info, warn};
use xtile::command::{parse_mode, Mode};
use xtile::config::Config;
use xtile::desktop::{Desktop, DesktopError};
use xtile::dry_run::DryRun;
use xtile::traits::WindowSystem;
use xtile::xdotool::wm::XdotoolWs;

/// Resolve the config directory (`$XDG_CONFIG_HOME/xtile`).
fn config_dir() -> std::path::PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME").unwrap_or_else(|_| {
        let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".into());
        format!("{}/.config", home)
    });
    std::path::PathBuf::from(base).join("xtile")
}

/// Try to load the config from `$XDG_CONFIG_HOME/xtile/config.json`,
/// falling back to compiled-in defaults.
fn load_config() -> Config {
    let path = config_dir().join("config.json");
    match Config::load(&path) {
        Ok(cfg) => {
            info!("loaded config from {}", path.display());
            cfg
        }
        Err(e) => {
            info!("no config file ({}), using defaults", e);
            Config::default()
        }
    }
}

/// Pick the mode from the first positional argument.  Anything that is not
/// a known mode tiles, as does no argument at all.
fn select_mode(args: &[String]) -> Mode {
    match args.iter().find(|a| !a.starts_with("--")) {
        None => Mode::Rearrange,
        Some(word) => parse_mode(word).unwrap_or_else(|| {
            warn!("unrecognised argument {:?}, rearranging", word);
            Mode::Rearrange
        }),
    }
}

//  Main

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let dry_run = args.iter().any(|a| a == "--dry-run");
    let mode = select_mode(&args);
    let config = load_config();

    let wm = XdotoolWs::new(&config.tools);
    let result = if dry_run {
        info!("dry run: commands will only be logged");
        run(DryRun::new(wm), mode, &config)
    } else {
        run(wm, mode, &config)
    };

    if let Err(e) = result {
        error!("{} failed: {}", mode, e);
        std::process::exit(1);
    }
}

fn run<W: WindowSystem>(ws: W, mode: Mode, config: &Config) -> Result<(), DesktopError> {
    info!("running {}", mode);
    let mut desktop = Desktop::new(ws, config)?;
    match mode {
        Mode::Rearrange => desktop.rearrange(),
        Mode::Focus => desktop.focus(),
        Mode::Snap(side) => desktop.snap(side),
    }
}
