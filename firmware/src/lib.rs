#![cfg_attr(not(test), no_std)]
extern crate alloc;

use ::log::{info, warn};
use conquer_once::spin::OnceCell;
use firmware_constraints::ConstraintsManager;
use thiserror::Error;

use crate::board::Board;
use crate::config::BoundsOverrides;
use crate::platform::BoardPlatform;

pub mod board;
pub mod boot;
pub mod config;
mod log;
pub mod platform;

static CONSTRAINTS: OnceCell<ConstraintsManager<BoardPlatform>> = OnceCell::uninit();

#[derive(Debug, Copy, Clone, Error)]
pub enum InitError {
    #[error("logger already installed")]
    LoggerInstalled,
    #[error("firmware already initialized")]
    AlreadyInitialized,
}

/// Installs the console logger and sets up the constraint layer for `board`.
///
/// Returns whether the compiled-in bounds were accepted. `false` means the
/// built-in defaults are in force; that is reported as a warning and the
/// caller decides whether to continue.
pub fn init(board: &'static dyn Board) -> Result<bool, InitError> {
    install_logger(board)?;
    init_with(board, BoundsOverrides::COMPILED)
}

/// Routes the `log` facade to the board console.
pub fn install_logger(board: &'static dyn Board) -> Result<(), InitError> {
    self::log::init(board).map_err(|_| InitError::LoggerInstalled)
}

/// Like [`init`], with explicit bounds overrides and without touching the
/// logger.
pub fn init_with(
    board: &'static dyn Board,
    overrides: BoundsOverrides<'_>,
) -> Result<bool, InitError> {
    let platform = BoardPlatform::new(board);
    let (manager, overrides_ok) = match overrides.resolve() {
        Ok(None) => (ConstraintsManager::new(platform), true),
        Ok(Some(bounds)) => (ConstraintsManager::with_config(platform, bounds), true),
        Err(err) => {
            warn!("ignoring bounds overrides: {}", err);
            (ConstraintsManager::new(platform), false)
        }
    };

    CONSTRAINTS
        .try_init_once(|| manager)
        .map_err(|_| InitError::AlreadyInitialized)?;
    let constraints = constraints().ok_or(InitError::AlreadyInitialized)?;

    let bounds_ok = constraints.init() && overrides_ok;
    if !bounds_ok {
        warn!("constraint bounds fell back to built-in defaults");
    }
    info!("firmware initialized");
    Ok(bounds_ok)
}

/// The global constraint layer, once [`init`] has run.
pub fn constraints() -> Option<&'static ConstraintsManager<BoardPlatform>> {
    CONSTRAINTS.get()
}
