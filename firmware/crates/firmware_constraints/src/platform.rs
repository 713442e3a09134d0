//! Platform Capabilities
//!
//! Everything the constraint layer needs from the outside world: a way to log
//! and a way to stop. Boards implement [`Platform`] and hand it to the
//! [`ConstraintsManager`](crate::ConstraintsManager) at construction.

use core::fmt;

use crate::id::ConstraintId;

/// Log target used by the default [`Platform::log`].
pub const LOG_TARGET: &str = "constraints";

/// Log target for [`LogLevel::Fatal`] lines, which `log` has no level for.
pub const FATAL_LOG_TARGET: &str = "constraints::fatal";

/// Severity of a constraint log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum LogLevel {
    Info = 0,
    Warn = 1,
    Error = 2,
    Fatal = 3,
}

impl LogLevel {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
            Self::Fatal => "FATAL",
        }
    }

    /// Closest `log` level. Fatal collapses onto error.
    #[must_use]
    pub const fn as_log_level(self) -> log::Level {
        match self {
            Self::Info => log::Level::Info,
            Self::Warn => log::Level::Warn,
            Self::Error | Self::Fatal => log::Level::Error,
        }
    }

    #[must_use]
    pub const fn target(self) -> &'static str {
        match self {
            Self::Fatal => FATAL_LOG_TARGET,
            _ => LOG_TARGET,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Logging and halting, supplied by the board.
///
/// # Contract
///
/// - `log` calls arrive in program order and must not block the caller.
/// - `halt` never returns. By the time it would loop or reset, the violation
///   must be observable somewhere (console, fault log, LED).
pub trait Platform {
    /// Emit one log line. Forwards to the `log` facade unless overridden.
    fn log(&self, level: LogLevel, message: &str) {
        log::log!(target: level.target(), level.as_log_level(), "{}", message);
    }

    /// Enter the safe state.
    fn halt(&self, id: ConstraintId, message: &str) -> !;
}

impl<P: Platform + ?Sized> Platform for &P {
    fn log(&self, level: LogLevel, message: &str) {
        (**self).log(level, message);
    }

    fn halt(&self, id: ConstraintId, message: &str) -> ! {
        (**self).halt(id, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_are_ordered() {
        assert!(LogLevel::Info < LogLevel::Warn);
        assert!(LogLevel::Warn < LogLevel::Error);
        assert!(LogLevel::Error < LogLevel::Fatal);
    }

    #[test]
    fn fatal_gets_its_own_target() {
        assert_eq!(LogLevel::Fatal.as_log_level(), log::Level::Error);
        assert_eq!(LogLevel::Fatal.target(), FATAL_LOG_TARGET);
        assert_eq!(LogLevel::Error.target(), LOG_TARGET);
    }
}
