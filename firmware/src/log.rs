use core::fmt::{self, Write};

use conquer_once::spin::OnceCell;
use firmware_constraints::platform::FATAL_LOG_TARGET;
use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};

use crate::board::Board;

static LOGGER: ConsoleLogger = ConsoleLogger {
    console: OnceCell::uninit(),
};

pub(crate) fn init(board: &'static dyn Board) -> Result<(), SetLoggerError> {
    // a second board is ignored, the logger keeps writing to the first
    let _ = LOGGER.console.try_init_once(|| board);
    log::set_logger(&LOGGER)?;
    log::set_max_level(LevelFilter::Debug);
    Ok(())
}

pub struct ConsoleLogger {
    console: OnceCell<&'static dyn Board>,
}

struct Console(&'static dyn Board);

impl Write for Console {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.0.write_console(s);
        Ok(())
    }
}

impl log::Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() < Level::Debug || metadata.target().starts_with("firmware")
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let Some(board) = self.console.get() else {
            return;
        };
        // nowhere to report a failing console
        let _ = write_record(&mut Console(*board), record);
    }

    fn flush(&self) {
        // no-op, the console is unbuffered
    }
}

fn write_record(out: &mut impl Write, record: &Record) -> fmt::Result {
    let (color, label) = if record.target() == FATAL_LOG_TARGET {
        ("\x1b[1;41m", "FATAL")
    } else {
        match record.level() {
            Level::Error => ("\x1b[1;31m", "ERROR"),
            Level::Warn => ("\x1b[1;33m", "WARN"),
            Level::Info => ("\x1b[1;94m", "INFO"),
            Level::Debug => ("\x1b[1;30m", "DEBUG"),
            Level::Trace => ("\x1b[1;90m", "TRACE"),
        }
    };

    writeln!(
        out,
        "{}{:5}\x1b[0m [{}] {}",
        color,
        label,
        record.target(),
        record.args()
    )
}

#[cfg(test)]
mod tests {
    use log::Log;

    use super::*;

    fn render(level: Level, target: &str, message: &str) -> String {
        let mut out = String::new();
        write_record(
            &mut out,
            &Record::builder()
                .level(level)
                .target(target)
                .args(format_args!("{message}"))
                .build(),
        )
        .unwrap();
        out
    }

    #[test]
    fn renders_level_target_and_message() {
        assert_eq!(
            render(Level::Error, "constraints", "Violation ID 0x01: clock"),
            "\x1b[1;31mERROR\x1b[0m [constraints] Violation ID 0x01: clock\n"
        );
    }

    #[test]
    fn fatal_target_gets_its_own_label() {
        let line = render(Level::Error, FATAL_LOG_TARGET, "halted");
        assert!(line.starts_with("\x1b[1;41mFATAL\x1b[0m"));
        assert!(line.ends_with("[constraints::fatal] halted\n"));
    }

    #[test]
    fn debug_is_limited_to_firmware_targets() {
        let debug = |target: &'static str| {
            Metadata::builder()
                .level(Level::Debug)
                .target(target)
                .build()
        };
        assert!(LOGGER.enabled(&debug("firmware::boot")));
        assert!(!LOGGER.enabled(&debug("constraints")));
        assert!(LOGGER.enabled(
            &Metadata::builder()
                .level(Level::Info)
                .target("constraints")
                .build()
        ));
    }
}
