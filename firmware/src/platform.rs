use firmware_constraints::{ConstraintId, Platform, ResourceProbe};

use crate::board::Board;

/// What the board does once a fatal violation has been surfaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HaltMode {
    /// Reset through the watchdog
    WatchdogReset,
    /// Spin forever so a debugger can attach
    Spin,
}

impl HaltMode {
    /// Selected at build time through the `debug-halt` feature.
    pub const ACTIVE: Self = if cfg!(feature = "debug-halt") {
        Self::Spin
    } else {
        Self::WatchdogReset
    };
}

/// Fault LED pattern for a constraint id. Ids wider than the LED bank saturate.
pub fn fault_code(id: ConstraintId) -> u8 {
    u8::try_from(id.as_raw()).unwrap_or(u8::MAX)
}

/// Adapts a [`Board`] into the capabilities the constraint layer consumes.
///
/// Logging goes through the `log` facade, which [`crate::init`] points at the
/// board console.
#[derive(Clone, Copy)]
pub struct BoardPlatform {
    board: &'static dyn Board,
    halt_mode: HaltMode,
}

impl BoardPlatform {
    pub fn new(board: &'static dyn Board) -> Self {
        Self::with_halt_mode(board, HaltMode::ACTIVE)
    }

    pub fn with_halt_mode(board: &'static dyn Board, halt_mode: HaltMode) -> Self {
        Self { board, halt_mode }
    }
}

impl Platform for BoardPlatform {
    fn halt(&self, id: ConstraintId, message: &str) -> ! {
        self.board.store_fault_log(id.as_raw(), message);
        self.board.set_fault_led(fault_code(id));
        ::log::logger().flush();

        match self.halt_mode {
            HaltMode::WatchdogReset => self.board.watchdog_reset(),
            HaltMode::Spin => loop {
                core::hint::spin_loop();
            },
        }
    }
}

impl ResourceProbe for BoardPlatform {
    fn sensor_timed_out(&self) -> bool {
        self.board.sensor_timed_out()
    }

    fn comm_buffer_full(&self) -> bool {
        self.board.comm_buffer_full()
    }
}
