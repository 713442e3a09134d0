//! Recording test double for the platform capabilities.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::panic::{self, AssertUnwindSafe};

use firmware_constraints::{ConstraintId, LogLevel, Platform, ResourceProbe};

/// Unwind payload thrown by [`RecordingPlatform::halt`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Halted {
    pub id: ConstraintId,
    pub message: String,
}

#[derive(Default)]
pub struct RecordingPlatform {
    pub logs: RefCell<Vec<(LogLevel, String)>>,
    pub halts: RefCell<Vec<Halted>>,
    pub sensor_timed_out: Cell<bool>,
    pub comm_buffer_full: Cell<bool>,
}

impl RecordingPlatform {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn logs(&self) -> Vec<(LogLevel, String)> {
        self.logs.borrow().clone()
    }

    pub fn logs_at(&self, level: LogLevel) -> Vec<String> {
        self.logs
            .borrow()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m.clone())
            .collect()
    }

    pub fn halt_count(&self) -> usize {
        self.halts.borrow().len()
    }
}

impl Platform for RecordingPlatform {
    fn log(&self, level: LogLevel, message: &str) {
        self.logs.borrow_mut().push((level, message.to_owned()));
    }

    fn halt(&self, id: ConstraintId, message: &str) -> ! {
        let halted = Halted {
            id,
            message: message.to_owned(),
        };
        self.halts.borrow_mut().push(halted.clone());
        panic::panic_any(halted)
    }
}

impl ResourceProbe for RecordingPlatform {
    fn sensor_timed_out(&self) -> bool {
        self.sensor_timed_out.get()
    }

    fn comm_buffer_full(&self) -> bool {
        self.comm_buffer_full.get()
    }
}

/// Runs `f`, returning `Err` with the halt payload if it halted.
///
/// Any other panic is propagated.
pub fn run_until_halt<R>(f: impl FnOnce() -> R) -> Result<R, Halted> {
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(value) => Ok(value),
        Err(payload) => match payload.downcast::<Halted>() {
            Ok(halted) => Err(*halted),
            Err(other) => panic::resume_unwind(other),
        },
    }
}
