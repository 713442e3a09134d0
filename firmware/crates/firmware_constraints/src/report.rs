//! Violation Reporter

use alloc::format;

use crate::id::{ConstraintId, UnknownConstraint};
use crate::manager::ConstraintsManager;
use crate::platform::{LogLevel, Platform};

/// Handed to the escalation handler for every fatal violation.
pub const FATAL_MESSAGE: &str = "Critical constraint violation. System halted.";

impl<P: Platform> ConstraintsManager<P> {
    /// Raw-id entry point. Ids outside the known set are logged like any other
    /// violation and never escalate.
    pub fn report_violation(&self, constraint_id: u32, message: &str) {
        match ConstraintId::from_raw(constraint_id) {
            Ok(id) => self.report(id, message),
            Err(UnknownConstraint(raw)) => self.log_violation(raw, message),
        }
    }

    /// Logs the violation, then halts if `id` is fatal. Does not return in
    /// that case.
    pub fn report(&self, id: ConstraintId, message: &str) {
        self.log_violation(id.as_raw(), message);
        if id.is_fatal() {
            self.escalate(id, FATAL_MESSAGE);
        }
    }

    fn log_violation(&self, raw: u32, message: &str) {
        self.platform()
            .log(LogLevel::Error, &format!("Violation ID 0x{raw:02X}: {message}"));
    }
}
