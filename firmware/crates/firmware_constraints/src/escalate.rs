//! Escalation Handler
//!
//! The only way out of [`SystemState::Operational`]. The transition is one-way
//! and latched: only the first fatal report logs at fatal severity. Every
//! escalation still ends in [`Platform::halt`], since a fatal report from an
//! interrupt that preempted the first one may be the only one to get there.

use core::sync::atomic::{AtomicBool, Ordering};

use crate::id::ConstraintId;
use crate::manager::ConstraintsManager;
use crate::platform::{LogLevel, Platform};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SystemState {
    Operational,
    Halted,
}

pub(crate) struct HaltLatch(AtomicBool);

impl HaltLatch {
    pub(crate) const fn new() -> Self {
        Self(AtomicBool::new(false))
    }

    /// `true` for exactly one caller, ever.
    pub(crate) fn trip(&self) -> bool {
        !self.0.swap(true, Ordering::AcqRel)
    }

    pub(crate) fn state(&self) -> SystemState {
        if self.0.load(Ordering::Acquire) {
            SystemState::Halted
        } else {
            SystemState::Operational
        }
    }
}

impl<P: Platform> ConstraintsManager<P> {
    /// Logs at fatal severity and hands control to the platform halt.
    pub fn escalate(&self, id: ConstraintId, message: &str) -> ! {
        if self.latch_trip() {
            self.platform().log(LogLevel::Fatal, message);
        }
        self.platform().halt(id, message)
    }
}
