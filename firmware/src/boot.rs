//! Boot sequence and application loop.
//!
//! Bring-up runs in three stages: system (clock and power), hardware
//! (peripherals), then the application loop. The constraint layer is consulted
//! after clock bring-up and again on every loop iteration.

use firmware_constraints::{ConstraintsManager, Platform, Resource, ResourceProbe};
use log::{debug, info, warn};

use crate::board::Board;

/// Outcome of one application loop iteration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Known resources that passed their health check
    pub healthy: usize,
    /// Known resources that failed their health check
    pub unhealthy: usize,
}

impl TickReport {
    pub fn all_healthy(&self) -> bool {
        self.unhealthy == 0
    }
}

/// Clock and power bring-up, then a check of the measured clock.
///
/// An out-of-range clock is fatal and does not return.
pub fn system_manager<P: Platform>(board: &dyn Board, constraints: &ConstraintsManager<P>) {
    board.early_init();
    let freq_hz = board.clock_frequency_hz();
    debug!("system clock measured at {} Hz", freq_hz);
    constraints.validate_clock_frequency(freq_hz);
    info!("system clock and power initialized");
}

pub fn hardware_manager(board: &dyn Board) {
    board.init_peripherals();
    info!("hardware peripherals initialized");
}

/// One pass of the application loop: every critical resource is checked and
/// the clock is validated again.
pub fn application_manager<P: Platform + ResourceProbe>(
    board: &dyn Board,
    constraints: &ConstraintsManager<P>,
) -> TickReport {
    let mut report = TickReport::default();
    for resource in Resource::KNOWN {
        if constraints.check_resource(resource).is_healthy() {
            report.healthy += 1;
        } else {
            report.unhealthy += 1;
        }
    }

    constraints.validate_clock_frequency(board.clock_frequency_hz());
    report
}

/// Brings the board up and runs the application loop for `ticks` iterations,
/// or forever when `ticks` is `None`.
pub fn run<P: Platform + ResourceProbe>(
    board: &dyn Board,
    constraints: &ConstraintsManager<P>,
    ticks: Option<u64>,
) {
    system_manager(board, constraints);
    hardware_manager(board);

    let mut tick: u64 = 0;
    while ticks.is_none_or(|limit| tick < limit) {
        let report = application_manager(board, constraints);
        if !report.all_healthy() {
            warn!(
                "tick {}: {} critical resource(s) unhealthy",
                tick, report.unhealthy
            );
        }
        board.wait_for_interrupt();
        tick = tick.wrapping_add(1);
    }
    info!("application loop finished after {} ticks", tick);
}
