//! Validators
//!
//! Pure predicates, one per constraint kind. They only compare a value with the
//! registry and describe the failure; reporting is the caller's job (see
//! [`ConstraintsManager`](crate::ConstraintsManager)).

use alloc::format;
use alloc::string::String;

use crate::bounds::BoundsRegistry;
use crate::id::ConstraintId;

/// A constraint failure, built at the moment of failure and consumed by the
/// reporter in the same call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub id: ConstraintId,
    pub message: String,
}

impl Violation {
    pub fn new(id: ConstraintId, message: impl Into<String>) -> Self {
        Self {
            id,
            message: message.into(),
        }
    }
}

/// Clock frequency in Hz against the clock range.
pub fn check_clock_frequency(bounds: &BoundsRegistry, freq_hz: u32) -> Result<(), Violation> {
    let clock = bounds.clock();
    if clock.contains(freq_hz) {
        return Ok(());
    }
    Err(Violation::new(
        ConstraintId::ClockRange,
        format!(
            "Clock frequency {} Hz is out of bounds [{} - {}] Hz.",
            freq_hz,
            clock.min(),
            clock.max()
        ),
    ))
}

/// Memory address against the inclusive RAM window. Addresses are rendered as
/// 32-bit zero-padded hex.
pub fn check_ram_address(bounds: &BoundsRegistry, address: u32) -> Result<(), Violation> {
    let ram = bounds.ram();
    if ram.contains(address) {
        return Ok(());
    }
    Err(Violation::new(
        ConstraintId::RamOutOfBounds,
        format!(
            "Memory access 0x{:08X} is outside RAM range [0x{:08X} - 0x{:08X}].",
            address,
            ram.min(),
            ram.max()
        ),
    ))
}
