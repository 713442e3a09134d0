//! Constraint Identifiers
//!
//! Every checkable constraint has a stable, small integer id shared by callers,
//! log lines and the escalation policy. The severity of each id is fixed here.

use core::fmt;

use thiserror::Error;

/// A named, checkable constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u32)]
pub enum ConstraintId {
    /// System clock outside its operating range
    ClockRange = 0x01,

    /// Memory access outside the RAM window
    RamOutOfBounds = 0x02,

    /// Sensor stopped answering
    SensorTimeout = 0x03,

    /// Communication buffer overflowing
    CommBufferFull = 0x04,
}

/// How a violation of a constraint is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    /// Logged, control returns to the caller
    Recoverable,

    /// Logged, then the system halts
    Fatal,
}

/// Raw id that does not name a known constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unknown constraint id {0:#04x}")]
pub struct UnknownConstraint(pub u32);

impl ConstraintId {
    /// All known identifiers, in id order.
    pub const ALL: [ConstraintId; 4] = [
        Self::ClockRange,
        Self::RamOutOfBounds,
        Self::SensorTimeout,
        Self::CommBufferFull,
    ];

    #[must_use]
    pub const fn as_raw(self) -> u32 {
        self as u32
    }

    pub const fn from_raw(raw: u32) -> Result<Self, UnknownConstraint> {
        match raw {
            0x01 => Ok(Self::ClockRange),
            0x02 => Ok(Self::RamOutOfBounds),
            0x03 => Ok(Self::SensorTimeout),
            0x04 => Ok(Self::CommBufferFull),
            other => Err(UnknownConstraint(other)),
        }
    }

    /// Severity classification. Exhaustive, so a new id cannot be added
    /// without deciding whether it halts.
    #[must_use]
    pub const fn severity(self) -> Severity {
        match self {
            Self::ClockRange | Self::RamOutOfBounds => Severity::Fatal,
            Self::SensorTimeout | Self::CommBufferFull => Severity::Recoverable,
        }
    }

    #[must_use]
    pub const fn is_fatal(self) -> bool {
        matches!(self.severity(), Severity::Fatal)
    }
}

impl TryFrom<u32> for ConstraintId {
    type Error = UnknownConstraint;

    fn try_from(raw: u32) -> Result<Self, Self::Error> {
        Self::from_raw(raw)
    }
}

impl From<ConstraintId> for u32 {
    fn from(id: ConstraintId) -> Self {
        id.as_raw()
    }
}

impl fmt::Display for ConstraintId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:02X}", self.as_raw())
    }
}

#[cfg(test)]
mod tests {
    use alloc::format;

    use super::*;

    #[test]
    fn raw_values_are_stable() {
        assert_eq!(ConstraintId::ClockRange.as_raw(), 0x01);
        assert_eq!(ConstraintId::RamOutOfBounds.as_raw(), 0x02);
        assert_eq!(ConstraintId::SensorTimeout.as_raw(), 0x03);
        assert_eq!(ConstraintId::CommBufferFull.as_raw(), 0x04);
    }

    #[test]
    fn from_raw_inverts_as_raw() {
        for id in ConstraintId::ALL {
            assert_eq!(ConstraintId::from_raw(id.as_raw()), Ok(id));
        }
    }

    #[test]
    fn unknown_ids_are_rejected() {
        assert_eq!(ConstraintId::try_from(0), Err(UnknownConstraint(0)));
        assert_eq!(ConstraintId::try_from(0xFF), Err(UnknownConstraint(0xFF)));
    }

    #[test]
    fn only_clock_and_ram_are_fatal() {
        assert!(ConstraintId::ClockRange.is_fatal());
        assert!(ConstraintId::RamOutOfBounds.is_fatal());
        assert_eq!(ConstraintId::SensorTimeout.severity(), Severity::Recoverable);
        assert_eq!(ConstraintId::CommBufferFull.severity(), Severity::Recoverable);
    }

    #[test]
    fn display_is_two_digit_hex() {
        assert_eq!(format!("{}", ConstraintId::ClockRange), "0x01");
        assert_eq!(format!("{}", UnknownConstraint(0xAB)), "unknown constraint id 0xab");
    }
}
