//! Critical Resources
//!
//! Resource ids share the numbering of [`ConstraintId`]: a resource is named
//! after the constraint its failure violates. Anything else is
//! [`Resource::Unrecognized`] and is never considered healthy.

use crate::id::ConstraintId;

/// A resource the health checker knows how to query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    /// External sensor link
    Sensor,

    /// Communication buffer
    CommBuffer,

    /// Id with no health query behind it
    Unrecognized(u32),
}

impl Resource {
    /// Every resource with a health query.
    pub const KNOWN: [Resource; 2] = [Self::Sensor, Self::CommBuffer];

    #[must_use]
    pub const fn from_raw(raw: u32) -> Self {
        match ConstraintId::from_raw(raw) {
            Ok(ConstraintId::SensorTimeout) => Self::Sensor,
            Ok(ConstraintId::CommBufferFull) => Self::CommBuffer,
            _ => Self::Unrecognized(raw),
        }
    }

    #[must_use]
    pub const fn as_raw(self) -> u32 {
        match self {
            Self::Sensor => ConstraintId::SensorTimeout.as_raw(),
            Self::CommBuffer => ConstraintId::CommBufferFull.as_raw(),
            Self::Unrecognized(raw) => raw,
        }
    }
}

/// Outcome of a health check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Health {
    Healthy,
    Unhealthy,
}

impl Health {
    #[must_use]
    pub const fn is_healthy(self) -> bool {
        matches!(self, Self::Healthy)
    }
}

/// Hardware health queries. Both default to "no problem detected", so a board
/// without the hardware reports the resource as healthy.
///
/// Implementations must not have side effects.
pub trait ResourceProbe {
    fn sensor_timed_out(&self) -> bool {
        false
    }

    fn comm_buffer_full(&self) -> bool {
        false
    }
}

impl<P: ResourceProbe + ?Sized> ResourceProbe for &P {
    fn sensor_timed_out(&self) -> bool {
        (**self).sensor_timed_out()
    }

    fn comm_buffer_full(&self) -> bool {
        (**self).comm_buffer_full()
    }
}
