//! Bounds Registry
//!
//! Acceptable ranges for every bounded quantity. The registry is built once,
//! either from the built-in defaults or from a [`BoundsConfig`], and is never
//! mutated afterwards.

use thiserror::Error;

/// Lowest acceptable system clock, 80 MHz.
pub const SYS_CLK_MIN_HZ: u32 = 80_000_000;

/// Highest acceptable system clock, 200 MHz.
pub const SYS_CLK_MAX_HZ: u32 = 200_000_000;

/// First byte of on-chip RAM.
pub const RAM_START_ADDR: u32 = 0x2000_0000;

/// On-chip RAM size, 128 KiB.
pub const RAM_SIZE_BYTES: u32 = 128 * 1024;

/// Inclusive `[min, max]` range for one quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConstraintBounds {
    min: u32,
    max: u32,
}

impl ConstraintBounds {
    pub const fn new(min: u32, max: u32) -> Result<Self, BoundsError> {
        if min > max {
            return Err(BoundsError::InvertedRange { min, max });
        }
        Ok(Self { min, max })
    }

    /// Inclusive window covering `size` bytes starting at `start`.
    pub const fn window(start: u32, size: u32) -> Result<Self, BoundsError> {
        if size == 0 {
            return Err(BoundsError::EmptyWindow { start });
        }
        match start.checked_add(size - 1) {
            Some(end) => Ok(Self {
                min: start,
                max: end,
            }),
            None => Err(BoundsError::WindowOverflow { start, size }),
        }
    }

    #[must_use]
    pub const fn min(&self) -> u32 {
        self.min
    }

    #[must_use]
    pub const fn max(&self) -> u32 {
        self.max
    }

    /// Both ends are inclusive.
    #[must_use]
    pub const fn contains(&self, value: u32) -> bool {
        self.min <= value && value <= self.max
    }
}

/// Errors rejecting a bounds configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BoundsError {
    #[error("range minimum {min} exceeds maximum {max}")]
    InvertedRange { min: u32, max: u32 },
    #[error("memory window at {start:#010x} has zero size")]
    EmptyWindow { start: u32 },
    #[error("memory window at {start:#010x} with size {size:#x} overflows the address space")]
    WindowOverflow { start: u32, size: u32 },
}

/// Raw bounds as they come out of compiled-in configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundsConfig {
    pub clock_min_hz: u32,
    pub clock_max_hz: u32,
    pub ram_start: u32,
    pub ram_size: u32,
}

impl Default for BoundsConfig {
    fn default() -> Self {
        Self {
            clock_min_hz: SYS_CLK_MIN_HZ,
            clock_max_hz: SYS_CLK_MAX_HZ,
            ram_start: RAM_START_ADDR,
            ram_size: RAM_SIZE_BYTES,
        }
    }
}

/// The validated, read-only set of bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundsRegistry {
    clock: ConstraintBounds,
    ram: ConstraintBounds,
}

impl BoundsRegistry {
    /// Built-in defaults. These are known-good, so no validation is needed.
    pub const DEFAULT: Self = Self {
        clock: ConstraintBounds {
            min: SYS_CLK_MIN_HZ,
            max: SYS_CLK_MAX_HZ,
        },
        ram: ConstraintBounds {
            min: RAM_START_ADDR,
            max: RAM_START_ADDR + (RAM_SIZE_BYTES - 1),
        },
    };

    pub fn from_config(config: &BoundsConfig) -> Result<Self, BoundsError> {
        Ok(Self {
            clock: ConstraintBounds::new(config.clock_min_hz, config.clock_max_hz)?,
            ram: ConstraintBounds::window(config.ram_start, config.ram_size)?,
        })
    }

    /// Clock frequency range in Hz.
    #[must_use]
    pub const fn clock(&self) -> ConstraintBounds {
        self.clock
    }

    /// Inclusive RAM address window.
    #[must_use]
    pub const fn ram(&self) -> ConstraintBounds {
        self.ram
    }
}

impl Default for BoundsRegistry {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_ram_window_is_inclusive() {
        let ram = BoundsRegistry::DEFAULT.ram();
        assert_eq!(ram.min(), 0x2000_0000);
        assert_eq!(ram.max(), 0x2001_FFFF);
        assert!(ram.contains(0x2000_0000));
        assert!(ram.contains(0x2001_FFFF));
        assert!(!ram.contains(0x1FFF_FFFF));
        assert!(!ram.contains(0x2002_0000));
    }

    #[test]
    fn default_config_matches_default_registry() {
        assert_eq!(
            BoundsRegistry::from_config(&BoundsConfig::default()),
            Ok(BoundsRegistry::DEFAULT)
        );
    }

    #[test]
    fn inverted_clock_range_is_rejected() {
        let config = BoundsConfig {
            clock_min_hz: 200,
            clock_max_hz: 100,
            ..BoundsConfig::default()
        };
        assert_eq!(
            BoundsRegistry::from_config(&config),
            Err(BoundsError::InvertedRange { min: 200, max: 100 })
        );
    }

    #[test]
    fn empty_window_is_rejected() {
        assert_eq!(
            ConstraintBounds::window(0x1000, 0),
            Err(BoundsError::EmptyWindow { start: 0x1000 })
        );
    }

    #[test]
    fn window_may_end_at_the_last_address() {
        let top = ConstraintBounds::window(0xFFFF_0000, 0x1_0000).unwrap();
        assert_eq!(top.max(), u32::MAX);
        assert_eq!(
            ConstraintBounds::window(0xFFFF_0000, 0x1_0001),
            Err(BoundsError::WindowOverflow {
                start: 0xFFFF_0000,
                size: 0x1_0001
            })
        );
    }

    #[test]
    fn single_point_range_is_valid() {
        let point = ConstraintBounds::new(7, 7).unwrap();
        assert!(point.contains(7));
        assert!(!point.contains(6));
        assert!(!point.contains(8));
    }
}
