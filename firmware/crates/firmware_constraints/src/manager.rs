//! Validation API
//!
//! [`ConstraintsManager`] owns the injected platform, the bounds registry and
//! the halt latch. Validators and the resource checker route every failure
//! through [`ConstraintsManager::report`], so escalation policy is applied in
//! exactly one place.

use alloc::format;

use conquer_once::spin::OnceCell;

use crate::bounds::{BoundsConfig, BoundsRegistry};
use crate::escalate::{HaltLatch, SystemState};
use crate::id::ConstraintId;
use crate::platform::{LogLevel, Platform};
use crate::resource::{Health, Resource, ResourceProbe};
use crate::validate::{self, Violation};

/// Offset above the clock minimum probed by the init self-test.
const SELF_TEST_CLOCK_OFFSET_HZ: u32 = 1_000;

/// Runtime constraint checks for one board, bound to its [`Platform`].
pub struct ConstraintsManager<P> {
    platform: P,
    config: Option<BoundsConfig>,
    bounds: OnceCell<BoundsRegistry>,
    latch: HaltLatch,
}

impl<P: Platform> ConstraintsManager<P> {
    /// Manager using the built-in bounds.
    pub fn new(platform: P) -> Self {
        Self {
            platform,
            config: None,
            bounds: OnceCell::uninit(),
            latch: HaltLatch::new(),
        }
    }

    /// Manager that loads its bounds from `config` during [`init`](Self::init).
    pub fn with_config(platform: P, config: BoundsConfig) -> Self {
        Self {
            config: Some(config),
            ..Self::new(platform)
        }
    }

    /// Populates the bounds registry.
    ///
    /// Returns `false` when the configuration was rejected and the built-in
    /// defaults were used instead. That is only a warning; whether to keep
    /// running is the caller's decision.
    pub fn init(&self) -> bool {
        let (registry, loaded) = match &self.config {
            None => (BoundsRegistry::DEFAULT, true),
            Some(config) => match BoundsRegistry::from_config(config) {
                Ok(registry) => (registry, true),
                Err(err) => {
                    self.platform.log(
                        LogLevel::Warn,
                        &format!("Bounds configuration rejected ({err}); using built-in defaults."),
                    );
                    (BoundsRegistry::DEFAULT, false)
                }
            },
        };

        if self.bounds.try_init_once(|| registry).is_err() {
            self.platform.log(
                LogLevel::Warn,
                "Constraints module already initialized; keeping existing bounds.",
            );
        }

        self.platform
            .log(LogLevel::Info, "Constraints module initialized.");

        let bounds = self.bounds();
        let probe_hz = bounds.clock().min().saturating_add(SELF_TEST_CLOCK_OFFSET_HZ);
        if validate::check_clock_frequency(bounds, probe_hz).is_err() {
            self.platform.log(
                LogLevel::Warn,
                "Initial clock frequency might be out of range.",
            );
        }
        loaded
    }

    /// Active bounds. Before [`init`](Self::init) these are the defaults.
    pub fn bounds(&self) -> &BoundsRegistry {
        self.bounds.get().unwrap_or(&BoundsRegistry::DEFAULT)
    }

    pub fn is_initialized(&self) -> bool {
        self.bounds.is_initialized()
    }

    pub fn state(&self) -> SystemState {
        self.latch.state()
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    pub(crate) fn latch_trip(&self) -> bool {
        self.latch.trip()
    }

    /// `true` if `freq_hz` is inside the clock range. Out of range is fatal.
    pub fn validate_clock_frequency(&self, freq_hz: u32) -> bool {
        self.enforce(validate::check_clock_frequency(self.bounds(), freq_hz))
    }

    /// `true` if `address` is inside the RAM window. Outside is fatal.
    pub fn validate_ram_address(&self, address: u32) -> bool {
        self.enforce(validate::check_ram_address(self.bounds(), address))
    }

    fn enforce(&self, outcome: Result<(), Violation>) -> bool {
        match outcome {
            Ok(()) => true,
            Err(violation) => {
                self.report(violation.id, &violation.message);
                false
            }
        }
    }
}

impl<P: Platform + ResourceProbe> ConstraintsManager<P> {
    /// `true` if the resource named by `resource_id` is healthy.
    pub fn check_critical_resource(&self, resource_id: u32) -> bool {
        self.check_resource(Resource::from_raw(resource_id))
            .is_healthy()
    }

    pub fn check_resource(&self, resource: Resource) -> Health {
        match resource {
            Resource::Sensor => {
                if self.platform.sensor_timed_out() {
                    self.report(
                        ConstraintId::SensorTimeout,
                        "Sensor communication timed out.",
                    );
                    return Health::Unhealthy;
                }
                self.platform.log(LogLevel::Info, "Sensor check OK.");
            }
            Resource::CommBuffer => {
                if self.platform.comm_buffer_full() {
                    self.report(
                        ConstraintId::CommBufferFull,
                        "Communication buffer overflow.",
                    );
                    return Health::Unhealthy;
                }
                self.platform
                    .log(LogLevel::Info, "Communication buffer check OK.");
            }
            Resource::Unrecognized(raw) => {
                self.platform.log(
                    LogLevel::Warn,
                    &format!("Unknown resource ID 0x{raw:02X} for check."),
                );
                return Health::Unhealthy;
            }
        }
        Health::Healthy
    }
}
