//! Runtime Constraint Validation for ASIC Firmware
//!
//! This crate checks operational parameters against fixed bounds and decides
//! what happens when one of them is out of policy. It is the only part of the
//! firmware with decision logic; bring-up, drivers and the application loop
//! live elsewhere and call into it.
//!
//! # Pipeline
//!
//! ```text
//! caller ──► validators / resource checker ──► reporter ──► escalation (-> !)
//!                     │                            │
//!               bounds registry              severity table
//! ```
//!
//! | Constraint | Id | Severity |
//! |------------|------|----------|
//! | Clock range | `0x01` | Fatal |
//! | RAM out of bounds | `0x02` | Fatal |
//! | Sensor timeout | `0x03` | Recoverable |
//! | Comm buffer full | `0x04` | Recoverable |
//!
//! # Modules
//!
//! - [`bounds`] - Static acceptable ranges, loaded once at init
//! - [`id`] - Constraint identifiers and their severity classification
//! - [`validate`] - Pure predicates producing [`Violation`] records
//! - [`resource`] - Critical resource dispatch and health probes
//! - [`platform`] - Capability trait for logging and halting
//! - [`manager`] - The validation API tying everything together
//!
//! # Quick Start
//!
//! ```ignore
//! use firmware_constraints::{ConstraintsManager, Platform, ResourceProbe};
//!
//! let manager = ConstraintsManager::new(MyBoard);
//! manager.init();
//!
//! if !manager.check_critical_resource(0x03) {
//!     // recoverable: decide locally
//! }
//!
//! // out of range: logs, escalates, never returns
//! manager.validate_clock_frequency(250_000_000);
//! ```

#![no_std]

extern crate alloc;

pub mod bounds;
mod escalate;
pub mod id;
pub mod manager;
pub mod platform;
mod report;
pub mod resource;
pub mod validate;

pub use bounds::{BoundsConfig, BoundsError, BoundsRegistry, ConstraintBounds};
pub use escalate::SystemState;
pub use id::{ConstraintId, Severity, UnknownConstraint};
pub use manager::ConstraintsManager;
pub use platform::{LogLevel, Platform};
pub use report::FATAL_MESSAGE;
pub use resource::{Health, Resource, ResourceProbe};
pub use validate::Violation;
