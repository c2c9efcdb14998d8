//! # failsafe-core
//!
//! The safety-state core of the FAILSAFE console.
//!
//! This crate provides:
//! - The component traits (`AgentStore`, `IncidentSink`, `RiskPolicy`, `Clock`)
//! - The `SafetyCoordinator`, which owns the global state and runs the
//!   emergency-stop cascade and the manual-intervention audit policy
//!
//! ## Usage
//!
//! ```rust,ignore
//! use failsafe_core::{SafetyCoordinator, EMERGENCY_STOP_CONFIRMATION};
//!
//! let coordinator = SafetyCoordinator::new(registry, recorder);
//! coordinator.trigger_emergency_stop(EMERGENCY_STOP_CONFIRMATION, "Operator (Admin)")?;
//! ```

pub mod coordinator;
pub mod traits;

pub use coordinator::{SafetyCoordinator, EMERGENCY_STOP_CONFIRMATION, EMERGENCY_STOP_REASON};
