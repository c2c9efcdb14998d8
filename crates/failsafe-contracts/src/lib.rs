//! # failsafe-contracts
//!
//! Shared types and error contracts for the FAILSAFE fleet safety console.
//!
//! All crates in the workspace import from here. No business logic lives in
//! this crate, only data definitions and error types.

pub mod agent;
pub mod command;
pub mod error;
pub mod incident;
pub mod policy;
pub mod state;
